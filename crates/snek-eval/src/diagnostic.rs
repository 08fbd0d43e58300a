//! The single error/diagnostic kind threaded through evaluation.
//!
//! `spec.md` §7 specifies one `Error{position, message}` pair, never thrown,
//! always returned. `Diagnostic` wraps that pair with a `miette::Diagnostic`
//! impl (stable error codes, source-span labels) so the CLI can render
//! `file:line:col: message` or a fancy report, grounded on the
//! `Diagnostic`/`DiagnosticKind` split in `cadenza-eval`'s diagnostic module.

use snek_syntax::Position;
use std::fmt;
use thiserror::Error;

/// The taxonomy named in the error-handling design: lookup, type,
/// arithmetic, import, domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lookup,
    Type,
    Arithmetic,
    Import,
    Domain,
}

impl DiagnosticKind {
    pub fn code(self) -> &'static str {
        match self {
            DiagnosticKind::Lookup => "E0001",
            DiagnosticKind::Type => "E0002",
            DiagnosticKind::Arithmetic => "E0003",
            DiagnosticKind::Import => "E0004",
            DiagnosticKind::Domain => "E0005",
        }
    }
}

/// A runtime error: a position and a message, per spec.md §3's `Error`.
#[derive(Clone, Debug, Error)]
#[error("{position}: {message}")]
pub struct Diagnostic {
    pub position: Position,
    pub message: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, position: Position, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
            kind,
        }
    }

    pub fn lookup(position: Position, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Lookup, position, message)
    }

    pub fn type_error(position: Position, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Type, position, message)
    }

    pub fn arithmetic(position: Position, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Arithmetic, position, message)
    }

    pub fn import(position: Position, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Import, position, message)
    }

    pub fn domain(position: Position, message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Domain, position, message)
    }
}

impl miette::Diagnostic for Diagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.kind.code()))
    }
}

pub type Result<T> = std::result::Result<T, Diagnostic>;
