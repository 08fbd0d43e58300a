//! Source positions carried on every AST node.
//!
//! `Position` is what diagnostics print (`file:line:col: message`, see the
//! host's CLI contract).

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A 1-based line/column location within a named source file.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub file: Arc<PathBuf>,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: Arc<PathBuf>, line: u32, column: u32) -> Self {
        Self { file, line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}
