//! Filesystem glue for the `snek` binary: resolves a dotted module path to
//! a `.snek` file and hands its text to a front-end parser.
//!
//! The surface lexer/parser that turns that text into `snek_syntax::Stmt`
//! trees is explicitly out of scope for this workspace (spec.md §1); this
//! crate only owns the parts the CLI itself is responsible for — file I/O
//! and the module-path-to-filesystem-path mapping (spec.md §6).

use snek_eval::host::ModuleLoader;
use snek_syntax::{Position, Stmt};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Parses already-loaded source text into a statement tree. Supplied by an
/// external front-end; this workspace does not implement one.
pub trait FrontEnd {
    fn parse(&self, source: &str, path: &Path) -> snek_eval::Result<Vec<Stmt>>;
}

/// Loads `.snek` files from disk for [`snek_eval::host::Interpreter`]'s
/// module cache, using the module-path-to-filesystem mapping from spec.md
/// §6 (dots become path separators, `.snek` is appended).
pub struct FsLoader;

impl ModuleLoader for FsLoader {
    fn load(&self, path: &Path) -> snek_eval::Result<Vec<Stmt>> {
        let source = std::fs::read_to_string(path).map_err(|err| {
            snek_eval::Diagnostic::import(
                Position::new(Arc::new(path.to_path_buf()), 1, 1),
                format!("{}: {err}", path.display()),
            )
        })?;
        no_frontend_configured(&source, path)
    }
}

/// Reads the entry-point file named on the command line. Like
/// [`FsLoader::load`], parsing the text it reads is left to an external
/// front-end.
pub fn load_entry(path: &Path) -> std::io::Result<Vec<Stmt>> {
    let source = std::fs::read_to_string(path)?;
    match no_frontend_configured(&source, path) {
        Ok(body) => Ok(body),
        Err(diagnostic) => Err(std::io::Error::other(diagnostic.message)),
    }
}

fn no_frontend_configured(_source: &str, path: &Path) -> snek_eval::Result<Vec<Stmt>> {
    Err(snek_eval::Diagnostic::import(
        Position::new(Arc::new(path.to_path_buf()), 1, 1),
        "no front-end parser is wired into this build; `snek-cli` only supplies \
         file I/O and module-path resolution around `snek-eval`'s runtime core",
    ))
}
