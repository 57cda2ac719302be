//! Command handlers for the `leia` CLI.
//!
//! Each submodule implements one command. Shared pieces (the error type
//! and `read_file`) live here in the module root.

mod check;
mod highlight;
mod lex;

pub use check::{check_file, render_diagnostics};
pub use highlight::{highlight_file, language_for, render_highlight, HighlightFormat};
pub use lex::{lex_file, render_tokens};

use std::io;

/// Errors a command reports before exiting with status 1.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot find file '{path}'")]
    NotFound { path: String },
    #[error("permission denied reading '{path}'")]
    PermissionDenied { path: String },
    #[error("'{path}' contains invalid UTF-8 data")]
    InvalidUtf8 { path: String },
    #[error("no registered language highlights '{path}'")]
    UnknownLanguage { path: String },
    #[error("error reading '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("cannot encode output as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot write diagnostics: {0}")]
    Render(#[source] io::Error),
}

/// Read a source file, mapping I/O failures to user-facing errors.
pub fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| {
        let path = path.to_owned();
        match e.kind() {
            io::ErrorKind::NotFound => CliError::NotFound { path },
            io::ErrorKind::PermissionDenied => CliError::PermissionDenied { path },
            io::ErrorKind::InvalidData => CliError::InvalidUtf8 { path },
            _ => CliError::Read { path, source: e },
        }
    })
}
