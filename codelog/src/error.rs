//! Error types.
//!
//! [`ErrorEvent`] is a recoverable, per-line diagnostic: it is reported and
//! execution continues.  [`ScriptError`] ends the run.  [`RunError`] wraps
//! everything that can go wrong around a script file.

use std::path::PathBuf;

/// A recoverable runtime diagnostic.
///
/// Produced by interpolation and condition evaluation, consumed by
/// [`crate::report::report`].  Never stored.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorEvent {
    #[error("ERROR: Variable '{0}' does not exist.")]
    UndefinedVariable(String),
}

impl ErrorEvent {
    /// The variable name that triggered the failure.
    pub fn subject(&self) -> &str {
        match self {
            ErrorEvent::UndefinedVariable(name) => name,
        }
    }
}

/// A structural script error that stops the run.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: malformed condition `{payload}` (expected `(name) is (value)`)")]
    MalformedCondition { line: usize, payload: String },
}

/// Errors from running a script file.
#[derive(thiserror::Error, Debug)]
pub enum RunError {
    /// The file does not carry the required extension; nothing was run.
    #[error("Error: Only .{0} files are supported.")]
    UnsupportedExtension(String),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read script: {0}")]
    Read(#[source] std::io::Error),

    #[error("cannot write output: {0}")]
    Output(#[source] std::io::Error),

    #[error(transparent)]
    Script(#[from] ScriptError),
}
