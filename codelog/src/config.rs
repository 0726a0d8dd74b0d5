//! Run settings resolved from the command line and the environment.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use crate::cli::{CliArgs, ColorChoice};
use crate::error::RunError;

/// The only script extension accepted.
pub const SCRIPT_EXTENSION: &str = "prc";

/// Environment variable holding the log filter (falls back to `RUST_LOG`).
pub const LOG_ENV: &str = "CODELOG_LOG";

/// Everything a run needs to know beyond the script itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub script: PathBuf,
    /// Emit ANSI colour in error reports.
    pub color: bool,
    /// Required script file extension, without the dot.
    pub extension: String,
    /// Default log level when neither [`LOG_ENV`] nor `RUST_LOG` is set.
    pub log_level: &'static str,
}

impl Settings {
    /// Resolve settings from parsed arguments and the process environment.
    pub fn from_args(args: &CliArgs) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let is_tty = std::io::stdout().is_terminal();
        Self {
            script: args.script.clone(),
            color: resolve_color(args.color, no_color, is_tty),
            extension: SCRIPT_EXTENSION.to_owned(),
            log_level: if args.verbose { "debug" } else { "warn" },
        }
    }

    /// Settings for running `script` with no colour.
    pub fn plain(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            color: false,
            extension: SCRIPT_EXTENSION.to_owned(),
            log_level: "warn",
        }
    }

    /// Reject scripts whose name does not end in `.<extension>`.
    pub fn check_extension(&self, path: &Path) -> Result<(), RunError> {
        let ok = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(&format!(".{}", self.extension)));
        if ok {
            Ok(())
        } else {
            Err(RunError::UnsupportedExtension(self.extension.clone()))
        }
    }
}

/// Decide whether to colour output.
pub fn resolve_color(choice: ColorChoice, no_color: bool, is_tty: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_tty && !no_color,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
