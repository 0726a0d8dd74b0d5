//! Line classifier.
//!
//! A code-log script has no nesting at the grammar level: every line is
//! classified on its own, by prefix, with a fixed priority.  The first rule
//! that matches wins:
//!
//! 1. `set <name> <rest>`  → [`Stmt::Set`]
//! 2. `log …`              → [`Stmt::Log`]
//! 3. `if …`               → [`Stmt::IfOpen`]
//! 4. `]`                  → [`Stmt::BlockClose`]
//! 5. anything else        → [`Stmt::Other`]
//!
//! The classifier does not know whether a block is open.  A `log` line
//! written inside an `if` block is therefore still a [`Stmt::Log`] and runs
//! immediately; only [`Stmt::Other`] lines end up in a block body.

use std::sync::LazyLock;

use regex::Regex;

static SET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^set (\w+) (.+)").expect("set-line pattern"));

/// One classified script line.  Borrows from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt<'a> {
    /// `set <name> <rest>`; `rest` has surrounding whitespace trimmed.
    Set { name: &'a str, rest: &'a str },
    /// `log <text>`; `text` is everything after the `log ` prefix.
    Log(&'a str),
    /// `if <payload>`; `payload` is everything after the `if ` prefix.
    IfOpen(&'a str),
    /// A line that is exactly `]`.
    BlockClose,
    /// Anything else, verbatim.
    Other(&'a str),
}

impl Stmt<'_> {
    /// Short name of the statement kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Stmt::Set { .. } => "set",
            Stmt::Log(_) => "log",
            Stmt::IfOpen(_) => "if",
            Stmt::BlockClose => "close",
            Stmt::Other(_) => "other",
        }
    }
}

/// Classify one already-trimmed line.
pub fn classify(line: &str) -> Stmt<'_> {
    if let Some(caps) = SET_RE.captures(line) {
        if let (Some(name), Some(rest)) = (caps.get(1), caps.get(2)) {
            let rest = rest.as_str().trim();
            // `set x   ` trims down to nothing; treat it like the regex miss.
            if !rest.is_empty() {
                return Stmt::Set { name: name.as_str(), rest };
            }
        }
    }
    if let Some(text) = line.strip_prefix("log ") {
        return Stmt::Log(text);
    }
    if let Some(payload) = line.strip_prefix("if ") {
        return Stmt::IfOpen(payload);
    }
    if line == "]" {
        return Stmt::BlockClose;
    }
    Stmt::Other(line)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
