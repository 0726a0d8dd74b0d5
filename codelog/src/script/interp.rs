//! Code-log interpreter driver.
//!
//! The [`Interpreter`] owns all state for one run (the variable store and
//! the block evaluator) and consumes a script one line at a time.  It never
//! prints: every observable effect is queued as an [`Output`] event in
//! [`Interpreter::output`] and rendered by the caller.

use tracing::{debug, warn};

use super::{
    block::{Block, Closed, Condition},
    expand::expand,
    stmt::{classify, Stmt},
    value::strip_quotes,
};
use crate::clock::Clock;
use crate::error::{ErrorEvent, ScriptError};
use crate::report::{report, Report};
use crate::var::VarStore;

// ── Output ────────────────────────────────────────────────────────────────────

/// One observable effect of running a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// A successfully interpolated `log` message.
    Line(String),
    /// A satisfied condition, printed before the block body.
    ConditionMet { var: String },
    /// A recoverable error report.
    Error(Report),
}

impl Output {
    /// The line as it appears without colour.
    pub fn plain(&self) -> String {
        match self {
            Output::Line(text) => text.clone(),
            Output::ConditionMet { var } => {
                format!("Condition met for {var}: executing block.")
            }
            Output::Error(report) => report.to_string(),
        }
    }
}

// ── Interpreter ───────────────────────────────────────────────────────────────

/// A single code-log run.
pub struct Interpreter<'c> {
    vars: VarStore,
    block: Block,
    clock: &'c dyn Clock,
    /// 1-based number of the last line fed.
    line_no: usize,
    /// Events produced so far; drain with [`Interpreter::take_output`].
    pub output: Vec<Output>,
}

impl<'c> Interpreter<'c> {
    pub fn new(clock: &'c dyn Clock) -> Self {
        Self {
            vars: VarStore::new(),
            block: Block::default(),
            clock,
            line_no: 0,
            output: Vec::new(),
        }
    }

    /// The variable store.
    pub fn vars(&self) -> &VarStore {
        &self.vars
    }

    /// Returns `true` while an `if` block is open.
    pub fn in_block(&self) -> bool {
        self.block.is_collecting()
    }

    /// Number of lines fed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Process one raw script line.
    ///
    /// Returns an error only for a malformed `if` condition, after which the
    /// run must stop.
    pub fn feed_line(&mut self, raw: &str) -> Result<(), ScriptError> {
        self.line_no += 1;
        let line = raw.trim();
        let stmt = classify(line);
        debug!(line = self.line_no, kind = stmt.kind(), "classified");

        match stmt {
            Stmt::Other(text) => {
                if self.block.is_collecting() {
                    self.block.push(text);
                }
            }
            Stmt::Set { name, rest } => self.vars.set(name, rest),
            Stmt::Log(text) => self.log(text),
            Stmt::IfOpen(payload) => {
                let Some(cond) = Condition::parse(payload) else {
                    warn!(line = self.line_no, payload, "malformed condition");
                    return Err(ScriptError::MalformedCondition {
                        line: self.line_no,
                        payload: payload.to_owned(),
                    });
                };
                if self.block.is_collecting() {
                    debug!(line = self.line_no, "reopening block; previous body dropped");
                }
                self.block.open(cond);
            }
            Stmt::BlockClose => self.close_block(),
        }
        Ok(())
    }

    /// Feed every line of `lines`, stopping at the first fatal error.
    pub fn run_lines<I, S>(&mut self, lines: I) -> Result<(), ScriptError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.feed_line(line.as_ref())?;
        }
        self.finish();
        Ok(())
    }

    /// Run a whole script held in memory.
    pub fn run_str(&mut self, src: &str) -> Result<(), ScriptError> {
        self.run_lines(src.lines())
    }

    /// Signal end of input.  An unterminated block is discarded silently.
    pub fn finish(&mut self) {
        if let Some(block) = self.block.abandon() {
            debug!(
                var = %block.cond.var,
                body = block.body.len(),
                "end of input inside block; body discarded"
            );
        }
    }

    /// Drain queued output events.
    pub fn take_output(&mut self) -> Vec<Output> {
        std::mem::take(&mut self.output)
    }

    /// Queued output rendered without colour.
    pub fn plain_output(&self) -> Vec<String> {
        self.output.iter().map(Output::plain).collect()
    }

    // ── internals ─────────────────────────────────────────────────────────

    /// Interpolate a `log` message and queue the result (or its error).
    fn log(&mut self, text: &str) {
        let message = strip_quotes(text.trim());
        match expand(message, &self.vars) {
            Ok(line) => self.output.push(Output::Line(line)),
            Err(event) => self.error(event),
        }
    }

    fn close_block(&mut self) {
        match self.block.close(&self.vars) {
            Closed::NoBlock => debug!(line = self.line_no, "`]` outside a block ignored"),
            Closed::Undefined(event) => self.error(event),
            Closed::NotMet => {}
            Closed::Met { var, logs } => {
                self.output.push(Output::ConditionMet { var });
                for text in logs {
                    self.log(&text);
                }
            }
        }
    }

    fn error(&mut self, event: ErrorEvent) {
        self.output.push(Output::Error(report(event, self.clock)));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
