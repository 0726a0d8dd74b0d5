//! Conditional blocks: `if (name) is (value)` … `]`.
//!
//! [`Block`] is a two-state machine.  While idle it waits for an `if`
//! line; while collecting it accumulates body lines until the closing `]`,
//! at which point the condition is evaluated against the variable store.

use std::sync::LazyLock;

use regex::Regex;

use super::value::strip_quotes;
use crate::error::ErrorEvent;
use crate::var::VarStore;

static CONDITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(\s*(\w+)\s*\)\s*is\s*\(\s*(.+?)\s*\)").expect("condition pattern")
});

/// The equality test guarding a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub var: String,
    /// Target value, quotes stripped.
    pub value: String,
}

impl Condition {
    /// Parse the payload of an `if` line.  Returns `None` if it is not of
    /// the form `(name) is (value)`.
    pub fn parse(payload: &str) -> Option<Self> {
        let caps = CONDITION_RE.captures(payload.trim())?;
        Some(Self {
            var: caps.get(1)?.as_str().to_owned(),
            value: strip_quotes(caps.get(2)?.as_str()).to_owned(),
        })
    }
}

/// An open block: its condition and the body collected so far.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfBlock {
    pub cond: Condition,
    pub body: Vec<String>,
}

/// Block evaluator state.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Block {
    #[default]
    Idle,
    Collecting(IfBlock),
}

/// What happened when a block was closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Closed {
    /// `]` with no open block.
    NoBlock,
    /// The condition variable does not exist.
    Undefined(ErrorEvent),
    /// The condition held.  `logs` are the body's `log` messages with the
    /// prefix removed, in order.
    Met { var: String, logs: Vec<String> },
    /// The condition variable exists but its value differs.
    NotMet,
}

impl Block {
    pub fn is_collecting(&self) -> bool {
        matches!(self, Block::Collecting(_))
    }

    /// Start collecting under `cond`.  An already-open block is replaced
    /// and its body dropped; blocks do not nest.
    pub fn open(&mut self, cond: Condition) {
        *self = Block::Collecting(IfBlock { cond, body: Vec::new() });
    }

    /// Append a body line.  Ignored while idle.
    pub fn push(&mut self, line: &str) {
        if let Block::Collecting(block) = self {
            block.body.push(line.to_owned());
        }
    }

    /// Number of body lines collected so far.
    pub fn body_len(&self) -> usize {
        match self {
            Block::Idle => 0,
            Block::Collecting(block) => block.body.len(),
        }
    }

    /// Close the block and evaluate its condition against `vars`.
    ///
    /// The block always returns to [`Block::Idle`].
    pub fn close(&mut self, vars: &VarStore) -> Closed {
        let Block::Collecting(block) = std::mem::take(self) else {
            return Closed::NoBlock;
        };
        let IfBlock { cond, body } = block;

        match vars.get(&cond.var) {
            None => Closed::Undefined(ErrorEvent::UndefinedVariable(cond.var)),
            Some(var) if var.value == cond.value => Closed::Met {
                logs: body
                    .iter()
                    .filter_map(|line| line.strip_prefix("log "))
                    .map(str::to_owned)
                    .collect(),
                var: cond.var,
            },
            Some(_) => Closed::NotMet,
        }
    }

    /// Drop any open block without evaluating it.  Returns the discarded
    /// block, if there was one.
    pub fn abandon(&mut self) -> Option<IfBlock> {
        match std::mem::take(self) {
            Block::Idle => None,
            Block::Collecting(block) => Some(block),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
