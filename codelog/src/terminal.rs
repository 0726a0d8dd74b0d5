//! Terminal rendering: crossterm-backed output of interpreter events.
//!
//! The interpreter only produces semantic [`Output`] events.  This module
//! decides how they look: an error report is split into its marker,
//! timestamp and message, and each part gets its own [`Emphasis`].  With
//! colour disabled every part is written as plain text.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, ContentStyle, Print, ResetColor, SetStyle},
};

use crate::report::{Report, MARKER};
use crate::script::Output;

// ── Emphasis → crossterm style ────────────────────────────────────────────────

/// Visual weight of a piece of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// Ordinary text.
    Normal,
    /// Draws the eye: the `ERROR` marker.
    Strong,
    /// Fades into the background: the `[from HH:MM:SS]` stamp.
    Muted,
}

/// Map an [`Emphasis`] to a crossterm [`ContentStyle`].
pub fn emphasis_style(emphasis: Emphasis) -> ContentStyle {
    let mut style = ContentStyle::new();
    style.foreground_color = match emphasis {
        Emphasis::Normal => None,
        Emphasis::Strong => Some(Color::Red),
        Emphasis::Muted => Some(Color::DarkGrey),
    };
    style
}

// ── Terminal ──────────────────────────────────────────────────────────────────

/// Writes interpreter output to any [`Write`] sink.
pub struct Terminal<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Terminal<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Returns `true` if ANSI styling is emitted.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Write `text` with `emphasis`, or as plain text when colour is off.
    pub fn write_styled(&mut self, text: &str, emphasis: Emphasis) -> io::Result<()> {
        if self.color && emphasis != Emphasis::Normal {
            queue!(self.out, SetStyle(emphasis_style(emphasis)), Print(text), ResetColor)
        } else {
            queue!(self.out, Print(text))
        }
    }

    /// Render one event as a full line.
    pub fn render(&mut self, output: &Output) -> io::Result<()> {
        match output {
            Output::Error(report) => self.render_report(report)?,
            other => self.write_styled(&other.plain(), Emphasis::Normal)?,
        }
        queue!(self.out, Print("\n"))
    }

    /// Render a batch of events.
    pub fn render_all<'a>(&mut self, outputs: impl IntoIterator<Item = &'a Output>) -> io::Result<()> {
        for output in outputs {
            self.render(output)?;
        }
        Ok(())
    }

    fn render_report(&mut self, report: &Report) -> io::Result<()> {
        self.write_styled(MARKER, Emphasis::Strong)?;
        self.write_styled(" ", Emphasis::Normal)?;
        self.write_styled(&report.stamp(), Emphasis::Muted)?;
        self.write_styled(" ", Emphasis::Normal)?;
        self.write_styled(&report.message(), Emphasis::Normal)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consume the terminal and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
