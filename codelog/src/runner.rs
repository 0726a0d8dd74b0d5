//! Script file runner.
//!
//! Opens a `.prc` file, streams its lines through an [`Interpreter`] and
//! renders output as it is produced, so everything printed before a fatal
//! error still reaches the terminal.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use tracing::info;

use crate::clock::Clock;
use crate::config::Settings;
use crate::error::RunError;
use crate::script::{Interpreter, Output};
use crate::terminal::Terminal;

/// Counts from a completed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the script.
    pub lines: usize,
    /// Lines written to the output.
    pub printed: usize,
    /// How many of those were error reports.
    pub errors: usize,
}

/// Run the script named in `settings`, writing output to `out`.
pub fn run_file<W: Write>(
    settings: &Settings,
    clock: &dyn Clock,
    out: W,
) -> Result<RunSummary, RunError> {
    let path = settings.script.as_path();
    settings.check_extension(path)?;
    let file = File::open(path).map_err(|source| RunError::Io {
        path: path.to_owned(),
        source,
    })?;
    info!(path = %path.display(), "running script");

    let mut term = Terminal::new(out, settings.color);
    let result = run_reader(BufReader::new(file), clock, &mut term);
    term.flush().map_err(RunError::Output)?;
    let summary = result?;
    info!(
        lines = summary.lines,
        printed = summary.printed,
        errors = summary.errors,
        "script finished"
    );
    Ok(summary)
}

/// Run a script read from `reader`, rendering to `term` line by line.
pub fn run_reader<R: BufRead, W: Write>(
    reader: R,
    clock: &dyn Clock,
    term: &mut Terminal<W>,
) -> Result<RunSummary, RunError> {
    let mut interp = Interpreter::new(clock);
    let mut summary = RunSummary::default();

    for line in reader.lines() {
        let line = line.map_err(RunError::Read)?;
        summary.lines += 1;
        let fed = interp.feed_line(&line);
        flush_output(&mut interp, term, &mut summary)?;
        fed?;
    }
    interp.finish();
    flush_output(&mut interp, term, &mut summary)?;
    Ok(summary)
}

fn flush_output<W: Write>(
    interp: &mut Interpreter<'_>,
    term: &mut Terminal<W>,
    summary: &mut RunSummary,
) -> Result<(), RunError> {
    for output in interp.take_output() {
        if matches!(output, Output::Error(_)) {
            summary.errors += 1;
        }
        summary.printed += 1;
        term.render(&output).map_err(RunError::Output)?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
