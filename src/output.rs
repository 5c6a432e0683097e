use crate::input::Input;
use clap::CommandFactory;
use std::io::{self, Write};

pub const MALFORMED_TARGET_WARNING: &str =
    "The argument is not valid, please make sure you are calling waitfor with a valid argument: 'host:port'";

/// Writes the user-facing lines of a run.
///
/// Status lines go to `out` and are dropped when `quiet` is set. Warnings go
/// to `err` and help to `out` either way.
pub struct Reporter<W: Write, E: Write> {
    out: W,
    err: E,
    quiet: bool,
}

impl<W: Write, E: Write> Reporter<W, E> {
    pub fn new(out: W, err: E, quiet: bool) -> Self {
        Self { out, err, quiet }
    }

    pub fn waiting(&mut self, target: &str, timeout_seconds: u64) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if timeout_seconds > 0 {
            writeln!(
                self.out,
                "Waiting for {} to start within {} seconds.",
                target, timeout_seconds
            )
        } else {
            writeln!(self.out, "Waiting for {} indefinitely ...", target)
        }
    }

    pub fn up(&mut self, target: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{} is up and running.", target)
    }

    pub fn malformed_target(&mut self) -> io::Result<()> {
        writeln!(self.err, "{}", MALFORMED_TARGET_WARNING)
    }

    pub fn help(&mut self) -> io::Result<()> {
        write!(self.out, "{}", help_text())
    }

    #[cfg(test)]
    pub(crate) fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}

pub fn help_text() -> String {
    Input::command().render_help().to_string()
}
