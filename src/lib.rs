pub mod engine;
pub mod errors;
pub mod input;
pub mod output;

use errors::WaitError;
use input::{has_port_separator, Command, Input};
use log::{info, warn};
use output::Reporter;
use std::io::Write;

/// Runs one invocation: resolve the command line, warn about a malformed
/// target, make the single attempt and report it.
///
/// Informational output goes to `out`, the malformed target warning to `err`.
/// Failures are returned for the caller to print and map to an exit status.
pub async fn run<W: Write, E: Write>(input: &Input, out: W, err: E) -> Result<(), WaitError> {
    let mut reporter = Reporter::new(out, err, input.quiet);

    let target = match input.resolve()? {
        Command::Help => {
            if let Err(e) = reporter.help() {
                warn!("could not write help: {}", e);
            }
            return Ok(());
        }
        Command::Wait(target) => target,
    };

    if !has_port_separator(&target) {
        if let Err(e) = reporter.malformed_target() {
            warn!("could not write warning: {}", e);
        }
    }

    engine::attempt(&target, input.timeout, &mut reporter).await?;
    info!("{} reachable", target);

    if let Err(e) = reporter.up(&target) {
        warn!("could not write status line: {}", e);
    }
    Ok(())
}
