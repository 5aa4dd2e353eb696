use std::io;
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use tracing::debug;

/// Run a docker invocation in the foreground, inheriting stdio, and wait for it.
///
/// Interrupts reach the child through the terminal's foreground process group,
/// so no signal forwarding is done here.
pub fn run_foreground(mut cmd: Command) -> Result<ExitStatus> {
    let program = cmd.get_program().to_string_lossy().to_string();
    debug!(program = %program, "spawning");
    let status = cmd
        .status()
        .with_context(|| format!("failed to start {program}"))?;
    debug!(?status, "child finished");
    Ok(status)
}

/// Exit code for a failure to run the child at all.
pub fn exit_code_for_spawn_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<io::Error>() {
        Some(ioe) => crate::exit_code_for_io_error(ioe),
        None => 1,
    }
}
