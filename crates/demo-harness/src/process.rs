use crate::{HarnessError, InvocationArgs, ProcessResult, Result};
use std::process::Stdio;

/// Runs the demo to completion and captures both streams in full.
///
/// There is no timeout: a child that never exits blocks the caller.
pub fn invoke(inv: &InvocationArgs) -> Result<ProcessResult> {
    tracing::debug!(program = %inv.program.display(), args = ?inv.args, "launching demo");
    let output = inv
        .command()
        .stdin(Stdio::null())
        .output()
        .map_err(|source| HarnessError::Spawn {
            program: inv.program.clone(),
            source,
        })?;
    let result = ProcessResult {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };
    tracing::debug!(
        exit_code = ?result.exit_code,
        stdout_len = result.stdout.len(),
        stderr_len = result.stderr.len(),
        "demo finished"
    );
    Ok(result)
}
