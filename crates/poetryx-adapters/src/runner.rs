//! Blocking process runner for the external package manager.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use poetryx_core::{
    application::ports::{CommandOutput, CommandRunner},
    error::{CoreError, CoreResult},
};

/// Production [`CommandRunner`] built on `std::process::Command`.
///
/// Invocations block until the child exits; there is no timeout and no
/// cancellation path.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &Path, args: &[String]) -> CoreResult<CommandOutput> {
        debug!(program = %program.display(), ?args, "spawning external tool");
        let output = Command::new(program).args(args).output().map_err(|e| {
            CoreError::ExternalTool {
                command: args.first().cloned().unwrap_or_default(),
                status: None,
                stderr: format!("failed to spawn {}: {e}", program.display()),
            }
        })?;

        Ok(CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_and_zero_status() {
        let runner = SystemCommandRunner::new();
        let output = runner
            .run(Path::new("/bin/sh"), &["-c".into(), "echo hi".into()])
            .unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "hi");
    }

    #[test]
    fn reports_nonzero_exit_code() {
        let runner = SystemCommandRunner::new();
        let output = runner
            .run(Path::new("/bin/sh"), &["-c".into(), "exit 3".into()])
            .unwrap();
        assert!(!output.success());
        assert_eq!(output.status, Some(3));
    }

    #[test]
    fn spawn_failure_is_external_tool_error() {
        let runner = SystemCommandRunner::new();
        let err = runner
            .run(Path::new("/nonexistent/binary"), &["new".into()])
            .unwrap_err();
        assert!(matches!(err, CoreError::ExternalTool { status: None, .. }));
    }
}
