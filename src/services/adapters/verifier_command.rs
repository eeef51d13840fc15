use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::domain::{InvocationStatus, VerifierInvocation};
use crate::ports::Verifier;

/// Runs the verifier as a child process and waits for it to exit.
///
/// Stdout is inherited. Stderr is inherited too unless `capture_stderr` is
/// set, in which case it is collected into the failure status and then
/// echoed to our own stderr, so the verifier's messages stay visible.
#[derive(Debug, Clone)]
pub struct CommandVerifier {
    capture_stderr: bool,
}

impl CommandVerifier {
    pub fn new(capture_stderr: bool) -> Self {
        Self { capture_stderr }
    }
}

impl Verifier for CommandVerifier {
    fn run(&self, invocation: &VerifierInvocation) -> InvocationStatus {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).stdout(Stdio::inherit());
        command.stderr(if self.capture_stderr { Stdio::piped() } else { Stdio::inherit() });

        let output = match command.output() {
            Ok(output) => output,
            Err(e) => return InvocationStatus::SpawnFailed { reason: e.to_string() },
        };

        if self.capture_stderr && !output.stderr.is_empty() {
            let _ = io::stderr().write_all(&output.stderr);
        }

        let stderr = self
            .capture_stderr
            .then(|| String::from_utf8_lossy(&output.stderr).trim().to_string())
            .filter(|s| !s.is_empty());

        if output.status.success() {
            InvocationStatus::Succeeded
        } else {
            InvocationStatus::Failed { exit_code: output.status.code(), stderr }
        }
    }
}
