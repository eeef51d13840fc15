use crate::domain::{InvocationStatus, VerifierInvocation};

/// Port for running the external verifier.
pub trait Verifier {
    /// Run one invocation to completion.
    ///
    /// Never fails: a process that cannot be started is reported as
    /// `InvocationStatus::SpawnFailed` so the caller's failure policy decides.
    fn run(&self, invocation: &VerifierInvocation) -> InvocationStatus;
}
