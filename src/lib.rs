//! smt-batch: run the Boogie verifier over a collection of `.bpl` files and
//! collect the SMT-LIB prover logs in a mirrored output tree.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{BatchOptions, run_batch, write_report};
pub use app::config::ConfigOverrides;
pub use domain::{
    AppError, BatchConfig, BatchReport, FailurePolicy, FileOutcome, InvocationStatus,
    VerifierInvocation,
};
