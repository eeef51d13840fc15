pub mod config;
pub mod error;
pub mod invocation;
pub mod layout;
pub mod report;

pub use config::{BatchConfig, FailurePolicy, LayoutConfig, RunSettings, VerifierConfig};
pub use error::AppError;
pub use invocation::VerifierInvocation;
pub use layout::{Group, SourceFile};
pub use report::{BatchReport, FileOutcome, InvocationStatus};
