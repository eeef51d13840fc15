use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::VerifierConfig;

/// A single verifier command line, built without a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifierInvocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl VerifierInvocation {
    /// `<program> <mode flag> <source> -proverLog:<target> -timeLimit:<secs>`
    pub fn new(config: &VerifierConfig, source: &Path, target: &Path) -> Self {
        let mut prover_log = OsString::from("-proverLog:");
        prover_log.push(target.as_os_str());

        let args = vec![
            OsString::from(&config.mode_flag),
            source.as_os_str().to_os_string(),
            prover_log,
            OsString::from(format!("-timeLimit:{}", config.time_limit_secs)),
        ];

        Self { program: config.program.clone(), args }
    }
}

impl fmt::Display for VerifierInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
