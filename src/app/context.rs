use crate::domain::BatchConfig;
use crate::ports::{SourceTree, Verifier};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SourceTree, V: Verifier> {
    config: BatchConfig,
    source_tree: S,
    verifier: V,
}

impl<S: SourceTree, V: Verifier> AppContext<S, V> {
    /// Create a new application context.
    pub fn new(config: BatchConfig, source_tree: S, verifier: V) -> Self {
        Self { config, source_tree, verifier }
    }

    /// Get the resolved batch configuration.
    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Get a reference to the source tree.
    pub fn source_tree(&self) -> &S {
        &self.source_tree
    }

    /// Get a reference to the verifier.
    pub fn verifier(&self) -> &V {
        &self.verifier
    }
}
