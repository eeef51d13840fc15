pub mod adapters;

pub use adapters::source_tree_filesystem::FilesystemSourceTree;
pub use adapters::verifier_command::CommandVerifier;
