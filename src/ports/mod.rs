mod source_tree;
mod verifier;

pub use source_tree::SourceTree;
pub use verifier::Verifier;
