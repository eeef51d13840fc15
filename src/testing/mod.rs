mod memory_source_tree;

pub use fake_verifier::FakeVerifier;
pub use memory_source_tree::MemorySourceTree;
