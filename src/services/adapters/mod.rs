pub mod source_tree_filesystem;
pub mod verifier_command;
