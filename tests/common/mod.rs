//! Shared testing utilities for smt-batch CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stub verifier: logs its arguments, writes a fake prover log, fails for
/// any source whose name contains `fail`, and warns on stderr for `noisy`.
const STUB_VERIFIER: &str = r#"#!/bin/sh
printf '%s\n' "$*" >> "__LOG__"
target="${3#-proverLog:}"
printf '(set-info :source |%s|)\n' "$2" > "$target"
case "$2" in
  *fail*) echo "assertion might not hold" >&2; exit 2 ;;
  *noisy*) echo "warning: deprecated attribute" >&2 ;;
esac
exit 0
"#;

/// Testing harness providing an isolated source tree, output root, and stub verifier.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    data_dir: PathBuf,
    work_dir: PathBuf,
    verifier: PathBuf,
    invocation_log: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let data_dir = root.path().join("data");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&data_dir).expect("Failed to create data directory");
        fs::create_dir_all(&work_dir).expect("Failed to create work directory");

        let invocation_log = root.path().join("invocations.log");
        let verifier = root.path().join("bin").join("boogie");
        fs::create_dir_all(verifier.parent().unwrap()).unwrap();
        let script = STUB_VERIFIER.replace("__LOG__", &invocation_log.display().to_string());
        fs::write(&verifier, script).expect("Failed to write stub verifier");
        make_executable(&verifier);

        Self { root, data_dir, work_dir, verifier, invocation_log }
    }

    /// Directory passed as the positional root argument.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Absolute path to the stub verifier.
    pub fn verifier(&self) -> &Path {
        &self.verifier
    }

    /// Output root used by [`TestContext::cli`].
    pub fn output_root(&self) -> PathBuf {
        self.root.path().join("smt")
    }

    /// Create a file (and its parents) under the data directory.
    pub fn add_source(&self, relative: &str) -> PathBuf {
        let path = self.data_dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "procedure P() { }\n").unwrap();
        path
    }

    /// Lines the stub verifier appended, one per invocation.
    pub fn invocations(&self) -> Vec<String> {
        fs::read_to_string(&self.invocation_log)
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Command for the compiled binary without any arguments.
    pub fn bare_cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("smt-batch").expect("Failed to locate smt-batch binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Command preconfigured with the data root, stub verifier, and temp output root.
    pub fn cli(&self) -> Command {
        let mut cmd = self.bare_cli();
        cmd.arg(&self.data_dir)
            .arg("--verifier")
            .arg(&self.verifier)
            .arg("--output-root")
            .arg(self.output_root());
        cmd
    }

    /// Write a TOML config file into the temp root and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.root.path().join("batch.toml");
        fs::write(&path, content).unwrap();
        path
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) {}
