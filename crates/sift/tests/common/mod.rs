//! Common test utilities shared across integration tests.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Get the workspace root directory
pub fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // Go up from crates/sift to workspace root
    manifest_dir
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .to_path_buf()
}

/// Helper that builds the binary once and runs it directly
pub fn get_sift_binary() -> PathBuf {
    let workspace = workspace_root();

    // Build the binary first (this should be quick if already built)
    let status = Command::new("cargo")
        .args(["build", "--package", "sift", "--quiet"])
        .current_dir(&workspace)
        .status()
        .expect("Failed to build sift");

    assert!(status.success(), "Failed to build sift binary");

    workspace.join("target/debug/sift")
}

/// Run the sift binary with the given args, feeding `input` on stdin
pub fn run_sift_with_stdin(args: &[&str], input: &[u8]) -> Output {
    let binary = get_sift_binary();

    let mut child = Command::new(&binary)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn sift binary");

    child
        .stdin
        .as_mut()
        .expect("stdin is piped")
        .write_all(input)
        .expect("Failed to write stdin");

    child
        .wait_with_output()
        .expect("Failed to wait for sift binary")
}

/// Run the sift binary with the given args and no stdin
pub fn run_sift(args: &[&str]) -> Output {
    let binary = get_sift_binary();

    Command::new(&binary)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute sift binary")
}
