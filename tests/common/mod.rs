//! Common test utilities

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write an input file into a temporary directory
pub fn create_input(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Create a temporary directory holding one input file
pub fn create_test_input(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = create_input(&temp_dir, "samples.txt", content);
    (temp_dir, path)
}

/// The binary, run from `dir` so config discovery stays inside it
pub fn genplot(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cdf-genplot").unwrap();
    cmd.current_dir(dir).env("XDG_CONFIG_HOME", dir);
    cmd
}
