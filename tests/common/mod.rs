//! Integration tests for kt-package-fix
//!
//! These tests build small Kotlin source trees on disk and run the binary
//! against them.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create the two-file tree from the README example
#[allow(unused)]
pub fn create_test_tree() -> TempDir {
    let temp = TempDir::new().unwrap();

    write_file(
        temp.path(),
        "A.kt",
        "package com.zeroscam.core_domain.util\n\nimport com.zeroscam.core_domain.model.X\n",
    );
    write_file(temp.path(), "B.kt", "package com.zeroscam.other\n");

    temp
}

/// Writes `content` to `root/rel`, creating parent directories
#[allow(unused)]
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[allow(unused)]
pub fn read_file(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// Helper to run the fixer from inside `root` with default settings
pub fn run_fix(root: &Path, extra_args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("kt-package-fix");
    cmd.args(extra_args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .current_dir(root);

    cmd.assert()
}
