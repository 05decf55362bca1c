//! Shared testing utilities for tested-up-to CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A plugin readme with a "Tested up to" header of 5.3.2.
#[allow(dead_code)]
pub const SAMPLE_README: &str = "=== Sample Plugin ===\n\
Contributors: someone\n\
Tags: testing\n\
Requires at least: 5.0\n\
Tested up to: 5.3.2\n\
Requires PHP: 7.0\n\
Stable tag: 1.0.0\n\
License: GPLv2 or later\n\
\n\
Short description.\n\
\n\
== Description ==\n\
\n\
Long description.\n";

/// Testing harness providing an isolated plugin directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated plugin directory without a readme.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("plugin");
        fs::create_dir_all(&work_dir).expect("Failed to create test plugin directory");
        Self { root, work_dir }
    }

    /// Create a plugin directory whose `readme.txt` holds `content`.
    pub fn with_readme(content: &str) -> Self {
        let ctx = Self::new();
        ctx.write_readme(content);
        ctx
    }

    /// Path to the plugin directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the default readme.
    pub fn readme_path(&self) -> PathBuf {
        self.work_dir.join("readme.txt")
    }

    pub fn write_readme(&self, content: &str) {
        fs::write(self.readme_path(), content).expect("Failed to write readme");
    }

    pub fn read_readme(&self) -> String {
        fs::read_to_string(self.readme_path()).expect("Failed to read readme")
    }

    /// Build a command for invoking the compiled binary within the plugin directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tested-up-to").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Assert the readme still has exactly `expected` as content.
    pub fn assert_readme_eq(&self, expected: &str) {
        assert_eq!(self.read_readme(), expected, "readme content changed unexpectedly");
    }
}
