//! Test support utilities for dsv-gitlab integration tests.
//!
//! Provides reusable test environment setup, canned vault transports, and
//! helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod stub;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use stub::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Domain every test run points at; never resolved by lib-level tests.
pub const TEST_DOMAIN: &str = "tenant.secretsvaultcloud.com";

/// Job name used for the export file in the test project directory.
pub const TEST_JOB_NAME: &str = "build-job";

/// Retrieval spec used by default: one secret, one field.
pub const TEST_RETRIEVE: &str =
    r#"[{"secretPath":"folder1/secret1","secretKey":"key","outputVariable":"MY_VAR"}]"#;

/// Test environment with an isolated project directory.
///
/// The temp directory stands in for `CI_PROJECT_DIR`. No process-global
/// state is mutated — child processes receive a fully controlled
/// environment, so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory standing in for the project root
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        Self { dir }
    }

    /// Path of the export file a CI run would append to.
    pub fn env_file(&self) -> PathBuf {
        self.dir.path().join(TEST_JOB_NAME)
    }

    /// Contents of the export file.
    pub fn read_env_file(&self) -> String {
        std::fs::read_to_string(self.env_file()).expect("failed to read env file")
    }
}
