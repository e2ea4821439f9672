//! Command helper methods for Test.

use super::{Test, TEST_DOMAIN, TEST_JOB_NAME, TEST_RETRIEVE};
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a dsv-gitlab command with a fully controlled environment.
    ///
    /// The inherited environment is cleared so a real `GITLAB_CI` or
    /// `DSV_*` variable on the host can never leak into a test. All
    /// required variables are preset to working defaults; individual tests
    /// override or remove them with `env` / `env_remove`.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("dsv-gitlab").expect("failed to find dsv-gitlab binary");
        cmd.env_clear();
        cmd.env("DSV_DOMAIN", TEST_DOMAIN);
        cmd.env("DSV_CLIENT_ID", "test-client-id");
        cmd.env("DSV_CLIENT_SECRET", "test-client-secret");
        cmd.env("DSV_RETRIEVE", TEST_RETRIEVE);
        cmd.env("GITLAB_CI", "true");
        cmd.env("CI_PROJECT_DIR", self.dir.path());
        cmd.env("CI_JOB_NAME", TEST_JOB_NAME);
        cmd
    }

    /// Run the binary with the default environment.
    pub fn run(&self) -> Output {
        self.cmd().output().expect("failed to run dsv-gitlab")
    }
}
