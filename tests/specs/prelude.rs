//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing jmsra CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Returns a Command configured to run the jmsra binary
pub fn jmsra_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin("jmsra"))
}

/// Create a CLI builder for jmsra commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// Temporary project directory holding a `jmsra.toml`
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Create a project whose config file has `config` as content
    pub fn with_config(config: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("jmsra.toml"), config).unwrap();
        Self { dir }
    }

    /// Create a project without any config file
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("jmsra.toml")
    }

    /// CLI builder running inside this project
    pub fn jmsra(&self) -> CliBuilder {
        cli().pwd(self.path())
    }
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    dir: Option<PathBuf>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            dir: None,
            envs: Vec::new(),
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set working directory
    pub fn pwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.dir = Some(path.into());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = jmsra_cmd();
        cmd.args(&self.args);

        if let Some(dir) = self.dir {
            cmd.current_dir(dir);
        }

        // Keep the caller's environment from steering config discovery.
        cmd.env_remove("JMSRA_CONFIG");
        cmd.env_remove("JMSRA_CLIENT_ID");
        cmd.env_remove("RUST_LOG");

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let mut cmd = self.command();
        let output = cmd.output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let mut cmd = self.command();
        let output = cmd.output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Assert stderr does not contain substring.
    pub fn stderr_lacks(self, unexpected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            !stderr.contains(unexpected),
            "stderr should not contain '{}'\nstderr: {}",
            unexpected,
            stderr
        );
        self
    }

    /// Parse stdout as JSON
    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout()).expect("stdout should be JSON")
    }
}
