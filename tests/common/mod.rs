//! Common test utilities for Kickstart integration tests

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Scripted stand-in for the `brew` binary
///
/// Every invocation appends its arguments to a log file. Argument lines
/// without a scripted response exit 0 with no output.
pub struct FakeBrew {
    responses: Vec<(String, i32, String)>,
}

impl FakeBrew {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
        }
    }

    /// Respond to the exact argument line `args`
    pub fn on(mut self, args: &str, exit_code: i32, output: &str) -> Self {
        self.responses
            .push((args.to_string(), exit_code, output.to_string()));
        self
    }

    fn script(&self, log: &std::path::Path) -> String {
        let mut script = String::from("#!/bin/sh\n");
        script.push_str(&format!("echo \"$*\" >> '{}'\n", log.display()));
        script.push_str("case \"$*\" in\n");
        for (args, code, output) in &self.responses {
            script.push_str(&format!(
                "  '{args}') cat <<'KICKSTART_EOF'\n{output}\nKICKSTART_EOF\n    exit {code};;\n"
            ));
        }
        script.push_str("esac\nexit 0\n");
        script
    }
}

/// A temporary home with a fake brew binary and optional config file
pub struct TestEnv {
    pub temp: TempDir,
    pub brew: PathBuf,
    pub log: PathBuf,
}

impl TestEnv {
    pub fn new(fake: &FakeBrew) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let brew = temp.path().join("brew");
        let log = temp.path().join("brew.log");
        std::fs::write(&brew, fake.script(&log)).expect("Failed to write fake brew");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&brew, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make fake brew executable");
        }

        Self { temp, brew, log }
    }

    /// Write kickstart.yaml and return its path
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.temp.path().join("kickstart.yaml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Argument lines brew was invoked with, in order
    pub fn brew_calls(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    /// Argument lines that were install commands
    pub fn install_calls(&self) -> Vec<String> {
        self.brew_calls()
            .into_iter()
            .filter(|line| line.starts_with("install"))
            .collect()
    }

    /// The kickstart binary, isolated from the developer's environment
    #[allow(deprecated)]
    pub fn kickstart(&self) -> Command {
        let mut cmd = Command::cargo_bin("kickstart").expect("kickstart binary");
        cmd.env_remove("KICKSTART_CONFIG");
        cmd.env_remove("KICKSTART_LOG");
        cmd.env("HOME", self.temp.path());
        cmd.env("XDG_CONFIG_HOME", self.temp.path().join(".config"));
        cmd.env("KICKSTART_BREW", &self.brew);
        cmd
    }
}
