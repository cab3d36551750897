use std::path::PathBuf;
use std::process::Command;
use log::{debug, trace};

use super::CommandRunner;
use crate::error::{KibanaError, KibanaResult};

pub const DEFAULT_CF_BINARY: &str = "cf";

/// Runs commands through the installed `cf` client
#[derive(Debug, Clone)]
pub struct CfCli {
    binary: PathBuf,
    cf_home: Option<PathBuf>,
}

impl CfCli {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            cf_home: None,
        }
    }

    /// Point the child process at a specific session directory
    pub fn with_cf_home(mut self, cf_home: Option<PathBuf>) -> Self {
        self.cf_home = cf_home;
        self
    }

    pub fn binary(&self) -> &PathBuf {
        &self.binary
    }

    fn describe(&self, args: &[&str]) -> String {
        let mut parts = vec![self.binary.display().to_string()];
        parts.extend(args.iter().map(|a| a.to_string()));
        parts.join(" ")
    }
}

impl Default for CfCli {
    fn default() -> Self {
        Self::new(DEFAULT_CF_BINARY)
    }
}

impl CommandRunner for CfCli {
    fn run(&self, args: &[&str]) -> KibanaResult<Vec<String>> {
        let description = self.describe(args);
        debug!("Running: {}", description);

        let mut command = Command::new(&self.binary);
        command.args(args);
        if let Some(home) = &self.cf_home {
            command.env("CF_HOME", home);
        }

        let output = command.output().map_err(|e| KibanaError::CommandUnavailable {
            binary: self.binary.display().to_string(),
            message: e.to_string(),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let lines: Vec<String> = stdout.lines().map(str::to_string).collect();
        trace!("{} produced {} lines of output", description, lines.len());

        if !output.status.success() {
            // cf reports most failures on stdout after a FAILED marker
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = stderr
                .lines()
                .chain(lines.iter().map(String::as_str))
                .map(str::trim)
                .filter(|line| !line.is_empty() && *line != "FAILED")
                .last()
                .map(str::to_string)
                .unwrap_or_else(|| format!("exited with {}", output.status));
            return Err(KibanaError::command_failed(description, message));
        }

        Ok(lines)
    }
}
