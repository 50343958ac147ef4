//! Types for invocation synthesis.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::platform::default_msbuild;
use crate::validate::ValidationResult;

/// Everything a process launcher needs to run the build tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
  pub executable: String,
  pub args: Vec<String>,
  pub working_dir: PathBuf,
}

impl ProcessSpec {
  /// The full command line as display text, one space between tokens.
  ///
  /// This is for logs and previews only; tokens are not quoted.
  pub fn command_line(&self) -> String {
    std::iter::once(self.executable.as_str())
      .chain(self.args.iter().map(String::as_str))
      .collect::<Vec<_>>()
      .join(" ")
  }
}

/// Host-supplied fallbacks for values the configuration may leave unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationDefaults {
  /// Tool used when `CustomizeMSBuildPath` is not set.
  pub executable: String,
  /// Directory used when `WorkingDirectory` is blank.
  pub working_dir: PathBuf,
}

impl InvocationDefaults {
  pub fn new(executable: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
    Self {
      executable: executable.into(),
      working_dir: working_dir.into(),
    }
  }

  /// Defaults for the current process: the platform's tool name and the
  /// current directory (`.` if it cannot be read).
  pub fn detect() -> Self {
    let executable = default_msbuild();
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    Self::new(executable, working_dir)
  }
}

/// Errors that can occur while building an invocation.
#[derive(Debug, Error)]
pub enum InvocationError {
  /// The configuration did not pass validation.
  #[error("invalid task configuration:\n{0}")]
  InvalidConfig(ValidationResult),
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn command_line_joins_tokens() {
    let spec = ProcessSpec {
      executable: "msbuild".to_string(),
      args: vec!["/nologo".to_string(), "app.sln".to_string()],
      working_dir: PathBuf::from("."),
    };
    assert_eq!(spec.command_line(), "msbuild /nologo app.sln");
  }

  #[test]
  fn detect_uses_platform_tool_name() {
    let defaults = InvocationDefaults::detect();
    assert!(defaults.executable.eq_ignore_ascii_case("msbuild") || defaults.executable == "MSBuild.exe");
  }
}
