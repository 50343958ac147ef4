//! Implementation of the `msbuild-task invocation` command.
//!
//! Builds the process description for a configuration and prints it. Nothing
//! is executed.

use std::path::PathBuf;

use anyhow::Result;
use msbuild_task_lib::{InvocationDefaults, InvocationError, msbuild_task};

use crate::input::ConfigInput;
use crate::output::{OutputFormat, print_error, print_json, print_stat, symbols};

pub fn cmd_invocation(
  input: &ConfigInput,
  msbuild: Option<String>,
  cwd: Option<PathBuf>,
  output: OutputFormat,
) -> Result<bool> {
  let config = input.load()?;

  let mut defaults = InvocationDefaults::detect();
  if let Some(msbuild) = msbuild {
    defaults.executable = msbuild;
  }
  if let Some(cwd) = cwd {
    defaults.working_dir = cwd;
  }

  let spec = match msbuild_task().build_invocation(&config, &defaults) {
    Ok(spec) => spec,
    Err(InvocationError::InvalidConfig(result)) => {
      if !output.is_json() {
        print_error("Cannot build invocation: configuration is invalid");
      }
      super::validate::report(&result, output)?;
      return Ok(false);
    }
  };

  if output.is_json() {
    print_json(&spec)?;
  } else {
    print_stat("Executable", &spec.executable);
    print_stat("Working dir", &spec.working_dir.display().to_string());
    print_stat("Command", &spec.command_line());
    println!("Arguments:");
    for arg in &spec.args {
      println!("  {} {}", symbols::ARROW, arg);
    }
  }

  Ok(true)
}
