//! Implementation of the `msbuild-task validate` command.

use anyhow::Result;
use msbuild_task_lib::{ValidationResult, msbuild_task};

use crate::input::ConfigInput;
use crate::output::{OutputFormat, print_field_error, print_json, print_success};

/// Returns `Ok(false)` when the configuration has field errors.
pub fn cmd_validate(input: &ConfigInput, output: OutputFormat) -> Result<bool> {
  let config = input.load()?;
  let result = msbuild_task().validate(&config);

  report(&result, output)?;
  Ok(result.is_successful())
}

/// Print a validation result in the requested format.
pub(crate) fn report(result: &ValidationResult, output: OutputFormat) -> Result<()> {
  if output.is_json() {
    return print_json(&serde_json::json!({
      "valid": result.is_successful(),
      "errors": result.errors(),
    }));
  }

  if result.is_successful() {
    print_success("Configuration is valid");
  } else {
    for error in result {
      print_field_error(&error.key, &error.message);
    }
  }

  Ok(())
}
