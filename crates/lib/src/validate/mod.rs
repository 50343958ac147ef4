//! Configuration validation.
//!
//! [`validate`] runs every check against a [`TaskConfig`] and collects all
//! failures; it never stops at the first one and never fails itself. The host
//! calls it when the task configuration is saved, and [`build_invocation`]
//! calls it again before building a command line.
//!
//! [`build_invocation`]: crate::invocation::build_invocation

mod types;

pub use types::{ValidationError, ValidationResult};

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::config::{TaskConfig, keys};
use crate::util::text::{parameter_lines, property_lines, strip_whitespace};

pub const MSBUILD_PATH_REQUIRED: &str = "Path to MSBuild.exe must be specified";
pub const SOLUTION_FILE_REQUIRED: &str = "A Solution file must be specified";
pub const PROPERTIES_INVALID: &str =
  "Invalid entry for Properties - make sure one property per line formatted like propName=propValue";
pub const TARGETS_REQUIRED: &str = "If SpecifyTargets is checked, Targets cannot be empty.";
pub const PARAMETER_INVALID: &str = "Parameters must start with forward slash: /parameter:value";

/// `propName=propValue` with ASCII word characters on both sides.
static PROPERTY_LINE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]+=[A-Za-z0-9_]+$").expect("property pattern compiles"));

/// Validate a task configuration.
///
/// Checks run in a fixed order so the result is deterministic:
/// tool path, solution file, properties, targets, additional parameters.
pub fn validate(config: &TaskConfig) -> ValidationResult {
  let mut result = ValidationResult::new();

  check_msbuild_path(config, &mut result);
  check_solution_file(config, &mut result);
  check_properties(config, &mut result);
  check_targets(config, &mut result);
  check_additional_parameters(config, &mut result);

  debug!(errors = result.len(), "validated task config");
  result
}

fn check_msbuild_path(config: &TaskConfig, result: &mut ValidationResult) {
  if config.flag(keys::CUSTOMIZE_MSBUILD_PATH) && config.is_blank(keys::MSBUILD_PATH) {
    result.add_error(ValidationError::new(keys::MSBUILD_PATH, MSBUILD_PATH_REQUIRED));
  }
}

fn check_solution_file(config: &TaskConfig, result: &mut ValidationResult) {
  if config.is_blank(keys::SOLUTION_FILE) {
    result.add_error(ValidationError::new(keys::SOLUTION_FILE, SOLUTION_FILE_REQUIRED));
  }
}

fn check_properties(config: &TaskConfig, result: &mut ValidationResult) {
  if config.is_blank(keys::PROPERTIES) {
    return;
  }

  // One error for the whole field, however many lines are wrong.
  let invalid = property_lines(config.value(keys::PROPERTIES))
    .into_iter()
    .filter(|line| !PROPERTY_LINE.is_match(&strip_whitespace(line)))
    .inspect(|line| debug!(line = %line, "invalid property line"))
    .count();

  if invalid > 0 {
    result.add_error(ValidationError::new(keys::PROPERTIES, PROPERTIES_INVALID));
  }
}

fn check_targets(config: &TaskConfig, result: &mut ValidationResult) {
  if config.flag(keys::SPECIFY_TARGETS) && config.is_blank(keys::TARGETS) {
    result.add_error(ValidationError::new(keys::TARGETS, TARGETS_REQUIRED));
  }
}

fn check_additional_parameters(config: &TaskConfig, result: &mut ValidationResult) {
  // One error per offending line.
  for line in parameter_lines(config.value(keys::ADDITIONAL_PARAMETERS)) {
    let param = strip_whitespace(line);
    if param.is_empty() || param.starts_with('/') {
      continue;
    }
    debug!(param = %param, "additional parameter missing leading slash");
    result.add_error(ValidationError::new(keys::ADDITIONAL_PARAMETERS, PARAMETER_INVALID));
  }
}
