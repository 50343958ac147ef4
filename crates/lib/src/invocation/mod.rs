//! Command-line synthesis for the build tool.
//!
//! [`build_invocation`] turns a validated [`TaskConfig`] into a [`ProcessSpec`].
//! Arguments are emitted in a fixed order:
//!
//! 1. `/target:` when targets are specified
//! 2. one `/property:name=value` per property, in declared order
//! 3. boolean switches (`/detailedsummary`, `/nologo`, `/noautoresponse`, `/fl`)
//! 4. `/verbosity:` when set
//! 5. additional parameters, verbatim, so they win over earlier switches
//! 6. the solution file as the last positional argument

mod types;

pub use types::{InvocationDefaults, InvocationError, ProcessSpec};

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::config::{TaskConfig, TaskSettings};
use crate::validate::validate;

pub mod switches {
  pub const TARGET: &str = "/target:";
  pub const PROPERTY: &str = "/property:";
  pub const VERBOSITY: &str = "/verbosity:";
  pub const DETAILED_SUMMARY: &str = "/detailedsummary";
  pub const NO_LOGO: &str = "/nologo";
  pub const NO_AUTO_RESPONSE: &str = "/noautoresponse";
  pub const FILE_LOGGER: &str = "/fl";
}

/// Build the process description for a task configuration.
///
/// The configuration is validated first; an invalid configuration yields
/// [`InvocationError::InvalidConfig`] carrying every field error.
pub fn build_invocation(config: &TaskConfig, defaults: &InvocationDefaults) -> Result<ProcessSpec, InvocationError> {
  let result = validate(config);
  if !result.is_successful() {
    warn!(errors = result.len(), "refusing to build invocation for invalid config");
    return Err(InvocationError::InvalidConfig(result));
  }

  let spec = build_from_settings(&config.settings(), defaults);
  info!(executable = %spec.executable, args = spec.args.len(), "built msbuild invocation");
  Ok(spec)
}

/// Assemble the process description from already-validated settings.
pub fn build_from_settings(settings: &TaskSettings, defaults: &InvocationDefaults) -> ProcessSpec {
  let executable = match (&settings.msbuild_path, settings.customize_msbuild_path) {
    (Some(path), true) => path.clone(),
    _ => defaults.executable.clone(),
  };

  let mut args = Vec::new();

  if settings.specify_targets {
    args.push(format!("{}{}", switches::TARGET, settings.targets.join(",")));
  }

  args.extend(
    settings
      .properties
      .iter()
      .map(|prop| format!("{}{}", switches::PROPERTY, prop)),
  );

  let flags = [
    (settings.detailed_summary, switches::DETAILED_SUMMARY),
    (settings.no_logo, switches::NO_LOGO),
    (settings.no_auto_response, switches::NO_AUTO_RESPONSE),
    (settings.file_logger, switches::FILE_LOGGER),
  ];
  args.extend(flags.iter().filter(|(set, _)| *set).map(|(_, switch)| switch.to_string()));

  if let Some(verbosity) = &settings.verbosity {
    args.push(format!("{}{}", switches::VERBOSITY, verbosity));
  }

  debug!(count = settings.additional_parameters.len(), "appending additional parameters");
  args.extend(settings.additional_parameters.iter().cloned());

  args.push(settings.solution_file.clone());

  let working_dir = settings
    .working_directory
    .as_ref()
    .map(PathBuf::from)
    .unwrap_or_else(|| defaults.working_dir.clone());

  ProcessSpec {
    executable,
    args,
    working_dir,
  }
}
