//! Configuration key names.
//!
//! These strings are the contract with the host: it stores values and renders
//! field errors under exactly these names.

pub const CUSTOMIZE_MSBUILD_PATH: &str = "CustomizeMSBuildPath";
pub const MSBUILD_PATH: &str = "MSBuildPath";
pub const SOLUTION_FILE: &str = "SolutionFile";
pub const PROPERTIES: &str = "Properties";
pub const VERBOSITY: &str = "Verbosity";
pub const SPECIFY_TARGETS: &str = "SpecifyTargets";
pub const TARGETS: &str = "Targets";
pub const ADDITIONAL_PARAMETERS: &str = "AdditionalParameters";
pub const DETAILED_SUMMARY: &str = "DetailedSummary";
pub const NO_LOGO: &str = "NoLogo";
pub const NO_AUTO_RESPONSE: &str = "NoAutoResponse";
pub const FILE_LOGGER: &str = "FileLogger";
pub const WORKING_DIRECTORY: &str = "WorkingDirectory";

/// Every key the task declares to the host, in declaration order.
pub const DECLARED_KEYS: [&str; 13] = [
  CUSTOMIZE_MSBUILD_PATH,
  MSBUILD_PATH,
  SOLUTION_FILE,
  PROPERTIES,
  VERBOSITY,
  SPECIFY_TARGETS,
  TARGETS,
  ADDITIONAL_PARAMETERS,
  FILE_LOGGER,
  DETAILED_SUMMARY,
  NO_LOGO,
  NO_AUTO_RESPONSE,
  WORKING_DIRECTORY,
];

/// Returns true if `key` is one of the declared configuration keys.
pub fn is_declared(key: &str) -> bool {
  DECLARED_KEYS.contains(&key)
}
