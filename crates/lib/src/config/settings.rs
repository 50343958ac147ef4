//! Typed view of a task configuration.
//!
//! String flags become `bool`s, optional strings become `Option`s, and the
//! multiline fields are split into their entries. Parsing is lenient: it never
//! fails and assumes the configuration already passed validation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{TaskConfig, keys};
use crate::util::text::{is_blank, parameter_lines, property_lines, strip_whitespace, trim_padding};

/// A single `name=value` build property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
  pub name: String,
  pub value: String,
}

impl Property {
  /// Parse one `Properties` line. Whitespace is stripped before splitting at
  /// the first `=`; returns `None` for lines without a name or `=`.
  pub fn parse(line: &str) -> Option<Self> {
    let stripped = strip_whitespace(line);
    let (name, value) = stripped.split_once('=')?;
    if name.is_empty() {
      return None;
    }
    Some(Self {
      name: name.to_string(),
      value: value.to_string(),
    })
  }
}

impl fmt::Display for Property {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}={}", self.name, self.value)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSettings {
  pub customize_msbuild_path: bool,
  pub msbuild_path: Option<String>,
  pub solution_file: String,
  pub properties: Vec<Property>,
  pub verbosity: Option<String>,
  pub specify_targets: bool,
  pub targets: Vec<String>,
  pub additional_parameters: Vec<String>,
  pub detailed_summary: bool,
  pub no_logo: bool,
  pub no_auto_response: bool,
  pub file_logger: bool,
  pub working_directory: Option<String>,
}

impl TaskSettings {
  pub fn from_config(config: &TaskConfig) -> Self {
    Self {
      customize_msbuild_path: config.flag(keys::CUSTOMIZE_MSBUILD_PATH),
      msbuild_path: non_blank(config.value(keys::MSBUILD_PATH)),
      solution_file: trim_padding(config.value(keys::SOLUTION_FILE)).to_string(),
      properties: property_lines(config.value(keys::PROPERTIES))
        .into_iter()
        .filter_map(Property::parse)
        .collect(),
      verbosity: non_blank(config.value(keys::VERBOSITY)),
      specify_targets: config.flag(keys::SPECIFY_TARGETS),
      targets: split_targets(config.value(keys::TARGETS)),
      additional_parameters: parameter_lines(config.value(keys::ADDITIONAL_PARAMETERS))
        .map(strip_whitespace)
        .filter(|p| !p.is_empty())
        .collect(),
      detailed_summary: config.flag(keys::DETAILED_SUMMARY),
      no_logo: config.flag(keys::NO_LOGO),
      no_auto_response: config.flag(keys::NO_AUTO_RESPONSE),
      file_logger: config.flag(keys::FILE_LOGGER),
      working_directory: non_blank(config.value(keys::WORKING_DIRECTORY)),
    }
  }
}

fn non_blank(value: &str) -> Option<String> {
  if is_blank(value) {
    None
  } else {
    Some(trim_padding(value).to_string())
  }
}

/// Targets may be listed with `,`, `;` or one per line.
fn split_targets(value: &str) -> Vec<String> {
  value
    .split([',', ';', '\r', '\n'])
    .map(trim_padding)
    .filter(|t| !t.is_empty())
    .map(str::to_string)
    .collect()
}
