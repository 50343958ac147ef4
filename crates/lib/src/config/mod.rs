//! Task configuration as delivered by the host.
//!
//! A `TaskConfig` is a flat map of string keys to string values. A missing key
//! reads as the empty string, and a flag is set only when its value is exactly
//! `"true"`. Typed access goes through [`TaskSettings`].
//!
//! Hosts deliver configuration either flat:
//!
//! ```json
//! { "SolutionFile": "app.sln", "NoLogo": "true" }
//! ```
//!
//! or with each value wrapped in a property object:
//!
//! ```json
//! { "SolutionFile": { "value": "app.sln" } }
//! ```
//!
//! Both shapes load through [`TaskConfig::from_json_str`].

pub mod keys;
pub mod settings;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::util::text::{is_blank, trim_padding};

pub use settings::{Property, TaskSettings};

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config {path}: {source}")]
  Read {
    path: String,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid config json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("config must be a JSON object")]
  NotAnObject,

  #[error("unsupported value for {key}: expected a string")]
  UnsupportedValue { key: String },

  #[error("invalid KEY=VALUE pair: {0}")]
  InvalidPair(String),
}

/// Flat key/value configuration for one MSBuild task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskConfig(BTreeMap<String, String>);

impl TaskConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Builder-style setter.
  pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
    self.set(key, value);
    self
  }

  pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
    self.0.insert(key.into(), value.into());
  }

  /// Raw value for `key`; absent keys read as `""`.
  pub fn value(&self, key: &str) -> &str {
    self.0.get(key).map(String::as_str).unwrap_or("")
  }

  /// True only when the value is exactly `"true"`.
  pub fn flag(&self, key: &str) -> bool {
    self.value(key) == "true"
  }

  pub fn is_blank(&self, key: &str) -> bool {
    is_blank(self.value(key))
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Parse configuration JSON in either the flat or the property-object form.
  ///
  /// `null` values are treated as unset and booleans are written as
  /// `"true"`/`"false"`.
  pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
    let Value::Object(entries) = serde_json::from_str::<Value>(json)? else {
      return Err(ConfigError::NotAnObject);
    };

    let mut config = Self::new();
    for (key, value) in entries {
      let value = match value {
        Value::Object(mut property) => property.remove("value").unwrap_or(Value::Null),
        other => other,
      };

      match value {
        Value::Null => continue,
        Value::String(s) => config.set(key, s),
        Value::Bool(b) => config.set(key, b.to_string()),
        _ => return Err(ConfigError::UnsupportedValue { key }),
      }
    }

    for (key, _) in config.iter().filter(|(k, _)| !keys::is_declared(k)) {
      warn!(key = %key, "ignoring undeclared config key");
    }
    debug!(entries = config.len(), "loaded task config");

    Ok(config)
  }

  pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
      path: path.display().to_string(),
      source,
    })?;
    Self::from_json_str(&json)
  }

  /// Split a `KEY=VALUE` pair at the first `=`. The value may be empty.
  pub fn parse_pair(pair: &str) -> Result<(String, String), ConfigError> {
    match pair.split_once('=') {
      Some((key, value)) if !is_blank(key) => Ok((trim_padding(key).to_string(), value.to_string())),
      _ => Err(ConfigError::InvalidPair(pair.to_string())),
    }
  }

  /// Parsed, typed view of this configuration.
  pub fn settings(&self) -> TaskSettings {
    TaskSettings::from_config(self)
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TaskConfig {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_key_reads_empty() {
    let config = TaskConfig::new();
    assert_eq!(config.value(keys::SOLUTION_FILE), "");
    assert!(config.is_blank(keys::SOLUTION_FILE));
  }

  #[test]
  fn flag_requires_exact_true() {
    let config = TaskConfig::new()
      .with(keys::NO_LOGO, "true")
      .with(keys::FILE_LOGGER, "TRUE")
      .with(keys::DETAILED_SUMMARY, "yes");

    assert!(config.flag(keys::NO_LOGO));
    assert!(!config.flag(keys::FILE_LOGGER));
    assert!(!config.flag(keys::DETAILED_SUMMARY));
    assert!(!config.flag(keys::SPECIFY_TARGETS));
  }

  #[test]
  fn flat_json_loads() {
    let config = TaskConfig::from_json_str(r#"{"SolutionFile": "app.sln", "NoLogo": true, "Targets": null}"#).unwrap();

    assert_eq!(config.value(keys::SOLUTION_FILE), "app.sln");
    assert!(config.flag(keys::NO_LOGO));
    assert_eq!(config.len(), 2);
  }

  #[test]
  fn property_object_json_loads() {
    let config =
      TaskConfig::from_json_str(r#"{"SolutionFile": {"value": "app.sln"}, "Targets": {"secure": false}}"#).unwrap();

    assert_eq!(config.value(keys::SOLUTION_FILE), "app.sln");
    assert_eq!(config.value(keys::TARGETS), "");
  }

  #[test]
  fn non_object_json_rejected() {
    assert!(matches!(TaskConfig::from_json_str("[]"), Err(ConfigError::NotAnObject)));
  }

  #[test]
  fn numeric_value_rejected() {
    let err = TaskConfig::from_json_str(r#"{"Verbosity": 3}"#).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedValue { key } if key == "Verbosity"));
  }

  #[test]
  fn json_file_loads() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("task.json");
    std::fs::write(&path, r#"{"SolutionFile": "x.sln"}"#).unwrap();

    let config = TaskConfig::from_json_file(&path).unwrap();
    assert_eq!(config.value(keys::SOLUTION_FILE), "x.sln");
  }

  #[test]
  fn missing_file_reports_path() {
    let err = TaskConfig::from_json_file(Path::new("/nonexistent/task.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/task.json"));
  }

  #[test]
  fn pair_splits_on_first_equals() {
    let (key, value) = TaskConfig::parse_pair("Properties=a=b").unwrap();
    assert_eq!(key, "Properties");
    assert_eq!(value, "a=b");

    let (_, value) = TaskConfig::parse_pair("Targets=").unwrap();
    assert_eq!(value, "");

    assert!(TaskConfig::parse_pair("novalue").is_err());
    assert!(TaskConfig::parse_pair("=x").is_err());
  }

  #[test]
  fn collects_from_pairs() {
    let config: TaskConfig = [(keys::SOLUTION_FILE, "a.sln"), (keys::NO_LOGO, "true")].into_iter().collect();
    assert_eq!(config.len(), 2);
    assert!(config.flag(keys::NO_LOGO));
  }
}
