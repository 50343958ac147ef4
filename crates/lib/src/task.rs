//! Task registration for the build host.
//!
//! The host loads the task by calling [`msbuild_task`] and keeping the returned
//! [`TaskDescriptor`]. The descriptor carries everything the host needs: the
//! declared configuration keys, the view metadata, and the validation and
//! invocation entry points.

use serde::Serialize;

use crate::config::{TaskConfig, keys};
use crate::invocation::{InvocationDefaults, InvocationError, ProcessSpec, build_invocation};
use crate::validate::{ValidationResult, validate};

/// How the host presents the task in its configuration UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskView {
  pub display_value: &'static str,
  /// Resource path of the form template the host renders.
  pub template: &'static str,
}

/// Capability value handed to the host when the task is registered.
#[derive(Debug, Clone, Copy)]
pub struct TaskDescriptor {
  pub id: &'static str,
  pub view: TaskView,
  pub keys: &'static [&'static str],
  validate: fn(&TaskConfig) -> ValidationResult,
  invocation: fn(&TaskConfig, &InvocationDefaults) -> Result<ProcessSpec, InvocationError>,
}

impl TaskDescriptor {
  /// Empty configuration with every declared key present.
  pub fn config(&self) -> TaskConfig {
    self.keys.iter().map(|key| (*key, "")).collect()
  }

  pub fn validate(&self, config: &TaskConfig) -> ValidationResult {
    (self.validate)(config)
  }

  pub fn build_invocation(
    &self,
    config: &TaskConfig,
    defaults: &InvocationDefaults,
  ) -> Result<ProcessSpec, InvocationError> {
    (self.invocation)(config, defaults)
  }
}

/// Register the MSBuild task.
pub fn msbuild_task() -> TaskDescriptor {
  TaskDescriptor {
    id: "msbuild",
    view: TaskView {
      display_value: "MSBuild",
      template: "views/task.template.html",
    },
    keys: &keys::DECLARED_KEYS,
    validate,
    invocation: build_invocation,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn config_declares_every_key() {
    let task = msbuild_task();
    let config = task.config();
    assert_eq!(config.len(), keys::DECLARED_KEYS.len());
    assert!(config.iter().all(|(_, value)| value.is_empty()));
  }

  #[test]
  fn empty_declared_config_needs_solution_file() {
    let task = msbuild_task();
    let result = task.validate(&task.config());
    assert_eq!(result.len(), 1);
    assert!(result.has_error(keys::SOLUTION_FILE));
  }

  #[test]
  fn descriptor_builds_invocation() {
    let task = msbuild_task();
    let config = task.config().with(keys::SOLUTION_FILE, "app.sln");
    let spec = task
      .build_invocation(&config, &InvocationDefaults::new("msbuild", "."))
      .unwrap();
    assert_eq!(spec.args, vec!["app.sln"]);
  }

  #[test]
  fn view_display_value() {
    assert_eq!(msbuild_task().view.display_value, "MSBuild");
  }
}
