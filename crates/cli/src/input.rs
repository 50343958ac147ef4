//! Configuration input shared by the subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use msbuild_task_lib::TaskConfig;
use tracing::debug;

#[derive(Args, Debug)]
pub struct ConfigInput {
  /// JSON file holding the task configuration
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Set a configuration value, applied after --config (repeatable)
  #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
  pub set: Vec<String>,
}

impl ConfigInput {
  /// Load the file (if any), then apply `--set` overrides in order.
  pub fn load(&self) -> Result<TaskConfig> {
    let mut config = match &self.config {
      Some(path) => TaskConfig::from_json_file(path)
        .with_context(|| format!("Failed to load task config: {}", path.display()))?,
      None => TaskConfig::new(),
    };

    for pair in &self.set {
      let (key, value) = TaskConfig::parse_pair(pair).with_context(|| format!("Invalid --set value: {}", pair))?;
      debug!(key = %key, "config override");
      config.set(key, value);
    }

    Ok(config)
  }
}
