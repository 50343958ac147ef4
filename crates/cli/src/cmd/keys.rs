use anyhow::Result;
use msbuild_task_lib::msbuild_task;

use crate::output::{OutputFormat, print_info, print_json};

pub fn cmd_keys(output: OutputFormat) -> Result<()> {
  let task = msbuild_task();

  if output.is_json() {
    return print_json(&serde_json::json!({
      "task": task.id,
      "view": task.view,
      "keys": task.keys,
    }));
  }

  print_info(&format!("{} task configuration keys:", task.view.display_value));
  for key in task.keys {
    println!("  {}", key);
  }

  Ok(())
}
