use msbuild_task_lib::platform::{default_msbuild, os_name};

use crate::output::print_stat;

pub fn cmd_info() {
  println!("System:");
  match os_name() {
    Some(os) => print_stat("OS", os),
    _ => println!("Could not detect platform."),
  }
  print_stat("Default tool", default_msbuild());
  print_stat("Version", env!("CARGO_PKG_VERSION"));
}
