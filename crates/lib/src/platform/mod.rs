//! Platform detection for default tool discovery.

pub mod os;

use os::Os;

/// Default MSBuild executable name for the current system.
///
/// Falls back to the Unix launcher name on operating systems not listed in [`Os`].
pub fn default_msbuild() -> &'static str {
  Os::current().unwrap_or(Os::Linux).msbuild_executable()
}

/// Identifier of the current OS, or `None` when it is not recognized.
pub fn os_name() -> Option<&'static str> {
  Os::current().map(|os| os.as_str())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_matches_current_os() {
    if let Some(os) = Os::current() {
      assert_eq!(default_msbuild(), os.msbuild_executable());
    }
  }
}
