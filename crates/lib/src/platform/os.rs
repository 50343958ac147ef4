use std::fmt;

/// Operating systems the build tool is known to run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
  Linux,
  MacOs,
  Windows,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Option<Self> {
    match std::env::consts::OS {
      "linux" => Some(Self::Linux),
      "macos" => Some(Self::MacOs),
      "windows" => Some(Self::Windows),
      _ => None,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "darwin",
      Self::Windows => "windows",
    }
  }

  /// Name of the MSBuild driver as found on `PATH` for this OS.
  ///
  /// Windows ships `MSBuild.exe`; the Mono and .NET SDK packages install a
  /// lowercase `msbuild` launcher elsewhere.
  pub fn msbuild_executable(&self) -> &'static str {
    match self {
      Self::Windows => "MSBuild.exe",
      Self::Linux | Self::MacOs => "msbuild",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}
