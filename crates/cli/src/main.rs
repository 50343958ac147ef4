mod cmd;
mod input;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{cmd_info, cmd_invocation, cmd_keys, cmd_validate};
use crate::input::ConfigInput;
use crate::output::OutputFormat;

/// msbuild-task - Validate MSBuild task configuration and derive its command line
#[derive(Parser)]
#[command(name = "msbuild-task")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Enable debug logging
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Validate a task configuration and report field errors
  Validate {
    #[command(flatten)]
    input: ConfigInput,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Print the MSBuild command line for a task configuration
  Invocation {
    #[command(flatten)]
    input: ConfigInput,

    /// Tool used when CustomizeMSBuildPath is not set (default: platform tool name)
    #[arg(long, value_name = "PATH")]
    msbuild: Option<String>,

    /// Directory used when WorkingDirectory is blank (default: current directory)
    #[arg(long, value_name = "DIR")]
    cwd: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// List the configuration keys the task declares
  Keys {
    /// Output format
    #[arg(short = 'o', long, value_enum, default_value = "text")]
    output: OutputFormat,
  },

  /// Show platform information and the default tool name
  Info,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let ok = match cli.command {
    Commands::Validate { input, output } => cmd_validate(&input, output)?,
    Commands::Invocation {
      input,
      msbuild,
      cwd,
      output,
    } => cmd_invocation(&input, msbuild, cwd, output)?,
    Commands::Keys { output } => {
      cmd_keys(output)?;
      true
    }
    Commands::Info => {
      cmd_info();
      true
    }
  };

  if !ok {
    std::process::exit(1);
  }

  Ok(())
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}
