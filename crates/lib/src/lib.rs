//! msbuild-task-lib: Configuration validation and command-line synthesis for MSBuild tasks
//!
//! This crate provides the two contracts a build host calls for an MSBuild step:
//! - `validate`: checks a flat key/value task configuration and reports field errors
//! - `build_invocation`: turns a valid configuration into a `ProcessSpec`
//!   (executable, ordered arguments, working directory)
//!
//! Both are pure functions. Nothing here spawns processes or touches the filesystem;
//! the host's executor consumes the `ProcessSpec`.

pub mod config;
pub mod invocation;
pub mod platform;
pub mod task;
pub mod util;
pub mod validate;

pub use config::TaskConfig;
pub use invocation::{InvocationDefaults, InvocationError, ProcessSpec, build_invocation};
pub use task::{TaskDescriptor, TaskView, msbuild_task};
pub use validate::{ValidationError, ValidationResult, validate};
