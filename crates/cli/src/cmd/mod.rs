mod info;
mod invocation;
mod keys;
mod validate;

pub use info::cmd_info;
pub use invocation::cmd_invocation;
pub use keys::cmd_keys;
pub use validate::cmd_validate;
