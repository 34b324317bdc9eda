//! Command handlers: thin glue between the CLI and the core. Each handler
//! resolves its roots, calls into the core and prints user-facing output.

mod create;
mod install;
mod list;
mod remove;

pub use create::create;
pub use install::install;
pub use list::list;
pub use remove::remove;
