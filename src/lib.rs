pub mod commands;
pub mod install;
pub mod package;
pub mod remove;
pub mod runtime;
