//! Command implementations
//!
//! Each CLI subcommand is implemented in its own module.

pub mod init;
pub mod run;
pub mod validate;
