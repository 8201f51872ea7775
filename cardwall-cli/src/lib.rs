//! Library half of the `cardwall` binary, split out so commands can be tested

pub mod cli;
pub mod commands;
pub mod exit_codes;
pub mod logging;

pub use cli::{Cli, Commands, OutputFormat};
pub use commands::execute;
