//! mp-cli library
//!
//! Command parsing and execution for the `marketplace` binary, exported so the
//! commands can be driven against a stubbed API in tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod runner;


pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result};
pub use runner::{Runner, connect};
