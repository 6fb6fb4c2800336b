#![doc = include_str!("../README.md")]

pub mod cli;
pub mod command;
pub mod error;
pub mod fs;
pub mod ops;
pub mod report;
pub mod rewrite;
pub mod validation;

pub use error::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs one fix pass followed by the verification pass.
pub fn run(args: command::fix::FixArgs) -> Result<report::RunReport> {
    command::fix::execute(args)
}
