//! Command-line entry point.

pub mod run;
pub mod types;

pub use run::execute;
pub use types::Cli;
