//! Methodfit CLI library.
//!
//! This library provides the functionality for the methodfit command-line
//! interface: the interactive question flow, configuration management,
//! command execution, and output formatting. It contains no eligibility
//! logic of its own; it accumulates an answer snapshot and hands it to the
//! engine.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod flow;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
