//! Configuration for the star map generator.
//!
//! Settings persist to disk as a RON file, every section falls back to its
//! defaults when missing, and command-line flags override what was loaded.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, GenerationConfig};
pub use error::ConfigError;
