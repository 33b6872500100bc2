//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - base YAML file shared by every project
//! - run YAML file naming the project
//! - Environment variable overrides
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
