//! Adapters for external systems: HTTP plugins and checkpoint storage.

pub mod checkpoint;
pub mod plugins;
