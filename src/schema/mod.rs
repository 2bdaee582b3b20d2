//! Schema module - Configuration types for depth log conversion.

mod config;

pub use config::*;
