//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies, the legacy
//! file readers and configuration.

pub mod clock;
pub mod config;
pub mod importers;
pub mod ports;
pub mod sqlite;
