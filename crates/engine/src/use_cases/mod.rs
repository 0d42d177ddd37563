//! Use cases - User story orchestration.

pub mod world_import;

pub use world_import::{ImportError, ImportResult, ImportStats, ImportWorld, RunResult};
