//! Muditor Engine library.
//!
//! Imports legacy MUD world files into a relational world store.
//!
//! ## Structure
//!
//! - `use_cases/` - The world import pipeline and its orchestrator
//! - `infrastructure/` - Legacy file parsing and normalization, storage ports,
//!   the SQLite adapter and configuration

pub mod infrastructure;
pub mod use_cases;
