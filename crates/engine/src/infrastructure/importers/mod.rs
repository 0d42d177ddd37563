//! Readers for the legacy per-zone world export.
//!
//! `parser` checks structure and `normalizer` rewrites legacy encodings into
//! the canonical world model.

mod legacy_types;
mod normalizer;
mod parser;
mod validation;

pub use legacy_types::LegacyWorldFile;
pub use normalizer::{NormalizedWorld, Normalizer};
pub use parser::parse;
pub use validation::{EntityKind, ParseErrors, ValidationError};
