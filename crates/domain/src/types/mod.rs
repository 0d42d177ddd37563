//! Canonical vocabularies of the world model.
//!
//! Single-valued enums carry a `Default`, which is the fallback the
//! normalizer uses when a legacy value cannot be mapped. Flag vocabularies
//! have no default; unmappable flag tokens are dropped instead.

mod commerce;
mod item;
mod mobile;
mod place;
mod script;
mod vocabulary;

use std::collections::BTreeSet;

pub use commerce::ShopFlag;
pub use item::{ApplyLocation, ObjectFlag, ObjectType, WearFlag, WearLocation};
pub use mobile::{
    Composition, DamageType, EffectFlag, Gender, LifeForce, MobFlag, Position, Race, Size, Stance,
};
pub use place::{Climate, Direction, ExitFlag, Hemisphere, RoomFlag, Sector, ZoneResetMode};
pub use script::{ScriptAttachType, TriggerFlag};
pub use vocabulary::Vocabulary;

/// An ordered set of flags from one vocabulary.
pub type FlagSet<F> = BTreeSet<F>;
