//! Muditor Domain - the canonical world model.
//!
//! - `ids` - numeric ID newtypes and vnum derivation
//! - `types` - canonical vocabularies (enums and flag sets)
//! - `entities` - normalized zones, mobs, objects, rooms, shops, triggers, resets

extern crate self as muditor_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod types;

pub use entities::{
    Affect, CarriedItem, Dice, EquippedItem, Exit, ExtraDescription, Mob, MobReset, Money, Object,
    Room, Shop, ShopAccept, ShopHours, ShopItem, ShopMessages, Trigger, WorldFile, Zone,
};

pub use error::DomainError;

pub use ids::{derive_vnum, MobId, ObjectId, RoomId, ShopId, TriggerId, ZoneId, VNUMS_PER_ZONE};

pub use types::{
    ApplyLocation, Climate, Composition, DamageType, Direction, EffectFlag, ExitFlag, FlagSet,
    Gender, Hemisphere, LifeForce, MobFlag, ObjectFlag, ObjectType, Position, Race, RoomFlag,
    ScriptAttachType, Sector, ShopFlag, Size, Stance, TriggerFlag, Vocabulary, WearFlag,
    WearLocation, ZoneResetMode,
};
