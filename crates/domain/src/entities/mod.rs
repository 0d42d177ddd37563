//! Normalized world entities.
//!
//! Everything here has already been through the normalizer: enums are
//! canonical, keywords are lower-cased and de-duplicated, and each entity
//! carries its zone and derived vnum.

mod mob;
mod object;
mod reset;
mod room;
mod shop;
mod trigger;
mod world;
mod zone;

pub use mob::{Dice, Mob, Money};
pub use object::{Affect, ExtraDescription, Object};
pub use reset::{CarriedItem, EquippedItem, MobReset};
pub use room::{Exit, Room};
pub use shop::{Shop, ShopAccept, ShopHours, ShopItem, ShopMessages};
pub use trigger::Trigger;
pub use world::WorldFile;
pub use zone::Zone;
