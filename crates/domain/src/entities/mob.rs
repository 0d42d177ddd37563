use serde::{Deserialize, Serialize};

use crate::ids::{MobId, TriggerId, ZoneId};
use crate::types::{
    Composition, DamageType, EffectFlag, FlagSet, Gender, LifeForce, MobFlag, Position, Race,
    Size, Stance,
};

/// Dice expression `num`d`size`+`bonus`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dice {
    pub num: i64,
    pub size: i64,
    pub bonus: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub copper: i64,
    pub silver: i64,
    pub gold: i64,
    pub platinum: i64,
}

/// A non-player character template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mob {
    pub id: MobId,
    pub vnum: i64,
    pub zone_id: ZoneId,
    pub keywords: Vec<String>,
    pub short_desc: String,
    pub long_desc: String,
    pub description: String,
    pub mob_flags: FlagSet<MobFlag>,
    pub effect_flags: FlagSet<EffectFlag>,
    pub alignment: i64,
    pub level: i64,
    pub hit_roll: i64,
    pub armor: i64,
    pub hp_dice: Dice,
    pub damage_dice: Dice,
    pub money: Money,
    pub position: Position,
    pub default_position: Position,
    pub gender: Gender,
    pub race: Race,
    pub size: Size,
    pub life_force: LifeForce,
    pub composition: Composition,
    pub stance: Stance,
    pub damage_type: DamageType,
    pub perception: i64,
    pub concealment: i64,
    /// Triggers attached to this mob, in file order.
    pub triggers: Vec<TriggerId>,
}
