use serde::{Deserialize, Serialize};

use crate::ids::{MobId, ObjectId, RoomId, ZoneId};
use crate::types::WearLocation;

/// Object loaded into a reset mob's inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarriedItem {
    #[serde(rename = "id")]
    pub object_id: ObjectId,
    pub max: i64,
    pub probability: i64,
}

/// Object loaded onto a reset mob at a wear location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquippedItem {
    #[serde(rename = "id")]
    pub object_id: ObjectId,
    pub location: WearLocation,
    pub max: i64,
    pub probability: i64,
}

/// Spawn rule placing a mob in a room.
///
/// Identity is `(zone_id, ordinal)`: the rule's position in its zone's reset
/// list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobReset {
    pub zone_id: ZoneId,
    pub ordinal: i64,
    pub mob: MobId,
    pub room: RoomId,
    /// Maximum concurrent instances.
    pub max: i64,
    pub max_in_zone: Option<i64>,
    /// Spawn chance in percent.
    pub probability: i64,
    pub comment: Option<String>,
    pub carrying: Vec<CarriedItem>,
    pub equipped: Vec<EquippedItem>,
}

impl MobReset {
    pub fn describe(&self) -> String {
        format!("reset #{} of zone {}", self.ordinal, self.zone_id)
    }
}
