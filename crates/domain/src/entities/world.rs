use serde::{Deserialize, Serialize};

use super::{Mob, MobReset, Object, Room, Shop, Trigger, Zone};

/// The unit of import: one zone and everything its file defines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldFile {
    pub zone: Zone,
    pub mobs: Vec<Mob>,
    pub objects: Vec<Object>,
    pub rooms: Vec<Room>,
    pub shops: Vec<Shop>,
    pub triggers: Vec<Trigger>,
    pub mob_resets: Vec<MobReset>,
}

impl WorldFile {
    pub fn new(zone: Zone) -> Self {
        Self {
            zone,
            mobs: Vec::new(),
            objects: Vec::new(),
            rooms: Vec::new(),
            shops: Vec::new(),
            triggers: Vec::new(),
            mob_resets: Vec::new(),
        }
    }
}
