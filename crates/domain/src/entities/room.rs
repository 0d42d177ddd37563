use serde::{Deserialize, Serialize};

use crate::ids::{ObjectId, RoomId, ZoneId};
use crate::types::{Direction, ExitFlag, FlagSet, RoomFlag, Sector};

use super::object::ExtraDescription;

/// One way out of a room. A room has at most one exit per direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exit {
    pub direction: Direction,
    /// Target room; may live in a zone that has not been imported yet.
    pub destination: Option<RoomId>,
    pub description: String,
    pub keywords: Vec<String>,
    /// Object that unlocks the exit.
    pub key: Option<ObjectId>,
    pub flags: FlagSet<ExitFlag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub vnum: i64,
    pub zone_id: ZoneId,
    pub name: String,
    pub description: String,
    pub sector: Sector,
    pub flags: FlagSet<RoomFlag>,
    pub exits: Vec<Exit>,
    pub extra_descriptions: Vec<ExtraDescription>,
}

impl Room {
    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits.iter().find(|exit| exit.direction == direction)
    }
}
