use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ids::{ObjectId, TriggerId, ZoneId};
use crate::types::{ApplyLocation, EffectFlag, FlagSet, ObjectFlag, ObjectType, WearFlag};

/// Text shown when a player looks at one of `keywords`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraDescription {
    pub keywords: Vec<String>,
    pub description: String,
}

/// A stat modifier granted by an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affect {
    pub location: ApplyLocation,
    pub modifier: i64,
}

/// An item template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object {
    pub id: ObjectId,
    pub vnum: i64,
    pub zone_id: ZoneId,
    pub keywords: Vec<String>,
    pub short_desc: String,
    pub description: String,
    pub action_desc: String,
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    pub flags: FlagSet<ObjectFlag>,
    pub wear_flags: FlagSet<WearFlag>,
    pub effect_flags: FlagSet<EffectFlag>,
    pub weight: f64,
    pub cost: i64,
    pub timer: i64,
    pub decompose_timer: i64,
    pub level: i64,
    pub concealment: i64,
    /// Type-specific values; stored verbatim.
    pub values: BTreeMap<String, serde_json::Value>,
    pub extra_descriptions: Vec<ExtraDescription>,
    pub affects: Vec<Affect>,
    pub triggers: Vec<TriggerId>,
}
