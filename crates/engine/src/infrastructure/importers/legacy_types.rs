//! Type definitions for the legacy per-zone JSON export.
//!
//! These types accept every encoding the exporter has produced over time.
//! Container shapes (exit maps, selling maps, numeric strings for IDs) are
//! settled here; enum codes and flag tokens stay raw until normalization.

use std::collections::BTreeMap;

use serde::de::{Deserializer, Error as _};
use serde::Deserialize;
use serde_json::Value;

// === Shared encodings ===

/// A single-valued enum field: a legacy integer code or a string token.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyCode {
    Code(i64),
    Token(String),
}

/// A flag field: a list of tokens/bit positions, or one delimited string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyFlags {
    List(Vec<LegacyCode>),
    Text(String),
}

/// Free text that older exports wrote as a list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyText {
    Text(String),
    List(Vec<String>),
}

fn value_to_id(value: &Value) -> Result<Option<i64>, String> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => {
            if let Some(id) = n.as_i64() {
                Ok(Some(id))
            } else {
                match n.as_f64() {
                    Some(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => Ok(Some(f as i64)),
                    _ => Err(format!("invalid numeric ID {n}")),
                }
            }
        }
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| format!("invalid numeric ID {s:?}")),
        other => Err(format!("expected a numeric ID, found {other}")),
    }
}

/// A required ID written as a number or a numeric string.
pub fn legacy_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    value_to_id(&value)
        .map_err(D::Error::custom)?
        .ok_or_else(|| D::Error::custom("ID must not be empty"))
}

/// An optional ID reference. `null` and `""` mean absent; `-1` is kept for
/// the normalizer to interpret.
pub fn optional_legacy_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<i64>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    value_to_id(&value).map_err(D::Error::custom)
}

/// A list of ID references.
pub fn legacy_id_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<i64>, D::Error> {
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    let mut ids = Vec::with_capacity(values.len());
    for value in &values {
        if let Some(id) = value_to_id(value).map_err(D::Error::custom)? {
            ids.push(id);
        }
    }
    Ok(ids)
}

fn value_to_trigger_key(value: &Value) -> Result<String, String> {
    match value {
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        other => Err(format!("invalid trigger ID {other}")),
    }
}

/// A trigger ID, numeric or string.
pub fn trigger_key<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    value_to_trigger_key(&value).map_err(D::Error::custom)
}

/// A list of trigger references.
pub fn trigger_key_list<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<String>, D::Error> {
    let values = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    values
        .iter()
        .map(|value| value_to_trigger_key(value).map_err(D::Error::custom))
        .collect()
}

// === Zone ===

/// The `zone` block of a world file.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyZone {
    #[serde(deserialize_with = "legacy_id")]
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "optional_legacy_id")]
    pub top: Option<i64>,
    #[serde(default)]
    pub lifespan: Option<i64>,
    #[serde(default)]
    pub reset_mode: Option<LegacyCode>,
    #[serde(default)]
    pub hemisphere: Option<LegacyCode>,
    #[serde(default)]
    pub climate: Option<LegacyCode>,
    /// Older exports nest reset rules under the zone. Entries are decoded
    /// one by one so each failure can be reported.
    #[serde(default)]
    pub resets: Option<LegacyZoneResets>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyZoneResets {
    #[serde(default)]
    pub mob: Option<Value>,
}

// === Mobs ===

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegacyDice {
    pub num: i64,
    pub size: i64,
    pub bonus: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegacyMoney {
    pub copper: i64,
    pub silver: i64,
    pub gold: i64,
    pub platinum: i64,
}

/// A mobile definition.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyMob {
    #[serde(deserialize_with = "legacy_id")]
    pub id: i64,
    #[serde(default)]
    pub keywords: Option<LegacyText>,
    #[serde(default)]
    pub namelist: Option<LegacyText>,
    #[serde(default)]
    pub name_list: Option<LegacyText>,
    #[serde(default)]
    pub aliases: Option<LegacyText>,
    #[serde(default)]
    pub short_desc: Option<String>,
    #[serde(default)]
    pub long_desc: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "flags")]
    pub mob_flags: Option<LegacyFlags>,
    #[serde(default)]
    pub effect_flags: Option<LegacyFlags>,
    #[serde(default)]
    pub alignment: Option<i64>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub hit_roll: Option<i64>,
    #[serde(default)]
    pub armor: Option<i64>,
    #[serde(default)]
    pub hp_dice: Option<LegacyDice>,
    #[serde(default)]
    pub damage_dice: Option<LegacyDice>,
    #[serde(default)]
    pub money: Option<LegacyMoney>,
    #[serde(default)]
    pub position: Option<LegacyCode>,
    #[serde(default)]
    pub default_position: Option<LegacyCode>,
    #[serde(default, alias = "sex")]
    pub gender: Option<LegacyCode>,
    #[serde(default)]
    pub race: Option<LegacyCode>,
    #[serde(default)]
    pub size: Option<LegacyCode>,
    #[serde(default)]
    pub life_force: Option<LegacyCode>,
    #[serde(default)]
    pub composition: Option<LegacyCode>,
    #[serde(default)]
    pub stance: Option<LegacyCode>,
    #[serde(default)]
    pub damage_type: Option<LegacyCode>,
    #[serde(default)]
    pub perception: Option<i64>,
    #[serde(default)]
    pub concealment: Option<i64>,
    #[serde(default, deserialize_with = "trigger_key_list")]
    pub triggers: Vec<String>,
}

// === Objects ===

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyExtraDescription {
    #[serde(default, alias = "keyword")]
    pub keywords: Option<LegacyText>,
    #[serde(default, alias = "desc")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyAffect {
    #[serde(default)]
    pub location: Option<LegacyCode>,
    #[serde(default)]
    pub modifier: Option<i64>,
}

/// Type-specific object values: a keyed map, or a positional list in
/// older exports.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LegacyValues {
    Map(BTreeMap<String, Value>),
    List(Vec<Value>),
}

/// An object definition.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyObject {
    #[serde(deserialize_with = "legacy_id")]
    pub id: i64,
    #[serde(default)]
    pub keywords: Option<LegacyText>,
    #[serde(default)]
    pub namelist: Option<LegacyText>,
    #[serde(default)]
    pub name_list: Option<LegacyText>,
    #[serde(default)]
    pub aliases: Option<LegacyText>,
    #[serde(default)]
    pub short_desc: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub action_desc: Option<String>,
    #[serde(default, rename = "type", alias = "object_type")]
    pub object_type: Option<LegacyCode>,
    #[serde(default)]
    pub flags: Option<LegacyFlags>,
    #[serde(default)]
    pub wear_flags: Option<LegacyFlags>,
    #[serde(default)]
    pub effect_flags: Option<LegacyFlags>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub cost: Option<i64>,
    #[serde(default)]
    pub timer: Option<i64>,
    #[serde(default)]
    pub decompose_timer: Option<i64>,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub concealment: Option<i64>,
    #[serde(default)]
    pub values: Option<LegacyValues>,
    #[serde(default)]
    pub extra_descriptions: Option<Vec<LegacyExtraDescription>>,
    #[serde(default)]
    pub affects: Option<Vec<LegacyAffect>>,
    #[serde(default, deserialize_with = "trigger_key_list")]
    pub triggers: Vec<String>,
}

// === Rooms ===

/// One exit. `direction` is filled from the map key when exits are keyed
/// by direction.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyExit {
    #[serde(default)]
    pub direction: Option<LegacyCode>,
    #[serde(default, alias = "to_room", deserialize_with = "optional_legacy_id")]
    pub destination: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "keyword")]
    pub keywords: Option<LegacyText>,
    #[serde(default, deserialize_with = "optional_legacy_id")]
    pub key: Option<i64>,
    #[serde(default)]
    pub flags: Option<LegacyFlags>,
}

/// Exits as an object keyed by direction, or as an array.
pub fn legacy_exits<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<LegacyExit>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        Some(Value::Object(map)) => map
            .into_iter()
            .map(|(direction, item)| {
                let mut exit: LegacyExit =
                    serde_json::from_value(item).map_err(D::Error::custom)?;
                if exit.direction.is_none() {
                    exit.direction = Some(LegacyCode::Token(direction));
                }
                Ok(exit)
            })
            .collect(),
        Some(other) => Err(D::Error::custom(format!(
            "exits must be an object or an array, found {other}"
        ))),
    }
}

/// A room definition.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyRoom {
    #[serde(deserialize_with = "legacy_id")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "sector_type")]
    pub sector: Option<LegacyCode>,
    #[serde(default)]
    pub flags: Option<LegacyFlags>,
    #[serde(default, deserialize_with = "legacy_exits")]
    pub exits: Vec<LegacyExit>,
    #[serde(default)]
    pub extra_descriptions: Option<Vec<LegacyExtraDescription>>,
}

// === Shops ===

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyShopItem {
    #[serde(deserialize_with = "legacy_id")]
    pub id: i64,
    #[serde(default)]
    pub amount: Option<i64>,
}

/// Stock as an array of `{id, amount}` or an object `{"<objId>": amount}`.
pub fn legacy_selling<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<LegacyShopItem>, D::Error> {
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| serde_json::from_value(item).map_err(D::Error::custom))
            .collect(),
        Some(Value::Object(map)) => {
            // Object keys come back in string order ("10" before "9").
            let mut items = map
                .into_iter()
                .map(|(key, amount)| {
                    let id = value_to_id(&Value::String(key))
                        .map_err(D::Error::custom)?
                        .ok_or_else(|| D::Error::custom("empty object ID in selling"))?;
                    let amount = match amount {
                        Value::Null => None,
                        other => Some(serde_json::from_value(other).map_err(D::Error::custom)?),
                    };
                    Ok(LegacyShopItem { id, amount })
                })
                .collect::<Result<Vec<_>, D::Error>>()?;
            items.sort_by_key(|item| item.id);
            Ok(items)
        }
        Some(other) => Err(D::Error::custom(format!(
            "selling must be an object or an array, found {other}"
        ))),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyShopAccept {
    #[serde(default, rename = "type", alias = "object_type")]
    pub object_type: Option<LegacyCode>,
    #[serde(default)]
    pub keywords: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyShopHours {
    #[serde(default)]
    pub open: Option<i64>,
    #[serde(default)]
    pub close: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegacyShopMessages {
    #[serde(default)]
    pub no_such_item: Option<String>,
    #[serde(default)]
    pub do_not_buy: Option<String>,
    #[serde(default)]
    pub missing_cash: Option<String>,
    #[serde(default)]
    pub buy: Option<String>,
    #[serde(default)]
    pub sell: Option<String>,
}

/// A shop definition.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyShop {
    #[serde(deserialize_with = "legacy_id")]
    pub id: i64,
    #[serde(default, deserialize_with = "optional_legacy_id")]
    pub keeper: Option<i64>,
    #[serde(default, deserialize_with = "legacy_selling")]
    pub selling: Vec<LegacyShopItem>,
    #[serde(default)]
    pub accepts: Option<Vec<LegacyShopAccept>>,
    #[serde(default)]
    pub buy_profit: Option<f64>,
    #[serde(default)]
    pub sell_profit: Option<f64>,
    #[serde(default)]
    pub temper: Option<i64>,
    #[serde(default)]
    pub flags: Option<LegacyFlags>,
    #[serde(default)]
    pub hours: Option<Vec<LegacyShopHours>>,
    #[serde(default, deserialize_with = "legacy_id_list")]
    pub rooms: Vec<i64>,
    #[serde(default)]
    pub messages: Option<LegacyShopMessages>,
}

// === Triggers ===

/// A script trigger definition.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyTrigger {
    #[serde(deserialize_with = "trigger_key")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub attach_type: Option<LegacyCode>,
    #[serde(default, alias = "trigger_types")]
    pub flags: Option<LegacyFlags>,
    #[serde(default, alias = "narg")]
    pub num_args: Option<i64>,
    #[serde(default, alias = "args", alias = "argument")]
    pub arglist: Option<LegacyText>,
    #[serde(default)]
    pub commands: Option<LegacyText>,
}

// === Resets ===

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyCarriedItem {
    #[serde(deserialize_with = "legacy_id")]
    pub id: i64,
    #[serde(default)]
    pub max: Option<i64>,
    #[serde(default)]
    pub probability: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LegacyEquippedItem {
    #[serde(deserialize_with = "legacy_id")]
    pub id: i64,
    #[serde(default)]
    pub location: Option<LegacyCode>,
    #[serde(default)]
    pub max: Option<i64>,
    #[serde(default)]
    pub probability: Option<f64>,
}

/// A mob reset rule.
#[derive(Debug, Clone, Deserialize)]
pub struct LegacyMobReset {
    #[serde(alias = "id", deserialize_with = "legacy_id")]
    pub mob: i64,
    #[serde(deserialize_with = "legacy_id")]
    pub room: i64,
    #[serde(default)]
    pub max: Option<i64>,
    #[serde(default, deserialize_with = "optional_legacy_id")]
    pub max_in_zone: Option<i64>,
    #[serde(default)]
    pub probability: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub carrying: Option<Vec<LegacyCarriedItem>>,
    #[serde(default)]
    pub equipped: Option<Vec<LegacyEquippedItem>>,
}

// === File ===

/// A structurally valid world file, before normalization.
#[derive(Debug, Clone)]
pub struct LegacyWorldFile {
    pub zone: LegacyZone,
    pub mobs: Vec<LegacyMob>,
    pub objects: Vec<LegacyObject>,
    pub rooms: Vec<LegacyRoom>,
    pub shops: Vec<LegacyShop>,
    pub triggers: Vec<LegacyTrigger>,
    /// `zone.resets.mob` followed by top-level `mob_resets`.
    pub mob_resets: Vec<LegacyMobReset>,
}
