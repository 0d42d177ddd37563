//! Structural parsing of legacy world files.
//!
//! Only shape is checked here. Every entity is decoded on its own so a
//! single file reports all of its structural problems at once.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::legacy_types::{LegacyMobReset, LegacyWorldFile, LegacyZone};
use super::validation::{EntityKind, ParseErrors, ValidationError};

/// Parse raw file bytes. On any structural failure no entities are
/// returned.
pub fn parse(bytes: &[u8]) -> Result<LegacyWorldFile, ParseErrors> {
    let document: Value = serde_json::from_slice(bytes).map_err(|e| {
        ParseErrors::single(ValidationError::for_kind(
            EntityKind::File,
            format!("invalid JSON: {e}"),
        ))
    })?;

    let Value::Object(mut root) = document else {
        return Err(ParseErrors::single(ValidationError::for_kind(
            EntityKind::File,
            "world file must be a JSON object",
        )));
    };

    let mut errors = Vec::new();

    let zone = match root.remove("zone") {
        None | Some(Value::Null) => {
            errors.push(ValidationError::for_kind(EntityKind::Zone, "missing `zone`"));
            None
        }
        Some(value) => {
            let id = id_hint(&value);
            match serde_json::from_value::<LegacyZone>(value) {
                Ok(zone) => Some(zone),
                Err(e) => {
                    errors.push(entity_error(EntityKind::Zone, "zone", None, id, &e));
                    None
                }
            }
        }
    };

    let mobs = decode_section(&mut root, "mobs", EntityKind::Mob, &mut errors);
    let objects = decode_section(&mut root, "objects", EntityKind::Object, &mut errors);
    let rooms = decode_section(&mut root, "rooms", EntityKind::Room, &mut errors);
    let shops = decode_section(&mut root, "shops", EntityKind::Shop, &mut errors);
    let triggers = decode_section(&mut root, "triggers", EntityKind::Trigger, &mut errors);

    // Reset rules: the zone-nested list first, then the flat top-level list.
    let mut mob_resets: Vec<LegacyMobReset> = Vec::new();
    let nested = zone
        .as_ref()
        .and_then(|z| z.resets.as_ref())
        .and_then(|resets| resets.mob.clone());
    if let Some(nested) = nested {
        mob_resets.extend(decode_list(
            nested,
            "zone.resets.mob",
            EntityKind::MobReset,
            &mut errors,
        ));
    }
    mob_resets.extend(decode_section(
        &mut root,
        "mob_resets",
        EntityKind::MobReset,
        &mut errors,
    ));

    match zone {
        Some(zone) if errors.is_empty() => Ok(LegacyWorldFile {
            zone,
            mobs,
            objects,
            rooms,
            shops,
            triggers,
            mob_resets,
        }),
        _ => Err(ParseErrors(errors)),
    }
}

fn decode_section<T: DeserializeOwned>(
    root: &mut Map<String, Value>,
    key: &'static str,
    kind: EntityKind,
    errors: &mut Vec<ValidationError>,
) -> Vec<T> {
    match root.remove(key) {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => decode_list(value, key, kind, errors),
    }
}

fn decode_list<T: DeserializeOwned>(
    value: Value,
    key: &str,
    kind: EntityKind,
    errors: &mut Vec<ValidationError>,
) -> Vec<T> {
    let Value::Array(items) = value else {
        errors.push(ValidationError::for_kind(
            kind,
            format!("`{key}` must be an array"),
        ));
        return Vec::new();
    };

    let mut decoded = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let id = id_hint(&item);
        match serde_json::from_value::<T>(item) {
            Ok(entity) => decoded.push(entity),
            Err(e) => errors.push(entity_error(kind, key, Some(index), id, &e)),
        }
    }
    decoded
}

/// Best-effort identity of an undecodable entity, for reporting.
fn id_hint(value: &Value) -> Option<String> {
    let id = value.get("id").or_else(|| value.get("mob"))?;
    match id {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn entity_error(
    kind: EntityKind,
    key: &str,
    index: Option<usize>,
    id: Option<String>,
    err: &serde_json::Error,
) -> ValidationError {
    let location = match index {
        Some(index) => format!("{key}[{index}]"),
        None => key.to_string(),
    };
    let message = format!("{location}: {err}");
    match id {
        Some(id) => ValidationError::for_entity(kind, id, message),
        None => ValidationError::for_kind(kind, message),
    }
}
