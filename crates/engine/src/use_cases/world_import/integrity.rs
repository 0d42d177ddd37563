//! Read-only consistency checks on a normalized world file.
//!
//! Findings are warnings. A file that references rooms, mobs or objects of
//! other zones is normal; the warnings say what will dangle after import.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Display;

use muditor_domain::{RoomId, ScriptAttachType, TriggerId, WorldFile};

use crate::infrastructure::importers::{EntityKind, ValidationError};

pub struct IntegrityChecker {
    known_rooms: BTreeSet<RoomId>,
}

impl IntegrityChecker {
    /// `known_rooms` are treated as existing outside the file.
    pub fn new(known_rooms: BTreeSet<RoomId>) -> Self {
        Self { known_rooms }
    }

    pub fn check(&self, world: &WorldFile) -> Vec<ValidationError> {
        let mut warnings = Vec::new();

        let mobs: BTreeSet<_> = world.mobs.iter().map(|m| m.id).collect();
        let objects: BTreeSet<_> = world.objects.iter().map(|o| o.id).collect();
        let rooms: BTreeSet<_> = world.rooms.iter().map(|r| r.id).collect();
        let triggers: BTreeMap<&TriggerId, ScriptAttachType> = world
            .triggers
            .iter()
            .map(|t| (&t.id, t.attach_type))
            .collect();

        let room_exists = |id: &RoomId| rooms.contains(id) || self.known_rooms.contains(id);

        duplicates(EntityKind::Mob, world.mobs.iter().map(|m| m.id), &mut warnings);
        duplicates(EntityKind::Object, world.objects.iter().map(|o| o.id), &mut warnings);
        duplicates(EntityKind::Room, world.rooms.iter().map(|r| r.id), &mut warnings);
        duplicates(EntityKind::Shop, world.shops.iter().map(|s| s.id), &mut warnings);
        duplicates(
            EntityKind::Trigger,
            world.triggers.iter().map(|t| t.id.clone()),
            &mut warnings,
        );

        for room in &world.rooms {
            for exit in &room.exits {
                if let Some(destination) = exit.destination {
                    if !room_exists(&destination) {
                        warnings.push(ValidationError::for_entity(
                            EntityKind::Room,
                            room.id,
                            format!(
                                "{} exit leads to room {destination}, which is not in the import set",
                                exit.direction
                            ),
                        ));
                    }
                }
            }
        }

        for mob in &world.mobs {
            for trigger in &mob.triggers {
                check_attachment(
                    EntityKind::Mob,
                    mob.id,
                    trigger,
                    ScriptAttachType::Mob,
                    &triggers,
                    &mut warnings,
                );
            }
        }
        for object in &world.objects {
            for trigger in &object.triggers {
                check_attachment(
                    EntityKind::Object,
                    object.id,
                    trigger,
                    ScriptAttachType::Object,
                    &triggers,
                    &mut warnings,
                );
            }
        }

        for shop in &world.shops {
            if let Some(keeper) = shop.keeper {
                if !mobs.contains(&keeper) {
                    warnings.push(ValidationError::for_entity(
                        EntityKind::Shop,
                        shop.id,
                        format!("keeper mob {keeper} is not defined in this file"),
                    ));
                }
            }
            for item in &shop.selling {
                if !objects.contains(&item.object_id) {
                    warnings.push(ValidationError::for_entity(
                        EntityKind::Shop,
                        shop.id,
                        format!(
                            "sells object {}, which is not defined in this file",
                            item.object_id
                        ),
                    ));
                }
            }
        }

        for reset in &world.mob_resets {
            let id = reset.ordinal;
            if !mobs.contains(&reset.mob) {
                warnings.push(ValidationError::for_entity(
                    EntityKind::MobReset,
                    id,
                    format!("mob {} is not defined in this file", reset.mob),
                ));
            }
            if !room_exists(&reset.room) {
                warnings.push(ValidationError::for_entity(
                    EntityKind::MobReset,
                    id,
                    format!("room {} is not in the import set", reset.room),
                ));
            }
            let items = reset
                .carrying
                .iter()
                .map(|item| item.object_id)
                .chain(reset.equipped.iter().map(|item| item.object_id));
            for object in items {
                if !objects.contains(&object) {
                    warnings.push(ValidationError::for_entity(
                        EntityKind::MobReset,
                        id,
                        format!("object {object} is not defined in this file"),
                    ));
                }
            }
        }

        for warning in &warnings {
            tracing::debug!(warning = %warning, "Integrity warning");
        }
        warnings
    }
}

fn duplicates<I: Display>(
    kind: EntityKind,
    ids: impl Iterator<Item = I>,
    warnings: &mut Vec<ValidationError>,
) {
    let mut seen = BTreeSet::new();
    let mut reported = BTreeSet::new();
    for id in ids {
        if !seen.insert(id.to_string()) && reported.insert(id.to_string()) {
            warnings.push(ValidationError::for_entity(
                kind,
                &id,
                "defined more than once; the last definition wins",
            ));
        }
    }
}

fn check_attachment(
    owner_kind: EntityKind,
    owner_id: impl Display,
    trigger: &TriggerId,
    expected: ScriptAttachType,
    triggers: &BTreeMap<&TriggerId, ScriptAttachType>,
    warnings: &mut Vec<ValidationError>,
) {
    match triggers.get(trigger) {
        None => warnings.push(ValidationError::for_entity(
            owner_kind,
            &owner_id,
            format!("trigger {trigger} is not defined in this file"),
        )),
        Some(actual) if *actual != expected => warnings.push(ValidationError::for_entity(
            owner_kind,
            &owner_id,
            format!("trigger {trigger} attaches to {actual}, not {expected}"),
        )),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::importers::{parse, Normalizer};
    use muditor_domain::ZoneId;
    use serde_json::json;

    fn world(value: serde_json::Value) -> WorldFile {
        let raw = parse(&serde_json::to_vec(&value).unwrap()).unwrap();
        Normalizer::new(ZoneId::new(1000)).normalize(raw).world
    }

    fn messages(warnings: &[ValidationError]) -> Vec<String> {
        warnings.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn consistent_file_has_no_warnings() {
        let world = world(json!({
            "zone": { "id": 30, "name": "Z" },
            "mobs": [{ "id": 3001, "triggers": [3000] }],
            "objects": [{ "id": 3010 }],
            "rooms": [
                { "id": 3001, "exits": { "north": { "destination": 3002 } } },
                { "id": 3002, "exits": { "south": { "destination": 3001 } } }
            ],
            "triggers": [{ "id": 3000, "attach_type": "MOB" }],
            "shops": [{ "id": 3000, "keeper": 3001, "selling": [{ "id": 3010 }] }],
            "mob_resets": [{ "mob": 3001, "room": 3001, "carrying": [{ "id": 3010 }] }]
        }));

        assert!(IntegrityChecker::new(BTreeSet::new()).check(&world).is_empty());
    }

    #[test]
    fn flags_dangling_references() {
        let world = world(json!({
            "zone": { "id": 30, "name": "Z" },
            "mobs": [{ "id": 3001, "triggers": [3000, 3999] }],
            "rooms": [{ "id": 3001, "exits": { "east": { "destination": 3100 } } }],
            "triggers": [{ "id": 3000, "attach_type": "OBJECT" }],
            "shops": [{ "id": 3000, "keeper": 3050, "selling": [{ "id": 3010 }] }],
            "mob_resets": [{ "mob": 3002, "room": 3005, "equipped": [{ "id": 3011 }] }]
        }));

        let warnings = IntegrityChecker::new(BTreeSet::new()).check(&world);
        assert_eq!(
            messages(&warnings),
            vec![
                "room 3001: EAST exit leads to room 3100, which is not in the import set",
                "mob 3001: trigger 3000 attaches to OBJECT, not MOB",
                "mob 3001: trigger 3999 is not defined in this file",
                "shop 3000: keeper mob 3050 is not defined in this file",
                "shop 3000: sells object 3010, which is not defined in this file",
                "mob_reset 0: mob 3002 is not defined in this file",
                "mob_reset 0: room 3005 is not in the import set",
                "mob_reset 0: object 3011 is not defined in this file",
            ]
        );
    }

    #[test]
    fn known_rooms_satisfy_exits_and_resets() {
        let world = world(json!({
            "zone": { "id": 30, "name": "Z" },
            "mobs": [{ "id": 3001 }],
            "rooms": [{ "id": 3001, "exits": [{ "direction": "up", "destination": 3100 }] }],
            "mob_resets": [{ "mob": 3001, "room": 3100 }]
        }));

        let checker = IntegrityChecker::new(BTreeSet::from([RoomId::new(3100)]));
        assert!(checker.check(&world).is_empty());
    }

    #[test]
    fn reports_duplicate_ids_once() {
        let world = world(json!({
            "zone": { "id": 30, "name": "Z" },
            "rooms": [{ "id": 3001 }, { "id": 3001 }, { "id": 3001 }]
        }));

        let warnings = IntegrityChecker::new(BTreeSet::new()).check(&world);
        assert_eq!(
            messages(&warnings),
            vec!["room 3001: defined more than once; the last definition wins"]
        );
    }
}
