//! Core importer: zone, triggers, mobs, objects and rooms in one
//! all-or-nothing transaction.

use muditor_domain::WorldFile;

use crate::infrastructure::ports::{RepoError, WorldStore, WorldTx};

use super::types::CoreStats;

/// Write every core entity of `world` through `tx`. The caller decides
/// whether to commit.
pub async fn import_core(
    tx: &mut dyn WorldTx,
    world: &WorldFile,
) -> Result<CoreStats, RepoError> {
    let mut stats = CoreStats::default();

    tx.upsert_zone(&world.zone).await?;
    stats.zones = 1;

    for trigger in &world.triggers {
        tx.upsert_trigger(trigger).await?;
        stats.triggers += 1;
    }

    for mob in &world.mobs {
        tx.upsert_mob(mob).await?;
        tx.replace_mob_triggers(mob.id, &mob.triggers).await?;
        stats.mobs += 1;
    }

    for object in &world.objects {
        tx.upsert_object(object).await?;
        tx.replace_object_extra_descriptions(object.id, &object.extra_descriptions)
            .await?;
        tx.replace_object_affects(object.id, &object.affects).await?;
        tx.replace_object_triggers(object.id, &object.triggers).await?;
        stats.objects += 1;
    }

    for room in &world.rooms {
        tx.upsert_room(room).await?;
        tx.replace_room_extra_descriptions(room.id, &room.extra_descriptions)
            .await?;
        tx.replace_room_exits(room.id, &room.exits).await?;
        stats.exits += room.exits.len();
        stats.rooms += 1;
    }

    Ok(stats)
}

/// Run [`import_core`] in its own transaction: commit on success, roll
/// back on any failure.
pub async fn write_core(
    store: &dyn WorldStore,
    world: &WorldFile,
) -> Result<CoreStats, RepoError> {
    let mut tx = store.begin().await?;

    match import_core(tx.as_mut(), world).await {
        Ok(stats) => {
            tx.commit().await?;
            tracing::debug!(
                zone_id = %world.zone.id,
                mobs = stats.mobs,
                objects = stats.objects,
                rooms = stats.rooms,
                "Core entities committed"
            );
            Ok(stats)
        }
        Err(e) => {
            if let Err(rollback_error) = tx.rollback().await {
                tracing::warn!(error = %rollback_error, "Failed to roll back core transaction");
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockWorldStore, MockWorldTx};
    use muditor_domain::{
        Climate, Direction, Exit, Hemisphere, Room, RoomId, Zone, ZoneId, ZoneResetMode,
    };

    fn world_with_rooms(count: i64) -> WorldFile {
        let mut world = WorldFile::new(Zone {
            id: ZoneId::new(30),
            name: "Z".into(),
            top: None,
            lifespan: 30,
            reset_mode: ZoneResetMode::Normal,
            hemisphere: Hemisphere::Northwest,
            climate: Climate::None,
        });
        for n in 0..count {
            world.rooms.push(Room {
                id: RoomId::new(3001 + n),
                vnum: 1 + n,
                zone_id: ZoneId::new(30),
                name: format!("Room {n}"),
                description: String::new(),
                sector: Default::default(),
                flags: Default::default(),
                exits: vec![Exit {
                    direction: Direction::North,
                    destination: Some(RoomId::new(3100)),
                    description: String::new(),
                    keywords: Vec::new(),
                    key: None,
                    flags: Default::default(),
                }],
                extra_descriptions: Vec::new(),
            });
        }
        world
    }

    #[tokio::test]
    async fn commits_when_every_write_succeeds() {
        let mut tx = MockWorldTx::new();
        tx.expect_upsert_zone().times(1).returning(|_| Ok(()));
        tx.expect_upsert_room().times(2).returning(|_| Ok(()));
        tx.expect_replace_room_extra_descriptions()
            .times(2)
            .returning(|_, _| Ok(()));
        tx.expect_replace_room_exits()
            .times(2)
            .withf(|_, exits| exits.len() == 1)
            .returning(|_, _| Ok(()));
        tx.expect_commit().times(1).returning(|| Ok(()));
        tx.expect_rollback().never();

        let mut store = MockWorldStore::new();
        let mut tx = Some(tx);
        store
            .expect_begin()
            .times(1)
            .returning(move || Ok(Box::new(tx.take().expect("single begin")) as Box<dyn WorldTx>));

        let stats = write_core(&store, &world_with_rooms(2)).await.unwrap();
        assert_eq!(
            stats,
            CoreStats {
                zones: 1,
                rooms: 2,
                exits: 2,
                ..Default::default()
            }
        );
    }

    #[tokio::test]
    async fn rolls_back_whole_file_on_any_failure() {
        let mut tx = MockWorldTx::new();
        tx.expect_upsert_zone().returning(|_| Ok(()));
        tx.expect_replace_room_extra_descriptions()
            .returning(|_, _| Ok(()));
        tx.expect_replace_room_exits().returning(|_, _| Ok(()));
        tx.expect_upsert_room()
            .returning(|room| {
                if room.id == RoomId::new(3002) {
                    Err(RepoError::database("upsert_room", "disk full"))
                } else {
                    Ok(())
                }
            });
        tx.expect_commit().never();
        tx.expect_rollback().times(1).returning(|| Ok(()));

        let mut store = MockWorldStore::new();
        let mut tx = Some(tx);
        store
            .expect_begin()
            .returning(move || Ok(Box::new(tx.take().expect("single begin")) as Box<dyn WorldTx>));

        let err = write_core(&store, &world_with_rooms(3)).await.unwrap_err();
        assert!(matches!(err, RepoError::Database { operation: "upsert_room", .. }));
    }
}
