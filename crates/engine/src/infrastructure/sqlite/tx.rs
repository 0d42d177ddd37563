//! SQLite implementation of [`WorldTx`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use sqlx::query::Query;
use sqlx::sqlite::SqliteArguments;
use sqlx::{Connection, Sqlite, SqliteConnection, Transaction};

use muditor_domain::{
    Affect, CarriedItem, EquippedItem, Exit, ExtraDescription, Mob, MobId, MobReset, Object,
    ObjectId, Room, RoomId, Shop, ShopAccept, ShopHours, ShopId, ShopItem, Trigger, TriggerId,
    Vocabulary, Zone, ZoneId,
};

use super::classify::classify_write_error;
use crate::infrastructure::ports::{ClockPort, MissingDependency, RepoError, WorldTx, WriteError};

/// One open SQLite transaction. Dropping it unfinished rolls it back.
pub struct SqliteWorldTx {
    tx: Option<Transaction<'static, Sqlite>>,
    clock: Arc<dyn ClockPort>,
}

impl SqliteWorldTx {
    pub(super) fn new(tx: Transaction<'static, Sqlite>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            tx: Some(tx),
            clock,
        }
    }

    fn conn(&mut self) -> Result<&mut SqliteConnection, RepoError> {
        self.tx.as_deref_mut().ok_or(RepoError::TransactionClosed)
    }

    fn now(&self) -> String {
        self.clock.now().to_rfc3339()
    }
}

fn json<T: Serialize + ?Sized>(value: &T) -> Result<String, RepoError> {
    serde_json::to_string(value).map_err(RepoError::serialization)
}

fn position(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// Run one write inside a savepoint so a rejected write leaves the rest of
/// the transaction untouched.
async fn guarded_write<'q>(
    conn: &mut SqliteConnection,
    operation: &'static str,
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    dependencies: &[MissingDependency],
) -> Result<(), WriteError> {
    let mut savepoint = conn
        .begin()
        .await
        .map_err(|e| RepoError::database(operation, e))?;

    match query.execute(&mut *savepoint).await {
        Ok(_) => {
            savepoint
                .commit()
                .await
                .map_err(|e| RepoError::database(operation, e))?;
            Ok(())
        }
        Err(err) => {
            let classified =
                classify_write_error(&mut savepoint, operation, err, dependencies).await;
            savepoint
                .rollback()
                .await
                .map_err(|e| RepoError::database(operation, e))?;
            Err(classified)
        }
    }
}

async fn replace_trigger_links(
    conn: &mut SqliteConnection,
    table: &'static str,
    owner_column: &'static str,
    owner_id: i64,
    triggers: &[TriggerId],
) -> Result<(), RepoError> {
    let operation = "replace_trigger_links";
    sqlx::query(&format!("DELETE FROM {table} WHERE {owner_column} = ?"))
        .bind(owner_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| RepoError::database(operation, e))?;

    let insert =
        format!("INSERT INTO {table} ({owner_column}, position, trigger_id) VALUES (?, ?, ?)");
    for (index, trigger) in triggers.iter().enumerate() {
        sqlx::query(&insert)
            .bind(owner_id)
            .bind(position(index))
            .bind(trigger.as_str())
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database(operation, e))?;
    }
    Ok(())
}

async fn replace_extra_descriptions(
    conn: &mut SqliteConnection,
    table: &'static str,
    owner_column: &'static str,
    owner_id: i64,
    descriptions: &[ExtraDescription],
) -> Result<(), RepoError> {
    let operation = "replace_extra_descriptions";
    sqlx::query(&format!("DELETE FROM {table} WHERE {owner_column} = ?"))
        .bind(owner_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| RepoError::database(operation, e))?;

    let insert = format!(
        "INSERT INTO {table} ({owner_column}, position, keywords, description) VALUES (?, ?, ?, ?)"
    );
    for (index, extra) in descriptions.iter().enumerate() {
        sqlx::query(&insert)
            .bind(owner_id)
            .bind(position(index))
            .bind(json(&extra.keywords)?)
            .bind(&extra.description)
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database(operation, e))?;
    }
    Ok(())
}

#[async_trait]
impl WorldTx for SqliteWorldTx {
    async fn upsert_zone(&mut self, zone: &Zone) -> Result<(), RepoError> {
        let now = self.now();
        let conn = self.conn()?;

        sqlx::query(
            r#"
            INSERT INTO zones (id, name, top, lifespan, reset_mode, hemisphere, climate, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                top = excluded.top,
                lifespan = excluded.lifespan,
                reset_mode = excluded.reset_mode,
                hemisphere = excluded.hemisphere,
                climate = excluded.climate,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(zone.id.get())
        .bind(&zone.name)
        .bind(zone.top)
        .bind(zone.lifespan)
        .bind(zone.reset_mode.as_str())
        .bind(zone.hemisphere.as_str())
        .bind(zone.climate.as_str())
        .bind(now)
        .execute(conn)
        .await
        .map_err(|e| RepoError::database("upsert_zone", e))?;

        Ok(())
    }

    async fn upsert_trigger(&mut self, trigger: &Trigger) -> Result<(), RepoError> {
        let now = self.now();
        let flags = json(&trigger.flags)?;
        let arglist = json(&trigger.arglist)?;
        let conn = self.conn()?;

        sqlx::query(
            r#"
            INSERT INTO triggers (id, zone_id, name, attach_type, flags, num_args, arglist, commands, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                zone_id = excluded.zone_id,
                name = excluded.name,
                attach_type = excluded.attach_type,
                flags = excluded.flags,
                num_args = excluded.num_args,
                arglist = excluded.arglist,
                commands = excluded.commands,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(trigger.id.as_str())
        .bind(trigger.zone_id.get())
        .bind(&trigger.name)
        .bind(trigger.attach_type.as_str())
        .bind(flags)
        .bind(trigger.num_args)
        .bind(arglist)
        .bind(&trigger.commands)
        .bind(now)
        .execute(conn)
        .await
        .map_err(|e| RepoError::database("upsert_trigger", e))?;

        Ok(())
    }

    async fn upsert_mob(&mut self, mob: &Mob) -> Result<(), RepoError> {
        let now = self.now();
        let keywords = json(&mob.keywords)?;
        let mob_flags = json(&mob.mob_flags)?;
        let effect_flags = json(&mob.effect_flags)?;
        let conn = self.conn()?;

        sqlx::query(
            r#"
            INSERT INTO mobs (
                id, zone_id, vnum, keywords, short_desc, long_desc, description,
                mob_flags, effect_flags, alignment, level, hit_roll, armor,
                hp_dice_num, hp_dice_size, hp_dice_bonus,
                damage_dice_num, damage_dice_size, damage_dice_bonus,
                copper, silver, gold, platinum,
                position, default_position, gender, race, size, life_force,
                composition, stance, damage_type, perception, concealment, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                zone_id = excluded.zone_id,
                vnum = excluded.vnum,
                keywords = excluded.keywords,
                short_desc = excluded.short_desc,
                long_desc = excluded.long_desc,
                description = excluded.description,
                mob_flags = excluded.mob_flags,
                effect_flags = excluded.effect_flags,
                alignment = excluded.alignment,
                level = excluded.level,
                hit_roll = excluded.hit_roll,
                armor = excluded.armor,
                hp_dice_num = excluded.hp_dice_num,
                hp_dice_size = excluded.hp_dice_size,
                hp_dice_bonus = excluded.hp_dice_bonus,
                damage_dice_num = excluded.damage_dice_num,
                damage_dice_size = excluded.damage_dice_size,
                damage_dice_bonus = excluded.damage_dice_bonus,
                copper = excluded.copper,
                silver = excluded.silver,
                gold = excluded.gold,
                platinum = excluded.platinum,
                position = excluded.position,
                default_position = excluded.default_position,
                gender = excluded.gender,
                race = excluded.race,
                size = excluded.size,
                life_force = excluded.life_force,
                composition = excluded.composition,
                stance = excluded.stance,
                damage_type = excluded.damage_type,
                perception = excluded.perception,
                concealment = excluded.concealment,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(mob.id.get())
        .bind(mob.zone_id.get())
        .bind(mob.vnum)
        .bind(keywords)
        .bind(&mob.short_desc)
        .bind(&mob.long_desc)
        .bind(&mob.description)
        .bind(mob_flags)
        .bind(effect_flags)
        .bind(mob.alignment)
        .bind(mob.level)
        .bind(mob.hit_roll)
        .bind(mob.armor)
        .bind(mob.hp_dice.num)
        .bind(mob.hp_dice.size)
        .bind(mob.hp_dice.bonus)
        .bind(mob.damage_dice.num)
        .bind(mob.damage_dice.size)
        .bind(mob.damage_dice.bonus)
        .bind(mob.money.copper)
        .bind(mob.money.silver)
        .bind(mob.money.gold)
        .bind(mob.money.platinum)
        .bind(mob.position.as_str())
        .bind(mob.default_position.as_str())
        .bind(mob.gender.as_str())
        .bind(mob.race.as_str())
        .bind(mob.size.as_str())
        .bind(mob.life_force.as_str())
        .bind(mob.composition.as_str())
        .bind(mob.stance.as_str())
        .bind(mob.damage_type.as_str())
        .bind(mob.perception)
        .bind(mob.concealment)
        .bind(now)
        .execute(conn)
        .await
        .map_err(|e| RepoError::database("upsert_mob", e))?;

        Ok(())
    }

    async fn replace_mob_triggers(
        &mut self,
        mob_id: MobId,
        triggers: &[TriggerId],
    ) -> Result<(), RepoError> {
        let conn = self.conn()?;
        replace_trigger_links(conn, "mob_triggers", "mob_id", mob_id.get(), triggers).await
    }

    async fn upsert_object(&mut self, object: &Object) -> Result<(), RepoError> {
        let now = self.now();
        let keywords = json(&object.keywords)?;
        let flags = json(&object.flags)?;
        let wear_flags = json(&object.wear_flags)?;
        let effect_flags = json(&object.effect_flags)?;
        let values = json(&object.values)?;
        let conn = self.conn()?;

        sqlx::query(
            r#"
            INSERT INTO objects (
                id, zone_id, vnum, keywords, short_desc, description, action_desc,
                object_type, flags, wear_flags, effect_flags, weight, cost, timer,
                decompose_timer, level, concealment, values_json, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                zone_id = excluded.zone_id,
                vnum = excluded.vnum,
                keywords = excluded.keywords,
                short_desc = excluded.short_desc,
                description = excluded.description,
                action_desc = excluded.action_desc,
                object_type = excluded.object_type,
                flags = excluded.flags,
                wear_flags = excluded.wear_flags,
                effect_flags = excluded.effect_flags,
                weight = excluded.weight,
                cost = excluded.cost,
                timer = excluded.timer,
                decompose_timer = excluded.decompose_timer,
                level = excluded.level,
                concealment = excluded.concealment,
                values_json = excluded.values_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(object.id.get())
        .bind(object.zone_id.get())
        .bind(object.vnum)
        .bind(keywords)
        .bind(&object.short_desc)
        .bind(&object.description)
        .bind(&object.action_desc)
        .bind(object.object_type.as_str())
        .bind(flags)
        .bind(wear_flags)
        .bind(effect_flags)
        .bind(object.weight)
        .bind(object.cost)
        .bind(object.timer)
        .bind(object.decompose_timer)
        .bind(object.level)
        .bind(object.concealment)
        .bind(values)
        .bind(now)
        .execute(conn)
        .await
        .map_err(|e| RepoError::database("upsert_object", e))?;

        Ok(())
    }

    async fn replace_object_extra_descriptions(
        &mut self,
        object_id: ObjectId,
        descriptions: &[ExtraDescription],
    ) -> Result<(), RepoError> {
        let conn = self.conn()?;
        replace_extra_descriptions(
            conn,
            "object_extra_descriptions",
            "object_id",
            object_id.get(),
            descriptions,
        )
        .await
    }

    async fn replace_object_affects(
        &mut self,
        object_id: ObjectId,
        affects: &[Affect],
    ) -> Result<(), RepoError> {
        let conn = self.conn()?;

        sqlx::query("DELETE FROM object_affects WHERE object_id = ?")
            .bind(object_id.get())
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("replace_object_affects", e))?;

        for (index, affect) in affects.iter().enumerate() {
            sqlx::query(
                "INSERT INTO object_affects (object_id, position, location, modifier) VALUES (?, ?, ?, ?)",
            )
            .bind(object_id.get())
            .bind(position(index))
            .bind(affect.location.as_str())
            .bind(affect.modifier)
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("replace_object_affects", e))?;
        }
        Ok(())
    }

    async fn replace_object_triggers(
        &mut self,
        object_id: ObjectId,
        triggers: &[TriggerId],
    ) -> Result<(), RepoError> {
        let conn = self.conn()?;
        replace_trigger_links(conn, "object_triggers", "object_id", object_id.get(), triggers)
            .await
    }

    async fn upsert_room(&mut self, room: &Room) -> Result<(), RepoError> {
        let now = self.now();
        let flags = json(&room.flags)?;
        let conn = self.conn()?;

        sqlx::query(
            r#"
            INSERT INTO rooms (id, zone_id, vnum, name, description, sector, flags, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                zone_id = excluded.zone_id,
                vnum = excluded.vnum,
                name = excluded.name,
                description = excluded.description,
                sector = excluded.sector,
                flags = excluded.flags,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(room.id.get())
        .bind(room.zone_id.get())
        .bind(room.vnum)
        .bind(&room.name)
        .bind(&room.description)
        .bind(room.sector.as_str())
        .bind(flags)
        .bind(now)
        .execute(conn)
        .await
        .map_err(|e| RepoError::database("upsert_room", e))?;

        Ok(())
    }

    async fn replace_room_extra_descriptions(
        &mut self,
        room_id: RoomId,
        descriptions: &[ExtraDescription],
    ) -> Result<(), RepoError> {
        let conn = self.conn()?;
        replace_extra_descriptions(
            conn,
            "room_extra_descriptions",
            "room_id",
            room_id.get(),
            descriptions,
        )
        .await
    }

    async fn replace_room_exits(
        &mut self,
        room_id: RoomId,
        exits: &[Exit],
    ) -> Result<(), RepoError> {
        let conn = self.conn()?;

        sqlx::query("DELETE FROM room_exits WHERE room_id = ?")
            .bind(room_id.get())
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("replace_room_exits", e))?;

        for exit in exits {
            sqlx::query(
                r#"
                INSERT INTO room_exits (room_id, direction, destination_id, description, keywords, key_id, flags)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(room_id.get())
            .bind(exit.direction.as_str())
            .bind(exit.destination.map(RoomId::get))
            .bind(&exit.description)
            .bind(json(&exit.keywords)?)
            .bind(exit.key.map(ObjectId::get))
            .bind(json(&exit.flags)?)
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("replace_room_exits", e))?;
        }
        Ok(())
    }

    async fn upsert_shop(&mut self, shop: &Shop) -> Result<(), WriteError> {
        let now = self.now();
        let flags = json(&shop.flags)?;
        let mut dependencies = vec![MissingDependency::Zone(shop.zone_id)];
        if let Some(keeper) = shop.keeper {
            dependencies.push(MissingDependency::Mob(keeper));
        }
        let conn = self.conn()?;

        let query = sqlx::query(
            r#"
            INSERT INTO shops (
                id, zone_id, vnum, keeper_id, buy_profit, sell_profit, temper, flags,
                no_such_item_message, do_not_buy_message, missing_cash_message,
                buy_message, sell_message, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                zone_id = excluded.zone_id,
                vnum = excluded.vnum,
                keeper_id = excluded.keeper_id,
                buy_profit = excluded.buy_profit,
                sell_profit = excluded.sell_profit,
                temper = excluded.temper,
                flags = excluded.flags,
                no_such_item_message = excluded.no_such_item_message,
                do_not_buy_message = excluded.do_not_buy_message,
                missing_cash_message = excluded.missing_cash_message,
                buy_message = excluded.buy_message,
                sell_message = excluded.sell_message,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(shop.id.get())
        .bind(shop.zone_id.get())
        .bind(shop.vnum)
        .bind(shop.keeper.map(MobId::get))
        .bind(shop.buy_profit)
        .bind(shop.sell_profit)
        .bind(shop.temper)
        .bind(flags)
        .bind(shop.messages.no_such_item.as_deref())
        .bind(shop.messages.do_not_buy.as_deref())
        .bind(shop.messages.missing_cash.as_deref())
        .bind(shop.messages.buy.as_deref())
        .bind(shop.messages.sell.as_deref())
        .bind(now);

        guarded_write(conn, "upsert_shop", query, &dependencies).await
    }

    async fn delete_shop(&mut self, shop_id: ShopId) -> Result<(), RepoError> {
        let conn = self.conn()?;

        sqlx::query("DELETE FROM shops WHERE id = ?")
            .bind(shop_id.get())
            .execute(conn)
            .await
            .map_err(|e| RepoError::database("delete_shop", e))?;
        Ok(())
    }

    async fn replace_shop_accepts(
        &mut self,
        shop_id: ShopId,
        accepts: &[ShopAccept],
    ) -> Result<(), RepoError> {
        let conn = self.conn()?;

        sqlx::query("DELETE FROM shop_accepts WHERE shop_id = ?")
            .bind(shop_id.get())
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("replace_shop_accepts", e))?;

        for (index, accept) in accepts.iter().enumerate() {
            sqlx::query(
                "INSERT INTO shop_accepts (shop_id, position, object_type, keywords) VALUES (?, ?, ?, ?)",
            )
            .bind(shop_id.get())
            .bind(position(index))
            .bind(accept.object_type.as_str())
            .bind(&accept.keywords)
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("replace_shop_accepts", e))?;
        }
        Ok(())
    }

    async fn replace_shop_hours(
        &mut self,
        shop_id: ShopId,
        hours: &[ShopHours],
    ) -> Result<(), RepoError> {
        let conn = self.conn()?;

        sqlx::query("DELETE FROM shop_hours WHERE shop_id = ?")
            .bind(shop_id.get())
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("replace_shop_hours", e))?;

        for (index, window) in hours.iter().enumerate() {
            sqlx::query("INSERT INTO shop_hours (shop_id, position, open, close) VALUES (?, ?, ?, ?)")
                .bind(shop_id.get())
                .bind(position(index))
                .bind(window.open)
                .bind(window.close)
                .execute(&mut *conn)
                .await
                .map_err(|e| RepoError::database("replace_shop_hours", e))?;
        }
        Ok(())
    }

    async fn replace_shop_rooms(
        &mut self,
        shop_id: ShopId,
        rooms: &[RoomId],
    ) -> Result<(), RepoError> {
        let conn = self.conn()?;

        sqlx::query("DELETE FROM shop_rooms WHERE shop_id = ?")
            .bind(shop_id.get())
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("replace_shop_rooms", e))?;

        for room in rooms {
            sqlx::query(
                "INSERT INTO shop_rooms (shop_id, room_id) VALUES (?, ?) ON CONFLICT(shop_id, room_id) DO NOTHING",
            )
            .bind(shop_id.get())
            .bind(room.get())
            .execute(&mut *conn)
            .await
            .map_err(|e| RepoError::database("replace_shop_rooms", e))?;
        }
        Ok(())
    }

    async fn clear_shop_items(&mut self, shop_id: ShopId) -> Result<(), RepoError> {
        let conn = self.conn()?;

        sqlx::query("DELETE FROM shop_items WHERE shop_id = ?")
            .bind(shop_id.get())
            .execute(conn)
            .await
            .map_err(|e| RepoError::database("clear_shop_items", e))?;
        Ok(())
    }

    async fn insert_shop_item(
        &mut self,
        shop_id: ShopId,
        position: i64,
        item: &ShopItem,
    ) -> Result<(), WriteError> {
        let conn = self.conn()?;

        let query = sqlx::query(
            "INSERT INTO shop_items (shop_id, position, object_id, amount) VALUES (?, ?, ?, ?)",
        )
        .bind(shop_id.get())
        .bind(position)
        .bind(item.object_id.get())
        .bind(item.amount);

        guarded_write(
            conn,
            "insert_shop_item",
            query,
            &[MissingDependency::Object(item.object_id)],
        )
        .await
    }

    async fn upsert_mob_reset(&mut self, reset: &MobReset) -> Result<i64, WriteError> {
        let now = self.now();
        let dependencies = [
            MissingDependency::Zone(reset.zone_id),
            MissingDependency::Mob(reset.mob),
            MissingDependency::Room(reset.room),
        ];
        let conn = self.conn()?;

        let mut savepoint = conn
            .begin()
            .await
            .map_err(|e| RepoError::database("upsert_mob_reset", e))?;

        let result: Result<i64, sqlx::Error> = sqlx::query_scalar(
            r#"
            INSERT INTO mob_resets (
                zone_id, ordinal, mob_id, room_id, max_instances, max_in_zone,
                probability, comment, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(zone_id, ordinal) DO UPDATE SET
                mob_id = excluded.mob_id,
                room_id = excluded.room_id,
                max_instances = excluded.max_instances,
                max_in_zone = excluded.max_in_zone,
                probability = excluded.probability,
                comment = excluded.comment,
                updated_at = excluded.updated_at
            RETURNING id
            "#,
        )
        .bind(reset.zone_id.get())
        .bind(reset.ordinal)
        .bind(reset.mob.get())
        .bind(reset.room.get())
        .bind(reset.max)
        .bind(reset.max_in_zone)
        .bind(reset.probability)
        .bind(reset.comment.as_deref())
        .bind(now)
        .fetch_one(&mut *savepoint)
        .await;

        match result {
            Ok(reset_key) => {
                savepoint
                    .commit()
                    .await
                    .map_err(|e| RepoError::database("upsert_mob_reset", e))?;
                Ok(reset_key)
            }
            Err(err) => {
                let classified =
                    classify_write_error(&mut savepoint, "upsert_mob_reset", err, &dependencies)
                        .await;
                savepoint
                    .rollback()
                    .await
                    .map_err(|e| RepoError::database("upsert_mob_reset", e))?;
                Err(classified)
            }
        }
    }

    async fn delete_mob_reset(&mut self, zone_id: ZoneId, ordinal: i64) -> Result<(), RepoError> {
        let conn = self.conn()?;

        sqlx::query("DELETE FROM mob_resets WHERE zone_id = ? AND ordinal = ?")
            .bind(zone_id.get())
            .bind(ordinal)
            .execute(conn)
            .await
            .map_err(|e| RepoError::database("delete_mob_reset", e))?;
        Ok(())
    }

    async fn prune_mob_resets(&mut self, zone_id: ZoneId, keep: i64) -> Result<u64, RepoError> {
        let conn = self.conn()?;

        let result = sqlx::query("DELETE FROM mob_resets WHERE zone_id = ? AND ordinal >= ?")
            .bind(zone_id.get())
            .bind(keep)
            .execute(conn)
            .await
            .map_err(|e| RepoError::database("prune_mob_resets", e))?;
        Ok(result.rows_affected())
    }

    async fn clear_mob_reset_items(&mut self, reset_key: i64) -> Result<(), RepoError> {
        let conn = self.conn()?;

        for table in ["mob_reset_carried", "mob_reset_equipped"] {
            sqlx::query(&format!("DELETE FROM {table} WHERE reset_id = ?"))
                .bind(reset_key)
                .execute(&mut *conn)
                .await
                .map_err(|e| RepoError::database("clear_mob_reset_items", e))?;
        }
        Ok(())
    }

    async fn insert_carried_item(
        &mut self,
        reset_key: i64,
        position: i64,
        item: &CarriedItem,
    ) -> Result<(), WriteError> {
        let conn = self.conn()?;

        let query = sqlx::query(
            r#"
            INSERT INTO mob_reset_carried (reset_id, position, object_id, max_instances, probability)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(reset_key)
        .bind(position)
        .bind(item.object_id.get())
        .bind(item.max)
        .bind(item.probability);

        guarded_write(
            conn,
            "insert_carried_item",
            query,
            &[MissingDependency::Object(item.object_id)],
        )
        .await
    }

    async fn insert_equipped_item(
        &mut self,
        reset_key: i64,
        position: i64,
        item: &EquippedItem,
    ) -> Result<(), WriteError> {
        let conn = self.conn()?;

        let query = sqlx::query(
            r#"
            INSERT INTO mob_reset_equipped (reset_id, position, object_id, location, max_instances, probability)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(reset_key)
        .bind(position)
        .bind(item.object_id.get())
        .bind(item.location.as_str())
        .bind(item.max)
        .bind(item.probability);

        guarded_write(
            conn,
            "insert_equipped_item",
            query,
            &[MissingDependency::Object(item.object_id)],
        )
        .await
    }

    async fn commit(&mut self) -> Result<(), RepoError> {
        let tx = self.tx.take().ok_or(RepoError::TransactionClosed)?;
        tx.commit()
            .await
            .map_err(|e| RepoError::database("commit", e))
    }

    async fn rollback(&mut self) -> Result<(), RepoError> {
        let tx = self.tx.take().ok_or(RepoError::TransactionClosed)?;
        tx.rollback()
            .await
            .map_err(|e| RepoError::database("rollback", e))
    }
}
