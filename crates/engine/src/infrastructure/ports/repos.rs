//! Storage ports for the world import pipeline.

use async_trait::async_trait;
use muditor_domain::{
    Affect, CarriedItem, EquippedItem, Exit, ExtraDescription, Mob, MobId, MobReset, Object,
    ObjectId, Room, RoomId, Shop, ShopAccept, ShopHours, ShopId, ShopItem, Trigger, TriggerId,
    Zone, ZoneId,
};

use super::error::{RepoError, WriteError};

// =============================================================================
// World Store
// =============================================================================

/// A transactional world store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorldStore: Send + Sync {
    /// Open a new transaction. Nothing written through it is visible until
    /// [`WorldTx::commit`].
    async fn begin(&self) -> Result<Box<dyn WorldTx>, RepoError>;
}

/// Writes scoped to one open transaction.
///
/// Every `upsert_*` is keyed by the entity's stable ID (resets by zone and
/// ordinal) so repeating a write converges. `replace_*` operations delete an
/// owner's collection and reinsert it. `delete_*` and `prune_*` remove rows a
/// file no longer defines.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WorldTx: Send {
    // Core entities
    async fn upsert_zone(&mut self, zone: &Zone) -> Result<(), RepoError>;
    async fn upsert_trigger(&mut self, trigger: &Trigger) -> Result<(), RepoError>;
    async fn upsert_mob(&mut self, mob: &Mob) -> Result<(), RepoError>;
    async fn replace_mob_triggers(
        &mut self,
        mob_id: MobId,
        triggers: &[TriggerId],
    ) -> Result<(), RepoError>;
    async fn upsert_object(&mut self, object: &Object) -> Result<(), RepoError>;
    async fn replace_object_extra_descriptions(
        &mut self,
        object_id: ObjectId,
        descriptions: &[ExtraDescription],
    ) -> Result<(), RepoError>;
    async fn replace_object_affects(
        &mut self,
        object_id: ObjectId,
        affects: &[Affect],
    ) -> Result<(), RepoError>;
    async fn replace_object_triggers(
        &mut self,
        object_id: ObjectId,
        triggers: &[TriggerId],
    ) -> Result<(), RepoError>;
    async fn upsert_room(&mut self, room: &Room) -> Result<(), RepoError>;
    async fn replace_room_extra_descriptions(
        &mut self,
        room_id: RoomId,
        descriptions: &[ExtraDescription],
    ) -> Result<(), RepoError>;
    async fn replace_room_exits(
        &mut self,
        room_id: RoomId,
        exits: &[Exit],
    ) -> Result<(), RepoError>;

    // Shops
    async fn upsert_shop(&mut self, shop: &Shop) -> Result<(), WriteError>;
    /// Remove a shop and everything it owns. Absent shops are not an error.
    async fn delete_shop(&mut self, shop_id: ShopId) -> Result<(), RepoError>;
    async fn replace_shop_accepts(
        &mut self,
        shop_id: ShopId,
        accepts: &[ShopAccept],
    ) -> Result<(), RepoError>;
    async fn replace_shop_hours(
        &mut self,
        shop_id: ShopId,
        hours: &[ShopHours],
    ) -> Result<(), RepoError>;
    async fn replace_shop_rooms(
        &mut self,
        shop_id: ShopId,
        rooms: &[RoomId],
    ) -> Result<(), RepoError>;
    async fn clear_shop_items(&mut self, shop_id: ShopId) -> Result<(), RepoError>;
    /// Insert one stock line. A missing object rejects only this line.
    async fn insert_shop_item(
        &mut self,
        shop_id: ShopId,
        position: i64,
        item: &ShopItem,
    ) -> Result<(), WriteError>;

    // Mob resets
    /// Upsert a reset rule, returning its storage key.
    async fn upsert_mob_reset(&mut self, reset: &MobReset) -> Result<i64, WriteError>;
    async fn delete_mob_reset(&mut self, zone_id: ZoneId, ordinal: i64) -> Result<(), RepoError>;
    /// Remove the zone's resets at `keep` and above, returning how many went.
    async fn prune_mob_resets(&mut self, zone_id: ZoneId, keep: i64) -> Result<u64, RepoError>;
    async fn clear_mob_reset_items(&mut self, reset_key: i64) -> Result<(), RepoError>;
    async fn insert_carried_item(
        &mut self,
        reset_key: i64,
        position: i64,
        item: &CarriedItem,
    ) -> Result<(), WriteError>;
    async fn insert_equipped_item(
        &mut self,
        reset_key: i64,
        position: i64,
        item: &EquippedItem,
    ) -> Result<(), WriteError>;

    // Transaction control
    async fn commit(&mut self) -> Result<(), RepoError>;
    async fn rollback(&mut self) -> Result<(), RepoError>;
}
