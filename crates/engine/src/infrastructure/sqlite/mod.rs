//! SQLite-backed world store.

mod classify;
mod schema;
mod tx;

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::infrastructure::ports::{ClockPort, RepoError, WorldStore, WorldTx};

pub use tx::SqliteWorldTx;

/// SQLite implementation of [`WorldStore`]. Foreign keys are enforced on
/// every pooled connection.
pub struct SqliteWorldStore {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteWorldStore {
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, RepoError> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| RepoError::database("connect", e))?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .map_err(|e| RepoError::database("connect", e))?;

        let store = Self { pool, clock };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create any missing tables.
    pub async fn ensure_schema(&self) -> Result<(), RepoError> {
        for statement in schema::SCHEMA {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("ensure_schema", e))?;
        }
        tracing::debug!(tables = schema::SCHEMA.len(), "World schema ready");
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl WorldStore for SqliteWorldStore {
    async fn begin(&self) -> Result<Box<dyn WorldTx>, RepoError> {
        let tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("begin", e))?;
        Ok(Box::new(SqliteWorldTx::new(tx, self.clock.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::ports::{MissingDependency, MockClockPort, WriteError};
    use chrono::{TimeZone, Utc};
    use muditor_domain::{
        CarriedItem, Climate, Hemisphere, MobId, MobReset, ObjectId, RoomId, Shop, ShopHours,
        ShopId, ShopItem, ShopMessages, Zone, ZoneId, ZoneResetMode,
    };

    async fn create_test_store() -> (SqliteWorldStore, tempfile::TempDir) {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite:{}", dir.path().join("world.db").display());
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        let store = SqliteWorldStore::connect(&url, 1, clock)
            .await
            .expect("connect");
        (store, dir)
    }

    fn zone(id: i64) -> Zone {
        Zone {
            id: ZoneId::new(id),
            name: format!("Zone {id}"),
            top: None,
            lifespan: 30,
            reset_mode: ZoneResetMode::Normal,
            hemisphere: Hemisphere::Northwest,
            climate: Climate::None,
        }
    }

    fn shop(keeper: Option<i64>) -> Shop {
        Shop {
            id: ShopId::new(3001),
            vnum: 1,
            zone_id: ZoneId::new(3),
            keeper: keeper.map(MobId::new),
            selling: Vec::new(),
            accepts: Vec::new(),
            buy_profit: 1.0,
            sell_profit: 1.0,
            temper: 0,
            flags: Default::default(),
            hours: Vec::new(),
            rooms: Vec::new(),
            messages: ShopMessages::default(),
        }
    }

    async fn count(store: &SqliteWorldStore, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(store.pool())
            .await
            .expect("count")
    }

    #[tokio::test]
    async fn upsert_zone_is_idempotent() {
        let (store, _dir) = create_test_store().await;

        for name in ["First", "Second"] {
            let mut tx = store.begin().await.unwrap();
            let mut z = zone(3);
            z.name = name.to_string();
            tx.upsert_zone(&z).await.unwrap();
            tx.commit().await.unwrap();
        }

        assert_eq!(count(&store, "zones").await, 1);
        let name: String = sqlx::query_scalar("SELECT name FROM zones WHERE id = 3")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(name, "Second");
    }

    #[tokio::test]
    async fn missing_keeper_is_classified() {
        let (store, _dir) = create_test_store().await;
        let mut tx = store.begin().await.unwrap();
        tx.upsert_zone(&zone(3)).await.unwrap();

        let err = tx.upsert_shop(&shop(Some(3099))).await.unwrap_err();
        assert!(matches!(
            err,
            WriteError::MissingDependency(MissingDependency::Mob(id)) if id == MobId::new(3099)
        ));

        // The transaction is still usable after a rejected write.
        tx.upsert_shop(&shop(None)).await.unwrap();
        tx.commit().await.unwrap();
        assert_eq!(count(&store, "shops").await, 1);
    }

    #[tokio::test]
    async fn deleting_a_shop_removes_what_it_owns() {
        let (store, _dir) = create_test_store().await;
        let mut tx = store.begin().await.unwrap();
        tx.upsert_zone(&zone(3)).await.unwrap();
        tx.upsert_shop(&shop(None)).await.unwrap();
        tx.replace_shop_rooms(ShopId::new(3001), &[RoomId::new(3001)])
            .await
            .unwrap();
        tx.replace_shop_hours(ShopId::new(3001), &[ShopHours { open: 6, close: 20 }])
            .await
            .unwrap();
        tx.commit().await.unwrap();

        let mut tx = store.begin().await.unwrap();
        tx.delete_shop(ShopId::new(3001)).await.unwrap();
        // Deleting a shop that is not stored is fine.
        tx.delete_shop(ShopId::new(4000)).await.unwrap();
        tx.commit().await.unwrap();

        assert_eq!(count(&store, "shops").await, 0);
        assert_eq!(count(&store, "shop_rooms").await, 0);
        assert_eq!(count(&store, "shop_hours").await, 0);
    }

    #[tokio::test]
    async fn missing_item_object_rejects_only_that_line() {
        let (store, _dir) = create_test_store().await;
        let mut tx = store.begin().await.unwrap();
        tx.upsert_zone(&zone(3)).await.unwrap();
        tx.upsert_shop(&shop(None)).await.unwrap();

        let missing = ShopItem {
            object_id: ObjectId::new(3050),
            amount: 1,
        };
        let err = tx
            .insert_shop_item(ShopId::new(3001), 0, &missing)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            WriteError::MissingDependency(MissingDependency::Object(_))
        ));
        tx.commit().await.unwrap();

        assert_eq!(count(&store, "shops").await, 1);
        assert_eq!(count(&store, "shop_items").await, 0);
    }

    #[tokio::test]
    async fn reset_with_missing_room_is_classified() {
        let (store, _dir) = create_test_store().await;
        let mut tx = store.begin().await.unwrap();
        tx.upsert_zone(&zone(3)).await.unwrap();

        let reset = MobReset {
            zone_id: ZoneId::new(3),
            ordinal: 0,
            mob: MobId::new(3001),
            room: RoomId::new(3001),
            max: 1,
            max_in_zone: None,
            probability: 100,
            comment: None,
            carrying: vec![CarriedItem {
                object_id: ObjectId::new(3010),
                max: 1,
                probability: 100,
            }],
            equipped: Vec::new(),
        };
        let err = tx.upsert_mob_reset(&reset).await.unwrap_err();
        // The mob is probed before the room.
        assert!(matches!(
            err,
            WriteError::MissingDependency(MissingDependency::Mob(_))
        ));
        tx.rollback().await.unwrap();
    }

    #[tokio::test]
    async fn finished_transaction_rejects_writes() {
        let (store, _dir) = create_test_store().await;
        let mut tx = store.begin().await.unwrap();
        tx.commit().await.unwrap();

        let err = tx.upsert_zone(&zone(3)).await.unwrap_err();
        assert!(matches!(err, RepoError::TransactionClosed));
        assert!(matches!(
            tx.rollback().await,
            Err(RepoError::TransactionClosed)
        ));
    }

    #[tokio::test]
    async fn writes_are_stamped_by_the_clock() {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite:{}", dir.path().join("world.db").display());
        let stamp = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
        let mut clock = MockClockPort::new();
        clock.expect_now().returning(move || stamp);
        let store = SqliteWorldStore::connect(&url, 1, Arc::new(clock))
            .await
            .expect("connect");

        let mut tx = store.begin().await.unwrap();
        tx.upsert_zone(&zone(3)).await.unwrap();
        tx.commit().await.unwrap();

        let updated_at: String = sqlx::query_scalar("SELECT updated_at FROM zones WHERE id = 3")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(updated_at, stamp.to_rfc3339());
    }
}
