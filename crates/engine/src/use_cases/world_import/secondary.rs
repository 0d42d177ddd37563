//! Secondary importer: shops and mob resets, each in its own transaction.
//!
//! A shop or reset whose required dependency is missing is skipped by
//! itself, and any copy stored by an earlier import is removed. Inside one,
//! a stock or item line with a missing object is skipped by itself. Any
//! other storage failure stops the importer.

use muditor_domain::{MobReset, Shop, ShopId, WorldFile, ZoneId};

use crate::infrastructure::importers::{EntityKind, ValidationError};
use crate::infrastructure::ports::{RepoError, WorldStore, WorldTx, WriteError};

use super::types::SecondaryStats;

pub async fn import_secondary(
    store: &dyn WorldStore,
    world: &WorldFile,
) -> Result<SecondaryStats, RepoError> {
    let mut stats = SecondaryStats::default();

    for shop in &world.shops {
        let mut tx = store.begin().await?;
        let mut line_warnings = Vec::new();
        match write_shop(tx.as_mut(), shop, &mut line_warnings).await {
            Ok(()) => {
                tx.commit().await?;
                stats.shops += 1;
                stats.skipped_lines += line_warnings.len();
                stats.warnings.extend(line_warnings);
            }
            Err(WriteError::MissingDependency(missing)) => {
                tx.rollback().await?;
                tracing::warn!(shop_id = %shop.id, missing = %missing, "Skipping shop");
                discard_shop(store, shop.id).await?;
                stats.skipped_shops += 1;
                stats.warnings.push(ValidationError::for_entity(
                    EntityKind::Shop,
                    shop.id,
                    format!("skipped: missing {missing}"),
                ));
            }
            Err(WriteError::Repo(e)) => {
                abandon(tx.as_mut()).await;
                return Err(e);
            }
        }
    }

    for reset in &world.mob_resets {
        let mut tx = store.begin().await?;
        let mut line_warnings = Vec::new();
        match write_mob_reset(tx.as_mut(), reset, &mut line_warnings).await {
            Ok(()) => {
                tx.commit().await?;
                stats.mob_resets += 1;
                stats.skipped_lines += line_warnings.len();
                stats.warnings.extend(line_warnings);
            }
            Err(WriteError::MissingDependency(missing)) => {
                tx.rollback().await?;
                tracing::warn!(
                    reset = %reset.describe(),
                    mob_id = %reset.mob,
                    room_id = %reset.room,
                    missing = %missing,
                    "Skipping mob reset"
                );
                discard_mob_reset(store, reset.zone_id, reset.ordinal).await?;
                stats.skipped_resets += 1;
                stats.warnings.push(ValidationError::for_entity(
                    EntityKind::MobReset,
                    reset.ordinal,
                    format!("skipped: missing {missing}"),
                ));
            }
            Err(WriteError::Repo(e)) => {
                abandon(tx.as_mut()).await;
                return Err(e);
            }
        }
    }

    let keep = i64::try_from(world.mob_resets.len()).unwrap_or(i64::MAX);
    prune_mob_resets(store, world.zone.id, keep).await?;

    Ok(stats)
}

/// Remove a skipped shop left over from an earlier import.
async fn discard_shop(store: &dyn WorldStore, shop_id: ShopId) -> Result<(), RepoError> {
    let mut tx = store.begin().await?;
    match tx.delete_shop(shop_id).await {
        Ok(()) => tx.commit().await,
        Err(e) => {
            abandon(tx.as_mut()).await;
            Err(e)
        }
    }
}

/// Remove a skipped reset left over from an earlier import.
async fn discard_mob_reset(
    store: &dyn WorldStore,
    zone_id: ZoneId,
    ordinal: i64,
) -> Result<(), RepoError> {
    let mut tx = store.begin().await?;
    match tx.delete_mob_reset(zone_id, ordinal).await {
        Ok(()) => tx.commit().await,
        Err(e) => {
            abandon(tx.as_mut()).await;
            Err(e)
        }
    }
}

/// Remove resets whose ordinal the file no longer reaches.
async fn prune_mob_resets(
    store: &dyn WorldStore,
    zone_id: ZoneId,
    keep: i64,
) -> Result<(), RepoError> {
    let mut tx = store.begin().await?;
    match tx.prune_mob_resets(zone_id, keep).await {
        Ok(removed) => {
            tx.commit().await?;
            if removed > 0 {
                tracing::info!(zone_id = %zone_id, removed, "Removed stale mob resets");
            }
            Ok(())
        }
        Err(e) => {
            abandon(tx.as_mut()).await;
            Err(e)
        }
    }
}

async fn abandon(tx: &mut dyn WorldTx) {
    if let Err(e) = tx.rollback().await {
        tracing::warn!(error = %e, "Failed to roll back secondary transaction");
    }
}

/// Write one line; a missing object skips only this line.
fn skip_missing_line(
    result: Result<(), WriteError>,
    kind: EntityKind,
    owner_id: String,
    line: usize,
    warnings: &mut Vec<ValidationError>,
) -> Result<(), WriteError> {
    match result {
        Ok(()) => Ok(()),
        Err(WriteError::MissingDependency(missing)) => {
            tracing::warn!(
                entity = %kind,
                id = %owner_id,
                line,
                missing = %missing,
                "Skipping line"
            );
            warnings.push(ValidationError::for_entity(
                kind,
                owner_id,
                format!("line {line} skipped: missing {missing}"),
            ));
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn position(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

async fn write_shop(
    tx: &mut dyn WorldTx,
    shop: &Shop,
    warnings: &mut Vec<ValidationError>,
) -> Result<(), WriteError> {
    tx.upsert_shop(shop).await?;
    tx.replace_shop_accepts(shop.id, &shop.accepts).await?;
    tx.replace_shop_hours(shop.id, &shop.hours).await?;
    tx.replace_shop_rooms(shop.id, &shop.rooms).await?;

    tx.clear_shop_items(shop.id).await?;
    for (index, item) in shop.selling.iter().enumerate() {
        let result = tx.insert_shop_item(shop.id, position(index), item).await;
        skip_missing_line(result, EntityKind::Shop, shop.id.to_string(), index, warnings)?;
    }
    Ok(())
}

async fn write_mob_reset(
    tx: &mut dyn WorldTx,
    reset: &MobReset,
    warnings: &mut Vec<ValidationError>,
) -> Result<(), WriteError> {
    let reset_key = tx.upsert_mob_reset(reset).await?;
    tx.clear_mob_reset_items(reset_key).await?;

    let owner = reset.ordinal.to_string();
    for (index, item) in reset.carrying.iter().enumerate() {
        let result = tx.insert_carried_item(reset_key, position(index), item).await;
        skip_missing_line(result, EntityKind::CarriedItem, owner.clone(), index, warnings)?;
    }
    for (index, item) in reset.equipped.iter().enumerate() {
        let result = tx.insert_equipped_item(reset_key, position(index), item).await;
        skip_missing_line(result, EntityKind::EquippedItem, owner.clone(), index, warnings)?;
    }
    Ok(())
}
