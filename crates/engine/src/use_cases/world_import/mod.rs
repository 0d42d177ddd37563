//! World import use case.
//!
//! Each file runs through parse, normalize, integrity check, core import
//! and secondary import. Directory runs are sequential in numeric file
//! order and keep going past a failed file.

mod core_import;
mod error;
mod integrity;
mod secondary;
mod types;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use muditor_domain::ZoneId;
use tracing::Instrument;

use crate::infrastructure::config::ImportConfig;
use crate::infrastructure::importers::{parse, NormalizedWorld, Normalizer, ValidationError};
use crate::infrastructure::ports::WorldStore;

pub use core_import::{import_core, write_core};
pub use error::ImportError;
pub use integrity::IntegrityChecker;
pub use secondary::import_secondary;
pub use types::{CoreStats, FileReport, ImportResult, ImportStats, RunResult, SecondaryStats};

/// Imports legacy world files into a [`WorldStore`].
pub struct ImportWorld {
    store: Arc<dyn WorldStore>,
    normalizer: Normalizer,
    integrity: IntegrityChecker,
}

impl ImportWorld {
    pub fn new(store: Arc<dyn WorldStore>, config: &ImportConfig) -> Self {
        Self {
            store,
            normalizer: Normalizer::new(config.legacy_zone_zero_id),
            integrity: IntegrityChecker::new(config.known_rooms.clone()),
        }
    }

    /// Import one file. Failures are reported in the result, never raised.
    pub async fn import_file(&self, path: &Path) -> ImportResult {
        let span = tracing::info_span!("import_file", path = %path.display());
        self.run_file(path).instrument(span).await
    }

    /// Import every `.json` file in `dir`.
    ///
    /// Only an unreadable directory is an error. Per-file failures are
    /// recorded in the returned [`RunResult`].
    pub async fn import_directory(&self, dir: &Path) -> Result<RunResult, ImportError> {
        let started = Instant::now();
        let files = list_world_files(dir).await?;
        tracing::info!(dir = %dir.display(), files = files.len(), "Importing world directory");

        let mut run = RunResult::default();
        for path in files {
            let result = self.import_file(&path).await;
            if let Some(stats) = &result.stats {
                run.stats.absorb(stats);
            }
            run.files.push(FileReport { path, result });
        }
        run.stats.time_taken_ms = elapsed_ms(started);

        let total = run.files.len();
        let failed = run.failed_files().count();
        run.success = failed == 0;
        run.message = format!("Imported {} of {} files", total - failed, total);

        tracing::info!(
            files = total,
            failed,
            zones = run.stats.zones,
            rooms = run.stats.rooms,
            mobs = run.stats.mobs,
            objects = run.stats.objects,
            shops = run.stats.shops,
            triggers = run.stats.triggers,
            mob_resets = run.stats.mob_resets,
            time_taken_ms = run.stats.time_taken_ms,
            "World directory import finished"
        );
        Ok(run)
    }

    async fn run_file(&self, path: &Path) -> ImportResult {
        let started = Instant::now();
        let mut warnings = Vec::new();

        match self.pipeline(path, &mut warnings).await {
            Ok((zone_id, mut stats)) => {
                stats.time_taken_ms = elapsed_ms(started);
                tracing::info!(
                    zone_id = %zone_id,
                    rooms = stats.rooms,
                    mobs = stats.mobs,
                    objects = stats.objects,
                    shops = stats.shops,
                    triggers = stats.triggers,
                    mob_resets = stats.mob_resets,
                    skipped = stats.skipped_shops + stats.skipped_resets + stats.skipped_lines,
                    warnings = warnings.len(),
                    time_taken_ms = stats.time_taken_ms,
                    "Imported world file"
                );
                ImportResult::succeeded(format!("Imported zone {zone_id}"), stats, warnings)
            }
            Err(e) => {
                tracing::warn!(error = %e, "World file import failed");
                ImportResult::failed(e.to_string(), e.to_validation_errors(), warnings)
            }
        }
    }

    async fn pipeline(
        &self,
        path: &Path,
        warnings: &mut Vec<ValidationError>,
    ) -> Result<(ZoneId, ImportStats), ImportError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ImportError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let raw = parse(&bytes)?;
        let NormalizedWorld {
            world,
            warnings: normalize_warnings,
        } = self.normalizer.normalize(raw);
        warnings.extend(normalize_warnings);
        warnings.extend(self.integrity.check(&world));

        let core = write_core(self.store.as_ref(), &world)
            .await
            .map_err(ImportError::Core)?;
        let secondary = import_secondary(self.store.as_ref(), &world)
            .await
            .map_err(ImportError::Secondary)?;

        let stats = ImportStats::from_parts(&core, &secondary);
        warnings.extend(secondary.warnings);
        Ok((world.zone.id, stats))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// `.json` files in `dir`, ordered by [`file_order`].
async fn list_world_files(dir: &Path) -> Result<Vec<PathBuf>, ImportError> {
    let io_error = |source| ImportError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_error)?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        let path = entry.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && entry.file_type().await.map_err(io_error)?.is_file() {
            files.push(path);
        }
    }

    files.sort_by_key(|path| file_order(path));
    Ok(files)
}

/// Numbered files first by number, then the rest by name.
fn file_order(path: &Path) -> (bool, u64, String) {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_number(&stem) {
        Some(number) => (false, number, stem),
        None => (true, 0, stem),
    }
}

/// The first run of ASCII digits in a file stem.
fn file_number(stem: &str) -> Option<u64> {
    let start = stem.find(|c: char| c.is_ascii_digit())?;
    let digits: &str = stem[start..]
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or_default();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::sqlite::SqliteWorldStore;
    use chrono::{TimeZone, Utc};
    use muditor_domain::RoomId;
    use serde_json::{json, Value};

    struct Harness {
        store: Arc<SqliteWorldStore>,
        import: ImportWorld,
        dir: tempfile::TempDir,
    }

    async fn harness(config: ImportConfig) -> Harness {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite:{}", dir.path().join("world.db").display());
        let clock = Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        let store = Arc::new(
            SqliteWorldStore::connect(&url, 1, clock)
                .await
                .expect("connect"),
        );
        let import = ImportWorld::new(store.clone(), &config);
        Harness { store, import, dir }
    }

    impl Harness {
        fn world_dir(&self) -> PathBuf {
            let path = self.dir.path().join("world");
            std::fs::create_dir_all(&path).expect("world dir");
            path
        }

        fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
            let path = self.world_dir().join(name);
            std::fs::write(&path, contents).expect("write world file");
            path
        }

        fn write_json(&self, name: &str, value: &Value) -> PathBuf {
            self.write(name, &serde_json::to_vec(value).unwrap())
        }

        async fn count(&self, table: &str) -> i64 {
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(self.store.pool())
                .await
                .expect("count")
        }
    }

    fn midgaard() -> Value {
        json!({
            "zone": { "id": 30, "name": "Northern Midgaard", "lifespan": 15, "reset_mode": 2 },
            "triggers": [
                { "id": 3000, "name": "greet", "attach_type": "MOB", "flags": ["GREET"], "commands": ["say hi", "wave"] }
            ],
            "mobs": [
                { "id": 3001, "keywords": "Baker", "short_desc": "the baker", "flags": ["SENTINEL"], "triggers": [3000] }
            ],
            "objects": [
                { "id": 3010, "keywords": "bread", "type": "FOOD", "extra_descriptions": [{ "keyword": "bread", "desc": "Fresh." }] },
                { "id": 3011, "keywords": "cake", "type": 19 }
            ],
            "rooms": [
                { "id": 3001, "name": "The Bakery", "sector": "CITY",
                  "exits": { "north": { "to_room": 3002 } } },
                { "id": 3002, "name": "Market Square", "sector": 1,
                  "exits": { "south": { "to_room": 3001 }, "east": { "to_room": 3100 } } }
            ],
            "shops": [
                { "id": 3000, "keeper": 3001, "selling": [{ "id": 3010 }, { "id": 3099 }, { "id": 3011 }], "rooms": [3001] },
                { "id": 3001, "keeper": 3098, "selling": [{ "id": 3010 }] }
            ],
            "mob_resets": [
                { "mob": 3001, "room": 3001, "max": 1,
                  "carrying": [{ "id": 3097 }, { "id": 3010 }],
                  "equipped": [{ "id": 3011, "location": "HOLD" }] },
                { "mob": 3098, "room": 3001 }
            ]
        })
    }

    fn numbered_zone(n: i64) -> Value {
        json!({
            "zone": { "id": n, "name": format!("Zone {n}") },
            "rooms": [{ "id": n * 100 + 1, "name": "Room" }]
        })
    }

    #[test]
    fn file_numbers_are_the_first_digit_run() {
        assert_eq!(file_number("30"), Some(30));
        assert_eq!(file_number("zone-120.v2"), Some(120));
        assert_eq!(file_number("readme"), None);
    }

    #[test]
    fn files_sort_numerically_with_unnumbered_last() {
        let mut paths: Vec<PathBuf> = ["10.json", "index.json", "9.json", "100.json", "2.json"]
            .iter()
            .map(PathBuf::from)
            .collect();
        paths.sort_by_key(|path| file_order(path));

        let names: Vec<&str> = paths.iter().filter_map(|p| p.to_str()).collect();
        assert_eq!(names, vec!["2.json", "9.json", "10.json", "100.json", "index.json"]);
    }

    #[tokio::test]
    async fn imports_a_complete_file() {
        let h = harness(ImportConfig::default()).await;
        let path = h.write_json("30.json", &midgaard());

        let result = h.import.import_file(&path).await;

        assert!(result.success, "{result:?}");
        let stats = result.stats.expect("stats");
        assert_eq!(stats.zones, 1);
        assert_eq!(stats.rooms, 2);
        assert_eq!(stats.mobs, 1);
        assert_eq!(stats.objects, 2);
        assert_eq!(stats.triggers, 1);
        assert_eq!(stats.shops, 1);
        assert_eq!(stats.skipped_shops, 1);
        assert_eq!(stats.mob_resets, 1);
        assert_eq!(stats.skipped_resets, 1);
        assert_eq!(stats.skipped_lines, 2);

        assert_eq!(h.count("room_exits").await, 3);
        assert_eq!(h.count("mob_triggers").await, 1);
        assert_eq!(h.count("object_extra_descriptions").await, 1);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.message.contains("3100")));
    }

    #[tokio::test]
    async fn reimport_converges() {
        let h = harness(ImportConfig::default()).await;
        let path = h.write_json("30.json", &midgaard());

        let first = h.import.import_file(&path).await;
        let tables = [
            "zones", "mobs", "objects", "rooms", "room_exits", "triggers", "shops",
            "shop_items", "shop_rooms", "mob_resets", "mob_reset_carried", "mob_reset_equipped",
        ];
        let mut before = Vec::new();
        for table in tables {
            before.push(h.count(table).await);
        }

        let second = h.import.import_file(&path).await;
        let mut after = Vec::new();
        for table in tables {
            after.push(h.count(table).await);
        }

        assert!(first.success && second.success);
        let strip_time = |stats: Option<ImportStats>| {
            stats.map(|s| ImportStats {
                time_taken_ms: 0,
                ..s
            })
        };
        assert_eq!(strip_time(first.stats), strip_time(second.stats));
        assert_eq!(before, after);
    }

    fn bakery(keeper: i64, resets: Value, bakery_exits: Value) -> Value {
        json!({
            "zone": { "id": 30, "name": "Northern Midgaard" },
            "mobs": [{ "id": 3001, "keywords": "baker" }],
            "objects": [{ "id": 3010, "keywords": "bread" }],
            "rooms": [
                { "id": 3001, "name": "The Bakery", "exits": bakery_exits },
                { "id": 3002, "name": "Market Square" }
            ],
            "shops": [{ "id": 3000, "keeper": keeper, "selling": [{ "id": 3010 }] }],
            "mob_resets": resets
        })
    }

    async fn stored_state(h: &Harness) -> (Vec<(i64, Option<i64>)>, Vec<(i64, i64)>, i64) {
        let shops: Vec<(i64, Option<i64>)> =
            sqlx::query_as("SELECT id, keeper_id FROM shops ORDER BY id")
                .fetch_all(h.store.pool())
                .await
                .unwrap();
        let resets: Vec<(i64, i64)> =
            sqlx::query_as("SELECT ordinal, mob_id FROM mob_resets ORDER BY ordinal")
                .fetch_all(h.store.pool())
                .await
                .unwrap();
        (shops, resets, h.count("room_exits").await)
    }

    #[tokio::test]
    async fn edited_file_replaces_what_an_earlier_import_stored() {
        let h = harness(ImportConfig::default()).await;
        let original = bakery(
            3001,
            json!([
                { "mob": 3001, "room": 3001, "carrying": [{ "id": 3010 }] },
                { "mob": 3001, "room": 3002 }
            ]),
            json!({ "north": { "to_room": 3002 } }),
        );
        let edited = bakery(3098, json!([{ "mob": 3098, "room": 3001 }]), json!({}));

        let path = h.write_json("30.json", &original);
        assert!(h.import.import_file(&path).await.success);
        assert_eq!(
            stored_state(&h).await,
            (vec![(3000, Some(3001))], vec![(0, 3001), (1, 3001)], 1)
        );

        h.write_json("30.json", &edited);
        let result = h.import.import_file(&path).await;
        assert!(result.success);
        let stats = result.stats.expect("stats");
        assert_eq!((stats.skipped_shops, stats.skipped_resets), (1, 1));
        assert_eq!(stored_state(&h).await, (Vec::new(), Vec::new(), 0));
        assert_eq!(h.count("shop_items").await, 0);
        assert_eq!(h.count("mob_reset_carried").await, 0);

        h.write_json("30.json", &original);
        assert!(h.import.import_file(&path).await.success);
        assert_eq!(
            stored_state(&h).await,
            (vec![(3000, Some(3001))], vec![(0, 3001), (1, 3001)], 1)
        );
    }

    #[tokio::test]
    async fn removed_exits_are_dropped_on_reimport() {
        let h = harness(ImportConfig::default()).await;
        let path = h.write_json("30.json", &midgaard());
        h.import.import_file(&path).await;
        assert_eq!(h.count("room_exits").await, 3);

        let mut edited = midgaard();
        edited["rooms"][1]["exits"] = json!({ "south": { "to_room": 3001 } });
        h.write_json("30.json", &edited);
        assert!(h.import.import_file(&path).await.success);

        let exits: Vec<(i64, String)> =
            sqlx::query_as("SELECT room_id, direction FROM room_exits ORDER BY room_id")
                .fetch_all(h.store.pool())
                .await
                .unwrap();
        assert_eq!(exits, vec![(3001, "NORTH".to_string()), (3002, "SOUTH".to_string())]);
    }

    #[tokio::test]
    async fn shops_without_a_stored_keeper_are_never_written() {
        let h = harness(ImportConfig::default()).await;
        let path = h.write_json("30.json", &midgaard());

        let result = h.import.import_file(&path).await;
        assert!(result.success);

        let keepers: Vec<(i64, Option<i64>)> =
            sqlx::query_as("SELECT id, keeper_id FROM shops ORDER BY id")
                .fetch_all(h.store.pool())
                .await
                .unwrap();
        assert_eq!(keepers, vec![(3000, Some(3001))]);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.to_string() == "shop 3001: skipped: missing mob 3098"));
    }

    #[tokio::test]
    async fn missing_item_objects_drop_only_their_lines() {
        let h = harness(ImportConfig::default()).await;
        let path = h.write_json("30.json", &midgaard());
        h.import.import_file(&path).await;

        let items: Vec<(i64, i64)> =
            sqlx::query_as("SELECT position, object_id FROM shop_items ORDER BY position")
                .fetch_all(h.store.pool())
                .await
                .unwrap();
        assert_eq!(items, vec![(0, 3010), (2, 3011)]);

        let carried: Vec<(i64, i64)> =
            sqlx::query_as("SELECT position, object_id FROM mob_reset_carried ORDER BY position")
                .fetch_all(h.store.pool())
                .await
                .unwrap();
        assert_eq!(carried, vec![(1, 3010)]);
        assert_eq!(h.count("mob_reset_equipped").await, 1);
        assert_eq!(h.count("mob_resets").await, 1);
    }

    #[tokio::test]
    async fn failed_file_is_isolated() {
        let h = harness(ImportConfig::default()).await;
        for n in [1, 2, 4] {
            h.write_json(&format!("{n}.json"), &numbered_zone(n));
        }
        h.write("3.json", b"{ \"zone\": { \"id\": 3, \"name\": ");

        let run = h
            .import
            .import_directory(&h.world_dir())
            .await
            .expect("directory run");

        assert!(!run.success);
        assert_eq!(run.succeeded_files().count(), 3);
        let failed: Vec<PathBuf> = run.failed_files().map(|f| f.path.clone()).collect();
        assert_eq!(failed, vec![h.world_dir().join("3.json")]);
        assert_eq!(run.stats.zones, 3);
        assert_eq!(run.stats.rooms, 3);

        let zones: Vec<i64> = sqlx::query_scalar("SELECT id FROM zones ORDER BY id")
            .fetch_all(h.store.pool())
            .await
            .unwrap();
        assert_eq!(zones, vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn directory_runs_in_numeric_order() {
        let h = harness(ImportConfig::default()).await;
        for n in [10, 9, 100] {
            h.write_json(&format!("{n}.json"), &numbered_zone(n));
        }
        h.write("notes.txt", b"not a world file");

        let run = h.import.import_directory(&h.world_dir()).await.unwrap();

        let names: Vec<String> = run
            .files
            .iter()
            .filter_map(|f| f.path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["9.json", "10.json", "100.json"]);
        assert!(run.success);
        assert_eq!(run.message, "Imported 3 of 3 files");
    }

    #[tokio::test]
    async fn zone_zero_lands_in_the_configured_zone() {
        let h = harness(ImportConfig::default()).await;
        let path = h.write_json(
            "0.json",
            &json!({
                "zone": { "id": 0, "name": "Limbo" },
                "rooms": [{ "id": 1, "name": "The Void" }]
            }),
        );

        let result = h.import.import_file(&path).await;
        assert!(result.success);

        let zone_ids: Vec<i64> = sqlx::query_scalar("SELECT zone_id FROM rooms")
            .fetch_all(h.store.pool())
            .await
            .unwrap();
        assert_eq!(zone_ids, vec![1000]);
    }

    #[tokio::test]
    async fn known_rooms_silence_exit_warnings() {
        let config = ImportConfig {
            known_rooms: [RoomId::new(3100)].into_iter().collect(),
            ..ImportConfig::default()
        };
        let h = harness(config).await;
        let path = h.write_json("30.json", &midgaard());

        let result = h.import.import_file(&path).await;
        assert!(!result.warnings.iter().any(|w| w.message.contains("3100")));
    }

    #[tokio::test]
    async fn unreadable_file_reports_an_io_error() {
        let h = harness(ImportConfig::default()).await;
        let result = h.import.import_file(&h.world_dir().join("missing.json")).await;

        assert!(!result.success);
        assert!(result.stats.is_none());
        assert!(result.message.starts_with("Failed to read"));
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let h = harness(ImportConfig::default()).await;
        let err = h
            .import
            .import_directory(&h.dir.path().join("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }
}
