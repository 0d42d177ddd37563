//! Import configuration read from the environment.

use std::collections::BTreeSet;
use std::path::PathBuf;

use muditor_domain::{RoomId, ZoneId};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:muditor.db?mode=rwc";
pub const DEFAULT_WORLD_FILES_DIR: &str = "world";
pub const DEFAULT_LEGACY_ZONE_ZERO_ID: i64 = 1000;
pub const DEFAULT_SQLITE_MAX_CONNECTIONS: u32 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfig {
    pub database_url: String,
    pub world_files_dir: PathBuf,
    /// Zone ID that replaces the reserved legacy zone `0`.
    pub legacy_zone_zero_id: ZoneId,
    /// Rooms treated as existing outside the file being imported.
    pub known_rooms: BTreeSet<RoomId>,
    pub sqlite_max_connections: u32,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            world_files_dir: PathBuf::from(DEFAULT_WORLD_FILES_DIR),
            legacy_zone_zero_id: ZoneId::new(DEFAULT_LEGACY_ZONE_ZERO_ID),
            known_rooms: BTreeSet::new(),
            sqlite_max_connections: DEFAULT_SQLITE_MAX_CONNECTIONS,
        }
    }
}

impl ImportConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let legacy_zone_zero_id = match lookup("LEGACY_ZONE_ZERO_ID") {
            Some(raw) => match raw.parse::<ZoneId>() {
                Ok(id) if id.get() != 0 => id,
                _ => {
                    tracing::warn!(value = %raw, "Ignoring invalid LEGACY_ZONE_ZERO_ID");
                    defaults.legacy_zone_zero_id
                }
            },
            None => defaults.legacy_zone_zero_id,
        };

        let sqlite_max_connections = lookup("SQLITE_MAX_CONNECTIONS")
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.sqlite_max_connections);

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            world_files_dir: lookup("WORLD_FILES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.world_files_dir),
            legacy_zone_zero_id,
            known_rooms: lookup("IMPORT_KNOWN_ROOMS")
                .map(|raw| parse_room_list(&raw))
                .unwrap_or_default(),
            sqlite_max_connections,
        }
    }
}

fn parse_room_list(raw: &str) -> BTreeSet<RoomId> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| match part.parse::<RoomId>() {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring invalid room ID in IMPORT_KNOWN_ROOMS");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ImportConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ImportConfig::default());
        assert_eq!(config.legacy_zone_zero_id, ZoneId::new(1000));
    }

    #[test]
    fn reads_overrides() {
        let config = ImportConfig::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("WORLD_FILES_DIR", "/srv/world"),
            ("LEGACY_ZONE_ZERO_ID", "9000"),
            ("IMPORT_KNOWN_ROOMS", "3001, 3002,,x"),
            ("SQLITE_MAX_CONNECTIONS", "8"),
        ]));

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.world_files_dir, PathBuf::from("/srv/world"));
        assert_eq!(config.legacy_zone_zero_id, ZoneId::new(9000));
        assert_eq!(
            config.known_rooms.into_iter().collect::<Vec<_>>(),
            vec![RoomId::new(3001), RoomId::new(3002)]
        );
        assert_eq!(config.sqlite_max_connections, 8);
    }

    #[test]
    fn zero_zone_replacement_cannot_be_zero() {
        let config = ImportConfig::from_lookup(lookup(&[("LEGACY_ZONE_ZERO_ID", "0")]));
        assert_eq!(config.legacy_zone_zero_id, ZoneId::new(1000));
    }
}
