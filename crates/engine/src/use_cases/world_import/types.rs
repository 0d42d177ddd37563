//! Result types for world imports.

use std::path::PathBuf;

use serde::Serialize;

use crate::infrastructure::importers::ValidationError;

/// Counts written by the core importer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoreStats {
    pub zones: usize,
    pub mobs: usize,
    pub objects: usize,
    pub rooms: usize,
    pub exits: usize,
    pub triggers: usize,
}

/// Counts and skip warnings from the secondary importer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecondaryStats {
    pub shops: usize,
    pub skipped_shops: usize,
    pub mob_resets: usize,
    pub skipped_resets: usize,
    /// Shop items and reset item lines rejected individually.
    pub skipped_lines: usize,
    pub warnings: Vec<ValidationError>,
}

/// Statistics for one file, or summed over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportStats {
    pub zones: usize,
    pub rooms: usize,
    pub mobs: usize,
    pub objects: usize,
    pub shops: usize,
    pub triggers: usize,
    pub mob_resets: usize,
    pub skipped_shops: usize,
    pub skipped_resets: usize,
    pub skipped_lines: usize,
    pub time_taken_ms: u64,
}

impl ImportStats {
    pub fn from_parts(core: &CoreStats, secondary: &SecondaryStats) -> Self {
        Self {
            zones: core.zones,
            rooms: core.rooms,
            mobs: core.mobs,
            objects: core.objects,
            shops: secondary.shops,
            triggers: core.triggers,
            mob_resets: secondary.mob_resets,
            skipped_shops: secondary.skipped_shops,
            skipped_resets: secondary.skipped_resets,
            skipped_lines: secondary.skipped_lines,
            time_taken_ms: 0,
        }
    }

    /// Add another file's counts. Elapsed time is tracked by the caller.
    pub fn absorb(&mut self, other: &ImportStats) {
        self.zones += other.zones;
        self.rooms += other.rooms;
        self.mobs += other.mobs;
        self.objects += other.objects;
        self.shops += other.shops;
        self.triggers += other.triggers;
        self.mob_resets += other.mob_resets;
        self.skipped_shops += other.skipped_shops;
        self.skipped_resets += other.skipped_resets;
        self.skipped_lines += other.skipped_lines;
    }
}

/// Outcome of importing one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportResult {
    pub success: bool,
    pub message: String,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ImportStats>,
}

impl ImportResult {
    pub fn succeeded(
        message: impl Into<String>,
        stats: ImportStats,
        warnings: Vec<ValidationError>,
    ) -> Self {
        Self {
            success: true,
            message: message.into(),
            errors: Vec::new(),
            warnings,
            stats: Some(stats),
        }
    }

    pub fn failed(
        message: impl Into<String>,
        errors: Vec<ValidationError>,
        warnings: Vec<ValidationError>,
    ) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
            warnings,
            stats: None,
        }
    }
}

/// One file's entry in a directory run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub result: ImportResult,
}

/// Outcome of importing a directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunResult {
    pub success: bool,
    pub message: String,
    pub files: Vec<FileReport>,
    /// Sum over the files that succeeded; `time_taken_ms` is the whole run.
    pub stats: ImportStats,
}

impl RunResult {
    pub fn succeeded_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|file| file.result.success)
    }

    pub fn failed_files(&self) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(|file| !file.result.success)
    }

    pub fn warning_count(&self) -> usize {
        self.files.iter().map(|file| file.result.warnings.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absorb_sums_counts_but_not_time() {
        let mut total = ImportStats {
            time_taken_ms: 5,
            ..Default::default()
        };
        let file = ImportStats {
            zones: 1,
            rooms: 10,
            shops: 2,
            skipped_lines: 3,
            time_taken_ms: 40,
            ..Default::default()
        };
        total.absorb(&file);
        total.absorb(&file);

        assert_eq!(total.zones, 2);
        assert_eq!(total.rooms, 20);
        assert_eq!(total.shops, 4);
        assert_eq!(total.skipped_lines, 6);
        assert_eq!(total.time_taken_ms, 5);
    }

    #[test]
    fn stats_serialize_in_camel_case() {
        let json = serde_json::to_value(ImportStats {
            mob_resets: 3,
            time_taken_ms: 12,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(json["mobResets"], 3);
        assert_eq!(json["timeTakenMs"], 12);
    }
}
