//! Muditor world importer - Main entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueHint};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use muditor_engine::infrastructure::{
    clock::SystemClock, config::ImportConfig, sqlite::SqliteWorldStore,
};
use muditor_engine::use_cases::{ImportResult, ImportWorld, RunResult};

#[derive(Parser, Debug)]
#[command(name = "muditor-import", about = "Import legacy MUD world files")]
struct Args {
    /// Database to import into. Overrides DATABASE_URL.
    #[arg(long, value_name = "URL")]
    database_url: Option<String>,

    #[arg(
        value_name = "PATH",
        help = "World file or directory to import (defaults to WORLD_FILES_DIR)",
        value_hint = ValueHint::AnyPath
    )]
    path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "muditor_engine=info,muditor_import=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let mut config = ImportConfig::from_env();
    if let Some(url) = args.database_url {
        config.database_url = url;
    }
    let path = args.path.unwrap_or_else(|| config.world_files_dir.clone());

    tracing::info!(
        database_url = %config.database_url,
        path = %path.display(),
        "Starting world import"
    );

    let store = SqliteWorldStore::connect(
        &config.database_url,
        config.sqlite_max_connections,
        Arc::new(SystemClock::new()),
    )
    .await?;
    let import = ImportWorld::new(Arc::new(store), &config);

    let success = if path.is_file() {
        let result = import.import_file(&path).await;
        report_file(&path, &result);
        result.success
    } else {
        let run = import.import_directory(&path).await?;
        report_run(&run);
        run.success
    };

    if !success {
        anyhow::bail!("world import finished with failures");
    }
    Ok(())
}

fn report_file(path: &std::path::Path, result: &ImportResult) {
    if result.success {
        tracing::info!(
            path = %path.display(),
            warnings = result.warnings.len(),
            "{}",
            result.message
        );
    } else {
        for error in &result.errors {
            tracing::error!(path = %path.display(), "{error}");
        }
    }
}

fn report_run(run: &RunResult) {
    for file in run.failed_files() {
        report_file(&file.path, &file.result);
    }
    tracing::info!(
        files = run.files.len(),
        failed = run.failed_files().count(),
        warnings = run.warning_count(),
        zones = run.stats.zones,
        rooms = run.stats.rooms,
        mobs = run.stats.mobs,
        objects = run.stats.objects,
        shops = run.stats.shops,
        triggers = run.stats.triggers,
        mob_resets = run.stats.mob_resets,
        skipped_shops = run.stats.skipped_shops,
        skipped_resets = run.stats.skipped_resets,
        skipped_lines = run.stats.skipped_lines,
        time_taken_ms = run.stats.time_taken_ms,
        "{}",
        run.message
    );
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
