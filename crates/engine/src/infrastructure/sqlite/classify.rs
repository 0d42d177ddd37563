//! Classification of failed constraint-prone writes.

use sqlx::error::ErrorKind;
use sqlx::SqliteConnection;

use crate::infrastructure::ports::{MissingDependency, RepoError, WriteError};

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.kind() == ErrorKind::ForeignKeyViolation)
}

/// Turn a failed write into a [`WriteError`].
///
/// SQLite does not say which foreign key failed, so the declared
/// dependencies are probed in order and the first absent one is reported.
/// A foreign-key failure no probe can explain, and every other failure,
/// stays a [`RepoError`].
pub(super) async fn classify_write_error(
    conn: &mut SqliteConnection,
    operation: &'static str,
    err: sqlx::Error,
    dependencies: &[MissingDependency],
) -> WriteError {
    if !is_foreign_key_violation(&err) {
        return RepoError::database(operation, err).into();
    }

    for dependency in dependencies {
        match dependency_exists(conn, *dependency).await {
            Ok(true) => continue,
            Ok(false) => return WriteError::MissingDependency(*dependency),
            Err(probe_error) => return probe_error.into(),
        }
    }

    RepoError::constraint(format!("{operation}: {err}")).into()
}

async fn dependency_exists(
    conn: &mut SqliteConnection,
    dependency: MissingDependency,
) -> Result<bool, RepoError> {
    let (table, id) = match dependency {
        MissingDependency::Zone(id) => ("zones", id.get()),
        MissingDependency::Mob(id) => ("mobs", id.get()),
        MissingDependency::Room(id) => ("rooms", id.get()),
        MissingDependency::Object(id) => ("objects", id.get()),
    };

    let sql = format!("SELECT EXISTS(SELECT 1 FROM {table} WHERE id = ?)");
    let found: i64 = sqlx::query_scalar(&sql)
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| RepoError::database("probe_dependency", e))?;

    Ok(found != 0)
}
