//! Activity audit log repository.
//!
//! Entries are append-only: nothing in the application updates or deletes
//! them, and the read path always asks for the most recent N.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres};

use everafter_core::ActivityKind;

use super::RepositoryError;

/// One audit record as stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ActivityLogEntry {
    pub id: i64,
    pub action: String,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

/// Append an audit entry using the given executor.
///
/// Takes an executor rather than a pool so ledger mutations can append
/// within their own transaction.
pub(crate) async fn append<'e, E>(
    executor: E,
    kind: ActivityKind,
    details: &str,
) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    sqlx::query("INSERT INTO activity_log (action, details) VALUES ($1, $2)")
        .bind(kind.tag())
        .bind(details)
        .execute(executor)
        .await?;
    Ok(())
}

/// Repository for reading the audit trail.
pub struct ActivityLogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ActivityLogRepository<'a> {
    /// Create a new activity log repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Append a standalone audit entry (outside any ledger transaction).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn append(&self, kind: ActivityKind, details: &str) -> Result<(), RepositoryError> {
        append(self.pool, kind, details).await?;
        Ok(())
    }

    /// The most recent `limit` entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn recent(&self, limit: i64) -> Result<Vec<ActivityLogEntry>, RepositoryError> {
        let entries = sqlx::query_as::<_, ActivityLogEntry>(
            r"
            SELECT id, action, details, created_at
            FROM activity_log
            ORDER BY created_at DESC, id DESC
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }
}
