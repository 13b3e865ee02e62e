//! Key/value settings store.
//!
//! Currently holds a single flag: whether the catalog seed has been applied,
//! so startup reconciliation only creates rows once.

use sqlx::PgPool;

use super::RepositoryError;

const CATALOG_SEEDED: &str = "catalog_seeded";

/// Repository for one-off site settings.
pub struct SettingsRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SettingsRepository<'a> {
    /// Create a new settings repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Whether the catalog seed has already been applied.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn catalog_seeded(&self) -> Result<bool, RepositoryError> {
        let value: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT value FROM settings WHERE key = $1")
                .bind(CATALOG_SEEDED)
                .fetch_optional(self.pool)
                .await?;

        Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
    }

    /// Record that the catalog seed has been applied.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the upsert fails.
    pub async fn mark_catalog_seeded(&self) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO settings (key, value)
            VALUES ($1, $2)
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = now()
            ",
        )
        .bind(CATALOG_SEEDED)
        .bind(serde_json::Value::Bool(true))
        .execute(self.pool)
        .await?;
        Ok(())
    }
}
