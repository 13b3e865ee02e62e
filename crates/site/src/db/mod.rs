//! Database operations for the site's `PostgreSQL` store.
//!
//! # Tables
//!
//! - `gift` - Catalog entries
//! - `claim` - The per-gift claim ledger (ordered by `id`)
//! - `cash_goal` - Contribution goals
//! - `activity_log` - Append-only audit trail
//! - `settings` - One-off flags (catalog seeded marker)
//! - tower-sessions session storage (store-managed)
//!
//! # Migrations
//!
//! Migrations live in `crates/site/migrations/` and run via:
//! ```bash
//! cargo run -p everafter-cli -- migrate
//! ```

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use everafter_core::RegistryError;

pub mod activity;
pub mod gifts;
pub mod goals;
pub mod settings;

pub use activity::{ActivityLogEntry, ActivityLogRepository};
pub use gifts::{ClaimReceipt, GiftRepository};
pub use goals::GoalRepository;
pub use settings::SettingsRepository;

/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Underlying database failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Referenced row does not exist.
    #[error("not found")]
    NotFound,

    /// A uniqueness or state conflict (not expressible as a ledger rule).
    #[error("conflict: {0}")]
    Conflict(String),

    /// A ledger admission rule refused the write.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
