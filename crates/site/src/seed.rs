//! Startup catalog reconciliation.
//!
//! Creates missing gifts and goals and pushes display-field edits from the
//! static catalog into the store. Claims and goal amounts are guest/admin
//! state and are never written from here.

use sqlx::PgPool;

use everafter_core::display_changes;

use crate::catalog;
use crate::db::{GiftRepository, GoalRepository, RepositoryError, SettingsRepository};

/// Outcome of one reconcile pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub created: usize,
    pub patched: usize,
    pub skipped: usize,
}

/// Run the reconcile pass unless the `catalog_seeded` flag is already set.
///
/// This is the startup path: the full scan happens once, and later deploys
/// reapply it explicitly via `ea-cli seed --force`.
///
/// # Errors
///
/// Returns `RepositoryError` if a store operation fails.
pub async fn ensure_seeded(pool: &PgPool) -> Result<Option<SeedReport>, RepositoryError> {
    let settings = SettingsRepository::new(pool);
    if settings.catalog_seeded().await? {
        return Ok(None);
    }
    reconcile(pool).await.map(Some)
}

/// Bring the stored catalog in line with [`catalog::gift_seeds`] and
/// [`catalog::goal_seeds`].
///
/// Idempotent: a second pass against a synced catalog performs zero writes.
/// Creates missing gifts and goals and patches drifted display fields.
///
/// # Errors
///
/// Returns `RepositoryError` if a store operation fails.
pub async fn reconcile(pool: &PgPool) -> Result<SeedReport, RepositoryError> {
    let gifts = GiftRepository::new(pool);
    let goals = GoalRepository::new(pool);
    let settings = SettingsRepository::new(pool);

    let stored = gifts.list_all().await?;
    let mut report = SeedReport::default();

    for seed in catalog::gift_seeds() {
        match stored.iter().find(|g| g.id == seed.id) {
            None => {
                gifts.insert_seeded(&seed).await?;
                tracing::info!(gift_id = %seed.id, "Seeded catalog gift");
                report.created += 1;
            }
            Some(existing) => match display_changes(&seed, existing) {
                Some(changes) => {
                    gifts.apply_changes(&seed.id, &changes).await?;
                    tracing::info!(gift_id = %seed.id, "Patched catalog gift");
                    report.patched += 1;
                }
                None => report.skipped += 1,
            },
        }
    }

    let stored_goals = goals.list_all().await?;
    for seed in catalog::goal_seeds() {
        if stored_goals.iter().any(|g| g.id == seed.id) {
            report.skipped += 1;
        } else {
            goals.insert_seeded(&seed).await?;
            tracing::info!(goal_id = %seed.id, "Seeded cash goal");
            report.created += 1;
        }
    }

    if !settings.catalog_seeded().await? {
        settings.mark_catalog_seeded().await?;
    }

    Ok(report)
}
