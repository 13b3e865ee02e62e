//! Catalog seed command.
//!
//! Runs the same reconcile pass the site performs at startup, for operating
//! on the store without booting the server.

use secrecy::SecretString;

use everafter_site::{db, seed};

/// Errors from the seed command.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] everafter_site::db::RepositoryError),
}

/// Reconcile the stored catalog with the static seed.
///
/// Without `force` this is a no-op once the `catalog_seeded` flag is set;
/// `force` re-runs the scan, picking up display-field edits to the catalog.
///
/// # Errors
///
/// Returns `SeedError` if the database is unreachable or a write fails.
pub async fn run(force: bool) -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("SITE_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| SeedError::MissingEnvVar("SITE_DATABASE_URL"))?;

    tracing::info!("Connecting to site database...");
    let pool = db::create_pool(&SecretString::from(database_url)).await?;

    let report = if force {
        Some(seed::reconcile(&pool).await?)
    } else {
        seed::ensure_seeded(&pool).await?
    };

    match report {
        Some(report) => tracing::info!(
            created = report.created,
            patched = report.patched,
            skipped = report.skipped,
            "Catalog reconciled"
        ),
        None => tracing::info!("Catalog already seeded; use --force to re-scan"),
    }
    Ok(())
}
