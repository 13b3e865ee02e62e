//! Application state shared across handlers.
//!
//! All external handles (pool, config, mailer) are constructed once in
//! `main` and passed in here; nothing reaches for a global.

use std::sync::Arc;

use sqlx::PgPool;

use everafter_core::Email;

use crate::config::SiteConfig;
use crate::services::email::EmailService;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    pool: PgPool,
    mailer: Option<EmailService>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: SiteConfig, pool: PgPool, mailer: Option<EmailService>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                mailer,
            }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get the email service, if notification delivery is configured.
    #[must_use]
    pub fn mailer(&self) -> Option<&EmailService> {
        self.inner.mailer.as_ref()
    }

    /// Whether the given identity email is on the admin allow-list.
    #[must_use]
    pub fn is_admin(&self, email: &Email) -> bool {
        self.inner.config.is_admin(email)
    }
}
