//! The single-page wedding site.
//!
//! Everything renders server-side from one handler: hero/countdown, ceremony
//! details, the gift registry grid, the two cash-gift trackers, and (for
//! allow-listed guests) the inline admin panel with the activity log.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;
use tracing::instrument;

use everafter_core::GuestId;

use crate::catalog;
use crate::db::{ActivityLogEntry, ActivityLogRepository, GiftRepository, GoalRepository};
use crate::error::Result;
use crate::filters;
use crate::middleware::auth::OptionalGuest;
use crate::models::{CurrentGuest, GiftView, GoalView};
use crate::state::AppState;

/// Number of audit entries shown in the admin panel.
const ACTIVITY_PANEL_LIMIT: i64 = 20;

/// Category filter value meaning "show everything".
const ALL_CATEGORIES: &str = "Todos";

/// Query parameters for the home page.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Selected gift category, `None`/`Todos` shows all.
    pub categoria: Option<String>,
    /// One-shot feedback message from a redirect-after-POST.
    pub toast: Option<String>,
    /// `ok` or `err`; styles the toast.
    pub toast_kind: Option<String>,
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub couple_names: &'static str,
    pub couple_photo: &'static str,
    /// Countdown target in RFC 3339, consumed by the inline script.
    pub wedding_date_rfc3339: String,
    pub wedding_date_display: String,
    pub ceremony_time: &'static str,
    pub ceremony_venue: &'static str,
    pub ceremony_maps_url: &'static str,
    pub pix_key: &'static str,
    pub pix_holder: &'static str,
    pub pix_qr_url: &'static str,
    pub guest: Option<CurrentGuest>,
    pub is_admin: bool,
    pub categories: Vec<String>,
    pub selected_category: String,
    pub gifts: Vec<GiftView>,
    pub goals: Vec<GoalView>,
    /// Only populated for admins.
    pub activity: Vec<ActivityLogEntry>,
    pub toast: Option<String>,
    pub toast_is_error: bool,
}

/// Display the home page.
#[instrument(skip(state, guest))]
pub async fn home(
    State(state): State<AppState>,
    OptionalGuest(guest): OptionalGuest,
    Query(query): Query<HomeQuery>,
) -> Result<HomeTemplate> {
    let gift_repo = GiftRepository::new(state.pool());
    let goal_repo = GoalRepository::new(state.pool());

    let stored = gift_repo.list_all().await?;
    let goals = goal_repo.list_all().await?;

    let is_admin = guest.as_ref().is_some_and(|g| state.is_admin(&g.email));
    let viewer: Option<&GuestId> = guest.as_ref().map(|g| &g.subject);

    // Category tabs, in catalog order, deduplicated
    let mut categories = vec![ALL_CATEGORIES.to_owned()];
    for gift in &stored {
        if !categories.contains(&gift.category) {
            categories.push(gift.category.clone());
        }
    }

    let selected_category = query
        .categoria
        .filter(|c| categories.contains(c))
        .unwrap_or_else(|| ALL_CATEGORIES.to_owned());

    let gifts = stored
        .iter()
        .filter(|g| selected_category == ALL_CATEGORIES || g.category == selected_category)
        .map(|g| GiftView::project(g, viewer))
        .collect();

    let activity = if is_admin {
        ActivityLogRepository::new(state.pool())
            .recent(ACTIVITY_PANEL_LIMIT)
            .await?
    } else {
        Vec::new()
    };

    let wedding_date = catalog::wedding_date();
    let toast_is_error = query.toast_kind.as_deref() == Some("err");

    Ok(HomeTemplate {
        couple_names: catalog::COUPLE_NAMES,
        couple_photo: catalog::COUPLE_PHOTO,
        wedding_date_rfc3339: wedding_date.to_rfc3339(),
        wedding_date_display: "21 de Fevereiro de 2026".to_owned(),
        ceremony_time: catalog::CEREMONY_TIME,
        ceremony_venue: catalog::CEREMONY_VENUE,
        ceremony_maps_url: catalog::CEREMONY_MAPS_URL,
        pix_key: catalog::PIX_KEY,
        pix_holder: catalog::PIX_HOLDER_NAME,
        pix_qr_url: catalog::PIX_QR_CODE_URL,
        guest,
        is_admin,
        categories,
        selected_category,
        gifts,
        goals: goals.iter().map(GoalView::from).collect(),
        activity,
        toast: query.toast,
        toast_is_error,
    })
}
