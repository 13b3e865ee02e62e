//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Formats a whole-reais amount as `R$ 4.200`.
///
/// Usage in templates: `{{ goal.current|brl }}`
#[askama::filter_fn]
pub fn brl(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let raw = value.to_string();
    match raw.parse::<i64>() {
        Ok(amount) => Ok(everafter_core::Reais::new(amount).format_brl()),
        // Already formatted (e.g. a Reais rendered through Display)
        Err(_) => Ok(raw),
    }
}

/// Formats an activity timestamp as `21/02/2026 18:00`.
///
/// Usage in templates: `{{ entry.created_at|log_time }}`
#[askama::filter_fn]
pub fn log_time(value: &DateTime<Utc>, _env: &dyn askama::Values) -> askama::Result<String> {
    // Display in the couple's timezone (UTC-3)
    let Some(offset) = chrono::FixedOffset::west_opt(3 * 3600) else {
        return Ok(value.format("%d/%m/%Y %H:%M").to_string());
    };
    Ok(value
        .with_timezone(&offset)
        .format("%d/%m/%Y %H:%M")
        .to_string())
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
