//! Data models for the site.

pub mod session;
pub mod views;

pub use session::CurrentGuest;
pub use session::keys as session_keys;
pub use views::{GiftView, GoalView};
