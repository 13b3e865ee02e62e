//! External service integrations.

pub mod email;
pub mod google;
