//! Core types for Everafter.
//!
//! Type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod money;

pub use email::{Email, EmailError};
pub use id::{GiftId, GoalId, GuestId};
pub use money::Reais;
