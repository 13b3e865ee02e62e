//! Registry domain: the gift ledger, cash goals, and the activity log.
//!
//! The rules here are pure. The site's repositories re-run them inside a
//! database transaction that holds the gift row lock, which is what makes the
//! capacity check safe under concurrent claimants.

pub mod activity;
pub mod gift;
pub mod goal;
pub mod seed;

pub use activity::ActivityKind;
pub use gift::{
    ANONYMOUS_LABEL, Claim, FALLBACK_GUEST_NAME, Gift, RegistryError, admit_claim, apply_claim,
    capacity, latest_claimant, normalize_guest_name, remove_claim_at, remove_guest_claim,
};
pub use goal::CashGoal;
pub use seed::{GiftChanges, GiftSeed, GoalSeed, display_changes};
