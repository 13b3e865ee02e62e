//! The gift ledger: claims, capacity, and admission rules.
//!
//! A gift holds an ordered sequence of claims (insertion order is ledger
//! order) up to its capacity. Each guest may hold at most one claim per gift.
//! There are no denormalized "last claimant" columns; use
//! [`latest_claimant`] when a single-name summary is needed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{GiftId, GuestId};

/// Display name used when a guest leaves the name field blank.
pub const FALLBACK_GUEST_NAME: &str = "Convidado";

/// Public label rendered instead of the name for anonymous claims.
pub const ANONYMOUS_LABEL: &str = "Anônimo";

/// One guest's pledge against a gift.
///
/// Claims are created by a claim operation and removed by an unclaim
/// operation; they are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Identity-provider subject id, or a synthetic `admin-` id for
    /// manually restored entries.
    pub guest_id: GuestId,
    /// Guest-supplied display name.
    pub guest_name: String,
    /// When true the public UI renders [`ANONYMOUS_LABEL`] instead of the name.
    pub is_anonymous: bool,
    /// Creation time, used for display only; ledger order is array order.
    pub created_at: DateTime<Utc>,
}

impl Claim {
    /// The name shown on the public gift card.
    #[must_use]
    pub fn public_name(&self) -> &str {
        if self.is_anonymous {
            ANONYMOUS_LABEL
        } else {
            &self.guest_name
        }
    }
}

/// A catalog entry with its ordered claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gift {
    pub id: GiftId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    /// Capacity of simultaneous claims, always >= 1.
    pub max_quantity: i32,
    /// Ordered ledger of claims; `claims.len() <= max_quantity`.
    pub claims: Vec<Claim>,
}

impl Gift {
    /// Whether the gift has reached its claim capacity.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.claims.len() >= capacity(self.max_quantity)
    }

    /// The caller's own claim on this gift, if any.
    #[must_use]
    pub fn claim_by(&self, guest: &GuestId) -> Option<&Claim> {
        self.claims.iter().find(|c| &c.guest_id == guest)
    }
}

/// Reasons a claim is refused admission to a gift's ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The gift already has `max_quantity` claims.
    #[error("gift is already at claim capacity")]
    Capacity,
    /// The guest already holds a claim on this gift.
    #[error("guest has already claimed this gift")]
    AlreadyClaimed,
}

/// Effective claim capacity of a gift.
#[must_use]
pub const fn capacity(max_quantity: i32) -> usize {
    // max_quantity is constrained positive at the schema level
    if max_quantity <= 0 {
        1
    } else {
        max_quantity as usize
    }
}

/// Decide whether a guest may append a claim to the given ledger.
///
/// Admin restores pass a freshly minted [`GuestId::restored`] id, so the
/// duplicate check never applies to them.
///
/// # Errors
///
/// Returns [`RegistryError::Capacity`] when the ledger is full and
/// [`RegistryError::AlreadyClaimed`] when the guest already appears in it.
pub fn admit_claim(
    claims: &[Claim],
    max_quantity: i32,
    guest: &GuestId,
) -> Result<(), RegistryError> {
    if claims.len() >= capacity(max_quantity) {
        return Err(RegistryError::Capacity);
    }
    if claims.iter().any(|c| &c.guest_id == guest) {
        return Err(RegistryError::AlreadyClaimed);
    }
    Ok(())
}

/// Re-check admission against the current ledger state and append.
///
/// This is the guarded check-then-append the storage layer mirrors inside a
/// row-locking transaction: even when two claimants raced past an earlier
/// capacity check on a stale snapshot, the apply re-evaluates against the
/// ledger as it is now, so at most `max_quantity` claims ever land.
///
/// # Errors
///
/// Same as [`admit_claim`].
pub fn apply_claim(
    claims: &mut Vec<Claim>,
    max_quantity: i32,
    claim: Claim,
) -> Result<(), RegistryError> {
    admit_claim(claims, max_quantity, &claim.guest_id)?;
    claims.push(claim);
    Ok(())
}

/// Remove the given guest's claim, returning it when one existed.
///
/// Unclaiming a gift the guest never claimed is a no-op, not an error.
pub fn remove_guest_claim(claims: &mut Vec<Claim>, guest: &GuestId) -> Option<Claim> {
    let idx = claims.iter().position(|c| &c.guest_id == guest)?;
    Some(claims.remove(idx))
}

/// Remove the claim at the given ledger position (admin path).
///
/// Returns `None` when the index is out of range.
pub fn remove_claim_at(claims: &mut Vec<Claim>, index: usize) -> Option<Claim> {
    if index < claims.len() {
        Some(claims.remove(index))
    } else {
        None
    }
}

/// The most recent claimant, as a pure projection over the ledger.
#[must_use]
pub fn latest_claimant(claims: &[Claim]) -> Option<&Claim> {
    claims.last()
}

/// Trim a guest-supplied display name, falling back to
/// [`FALLBACK_GUEST_NAME`] when blank.
#[must_use]
pub fn normalize_guest_name(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        FALLBACK_GUEST_NAME.to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn claim(guest: &str, name: &str) -> Claim {
        Claim {
            guest_id: GuestId::new(guest),
            guest_name: name.to_owned(),
            is_anonymous: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_admit_up_to_capacity() {
        let mut claims = Vec::new();
        apply_claim(&mut claims, 2, claim("a", "Ana")).unwrap();
        apply_claim(&mut claims, 2, claim("b", "Bia")).unwrap();
        assert_eq!(
            apply_claim(&mut claims, 2, claim("c", "Caio")),
            Err(RegistryError::Capacity)
        );
        assert_eq!(claims.len(), 2);
    }

    #[test]
    fn test_duplicate_guest_rejected() {
        let mut claims = Vec::new();
        apply_claim(&mut claims, 3, claim("a", "Ana")).unwrap();
        assert_eq!(
            apply_claim(&mut claims, 3, claim("a", "Ana de novo")),
            Err(RegistryError::AlreadyClaimed)
        );
    }

    #[test]
    fn test_restored_claims_never_collide() {
        let mut claims = Vec::new();
        for _ in 0..3 {
            let c = Claim {
                guest_id: GuestId::restored(),
                guest_name: "Convidado do email".to_owned(),
                is_anonymous: false,
                created_at: Utc::now(),
            };
            apply_claim(&mut claims, 5, c).unwrap();
        }
        assert_eq!(claims.len(), 3);
    }

    #[test]
    fn test_unclaim_is_idempotent() {
        let mut claims = vec![claim("a", "Ana")];
        assert!(remove_guest_claim(&mut claims, &GuestId::new("b")).is_none());
        assert_eq!(claims.len(), 1);
        assert!(remove_guest_claim(&mut claims, &GuestId::new("a")).is_some());
        assert!(remove_guest_claim(&mut claims, &GuestId::new("a")).is_none());
        assert!(claims.is_empty());
    }

    #[test]
    fn test_claim_unclaim_roundtrip() {
        let before = vec![claim("a", "Ana")];
        let mut claims = before.clone();
        apply_claim(&mut claims, 2, claim("b", "Bia")).unwrap();
        remove_guest_claim(&mut claims, &GuestId::new("b"));
        assert_eq!(claims, before);
        assert_eq!(latest_claimant(&claims).unwrap().guest_name, "Ana");
    }

    #[test]
    fn test_latest_claimant_clears_when_empty() {
        let mut claims = vec![claim("a", "Ana")];
        remove_guest_claim(&mut claims, &GuestId::new("a"));
        assert!(latest_claimant(&claims).is_none());
    }

    #[test]
    fn test_remove_at_index() {
        let mut claims = vec![claim("a", "Ana"), claim("b", "Bia")];
        let removed = remove_claim_at(&mut claims, 0).unwrap();
        assert_eq!(removed.guest_name, "Ana");
        assert!(remove_claim_at(&mut claims, 5).is_none());
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn test_anonymous_public_name() {
        let mut c = claim("a", "Ana");
        assert_eq!(c.public_name(), "Ana");
        c.is_anonymous = true;
        assert_eq!(c.public_name(), ANONYMOUS_LABEL);
    }

    #[test]
    fn test_normalize_guest_name() {
        assert_eq!(normalize_guest_name("  Ana  "), "Ana");
        assert_eq!(normalize_guest_name("   "), FALLBACK_GUEST_NAME);
    }
}
