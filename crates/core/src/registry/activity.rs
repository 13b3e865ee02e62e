//! Activity audit log kinds.
//!
//! Every ledger or goal mutation appends one entry tagged with one of these
//! kinds. The tags are the Portuguese labels the admin panel has always
//! shown, so they are stored verbatim.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The kind of audited action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    /// A guest claimed a gift.
    GiftClaimed,
    /// A claim was removed (self-service or admin).
    GiftUnclaimed,
    /// An admin manually restored a claim from an email record.
    ClaimRestored,
    /// An admin added a catalog item.
    GiftAdded,
    /// An admin deleted a catalog item.
    GiftDeleted,
    /// An admin corrected a cash goal's accumulated amount.
    GoalUpdated,
}

impl ActivityKind {
    /// The tag stored in and displayed from the log.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::GiftClaimed => "PRESENTE_MARCADO",
            Self::GiftUnclaimed => "PRESENTE_DESMARCADO",
            Self::ClaimRestored => "MARCACAO_RESTAURADA",
            Self::GiftAdded => "ITEM_ADICIONADO",
            Self::GiftDeleted => "ITEM_REMOVIDO",
            Self::GoalUpdated => "META_ATUALIZADA",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_stable() {
        assert_eq!(ActivityKind::GiftClaimed.tag(), "PRESENTE_MARCADO");
        assert_eq!(ActivityKind::GiftUnclaimed.tag(), "PRESENTE_DESMARCADO");
        assert_eq!(ActivityKind::GoalUpdated.tag(), "META_ATUALIZADA");
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(
            format!("{}", ActivityKind::ClaimRestored),
            "MARCACAO_RESTAURADA"
        );
    }
}
