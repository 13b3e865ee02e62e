//! Newtype IDs for type-safe entity references.
//!
//! Gift and goal ids are short text slugs (seeded like `cb-1`, or
//! `item-<millis>` for admin-added gifts). Guest ids come from the identity
//! provider, except for admin-restored claims which carry a synthetic id.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `sqlx` `Type`, `Encode`, and `Decode` implementations (with `postgres`
///   feature)
#[macro_export]
macro_rules! define_str_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return its inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Type<::sqlx::Postgres> for $name {
            fn type_info() -> ::sqlx::postgres::PgTypeInfo {
                <String as ::sqlx::Type<::sqlx::Postgres>>::type_info()
            }

            fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
                <String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
            }
        }

        #[cfg(feature = "postgres")]
        impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for $name {
            fn decode(
                value: ::sqlx::postgres::PgValueRef<'r>,
            ) -> ::core::result::Result<Self, ::sqlx::error::BoxDynError> {
                let id = <String as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
                Ok(Self(id))
            }
        }

        #[cfg(feature = "postgres")]
        impl ::sqlx::Encode<'_, ::sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut ::sqlx::postgres::PgArgumentBuffer,
            ) -> ::std::result::Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
                <String as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }
    };
}

define_str_id!(GiftId);
define_str_id!(GoalId);
define_str_id!(GuestId);

impl GuestId {
    /// Prefix carried by synthetic ids minted for admin-restored claims.
    pub const RESTORED_PREFIX: &'static str = "admin-";

    /// Mint a fresh synthetic id for an admin-restored claim.
    ///
    /// Restored claims have no identity-provider subject, so each restore
    /// gets its own id and can never collide with a real guest.
    #[must_use]
    pub fn restored() -> Self {
        Self(format!("{}{}", Self::RESTORED_PREFIX, uuid::Uuid::new_v4()))
    }

    /// Whether this id was minted by an admin restore.
    #[must_use]
    pub fn is_restored(&self) -> bool {
        self.0.starts_with(Self::RESTORED_PREFIX)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_roundtrip() {
        let id = GiftId::new("cb-1");
        assert_eq!(id.as_str(), "cb-1");
        assert_eq!(format!("{id}"), "cb-1");
        assert_eq!(String::from(id), "cb-1");
    }

    #[test]
    fn test_restored_ids_are_unique() {
        let a = GuestId::restored();
        let b = GuestId::restored();
        assert!(a.is_restored());
        assert!(b.is_restored());
        assert_ne!(a, b);
    }

    #[test]
    fn test_provider_id_is_not_restored() {
        let id = GuestId::new("zK91mN3pQ7");
        assert!(!id.is_restored());
    }

    #[test]
    fn test_serde_transparent() {
        let id = GoalId::new("honeymoon_goal");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"honeymoon_goal\"");
        let back: GoalId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
