//! Monetary amounts in whole reais.
//!
//! The public site renders all contribution amounts as pt-BR currency with
//! no fractional units ("R$ 4.200"), and the admin correction path accepts
//! whole values only, so amounts are plain `i64` reais rather than decimals.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An amount in whole Brazilian reais.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Reais(i64);

impl Reais {
    /// Zero reais.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a whole number of reais.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Format as pt-BR currency with no cents, e.g. `R$ 4.200`.
    #[must_use]
    pub fn format_brl(&self) -> String {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
        let offset = digits.len() % 3;
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (i + 3 - offset) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(c);
        }
        if negative {
            format!("-R$ {grouped}")
        } else {
            format!("R$ {grouped}")
        }
    }
}

impl fmt::Display for Reais {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_brl())
    }
}

impl From<i64> for Reais {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Reais> for i64 {
    fn from(amount: Reais) -> Self {
        amount.0
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Reais {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <i64 as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Reais {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let amount = <i64 as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(amount))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for Reais {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small() {
        assert_eq!(Reais::new(0).format_brl(), "R$ 0");
        assert_eq!(Reais::new(7).format_brl(), "R$ 7");
        assert_eq!(Reais::new(950).format_brl(), "R$ 950");
    }

    #[test]
    fn test_format_grouping() {
        assert_eq!(Reais::new(1_500).format_brl(), "R$ 1.500");
        assert_eq!(Reais::new(8_000).format_brl(), "R$ 8.000");
        assert_eq!(Reais::new(1_234_567).format_brl(), "R$ 1.234.567");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(Reais::new(-4_200).format_brl(), "-R$ 4.200");
    }

    #[test]
    fn test_display_matches_format() {
        assert_eq!(format!("{}", Reais::new(4_200)), "R$ 4.200");
    }
}
