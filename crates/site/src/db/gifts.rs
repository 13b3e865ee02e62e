//! Gift catalog and claim ledger repository.
//!
//! All ledger mutations run inside a transaction that locks the gift row
//! (`SELECT ... FOR UPDATE`) and re-evaluate the admission rules from
//! `everafter_core` against the ledger as it is at commit time. Two
//! claimants racing for the last slot are therefore serialized by the store:
//! the second one re-reads a full ledger and is refused.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres};

use everafter_core::{
    ActivityKind, Claim, Gift, GiftChanges, GiftId, GiftSeed, GuestId, RegistryError, admit_claim,
};

use super::{RepositoryError, activity};

/// Header columns of the `gift` table (ledger loaded separately).
#[derive(Debug, sqlx::FromRow)]
struct GiftHeader {
    id: GiftId,
    name: String,
    description: String,
    image_url: String,
    category: String,
    max_quantity: i32,
}

#[derive(Debug, sqlx::FromRow)]
struct ClaimRow {
    gift_id: GiftId,
    guest_id: GuestId,
    guest_name: String,
    is_anonymous: bool,
    created_at: DateTime<Utc>,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Self {
            guest_id: row.guest_id,
            guest_name: row.guest_name,
            is_anonymous: row.is_anonymous,
            created_at: row.created_at,
        }
    }
}

/// Receipt returned by a successful claim, with everything the caller needs
/// for the toast and the notification email.
#[derive(Debug, Clone)]
pub struct ClaimReceipt {
    pub gift_name: String,
    pub claim: Claim,
}

/// Repository for gift and claim database operations.
pub struct GiftRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GiftRepository<'a> {
    /// Create a new gift repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Load the whole catalog with its ledgers, ordered by gift id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_all(&self) -> Result<Vec<Gift>, RepositoryError> {
        let headers = sqlx::query_as::<_, GiftHeader>(
            r"
            SELECT id, name, description, image_url, category, max_quantity
            FROM gift
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let claims = sqlx::query_as::<_, ClaimRow>(
            r"
            SELECT gift_id, guest_id, guest_name, is_anonymous, created_at
            FROM claim
            ORDER BY gift_id ASC, id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        let mut gifts: Vec<Gift> = headers
            .into_iter()
            .map(|h| Gift {
                id: h.id,
                name: h.name,
                description: h.description,
                image_url: h.image_url,
                category: h.category,
                max_quantity: h.max_quantity,
                claims: Vec::new(),
            })
            .collect();

        for row in claims {
            if let Some(gift) = gifts.iter_mut().find(|g| g.id == row.gift_id) {
                gift.claims.push(row.into());
            }
        }

        Ok(gifts)
    }

    /// Fetch a single gift with its ledger.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the gift does not exist.
    pub async fn get(&self, gift_id: &GiftId) -> Result<Gift, RepositoryError> {
        let header = sqlx::query_as::<_, GiftHeader>(
            r"
            SELECT id, name, description, image_url, category, max_quantity
            FROM gift
            WHERE id = $1
            ",
        )
        .bind(gift_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)?;

        let claims = fetch_claims(self.pool, gift_id).await?;

        Ok(Gift {
            id: header.id,
            name: header.name,
            description: header.description,
            image_url: header.image_url,
            category: header.category,
            max_quantity: header.max_quantity,
            claims,
        })
    }

    /// Append a claim to a gift's ledger and audit it, atomically.
    ///
    /// `kind` is [`ActivityKind::GiftClaimed`] for guest claims and
    /// [`ActivityKind::ClaimRestored`] for admin restores.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for a missing gift, and
    /// `RepositoryError::Registry` when the ledger refuses admission
    /// (capacity reached or duplicate guest).
    pub async fn claim(
        &self,
        gift_id: &GiftId,
        guest_id: GuestId,
        guest_name: &str,
        is_anonymous: bool,
        kind: ActivityKind,
    ) -> Result<ClaimReceipt, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let header = lock_gift(&mut tx, gift_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let claims = fetch_claims(&mut *tx, gift_id).await?;
        admit_claim(&claims, header.max_quantity, &guest_id)?;

        let created_at: DateTime<Utc> = sqlx::query_scalar(
            r"
            INSERT INTO claim (gift_id, guest_id, guest_name, is_anonymous)
            VALUES ($1, $2, $3, $4)
            RETURNING created_at
            ",
        )
        .bind(gift_id)
        .bind(&guest_id)
        .bind(guest_name)
        .bind(is_anonymous)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            // The UNIQUE(gift_id, guest_id) constraint is the backstop for
            // the duplicate rule checked above.
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Registry(RegistryError::AlreadyClaimed);
            }
            RepositoryError::Database(e)
        })?;

        let details = match kind {
            ActivityKind::ClaimRestored => {
                format!("Restauração manual: {guest_name} em {}", header.name)
            }
            _ => format!("{guest_name} presenteou {}", header.name),
        };
        activity::append(&mut *tx, kind, &details).await?;

        tx.commit().await?;

        Ok(ClaimReceipt {
            gift_name: header.name,
            claim: Claim {
                guest_id,
                guest_name: guest_name.to_owned(),
                is_anonymous,
                created_at,
            },
        })
    }

    /// Remove the caller's own claim. Returns the removed claimant's name,
    /// or `None` when the caller held no claim (a no-op, not an error).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the gift does not exist.
    pub async fn unclaim_self(
        &self,
        gift_id: &GiftId,
        guest_id: &GuestId,
    ) -> Result<Option<String>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let header = lock_gift(&mut tx, gift_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let removed: Option<String> = sqlx::query_scalar(
            r"
            DELETE FROM claim
            WHERE gift_id = $1 AND guest_id = $2
            RETURNING guest_name
            ",
        )
        .bind(gift_id)
        .bind(guest_id)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(name) = &removed {
            let details = format!("Removido: {name} de {}", header.name);
            activity::append(&mut *tx, ActivityKind::GiftUnclaimed, &details).await?;
        }

        tx.commit().await?;
        Ok(removed)
    }

    /// Remove the claim at the given ledger position (admin path).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` for a missing gift or an
    /// out-of-range index.
    pub async fn remove_claim_at(
        &self,
        gift_id: &GiftId,
        index: usize,
    ) -> Result<String, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let header = lock_gift(&mut tx, gift_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let ledger: Vec<(i64, String)> = sqlx::query_as(
            r"
            SELECT id, guest_name
            FROM claim
            WHERE gift_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(gift_id)
        .fetch_all(&mut *tx)
        .await?;

        let (claim_id, guest_name) = ledger
            .into_iter()
            .nth(index)
            .ok_or(RepositoryError::NotFound)?;

        sqlx::query("DELETE FROM claim WHERE id = $1")
            .bind(claim_id)
            .execute(&mut *tx)
            .await?;

        let details = format!("Removido: {guest_name} de {}", header.name);
        activity::append(&mut *tx, ActivityKind::GiftUnclaimed, &details).await?;

        tx.commit().await?;
        Ok(guest_name)
    }

    /// Insert a catalog entry without auditing (seed/reconcile path).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the id already exists.
    pub async fn insert_seeded(&self, seed: &GiftSeed) -> Result<(), RepositoryError> {
        insert_gift(self.pool, seed).await
    }

    /// Insert an admin-added catalog entry and audit it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the id already exists.
    pub async fn add(&self, seed: &GiftSeed) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        insert_gift(&mut *tx, seed).await?;
        let details = format!("Item adicionado: {}", seed.name);
        activity::append(&mut *tx, ActivityKind::GiftAdded, &details).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Patch only the display fields that changed against the seed.
    ///
    /// Claims and ledger state are untouchable from here by construction:
    /// [`GiftChanges`] has no claim fields.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn apply_changes(
        &self,
        gift_id: &GiftId,
        changes: &GiftChanges,
    ) -> Result<(), RepositoryError> {
        if changes.is_empty() {
            return Ok(());
        }

        let mut qb = sqlx::QueryBuilder::<Postgres>::new("UPDATE gift SET ");
        let mut fields = qb.separated(", ");
        if let Some(name) = &changes.name {
            fields.push("name = ").push_bind_unseparated(name);
        }
        if let Some(description) = &changes.description {
            fields
                .push("description = ")
                .push_bind_unseparated(description);
        }
        if let Some(image_url) = &changes.image_url {
            fields.push("image_url = ").push_bind_unseparated(image_url);
        }
        if let Some(category) = &changes.category {
            fields.push("category = ").push_bind_unseparated(category);
        }
        if let Some(max_quantity) = changes.max_quantity {
            fields
                .push("max_quantity = ")
                .push_bind_unseparated(max_quantity);
        }
        qb.push(" WHERE id = ").push_bind(gift_id);

        qb.build().execute(self.pool).await?;
        Ok(())
    }

    /// Delete a catalog entry (claims cascade) and audit it.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the gift does not exist.
    pub async fn delete(&self, gift_id: &GiftId) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let name: Option<String> =
            sqlx::query_scalar("DELETE FROM gift WHERE id = $1 RETURNING name")
                .bind(gift_id)
                .fetch_optional(&mut *tx)
                .await?;

        let name = name.ok_or(RepositoryError::NotFound)?;
        let details = format!("Item removido: {name}");
        activity::append(&mut *tx, ActivityKind::GiftDeleted, &details).await?;

        tx.commit().await?;
        Ok(())
    }
}

/// Lock a gift row for the duration of a ledger transaction.
async fn lock_gift(
    tx: &mut sqlx::Transaction<'_, Postgres>,
    gift_id: &GiftId,
) -> Result<Option<GiftHeader>, sqlx::Error> {
    sqlx::query_as::<_, GiftHeader>(
        r"
        SELECT id, name, description, image_url, category, max_quantity
        FROM gift
        WHERE id = $1
        FOR UPDATE
        ",
    )
    .bind(gift_id)
    .fetch_optional(&mut **tx)
    .await
}

/// Fetch a gift's ledger in insertion order.
async fn fetch_claims<'e, E>(executor: E, gift_id: &GiftId) -> Result<Vec<Claim>, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    let rows = sqlx::query_as::<_, ClaimRow>(
        r"
        SELECT gift_id, guest_id, guest_name, is_anonymous, created_at
        FROM claim
        WHERE gift_id = $1
        ORDER BY id ASC
        ",
    )
    .bind(gift_id)
    .fetch_all(executor)
    .await?;

    Ok(rows.into_iter().map(Claim::from).collect())
}

/// Insert a gift row using the given executor.
async fn insert_gift<'e, E>(executor: E, seed: &GiftSeed) -> Result<(), RepositoryError>
where
    E: sqlx::Executor<'e, Database = Postgres>,
{
    sqlx::query(
        r"
        INSERT INTO gift (id, name, description, image_url, category, max_quantity)
        VALUES ($1, $2, $3, $4, $5, $6)
        ",
    )
    .bind(&seed.id)
    .bind(&seed.name)
    .bind(&seed.description)
    .bind(&seed.image_url)
    .bind(&seed.category)
    .bind(seed.max_quantity)
    .execute(executor)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return RepositoryError::Conflict(format!("gift {} already exists", seed.id));
        }
        RepositoryError::Database(e)
    })?;
    Ok(())
}
