//! Cash goal repository.

use sqlx::PgPool;

use everafter_core::{ActivityKind, CashGoal, GoalId, GoalSeed, Reais};

use super::{RepositoryError, activity};

/// Repository for contribution goal operations.
pub struct GoalRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GoalRepository<'a> {
    /// Create a new goal repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All goals, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<CashGoal>, RepositoryError> {
        let goals = sqlx::query_as::<_, CashGoal>(
            r"
            SELECT id, title, target_amount, current_amount
            FROM cash_goal
            ORDER BY id ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(goals)
    }

    /// Fetch a single goal.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the goal does not exist.
    pub async fn get(&self, goal_id: &GoalId) -> Result<CashGoal, RepositoryError> {
        sqlx::query_as::<_, CashGoal>(
            r"
            SELECT id, title, target_amount, current_amount
            FROM cash_goal
            WHERE id = $1
            ",
        )
        .bind(goal_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(RepositoryError::NotFound)
    }

    /// Overwrite a goal's raised amount and audit the change.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the goal does not exist.
    pub async fn set_current_amount(
        &self,
        goal_id: &GoalId,
        amount: Reais,
    ) -> Result<CashGoal, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let goal: Option<CashGoal> = sqlx::query_as(
            r"
            UPDATE cash_goal
            SET current_amount = $2
            WHERE id = $1
            RETURNING id, title, target_amount, current_amount
            ",
        )
        .bind(goal_id)
        .bind(amount)
        .fetch_optional(&mut *tx)
        .await?;

        let goal = goal.ok_or(RepositoryError::NotFound)?;

        let details = format!("{} alterada para {}", goal.title, goal.current_amount);
        activity::append(&mut *tx, ActivityKind::GoalUpdated, &details).await?;

        tx.commit().await?;
        Ok(goal)
    }

    /// Insert a goal from seed data (reconcile path, no audit).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the id already exists.
    pub async fn insert_seeded(&self, seed: &GoalSeed) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO cash_goal (id, title, target_amount, current_amount)
            VALUES ($1, $2, $3, 0)
            ",
        )
        .bind(&seed.id)
        .bind(&seed.title)
        .bind(seed.target_amount)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict(format!("goal {} already exists", seed.id));
            }
            RepositoryError::Database(e)
        })?;
        Ok(())
    }
}
