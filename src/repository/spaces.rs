//! Spaces repository for database operations

use sqlx::{Pool, Postgres};

use super::PageParams;
use crate::{
    error::{AppError, AppResult},
    models::space::{Space, SpaceRow},
};

const SELECT_SPACE: &str = r#"
    SELECT s.id, s.date, s.user_id, u.login AS user_login
    FROM spaces s
    LEFT JOIN users u ON s.user_id = u.id
"#;

#[derive(Clone)]
pub struct SpacesRepository {
    pool: Pool<Postgres>,
}

impl SpacesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new space reservation; the store assigns the identifier
    pub async fn insert(&self, space: &Space) -> AppResult<Space> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO spaces (date, user_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(space.date)
        .bind(space.user.as_ref().map(|u| u.id))
        .fetch_one(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Space {} vanished after insert", id)))
    }

    /// Overwrite all fields of an existing space reservation
    pub async fn update(&self, id: i64, space: &Space) -> AppResult<Space> {
        sqlx::query("UPDATE spaces SET date = $1, user_id = $2 WHERE id = $3")
            .bind(space.date)
            .bind(space.user.as_ref().map(|u| u.id))
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Space with id {} not found", id)))
    }

    /// Get a space reservation by ID
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Space>> {
        let row = sqlx::query_as::<_, SpaceRow>(&format!("{} WHERE s.id = $1", SELECT_SPACE))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Space::from))
    }

    /// Get a page over all space reservations, with the total count
    pub async fn find_all(&self, page: &PageParams) -> AppResult<(Vec<Space>, i64)> {
        let rows = sqlx::query_as::<_, SpaceRow>(&format!(
            "{} ORDER BY s.id LIMIT $1 OFFSET $2",
            SELECT_SPACE
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM spaces")
            .fetch_one(&self.pool)
            .await?;

        Ok((rows.into_iter().map(Space::from).collect(), total))
    }

    /// Get a page over the reservations owned by the given user login.
    ///
    /// Not called by the list endpoint, which pages over all owners.
    pub async fn find_by_user_login(
        &self,
        login: &str,
        page: &PageParams,
    ) -> AppResult<(Vec<Space>, i64)> {
        let rows = sqlx::query_as::<_, SpaceRow>(&format!(
            "{} WHERE u.login = $1 ORDER BY s.id LIMIT $2 OFFSET $3",
            SELECT_SPACE
        ))
        .bind(login)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM spaces s
            JOIN users u ON s.user_id = u.id
            WHERE u.login = $1
            "#,
        )
        .bind(login)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows.into_iter().map(Space::from).collect(), total))
    }

    /// Check whether a space reservation with this ID exists
    pub async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM spaces WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Delete by ID, unconditionally. Deleting an absent ID is not an error.
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM spaces WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
