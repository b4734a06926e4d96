//! Borrowings repository for database operations

use sqlx::{Pool, Postgres};

use super::PageParams;
use crate::{
    error::{AppError, AppResult},
    models::borrowing::{Borrowing, BorrowingRow},
};

const SELECT_BORROWING: &str = r#"
    SELECT b.id, b.date_borrowed, b.due_date, b.return_date, b.status,
           b.book_id, bk.title AS book_title, bk.author AS book_author,
           b.user_id, u.login AS user_login
    FROM borrowing b
    LEFT JOIN book bk ON b.book_id = bk.id
    LEFT JOIN users u ON b.user_id = u.id
"#;

#[derive(Clone)]
pub struct BorrowingsRepository {
    pool: Pool<Postgres>,
}

impl BorrowingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert a new borrowing; the store assigns the identifier
    pub async fn insert(&self, borrowing: &Borrowing) -> AppResult<Borrowing> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO borrowing (date_borrowed, due_date, return_date, status, book_id, user_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(borrowing.date_borrowed)
        .bind(borrowing.due_date)
        .bind(borrowing.return_date)
        .bind(borrowing.status)
        .bind(borrowing.book.as_ref().map(|b| b.id))
        .bind(borrowing.user.as_ref().map(|u| u.id))
        .fetch_one(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("Borrowing {} vanished after insert", id)))
    }

    /// Overwrite all fields of an existing borrowing
    pub async fn update(&self, id: i64, borrowing: &Borrowing) -> AppResult<Borrowing> {
        sqlx::query(
            r#"
            UPDATE borrowing
            SET date_borrowed = $1, due_date = $2, return_date = $3, status = $4,
                book_id = $5, user_id = $6
            WHERE id = $7
            "#,
        )
        .bind(borrowing.date_borrowed)
        .bind(borrowing.due_date)
        .bind(borrowing.return_date)
        .bind(borrowing.status)
        .bind(borrowing.book.as_ref().map(|b| b.id))
        .bind(borrowing.user.as_ref().map(|u| u.id))
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrowing with id {} not found", id)))
    }

    /// Get a borrowing by ID
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Borrowing>> {
        let row = sqlx::query_as::<_, BorrowingRow>(&format!("{} WHERE b.id = $1", SELECT_BORROWING))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Borrowing::from))
    }

    /// Get a page over all borrowings, with the total count
    pub async fn find_all(&self, page: &PageParams) -> AppResult<(Vec<Borrowing>, i64)> {
        let rows = sqlx::query_as::<_, BorrowingRow>(&format!(
            "{} ORDER BY b.id LIMIT $1 OFFSET $2",
            SELECT_BORROWING
        ))
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM borrowing")
            .fetch_one(&self.pool)
            .await?;

        Ok((rows.into_iter().map(Borrowing::from).collect(), total))
    }

    /// Get a page over the borrowings owned by the given user login
    pub async fn find_by_user_login(
        &self,
        login: &str,
        page: &PageParams,
    ) -> AppResult<(Vec<Borrowing>, i64)> {
        let rows = sqlx::query_as::<_, BorrowingRow>(&format!(
            "{} WHERE u.login = $1 ORDER BY b.id LIMIT $2 OFFSET $3",
            SELECT_BORROWING
        ))
        .bind(login)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM borrowing b
            JOIN users u ON b.user_id = u.id
            WHERE u.login = $1
            "#,
        )
        .bind(login)
        .fetch_one(&self.pool)
        .await?;

        Ok((rows.into_iter().map(Borrowing::from).collect(), total))
    }

    /// Check whether a borrowing with this ID exists
    pub async fn exists_by_id(&self, id: i64) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM borrowing WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    /// Delete by ID, unconditionally. Deleting an absent ID is not an error.
    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM borrowing WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
