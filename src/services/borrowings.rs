//! Borrowing operations over the store

use crate::{
    error::{AppError, AppResult},
    models::borrowing::Borrowing,
    repository::{PageParams, Repository},
};

#[derive(Clone)]
pub struct BorrowingsService {
    repository: Repository,
}

impl BorrowingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Persist a new borrowing. The identifier is assigned by the store;
    /// the handler has already rejected bodies carrying one.
    pub async fn create(&self, borrowing: &Borrowing) -> AppResult<Borrowing> {
        self.repository.borrowings.insert(borrowing).await
    }

    /// Overwrite an existing borrowing in full
    pub async fn replace(&self, id: i64, borrowing: &Borrowing) -> AppResult<Borrowing> {
        if !self.repository.borrowings.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!(
                "Borrowing with id {} not found",
                id
            )));
        }
        self.repository.borrowings.update(id, borrowing).await
    }

    /// Merge non-null patch fields into the stored record and persist it.
    ///
    /// Read-merge-write; any race with a concurrent writer is left to the
    /// store (last writer wins).
    pub async fn partial_update(&self, id: i64, patch: &Borrowing) -> AppResult<Borrowing> {
        if !self.repository.borrowings.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!(
                "Borrowing with id {} not found",
                id
            )));
        }

        let existing = self
            .repository
            .borrowings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrowing with id {} not found", id)))?;

        let merged = existing.merged_with(patch);
        self.repository.borrowings.update(id, &merged).await
    }

    /// Get a borrowing by ID
    pub async fn get(&self, id: i64) -> AppResult<Borrowing> {
        self.repository
            .borrowings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Borrowing with id {} not found", id)))
    }

    /// Page over all borrowings, regardless of owner
    pub async fn list(&self, page: &PageParams) -> AppResult<(Vec<Borrowing>, i64)> {
        self.repository.borrowings.find_all(page).await
    }

    /// Page over the borrowings owned by the given login
    pub async fn list_for_user(
        &self,
        login: &str,
        page: &PageParams,
    ) -> AppResult<(Vec<Borrowing>, i64)> {
        self.repository.borrowings.find_by_user_login(login, page).await
    }

    /// Delete a borrowing by ID; absent IDs delete to the same effect
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.borrowings.delete_by_id(id).await
    }
}
