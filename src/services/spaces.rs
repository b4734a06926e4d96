//! Space reservation operations over the store

use crate::{
    error::{AppError, AppResult},
    models::space::Space,
    repository::{PageParams, Repository},
};

#[derive(Clone)]
pub struct SpacesService {
    repository: Repository,
}

impl SpacesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Persist a new space reservation; the store assigns the identifier
    pub async fn create(&self, space: &Space) -> AppResult<Space> {
        self.repository.spaces.insert(space).await
    }

    /// Overwrite an existing space reservation in full
    pub async fn replace(&self, id: i64, space: &Space) -> AppResult<Space> {
        if !self.repository.spaces.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Space with id {} not found", id)));
        }
        self.repository.spaces.update(id, space).await
    }

    /// Merge non-null patch fields into the stored record and persist it
    pub async fn partial_update(&self, id: i64, patch: &Space) -> AppResult<Space> {
        if !self.repository.spaces.exists_by_id(id).await? {
            return Err(AppError::NotFound(format!("Space with id {} not found", id)));
        }

        let existing = self
            .repository
            .spaces
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Space with id {} not found", id)))?;

        let merged = existing.merged_with(patch);
        self.repository.spaces.update(id, &merged).await
    }

    /// Get a space reservation by ID
    pub async fn get(&self, id: i64) -> AppResult<Space> {
        self.repository
            .spaces
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Space with id {} not found", id)))
    }

    /// Page over all space reservations; listing is not owner-scoped
    pub async fn list(&self, page: &PageParams) -> AppResult<(Vec<Space>, i64)> {
        self.repository.spaces.find_all(page).await
    }

    /// Delete a space reservation by ID; absent IDs delete to the same effect
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.spaces.delete_by_id(id).await
    }
}
