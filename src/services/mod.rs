//! Business logic services

pub mod borrowings;
pub mod spaces;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub borrowings: borrowings::BorrowingsService,
    pub spaces: spaces::SpacesService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            borrowings: borrowings::BorrowingsService::new(repository.clone()),
            spaces: spaces::SpacesService::new(repository.clone()),
            users: users::UsersService::new(repository, auth_config),
        }
    }
}
