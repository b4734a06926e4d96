//! Repository layer for database operations

pub mod borrowings;
pub mod spaces;
pub mod users;

use sqlx::{Pool, Postgres};

/// Page request forwarded to the store (1-based)
#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: i64,
    pub per_page: i64,
}

impl PageParams {
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub borrowings: borrowings::BorrowingsRepository,
    pub spaces: spaces::SpacesRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            borrowings: borrowings::BorrowingsRepository::new(pool.clone()),
            spaces: spaces::SpacesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_compute_limit_and_offset() {
        let page = PageParams { page: 3, per_page: 20 };
        assert_eq!(page.limit(), 20);
        assert_eq!(page.offset(), 40);

        let first = PageParams { page: 1, per_page: 50 };
        assert_eq!(first.offset(), 0);
    }
}
