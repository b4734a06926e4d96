//! Borrowing model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::BookRef;
use super::user::UserRef;

/// Borrowing wire model
///
/// The same shape is used for create, replace and merge-patch bodies as well
/// as responses; every field is optional on the wire, the store assigns `id`.
/// The `status` flag is stored and echoed verbatim; its polarity (returned
/// vs. outstanding) is not interpreted anywhere in this server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Borrowing {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub date_borrowed: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<bool>,
    #[serde(default)]
    pub book: Option<BookRef>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

impl Borrowing {
    /// Field-level coalesce merge for partial updates.
    ///
    /// Only the scalar fields participate: a non-null incoming value
    /// overwrites, a null leaves the existing value in place. The book and
    /// user references are never changed by a partial update.
    pub fn merged_with(mut self, patch: &Borrowing) -> Borrowing {
        if patch.date_borrowed.is_some() {
            self.date_borrowed = patch.date_borrowed;
        }
        if patch.due_date.is_some() {
            self.due_date = patch.due_date;
        }
        if patch.return_date.is_some() {
            self.return_date = patch.return_date;
        }
        if patch.status.is_some() {
            self.status = patch.status;
        }
        self
    }
}

/// Borrowing row from database, with joined book and user columns
#[derive(Debug, Clone, FromRow)]
pub struct BorrowingRow {
    pub id: i64,
    pub date_borrowed: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
    pub status: Option<bool>,
    pub book_id: Option<i64>,
    pub book_title: Option<String>,
    pub book_author: Option<String>,
    pub user_id: Option<i64>,
    pub user_login: Option<String>,
}

impl From<BorrowingRow> for Borrowing {
    fn from(row: BorrowingRow) -> Self {
        Borrowing {
            id: Some(row.id),
            date_borrowed: row.date_borrowed,
            due_date: row.due_date,
            return_date: row.return_date,
            status: row.status,
            book: row.book_id.map(|id| BookRef {
                id,
                title: row.book_title,
                author: row.book_author,
            }),
            user: row.user_id.map(|id| UserRef {
                id,
                login: row.user_login,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> Borrowing {
        Borrowing {
            id: Some(1),
            date_borrowed: NaiveDate::from_ymd_opt(2024, 1, 10),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            return_date: None,
            status: Some(false),
            book: Some(BookRef {
                id: 3,
                title: Some("The Trial".to_string()),
                author: Some("Franz Kafka".to_string()),
            }),
            user: Some(UserRef {
                id: 7,
                login: Some("alice".to_string()),
            }),
        }
    }

    #[test]
    fn merge_with_only_status_preserves_dates() {
        let patch = Borrowing {
            id: Some(1),
            status: Some(true),
            ..Default::default()
        };

        let merged = existing().merged_with(&patch);

        assert_eq!(merged.status, Some(true));
        assert_eq!(merged.date_borrowed, NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(merged.due_date, NaiveDate::from_ymd_opt(2024, 1, 31));
        assert_eq!(merged.return_date, None);
    }

    #[test]
    fn merge_with_all_fields_behaves_like_replace() {
        let patch = Borrowing {
            id: Some(1),
            date_borrowed: NaiveDate::from_ymd_opt(2024, 2, 1),
            due_date: NaiveDate::from_ymd_opt(2024, 2, 22),
            return_date: NaiveDate::from_ymd_opt(2024, 2, 20),
            status: Some(true),
            ..Default::default()
        };

        let merged = existing().merged_with(&patch);

        assert_eq!(merged.date_borrowed, patch.date_borrowed);
        assert_eq!(merged.due_date, patch.due_date);
        assert_eq!(merged.return_date, patch.return_date);
        assert_eq!(merged.status, patch.status);
    }

    #[test]
    fn merge_never_touches_book_or_user() {
        let patch = Borrowing {
            id: Some(1),
            date_borrowed: NaiveDate::from_ymd_opt(2024, 3, 1),
            book: Some(BookRef {
                id: 99,
                title: None,
                author: None,
            }),
            user: None,
            ..Default::default()
        };

        let merged = existing().merged_with(&patch);

        assert_eq!(merged.book, existing().book);
        assert_eq!(merged.user, existing().user);
    }

    #[test]
    fn merge_with_empty_patch_is_identity() {
        let merged = existing().merged_with(&Borrowing::default());
        assert_eq!(merged, existing());
    }
}
