//! Space reservation model ("spaces" entity)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::user::UserRef;

/// Space reservation wire model
///
/// Same shape for create, replace, merge-patch and responses; the store
/// assigns `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Space {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

impl Space {
    /// Field-level coalesce merge for partial updates: `date` is the only
    /// field that participates, the user reference is never changed.
    pub fn merged_with(mut self, patch: &Space) -> Space {
        if patch.date.is_some() {
            self.date = patch.date;
        }
        self
    }
}

/// Space row from database, with joined user columns
#[derive(Debug, Clone, FromRow)]
pub struct SpaceRow {
    pub id: i64,
    pub date: Option<NaiveDate>,
    pub user_id: Option<i64>,
    pub user_login: Option<String>,
}

impl From<SpaceRow> for Space {
    fn from(row: SpaceRow) -> Self {
        Space {
            id: Some(row.id),
            date: row.date,
            user: row.user_id.map(|id| UserRef {
                id,
                login: row.user_login,
            }),
        }
    }
}
