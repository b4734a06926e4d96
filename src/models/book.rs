//! Book reference model
//!
//! Books are managed elsewhere; borrowings only carry a reference to one.
//! Existence of the referenced book is not validated here.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Short book representation nested inside borrowing payloads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookRef {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}
