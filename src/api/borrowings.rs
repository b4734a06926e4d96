//! Borrowing endpoints
//!
//! Mutations are restricted to administrators. Listing is role-dispatched:
//! administrators page over every record, other authenticated callers only
//! over their own. Fetch-by-id carries no restriction at all, and delete
//! succeeds whether or not the record exists.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::borrowing::Borrowing,
};

use super::{
    pagination::{pagination_headers, PageQuery},
    AuthenticatedUser, MaybeUser,
};

const ENTITY_NAME: &str = "borrowing";

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Records on this page
    pub items: Vec<T>,
    /// Total number of records
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Records per page
    pub per_page: i64,
}

/// Create a new borrowing
#[utoipa::path(
    post,
    path = "/borrowings",
    tag = "borrowings",
    security(("bearer_auth" = [])),
    request_body = Borrowing,
    responses(
        (status = 201, description = "Borrowing created", body = Borrowing),
        (status = 400, description = "Body already carries an ID"),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn create_borrowing(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(borrowing): Json<Borrowing>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Borrowing>)> {
    tracing::debug!("REST request to save Borrowing : {:?}", borrowing);
    claims.require_admin()?;

    if borrowing.id.is_some() {
        return Err(AppError::BadRequestAlert {
            entity: ENTITY_NAME,
            key: "idexists",
            message: "A new borrowing cannot already have an ID".to_string(),
        });
    }

    let result = state.services.borrowings.create(&borrowing).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::Internal("Store returned a borrowing without an ID".to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/v1/borrowings/{}", id))],
        Json(result),
    ))
}

/// Replace an existing borrowing in full
#[utoipa::path(
    put,
    path = "/borrowings/{id}",
    tag = "borrowings",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Borrowing ID")),
    request_body = Borrowing,
    responses(
        (status = 200, description = "Borrowing updated", body = Borrowing),
        (status = 400, description = "Body ID missing or differs from path"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Borrowing not found")
    )
)]
pub async fn update_borrowing(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(borrowing): Json<Borrowing>,
) -> AppResult<Json<Borrowing>> {
    tracing::debug!("REST request to update Borrowing : {}, {:?}", id, borrowing);
    claims.require_admin()?;

    let body_id = borrowing.id.ok_or_else(|| AppError::BadRequestAlert {
        entity: ENTITY_NAME,
        key: "idnull",
        message: "Invalid id".to_string(),
    })?;
    if body_id != id {
        return Err(AppError::BadRequestAlert {
            entity: ENTITY_NAME,
            key: "idinvalid",
            message: "Invalid ID".to_string(),
        });
    }

    let result = state.services.borrowings.replace(id, &borrowing).await?;
    Ok(Json(result))
}

/// Partially update a borrowing: non-null fields overwrite, nulls preserve
#[utoipa::path(
    patch,
    path = "/borrowings/{id}",
    tag = "borrowings",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Borrowing ID")),
    request_body = Borrowing,
    responses(
        (status = 200, description = "Borrowing patched", body = Borrowing),
        (status = 400, description = "Body ID missing or differs from path"),
        (status = 403, description = "Administrator role required"),
        (status = 404, description = "Borrowing not found")
    )
)]
pub async fn partial_update_borrowing(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i64>,
    Json(borrowing): Json<Borrowing>,
) -> AppResult<Json<Borrowing>> {
    tracing::debug!(
        "REST request to partial update Borrowing partially : {}, {:?}",
        id,
        borrowing
    );
    claims.require_admin()?;

    let body_id = borrowing.id.ok_or_else(|| AppError::BadRequestAlert {
        entity: ENTITY_NAME,
        key: "idnull",
        message: "Invalid id".to_string(),
    })?;
    if body_id != id {
        return Err(AppError::BadRequestAlert {
            entity: ENTITY_NAME,
            key: "idinvalid",
            message: "Invalid ID".to_string(),
        });
    }

    let result = state.services.borrowings.partial_update(id, &borrowing).await?;
    Ok(Json(result))
}

/// List borrowings
///
/// Administrators page over every record; any other authenticated caller
/// pages over records they own. Anonymous callers are rejected.
#[utoipa::path(
    get,
    path = "/borrowings",
    tag = "borrowings",
    security(("bearer_auth" = [])),
    params(PageQuery),
    responses(
        (status = 200, description = "Page of borrowings", body = PaginatedResponse<Borrowing>),
        (status = 401, description = "No resolvable identity")
    )
)]
pub async fn list_borrowings(
    State(state): State<crate::AppState>,
    MaybeUser(claims): MaybeUser,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PageQuery>,
) -> AppResult<(HeaderMap, Json<PaginatedResponse<Borrowing>>)> {
    tracing::debug!("REST request to get a page of Borrowings");
    let page = query.params();

    let (items, total) = match claims {
        Some(ref claims) if claims.is_admin() => state.services.borrowings.list(&page).await?,
        Some(ref claims) => {
            state
                .services
                .borrowings
                .list_for_user(&claims.sub, &page)
                .await?
        }
        None => {
            return Err(AppError::Authentication(
                "Authentication required to list borrowings".to_string(),
            ))
        }
    };

    let headers = pagination_headers(uri.path(), &page, total);
    Ok((
        headers,
        Json(PaginatedResponse {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        }),
    ))
}

/// Get a borrowing by ID
#[utoipa::path(
    get,
    path = "/borrowings/{id}",
    tag = "borrowings",
    params(("id" = i64, Path, description = "Borrowing ID")),
    responses(
        (status = 200, description = "The borrowing", body = Borrowing),
        (status = 404, description = "Borrowing not found")
    )
)]
pub async fn get_borrowing(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Borrowing>> {
    tracing::debug!("REST request to get Borrowing : {}", id);
    let borrowing = state.services.borrowings.get(id).await?;
    Ok(Json(borrowing))
}

/// Delete a borrowing by ID
#[utoipa::path(
    delete,
    path = "/borrowings/{id}",
    tag = "borrowings",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Borrowing ID")),
    responses(
        (status = 204, description = "Deleted (whether or not the ID existed)"),
        (status = 403, description = "Administrator role required")
    )
)]
pub async fn delete_borrowing(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    tracing::debug!("REST request to delete Borrowing : {}", id);
    claims.require_admin()?;

    state.services.borrowings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
