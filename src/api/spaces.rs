//! Space reservation endpoints
//!
//! Every operation here is open to any caller, and the listing is never
//! scoped to an owner, although the store exposes an owner-scoped query for
//! this entity too.

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::space::Space,
};

use super::{
    borrowings::PaginatedResponse,
    pagination::{pagination_headers, PageQuery},
};

const ENTITY_NAME: &str = "spaces";

/// Create a new space reservation
#[utoipa::path(
    post,
    path = "/spaces",
    tag = "spaces",
    request_body = Space,
    responses(
        (status = 201, description = "Space reservation created", body = Space),
        (status = 400, description = "Body already carries an ID")
    )
)]
pub async fn create_space(
    State(state): State<crate::AppState>,
    Json(space): Json<Space>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<Space>)> {
    tracing::debug!("REST request to save Spaces : {:?}", space);

    if space.id.is_some() {
        return Err(AppError::BadRequestAlert {
            entity: ENTITY_NAME,
            key: "idexists",
            message: "A new space reservation cannot already have an ID".to_string(),
        });
    }

    let result = state.services.spaces.create(&space).await?;
    let id = result
        .id
        .ok_or_else(|| AppError::Internal("Store returned a space without an ID".to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/v1/spaces/{}", id))],
        Json(result),
    ))
}

/// Replace an existing space reservation in full
#[utoipa::path(
    put,
    path = "/spaces/{id}",
    tag = "spaces",
    params(("id" = i64, Path, description = "Space ID")),
    request_body = Space,
    responses(
        (status = 200, description = "Space reservation updated", body = Space),
        (status = 400, description = "Body ID missing or differs from path"),
        (status = 404, description = "Space reservation not found")
    )
)]
pub async fn update_space(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(space): Json<Space>,
) -> AppResult<Json<Space>> {
    tracing::debug!("REST request to update Spaces : {}, {:?}", id, space);

    let body_id = space.id.ok_or_else(|| AppError::BadRequestAlert {
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

    let result = state.services.spaces.replace(id, &space).await?;
    Ok(Json(result))
}

/// Partially update a space reservation: a non-null date overwrites,
/// a null preserves the stored one
#[utoipa::path(
    patch,
    path = "/spaces/{id}",
    tag = "spaces",
    params(("id" = i64, Path, description = "Space ID")),
    request_body = Space,
    responses(
        (status = 200, description = "Space reservation patched", body = Space),
        (status = 400, description = "Body ID missing or differs from path"),
        (status = 404, description = "Space reservation not found")
    )
)]
pub async fn partial_update_space(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
    Json(space): Json<Space>,
) -> AppResult<Json<Space>> {
    tracing::debug!(
        "REST request to partial update Spaces partially : {}, {:?}",
        id,
        space
    );

    let body_id = space.id.ok_or_else(|| AppError::BadRequestAlert {
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

    let result = state.services.spaces.partial_update(id, &space).await?;
    Ok(Json(result))
}

/// List space reservations (all owners, any caller)
#[utoipa::path(
    get,
    path = "/spaces",
    tag = "spaces",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of space reservations", body = PaginatedResponse<Space>)
    )
)]
pub async fn list_spaces(
    State(state): State<crate::AppState>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<PageQuery>,
) -> AppResult<(HeaderMap, Json<PaginatedResponse<Space>>)> {
    tracing::debug!("REST request to get a page of Spaces");
    let page = query.params();

    let (items, total) = state.services.spaces.list(&page).await?;

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

/// Get a space reservation by ID
#[utoipa::path(
    get,
    path = "/spaces/{id}",
    tag = "spaces",
    params(("id" = i64, Path, description = "Space ID")),
    responses(
        (status = 200, description = "The space reservation", body = Space),
        (status = 404, description = "Space reservation not found")
    )
)]
pub async fn get_space(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Space>> {
    tracing::debug!("REST request to get Spaces : {}", id);
    let space = state.services.spaces.get(id).await?;
    Ok(Json(space))
}

/// Delete a space reservation by ID
#[utoipa::path(
    delete,
    path = "/spaces/{id}",
    tag = "spaces",
    params(("id" = i64, Path, description = "Space ID")),
    responses(
        (status = 204, description = "Deleted (whether or not the ID existed)")
    )
)]
pub async fn delete_space(
    State(state): State<crate::AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    tracing::debug!("REST request to delete Spaces : {}", id);
    state.services.spaces.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
