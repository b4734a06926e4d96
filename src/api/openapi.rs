//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{auth, borrowings, health, spaces};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookspace API",
        version = "1.0.0",
        description = "Library borrowing and space reservation REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Borrowings
        borrowings::create_borrowing,
        borrowings::update_borrowing,
        borrowings::partial_update_borrowing,
        borrowings::list_borrowings,
        borrowings::get_borrowing,
        borrowings::delete_borrowing,
        // Spaces
        spaces::create_space,
        spaces::update_space,
        spaces::partial_update_space,
        spaces::list_spaces,
        spaces::get_space,
        spaces::delete_space,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Entities
            crate::models::borrowing::Borrowing,
            crate::models::space::Space,
            crate::models::book::BookRef,
            crate::models::user::UserRef,
            crate::models::user::Role,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "borrowings", description = "Book borrowing management"),
        (name = "spaces", description = "Space reservation management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
