use utoipa::OpenApi;

use crate::models::{CreateUserRequest, HealthResponse, MessageResponse, UpdateUserRequest, User};

/// OpenAPI documentation for the User API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "REST API to create, read, update and delete user records. Passwords are stored as bcrypt hashes.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User record endpoints")
    ),
    paths(
        crate::handlers::get_user,
        crate::handlers::create_user,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            User,
            CreateUserRequest,
            UpdateUserRequest,
            MessageResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
