//! User handlers for fetch, create, update and delete.

use actix_web::http::header;
use actix_web::{web, HttpResponse};
use log::{debug, info};

use crate::constants::{MSG_USER_CREATED, MSG_USER_DELETED, MSG_USER_UPDATED};
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, MessageResponse, UpdateUserRequest};
use crate::services::UserService;

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = crate::models::User),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.get_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Create a user
///
/// The password is stored as a bcrypt hash. The new record's location is
/// returned in the `Location` header.
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse,
            headers(("Location" = String, description = "Path of the new user"))),
        (status = 422, description = "Missing field or email already in use", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn create_user(
    user_service: web::Data<UserService>,
    body: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user = user_service.create_user(body.into_inner()).await?;

    info!("Successfully created user: {}", user.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/users/{}", user.id)))
        .json(MessageResponse::new(MSG_USER_CREATED)))
}

/// Update a user
///
/// Only the supplied, non-empty fields change. A supplied password is re-hashed.
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 422, description = "No fields supplied or email already in use", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    user_service
        .update_user(&user_id, body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_USER_UPDATED)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    user_service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(MSG_USER_DELETED)))
}
