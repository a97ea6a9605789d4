//! User service implementing fetch, create, update and delete of user records.

use std::sync::Arc;

use log::{debug, error, info, warn};
use validator::Validate;

use crate::constants::{
    CODE_MISSING_FIELDS, ERR_CREATE_FAILED, ERR_DELETE_FAILED, ERR_FETCH_FAILED,
    ERR_MISSING_FIELDS, ERR_UPDATE_FAILED,
};
use crate::errors::ApiError;
use crate::models::{CreateUserRequest, NewUser, UpdateUserRequest, User, UserChanges};
use crate::repositories::UserRepository;
use crate::services::password::hash_password;
use crate::utils::log_sanitizer::mask_email;
use crate::validators::{validate_update_fields, validation_errors_to_api_error};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Fetch a user by the raw identifier taken from the request path.
    pub async fn get_user(&self, user_id: &str) -> Result<User, ApiError> {
        debug!("Fetching user by ID: {}", user_id);

        self.repository
            .find_by_id(user_id)
            .await
            .map_err(|e| ApiError::from_store(e, ERR_FETCH_FAILED))?
            .ok_or_else(|| {
                warn!("User not found with id: {}", user_id);
                ApiError::user_not_found()
            })
    }

    /// Create a user. Returns the stored record, including its new identifier.
    pub async fn create_user(&self, req: CreateUserRequest) -> Result<User, ApiError> {
        req.validate().map_err(|e| {
            validation_errors_to_api_error(e, CODE_MISSING_FIELDS, ERR_MISSING_FIELDS)
        })?;

        let CreateUserRequest {
            name: Some(name),
            login: Some(login),
            password: Some(password),
            national_id: Some(national_id),
            email: Some(email),
        } = req
        else {
            return Err(ApiError::validation(CODE_MISSING_FIELDS, ERR_MISSING_FIELDS));
        };

        // Fast path only; the unique index decides concurrent inserts.
        let existing = self
            .repository
            .find_by_email(&email)
            .await
            .map_err(|e| ApiError::from_store(e, ERR_CREATE_FAILED))?;
        if existing.is_some() {
            warn!("Create failed: Email {} already in use", mask_email(&email));
            return Err(ApiError::email_exists());
        }

        let password_hash = hash_password(password).await.map_err(|e| {
            error!("{}: {}", ERR_CREATE_FAILED, e);
            ApiError::internal(ERR_CREATE_FAILED)
        })?;

        let new_user = NewUser {
            name,
            login,
            password_hash,
            national_id,
            email,
        };

        let id = self
            .repository
            .insert(&new_user)
            .await
            .map_err(|e| {
                let err = ApiError::from_store(e, ERR_CREATE_FAILED);
                if matches!(err, ApiError::Conflict { .. }) {
                    warn!(
                        "Create failed: Email {} taken by a concurrent request",
                        mask_email(&new_user.email)
                    );
                }
                err
            })?;

        info!("Created user {} ({})", id, mask_email(&new_user.email));
        Ok(new_user.with_id(id))
    }

    /// Apply the supplied fields of `req` to the user with `user_id`.
    pub async fn update_user(
        &self,
        user_id: &str,
        req: UpdateUserRequest,
    ) -> Result<(), ApiError> {
        validate_update_fields(&req).inspect_err(|_| {
            warn!("Update rejected: no fields supplied for user: {}", user_id);
        })?;

        let mut changes = UserChanges::from_request(&req);
        if let Some(password) = req.password.filter(|p| !p.is_empty()) {
            let password_hash = hash_password(password).await.map_err(|e| {
                error!("{}: {}", ERR_UPDATE_FAILED, e);
                ApiError::internal(ERR_UPDATE_FAILED)
            })?;
            changes.password_hash = Some(password_hash);
        }

        info!("Updating user profile for user_id: {}", user_id);
        let matched = self
            .repository
            .update(user_id, &changes)
            .await
            .map_err(|e| ApiError::from_store(e, ERR_UPDATE_FAILED))?;

        if !matched {
            warn!("Update failed: User not found with id: {}", user_id);
            return Err(ApiError::user_not_found());
        }

        info!("Successfully updated user: {}", user_id);
        Ok(())
    }

    /// Delete user by ID
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        info!("Deleting user with id: {}", user_id);

        let deleted = self
            .repository
            .delete(user_id)
            .await
            .map_err(|e| ApiError::from_store(e, ERR_DELETE_FAILED))?;

        if !deleted {
            warn!("Delete failed: User not found with id: {}", user_id);
            return Err(ApiError::user_not_found());
        }

        info!("Successfully deleted user: {}", user_id);
        Ok(())
    }
}
