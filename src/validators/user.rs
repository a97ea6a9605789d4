//! User-related validators.

use crate::constants::{CODE_NO_UPDATE_FIELDS, ERR_NO_UPDATE_FIELDS};
use crate::errors::ApiError;
use crate::models::UpdateUserRequest;

/// Require at least one non-empty field in an update request.
pub fn validate_update_fields(req: &UpdateUserRequest) -> Result<(), ApiError> {
    let supplied = [
        &req.name,
        &req.login,
        &req.national_id,
        &req.email,
        &req.password,
    ]
    .iter()
    .any(|field| field.as_deref().is_some_and(|v| !v.is_empty()));

    if !supplied {
        return Err(ApiError::validation(
            CODE_NO_UPDATE_FIELDS,
            ERR_NO_UPDATE_FIELDS,
        ));
    }
    Ok(())
}
