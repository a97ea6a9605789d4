//! Common validation utilities and helpers.

use actix_web::error::JsonPayloadError;
use actix_web::HttpRequest;
use log::warn;
use validator::ValidationErrors;

use crate::constants::{CODE_INVALID_BODY, ERR_INVALID_BODY};
use crate::errors::ApiError;

/// Convert validator errors to a single validation outcome.
///
/// The failing field names are logged; the client only receives `message`.
///
/// # Example
/// ```ignore
/// body.validate()
///     .map_err(|e| validation_errors_to_api_error(e, CODE_MISSING_FIELDS, ERR_MISSING_FIELDS))?;
/// ```
pub fn validation_errors_to_api_error(e: ValidationErrors, code: &str, message: &str) -> ApiError {
    let mut fields: Vec<String> = e.field_errors().keys().map(|k| k.to_string()).collect();
    fields.sort();
    warn!("Validation failed [{}] for fields: {:?}", code, fields);
    ApiError::validation(code, message)
}

/// Error handler for `web::JsonConfig`: unreadable bodies are validation failures.
pub fn json_payload_error(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!("Rejected body for {} {}: {}", req.method(), req.path(), err);
    ApiError::validation(CODE_INVALID_BODY, ERR_INVALID_BODY).into()
}
