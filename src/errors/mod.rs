use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::{debug, error};
use thiserror::Error;

use crate::constants::{
    CODE_EMAIL_EXISTS, CODE_STORAGE_FAILURE, CODE_USER_NOT_FOUND, ERR_EMAIL_EXISTS,
    ERR_USER_NOT_FOUND,
};
use crate::models::MessageResponse;
use crate::repositories::StoreError;

/// Outcome of a failed operation, prior to its mapping onto an HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation Error [{code}]: {message}")]
    Validation { code: String, message: String },
    #[error("Not Found [{code}]: {message}")]
    NotFound { code: String, message: String },
    #[error("Conflict [{code}]: {message}")]
    Conflict { code: String, message: String },
    #[error("Internal Server Error [{code}]: {message}")]
    Internal { code: String, message: String },
}

impl ApiError {
    pub fn validation(code: &str, message: &str) -> Self {
        ApiError::Validation {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    pub fn user_not_found() -> Self {
        ApiError::NotFound {
            code: CODE_USER_NOT_FOUND.to_string(),
            message: ERR_USER_NOT_FOUND.to_string(),
        }
    }

    pub fn email_exists() -> Self {
        ApiError::Conflict {
            code: CODE_EMAIL_EXISTS.to_string(),
            message: ERR_EMAIL_EXISTS.to_string(),
        }
    }

    pub fn internal(message: &str) -> Self {
        ApiError::Internal {
            code: CODE_STORAGE_FAILURE.to_string(),
            message: message.to_string(),
        }
    }

    /// Map a storage error onto an outcome.
    ///
    /// Faults are logged in full here; the caller only ever sees `failure_message`.
    pub fn from_store(err: StoreError, failure_message: &str) -> Self {
        match err {
            StoreError::DuplicateEmail => ApiError::email_exists(),
            other => {
                error!("{}: {}", failure_message, other);
                ApiError::internal(failure_message)
            }
        }
    }

    pub fn code(&self) -> &str {
        match self {
            ApiError::Validation { code, .. }
            | ApiError::NotFound { code, .. }
            | ApiError::Conflict { code, .. }
            | ApiError::Internal { code, .. } => code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ApiError::Validation { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Internal { message, .. } => message,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::Conflict { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        debug!("Responding {} [{}]", self.status_code(), self.code());
        HttpResponse::build(self.status_code()).json(MessageResponse::new(self.message()))
    }
}
