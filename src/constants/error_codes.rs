//! Error code constants for API responses.
//!
//! These codes identify each failure outcome in logs and tests; the response
//! body itself only carries the localized message.

// Validation errors
pub const CODE_MISSING_FIELDS: &str = "MISSING_FIELDS";
pub const CODE_NO_UPDATE_FIELDS: &str = "NO_UPDATE_FIELDS";
pub const CODE_INVALID_BODY: &str = "INVALID_BODY";

// User errors
pub const CODE_USER_NOT_FOUND: &str = "USER_NOT_FOUND";
pub const CODE_EMAIL_EXISTS: &str = "EMAIL_EXISTS";

// Storage errors
pub const CODE_STORAGE_FAILURE: &str = "STORAGE_FAILURE";
