//! Application constants module.
//!
//! Centralizes the message strings, error codes and storage names used
//! throughout the application.

pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod security;
pub mod tables;

pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use security::*;
pub use tables::*;
