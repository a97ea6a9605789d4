//! Request validators organized by domain.

pub mod common;
pub mod user;

pub use common::*;
pub use user::*;
