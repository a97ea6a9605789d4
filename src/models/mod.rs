//! Data models organized by type.

pub mod requests;
pub mod responses;
pub mod user;

pub use requests::*;
pub use responses::*;
pub use user::*;
