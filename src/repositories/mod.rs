//! Repository layer for database operations.
//!
//! Services depend on the [`UserRepository`] trait; the MySQL implementation
//! is constructed once at startup and injected.

pub mod error;
#[cfg(test)]
pub mod in_memory;
pub mod user_repository;

pub use error::StoreError;
#[cfg(test)]
pub use in_memory::InMemoryUserRepository;
pub use user_repository::{MySqlUserRepository, UserRepository};
