//! In-memory [`UserRepository`] used by tests in place of MySQL.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::models::{NewUser, User, UserChanges};
use crate::repositories::{StoreError, UserRepository};

/// Mirrors the MySQL table: auto-increment ids and a unique email column.
#[derive(Default)]
pub struct InMemoryUserRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_id: u64,
    rows: Vec<User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().rows.len()
    }

    pub fn count_with_email(&self, email: &str) -> usize {
        let state = self.state.lock().unwrap();
        state.rows.iter().filter(|u| u.email == email).count()
    }
}

// Ids that do not parse as numbers simply match no row.
fn parse_id(id: &str) -> Option<u64> {
    id.trim().parse().ok()
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn ensure_schema(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(None);
        };
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let state = self.state.lock().unwrap();
        Ok(state.rows.iter().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<u64, StoreError> {
        let mut state = self.state.lock().unwrap();
        if state.rows.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        state.next_id += 1;
        let id = state.next_id;
        state.rows.push(user.clone().with_id(id));
        Ok(id)
    }

    async fn update(&self, id: &str, changes: &UserChanges) -> Result<bool, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        let mut state = self.state.lock().unwrap();
        if let Some(email) = &changes.email {
            if state.rows.iter().any(|u| u.id != id && &u.email == email) {
                return Err(StoreError::DuplicateEmail);
            }
        }
        match state.rows.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                changes.apply_to(user);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let Some(id) = parse_id(id) else {
            return Ok(false);
        };
        let mut state = self.state.lock().unwrap();
        let before = state.rows.len();
        state.rows.retain(|u| u.id != id);
        Ok(state.rows.len() < before)
    }
}
