use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::constants::{COL_EMAIL, COL_LOGIN, COL_NAME, COL_NATIONAL_ID, COL_PASSWORD};
use crate::models::UpdateUserRequest;

/// User row stored in the `usuario` table.
///
/// Serialized with the stored column names, password hash included.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, FromRow, ToSchema)]
pub struct User {
    #[serde(rename = "idUsuario")]
    #[sqlx(rename = "idUsuario")]
    #[schema(example = 1)]
    pub id: u64,
    #[serde(rename = "nomeUsuario")]
    #[sqlx(rename = "nomeUsuario")]
    #[schema(example = "Ana")]
    pub name: String,
    #[serde(rename = "userUsuario")]
    #[sqlx(rename = "userUsuario")]
    #[schema(example = "ana1")]
    pub login: String,
    #[serde(rename = "senhaUsuario")]
    #[sqlx(rename = "senhaUsuario")]
    #[schema(example = "$2b$12$C6UzMDM.H6dfI/f/IKcEeO5mDvlfcJjxqfkFEbNsBrKt0eLXvb8ci")]
    pub password_hash: String,
    #[serde(rename = "cpfUsuario")]
    #[sqlx(rename = "cpfUsuario")]
    #[schema(example = "11111111111")]
    pub national_id: String,
    #[serde(rename = "emailUsuario")]
    #[sqlx(rename = "emailUsuario")]
    #[schema(example = "ana@x.com")]
    pub email: String,
}

/// A user about to be inserted; the identifier is assigned by storage.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub login: String,
    pub password_hash: String,
    pub national_id: String,
    pub email: String,
}

impl NewUser {
    pub fn with_id(self, id: u64) -> User {
        User {
            id,
            name: self.name,
            login: self.login,
            password_hash: self.password_hash,
            national_id: self.national_id,
            email: self.email,
        }
    }
}

/// Sparse change-set applied by an update. `None` leaves the stored value as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub login: Option<String>,
    pub national_id: Option<String>,
    pub email: Option<String>,
    /// Already hashed.
    pub password_hash: Option<String>,
}

impl UserChanges {
    /// Collect the non-empty plain fields of an update request.
    ///
    /// The password is left out; it is hashed by the service and set afterwards.
    pub fn from_request(req: &UpdateUserRequest) -> Self {
        Self {
            name: non_empty(&req.name),
            login: non_empty(&req.login),
            national_id: non_empty(&req.national_id),
            email: non_empty(&req.email),
            password_hash: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns().is_empty()
    }

    /// Column/value pairs of the supplied fields, in a stable order.
    pub fn columns(&self) -> Vec<(&'static str, &str)> {
        [
            (COL_NAME, &self.name),
            (COL_LOGIN, &self.login),
            (COL_NATIONAL_ID, &self.national_id),
            (COL_EMAIL, &self.email),
            (COL_PASSWORD, &self.password_hash),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|v| (column, v)))
        .collect()
    }

    /// Apply the change-set to an in-memory record.
    #[cfg(test)]
    pub fn apply_to(&self, user: &mut User) {
        let fields = [
            (&self.name, &mut user.name),
            (&self.login, &mut user.login),
            (&self.national_id, &mut user.national_id),
            (&self.email, &mut user.email),
            (&self.password_hash, &mut user.password_hash),
        ];
        for (change, target) in fields {
            if let Some(value) = change {
                *target = value.clone();
            }
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            name: "Ana".to_string(),
            login: "ana1".to_string(),
            password_hash: "$2b$12$old".to_string(),
            national_id: "111".to_string(),
            email: "ana@x.com".to_string(),
        }
    }

    #[test]
    fn test_serializes_with_stored_column_names() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert_eq!(value["idUsuario"], 7);
        assert_eq!(value["nomeUsuario"], "Ana");
        assert_eq!(value["userUsuario"], "ana1");
        assert_eq!(value["senhaUsuario"], "$2b$12$old");
        assert_eq!(value["cpfUsuario"], "111");
        assert_eq!(value["emailUsuario"], "ana@x.com");
    }

    #[test]
    fn test_change_set_skips_absent_and_empty_fields() {
        let req = UpdateUserRequest {
            name: Some("Ana Maria".to_string()),
            login: Some(String::new()),
            email: None,
            national_id: None,
            password: Some("NovaSenha1".to_string()),
        };
        let changes = UserChanges::from_request(&req);
        assert_eq!(changes.columns(), vec![(COL_NAME, "Ana Maria")]);
    }

    #[test]
    fn test_empty_change_set() {
        assert!(UserChanges::default().is_empty());
        let only_password = UserChanges {
            password_hash: Some("$2b$12$new".to_string()),
            ..Default::default()
        };
        assert!(!only_password.is_empty());
    }

    #[test]
    fn test_apply_only_touches_supplied_fields() {
        let mut user = sample_user();
        let changes = UserChanges {
            email: Some("ana@y.com".to_string()),
            password_hash: Some("$2b$12$new".to_string()),
            ..Default::default()
        };
        changes.apply_to(&mut user);
        assert_eq!(user.email, "ana@y.com");
        assert_eq!(user.password_hash, "$2b$12$new");
        assert_eq!(user.name, "Ana");
        assert_eq!(user.login, "ana1");
        assert_eq!(user.national_id, "111");
        assert_eq!(user.id, 7);
    }
}
