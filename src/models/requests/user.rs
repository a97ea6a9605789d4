//! User-related request models.
//!
//! Fields are optional at the deserialization level so that a missing field
//! surfaces as a validation failure instead of a body parse error.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating a user. Every field is required and non-empty.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Display name
    #[serde(rename = "nomeUsuario")]
    #[validate(required, length(min = 1))]
    #[schema(example = "Ana")]
    pub name: Option<String>,
    /// Login name
    #[serde(rename = "userUsuario")]
    #[validate(required, length(min = 1))]
    #[schema(example = "ana1")]
    pub login: Option<String>,
    /// Plaintext password, hashed before it is stored
    #[serde(rename = "senhaUsuario")]
    #[validate(required, length(min = 1))]
    #[schema(example = "Secret123")]
    pub password: Option<String>,
    /// National identification number (CPF), as a string or a number
    #[serde(rename = "cpfUsuario", default, deserialize_with = "deserialize_text_or_number")]
    #[validate(required, length(min = 1))]
    #[schema(example = "111")]
    pub national_id: Option<String>,
    /// Email address, unique across users
    #[serde(rename = "emailUsuario")]
    #[validate(required, length(min = 1))]
    #[schema(example = "ana@x.com")]
    pub email: Option<String>,
}

/// Request payload for updating a user. Any subset of fields, at least one non-empty.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(rename = "nomeUsuario")]
    #[schema(example = "Ana Maria")]
    pub name: Option<String>,
    #[serde(rename = "userUsuario")]
    #[schema(example = "anamaria")]
    pub login: Option<String>,
    #[serde(rename = "cpfUsuario", default, deserialize_with = "deserialize_text_or_number")]
    #[schema(example = "222")]
    pub national_id: Option<String>,
    #[serde(rename = "emailUsuario")]
    #[schema(example = "ana.maria@x.com")]
    pub email: Option<String>,
    /// New plaintext password, re-hashed before it is stored
    #[serde(rename = "senhaUsuario")]
    #[schema(example = "NovaSenha456")]
    pub password: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

/// Accept a JSON string or integer; integers keep their decimal digits.
fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Unsigned(n) => n.to_string(),
            TextOrNumber::Signed(n) => n.to_string(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_numeric_national_id_keeps_its_digits() {
        let req: CreateUserRequest = serde_json::from_value(json!({
            "nomeUsuario": "Ana",
            "userUsuario": "ana1",
            "senhaUsuario": "Secret123",
            "cpfUsuario": 11111111111u64,
            "emailUsuario": "ana@x.com"
        }))
        .unwrap();
        assert_eq!(req.national_id.as_deref(), Some("11111111111"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_national_id_may_be_absent_or_null() {
        let req: UpdateUserRequest =
            serde_json::from_value(json!({ "nomeUsuario": "Ana Maria" })).unwrap();
        assert_eq!(req.national_id, None);

        let req: UpdateUserRequest = serde_json::from_value(json!({ "cpfUsuario": null })).unwrap();
        assert_eq!(req.national_id, None);

        let req: UpdateUserRequest = serde_json::from_value(json!({ "cpfUsuario": "222" })).unwrap();
        assert_eq!(req.national_id.as_deref(), Some("222"));
    }

    #[test]
    fn test_national_id_rejects_other_json_types() {
        let result =
            serde_json::from_value::<UpdateUserRequest>(json!({ "cpfUsuario": [1, 2] }));
        assert!(result.is_err());
    }
}
