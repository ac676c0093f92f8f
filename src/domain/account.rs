//! Account domain entity and the use-case request model.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account as returned by the add-account use case.
///
/// `password` holds the hashed representation; the plaintext never
/// leaves the use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountModel {
    /// Store-generated identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    #[schema(example = "Ana")]
    pub name: String,
    #[schema(example = "ana@example.com")]
    pub email: String,
    /// Password hash
    pub password: String,
}

/// Input of the add-account use case (plaintext password).
#[derive(Clone, PartialEq, Eq)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

// Don't expose the plaintext password in debug output
impl std::fmt::Debug for AddAccountModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AddAccountModel")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AddAccountModel {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_account_debug_redacts_password() {
        let model = AddAccountModel::new("Ana", "ana@x.com", "p1-plaintext");
        let debug = format!("{:?}", model);

        assert!(debug.contains("ana@x.com"));
        assert!(!debug.contains("p1-plaintext"));
    }

    #[test]
    fn test_account_serializes_flat() {
        let account = AccountModel {
            id: "1".to_string(),
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            password: "hashed".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&account).unwrap(),
            serde_json::json!({
                "id": "1",
                "name": "Ana",
                "email": "ana@x.com",
                "password": "hashed"
            })
        );
    }
}
