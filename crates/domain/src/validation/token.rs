// Payload fields are named after their wire keys
#![allow(missing_docs)]

use serde::Deserialize;

use super::{Validate, Violation, required};

/// OAuth-style grant used to request an access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GrantType {
    Password,
    RefreshToken,
    ApiKey,
}

/// Body of a token-retrieval request.
///
/// Which credential fields are required depends on `grant_type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenPayload {
    pub grant_type: Option<GrantType>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub refresh_token: Option<String>,
    pub api_key: Option<String>,
}

impl Validate for TokenPayload {
    fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        match self.grant_type {
            None => violations.push(Violation::new("grant_type", "is required")),
            Some(GrantType::Password) => {
                violations.extend(required("username", self.username.as_deref()));
                violations.extend(required("password", self.password.as_deref()));
            }
            Some(GrantType::RefreshToken) => {
                violations.extend(required("refresh_token", self.refresh_token.as_deref()));
            }
            Some(GrantType::ApiKey) => {
                violations.extend(required("api_key", self.api_key.as_deref()));
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty(grant_type: Option<GrantType>) -> TokenPayload {
        TokenPayload {
            grant_type,
            username: None,
            password: None,
            refresh_token: None,
            api_key: None,
        }
    }

    #[test]
    fn test_password_grant_valid() {
        let payload = TokenPayload {
            username: Some("ada".to_string()),
            password: Some("secret".to_string()),
            ..empty(Some(GrantType::Password))
        };
        assert!(payload.validate().is_empty());
    }

    #[test]
    fn test_password_grant_requires_credentials() {
        let fields: Vec<_> = empty(Some(GrantType::Password))
            .validate()
            .into_iter()
            .map(|v| v.field)
            .collect();
        assert_eq!(fields, vec!["username", "password"]);
    }

    #[test]
    fn test_refresh_grant_ignores_password_fields() {
        let payload = TokenPayload {
            refresh_token: Some("r-123".to_string()),
            ..empty(Some(GrantType::RefreshToken))
        };
        assert!(payload.validate().is_empty());

        let violations = empty(Some(GrantType::RefreshToken)).validate();
        assert_eq!(violations, vec![Violation::new("refresh_token", "is required")]);
    }

    #[test]
    fn test_api_key_grant() {
        let violations = empty(Some(GrantType::ApiKey)).validate();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "api_key");
    }

    #[test]
    fn test_missing_grant_type() {
        let violations = empty(None).validate();
        assert_eq!(violations, vec![Violation::new("grant_type", "is required")]);
    }

    #[test]
    fn test_grant_type_from_json() {
        let payload: TokenPayload =
            serde_json::from_str(r#"{"grant_type":"refresh_token","refresh_token":"abc"}"#)
                .unwrap();
        assert_eq!(payload.grant_type, Some(GrantType::RefreshToken));
        assert_eq!(GrantType::RefreshToken.to_string(), "refresh_token");
    }
}
