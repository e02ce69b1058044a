use std::str::FromStr;

use email_address::EmailAddress;
use secrecy::{CloneableSecret, DebugSecret, ExposeSecret, Secret, SerializableSecret, Zeroize};
use serde::{Deserialize, Serialize};

use crate::user::Password;

/// Body of `POST auth/token/login/`.
#[derive(Debug, Deserialize, Serialize)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: Secret<Password>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct AuthToken(pub String);

impl Zeroize for AuthToken {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
impl CloneableSecret for AuthToken {}
impl DebugSecret for AuthToken {}
impl SerializableSecret for AuthToken {}

impl FromStr for AuthToken {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(anyhow::anyhow!("Authentication token cannot be empty"));
        }

        Ok(Self(token.to_string()))
    }
}

impl AuthToken {
    /// Value of the `Authorization` header expected by the API.
    pub fn authorization_header(token: &Secret<AuthToken>) -> String {
        format!("Token {}", token.expose_secret().0)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TokenCreateResponse {
    pub auth_token: Secret<AuthToken>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_token_create_response_decoding() {
        let response: TokenCreateResponse =
            serde_json::from_str(r#"{"auth_token": "abc123"}"#).unwrap();

        assert_eq!(
            AuthToken::authorization_header(&response.auth_token),
            "Token abc123"
        );
    }

    #[rstest]
    fn test_token_is_not_leaked_in_debug_output() {
        let response: TokenCreateResponse =
            serde_json::from_str(r#"{"auth_token": "abc123"}"#).unwrap();

        assert!(!format!("{response:?}").contains("abc123"));
    }

    #[rstest]
    #[case::empty("")]
    #[case::blank("   ")]
    fn test_empty_token_is_rejected(#[case] token: &str) {
        assert!(token.parse::<AuthToken>().is_err());
    }

    #[rstest]
    fn test_credentials_serialization() {
        let credentials = Credentials {
            email: "a@b.com".parse().unwrap(),
            password: Secret::new("secret1".parse().unwrap()),
        };

        assert_eq!(
            serde_json::to_value(&credentials).unwrap(),
            serde_json::json!({ "email": "a@b.com", "password": "secret1" })
        );
    }
}
