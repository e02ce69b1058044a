use std::{fmt, str::FromStr};

use anyhow::anyhow;
use email_address::EmailAddress;
use regex::Regex;
use secrecy::{CloneableSecret, DebugSecret, Secret, SerializableSecret, Zeroize};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::form::SignUpFormValues;

pub const NAME_MAX_LENGTH: usize = 150;
pub const USERNAME_MAX_LENGTH: usize = 150;
pub const EMAIL_MAX_LENGTH: usize = 254;

lazy_static! {
    static ref USERNAME_REGEX: Regex = Regex::new(r"^[\w.@+-]+$").unwrap();
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: EmailAddress,
    pub username: Username,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_subscribed: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone, Eq, Hash)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Hash)]
#[serde(transparent)]
pub struct Username(pub String);

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Username {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(anyhow!("Username is required"));
        }
        if s.chars().count() > USERNAME_MAX_LENGTH {
            return Err(anyhow!(
                "Username must be at most {USERNAME_MAX_LENGTH} characters long"
            ));
        }
        if !USERNAME_REGEX.is_match(s) {
            return Err(anyhow!(
                "Username may contain only letters, digits and @/./+/-/_ characters"
            ));
        }

        Ok(Self(s.to_string()))
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct Password(pub String);

impl Zeroize for Password {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
impl CloneableSecret for Password {}
impl DebugSecret for Password {}
impl SerializableSecret for Password {}

impl FromStr for Password {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(anyhow!("Password is required"));
        }

        Ok(Self(s.to_string()))
    }
}

/// Parses an e-mail address the way the registration endpoint accepts it:
/// at most 254 characters and a dotted domain.
pub fn parse_sign_up_email(value: &str) -> Result<EmailAddress, anyhow::Error> {
    let email = value
        .parse::<EmailAddress>()
        .ok()
        .filter(|email| value.len() <= EMAIL_MAX_LENGTH && email.domain().contains('.'))
        .ok_or_else(|| anyhow!("Enter a valid email address"))?;

    Ok(email)
}

/// Body of `POST users/`.
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct SignUpParameters {
    #[validate(length(min = 1, max = 150))]
    pub first_name: String,
    #[validate(length(min = 1, max = 150))]
    pub last_name: String,
    pub username: Username,
    #[validate(length(max = 254))]
    pub email: String,
    pub password: Secret<Password>,
}

impl SignUpParameters {
    pub fn try_new(
        first_name: String,
        last_name: String,
        username: Username,
        email: EmailAddress,
        password: Password,
    ) -> Result<Self, anyhow::Error> {
        let params = Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            username,
            email: email.to_string(),
            password: Secret::new(password),
        };

        params.validate()?;

        Ok(params)
    }
}

impl TryFrom<SignUpFormValues> for SignUpParameters {
    type Error = anyhow::Error;

    fn try_from(values: SignUpFormValues) -> Result<Self, Self::Error> {
        Self::try_new(
            values.first_name,
            values.last_name,
            values.username.parse()?,
            parse_sign_up_email(&values.email)?,
            values.password.parse()?,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use secrecy::ExposeSecret;

    fn ann_lee() -> SignUpFormValues {
        SignUpFormValues {
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            username: "annlee".to_string(),
            email: "a@b.com".to_string(),
            password: "secret1".to_string(),
        }
    }

    #[rstest]
    #[case::simple("annlee")]
    #[case::with_symbols("ann.lee+food@home-1_x")]
    #[case::unicode("анна")]
    fn test_valid_username(#[case] username: &str) {
        assert_eq!(
            username.parse::<Username>().unwrap(),
            Username(username.to_string())
        );
    }

    #[rstest]
    #[case::empty("")]
    #[case::with_space("ann lee")]
    #[case::with_slash("ann/lee")]
    fn test_invalid_username(#[case] username: &str) {
        assert!(username.parse::<Username>().is_err());
    }

    #[rstest]
    fn test_username_too_long() {
        let username = "a".repeat(USERNAME_MAX_LENGTH + 1);

        assert!(username.parse::<Username>().is_err());
        assert!(username[1..].parse::<Username>().is_ok());
    }

    #[rstest]
    fn test_empty_password_is_rejected() {
        assert!("".parse::<Password>().is_err());
        assert_eq!("secret1".parse::<Password>().unwrap().0, "secret1");
    }

    #[rstest]
    #[case::simple("a@b.com")]
    #[case::subdomain("ann.lee@mail.example.org")]
    fn test_valid_sign_up_email(#[case] email: &str) {
        assert_eq!(parse_sign_up_email(email).unwrap().as_str(), email);
    }

    #[rstest]
    #[case::no_domain("a@")]
    #[case::undotted_domain("a@b")]
    #[case::not_an_email("not an email")]
    fn test_invalid_sign_up_email(#[case] email: &str) {
        assert_eq!(
            parse_sign_up_email(email).unwrap_err().to_string(),
            "Enter a valid email address"
        );
    }

    #[rstest]
    fn test_sign_up_email_too_long() {
        let email = format!("{}@b.com", "a".repeat(EMAIL_MAX_LENGTH));

        assert!(parse_sign_up_email(&email).is_err());
    }

    #[rstest]
    fn test_sign_up_parameters_from_form_values() {
        let params: SignUpParameters = ann_lee().try_into().unwrap();

        assert_eq!(params.first_name, "Ann");
        assert_eq!(params.last_name, "Lee");
        assert_eq!(params.username, Username("annlee".to_string()));
        assert_eq!(params.email, "a@b.com");
        assert_eq!(params.password.expose_secret().0, "secret1");
    }

    #[rstest]
    fn test_sign_up_parameters_serialization() {
        let params: SignUpParameters = ann_lee().try_into().unwrap();

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            serde_json::json!({
                "first_name": "Ann",
                "last_name": "Lee",
                "username": "annlee",
                "email": "a@b.com",
                "password": "secret1"
            })
        );
    }

    #[rstest]
    fn test_sign_up_parameters_rejects_blank_name() {
        let values = ann_lee().with_field(crate::form::SignUpField::FirstName, "  ");

        assert!(SignUpParameters::try_from(values).is_err());
    }

    #[rstest]
    fn test_sign_up_parameters_rejects_invalid_email() {
        let values = ann_lee().with_field(crate::form::SignUpField::Email, "not an email");

        assert!(SignUpParameters::try_from(values).is_err());
    }

    #[rstest]
    fn test_user_decoding() {
        let user: User = serde_json::from_str(
            r#"{
                "email": "a@b.com",
                "id": 7,
                "username": "annlee",
                "first_name": "Ann",
                "last_name": "Lee",
                "is_subscribed": false
            }"#,
        )
        .unwrap();

        assert_eq!(user.id, UserId(7));
        assert_eq!(user.full_name(), "Ann Lee");
    }
}
