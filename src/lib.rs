use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

#[macro_use]
extern crate lazy_static;

pub mod auth;
pub mod form;
pub mod recipe;
pub mod user;

/// Paginated list as returned by the Foodgram API list endpoints.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Eq, Default)]
pub struct Page<T> {
    pub count: usize,
    pub next: Option<Url>,
    pub previous: Option<Url>,
    pub results: Vec<T>,
}

/// Error body returned by the API on a `4xx` response.
///
/// It is either a single `detail` message or a map of field name to messages.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum ApiErrorResponse {
    Detail { detail: String },
    Fields(BTreeMap<String, FieldErrors>),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(untagged)]
pub enum FieldErrors {
    Many(Vec<String>),
    One(String),
}

impl FieldErrors {
    fn messages(&self) -> Vec<&str> {
        match self {
            FieldErrors::Many(messages) => messages.iter().map(String::as_str).collect(),
            FieldErrors::One(message) => vec![message.as_str()],
        }
    }
}

impl ApiErrorResponse {
    pub fn message(&self) -> String {
        match self {
            ApiErrorResponse::Detail { detail } => detail.clone(),
            ApiErrorResponse::Fields(fields) => fields
                .iter()
                .map(|(field, errors)| {
                    let messages = errors.messages().join(" ");
                    if field == "non_field_errors" {
                        messages
                    } else {
                        format!("{field}: {messages}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
