use anyhow::{anyhow, Result};
use dioxus::prelude::*;
use log::error;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use foodgram::{auth::AuthToken, ApiErrorResponse};

use crate::{
    model::{AuthenticationState, FoodgramUIModel},
    services::local_storage::LocalStorageService,
};

pub async fn call_api<R: DeserializeOwned, B: Serialize>(
    method: Method,
    base_url: &Url,
    path: &str,
    body: Option<B>,
    ui_model: Option<Signal<FoodgramUIModel>>,
) -> Result<R> {
    let response = send_request(method, base_url, path, body, ui_model).await?;

    Ok(response.json().await?)
}

/// Same as [`call_api`] for endpoints answering `204 No Content`.
pub async fn call_api_without_content<B: Serialize>(
    method: Method,
    base_url: &Url,
    path: &str,
    body: Option<B>,
    ui_model: Option<Signal<FoodgramUIModel>>,
) -> Result<()> {
    send_request(method, base_url, path, body, ui_model).await?;

    Ok(())
}

async fn send_request<B: Serialize>(
    method: Method,
    base_url: &Url,
    path: &str,
    body: Option<B>,
    ui_model: Option<Signal<FoodgramUIModel>>,
) -> Result<Response> {
    let mut request = API_CLIENT.request(method.clone(), base_url.join(path)?);

    if let Some(token) = LocalStorageService::load_auth_token() {
        request = request.header(AUTHORIZATION, AuthToken::authorization_header(&token));
    }

    if let Some(body) = body {
        request = request
            .header("content-type", "application/json")
            .json(&body);
    }

    let response: Response = request.send().await?;
    let status = response.status();

    if let Some(mut ui_model) = ui_model {
        if status == StatusCode::UNAUTHORIZED {
            ui_model.write().authentication_state = AuthenticationState::NotAuthenticated;
        } else if status.is_success()
            && ui_model.read().authentication_state != AuthenticationState::Authenticated
            && LocalStorageService::load_auth_token().is_some()
        {
            ui_model.write().authentication_state = AuthenticationState::Authenticated;
        }
    }

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("API call failed ({method} {base_url}{path}): {status} {body}");
    Err(anyhow!(api_error_message(status, &body)))
}

fn api_error_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorResponse>(body) {
        Ok(error) => error.message(),
        Err(_) if status == StatusCode::UNAUTHORIZED => "Unauthorized call to the API".to_string(),
        Err(_) => format!("Unexpected response from the Foodgram API ({status})"),
    }
}

lazy_static! {
    pub static ref API_CLIENT: Client = reqwest::ClientBuilder::new()
        .default_headers({
            let mut headers = HeaderMap::new();
            headers.insert("Accept", HeaderValue::from_static("application/json"));
            headers
        })
        .build()
        .unwrap();
}
