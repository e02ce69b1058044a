use anyhow::Result;
use dioxus::prelude::*;
use futures_util::StreamExt;
use log::{debug, error};
use reqwest::Method;
use url::Url;

use foodgram::{
    auth::{Credentials, TokenCreateResponse},
    user::{SignUpParameters, User},
};

use crate::{
    model::{AuthenticationState, FoodgramUIModel},
    services::{
        api::{call_api, call_api_without_content},
        local_storage::LocalStorageService,
    },
};

pub enum UserCommand {
    GetUser,
    RegisterUser(SignUpParameters),
    Login(Credentials),
    Logout,
}

pub static CONNECTED_USER: GlobalSignal<Option<User>> = Signal::global(|| None);

pub async fn user_service(
    mut rx: UnboundedReceiver<UserCommand>,
    api_base_url: Url,
    mut connected_user: Signal<Option<User>>,
    mut ui_model: Signal<FoodgramUIModel>,
) {
    loop {
        let msg = rx.next().await;
        match msg {
            Some(UserCommand::GetUser) => {
                get_user(&api_base_url, connected_user, ui_model).await;
            }

            Some(UserCommand::RegisterUser(parameters)) => {
                ui_model.write().clear_messages();
                let result: Result<User> = call_api(
                    Method::POST,
                    &api_base_url,
                    "users/",
                    Some(parameters),
                    None,
                )
                .await;

                match result {
                    Ok(user) => {
                        debug!("User {} registered", user.username);
                        ui_model.write().complete_sign_up(&user.username);
                    }
                    Err(err) => {
                        ui_model.write().error_message = Some(err.to_string());
                    }
                };
            }

            Some(UserCommand::Login(credentials)) => {
                ui_model.write().clear_messages();
                let result: Result<TokenCreateResponse> = call_api(
                    Method::POST,
                    &api_base_url,
                    "auth/token/login/",
                    Some(credentials),
                    None,
                )
                .await;

                match result {
                    Ok(TokenCreateResponse { auth_token }) => {
                        LocalStorageService::save_auth_token(&auth_token);
                        get_user(&api_base_url, connected_user, ui_model).await;
                    }
                    Err(err) => {
                        ui_model.write().error_message = Some(err.to_string());
                    }
                };
            }

            Some(UserCommand::Logout) => {
                let result = call_api_without_content(
                    Method::POST,
                    &api_base_url,
                    "auth/token/logout/",
                    None::<i32>,
                    None,
                )
                .await;

                if let Err(err) = result {
                    error!("Failed to close the session on the server: {err}");
                }
                // The local session is dropped even if the server did not answer
                LocalStorageService::remove_auth_token();
                *connected_user.write() = None;
                ui_model.write().authentication_state = AuthenticationState::NotAuthenticated;
            }
            None => {}
        }
    }
}

async fn get_user(
    api_base_url: &Url,
    mut connected_user: Signal<Option<User>>,
    mut ui_model: Signal<FoodgramUIModel>,
) {
    if LocalStorageService::load_auth_token().is_none() {
        ui_model.write().authentication_state = AuthenticationState::NotAuthenticated;
        return;
    }

    let result: Result<User> = call_api(
        Method::GET,
        api_base_url,
        "users/me/",
        None::<i32>,
        Some(ui_model),
    )
    .await;

    match result {
        Ok(user) => {
            *connected_user.write() = Some(user);
        }
        Err(err) => {
            error!("Failed to get current user: {err}");
            // A 401 already marked the session as not authenticated
            if ui_model.read().authentication_state == AuthenticationState::NotAuthenticated {
                LocalStorageService::remove_auth_token();
            }
            ui_model
                .write()
                .fail_session_lookup(format!("Unable to load your account: {err}"));
        }
    }
}
