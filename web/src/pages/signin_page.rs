#![allow(non_snake_case)]

use dioxus::{core::needs_update, prelude::*};
use email_address::EmailAddress;
use log::error;

use foodgram::user::Password;

use crate::{
    components::floating_label_inputs::{validate_value, FloatingLabelInput},
    form::SignInFormValues,
    route::Route,
    services::user_service::{UserCommand, CONNECTED_USER},
};

pub fn SignInPage() -> Element {
    let user_service = use_coroutine_handle::<UserCommand>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut force_validation = use_signal(|| false);
    let nav = use_navigator();

    if CONNECTED_USER.read().is_some() {
        nav.replace(Route::RecipesPage {});
        needs_update();
        return rsx! {};
    };

    let email_error = force_validation()
        .then(|| validate_value::<EmailAddress>(&email()))
        .flatten();
    let password_error = force_validation()
        .then(|| validate_value::<Password>(&password()))
        .flatten();

    rsx! {
        document::Title { "Войти на сайт" }

        div {
            class: "flex flex-col items-center justify-center pb-8",
            h1 { class: "text-lg font-bold", "Sign in" }
        }

        form {
            class: "flex flex-col justify-center gap-4 px-10 pb-8",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let values = SignInFormValues { email: email(), password: password() };
                match values.try_into() {
                    Ok(credentials) => {
                        user_service.send(UserCommand::Login(credentials));
                    }
                    Err(err) => {
                        *force_validation.write() = true;
                        error!("Failed to parse form values as Credentials: {err}");
                    }
                }
            },

            FloatingLabelInput {
                name: "email",
                label: "E-mail",
                input_type: "email",
                required: true,
                value: email(),
                error: email_error,
                autofocus: true,
                oninput: move |value| email.set(value),
            }

            FloatingLabelInput {
                name: "password",
                label: "Password",
                input_type: "password",
                required: true,
                value: password(),
                error: password_error,
                oninput: move |value| password.set(value),
            }

            button {
                class: "btn btn-primary mt-2",
                r#type: "submit",
                "Sign in"
            }

            div {
                class: "label justify-end",
                Link {
                    class: "link-hover link label-text-alt",
                    to: Route::SignupPage {},
                    "Create an account"
                }
            }
        }
    }
}
