#![allow(non_snake_case)]

use dioxus::prelude::*;
use log::error;

use foodgram::{form::SignUpFormValues, user::SignUpParameters};

use crate::{
    components::sign_up_form::SignUpForm,
    model::UI_MODEL,
    route::Route,
    services::user_service::{UserCommand, CONNECTED_USER},
};

pub const PAGE_TITLE: &str = "Регистрация";
pub const PAGE_DESCRIPTION: &str = "Grocery Assistant - Sign Up";

/// What the sign-up page shows, decided on every render.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpView {
    Redirect(Route),
    Form,
}

impl SignUpView {
    pub fn decide(is_authenticated: bool) -> Self {
        if is_authenticated {
            SignUpView::Redirect(Route::RecipesPage {})
        } else {
            SignUpView::Form
        }
    }
}

pub fn SignupPage() -> Element {
    let user_service = use_coroutine_handle::<UserCommand>();
    let nav = use_navigator();
    let is_authenticated = CONNECTED_USER.read().is_some();

    use_effect(move || {
        let sign_up_completed = UI_MODEL.read().sign_up_completed;
        if sign_up_completed {
            UI_MODEL.write().sign_up_completed = false;
            nav.push(Route::SignInPage {});
        }
    });

    rsx! {
        SignUp {
            is_authenticated,
            on_sign_up: move |values: SignUpFormValues| {
                match SignUpParameters::try_from(values) {
                    Ok(parameters) => {
                        user_service.send(UserCommand::RegisterUser(parameters));
                    }
                    Err(err) => {
                        error!("Failed to parse form values as SignUpParameters: {err}");
                        UI_MODEL.write().error_message = Some(err.to_string());
                    }
                }
            },
        }

        if !is_authenticated {
            div {
                class: "label justify-end px-10",
                Link {
                    class: "link-hover link label-text-alt",
                    to: Route::SignInPage {},
                    "Sign in to an existing account"
                }
            }
        }
    }
}

#[component]
pub fn SignUp(is_authenticated: bool, on_sign_up: EventHandler<SignUpFormValues>) -> Element {
    let content = match SignUpView::decide(is_authenticated) {
        SignUpView::Redirect(route) => rsx! { RedirectTo { route } },
        SignUpView::Form => rsx! {
            div {
                class: "flex flex-col items-center justify-center pb-8",
                h1 { class: "text-lg font-bold", "Sign up" }
            }

            SignUpForm { on_sign_up }
        },
    };

    rsx! {
        document::Title { "{PAGE_TITLE}" }
        document::Meta { name: "description", content: "{PAGE_DESCRIPTION}" }
        document::Meta { property: "og:title", content: "{PAGE_TITLE}" }

        {content}
    }
}

#[component]
fn RedirectTo(route: Route) -> Element {
    let nav = use_navigator();

    use_effect(move || {
        nav.replace(route.clone());
    });

    rsx! {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_authenticated_user_is_redirected_to_recipes() {
        assert_eq!(
            SignUpView::decide(true),
            SignUpView::Redirect(Route::RecipesPage {})
        );
    }

    #[wasm_bindgen_test]
    fn test_anonymous_user_gets_the_form() {
        assert_eq!(SignUpView::decide(false), SignUpView::Form);
    }

    #[wasm_bindgen_test]
    fn test_redirect_target_is_the_recipes_route() {
        let SignUpView::Redirect(route) = SignUpView::decide(true) else {
            panic!("expected a redirection");
        };

        assert_eq!(route.to_string(), "/recipes");
    }

    #[wasm_bindgen_test]
    fn test_render_form_for_anonymous_user() {
        let mut dom = VirtualDom::new(|| {
            rsx! {
                SignUp { is_authenticated: false, on_sign_up: move |_| {} }
            }
        });
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains("Sign up"));
        for name in ["first_name", "last_name", "username", "email", "password"] {
            assert!(html.contains(&format!(r#"name="{name}""#)));
        }
    }
}
