#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::{
    components::loading::Loading,
    model::{AuthenticationState, UI_MODEL},
    route::Route,
    services::user_service::UserCommand,
};

/// Resolves the session from the stored token before rendering any page.
#[component]
pub fn AuthenticatedLayout() -> Element {
    let user_service = use_coroutine_handle::<UserCommand>();

    use_hook(move || user_service.send(UserCommand::GetUser));

    if UI_MODEL.read().authentication_state == AuthenticationState::Unknown {
        return rsx! { Loading { label: "Loading Foodgram..." } };
    }

    rsx! { Outlet::<Route> {} }
}
