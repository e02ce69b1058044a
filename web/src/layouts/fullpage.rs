#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::bs_icons::{BsBoxArrowInLeft, BsCheckCircle},
    Icon,
};

use crate::{
    components::foodgram_title::FoodgramTitle,
    model::UI_MODEL,
    route::Route,
    services::user_service::{UserCommand, CONNECTED_USER},
};

#[component]
pub fn FullpageLayout() -> Element {
    let user_service = use_coroutine_handle::<UserCommand>();

    rsx! {
        div {
            class: "flex min-h-screen items-center justify-center bg-base-100 relative",

            if CONNECTED_USER.read().is_some() {
                button {
                    class: "btn btn-ghost absolute top-4 right-4",
                    "data-tip": "Logout",
                    onclick: move |_| user_service.send(UserCommand::Logout),
                    Icon { class: "w-5 h-5", icon: BsBoxArrowInLeft }
                }
            }

            div {
                class: "m-4 min-h-[50vh] w-full max-w-md",

                main {
                    div {
                        class: "flex flex-col items-center justify-center pb-4 text-3xl",
                        FoodgramTitle {}
                    }

                    if let Some(error_message) = &UI_MODEL.read().error_message {
                        div { class: "alert alert-error text-sm whitespace-pre-line", "{error_message}" }
                    }

                    if let Some(confirmation_message) = &UI_MODEL.read().confirmation_message {
                        div {
                            class: "alert alert-success text-sm",
                            Icon { class: "w-5 h-5", icon: BsCheckCircle }
                            "{confirmation_message}"
                        }
                    }

                    Outlet::<Route> {}
                }
            }
        }
    }
}
