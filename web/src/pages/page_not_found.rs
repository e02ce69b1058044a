#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn PageNotFound(route: Vec<String>) -> Element {
    let path = route.join("/");

    rsx! {
        div {
            class: "flex flex-col items-center justify-center gap-4 pb-8",

            h1 { class: "text-lg font-bold", "Page not found" }
            p { class: "text-sm", "/{path}" }
            Link {
                class: "link-hover link",
                to: Route::RecipesPage {},
                "Back to recipes"
            }
        }
    }
}
