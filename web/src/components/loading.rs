#![allow(non_snake_case)]

use dioxus::prelude::*;

#[component]
pub fn Loading(label: String) -> Element {
    rsx! {
        div {
            class: "min-h-[30vh] flex flex-col gap-2 justify-center items-center",
            role: "status",

            span { class: "loading loading-ring loading-lg text-primary" }
            span { class: "text-sm", "{label}" }
        }
    }
}
