#![allow(non_snake_case)]

use dioxus::prelude::*;

pub fn FoodgramTitle() -> Element {
    rsx! {
        span {
            class: "font-extrabold text-transparent bg-clip-text bg-linear-to-b from-[#4A61DD] to-primary",
            "Foodgram"
        }
    }
}
