#![allow(non_snake_case)]

#[macro_use]
extern crate lazy_static;

use dioxus::prelude::*;
use log::{debug, error};

use config::get_api_base_url;
use model::UI_MODEL;
use route::Route;
use services::{
    recipe_service::{recipe_service, RECIPES},
    user_service::{user_service, CONNECTED_USER},
};

mod components;
mod config;
mod form;
mod layouts;
mod model;
mod pages;
mod route;
mod services;
mod utils;

pub fn App() -> Element {
    let api_base_url = use_hook(|| match get_api_base_url() {
        Ok(url) => Some(url),
        Err(err) => {
            error!("Unable to determine the Foodgram API base URL: {err}");
            None
        }
    });

    let Some(api_base_url) = api_base_url else {
        return rsx! {
            div { class: "alert alert-error", "Foodgram is misconfigured, please contact the site administrator." }
        };
    };

    let _user_service = use_coroutine({
        to_owned![api_base_url];
        move |rx| user_service(rx, api_base_url.clone(), CONNECTED_USER.signal(), UI_MODEL.signal())
    });
    let _recipe_service = use_coroutine({
        to_owned![api_base_url];
        move |rx| recipe_service(rx, api_base_url.clone(), RECIPES.signal(), UI_MODEL.signal())
    });

    debug!("Rendering app");
    rsx! {
        div {
            class: "h-full flex flex-col text-sm",

            Router::<Route> {}
        }
    }
}
