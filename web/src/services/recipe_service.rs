use anyhow::Result;
use dioxus::prelude::*;
use futures_util::StreamExt;
use log::error;
use reqwest::Method;
use url::Url;

use foodgram::{recipe::Recipe, Page};

use crate::{
    model::{FoodgramUIModel, LoadState},
    services::api::call_api,
};

pub enum RecipeCommand {
    Refresh,
}

pub static RECIPES: GlobalSignal<LoadState<Page<Recipe>>> = Signal::global(|| LoadState::None);

pub async fn recipe_service(
    mut rx: UnboundedReceiver<RecipeCommand>,
    api_base_url: Url,
    mut recipes: Signal<LoadState<Page<Recipe>>>,
    ui_model: Signal<FoodgramUIModel>,
) {
    loop {
        let msg = rx.next().await;
        match msg {
            Some(RecipeCommand::Refresh) => {
                *recipes.write() = LoadState::Loading;
                let result: Result<Page<Recipe>> = call_api(
                    Method::GET,
                    &api_base_url,
                    "recipes/",
                    None::<i32>,
                    Some(ui_model),
                )
                .await;

                *recipes.write() = match result {
                    Ok(page) => LoadState::Loaded(page),
                    Err(err) => {
                        error!("Failed to load recipes: {err}");
                        LoadState::Error(err.to_string())
                    }
                };
            }
            None => {}
        }
    }
}
