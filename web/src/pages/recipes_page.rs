#![allow(non_snake_case)]

use dioxus::prelude::*;

use foodgram::recipe::Recipe;

use crate::{
    components::loading::Loading,
    model::LoadState,
    route::Route,
    services::{
        recipe_service::{RecipeCommand, RECIPES},
        user_service::CONNECTED_USER,
    },
};

pub fn RecipesPage() -> Element {
    let recipe_service = use_coroutine_handle::<RecipeCommand>();

    use_hook(move || recipe_service.send(RecipeCommand::Refresh));

    rsx! {
        document::Title { "Рецепты" }

        div {
            class: "flex flex-col items-center justify-center gap-2 pb-8",
            h1 { class: "text-lg font-bold", "Recipes" }
            if let Some(user) = CONNECTED_USER.read().as_ref() {
                p { class: "text-sm", "Welcome {user.full_name()}" }
            } else {
                Link {
                    class: "link-hover link text-sm",
                    to: Route::SignupPage {},
                    "Create an account"
                }
            }
        }

        match &*RECIPES.read() {
            LoadState::None | LoadState::Loading => rsx! {
                Loading { label: "Loading recipes..." }
            },
            LoadState::Error(error) => rsx! {
                div { class: "alert alert-error text-sm", "{error}" }
            },
            LoadState::Loaded(page) if page.results.is_empty() => rsx! {
                p { class: "text-center text-sm", "No recipes yet" }
            },
            LoadState::Loaded(page) => rsx! {
                ul {
                    class: "flex flex-col gap-2 px-4",
                    for recipe in page.results.iter() {
                        RecipeCard { key: "{recipe.id}", recipe: recipe.clone() }
                    }
                }
            },
        }
    }
}

#[component]
fn RecipeCard(recipe: Recipe) -> Element {
    rsx! {
        li {
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-row items-center gap-4 p-3",

                if let Some(image) = &recipe.image {
                    img { class: "w-16 h-16 rounded-box object-cover", src: "{image}", alt: "{recipe.name}" }
                }
                div {
                    class: "flex flex-col",
                    span { class: "font-bold", "{recipe.name}" }
                    span { class: "text-xs", "{recipe.cooking_time} min." }
                    span { class: "text-xs text-base-content/60", "{recipe.author.full_name()}" }
                }
            }
        }
    }
}
