use dioxus::prelude::*;

use crate::{
    layouts::{authenticated::AuthenticatedLayout, fullpage::FullpageLayout},
    pages::{
        page_not_found::PageNotFound, recipes_page::RecipesPage, signin_page::SignInPage,
        signup_page::SignupPage,
    },
};

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AuthenticatedLayout)]
      #[layout(FullpageLayout)]
        #[route("/signup")]
        SignupPage {},
        #[route("/signin")]
        SignInPage {},
        #[route("/recipes")]
        RecipesPage {},
      #[end_layout]
    #[end_layout]
    #[redirect("/", || Route::RecipesPage {})]
    #[route("/:..route")]
    PageNotFound {
        route: Vec<String>
    },
}
