use std::fmt;

use serde::{Deserialize, Serialize};

use crate::user::User;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub image: Option<String>,
    #[serde(default)]
    pub text: String,
    /// In minutes
    pub cooking_time: u32,
    pub author: User,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub is_in_shopping_cart: bool,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Copy, Clone, Eq, Hash)]
#[serde(transparent)]
pub struct RecipeId(pub u64);

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Page;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_recipes_page_decoding() {
        let page: Page<Recipe> = serde_json::from_str(
            r#"{
                "count": 1,
                "next": null,
                "previous": null,
                "results": [{
                    "id": 3,
                    "tags": [],
                    "author": {
                        "email": "a@b.com",
                        "id": 7,
                        "username": "annlee",
                        "first_name": "Ann",
                        "last_name": "Lee",
                        "is_subscribed": false
                    },
                    "ingredients": [],
                    "is_favorited": true,
                    "is_in_shopping_cart": false,
                    "name": "Borscht",
                    "image": "http://localhost/media/recipes/borscht.png",
                    "text": "Boil beets.",
                    "cooking_time": 90
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(page.results.len(), 1);
        let recipe = &page.results[0];
        assert_eq!(recipe.id, RecipeId(3));
        assert_eq!(recipe.name, "Borscht");
        assert_eq!(recipe.cooking_time, 90);
        assert!(recipe.is_favorited);
        assert_eq!(recipe.author.username.to_string(), "annlee");
    }
}
