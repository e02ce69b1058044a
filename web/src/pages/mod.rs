pub mod page_not_found;
pub mod recipes_page;
pub mod signin_page;
pub mod signup_page;
