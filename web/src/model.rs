use dioxus::prelude::*;

use foodgram::user::Username;

pub static UI_MODEL: GlobalSignal<FoodgramUIModel> = Signal::global(Default::default);

#[derive(Debug, Default)]
pub struct FoodgramUIModel {
    pub authentication_state: AuthenticationState,
    pub error_message: Option<String>,
    pub confirmation_message: Option<String>,
    // Set once `users/` accepted a registration, until the sign-up page moved on
    pub sign_up_completed: bool,
}

impl FoodgramUIModel {
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.confirmation_message = None;
    }

    pub fn complete_sign_up(&mut self, username: &Username) {
        self.clear_messages();
        self.confirmation_message = Some(format!("Account {username} created, you can now sign in"));
        self.sign_up_completed = true;
    }

    /// The current user could not be fetched for another reason than a
    /// rejected token: pages are rendered anonymously with the error.
    pub fn fail_session_lookup(&mut self, message: String) {
        if self.authentication_state == AuthenticationState::Unknown {
            self.authentication_state = AuthenticationState::NotAuthenticated;
        }
        self.error_message = Some(message);
    }
}

#[derive(Debug, PartialEq, Default, Clone, Copy)]
pub enum AuthenticationState {
    // Until the first `users/me/` call answers, we don't know if the stored
    // token is still accepted
    #[default]
    Unknown,
    NotAuthenticated,
    Authenticated,
}

#[derive(Debug)]
pub enum LoadState<T> {
    None,
    Loading,
    Loaded(T),
    Error(String),
}
