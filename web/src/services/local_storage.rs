use log::{debug, warn};
use secrecy::{ExposeSecret, Secret};

use foodgram::auth::AuthToken;

use crate::utils::get_local_storage;

pub struct LocalStorageService;

impl LocalStorageService {
    pub const AUTH_TOKEN_STORAGE_KEY: &'static str = "foodgram-auth-token";

    pub fn load_auth_token() -> Option<Secret<AuthToken>> {
        let Ok(storage) = get_local_storage() else {
            warn!("Unable to access localStorage. Not using any authentication token.");
            return None;
        };
        let Ok(Some(value)) = storage.get_item(Self::AUTH_TOKEN_STORAGE_KEY) else {
            debug!("No authentication token found in localStorage");
            return None;
        };

        match value.parse::<AuthToken>() {
            Ok(token) => Some(Secret::new(token)),
            Err(err) => {
                warn!("Ignoring stored authentication token: {err}");
                None
            }
        }
    }

    pub fn save_auth_token(token: &Secret<AuthToken>) {
        let Ok(storage) = get_local_storage() else {
            warn!("Unable to access localStorage. Authentication token not saved.");
            return;
        };

        if storage
            .set_item(Self::AUTH_TOKEN_STORAGE_KEY, &token.expose_secret().0)
            .is_ok()
        {
            debug!("Authentication token saved to localStorage");
        } else {
            warn!("Failed to save authentication token to localStorage");
        }
    }

    pub fn remove_auth_token() {
        let Ok(storage) = get_local_storage() else {
            warn!("Unable to access localStorage. Authentication token not removed.");
            return;
        };

        if storage.remove_item(Self::AUTH_TOKEN_STORAGE_KEY).is_err() {
            warn!("Failed to remove authentication token from localStorage");
        }
    }
}
