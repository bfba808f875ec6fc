use api::TokenStore;
use secrecy::{ExposeSecret, SecretString};
use web_sys::Storage;

const TOKEN_KEY: &str = "adminToken";

/// Persists the session token in the browser's local storage so a reload
/// keeps the admin signed in.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserTokenStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<SecretString> {
        local_storage()?
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
            .map(SecretString::from)
    }

    fn save(&self, token: &SecretString) {
        let saved = local_storage()
            .map(|storage| storage.set_item(TOKEN_KEY, token.expose_secret()).is_ok())
            .unwrap_or(false);
        if !saved {
            tracing::warn!("session token could not be persisted");
        }
    }

    fn clear(&self) {
        let removed = local_storage()
            .map(|storage| storage.remove_item(TOKEN_KEY).is_ok())
            .unwrap_or(false);
        if !removed {
            tracing::warn!("session token could not be removed");
        }
    }
}
