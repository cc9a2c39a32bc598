use gloo::storage::{LocalStorage, Storage};
use shared::TokenStore;

use super::logging::Logger;

/// Access token kept in `window.localStorage`, stored as the raw string.
/// An explicit logout leaves a marker under a second key.
#[derive(Clone, PartialEq)]
pub struct LocalTokenStore {
    key: String,
    signed_out_key: String,
}

impl LocalTokenStore {
    pub fn new(key: &str, signed_out_key: &str) -> Self {
        Self {
            key: key.to_string(),
            signed_out_key: signed_out_key.to_string(),
        }
    }

    fn remove(&self, key: &str, what: &str) {
        if let Err(e) = LocalStorage::raw().remove_item(key) {
            Logger::warn_with_component("session", &format!("Could not remove {}: {:?}", what, e));
        }
    }
}

impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw().get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        if LocalStorage::raw().set_item(&self.key, token).is_err() {
            Logger::warn_with_component("session", "Could not persist access token");
        }
    }

    fn clear(&self) {
        self.remove(&self.key, "access token");
    }

    fn is_signed_out(&self) -> bool {
        matches!(LocalStorage::raw().get_item(&self.signed_out_key), Ok(Some(_)))
    }

    fn set_signed_out(&self, signed_out: bool) {
        if !signed_out {
            self.remove(&self.signed_out_key, "logout marker");
        } else if LocalStorage::raw().set_item(&self.signed_out_key, "1").is_err() {
            Logger::warn_with_component("session", "Could not persist logout marker");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_token_round_trip_and_clear() {
        let store = LocalTokenStore::new("test_access_token", "test_signed_out");
        store.save("abc");
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.clear();
        assert_eq!(store.load(), None);
        // clearing twice is harmless
        store.clear();
    }

    #[wasm_bindgen_test]
    fn test_logout_marker_persists_until_lifted() {
        let store = LocalTokenStore::new("test_access_token_2", "test_signed_out_2");
        store.set_signed_out(true);
        assert!(store.is_signed_out());
        assert!(LocalTokenStore::new("test_access_token_2", "test_signed_out_2").is_signed_out());

        store.set_signed_out(false);
        assert!(!store.is_signed_out());
    }
}
