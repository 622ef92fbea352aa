//! Browser-side persistence and window helpers.

use leadboard_client::store::TokenStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Token store backed by `localStorage`. The bearer token is the only piece
/// of persisted client state.
pub struct BrowserStore {
    key: String,
}

impl BrowserStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStore for BrowserStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(&self.key, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&self.key);
        }
    }
}

/// Hard navigation, used by the 401 hook where no router is in reach.
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(path);
    }
}

/// Blocking confirmation dialog before destructive actions.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking alert shown after a failed mutation.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
