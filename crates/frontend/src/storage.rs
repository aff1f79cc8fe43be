//! localStorage-backed storage capability

use faqdesk_session::{SessionError, SessionResult, StorageBackend};
use wasm_bindgen::JsValue;

/// Persistent storage over `window.localStorage`, scoped per browser
/// profile and origin
pub struct BrowserStorage;

fn local_storage() -> SessionResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| SessionError::storage("localStorage is not available"))
}

fn storage_error(err: JsValue) -> SessionError {
    SessionError::storage(format!("{err:?}"))
}

impl StorageBackend for BrowserStorage {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        local_storage()?.get_item(key).map_err(storage_error)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        local_storage()?.set_item(key, value).map_err(storage_error)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        local_storage()?.remove_item(key).map_err(storage_error)
    }
}
