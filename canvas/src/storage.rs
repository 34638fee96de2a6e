//! `localStorage` backend for the project store.
//!
//! The handle is looked up on every call rather than held, so the backend
//! stays `Send` as [`KeyValueStore`] requires. Outside a browser every call
//! fails with [`StorageError::Unavailable`].

use roomplanner::persist::{KeyValueStore, StorageError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no browser window".into()))?;
    window
        .local_storage()
        .map_err(js_error)?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Unavailable(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?.get_item(key).map_err(js_error)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?.set_item(key, value).map_err(js_error)
    }
}
