//! Storage Layer
//!
//! Key-value persistence behind a trait so the checklist logic can run
//! against window.localStorage in the browser and an in-memory map in tests.

use wasm_bindgen::{JsCast, JsValue};

use crate::error::{StorageError, StorageResult};

/// String-keyed blob storage
pub trait KeyValueStorage {
    /// Read the value stored under `key`, if any
    fn load(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value stored under `key`
    fn save(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// window.localStorage
///
/// Looks the storage object up on every call so the handle stays
/// `Send + Sync` and can live inside a signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(js_error)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn load(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(js_error)
    }

    fn save(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> StorageError {
    let message = match err.dyn_ref::<js_sys::Error>() {
        Some(e) => String::from(e.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
    };
    StorageError::Backend(message)
}

#[cfg(test)]
pub use memory::MemoryStorage;
