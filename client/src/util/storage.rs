//! `localStorage`-backed session storage.
//!
//! TRADE-OFFS
//! ==========
//! Outside the browser there is no backing store: reads report every key as
//! absent and writes fail with `StorageError::Unavailable`, which the session
//! store logs and tolerates.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use inventory_session::{Storage, StorageError};

/// Zero-sized handle to `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "csr")]
fn write_error(key: &str, err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Write {
        key: key.to_owned(),
        reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.set_item(key, value).map_err(|e| write_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn clear(&mut self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StorageError::Unavailable)?;
            storage.remove_item(key).map_err(|e| write_error(key, &e))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}
