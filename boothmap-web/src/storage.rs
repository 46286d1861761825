//! `localStorage` adapter for the cart.
use boothmap_core::constants::CART_STORAGE_KEY;
use boothmap_core::{CartSnapshot, CartStorage};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WebStorageError {
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    #[error("localStorage read failed: {0}")]
    Read(String),
    #[error("localStorage write failed: {0}")]
    Write(String),
    #[error("cart could not be encoded: {0}")]
    Encode(String),
}

/// Cart storage backed by `window.localStorage` under a single key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebCartStorage {
    key: String,
}

impl Default for WebCartStorage {
    fn default() -> Self {
        Self::new(CART_STORAGE_KEY)
    }
}

impl WebCartStorage {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    fn storage() -> Result<web_sys::Storage, WebStorageError> {
        if cfg!(target_arch = "wasm32") {
            crate::dom::local_storage()
                .map_err(|err| WebStorageError::Unavailable(crate::dom::js_error_message(&err)))
        } else {
            Err(WebStorageError::Unavailable("not running in a browser".into()))
        }
    }
}

impl CartStorage for WebCartStorage {
    type Error = WebStorageError;

    fn load_cart(&self) -> Result<Option<CartSnapshot>, Self::Error> {
        let raw = Self::storage()?
            .get_item(&self.key)
            .map_err(|err| WebStorageError::Read(crate::dom::js_error_message(&err)))?;
        let snapshot = raw.as_deref().and_then(CartSnapshot::from_json_lenient);
        if raw.is_some() && snapshot.is_none() {
            log::warn!("ignoring malformed cart under {}", self.key);
        }
        Ok(snapshot)
    }

    fn save_cart(&self, snapshot: &CartSnapshot) -> Result<(), Self::Error> {
        let raw = snapshot
            .to_json()
            .map_err(|err| WebStorageError::Encode(err.to_string()))?;
        Self::storage()?
            .set_item(&self.key, &raw)
            .map_err(|err| WebStorageError::Write(crate::dom::js_error_message(&err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_shared_with_core() {
        assert_eq!(WebCartStorage::default().key(), CART_STORAGE_KEY);
    }

    #[test]
    fn host_builds_report_unavailable_storage() {
        let storage = WebCartStorage::default();
        assert!(matches!(
            storage.load_cart(),
            Err(WebStorageError::Unavailable(_))
        ));
        assert!(matches!(
            storage.save_cart(&CartSnapshot::default()),
            Err(WebStorageError::Unavailable(_))
        ));
    }
}
