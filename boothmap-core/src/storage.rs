//! Cart persistence seam. Platforms provide a [`CartStorage`]; failures are best-effort.
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use crate::cart::CartSnapshot;

/// Trait for abstracting cart save/load operations.
/// Platform-specific implementations should provide this.
pub trait CartStorage {
    type Error: std::error::Error + 'static;

    /// Load the saved cart, `Ok(None)` when nothing usable is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn load_cart(&self) -> Result<Option<CartSnapshot>, Self::Error>;

    /// Save the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn save_cart(&self, snapshot: &CartSnapshot) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoryStorageError {
    #[error("storage unavailable")]
    Unavailable,
}

/// In-memory storage holding the raw JSON payload, shared between clones.
///
/// Holding the encoded form keeps the lenient decode path in play, and
/// [`MemoryCartStorage::set_available`] simulates a full or blocked store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStorage {
    inner: Rc<RefCell<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    raw: Option<String>,
    unavailable: bool,
    saves: usize,
}

impl MemoryCartStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with an arbitrary payload, valid or not.
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.inner.borrow_mut().raw = Some(raw.into());
        storage
    }

    pub fn set_available(&self, available: bool) {
        self.inner.borrow_mut().unavailable = !available;
    }

    #[must_use]
    pub fn raw(&self) -> Option<String> {
        self.inner.borrow().raw.clone()
    }

    /// Successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.inner.borrow().saves
    }
}

impl CartStorage for MemoryCartStorage {
    type Error = MemoryStorageError;

    fn load_cart(&self) -> Result<Option<CartSnapshot>, Self::Error> {
        let inner = self.inner.borrow();
        if inner.unavailable {
            return Err(MemoryStorageError::Unavailable);
        }
        Ok(inner
            .raw
            .as_deref()
            .and_then(CartSnapshot::from_json_lenient))
    }

    fn save_cart(&self, snapshot: &CartSnapshot) -> Result<(), Self::Error> {
        let mut inner = self.inner.borrow_mut();
        if inner.unavailable {
            return Err(MemoryStorageError::Unavailable);
        }
        let raw = snapshot
            .to_json()
            .map_err(|_| MemoryStorageError::Unavailable)?;
        inner.raw = Some(raw);
        inner.saves += 1;
        Ok(())
    }
}
