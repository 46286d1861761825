//! Booking engine: a desk bound to a storage backend.
use crate::config::FloorConfig;
use crate::desk::{BookingDesk, DeskResult, RestoreReport};
use crate::storage::CartStorage;

/// Desk plus persistence. Every successful mutation is saved; storage
/// failures are logged and never change the in-memory cart.
#[derive(Debug, Clone)]
pub struct BookingEngine<S>
where
    S: CartStorage,
{
    desk: BookingDesk,
    storage: S,
}

impl<S> BookingEngine<S>
where
    S: CartStorage,
{
    /// Generate the floor and restore whatever cart the storage holds.
    pub fn open(config: &FloorConfig, storage: S) -> (Self, RestoreReport) {
        let mut engine = Self {
            desk: BookingDesk::new(config),
            storage,
        };
        let report = engine.restore_saved();
        (engine, report)
    }

    /// Re-read the stored cart. Missing, malformed or unreadable data means an empty cart.
    pub fn restore_saved(&mut self) -> RestoreReport {
        match self.storage.load_cart() {
            Ok(Some(snapshot)) => self.desk.restore(&snapshot),
            Ok(None) => self.desk.restore(&Default::default()),
            Err(err) => {
                log::warn!("cart restore failed, starting empty: {err}");
                self.desk.restore(&Default::default())
            }
        }
    }

    #[must_use]
    pub const fn desk(&self) -> &BookingDesk {
        &self.desk
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.desk.total()
    }

    /// See [`BookingDesk::add`].
    ///
    /// # Errors
    ///
    /// Propagates the desk's rejection; nothing is saved in that case.
    pub fn add(&mut self, id: &str) -> DeskResult {
        let result = self.desk.add(id);
        self.persist_if_changed(&result);
        result
    }

    /// See [`BookingDesk::remove`].
    ///
    /// # Errors
    ///
    /// Propagates the desk's rejection.
    pub fn remove(&mut self, id: &str) -> DeskResult {
        let result = self.desk.remove(id);
        self.persist_if_changed(&result);
        result
    }

    /// See [`BookingDesk::toggle`].
    ///
    /// # Errors
    ///
    /// Propagates the desk's rejection.
    pub fn toggle(&mut self, id: &str) -> DeskResult {
        let result = self.desk.toggle(id);
        self.persist_if_changed(&result);
        result
    }

    /// See [`BookingDesk::clear`].
    ///
    /// # Errors
    ///
    /// Propagates the desk's rejection.
    pub fn clear(&mut self) -> DeskResult {
        let result = self.desk.clear();
        self.persist_if_changed(&result);
        result
    }

    /// See [`BookingDesk::checkout`].
    ///
    /// # Errors
    ///
    /// Propagates the desk's rejection.
    pub fn checkout(&mut self) -> DeskResult {
        let result = self.desk.checkout();
        self.persist_if_changed(&result);
        result
    }

    fn persist_if_changed(&self, result: &DeskResult) {
        if matches!(result, Ok(change) if change.is_mutation()) {
            self.persist();
        }
    }

    /// Save the current cart, returning whether the store accepted it.
    pub fn persist(&self) -> bool {
        match self.storage.save_cart(&self.desk.snapshot()) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("cart save failed, keeping in-memory cart: {err}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CartRejection;
    use crate::storage::MemoryCartStorage;

    fn open(storage: &MemoryCartStorage) -> BookingEngine<MemoryCartStorage> {
        BookingEngine::open(&FloorConfig::default(), storage.clone()).0
    }

    #[test]
    fn mutations_survive_a_reopen() {
        let storage = MemoryCartStorage::new();
        let mut engine = open(&storage);
        engine.add("A1").unwrap();
        engine.add("B1").unwrap();
        engine.remove("A1").unwrap();

        let reopened = open(&storage);
        let ids: Vec<&str> = reopened
            .desk()
            .cart()
            .lines()
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, ["B1"]);
        assert!(reopened.desk().booth("B1").unwrap().selected);
        assert_eq!(reopened.total(), 58);
    }

    #[test]
    fn rejections_and_noops_do_not_save() {
        let storage = MemoryCartStorage::new();
        let mut engine = open(&storage);
        assert!(engine.add("A2").is_err());
        assert!(engine.clear().is_err());
        engine.remove("A1").unwrap();
        assert_eq!(storage.save_count(), 0);
        engine.add("A1").unwrap();
        assert_eq!(storage.save_count(), 1);
    }

    #[test]
    fn checkout_persists_the_empty_cart() {
        let storage = MemoryCartStorage::new();
        let mut engine = open(&storage);
        engine.add("C1").unwrap();
        engine.checkout().unwrap();
        assert_eq!(storage.raw().as_deref(), Some("[]"));
    }

    #[test]
    fn storage_failure_keeps_memory_authoritative() {
        let storage = MemoryCartStorage::new();
        let mut engine = open(&storage);
        storage.set_available(false);
        engine.add("A1").unwrap();
        assert_eq!(engine.total(), 53);
        assert!(!engine.persist());
        assert_eq!(
            engine.add("A1"),
            Err(CartRejection::AlreadyInCart("A1".into()))
        );
    }

    #[test]
    fn unreadable_or_corrupt_storage_opens_empty() {
        let storage = MemoryCartStorage::with_raw(r#"{"cart":"nope"}"#);
        assert!(open(&storage).desk().is_empty());

        let storage = MemoryCartStorage::with_raw(r#"[{"id":"A1","price":53}]"#);
        storage.set_available(false);
        assert!(open(&storage).desk().is_empty());
    }
}
