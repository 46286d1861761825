//! Booking desk: the cart state machine over a booth catalog.
//!
//! The desk owns both the catalog and the cart, and every mutation goes
//! through [`BookingDesk::add`], [`BookingDesk::remove`],
//! [`BookingDesk::clear`], [`BookingDesk::checkout`] or
//! [`BookingDesk::restore`]. After each of them the following hold:
//!
//! - no booth is both booked and selected;
//! - cart ids are unique and refer to unbooked booths;
//! - a booth is selected exactly when its id is in the cart.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::cart::{Cart, CartLine, CartSnapshot};
use crate::catalog::{Booth, Catalog};
use crate::config::FloorConfig;
use crate::error::{CartRejection, EmptyCartOp, InvariantViolation};

/// What a successful desk operation did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeskChange {
    Added { id: String, price: u32 },
    Removed { id: String, price: u32 },
    Cleared { count: usize },
    CheckedOut { count: usize, total: u64 },
    Unchanged,
}

impl DeskChange {
    #[must_use]
    pub const fn is_mutation(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

pub type DeskResult = Result<DeskChange, CartRejection>;

/// Why a restored line was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreSkip {
    Unknown,
    Booked,
    Duplicate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestoreReport {
    pub applied: Vec<String>,
    pub skipped: Vec<(String, RestoreSkip)>,
    /// Lines whose stored price disagreed with the catalog and was replaced.
    pub repriced: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDesk {
    catalog: Catalog,
    cart: Cart,
}

impl BookingDesk {
    #[must_use]
    pub fn new(config: &FloorConfig) -> Self {
        Self::from_catalog(Catalog::generate(config))
    }

    /// Wrap a catalog, dropping any selection it carries so the cart and flags agree.
    #[must_use]
    pub fn from_catalog(mut catalog: Catalog) -> Self {
        catalog.clear_selection();
        Self {
            catalog,
            cart: Cart::new(),
        }
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn booth(&self, id: &str) -> Option<&Booth> {
        self.catalog.find(id)
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.cart.total()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    #[must_use]
    pub fn available_count(&self) -> usize {
        self.catalog.available_count()
    }

    /// Put a booth in the cart.
    ///
    /// # Errors
    ///
    /// `NotFound` for unknown ids, `AlreadyBooked` for booked booths and
    /// `AlreadyInCart` when the booth is already selected. None of them mutate.
    pub fn add(&mut self, id: &str) -> DeskResult {
        let Some(booth) = self.catalog.find_mut(id) else {
            return Err(CartRejection::NotFound(id.to_string()));
        };
        if booth.booked {
            return Err(CartRejection::AlreadyBooked(booth.id.clone()));
        }
        if booth.selected {
            return Err(CartRejection::AlreadyInCart(booth.id.clone()));
        }
        booth.selected = true;
        let line = CartLine::new(booth.id.clone(), booth.price);
        let change = DeskChange::Added {
            id: line.id.clone(),
            price: line.price,
        };
        self.cart.push(line);
        log::debug!("cart add {id}, total now {}", self.cart.total());
        Ok(change)
    }

    /// Take a booth out of the cart. Ids not in the cart are a no-op.
    ///
    /// # Errors
    ///
    /// `NotFound` when the id names no booth at all.
    pub fn remove(&mut self, id: &str) -> DeskResult {
        let Some(booth) = self.catalog.find_mut(id) else {
            return Err(CartRejection::NotFound(id.to_string()));
        };
        let Some(line) = self.cart.take(id) else {
            return Ok(DeskChange::Unchanged);
        };
        booth.selected = false;
        log::debug!("cart remove {id}, total now {}", self.cart.total());
        Ok(DeskChange::Removed {
            id: line.id,
            price: line.price,
        })
    }

    /// Add the booth if it is open, remove it if it is in the cart.
    ///
    /// # Errors
    ///
    /// Same as [`Self::add`] when the booth is not in the cart.
    pub fn toggle(&mut self, id: &str) -> DeskResult {
        if self.cart.contains(id) {
            self.remove(id)
        } else {
            self.add(id)
        }
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// `EmptyCart(Clear)` when there is nothing to clear.
    pub fn clear(&mut self) -> DeskResult {
        if self.cart.is_empty() {
            return Err(CartRejection::EmptyCart(EmptyCartOp::Clear));
        }
        let count = self.drain_cart();
        log::debug!("cart cleared ({count} lines)");
        Ok(DeskChange::Cleared { count })
    }

    /// Simulated checkout: no payment, no record, then the same as [`Self::clear`].
    ///
    /// # Errors
    ///
    /// `EmptyCart(Checkout)` when there is nothing to check out.
    pub fn checkout(&mut self) -> DeskResult {
        if self.cart.is_empty() {
            return Err(CartRejection::EmptyCart(EmptyCartOp::Checkout));
        }
        let total = self.cart.total();
        let count = self.drain_cart();
        log::debug!("checkout of {count} booths for {total}");
        Ok(DeskChange::CheckedOut { count, total })
    }

    fn drain_cart(&mut self) -> usize {
        let lines = self.cart.drain();
        for line in &lines {
            if let Some(booth) = self.catalog.find_mut(&line.id) {
                booth.selected = false;
            }
        }
        lines.len()
    }

    /// Replace the cart with a previously saved snapshot.
    ///
    /// Lines for unknown, booked or repeated ids are skipped. Prices come
    /// from the catalog, so a stale stored price cannot skew the total.
    pub fn restore(&mut self, snapshot: &CartSnapshot) -> RestoreReport {
        self.drain_cart();
        let mut report = RestoreReport::default();
        for line in &snapshot.lines {
            let Some(booth) = self.catalog.find_mut(&line.id) else {
                report.skipped.push((line.id.clone(), RestoreSkip::Unknown));
                continue;
            };
            if booth.booked {
                report.skipped.push((line.id.clone(), RestoreSkip::Booked));
                continue;
            }
            if booth.selected {
                report.skipped.push((line.id.clone(), RestoreSkip::Duplicate));
                continue;
            }
            booth.selected = true;
            if booth.price != line.price {
                report.repriced.push(line.id.clone());
            }
            self.cart.push(CartLine::new(booth.id.clone(), booth.price));
            report.applied.push(line.id.clone());
        }
        if !report.skipped.is_empty() {
            log::debug!("restore skipped {} lines", report.skipped.len());
        }
        report
    }

    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        self.cart.snapshot()
    }

    /// Check every cart/catalog invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violation found.
    pub fn verify(&self) -> Result<(), InvariantViolation> {
        let mut seen = HashSet::with_capacity(self.cart.len());
        for line in self.cart.lines() {
            if !seen.insert(line.id.as_str()) {
                return Err(InvariantViolation::DuplicateLine(line.id.clone()));
            }
            let Some(booth) = self.catalog.find(&line.id) else {
                return Err(InvariantViolation::UnknownLine(line.id.clone()));
            };
            if booth.booked {
                return Err(InvariantViolation::LineForBookedBooth(line.id.clone()));
            }
            if !booth.selected {
                return Err(InvariantViolation::LineNotSelected(line.id.clone()));
            }
            if booth.price != line.price {
                return Err(InvariantViolation::PriceMismatch {
                    id: line.id.clone(),
                    line: line.price,
                    booth: booth.price,
                });
            }
        }
        for booth in &self.catalog {
            if booth.booked && booth.selected {
                return Err(InvariantViolation::BookedAndSelected(booth.id.clone()));
            }
            if booth.selected && !seen.contains(booth.id.as_str()) {
                return Err(InvariantViolation::SelectedNotInCart(booth.id.clone()));
            }
        }
        Ok(())
    }
}

impl Default for BookingDesk {
    fn default() -> Self {
        Self::new(&FloorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(desk: &BookingDesk) -> Vec<&str> {
        desk.cart().lines().iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn add_appends_and_marks_selected() {
        let mut desk = BookingDesk::default();
        let change = desk.add("A1").unwrap();
        assert_eq!(
            change,
            DeskChange::Added {
                id: "A1".into(),
                price: 53
            }
        );
        assert!(desk.booth("A1").unwrap().selected);
        assert_eq!(desk.total(), 53);
        desk.verify().unwrap();
    }

    #[test]
    fn add_refuses_booked_duplicate_and_unknown() {
        let mut desk = BookingDesk::default();
        assert_eq!(
            desk.add("A2"),
            Err(CartRejection::AlreadyBooked("A2".into()))
        );
        desk.add("A1").unwrap();
        assert_eq!(
            desk.add("A1"),
            Err(CartRejection::AlreadyInCart("A1".into()))
        );
        assert_eq!(desk.add("Z9"), Err(CartRejection::NotFound("Z9".into())));
        assert_eq!(ids(&desk), ["A1"]);
        assert_eq!(desk.total(), 53);
        desk.verify().unwrap();
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let mut desk = BookingDesk::default();
        desk.add("B1").unwrap();
        assert_eq!(desk.remove("A1"), Ok(DeskChange::Unchanged));
        assert_eq!(desk.remove("A2"), Ok(DeskChange::Unchanged));
        assert_eq!(ids(&desk), ["B1"]);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut desk = BookingDesk::default();
        assert!(matches!(desk.toggle("C1"), Ok(DeskChange::Added { .. })));
        assert!(matches!(desk.toggle("C1"), Ok(DeskChange::Removed { .. })));
        assert!(desk.is_empty());
        assert_eq!(
            desk.toggle("C3"),
            Err(CartRejection::AlreadyBooked("C3".into()))
        );
    }

    #[test]
    fn clear_and_checkout_refuse_empty_cart() {
        let mut desk = BookingDesk::default();
        assert_eq!(
            desk.clear(),
            Err(CartRejection::EmptyCart(EmptyCartOp::Clear))
        );
        assert_eq!(
            desk.checkout(),
            Err(CartRejection::EmptyCart(EmptyCartOp::Checkout))
        );
    }

    #[test]
    fn checkout_reports_and_resets() {
        let mut desk = BookingDesk::default();
        desk.add("A1").unwrap();
        desk.add("B1").unwrap();
        assert_eq!(
            desk.checkout(),
            Ok(DeskChange::CheckedOut {
                count: 2,
                total: 111
            })
        );
        assert!(desk.is_empty());
        assert_eq!(desk.total(), 0);
        assert_eq!(desk.catalog().selected_count(), 0);
        desk.verify().unwrap();
    }

    #[test]
    fn clear_resets_every_flag() {
        let mut desk = BookingDesk::default();
        for id in ["A1", "B2", "D6"] {
            desk.add(id).unwrap();
        }
        assert_eq!(desk.clear(), Ok(DeskChange::Cleared { count: 3 }));
        assert_eq!(desk.available_count(), 20);
    }

    #[test]
    fn restore_skips_unknown_booked_and_repeated_ids() {
        let mut desk = BookingDesk::default();
        let snapshot = CartSnapshot::new(vec![
            CartLine::new("A1", 53),
            CartLine::new("A2", 56),
            CartLine::new("Q1", 10),
            CartLine::new("A1", 53),
            CartLine::new("B1", 1),
        ]);
        let report = desk.restore(&snapshot);
        assert_eq!(report.applied, ["A1", "B1"]);
        assert_eq!(
            report.skipped,
            vec![
                ("A2".to_string(), RestoreSkip::Booked),
                ("Q1".to_string(), RestoreSkip::Unknown),
                ("A1".to_string(), RestoreSkip::Duplicate),
            ]
        );
        assert_eq!(report.repriced, ["B1"]);
        assert_eq!(desk.total(), 111);
        assert!(desk.booth("Q1").is_none());
        desk.verify().unwrap();
    }

    #[test]
    fn restore_replaces_existing_cart() {
        let mut desk = BookingDesk::default();
        desk.add("D6").unwrap();
        desk.restore(&CartSnapshot::new(vec![CartLine::new("A1", 53)]));
        assert_eq!(ids(&desk), ["A1"]);
        assert!(!desk.booth("D6").unwrap().selected);
        desk.verify().unwrap();
    }

    #[test]
    fn verify_catches_hand_broken_state() {
        let mut desk = BookingDesk::default();
        desk.catalog.find_mut("B2").unwrap().selected = true;
        assert_eq!(
            desk.verify(),
            Err(InvariantViolation::SelectedNotInCart("B2".into()))
        );

        let mut desk = BookingDesk::default();
        desk.cart.push(CartLine::new("B2", 64));
        assert_eq!(
            desk.verify(),
            Err(InvariantViolation::LineNotSelected("B2".into()))
        );
    }
}
