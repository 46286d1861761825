//! Booth catalog: the fixed floor of booths generated from a [`FloorConfig`].
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::config::FloorConfig;

/// A single bookable unit of floor space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booth {
    pub id: String,
    /// 0-based row index.
    pub row: u32,
    /// 1-based column number.
    pub column: u32,
    /// Whole currency units.
    pub price: u32,
    pub booked: bool,
    pub selected: bool,
}

impl Booth {
    /// A booth that can still be put in the cart.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.booked && !self.selected
    }
}

/// All booths of one floor, in row-major order, with an id index.
///
/// Only the `selected` flags change after generation, and only through
/// [`crate::BookingDesk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    booths: Vec<Booth>,
    index: HashMap<String, usize>,
    rows: usize,
    columns: usize,
    currency: String,
}

impl Catalog {
    /// Build the catalog for `config`. Same config, same catalog.
    ///
    /// Ids stay unique even for a config that [`FloorConfig::validate`]
    /// would reject: a booth whose id is already taken is left out.
    #[must_use]
    pub fn generate(config: &FloorConfig) -> Self {
        let booked: HashSet<&str> = config.booked.iter().map(String::as_str).collect();
        let mut booths = Vec::with_capacity(config.booth_count());
        let mut index = HashMap::with_capacity(config.booth_count());
        for (row_idx, label) in config.rows.iter().enumerate() {
            let row = u32::try_from(row_idx).unwrap_or(u32::MAX);
            for column in 1..=config.columns {
                let id = format!("{label}{column}");
                if index.contains_key(&id) {
                    log::warn!("floor config repeats booth id {id}, keeping the first");
                    continue;
                }
                index.insert(id.clone(), booths.len());
                booths.push(Booth {
                    booked: booked.contains(id.as_str()),
                    price: config.pricing.price_for(row, column),
                    id,
                    row,
                    column,
                    selected: false,
                });
            }
        }

        Self {
            booths,
            index,
            rows: config.rows.len(),
            columns: usize::try_from(config.columns).unwrap_or(usize::MAX),
            currency: config.currency.clone(),
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Booth> {
        self.index_of(id).and_then(|idx| self.booths.get(idx))
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut Booth> {
        let idx = self.index_of(id)?;
        self.booths.get_mut(idx)
    }

    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Booth> {
        self.booths.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Booth> {
        self.booths.iter()
    }

    #[must_use]
    pub fn booths(&self) -> &[Booth] {
        &self.booths
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.booths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.booths.is_empty()
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    #[must_use]
    pub fn booked_count(&self) -> usize {
        self.booths.iter().filter(|b| b.booked).count()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.booths.iter().filter(|b| b.selected).count()
    }

    /// Booths neither booked nor in the cart.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.len()
            .saturating_sub(self.booked_count())
            .saturating_sub(self.selected_count())
    }

    pub(crate) fn clear_selection(&mut self) {
        for booth in &mut self.booths {
            booth.selected = false;
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Booth;
    type IntoIter = std::slice::Iter<'a, Booth>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
