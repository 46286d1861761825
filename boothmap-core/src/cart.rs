//! Shopping cart of selected booths and its persisted snapshot form.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A booth reference in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub price: u32,
}

impl CartLine {
    #[must_use]
    pub fn new(id: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            price,
        }
    }
}

/// Ordered cart lines, in the order booths were added.
///
/// The total is always summed from the lines; there is no cached total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create a new empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn find_line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.find_line(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line prices. Saturates instead of wrapping.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.lines
            .iter()
            .fold(0_u64, |sum, line| sum.saturating_add(u64::from(line.price)))
    }

    pub(crate) fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    /// Remove the line for `id`, returning it if it was present.
    pub(crate) fn take(&mut self, id: &str) -> Option<CartLine> {
        let pos = self.lines.iter().position(|line| line.id == id)?;
        Some(self.lines.remove(pos))
    }

    pub(crate) fn drain(&mut self) -> Vec<CartLine> {
        std::mem::take(&mut self.lines)
    }

    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            lines: self.lines.clone(),
        }
    }
}

/// Persisted cart: a bare JSON array of `{id, price}` records, no version field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot {
    pub lines: Vec<CartLine>,
}

impl CartSnapshot {
    #[must_use]
    pub fn new(lines: Vec<CartLine>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lenient decode of a stored payload.
    ///
    /// Malformed JSON or a non-array payload yields `None`. Array entries
    /// that are not `{id, price}` objects are dropped and the rest kept.
    #[must_use]
    pub fn from_json_lenient(raw: &str) -> Option<Self> {
        let Value::Array(items) = serde_json::from_str::<Value>(raw).ok()? else {
            return None;
        };
        let lines = items
            .into_iter()
            .filter_map(|item| line_from_value(&item))
            .collect();
        Some(Self { lines })
    }

    /// Encode for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Accepts any non-negative numeric price; older payloads may carry `53.0`.
fn line_from_value(item: &Value) -> Option<CartLine> {
    let id = item.get("id")?.as_str()?;
    let price = item.get("price")?;
    let price = match price.as_u64() {
        Some(whole) => u32::try_from(whole).ok()?,
        None => {
            let value = price.as_f64()?;
            if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
                return None;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let rounded = value.round() as u32;
            rounded
        }
    };
    Some(CartLine::new(id, price))
}
