//! Floor configuration: row labels, column count, pricing and pre-booked ids.
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

use crate::constants::{
    DEFAULT_BOOKED, DEFAULT_COLUMNS, DEFAULT_CURRENCY, DEFAULT_PRICE_BASE,
    DEFAULT_PRICE_COL_STEP, DEFAULT_PRICE_ROW_STEP, DEFAULT_ROWS,
};

const DEFAULT_FLOOR_DATA: &str = include_str!("../../boothmap-web/static/assets/data/floor.json");

/// Linear pricing coefficients: `base + row * row_step + column * col_step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_price_base")]
    pub base: u32,
    #[serde(default = "default_price_row_step")]
    pub row_step: u32,
    #[serde(default = "default_price_col_step")]
    pub col_step: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_PRICE_BASE,
            row_step: DEFAULT_PRICE_ROW_STEP,
            col_step: DEFAULT_PRICE_COL_STEP,
        }
    }
}

impl PricingConfig {
    /// Price of the booth at 0-based `row` and 1-based `column`.
    #[must_use]
    pub const fn price_for(&self, row: u32, column: u32) -> u32 {
        self.base
            .saturating_add(row.saturating_mul(self.row_step))
            .saturating_add(column.saturating_mul(self.col_step))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorConfig {
    pub rows: Vec<String>,
    pub columns: u32,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub booked: Vec<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("floor has no rows")]
    NoRows,
    #[error("floor has zero columns")]
    NoColumns,
    #[error("row label at position {0} is empty")]
    EmptyRowLabel(usize),
    #[error("row label {0:?} appears more than once")]
    DuplicateRow(String),
    #[error("row label {0:?} ends with a digit, ids would be ambiguous")]
    NumericRowSuffix(String),
    #[error("floor JSON could not be parsed: {0}")]
    Parse(String),
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS.iter().map(ToString::to_string).collect(),
            columns: DEFAULT_COLUMNS,
            pricing: PricingConfig::default(),
            booked: DEFAULT_BOOKED.iter().map(ToString::to_string).collect(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl FloorConfig {
    /// Parse and validate a floor description.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or describes an unusable floor.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Floor bundled with the web assets, or the built-in floor if that asset is unusable.
    #[must_use]
    pub fn load_from_static() -> Self {
        Self::from_json(DEFAULT_FLOOR_DATA).unwrap_or_else(|err| {
            log::error!("static floor config rejected, using defaults: {err}");
            Self::default()
        })
    }

    /// Check that the floor can produce a catalog with unique ids.
    ///
    /// # Errors
    ///
    /// Returns the first problem found with the row labels or column count.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows.is_empty() {
            return Err(ConfigError::NoRows);
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        let mut seen = HashSet::new();
        for (idx, label) in self.rows.iter().enumerate() {
            if label.trim().is_empty() {
                return Err(ConfigError::EmptyRowLabel(idx));
            }
            if !seen.insert(label.as_str()) {
                return Err(ConfigError::DuplicateRow(label.clone()));
            }
            // "A" + "11" and "A1" + "1" would collide.
            if label.chars().last().is_some_and(|c| c.is_ascii_digit()) {
                return Err(ConfigError::NumericRowSuffix(label.clone()));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn with_booked<I, S>(mut self, booked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.booked = booked.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn booth_count(&self) -> usize {
        let columns = usize::try_from(self.columns).unwrap_or(usize::MAX);
        self.rows.len().saturating_mul(columns)
    }
}

const fn default_price_base() -> u32 {
    DEFAULT_PRICE_BASE
}

const fn default_price_row_step() -> u32 {
    DEFAULT_PRICE_ROW_STEP
}

const fn default_price_col_step() -> u32 {
    DEFAULT_PRICE_COL_STEP
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}
