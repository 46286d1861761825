//! Centralized floor defaults and presentation timings for Boothmap.
//!
//! The static floor asset may override the floor layout; the timings are
//! fixed here so the UI and the tester agree on them.

// Floor layout ---------------------------------------------------------------
pub const DEFAULT_ROWS: [&str; 4] = ["A", "B", "C", "D"];
pub const DEFAULT_COLUMNS: u32 = 6;
pub const DEFAULT_BOOKED: [&str; 4] = ["A2", "B5", "C3", "D1"];
pub const DEFAULT_CURRENCY: &str = "KWD";

// Pricing --------------------------------------------------------------------
pub const DEFAULT_PRICE_BASE: u32 = 50;
pub const DEFAULT_PRICE_ROW_STEP: u32 = 5;
pub const DEFAULT_PRICE_COL_STEP: u32 = 3;

// Presentation timings (milliseconds) ----------------------------------------
pub const TOTAL_TWEEN_MS: u32 = 350;
pub const TOTAL_PULSE_MS: u32 = 300;
pub const NOTICE_DISMISS_MS: u32 = 1_800;

// Persistence ----------------------------------------------------------------
pub const CART_STORAGE_KEY: &str = "boothmap.cart";
