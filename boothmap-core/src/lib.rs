//! Boothmap Booking Engine
//!
//! Platform-agnostic core logic for the Boothmap exhibition floor picker.
//! This crate provides the booth catalog, the cart state machine and the
//! persistence seam without UI or platform-specific dependencies.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod desk;
pub mod engine;
pub mod error;
pub mod nav;
pub mod storage;
pub mod tween;

// Re-export commonly used types
pub use cart::{Cart, CartLine, CartSnapshot};
pub use catalog::{Booth, Catalog};
pub use config::{ConfigError, FloorConfig, PricingConfig};
pub use desk::{BookingDesk, DeskChange, DeskResult, RestoreReport, RestoreSkip};
pub use engine::BookingEngine;
pub use error::{CartRejection, EmptyCartOp, InvariantViolation};
pub use nav::{GridNav, NavKey, is_activation_key};
pub use storage::{CartStorage, MemoryCartStorage, MemoryStorageError};
pub use tween::interpolate_total;
