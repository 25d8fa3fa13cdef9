//! Core types for Tangerine.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod region;

pub use id::ShopperId;
pub use price::{CurrencyCode, Price};
pub use region::Region;
