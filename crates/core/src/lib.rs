//! Tangerine Core - Shared types library.
//!
//! This crate provides common types used across Tangerine components:
//! - `storefront` - Public catalog, cart, and checkout service
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Shopper identity, regions, and price types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
