//! Full Stock Core - Shared catalog types and filter logic.
//!
//! This crate provides the domain model used by the storefront:
//!
//! - [`id`] - Newtype wrappers for type-safe category and product IDs
//! - [`catalog`] - The catalog document (categories + products) and lookups
//! - [`pricing`] - Price-query parsing, validation, and range filtering
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP,
//! no template rendering. Everything here can be unit tested without touching
//! the filesystem.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod id;
pub mod pricing;

pub use catalog::{Catalog, Category, Product};
pub use id::{CategoryId, ProductId};
pub use pricing::{
    PriceBounds, PriceValidation, parse_price_to_cents, price_bounds, validate_price_range,
};
