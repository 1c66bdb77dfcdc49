//! Shared types for the BitoPro REST API
//!
//! This crate provides the value types used across the BitoPro client crates.
//! It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`Pair`] - Trading pair identifiers (e.g., "bito_twd"), always lower-case
//! - [`RequestScope`], [`HttpMethod`] - Request classification
//! - [`OrderAction`], [`OrderType`] - Order enums, rendered upper-case on the wire
//! - [`ParamValue`], [`ParameterSet`] - Ordered request parameters

pub mod enums;
pub mod pair;
pub mod params;

// Re-export commonly used types
pub use enums::*;
pub use pair::*;
pub use params::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
