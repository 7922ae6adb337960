//! # Force Field Module
//!
//! Bonded parameter storage.
//!
//! ## Key Components
//!
//! - [`interaction`] - The closed set of interaction kinds the generator reads or writes
//! - [`params`] - Interactions (atom indices plus coefficients) and the ordered
//!   per-kind lists that hold them
//!
//! Entries are only ever appended or removed. Removal preserves the relative
//! order of survivors, which downstream writers rely on.

pub mod interaction;
pub mod params;
