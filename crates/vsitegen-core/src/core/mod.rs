//! # Core Module
//!
//! Data structures shared by every pass of the generator.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, atom types, exclusions,
//!   atom patterns, and the [`models::system::MolecularTopology`] that owns them
//! - **Bonded Parameters** ([`forcefield`]) - Interaction kinds and the ordered
//!   per-kind parameter lists
//! - **Rigid Groups** ([`topology`]) - The registry of linear and planar groups
//! - **Utilities** ([`utils`]) - Geometry helpers for arc lengths and mass centers

pub mod forcefield;
pub mod models;
pub mod topology;
pub mod utils;
