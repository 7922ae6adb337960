//! # Topology Module
//!
//! This module holds the geometric knowledge a generation pass starts from:
//! which groups of atoms are treated as rigid.
//!
//! ## Overview
//!
//! Detection of collinear and coplanar atoms happens outside this crate. The
//! candidates it produces are registered here, deduplicated, and later consumed
//! exactly once by [`crate::workflows::generate`].
//!
//! - **Linear groups** - ordered chains `A-B-C` (possibly merged into `A-B-C-D`)
//! - **Planar groups** - a central atom with three substituents, replaced by one improper
//!
//! ## Usage
//!
//! ```ignore
//! use vsitegen::core::topology::registry::GeometryRegistry;
//!
//! let mut registry = GeometryRegistry::new();
//! registry.add_linear(0, 1, 2);
//! registry.add_planar(4, 5, 6, 7, &bond_counts)?;
//! ```

pub mod registry;
