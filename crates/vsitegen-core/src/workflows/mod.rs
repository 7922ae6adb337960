//! # Workflows Module
//!
//! Top-level entry points.
//!
//! - **Generation Workflow** ([`generate`]) - Merge linear groups, strip the terms
//!   they make redundant, reduce them to virtual sites, then prune dihedrals and
//!   emit impropers for planar groups.
//!
//! A workflow works on a clone of the topology and writes it back only when
//! every stage has succeeded.

pub mod generate;
