//! # vsitegen Core Library
//!
//! Restructures a molecular topology so that rigid atom groups are described by
//! virtual sites and constraints instead of stiff bonded terms.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Plain data models: atoms and atom types, the
//!   per-kind parameter lists, exclusions, and the registry of rigid groups found
//!   by an upstream geometry scan.
//!
//! - **[`engine`]: The Logic Core.** The individual passes: the parameter editor
//!   that removes redundant terms, the linear group merger, and the reducer that
//!   turns a collinear chain into an anchor, a mass particle and virtual sites.
//!   Configuration, errors and progress reporting live here as well.
//!
//! - **[`workflows`]: The Public API.** [`workflows::generate::run`] drives the
//!   passes in order and commits the result to the topology only on success.

pub mod core;
pub mod engine;
pub mod workflows;
