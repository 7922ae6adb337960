//! # Core Models Module
//!
//! The molecular topology as the generator sees it.
//!
//! ## Key Components
//!
//! - [`atom`] - Atoms with masses in both perturbation states, and the atom type registry
//! - [`exclusions`] - Per-atom nonbonded exclusion lists
//! - [`pattern`] - Short atom patterns, with an optional wildcard, used to select interactions
//! - [`system`] - The [`system::MolecularTopology`] tying atoms, coordinates, types,
//!   parameter lists and exclusions together
//!
//! ## Usage
//!
//! ```ignore
//! use vsitegen::core::models::{atom::Atom, system::MolecularTopology};
//!
//! let mut topology = MolecularTopology::new();
//! let c = topology.add_atom(Atom::new("C1", 12.011), Point3::new(0.0, 0.0, 0.0));
//! topology.exclusions.grow_to(topology.atom_count());
//! ```

pub mod atom;
pub mod exclusions;
pub mod pattern;
pub mod system;
