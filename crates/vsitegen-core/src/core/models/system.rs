use super::atom::{Atom, AtomTypeRegistry};
use super::exclusions::Exclusions;
use crate::core::forcefield::params::ParameterLists;
use crate::engine::error::VsiteError;
use nalgebra::Point3;

/// A static molecular topology: atoms with their coordinates, atom types,
/// bonded parameter lists and nonbonded exclusions.
///
/// The atom table and the coordinate array always have the same length. Atoms
/// are only ever appended, so an index handed out once stays valid.
#[derive(Debug, Clone, Default)]
pub struct MolecularTopology {
    /// Flat atom table, indexed by atom number.
    atoms: Vec<Atom>,
    /// Coordinates parallel to `atoms`, in nanometers.
    coordinates: Vec<Point3<f64>>,
    /// Registered atom types referenced by `Atom::type_index`.
    pub atom_types: AtomTypeRegistry,
    /// Bonded parameter lists, one per interaction kind.
    pub interactions: ParameterLists,
    /// Per-atom nonbonded exclusions.
    pub exclusions: Exclusions,
}

impl MolecularTopology {
    /// Creates a new, empty topology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom together with its position.
    ///
    /// # Return
    ///
    /// The index assigned to the new atom.
    pub fn add_atom(&mut self, atom: Atom, position: Point3<f64>) -> usize {
        self.atoms.push(atom);
        self.coordinates.push(position);
        self.atoms.len() - 1
    }

    pub fn atom(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn atom_mut(&mut self, index: usize) -> Option<&mut Atom> {
        self.atoms.get_mut(index)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn position(&self, index: usize) -> Option<&Point3<f64>> {
        self.coordinates.get(index)
    }

    pub fn coordinates(&self) -> &[Point3<f64>] {
        &self.coordinates
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    /// Looks up an atom, reporting an out-of-range index as an error.
    pub fn checked_atom(&self, index: usize) -> Result<&Atom, VsiteError> {
        self.atoms.get(index).ok_or(VsiteError::AtomOutOfRange {
            index,
            len: self.atoms.len(),
        })
    }

    /// Looks up a position, reporting an out-of-range index as an error.
    pub fn checked_position(&self, index: usize) -> Result<Point3<f64>, VsiteError> {
        self.coordinates
            .get(index)
            .copied()
            .ok_or(VsiteError::AtomOutOfRange {
                index,
                len: self.coordinates.len(),
            })
    }

    pub fn total_mass(&self) -> f64 {
        self.atoms.iter().map(|atom| atom.mass).sum()
    }

    /// Number of bonds each atom takes part in, from the bond parameter list.
    pub fn bond_counts(&self) -> Vec<usize> {
        self.interactions.bond_counts(self.atoms.len())
    }
}
