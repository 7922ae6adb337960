/// Represents an atom in a molecular topology with its mass and type information.
///
/// Masses are stored for both perturbation states: `mass` for state A and
/// `mass_b` for state B, as used by free-energy calculations. Type indices refer
/// to entries of the owning [`AtomTypeRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The name of the atom (e.g., "C1", "O2").
    pub name: String,
    /// The force field atom type name (e.g., "c1", "o").
    pub type_name: String,
    /// The mass in state A, in atomic mass units.
    pub mass: f64,
    /// The mass in state B, in atomic mass units.
    pub mass_b: f64,
    /// The atomic number; zero for particles that are not chemical elements.
    pub atomic_number: u32,
    /// Index of the atom type in state A.
    pub type_index: usize,
    /// Index of the atom type in state B.
    pub type_index_b: usize,
}

impl Atom {
    /// Creates a new `Atom` with the same mass in both perturbation states.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the atom.
    /// * `mass` - The mass used for both state A and state B.
    pub fn new(name: &str, mass: f64) -> Self {
        Self {
            name: name.to_string(),
            type_name: String::new(),
            mass,
            mass_b: mass,
            atomic_number: 0,
            type_index: 0,
            type_index_b: 0,
        }
    }

    /// Assigns the same mass to both perturbation states.
    pub fn set_mass(&mut self, mass: f64) {
        self.mass = mass;
        self.mass_b = mass;
    }

    /// Assigns the same type index to both perturbation states.
    pub fn set_type(&mut self, type_index: usize) {
        self.type_index = type_index;
        self.type_index_b = type_index;
    }
}

/// Nonbonded parameters attached to an atom type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NonbondedParams {
    pub c6: f64,
    pub c12: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtomType {
    pub name: String,
    pub nonbonded: NonbondedParams,
}

/// Ordered collection of atom types; an atom refers to its type by index.
#[derive(Debug, Clone, Default)]
pub struct AtomTypeRegistry {
    types: Vec<AtomType>,
}

impl AtomTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a type and returns its index.
    ///
    /// Registration is idempotent by name: a type that already exists keeps its
    /// original parameters and its index is returned.
    pub fn register(&mut self, name: &str, nonbonded: NonbondedParams) -> usize {
        if let Some(index) = self.find(name) {
            return index;
        }
        self.types.push(AtomType {
            name: name.to_string(),
            nonbonded,
        });
        self.types.len() - 1
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.types.iter().position(|t| t.name == name)
    }

    pub fn get(&self, index: usize) -> Option<&AtomType> {
        self.types.get(index)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let atom = Atom::new("C1", 12.011);

        assert_eq!(atom.name, "C1");
        assert_eq!(atom.type_name, "");
        assert_eq!(atom.mass, 12.011);
        assert_eq!(atom.mass_b, 12.011);
        assert_eq!(atom.atomic_number, 0);
        assert_eq!(atom.type_index, 0);
        assert_eq!(atom.type_index_b, 0);
    }

    #[test]
    fn set_mass_updates_both_states() {
        let mut atom = Atom::new("O", 15.999);
        atom.mass_b = 2.0;
        atom.set_mass(0.0);
        assert_eq!(atom.mass, 0.0);
        assert_eq!(atom.mass_b, 0.0);
    }

    #[test]
    fn set_type_updates_both_states() {
        let mut atom = Atom::new("N", 14.007);
        atom.set_type(7);
        assert_eq!(atom.type_index, 7);
        assert_eq!(atom.type_index_b, 7);
    }

    #[test]
    fn register_returns_sequential_indices() {
        let mut registry = AtomTypeRegistry::new();
        let c = registry.register("c", NonbondedParams { c6: 1.0, c12: 2.0 });
        let o = registry.register("o", NonbondedParams::default());
        assert_eq!(c, 0);
        assert_eq!(o, 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_is_idempotent_by_name() {
        let mut registry = AtomTypeRegistry::new();
        let first = registry.register("ML", NonbondedParams::default());
        let second = registry.register("ML", NonbondedParams { c6: 5.0, c12: 5.0 });
        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(first).unwrap().nonbonded,
            NonbondedParams::default()
        );
    }

    #[test]
    fn find_returns_none_for_unknown_type() {
        let registry = AtomTypeRegistry::new();
        assert!(registry.find("xx").is_none());
        assert!(registry.is_empty());
    }
}
