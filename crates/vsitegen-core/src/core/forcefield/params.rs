use super::interaction::InteractionKind;
use crate::core::models::pattern::MAX_PATTERN_ATOMS;

/// Number of numeric coefficients stored with every interaction entry.
pub const MAX_COEFFICIENTS: usize = 12;

/// One entry of a bonded parameter list: up to four atoms and their coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    atoms: [usize; MAX_PATTERN_ATOMS],
    n_atoms: usize,
    pub coefficients: [f64; MAX_COEFFICIENTS],
}

impl Interaction {
    /// Creates an entry over the given atoms with all coefficients zeroed.
    ///
    /// Atoms beyond the fourth are ignored.
    pub fn new(atoms: &[usize]) -> Self {
        let n_atoms = atoms.len().min(MAX_PATTERN_ATOMS);
        let mut slots = [0; MAX_PATTERN_ATOMS];
        slots[..n_atoms].copy_from_slice(&atoms[..n_atoms]);
        Self {
            atoms: slots,
            n_atoms,
            coefficients: [0.0; MAX_COEFFICIENTS],
        }
    }

    /// Sets the leading coefficients, leaving the remainder at zero.
    pub fn with_coefficients(mut self, coefficients: &[f64]) -> Self {
        let n = coefficients.len().min(MAX_COEFFICIENTS);
        self.coefficients[..n].copy_from_slice(&coefficients[..n]);
        self
    }

    pub fn atoms(&self) -> &[usize] {
        &self.atoms[..self.n_atoms]
    }

    #[inline]
    pub fn atom(&self, position: usize) -> Option<usize> {
        self.atoms().get(position).copied()
    }

    #[inline]
    pub fn c0(&self) -> f64 {
        self.coefficients[0]
    }
}

/// An ordered parameter list for a single interaction kind.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionList {
    kind: InteractionKind,
    entries: Vec<Interaction>,
}

impl InteractionList {
    pub fn new(kind: InteractionKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub fn push(&mut self, interaction: Interaction) {
        self.entries.push(interaction);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Interaction> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Interaction> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Interaction] {
        &self.entries
    }

    /// Removes every entry matching `predicate`, shifting survivors down so
    /// their relative order is preserved. Returns the number removed.
    pub(crate) fn remove_all_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Interaction) -> bool,
    {
        let before = self.entries.len();
        self.entries.retain(|entry| !predicate(entry));
        before - self.entries.len()
    }

    /// Removes only the first entry matching `predicate`, preserving order.
    pub(crate) fn remove_first_where<F>(&mut self, predicate: F) -> Option<Interaction>
    where
        F: FnMut(&Interaction) -> bool,
    {
        let position = self.entries.iter().position(predicate)?;
        Some(self.entries.remove(position))
    }
}

/// The full set of bonded parameter lists of a topology, one per [`InteractionKind`].
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterLists {
    lists: [InteractionList; InteractionKind::COUNT],
}

impl Default for ParameterLists {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterLists {
    pub fn new() -> Self {
        Self {
            lists: InteractionKind::ALL.map(InteractionList::new),
        }
    }

    pub fn get(&self, kind: InteractionKind) -> &InteractionList {
        &self.lists[kind.index()]
    }

    pub fn get_mut(&mut self, kind: InteractionKind) -> &mut InteractionList {
        &mut self.lists[kind.index()]
    }

    pub fn add(&mut self, kind: InteractionKind, interaction: Interaction) {
        self.get_mut(kind).push(interaction);
    }

    pub fn iter(&self) -> impl Iterator<Item = &InteractionList> {
        self.lists.iter()
    }

    /// Counts the bonds each atom takes part in, for a table of `n_atoms` atoms.
    ///
    /// Bonds referencing atoms outside the table are ignored.
    pub fn bond_counts(&self, n_atoms: usize) -> Vec<usize> {
        let mut counts = vec![0; n_atoms];
        for bond in self.get(InteractionKind::Bonds).iter() {
            for &atom in bond.atoms() {
                if let Some(count) = counts.get_mut(atom) {
                    *count += 1;
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_interaction_stores_atoms_and_zeroed_coefficients() {
        let interaction = Interaction::new(&[3, 1, 4]);
        assert_eq!(interaction.atoms(), &[3, 1, 4]);
        assert_eq!(interaction.atom(2), Some(4));
        assert_eq!(interaction.atom(3), None);
        assert!(interaction.coefficients.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn new_interaction_truncates_to_four_atoms() {
        let interaction = Interaction::new(&[0, 1, 2, 3, 4]);
        assert_eq!(interaction.atoms(), &[0, 1, 2, 3]);
    }

    #[test]
    fn with_coefficients_sets_leading_values() {
        let interaction = Interaction::new(&[0, 1]).with_coefficients(&[0.15, 2000.0]);
        assert_eq!(interaction.c0(), 0.15);
        assert_eq!(interaction.coefficients[1], 2000.0);
        assert_eq!(interaction.coefficients[2], 0.0);
    }

    #[test]
    fn remove_all_where_preserves_survivor_order() {
        let mut list = InteractionList::new(InteractionKind::Bonds);
        for pair in [[0, 1], [1, 2], [0, 1], [2, 3], [3, 4]] {
            list.push(Interaction::new(&pair));
        }
        let removed = list.remove_all_where(|entry| entry.atoms() == [0, 1]);
        assert_eq!(removed, 2);
        let remaining: Vec<_> = list.iter().map(|e| e.atoms().to_vec()).collect();
        assert_eq!(remaining, vec![vec![1, 2], vec![2, 3], vec![3, 4]]);
    }

    #[test]
    fn remove_first_where_stops_after_one_match() {
        let mut list = InteractionList::new(InteractionKind::Angles);
        list.push(Interaction::new(&[0, 1, 2]));
        list.push(Interaction::new(&[5, 6, 7]));
        list.push(Interaction::new(&[0, 1, 2]));
        let removed = list.remove_first_where(|entry| entry.atoms() == [0, 1, 2]);
        assert_eq!(removed.map(|e| e.atoms().to_vec()), Some(vec![0, 1, 2]));
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().atoms(), &[5, 6, 7]);
        assert_eq!(list.get(1).unwrap().atoms(), &[0, 1, 2]);
    }

    #[test]
    fn parameter_lists_route_entries_by_kind() {
        let mut lists = ParameterLists::new();
        lists.add(InteractionKind::Constraints, Interaction::new(&[0, 3]));
        assert_eq!(lists.get(InteractionKind::Constraints).len(), 1);
        assert!(lists.get(InteractionKind::Bonds).is_empty());
        for list in lists.iter() {
            assert_eq!(lists.get(list.kind()).kind(), list.kind());
        }
    }

    #[test]
    fn bond_counts_tallies_both_partners() {
        let mut lists = ParameterLists::new();
        lists.add(InteractionKind::Bonds, Interaction::new(&[0, 1]));
        lists.add(InteractionKind::Bonds, Interaction::new(&[0, 2]));
        lists.add(InteractionKind::Bonds, Interaction::new(&[0, 3]));
        lists.add(InteractionKind::Bonds, Interaction::new(&[3, 9]));
        assert_eq!(lists.bond_counts(4), vec![3, 1, 1, 2]);
    }
}
