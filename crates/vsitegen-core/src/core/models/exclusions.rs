/// Per-atom lists of atoms whose nonbonded interaction is suppressed.
///
/// Slot `i` holds the exclusions of atom `i`. Slots created by [`Exclusions::grow_to`]
/// start out as self-excluding singletons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusions {
    lists: Vec<Vec<usize>>,
}

impl Exclusions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates one self-excluding slot for each of `n_atoms` atoms.
    pub fn with_self_exclusions(n_atoms: usize) -> Self {
        let mut exclusions = Self::new();
        exclusions.grow_to(n_atoms);
        exclusions
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn get(&self, atom: usize) -> Option<&[usize]> {
        self.lists.get(atom).map(Vec::as_slice)
    }

    /// Extends the table to `n_atoms` slots. Existing slots are never touched.
    ///
    /// Returns the indices of the slots that were created.
    pub fn grow_to(&mut self, n_atoms: usize) -> std::ops::Range<usize> {
        let start = self.lists.len();
        while self.lists.len() < n_atoms {
            let atom = self.lists.len();
            self.lists.push(vec![atom]);
        }
        start..self.lists.len()
    }

    /// Records a symmetric exclusion between two atoms, growing the table if needed.
    pub fn add_pair(&mut self, ai: usize, aj: usize) {
        self.grow_to(ai.max(aj) + 1);
        if !self.lists[ai].contains(&aj) {
            self.lists[ai].push(aj);
        }
        if !self.lists[aj].contains(&ai) {
            self.lists[aj].push(ai);
        }
    }

    pub fn is_excluded(&self, ai: usize, aj: usize) -> bool {
        self.lists.get(ai).is_some_and(|list| list.contains(&aj))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grow_to_creates_self_excluding_slots() {
        let mut exclusions = Exclusions::new();
        let created = exclusions.grow_to(3);
        assert_eq!(created, 0..3);
        for atom in 0..3 {
            assert_eq!(exclusions.get(atom), Some(&[atom][..]));
        }
    }

    #[test]
    fn grow_to_leaves_existing_slots_untouched() {
        let mut exclusions = Exclusions::with_self_exclusions(2);
        exclusions.add_pair(0, 1);
        let created = exclusions.grow_to(4);
        assert_eq!(created, 2..4);
        assert_eq!(exclusions.get(0), Some(&[0, 1][..]));
        assert_eq!(exclusions.get(3), Some(&[3][..]));
    }

    #[test]
    fn grow_to_smaller_size_is_a_no_op() {
        let mut exclusions = Exclusions::with_self_exclusions(5);
        let created = exclusions.grow_to(2);
        assert!(created.is_empty());
        assert_eq!(exclusions.len(), 5);
    }

    #[test]
    fn add_pair_is_symmetric_and_deduplicated() {
        let mut exclusions = Exclusions::new();
        exclusions.add_pair(0, 2);
        exclusions.add_pair(2, 0);
        assert!(exclusions.is_excluded(0, 2));
        assert!(exclusions.is_excluded(2, 0));
        assert_eq!(exclusions.get(0), Some(&[0, 2][..]));
        assert_eq!(exclusions.get(1), Some(&[1][..]));
        assert!(!exclusions.is_excluded(1, 0));
    }
}
