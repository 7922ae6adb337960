use std::fmt;

/// Maximum number of atoms referenced by a single bonded interaction.
pub const MAX_PATTERN_ATOMS: usize = 4;

/// A length-tagged tuple of at most four atom slots used to select interactions.
///
/// A slot holding `None` is a wildcard that matches any atom. Only the last slot
/// of a four-atom pattern is ever treated as a wildcard by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtomPattern {
    slots: [Option<usize>; MAX_PATTERN_ATOMS],
    len: usize,
}

impl AtomPattern {
    pub fn pair(ai: usize, aj: usize) -> Self {
        Self {
            slots: [Some(ai), Some(aj), None, None],
            len: 2,
        }
    }

    pub fn triple(ai: usize, aj: usize, ak: usize) -> Self {
        Self {
            slots: [Some(ai), Some(aj), Some(ak), None],
            len: 3,
        }
    }

    pub fn quad(ai: usize, aj: usize, ak: usize, al: usize) -> Self {
        Self {
            slots: [Some(ai), Some(aj), Some(ak), Some(al)],
            len: 4,
        }
    }

    /// Three fixed atoms followed by a wildcard fourth slot.
    pub fn with_wildcard(ai: usize, aj: usize, ak: usize) -> Self {
        Self {
            slots: [Some(ai), Some(aj), Some(ak), None],
            len: 4,
        }
    }

    /// Builds a four-slot pattern from a chain of atoms, padding missing
    /// trailing positions with wildcards.
    ///
    /// Returns `None` for chains shorter than two or longer than four atoms.
    pub fn padded(chain: &[usize]) -> Option<Self> {
        if chain.len() < 2 || chain.len() > MAX_PATTERN_ATOMS {
            return None;
        }
        let mut slots = [None; MAX_PATTERN_ATOMS];
        for (slot, &atom) in slots.iter_mut().zip(chain) {
            *slot = Some(atom);
        }
        Some(Self {
            slots,
            len: MAX_PATTERN_ATOMS,
        })
    }

    #[inline]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.slots.get(position).copied().flatten()
    }

    #[inline]
    pub fn is_wildcard(&self, position: usize) -> bool {
        position < self.len && self.slots[position].is_none()
    }

    /// Checks a single slot against an atom; wildcards match everything.
    #[inline]
    pub fn matches_slot(&self, position: usize, atom: usize) -> bool {
        match self.slots.get(position) {
            Some(Some(expected)) => *expected == atom,
            Some(None) => position < self.len,
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl fmt::Display for AtomPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots[..self.len].iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match slot {
                Some(atom) => write!(f, "{}", atom)?,
                None => write!(f, "*")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_fills_missing_positions_with_wildcards() {
        let pattern = AtomPattern::padded(&[4, 5, 6]).unwrap();
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.get(0), Some(4));
        assert_eq!(pattern.get(2), Some(6));
        assert_eq!(pattern.get(3), None);
        assert!(pattern.is_wildcard(3));
        assert!(!pattern.is_wildcard(2));
    }

    #[test]
    fn padded_rejects_chains_of_invalid_length() {
        assert!(AtomPattern::padded(&[1]).is_none());
        assert!(AtomPattern::padded(&[1, 2, 3, 4, 5]).is_none());
    }

    #[test]
    fn wildcard_slot_matches_any_atom() {
        let pattern = AtomPattern::with_wildcard(1, 2, 3);
        assert!(pattern.matches_slot(3, 0));
        assert!(pattern.matches_slot(3, 99));
        assert!(pattern.matches_slot(0, 1));
        assert!(!pattern.matches_slot(0, 2));
    }

    #[test]
    fn slots_beyond_length_never_match() {
        let pattern = AtomPattern::pair(1, 2);
        assert!(!pattern.is_wildcard(2));
        assert!(!pattern.matches_slot(2, 0));
        assert!(!pattern.matches_slot(7, 0));
    }

    #[test]
    fn display_marks_wildcards_with_asterisk() {
        assert_eq!(AtomPattern::with_wildcard(0, 1, 2).to_string(), "0 1 2 *");
        assert_eq!(AtomPattern::quad(3, 2, 1, 0).to_string(), "3 2 1 0");
        assert_eq!(AtomPattern::pair(8, 9).to_string(), "8 9");
    }
}
