use crate::engine::error::VsiteError;

/// A chain of three or four atoms treated as exactly collinear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearGroup {
    atoms: [usize; 4],
    len: usize,
    live: bool,
}

impl LinearGroup {
    fn triple(ai: usize, aj: usize, ak: usize) -> Self {
        Self {
            atoms: [ai, aj, ak, 0],
            len: 3,
            live: true,
        }
    }

    /// The atoms of the chain in backbone order; empty for a merged-away group.
    pub fn atoms(&self) -> &[usize] {
        if self.live { &self.atoms[..self.len] } else { &[] }
    }

    /// 3 or 4 for a live group, 0 once the group has been merged into another.
    pub fn nline(&self) -> usize {
        if self.live { self.len } else { 0 }
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub(crate) fn reset_to_triple(&mut self) {
        self.len = 3;
        self.live = true;
    }

    pub(crate) fn extend(&mut self, atom: usize) {
        self.atoms[3] = atom;
        self.len = 4;
    }

    pub(crate) fn tombstone(&mut self) {
        self.live = false;
    }
}

/// Four coplanar atoms: a central atom followed by its three substituents,
/// with each atom's bond count at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanarGroup {
    pub atoms: [usize; 4],
    pub bond_counts: [usize; 4],
}

impl PlanarGroup {
    pub fn center(&self) -> usize {
        self.atoms[0]
    }
}

/// Candidate linear and planar groups found in a topology, free of duplicates.
#[derive(Debug, Clone, Default)]
pub struct GeometryRegistry {
    linear: Vec<LinearGroup>,
    planar: Vec<PlanarGroup>,
}

impl GeometryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the linear triple `ai-aj-ak`.
    ///
    /// Two triples are the same if they share the middle atom and the same pair
    /// of end atoms in either order. Returns `false` for a duplicate.
    pub fn add_linear(&mut self, ai: usize, aj: usize, ak: usize) -> bool {
        let exists = self.linear.iter().any(|group| {
            let [gi, gj, gk, _] = group.atoms;
            gj == aj && ((gi == ai && gk == ak) || (gi == ak && gk == ai))
        });
        if exists {
            return false;
        }
        self.linear.push(LinearGroup::triple(ai, aj, ak));
        true
    }

    /// Registers the planar quadruple `ai-aj-ak-al`, snapshotting each atom's
    /// entry in `bond_counts`.
    ///
    /// The quadruple and its full reversal are the same group. Returns
    /// `Ok(false)` for a duplicate.
    pub fn add_planar(
        &mut self,
        ai: usize,
        aj: usize,
        ak: usize,
        al: usize,
        bond_counts: &[usize],
    ) -> Result<bool, VsiteError> {
        let atoms = [ai, aj, ak, al];
        let reversed = [al, ak, aj, ai];
        if self
            .planar
            .iter()
            .any(|group| group.atoms == atoms || group.atoms == reversed)
        {
            return Ok(false);
        }

        let mut snapshot = [0; 4];
        for (count, &atom) in snapshot.iter_mut().zip(&atoms) {
            *count = *bond_counts.get(atom).ok_or(VsiteError::AtomOutOfRange {
                index: atom,
                len: bond_counts.len(),
            })?;
        }
        self.planar.push(PlanarGroup {
            atoms,
            bond_counts: snapshot,
        });
        Ok(true)
    }

    pub fn linear_groups(&self) -> &[LinearGroup] {
        &self.linear
    }

    pub(crate) fn linear_groups_mut(&mut self) -> &mut [LinearGroup] {
        &mut self.linear
    }

    pub fn live_linear_groups(&self) -> impl Iterator<Item = &LinearGroup> {
        self.linear.iter().filter(|group| group.is_live())
    }

    pub fn planar_groups(&self) -> &[PlanarGroup] {
        &self.planar
    }

    pub fn linear_count(&self) -> usize {
        self.linear.len()
    }

    pub fn planar_count(&self) -> usize {
        self.planar.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linear.is_empty() && self.planar.is_empty()
    }
}
