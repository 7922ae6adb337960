use super::progress::ProgressReporter;
use crate::core::forcefield::interaction::InteractionKind;
use crate::core::forcefield::params::{Interaction, ParameterLists};
use crate::core::models::pattern::AtomPattern;
use tracing::{debug, warn};

/// Removes the entries of `kind` that `pattern` selects and returns how many
/// were removed. Survivors keep their relative order.
///
/// Matching depends on the kind:
/// - bonds match `(p0, p1)` in either order, every match is removed;
/// - angles match on the middle atom `p1` with `{p0, p2}` as the end atoms,
///   and only the first match is removed;
/// - proper and Ryckaert-Bellemans dihedrals match forward or fully reversed,
///   with a wildcard last slot matching any fourth atom; every match is removed.
///
/// Other kinds cannot be edited this way. They are reported and left untouched.
pub fn remove_matching(
    lists: &mut ParameterLists,
    kind: InteractionKind,
    pattern: &AtomPattern,
    reporter: &ProgressReporter,
) -> usize {
    let removed = match kind {
        InteractionKind::Bonds => lists
            .get_mut(kind)
            .remove_all_where(|entry| bond_matches(entry, pattern)),
        InteractionKind::Angles => lists
            .get_mut(kind)
            .remove_first_where(|entry| angle_matches(entry, pattern))
            .map_or(0, |_| 1),
        InteractionKind::ProperDihedrals | InteractionKind::RbDihedrals => lists
            .get_mut(kind)
            .remove_all_where(|entry| dihedral_matches(entry, pattern)),
        InteractionKind::ImproperDihedrals
        | InteractionKind::Constraints
        | InteractionKind::VirtualSites2 => {
            warn!(%kind, "Don't know how to remove parameters of this interaction kind.");
            reporter.message(|| format!("Don't know how to remove params from type {}", kind));
            return 0;
        }
    };

    if removed > 0 {
        debug!(%kind, %pattern, removed, "Removed matching interactions.");
        reporter.message(|| format!("Removing {} {} between atoms {}", removed, kind, pattern));
    }
    removed
}

fn slot_equals(entry: &Interaction, position: usize, pattern: &AtomPattern, slot: usize) -> bool {
    match (entry.atom(position), pattern.get(slot)) {
        (Some(atom), Some(expected)) => atom == expected,
        _ => false,
    }
}

fn bond_matches(entry: &Interaction, pattern: &AtomPattern) -> bool {
    (slot_equals(entry, 0, pattern, 0) && slot_equals(entry, 1, pattern, 1))
        || (slot_equals(entry, 1, pattern, 0) && slot_equals(entry, 0, pattern, 1))
}

fn angle_matches(entry: &Interaction, pattern: &AtomPattern) -> bool {
    slot_equals(entry, 1, pattern, 1)
        && ((slot_equals(entry, 0, pattern, 0) && slot_equals(entry, 2, pattern, 2))
            || (slot_equals(entry, 2, pattern, 0) && slot_equals(entry, 0, pattern, 2)))
}

fn dihedral_matches(entry: &Interaction, pattern: &AtomPattern) -> bool {
    let Some(&[ai, aj, ak, al]) = entry.atoms().first_chunk::<4>() else {
        return false;
    };
    let fixed = |slot: usize, atom: usize| pattern.get(slot) == Some(atom);
    let wildcard = pattern.is_wildcard(3);

    let forward = fixed(0, ai) && fixed(1, aj) && fixed(2, ak) && pattern.matches_slot(3, al);
    let reverse = fixed(0, al) && fixed(1, ak) && fixed(2, aj) && pattern.matches_slot(3, ai);
    let shifted = wildcard && fixed(0, aj) && fixed(1, ak) && fixed(2, al);

    forward || reverse || shifted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::progress::Progress;
    use std::cell::RefCell;

    fn lists_with(kind: InteractionKind, entries: &[&[usize]]) -> ParameterLists {
        let mut lists = ParameterLists::new();
        for (i, atoms) in entries.iter().enumerate() {
            lists.add(kind, Interaction::new(atoms).with_coefficients(&[i as f64]));
        }
        lists
    }

    fn remaining(lists: &ParameterLists, kind: InteractionKind) -> Vec<Vec<usize>> {
        lists.get(kind).iter().map(|e| e.atoms().to_vec()).collect()
    }

    #[test]
    fn bond_removal_matches_both_orders_and_preserves_order() {
        let mut lists = lists_with(
            InteractionKind::Bonds,
            &[&[0, 1], &[1, 2], &[1, 0], &[2, 3], &[0, 1]],
        );
        let removed = remove_matching(
            &mut lists,
            InteractionKind::Bonds,
            &AtomPattern::pair(0, 1),
            &ProgressReporter::new(),
        );
        assert_eq!(removed, 3);
        assert_eq!(
            remaining(&lists, InteractionKind::Bonds),
            vec![vec![1, 2], vec![2, 3]]
        );
        let coefficients: Vec<f64> = lists
            .get(InteractionKind::Bonds)
            .iter()
            .map(|e| e.c0())
            .collect();
        assert_eq!(coefficients, vec![1.0, 3.0]);
    }

    #[test]
    fn bond_removal_without_match_is_a_no_op() {
        let mut lists = lists_with(InteractionKind::Bonds, &[&[0, 1], &[1, 2]]);
        let removed = remove_matching(
            &mut lists,
            InteractionKind::Bonds,
            &AtomPattern::pair(0, 2),
            &ProgressReporter::new(),
        );
        assert_eq!(removed, 0);
        assert_eq!(lists.get(InteractionKind::Bonds).len(), 2);
    }

    #[test]
    fn angle_removal_matches_mirrored_ends() {
        let mut lists = lists_with(InteractionKind::Angles, &[&[0, 1, 2], &[2, 1, 3]]);
        let removed = remove_matching(
            &mut lists,
            InteractionKind::Angles,
            &AtomPattern::triple(3, 1, 2),
            &ProgressReporter::new(),
        );
        assert_eq!(removed, 1);
        assert_eq!(remaining(&lists, InteractionKind::Angles), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn angle_removal_stops_after_first_match() {
        // Only the first matching angle goes; bonds and dihedrals remove every match.
        let mut lists = lists_with(
            InteractionKind::Angles,
            &[&[0, 1, 2], &[4, 5, 6], &[2, 1, 0]],
        );
        let removed = remove_matching(
            &mut lists,
            InteractionKind::Angles,
            &AtomPattern::triple(0, 1, 2),
            &ProgressReporter::new(),
        );
        assert_eq!(removed, 1);
        assert_eq!(
            remaining(&lists, InteractionKind::Angles),
            vec![vec![4, 5, 6], vec![2, 1, 0]]
        );
    }

    #[test]
    fn angle_removal_requires_matching_middle_atom() {
        let mut lists = lists_with(InteractionKind::Angles, &[&[0, 2, 1]]);
        let removed = remove_matching(
            &mut lists,
            InteractionKind::Angles,
            &AtomPattern::triple(0, 1, 2),
            &ProgressReporter::new(),
        );
        assert_eq!(removed, 0);
    }

    #[test]
    fn exact_dihedral_pattern_matches_forward_and_reverse_only() {
        let mut lists = lists_with(
            InteractionKind::ProperDihedrals,
            &[&[0, 1, 2, 3], &[3, 2, 1, 0], &[0, 1, 2, 4], &[9, 0, 1, 2]],
        );
        let removed = remove_matching(
            &mut lists,
            InteractionKind::ProperDihedrals,
            &AtomPattern::quad(0, 1, 2, 3),
            &ProgressReporter::new(),
        );
        assert_eq!(removed, 2);
        assert_eq!(
            remaining(&lists, InteractionKind::ProperDihedrals),
            vec![vec![0, 1, 2, 4], vec![9, 0, 1, 2]]
        );
    }

    #[test]
    fn wildcard_dihedral_pattern_matches_any_fourth_atom() {
        let mut lists = lists_with(
            InteractionKind::RbDihedrals,
            &[
                &[0, 1, 2, 3],
                &[0, 1, 2, 7],
                &[7, 2, 1, 0],
                &[1, 2, 3, 4],
                &[0, 1, 3, 2],
            ],
        );
        let removed = remove_matching(
            &mut lists,
            InteractionKind::RbDihedrals,
            &AtomPattern::with_wildcard(0, 1, 2),
            &ProgressReporter::new(),
        );
        assert_eq!(removed, 3);
        assert_eq!(
            remaining(&lists, InteractionKind::RbDihedrals),
            vec![vec![1, 2, 3, 4], vec![0, 1, 3, 2]]
        );
    }

    #[test]
    fn wildcard_dihedral_pattern_also_matches_shifted_chain() {
        let mut lists = lists_with(InteractionKind::ProperDihedrals, &[&[8, 0, 1, 2]]);
        let removed = remove_matching(
            &mut lists,
            InteractionKind::ProperDihedrals,
            &AtomPattern::with_wildcard(0, 1, 2),
            &ProgressReporter::new(),
        );
        assert_eq!(removed, 1);
        assert!(lists.get(InteractionKind::ProperDihedrals).is_empty());
    }

    #[test]
    fn proper_and_rb_dihedrals_are_edited_independently() {
        let mut lists = ParameterLists::new();
        lists.add(InteractionKind::ProperDihedrals, Interaction::new(&[0, 1, 2, 3]));
        lists.add(InteractionKind::RbDihedrals, Interaction::new(&[0, 1, 2, 3]));
        remove_matching(
            &mut lists,
            InteractionKind::RbDihedrals,
            &AtomPattern::quad(0, 1, 2, 3),
            &ProgressReporter::new(),
        );
        assert!(lists.get(InteractionKind::RbDihedrals).is_empty());
        assert_eq!(lists.get(InteractionKind::ProperDihedrals).len(), 1);
    }

    #[test]
    fn unsupported_kind_is_reported_and_left_untouched() {
        let messages = RefCell::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            if let Progress::Message(line) = event {
                messages.borrow_mut().push(line);
            }
        }));
        let mut lists = lists_with(InteractionKind::ImproperDihedrals, &[&[0, 1, 2, 3]]);

        let removed = remove_matching(
            &mut lists,
            InteractionKind::ImproperDihedrals,
            &AtomPattern::quad(0, 1, 2, 3),
            &reporter,
        );
        drop(reporter);

        assert_eq!(removed, 0);
        assert_eq!(lists.get(InteractionKind::ImproperDihedrals).len(), 1);
        let messages = messages.into_inner();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("idihs"));
    }

    #[test]
    fn removal_is_reported_to_diagnostic_sink() {
        let messages = RefCell::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event: Progress| {
            if let Progress::Message(line) = event {
                messages.borrow_mut().push(line);
            }
        }));
        let mut lists = lists_with(InteractionKind::Bonds, &[&[4, 5]]);
        remove_matching(
            &mut lists,
            InteractionKind::Bonds,
            &AtomPattern::pair(5, 4),
            &reporter,
        );
        drop(reporter);
        assert_eq!(
            messages.into_inner(),
            vec!["Removing 1 bonds between atoms 5 4".to_string()]
        );
    }
}
