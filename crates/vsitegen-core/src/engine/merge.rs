use super::error::VsiteError;
use super::progress::ProgressReporter;
use crate::core::topology::registry::{GeometryRegistry, LinearGroup};
use tracing::{instrument, warn};

/// Fuses linear triples that overlap into four-atom chains.
///
/// Every group is first reset to a live triple. Then, for each pair `i < j`
/// in registration order, groups sharing at least two atoms are merged: when
/// `j` starts with the last two atoms of `i`, `i` is extended by the last atom
/// of `j` and `j` is retired; the mirrored case extends `j` and retires `i`.
/// Any other overlap cannot be resolved and aborts the merge.
///
/// Returns the number of merges performed.
#[instrument(skip_all, name = "linear_group_merge")]
pub fn merge_linear_groups(
    registry: &mut GeometryRegistry,
    reporter: &ProgressReporter,
) -> Result<usize, VsiteError> {
    let groups = registry.linear_groups_mut();
    for group in groups.iter_mut() {
        group.reset_to_triple();
    }

    let n = groups.len();
    let mut merges = 0;
    for (i, j) in (0..n).flat_map(|i| (i + 1..n).map(move |j| (i, j))) {
        // Chains meeting end to end share one atom; an overlap shares a bond.
        let shared_pairs = shared_atom_count(&groups[i], &groups[j]) / 2;
        if shared_pairs == 0 {
            continue;
        }

        warn!("Merging two linear groups into one. Please check the result.");
        reporter.message(|| {
            format!(
                "Merging linear group {:?} with linear group {:?}",
                groups[i].atoms(),
                groups[j].atoms()
            )
        });

        let (first, second) = pair_mut(groups, i, j);
        if extends(first, second) {
            append_tail(first, second)?;
        } else if extends(second, first) {
            append_tail(second, first)?;
        } else {
            return Err(VsiteError::LinearOrdering {
                first: first.atoms().to_vec(),
                second: second.atoms().to_vec(),
            });
        }
        merges += 1;
    }
    Ok(merges)
}

fn shared_atom_count(a: &LinearGroup, b: &LinearGroup) -> usize {
    a.atoms()
        .iter()
        .map(|x| b.atoms().iter().filter(|&y| y == x).count())
        .sum()
}

/// True when `tail` begins with the last two atoms of the triple `head`.
fn extends(head: &LinearGroup, tail: &LinearGroup) -> bool {
    let (h, t) = (head.atoms(), tail.atoms());
    h.len() >= 3 && t.len() >= 3 && t[0] == h[1] && t[1] == h[2]
}

fn append_tail(head: &mut LinearGroup, tail: &mut LinearGroup) -> Result<(), VsiteError> {
    if head.nline() != 3 {
        return Err(VsiteError::LinearOrdering {
            first: head.atoms().to_vec(),
            second: tail.atoms().to_vec(),
        });
    }
    head.extend(tail.atoms()[2]);
    tail.tombstone();
    Ok(())
}

fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j);
    let (left, right) = items.split_at_mut(j);
    (&mut left[i], &mut right[0])
}
