use crate::core::forcefield::interaction::InteractionKind;
use crate::core::forcefield::params::Interaction;
use crate::core::models::pattern::AtomPattern;
use crate::core::models::system::MolecularTopology;
use crate::core::topology::registry::GeometryRegistry;
use crate::engine::config::VsiteConfig;
use crate::engine::editor::remove_matching;
use crate::engine::error::VsiteError;
use crate::engine::merge::merge_linear_groups;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::reduction::reduce_linear_group;
use crate::engine::state::Stage;
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Bonded terms made redundant by a linear group, stripped before reduction.
const LINEAR_STRIPPED_KINDS: [InteractionKind; 3] = [
    InteractionKind::Angles,
    InteractionKind::RbDihedrals,
    InteractionKind::ProperDihedrals,
];

/// Dihedral kinds made redundant by the improper of a planar group.
const PLANAR_STRIPPED_KINDS: [InteractionKind; 2] =
    [InteractionKind::RbDihedrals, InteractionKind::ProperDihedrals];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerationSummary {
    /// Number of linear triples merged into four-atom chains.
    pub merges: usize,
    /// Total number of atoms in live linear groups.
    pub linear_atoms: usize,
    /// Indices of the mass particles appended to the topology.
    pub particles: Vec<usize>,
    /// Number of entries removed from each parameter list.
    pub removed: BTreeMap<InteractionKind, usize>,
    /// Number of improper dihedrals emitted for planar groups.
    pub impropers: usize,
}

impl GenerationSummary {
    pub fn removed_of(&self, kind: InteractionKind) -> usize {
        self.removed.get(&kind).copied().unwrap_or(0)
    }
}

/// Walks the generation stages in order, reporting each transition.
struct StageTracker<'r, 'a> {
    stage: Stage,
    reporter: &'r ProgressReporter<'a>,
}

impl<'r, 'a> StageTracker<'r, 'a> {
    fn new(reporter: &'r ProgressReporter<'a>) -> Self {
        Self {
            stage: Stage::Idle,
            reporter,
        }
    }

    fn advance(&mut self) -> Stage {
        if self.stage != Stage::Idle {
            self.reporter.report(Progress::PhaseFinish { stage: self.stage });
        }
        self.stage = self.stage.next();
        if self.stage != Stage::Done {
            self.reporter.report(Progress::PhaseStart { stage: self.stage });
        }
        self.stage
    }
}

/// Replaces the rigid groups of `registry` in `topology`.
///
/// Linear groups are merged, their redundant angles, dihedrals and bonds are
/// removed, and each is reduced to an anchor atom, a mass particle and virtual
/// sites. Planar groups lose the dihedrals now covered by an improper, and one
/// improper is emitted per group. Which passes run is controlled by
/// `config.mode`.
///
/// The topology is only updated when the whole pass succeeds; on error it is
/// left exactly as it was.
#[instrument(skip_all, name = "vsite_generation_workflow")]
pub fn run(
    registry: &mut GeometryRegistry,
    topology: &mut MolecularTopology,
    config: &VsiteConfig,
    reporter: &ProgressReporter,
) -> Result<GenerationSummary, VsiteError> {
    let mut working = topology.clone();
    let mut summary = GenerationSummary::default();
    let mut tracker = StageTracker::new(reporter);

    // === Stage 1: Merge overlapping linear groups ===
    tracker.advance();
    summary.merges = merge_linear_groups(registry, reporter)?;
    summary.linear_atoms = registry
        .live_linear_groups()
        .map(|group| group.nline())
        .sum();

    info!(
        "Generating {} linear {} and {} impropers.",
        summary.linear_atoms,
        if config.generate_vsites { "vsites" } else { "angles" },
        registry.planar_count()
    );

    let run_linear = config.mode.includes_linear();
    let run_planar = config.mode.includes_planar();

    // === Stage 2: Strip bonded terms covered by linear groups ===
    tracker.advance();
    if run_linear {
        if let Some(group) = registry.live_linear_groups().next()
            && !config.generate_vsites
        {
            return Err(VsiteError::LinearAnglesUnsupported {
                atoms: group.atoms().to_vec(),
            });
        }
        for group in registry.live_linear_groups() {
            strip_linear_terms(&mut working, group.atoms(), reporter, &mut summary);
        }
    }

    // === Stage 3: Reduce each linear group ===
    tracker.advance();
    if run_linear {
        let groups: Vec<Vec<usize>> = registry
            .live_linear_groups()
            .map(|group| group.atoms().to_vec())
            .collect();
        reporter.report(Progress::TaskStart {
            total_steps: groups.len() as u64,
        });
        for atoms in &groups {
            // Every existing atom needs its own slot before a particle gets one.
            let covered = working.exclusions.len();
            if covered < working.atom_count() {
                return Err(VsiteError::AtomOutOfRange {
                    index: covered,
                    len: covered,
                });
            }
            let reduced = reduce_linear_group(&mut working, atoms, config, reporter)?;
            working.exclusions.grow_to(reduced.particle + 1);
            summary.particles.push(reduced.particle);
            reporter.report(Progress::TaskIncrement);
        }
        reporter.report(Progress::TaskFinish);
    }

    // === Stage 4: Strip dihedrals covered by planar impropers ===
    tracker.advance();
    if run_planar {
        for group in registry.planar_groups() {
            for &atom in &group.atoms {
                working.checked_atom(atom)?;
            }
        }
        for group in registry.planar_groups() {
            let center = group.center();
            for j in 1..4 {
                if group.bond_counts[j] != 1 {
                    continue;
                }
                for k in (1..4).filter(|&k| k != j) {
                    let pattern =
                        AtomPattern::with_wildcard(group.atoms[j], center, group.atoms[k]);
                    for kind in PLANAR_STRIPPED_KINDS {
                        let removed =
                            remove_matching(&mut working.interactions, kind, &pattern, reporter);
                        *summary.removed.entry(kind).or_default() += removed;
                    }
                }
            }
        }
    }

    // === Stage 5: Emit one improper per planar group ===
    tracker.advance();
    if run_planar {
        for group in registry.planar_groups() {
            working
                .interactions
                .add(InteractionKind::ImproperDihedrals, Interaction::new(&group.atoms));
            summary.impropers += 1;
        }
    }

    tracker.advance();
    *topology = working;

    info!(
        particles = summary.particles.len(),
        impropers = summary.impropers,
        "Virtual site generation complete."
    );
    Ok(summary)
}

fn strip_linear_terms(
    topology: &mut MolecularTopology,
    atoms: &[usize],
    reporter: &ProgressReporter,
    summary: &mut GenerationSummary,
) {
    if let Some(pattern) = AtomPattern::padded(atoms) {
        for kind in LINEAR_STRIPPED_KINDS {
            let removed = remove_matching(&mut topology.interactions, kind, &pattern, reporter);
            *summary.removed.entry(kind).or_default() += removed;
        }
    }
    for pair in atoms.windows(2) {
        let removed = remove_matching(
            &mut topology.interactions,
            InteractionKind::Bonds,
            &AtomPattern::pair(pair[0], pair[1]),
            reporter,
        );
        *summary.removed.entry(InteractionKind::Bonds).or_default() += removed;
    }
}
