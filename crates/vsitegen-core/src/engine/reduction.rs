use super::config::VsiteConfig;
use super::error::VsiteError;
use super::progress::ProgressReporter;
use crate::core::forcefield::interaction::InteractionKind;
use crate::core::forcefield::params::Interaction;
use crate::core::models::atom::{Atom, NonbondedParams};
use crate::core::models::system::MolecularTopology;
use crate::core::utils::geometry::{center_along_line, cumulative_arc_lengths, mass_weighted_center};
use nalgebra::Point3;
use tracing::{debug, instrument};

/// Two-point mass model of a linear chain.
///
/// The chain lies along a line starting at its first (anchor) atom. The model
/// keeps `anchor_mass` on the anchor and puts `surrogate_mass` at distance
/// `constraint_length` along the line. Together they have the chain's total
/// mass, center of mass and moment of inertia.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassRedistribution {
    pub total_mass: f64,
    /// Distance of the center of mass from the anchor atom.
    pub center_of_mass: f64,
    /// Moment of inertia about the center of mass.
    pub inertia: f64,
    pub constraint_length: f64,
    pub surrogate_mass: f64,
    pub anchor_mass: f64,
}

impl MassRedistribution {
    /// Solves the two-point model for a chain of three or four atoms.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The chain atoms, used only to label errors.
    /// * `masses` - The mass of each chain atom.
    /// * `arc_lengths` - Distance of each atom from the anchor along the chain;
    ///   the first entry is zero.
    ///
    /// # Errors
    ///
    /// Returns [`VsiteError::DegenerateGeometry`] for a chain of the wrong
    /// length, without mass, or whose center of mass sits on the anchor, and
    /// [`VsiteError::NonPositiveMass`] when the anchor would be left with no mass.
    pub fn solve(atoms: &[usize], masses: &[f64], arc_lengths: &[f64]) -> Result<Self, VsiteError> {
        let degenerate = |reason: &'static str| VsiteError::DegenerateGeometry {
            atoms: atoms.to_vec(),
            reason,
        };
        if !(3..=4).contains(&masses.len()) || masses.len() != arc_lengths.len() {
            return Err(degenerate("a linear group holds three or four atoms"));
        }

        let total_mass: f64 = masses.iter().sum();
        if !total_mass.is_finite() || total_mass <= 0.0 {
            return Err(degenerate("the group has no mass"));
        }

        let center_of_mass = center_along_line(arc_lengths, masses)
            .filter(|com| com.is_finite() && *com > 0.0)
            .ok_or_else(|| degenerate("the center of mass coincides with the anchor atom"))?;

        let inertia: f64 = masses
            .iter()
            .zip(arc_lengths)
            .map(|(m, r)| m * (r - center_of_mass).powi(2))
            .sum();
        let constraint_length = center_of_mass + inertia / (center_of_mass * total_mass);
        let surrogate_mass = center_of_mass * total_mass / constraint_length;
        let anchor_mass = total_mass - surrogate_mass;

        if anchor_mass <= 0.0 {
            return Err(VsiteError::NonPositiveMass {
                mass: anchor_mass,
                atoms: atoms.to_vec(),
            });
        }

        Ok(Self {
            total_mass,
            center_of_mass,
            inertia,
            constraint_length,
            surrogate_mass,
            anchor_mass,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReducedGroup {
    /// Index of the appended mass particle.
    pub particle: usize,
    pub redistribution: MassRedistribution,
}

/// Replaces a linear chain by its anchor atom, one new mass particle and a
/// constraint between them, rebuilding every other chain atom as a virtual site.
///
/// The topology grows by exactly one atom. The anchor takes the anchor mass,
/// all other chain atoms become massless in both states, one constraint
/// `(anchor, particle)` and one two-particle virtual site per non-anchor atom
/// are appended.
///
/// Nothing is modified when an error is returned.
#[instrument(skip_all, name = "linear_group_reduction", fields(atoms = ?atoms))]
pub fn reduce_linear_group(
    topology: &mut MolecularTopology,
    atoms: &[usize],
    config: &VsiteConfig,
    reporter: &ProgressReporter,
) -> Result<ReducedGroup, VsiteError> {
    let positions = atoms
        .iter()
        .map(|&a| topology.checked_position(a))
        .collect::<Result<Vec<_>, _>>()?;
    let masses = atoms
        .iter()
        .map(|&a| topology.checked_atom(a).map(|atom| atom.mass))
        .collect::<Result<Vec<_>, _>>()?;
    let arc_lengths = cumulative_arc_lengths(&positions);

    let redistribution = MassRedistribution::solve(atoms, &masses, &arc_lengths)?;
    let MassRedistribution {
        center_of_mass,
        inertia,
        constraint_length,
        surrogate_mass,
        anchor_mass,
        ..
    } = redistribution;
    let r = |k: usize| arc_lengths.get(k).copied().unwrap_or(0.0);
    debug!(
        com = center_of_mass,
        inertia,
        r_vv = constraint_length,
        m_v = surrogate_mass,
        r_b = r(1),
        r_c = r(2),
        r_d = r(3),
        "Solved two-point mass model."
    );
    reporter.message(|| {
        format!(
            "com = {}, I = {}, rVV = {} mV = {} rB = {} rC = {} rD = {}",
            center_of_mass,
            inertia,
            constraint_length,
            surrogate_mass,
            r(1),
            r(2),
            r(3)
        )
    });

    let position = particle_position(&positions, &masses, constraint_length);
    let aux_type = topology
        .atom_types
        .register(&config.auxiliary_name, NonbondedParams::default());
    let mut particle_atom = Atom::new(&config.auxiliary_name, surrogate_mass);
    particle_atom.type_name = config.auxiliary_name.clone();
    particle_atom.set_type(aux_type);
    let particle = topology.add_atom(particle_atom, position);

    let anchor = atoms[0];
    if let Some(atom) = topology.atom_mut(anchor) {
        atom.set_mass(anchor_mass);
    }
    for &a in &atoms[1..] {
        if let Some(atom) = topology.atom_mut(a) {
            atom.set_mass(0.0);
        }
    }

    topology.interactions.add(
        InteractionKind::Constraints,
        Interaction::new(&[anchor, particle]).with_coefficients(&[constraint_length]),
    );
    for (k, &a) in atoms.iter().enumerate().skip(1) {
        topology.interactions.add(
            InteractionKind::VirtualSites2,
            Interaction::new(&[a, anchor, particle])
                .with_coefficients(&[arc_lengths[k] / constraint_length]),
        );
    }

    Ok(ReducedGroup {
        particle,
        redistribution,
    })
}

/// Mass-weighted average of the two atoms following the anchor. A chain whose
/// middle atoms carry no mass gets a point on the backbone at `distance`.
fn particle_position(positions: &[Point3<f64>], masses: &[f64], distance: f64) -> Point3<f64> {
    if let Some(center) = mass_weighted_center(&positions[1..3], &masses[1..3]) {
        return center;
    }
    let anchor = positions[0];
    let direction = positions[positions.len() - 1] - anchor;
    match direction.try_normalize(f64::EPSILON) {
        Some(unit) => anchor + unit * distance,
        None => anchor,
    }
}
