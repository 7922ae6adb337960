use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The bonded interaction kinds a topology carries parameter lists for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InteractionKind {
    /// Harmonic bonds between two atoms.
    Bonds,
    /// Bond angles over three atoms.
    Angles,
    /// Periodic proper dihedrals.
    ProperDihedrals,
    /// Ryckaert-Bellemans dihedrals.
    RbDihedrals,
    /// Improper dihedrals keeping four atoms planar.
    ImproperDihedrals,
    /// Holonomic distance constraints.
    Constraints,
    /// Virtual sites built from two constructing particles.
    VirtualSites2,
}

impl InteractionKind {
    pub const COUNT: usize = 7;

    pub const ALL: [InteractionKind; Self::COUNT] = [
        Self::Bonds,
        Self::Angles,
        Self::ProperDihedrals,
        Self::RbDihedrals,
        Self::ImproperDihedrals,
        Self::Constraints,
        Self::VirtualSites2,
    ];

    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Bonds => "bonds",
            Self::Angles => "angles",
            Self::ProperDihedrals => "pdihs",
            Self::RbDihedrals => "rbdihs",
            Self::ImproperDihedrals => "idihs",
            Self::Constraints => "constr",
            Self::VirtualSites2 => "vsite2",
        }
    }
}

#[rustfmt::skip]
static KIND_NAMES: Map<&'static str, InteractionKind> = phf_map! {
    "bonds" => InteractionKind::Bonds, "bond" => InteractionKind::Bonds,
    "angles" => InteractionKind::Angles, "angle" => InteractionKind::Angles,
    "pdihs" => InteractionKind::ProperDihedrals, "proper" => InteractionKind::ProperDihedrals,
    "rbdihs" => InteractionKind::RbDihedrals, "ryckaert-bellemans" => InteractionKind::RbDihedrals,
    "idihs" => InteractionKind::ImproperDihedrals, "improper" => InteractionKind::ImproperDihedrals,
    "constr" => InteractionKind::Constraints, "constraints" => InteractionKind::Constraints,
    "vsite2" => InteractionKind::VirtualSites2, "virtual-sites2" => InteractionKind::VirtualSites2,
};

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown interaction kind '{0}'")]
pub struct ParseInteractionKindError(pub String);

impl FromStr for InteractionKind {
    type Err = ParseInteractionKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KIND_NAMES
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .ok_or_else(|| ParseInteractionKindError(s.to_string()))
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
