use super::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VsiteError {
    #[error(
        "Atoms in strange order in linear groups {first:?} and {second:?}; cannot merge them"
    )]
    LinearOrdering {
        first: Vec<usize>,
        second: Vec<usize>,
    },

    #[error("Zero or negative mass {mass} in virtual site construction for atoms {atoms:?}")]
    NonPositiveMass { mass: f64, atoms: Vec<usize> },

    #[error("Degenerate geometry for linear group {atoms:?}: {reason}")]
    DegenerateGeometry {
        atoms: Vec<usize>,
        reason: &'static str,
    },

    #[error("Linear angle terms are not implemented; cannot replace linear group {atoms:?}")]
    LinearAnglesUnsupported { atoms: Vec<usize> },

    #[error("Atom index {index} is out of range for a table of {len} atoms")]
    AtomOutOfRange { index: usize, len: usize },

    #[error("Configuration error: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}
