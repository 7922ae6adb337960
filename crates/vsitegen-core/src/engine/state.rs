use std::fmt;

/// The stages of a generation pass, in the order the driver visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Stage {
    #[default]
    Idle,
    MergingLinear,
    StrippingLinearTerms,
    ReducingLinear,
    StrippingPlanarTerms,
    EmittingImpropers,
    Done,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::MergingLinear => "Merging Linear Groups",
            Self::StrippingLinearTerms => "Stripping Linear Terms",
            Self::ReducingLinear => "Reducing Linear Groups",
            Self::StrippingPlanarTerms => "Stripping Planar Terms",
            Self::EmittingImpropers => "Emitting Impropers",
            Self::Done => "Done",
        }
    }

    /// The stage that follows this one; `Done` is terminal.
    pub fn next(self) -> Self {
        match self {
            Self::Idle => Self::MergingLinear,
            Self::MergingLinear => Self::StrippingLinearTerms,
            Self::StrippingLinearTerms => Self::ReducingLinear,
            Self::ReducingLinear => Self::StrippingPlanarTerms,
            Self::StrippingPlanarTerms => Self::EmittingImpropers,
            Self::EmittingImpropers | Self::Done => Self::Done,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
