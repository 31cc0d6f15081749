//! CLI enum types for catalog policy and rounding options.

use clap::ValueEnum;

use ratio_placeholder::catalog::CatalogPolicy;
use ratio_placeholder::components::Rounding;

/// Catalog used to find the canonical ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Policy {
    /// Landscape and portrait entries, matched by ratio value
    Mirrored,
    /// Single literal list, matched by absolute dimensions
    Fixed,
}

impl From<Policy> for CatalogPolicy {
    fn from(p: Policy) -> Self {
        match p {
            Policy::Mirrored => CatalogPolicy::Mirrored,
            Policy::Fixed => CatalogPolicy::Fixed,
        }
    }
}

/// Rounding applied to scaled component counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingMode {
    Round,
    Floor,
    Ceil,
}

impl From<RoundingMode> for Rounding {
    fn from(r: RoundingMode) -> Self {
        match r {
            RoundingMode::Round => Rounding::Round,
            RoundingMode::Floor => Rounding::Floor,
            RoundingMode::Ceil => Rounding::Ceil,
        }
    }
}
