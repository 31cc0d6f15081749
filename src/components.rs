//! Component-count scaling for the placeholder hash encoder.
//!
//! The encoder takes a number of components per axis. Scaling the canonical
//! ratio so its longer side equals a fixed bound gives more components along
//! the longer axis and fewer along the shorter one.

use serde::{Deserialize, Serialize};

use crate::error::{RatioError, Result};
use crate::ratio::AspectRatio;

/// Default bound for the longer axis.
pub const DEFAULT_COMPONENT_BOUND: f64 = 9.0;

/// Fewest components the encoder accepts per axis.
pub const MIN_COMPONENTS: u32 = 1;

/// Most components the encoder accepts per axis.
pub const MAX_COMPONENTS: u32 = 9;

/// Uniformly scale `ratio` so its larger component equals `bound`.
///
/// The result is fractional and is not rounded; see [`ComponentCounts`] for
/// integer counts.
pub fn scale_to_bound(ratio: AspectRatio, bound: f64) -> Result<AspectRatio> {
    if !bound.is_finite() || bound <= 0.0 {
        return Err(RatioError::InvalidBound(bound));
    }

    let x_scale = bound / ratio.width();
    let y_scale = bound / ratio.height();
    let scale = x_scale.min(y_scale);
    AspectRatio::new(scale * ratio.width(), scale * ratio.height())
}

/// [`scale_to_bound`] with [`DEFAULT_COMPONENT_BOUND`].
pub fn scale_to_default_bound(ratio: AspectRatio) -> Result<AspectRatio> {
    scale_to_bound(ratio, DEFAULT_COMPONENT_BOUND)
}

/// How a fractional scaled component is turned into a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rounding {
    #[default]
    Round,
    Floor,
    Ceil,
}

impl Rounding {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Rounding::Round => value.round(),
            Rounding::Floor => value.floor(),
            Rounding::Ceil => value.ceil(),
        }
    }
}

/// Integer component counts per axis, always within
/// `MIN_COMPONENTS..=MAX_COMPONENTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentCounts {
    pub x: u32,
    pub y: u32,
}

impl ComponentCounts {
    /// Round a scaled ratio into encoder component counts.
    pub fn from_scaled(scaled: AspectRatio, rounding: Rounding) -> Self {
        Self {
            x: to_count(scaled.width(), rounding),
            y: to_count(scaled.height(), rounding),
        }
    }
}

fn to_count(value: f64, rounding: Rounding) -> u32 {
    let rounded = rounding.apply(value);
    (rounded as u32).clamp(MIN_COMPONENTS, MAX_COMPONENTS)
}
