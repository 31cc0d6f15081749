//! End-to-end placeholder planning for a single image.
//!
//! `(width, height)` goes through reduction, catalog matching and component
//! scaling, and comes out as everything the rendering layer needs before the
//! real image has loaded.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::components::{scale_to_bound, ComponentCounts, Rounding, DEFAULT_COMPONENT_BOUND};
use crate::config::Config;
use crate::error::{RatioError, Result};
use crate::ratio::{reduce, AspectRatio};
use crate::style::{box_style, StyleMap};
use crate::svg::empty_image_url;

/// Everything derived from one image's dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceholderPlan {
    /// Dimensions as supplied
    pub source: AspectRatio,
    /// `source` in lowest terms
    pub reduced: AspectRatio,
    /// Closest catalog entry
    pub canonical: AspectRatio,
    /// Distance between `reduced` and `canonical` under the catalog metric
    pub distance: f64,
    /// `canonical` scaled so its longer side equals the component bound
    pub scaled: AspectRatio,
    /// Encoder component counts derived from `scaled`
    pub components: ComponentCounts,
    /// Intrinsic-ratio container style for `canonical`
    pub box_style: StyleMap,
    /// Blank SVG data URI sized to `canonical`
    pub empty_image_url: String,
}

/// Resolves image dimensions against one catalog.
#[derive(Debug, Clone)]
pub struct Planner {
    catalog: Catalog,
    bound: f64,
    rounding: Rounding,
}

impl Planner {
    /// Fails when `bound` is not a finite positive number.
    pub fn new(catalog: Catalog, bound: f64, rounding: Rounding) -> Result<Self> {
        if !bound.is_finite() || bound <= 0.0 {
            return Err(RatioError::InvalidBound(bound));
        }
        Ok(Self {
            catalog,
            bound,
            rounding,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = Catalog::with_extra(config.catalog.policy, &config.catalog.extra);
        Self::new(catalog, config.components.bound, config.components.rounding)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn plan(&self, width: u32, height: u32) -> Result<PlaceholderPlan> {
        let reduced = reduce(width, height)?;
        let source = AspectRatio::from_dimensions(width, height)?;
        let (canonical, distance) = self.catalog.nearest_with_distance(reduced);
        let scaled = scale_to_bound(canonical, self.bound)?;
        let components = ComponentCounts::from_scaled(scaled, self.rounding);

        log::debug!(
            "{}x{} reduced to {}, matched {} (distance {:.4}), components {}x{}",
            width,
            height,
            reduced,
            canonical,
            distance,
            components.x,
            components.y
        );

        Ok(PlaceholderPlan {
            source,
            reduced,
            canonical,
            distance,
            scaled,
            components,
            box_style: box_style(canonical),
            empty_image_url: empty_image_url(canonical),
        })
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
            bound: DEFAULT_COMPONENT_BOUND,
            rounding: Rounding::default(),
        }
    }
}
