//! ratio-placeholder library crate.
//!
//! Resolves image dimensions to a canonical aspect ratio from a curated
//! catalog and derives the style objects, component counts and SVG data URIs
//! used to render a placeholder before the real image loads.
//!
//! ```
//! use ratio_placeholder::catalog::{Catalog, CatalogPolicy};
//! use ratio_placeholder::ratio::reduce;
//! use ratio_placeholder::style::box_style;
//!
//! let catalog = Catalog::from_policy(CatalogPolicy::Fixed);
//! let canonical = catalog.nearest(reduce(1920, 1080).unwrap());
//! assert_eq!(canonical.to_string(), "16:9");
//! assert_eq!(box_style(canonical).get("paddingTop").unwrap().to_string(), "56.25%");
//! ```

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod plan;
pub mod ratio;
pub mod style;
pub mod svg;

pub use catalog::{Catalog, CatalogPolicy, DistanceMetric};
pub use components::{scale_to_bound, ComponentCounts, Rounding};
pub use error::{RatioError, Result};
pub use plan::{PlaceholderPlan, Planner};
pub use ratio::{reduce, AspectRatio};
