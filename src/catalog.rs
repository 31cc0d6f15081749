//! Canonical aspect ratio catalogs and nearest-ratio matching.
//!
//! A [`Catalog`] is built once from a [`CatalogPolicy`] and then borrowed
//! read-only. The policy decides both the entry list and the distance metric,
//! so a scale-sensitive metric is never paired with the mirrored list.

use serde::{Deserialize, Serialize};

use crate::error::{RatioError, Result};
use crate::ratio::AspectRatio;

const fn ratio(width: f64, height: f64) -> AspectRatio {
    AspectRatio::from_literal(width, height)
}

/// Industry ratios matched by absolute dimension distance.
/// Entries are kept unreduced; the metric compares raw components.
pub const FIXED_ASPECT_RATIOS: &[AspectRatio] = &[
    ratio(9.0, 16.0),  // Vertical
    ratio(3.0, 3.0),   // Square
    ratio(4.0, 3.0),   // Standard fullscreen
    ratio(16.0, 10.0), // Standard LCD
    ratio(16.0, 9.0),  // HD
    ratio(6.0, 3.0),   // Univisium
    ratio(21.0, 9.0),  // Anamorphic 2.35:1
    ratio(19.0, 16.0), // Movietone
    ratio(5.0, 4.0),   // 17" LCD CRT
    ratio(11.0, 8.0),  // 35mm full sound
    ratio(6.0, 4.0),   // 35mm photo
    ratio(14.0, 9.0),  // Commercials
    ratio(5.0, 3.0),   // Paramount
    ratio(7.0, 4.0),   // Early 35mm
    ratio(11.0, 5.0),  // 70mm
    ratio(12.0, 5.0),  // Bluray
    ratio(8.0, 3.0),   // Super 16
    ratio(18.0, 5.0),  // IMAX
    ratio(12.0, 3.0),  // Polyvision
];

/// Landscape half of the mirrored catalog.
pub const HORIZONTAL_ASPECT_RATIOS: &[AspectRatio] = &[
    ratio(4.0, 4.0),   // Square
    ratio(4.0, 3.0),   // Standard fullscreen
    ratio(16.0, 10.0), // Standard LCD
    ratio(16.0, 9.0),  // HD
    ratio(6.0, 3.0),   // Univisium
    ratio(21.0, 9.0),  // Anamorphic 2.35:1
    ratio(19.0, 16.0), // Movietone
    ratio(5.0, 4.0),   // 17" LCD CRT
    ratio(11.0, 8.0),  // 35mm full sound
    ratio(6.0, 4.0),   // 35mm photo
    ratio(14.0, 9.0),  // Commercials
    ratio(5.0, 3.0),   // Paramount
    ratio(7.0, 4.0),   // Early 35mm
    ratio(11.0, 5.0),  // 70mm
    ratio(12.0, 5.0),  // Bluray
    ratio(8.0, 3.0),   // Super 16
    ratio(18.0, 5.0),  // IMAX
    ratio(12.0, 3.0),  // Polyvision
];

/// How the distance between a query and a catalog entry is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceMetric {
    /// Euclidean distance between `(width, height)` points.
    Absolute,
    /// Difference between the scalar `width / height` values.
    RatioValue,
}

impl DistanceMetric {
    pub fn distance(self, query: &AspectRatio, candidate: &AspectRatio) -> f64 {
        match self {
            DistanceMetric::Absolute => {
                let x = candidate.width() - query.width();
                let y = candidate.height() - query.height();
                (x * x + y * y).sqrt()
            }
            DistanceMetric::RatioValue => {
                let diff = candidate.value() - query.value();
                (diff * diff).sqrt()
            }
        }
    }
}

/// Catalog construction policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogPolicy {
    /// Single literal list, absolute-dimension metric.
    Fixed,
    /// Landscape list followed by its portrait mirror, ratio-value metric.
    #[default]
    Mirrored,
}

impl CatalogPolicy {
    /// The only metric that is valid for this policy's entry list.
    pub fn metric(self) -> DistanceMetric {
        match self {
            CatalogPolicy::Fixed => DistanceMetric::Absolute,
            CatalogPolicy::Mirrored => DistanceMetric::RatioValue,
        }
    }
}

/// An immutable, non-empty, ordered list of canonical ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    entries: Vec<AspectRatio>,
    metric: DistanceMetric,
}

impl Catalog {
    /// Build a catalog from explicit entries. An empty list is a configuration
    /// error and is rejected here rather than at lookup time.
    pub fn new(entries: Vec<AspectRatio>, metric: DistanceMetric) -> Result<Self> {
        if entries.is_empty() {
            return Err(RatioError::EmptyCatalog);
        }
        Ok(Self { entries, metric })
    }

    /// Build the built-in catalog for a policy.
    pub fn from_policy(policy: CatalogPolicy) -> Self {
        Self::with_extra(policy, &[])
    }

    /// Build the built-in catalog for a policy with additional entries.
    ///
    /// Extras go after the built-in entries. Under the mirrored policy they
    /// join the landscape half and are mirrored along with it.
    pub fn with_extra(policy: CatalogPolicy, extra: &[AspectRatio]) -> Self {
        let entries = match policy {
            CatalogPolicy::Fixed => FIXED_ASPECT_RATIOS
                .iter()
                .chain(extra)
                .copied()
                .collect(),
            CatalogPolicy::Mirrored => {
                let horizontal: Vec<AspectRatio> = HORIZONTAL_ASPECT_RATIOS
                    .iter()
                    .chain(extra)
                    .copied()
                    .collect();
                let vertical: Vec<AspectRatio> =
                    horizontal.iter().map(AspectRatio::swapped).collect();
                horizontal.into_iter().chain(vertical).collect()
            }
        };

        Self {
            entries,
            metric: policy.metric(),
        }
    }

    pub fn entries(&self) -> &[AspectRatio] {
        &self.entries
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn distance(&self, query: &AspectRatio, candidate: &AspectRatio) -> f64 {
        self.metric.distance(query, candidate)
    }

    /// Closest catalog entry to `query`.
    pub fn nearest(&self, query: AspectRatio) -> AspectRatio {
        self.nearest_with_distance(query).0
    }

    /// Closest catalog entry to `query` together with its distance.
    ///
    /// Ties keep the earliest entry: only a strictly smaller distance
    /// replaces the current best.
    pub fn nearest_with_distance(&self, query: AspectRatio) -> (AspectRatio, f64) {
        let mut best = self.entries[0];
        let mut nearest = self.distance(&query, &best);

        for candidate in &self.entries[1..] {
            let distance = self.distance(&query, candidate);
            if distance < nearest {
                best = *candidate;
                nearest = distance;
            }
        }

        log::trace!("nearest {} -> {} (distance {})", query, best, nearest);
        (best, nearest)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::from_policy(CatalogPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ar(width: f64, height: f64) -> AspectRatio {
        AspectRatio::new(width, height).unwrap()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert_eq!(
            Catalog::new(Vec::new(), DistanceMetric::Absolute),
            Err(RatioError::EmptyCatalog)
        );
    }

    #[test]
    fn test_single_entry_always_returned() {
        let catalog = Catalog::new(vec![ar(4.0, 3.0)], DistanceMetric::Absolute).unwrap();
        assert_eq!(catalog.nearest(ar(1000.0, 1.0)), ar(4.0, 3.0));
        assert_eq!(catalog.nearest(ar(1.0, 1000.0)), ar(4.0, 3.0));
    }

    #[test]
    fn test_tie_keeps_earliest_entry() {
        // 4:4 is at distance 1 from both 3:4 and 5:4
        let catalog =
            Catalog::new(vec![ar(3.0, 4.0), ar(5.0, 4.0)], DistanceMetric::Absolute).unwrap();
        assert_eq!(catalog.nearest(ar(4.0, 4.0)), ar(3.0, 4.0));

        let reversed =
            Catalog::new(vec![ar(5.0, 4.0), ar(3.0, 4.0)], DistanceMetric::Absolute).unwrap();
        assert_eq!(reversed.nearest(ar(4.0, 4.0)), ar(5.0, 4.0));
    }

    #[test]
    fn test_tie_keeps_earliest_entry_ratio_value() {
        // 8:4 and 4:2 share the same scalar value
        let catalog =
            Catalog::new(vec![ar(8.0, 4.0), ar(4.0, 2.0)], DistanceMetric::RatioValue).unwrap();
        let (found, distance) = catalog.nearest_with_distance(ar(2.0, 1.0));
        assert_eq!(found, ar(8.0, 4.0));
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_fixed_exact_match() {
        let catalog = Catalog::from_policy(CatalogPolicy::Fixed);
        let (found, distance) = catalog.nearest_with_distance(ar(16.0, 9.0));
        assert_eq!(found, ar(16.0, 9.0));
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_fixed_uses_absolute_metric() {
        let catalog = Catalog::from_policy(CatalogPolicy::Fixed);
        assert_eq!(catalog.metric(), DistanceMetric::Absolute);
        assert_eq!(catalog.len(), FIXED_ASPECT_RATIOS.len());
        // Absolute distance from 1:1 to 3:3 is sqrt(8); 4:3 is sqrt(13)
        assert_eq!(catalog.nearest(ar(1.0, 1.0)), ar(3.0, 3.0));
    }

    #[test]
    fn test_mirrored_layout() {
        let catalog = Catalog::from_policy(CatalogPolicy::Mirrored);
        let half = HORIZONTAL_ASPECT_RATIOS.len();
        assert_eq!(catalog.len(), half * 2);
        assert_eq!(catalog.metric(), DistanceMetric::RatioValue);
        for (i, landscape) in HORIZONTAL_ASPECT_RATIOS.iter().enumerate() {
            assert_eq!(catalog.entries()[i], *landscape);
            assert_eq!(catalog.entries()[half + i], landscape.swapped());
        }
    }

    #[test]
    fn test_mirrored_matches_portrait() {
        let catalog = Catalog::from_policy(CatalogPolicy::Mirrored);
        assert_eq!(catalog.nearest(ar(1080.0, 1920.0)), ar(9.0, 16.0));
        assert_eq!(catalog.nearest(ar(1920.0, 1080.0)), ar(16.0, 9.0));
        // Scale-insensitive: unreduced query finds the same entry
        assert_eq!(catalog.nearest(ar(3000.0, 2000.0)), ar(6.0, 4.0));
    }

    #[test]
    fn test_mirrored_square_prefers_landscape_half() {
        let catalog = Catalog::from_policy(CatalogPolicy::Mirrored);
        // 4:4 appears in both halves; the first one wins
        let (found, distance) = catalog.nearest_with_distance(ar(1.0, 1.0));
        assert_eq!(found, ar(4.0, 4.0));
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_with_extra_mirrored() {
        let extra = [ar(32.0, 9.0)];
        let catalog = Catalog::with_extra(CatalogPolicy::Mirrored, &extra);
        let half = HORIZONTAL_ASPECT_RATIOS.len() + 1;
        assert_eq!(catalog.len(), half * 2);
        assert_eq!(catalog.entries()[half - 1], ar(32.0, 9.0));
        assert_eq!(catalog.entries()[half * 2 - 1], ar(9.0, 32.0));
        assert_eq!(catalog.nearest(ar(3840.0, 1080.0)), ar(32.0, 9.0));
    }

    #[test]
    fn test_with_extra_fixed() {
        let catalog = Catalog::with_extra(CatalogPolicy::Fixed, &[ar(32.0, 9.0)]);
        assert_eq!(catalog.len(), FIXED_ASPECT_RATIOS.len() + 1);
        assert_eq!(catalog.entries().last(), Some(&ar(32.0, 9.0)));
    }

    #[test]
    fn test_ratio_value_metric() {
        let d = DistanceMetric::RatioValue.distance(&ar(16.0, 9.0), &ar(4.0, 3.0));
        assert!((d - (16.0 / 9.0 - 4.0 / 3.0)).abs() < 1e-12);
        let d = DistanceMetric::RatioValue.distance(&ar(32.0, 18.0), &ar(16.0, 9.0));
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_absolute_metric() {
        let d = DistanceMetric::Absolute.distance(&ar(1.0, 1.0), &ar(4.0, 5.0));
        assert_eq!(d, 5.0);
    }
}
