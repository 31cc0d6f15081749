//! Aspect ratio value type and rational reduction.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RatioError, Result};

/// A `(width, height)` pair with both components finite and greater than 0.
///
/// Used for raw pixel dimensions, reduced ratios and the fractional ratios
/// produced by scaling. Values are never mutated; every transform returns a
/// new ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RatioRepr", into = "RatioRepr")]
pub struct AspectRatio {
    width: f64,
    height: f64,
}

#[derive(Serialize, Deserialize)]
struct RatioRepr {
    width: f64,
    height: f64,
}

impl AspectRatio {
    /// Create a ratio, rejecting zero, negative and non-finite components.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(RatioError::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Create a ratio from known-good literals.
    ///
    /// Only used for catalog tables; callers must pass positive values.
    pub(crate) const fn from_literal(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Create a ratio from integer pixel dimensions without reducing it.
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self> {
        Self::new(width as f64, height as f64)
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Scalar ratio `width / height`.
    pub fn value(&self) -> f64 {
        self.width / self.height
    }

    /// The same ratio with width and height swapped.
    pub fn swapped(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl TryFrom<RatioRepr> for AspectRatio {
    type Error = RatioError;

    fn try_from(repr: RatioRepr) -> Result<Self> {
        Self::new(repr.width, repr.height)
    }
}

impl From<AspectRatio> for RatioRepr {
    fn from(ratio: AspectRatio) -> Self {
        RatioRepr {
            width: ratio.width,
            height: ratio.height,
        }
    }
}

/// Greatest common divisor, Euclid's algorithm.
pub fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        return a;
    }
    gcd(b, a % b)
}

/// Reduce integer dimensions to lowest terms.
///
/// `reduce(1920, 1080)` is `16:9`; equal sides always reduce to `1:1`.
/// Zero in either dimension is rejected since it has no ratio. Inputs are
/// `u32` so every reduced term is exactly representable as `f64`.
pub fn reduce(width: u32, height: u32) -> Result<AspectRatio> {
    if width == 0 || height == 0 {
        return Err(RatioError::ZeroDimension { width, height });
    }

    let divisor = gcd(width, height);
    Ok(AspectRatio {
        width: (width / divisor) as f64,
        height: (height / divisor) as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(1920, 1080), 120);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(17, 5), 1);
    }

    #[test]
    fn test_reduce_hd() {
        let ratio = reduce(1920, 1080).unwrap();
        assert_eq!(ratio.width(), 16.0);
        assert_eq!(ratio.height(), 9.0);
    }

    #[test]
    fn test_reduce_square() {
        assert_eq!(reduce(500, 500).unwrap(), AspectRatio::new(1.0, 1.0).unwrap());
    }

    #[test]
    fn test_reduce_coprime_is_unchanged() {
        let ratio = reduce(1921, 1080).unwrap();
        assert_eq!(ratio.width(), 1921.0);
        assert_eq!(ratio.height(), 1080.0);
    }

    #[test]
    fn test_reduce_large_terms_stay_exact() {
        let ratio = reduce(u32::MAX, 2).unwrap();
        assert_eq!(ratio.width(), u32::MAX as f64);
        assert_eq!(ratio.height(), 2.0);
        assert_eq!(gcd(ratio.width() as u32, ratio.height() as u32), 1);

        let ratio = reduce(u32::MAX - 1, u32::MAX - 1).unwrap();
        assert_eq!(ratio, AspectRatio::new(1.0, 1.0).unwrap());
    }

    #[test]
    fn test_reduce_rejects_zero() {
        assert_eq!(
            reduce(0, 1080),
            Err(RatioError::ZeroDimension {
                width: 0,
                height: 1080
            })
        );
        assert!(reduce(1920, 0).is_err());
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert!(AspectRatio::new(0.0, 1.0).is_err());
        assert!(AspectRatio::new(-4.0, 3.0).is_err());
        assert!(AspectRatio::new(f64::NAN, 3.0).is_err());
        assert!(AspectRatio::new(4.0, f64::INFINITY).is_err());
        assert!(AspectRatio::new(4.0, 3.0).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(reduce(1920, 1080).unwrap().to_string(), "16:9");
        assert_eq!(AspectRatio::new(9.0, 5.0625).unwrap().to_string(), "9:5.0625");
    }

    #[test]
    fn test_swapped() {
        let ratio = AspectRatio::new(16.0, 9.0).unwrap();
        assert_eq!(ratio.swapped().width(), 9.0);
        assert_eq!(ratio.swapped().height(), 16.0);
        assert_eq!(ratio.swapped().swapped(), ratio);
    }

    #[test]
    fn test_serde_validates() {
        let ratio: AspectRatio = serde_json::from_str(r#"{"width": 4, "height": 3}"#).unwrap();
        assert_eq!(ratio.value(), 4.0 / 3.0);
        assert!(serde_json::from_str::<AspectRatio>(r#"{"width": 0, "height": 3}"#).is_err());
        assert_eq!(
            serde_json::to_string(&ratio).unwrap(),
            r#"{"width":4.0,"height":3.0}"#
        );
    }
}
