//! Error types for ratio and placeholder operations.

/// Errors that can occur while resolving aspect ratios.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatioError {
    #[error("Cannot reduce {width}x{height}: dimensions must be greater than 0")]
    ZeroDimension {
        /// Width as supplied by the caller
        width: u32,
        /// Height as supplied by the caller
        height: u32,
    },

    #[error("Invalid dimensions {width}x{height}: both must be finite and greater than 0")]
    InvalidDimension {
        /// Width as supplied by the caller
        width: f64,
        /// Height as supplied by the caller
        height: f64,
    },

    #[error("Aspect ratio catalog is empty")]
    EmptyCatalog,

    #[error("Invalid component bound {0}: must be finite and greater than 0")]
    InvalidBound(f64),
}

/// A specialized Result type for ratio operations.
pub type Result<T> = std::result::Result<T, RatioError>;
