//! Error types for derivview.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for derivview operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while sampling or plotting.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The plot kind is unknown or not available for this dimensionality.
    #[error(
        "Unsupported plot kind '{kind}'{}",
        .dims.map(|d| format!(" for {}D data", d)).unwrap_or_default()
    )]
    UnsupportedPlotKind {
        /// Requested kind.
        kind: String,
        /// Dimensionality of the data, when known.
        dims: Option<usize>,
    },

    /// No palette has this name.
    #[error("Unknown palette '{0}' (expected viridis, plasma, rainbow or blue-red)")]
    UnknownPalette(String),

    /// Bounds or sample count do not describe a usable domain.
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// A function returned an array that does not match the grid.
    #[error("Shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        /// Shape of the sample grid.
        expected: Vec<usize>,
        /// Shape the function returned.
        found: Vec<usize>,
    },

    /// A series was drawn onto axes of the wrong projection.
    #[error("Projection mismatch: expected {expected} axes, found {found} axes")]
    ProjectionMismatch {
        /// Projection the series needs.
        expected: &'static str,
        /// Projection of the axes.
        found: &'static str,
    },

    /// Terminal error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create an UnsupportedPlotKind error.
    pub fn unsupported_kind(kind: impl Into<String>, dims: Option<usize>) -> Self {
        Self::UnsupportedPlotKind {
            kind: kind.into(),
            dims,
        }
    }

    /// Create an InvalidDomain error.
    pub fn invalid_domain(reason: impl Into<String>) -> Self {
        Self::InvalidDomain(reason.into())
    }

    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(expected: &[usize], found: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            found: found.to_vec(),
        }
    }
}
