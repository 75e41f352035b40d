//! Error types for trueno-raster operations.

use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
///
/// Rasterization itself never fails part-way through a sweep; every variant
/// here is raised at the boundary, before the pixel sink sees anything.
#[derive(Error, Debug)]
pub enum Error {
    /// A polygon needs at least three vertices to enclose an area.
    #[error("Degenerate polygon: {vertices} vertices, at least 3 required")]
    DegeneratePolygon {
        /// Number of vertices supplied.
        vertices: usize,
    },

    /// A vertex coordinate is NaN or infinite.
    #[error("Non-finite vertex at index {index}")]
    NonFiniteVertex {
        /// Position of the offending vertex in the input sequence.
        index: usize,
    },

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Line algorithm name that does not match any known algorithm.
    #[error("Unknown line algorithm: {0}")]
    UnknownAlgorithm(String),

    /// Configuration parsing error with line number.
    #[error("Configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found or unreadable.
    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Invalid configuration value.
    #[error("Invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Why the value is invalid.
        message: String,
    },
}
