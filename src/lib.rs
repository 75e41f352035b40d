//! # Trueno-Raster
//!
//! 2D scan conversion: turns lines and polygons into streams of colored
//! pixel positions.
//!
//! The three rasterizers never own a pixel buffer. Each one takes the
//! geometry plus a caller-supplied sink (`FnMut(Vertex)`) and invokes it
//! once per produced pixel, synchronously and in a fixed order. A
//! [`Framebuffer`](framebuffer::Framebuffer) is the ready-made sink.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let mut fb = Framebuffer::centered(10)?;
//! fb.clear(Rgba::WHITE);
//!
//! let gray = Rgba::GRAY;
//! rasterize_aliased(
//!     Vertex::with_color(-8.0, -3.0, gray),
//!     Vertex::with_color(7.0, 5.0, gray),
//!     fb.sink(),
//! );
//!
//! let triangle = [
//!     Vertex::with_color(-5.0, -5.0, Rgba::RED),
//!     Vertex::with_color(5.0, -5.0, Rgba::GREEN),
//!     Vertex::with_color(0.0, 5.0, Rgba::BLUE),
//! ];
//! fill_polygon(&triangle, fb.sink())?;
//! assert!(fb.covered_pixels() > 0);
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `config` (default): YAML configuration via serde
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Gouraud, H. (1971). "Continuous Shading of Curved Surfaces." IEEE Trans. Computers.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color type and per-channel arithmetic.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (vertices, lines, polygons) and orientation.
pub mod geometry;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Line and polygon rasterization.
pub mod render;

// ============================================================================
// Configuration
// ============================================================================

/// YAML configuration for rendering sessions.
#[cfg(feature = "config")]
#[cfg_attr(docsrs, doc(cfg(feature = "config")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    #[cfg(feature = "config")]
    pub use crate::config::RasterConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Polygon, Vertex};
    pub use crate::render::{
        fill_polygon, rasterize_aliased, rasterize_antialiased, Drawable, LineAlgorithm,
    };
}
