//! Scan conversion of lines and polygons.
//!
//! Every rasterizer takes its geometry plus a pixel sink (any
//! `FnMut(Vertex)`) and calls the sink once per produced pixel, inline and
//! in a deterministic order. Nothing is retained between calls.
//!
//! # Algorithms
//!
//! - **Midpoint line**: integer decision variable, one opaque pixel per step
//! - **Coverage line**: two pixels per step sharing the coverage as alpha
//! - **Scanline fill**: left/right edge cursors with Gouraud color interpolation
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.
//! - Foley, J. D. et al. (1990). *Computer Graphics: Principles and Practice*, §3.6.

pub mod edge;
mod line;
mod polygon;
mod primitives;

pub use edge::Edge;
pub use line::{rasterize_aliased, rasterize_antialiased, LineAlgorithm};
pub use polygon::fill_polygon;
pub use primitives::Drawable;
