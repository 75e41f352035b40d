//! Drawable primitives.
//!
//! Connects the geometry types to the rasterizers, so a [`Line`] or
//! [`Polygon`] can be drawn into any pixel sink, including a
//! [`Framebuffer`].

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Polygon, Vertex};
use crate::render::line::{rasterize_aliased, rasterize_antialiased, LineAlgorithm};
use crate::render::polygon::fill_polygon;

/// Trait for drawable primitives.
pub trait Drawable {
    /// Rasterize this primitive into a pixel sink.
    ///
    /// # Errors
    ///
    /// Returns an error if the primitive cannot be rasterized.
    fn draw<S: FnMut(Vertex)>(&self, sink: S) -> Result<()>;

    /// Rasterize with anti-aliasing if supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the primitive cannot be rasterized.
    fn draw_aa<S: FnMut(Vertex)>(&self, sink: S) -> Result<()> {
        // Default to non-AA drawing
        self.draw(sink)
    }

    /// Plot this primitive onto a framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the primitive cannot be rasterized.
    fn draw_to(&self, fb: &mut Framebuffer, antialiased: bool) -> Result<()> {
        if antialiased {
            self.draw_aa(fb.sink())
        } else {
            self.draw(fb.sink())
        }
    }
}

// ============================================================================
// Lines
// ============================================================================

impl Line {
    /// Rasterize with an explicitly chosen algorithm.
    pub fn draw_with<S: FnMut(Vertex)>(&self, algorithm: LineAlgorithm, sink: S) {
        algorithm.apply(self.start, self.end, sink);
    }
}

impl Drawable for Line {
    fn draw<S: FnMut(Vertex)>(&self, sink: S) -> Result<()> {
        rasterize_aliased(self.start, self.end, sink);
        Ok(())
    }

    fn draw_aa<S: FnMut(Vertex)>(&self, sink: S) -> Result<()> {
        rasterize_antialiased(self.start, self.end, sink);
        Ok(())
    }
}

// ============================================================================
// Polygons
// ============================================================================

impl Drawable for Polygon {
    fn draw<S: FnMut(Vertex)>(&self, sink: S) -> Result<()> {
        fill_polygon(self.vertices(), sink)
    }
}

// ============================================================================
// Tests
// ============================================================================
