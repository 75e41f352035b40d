//! Incremental edge cursor.
//!
//! An [`Edge`] walks a straight segment one unit at a time along a chosen
//! axis, carrying an interpolated position and color. The polygon filler
//! uses one per boundary (stepping once per scanline) and one per span
//! (stepping once per pixel); the line rasterizers use one to ramp color.

use crate::color::Rgba;
use crate::geometry::Vertex;

/// Current interpolated point plus the per-step increment.
///
/// `delta.color` is a color *difference*, added channel by channel on each
/// [`step`](Edge::step).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edge {
    /// Current interpolated point.
    pub position: Vertex,
    /// Increment applied to `position` by each step.
    pub delta: Vertex,
}

impl Edge {
    /// Create an edge from an explicit position and delta.
    #[must_use]
    pub const fn new(position: Vertex, delta: Vertex) -> Self {
        Self { position, delta }
    }

    /// Cursor from `start` to `end` walking one unit of `y` per step,
    /// positioned on scanline `y`.
    ///
    /// The caller guarantees `end.y != start.y`; zero-height edges are
    /// skipped before an edge is ever built for them.
    #[must_use]
    pub fn along_y(start: Vertex, end: Vertex, y: f64) -> Self {
        let span = end.y - start.y;
        let delta = Vertex::with_color(
            (end.x - start.x) / span,
            1.0,
            (end.color - start.color) / span,
        );
        Self::seeded(start, delta, y - start.y)
    }

    /// Cursor from `start` to `end` walking one unit of `x` per step,
    /// positioned on column `x`.
    ///
    /// The caller guarantees `end.x != start.x`.
    #[must_use]
    pub fn along_x(start: Vertex, end: Vertex, x: f64) -> Self {
        let span = end.x - start.x;
        let delta = Vertex::with_color(
            1.0,
            (end.y - start.y) / span,
            (end.color - start.color) / span,
        );
        Self::seeded(start, delta, x - start.x)
    }

    /// Cursor that reaches `end` from `start` in exactly `steps` steps.
    ///
    /// With zero steps the delta is zero and the cursor stays on `start`.
    #[must_use]
    pub fn spanning(start: Vertex, end: Vertex, steps: f64) -> Self {
        if steps == 0.0 {
            return Self::new(start, Vertex::with_color(0.0, 0.0, Rgba::TRANSPARENT));
        }
        let delta = Vertex::with_color(
            (end.x - start.x) / steps,
            (end.y - start.y) / steps,
            (end.color - start.color) / steps,
        );
        Self::new(start, delta)
    }

    /// Advance by one step.
    pub fn step(&mut self) {
        self.position += self.delta;
        self.position.color += self.delta.color;
    }

    /// Interpolated color at the current position.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        self.position.color
    }

    fn seeded(start: Vertex, delta: Vertex, amount: f64) -> Self {
        let position = Vertex::with_color(
            start.x + delta.x * amount,
            start.y + delta.y * amount,
            start.color + delta.color * amount,
        );
        Self::new(position, delta)
    }
}
