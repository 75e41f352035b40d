//! Line rasterization: midpoint (aliased) and weighted-coverage (antialiased).
//!
//! Both algorithms first put the endpoints in canonical order (left to
//! right, bottom to top for vertical lines). After that only four slope
//! classes remain, one per [`Octant`] variant.
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae
//!   with a digital plotter." (midpoint formulation)
//! - Wu, X. (1991). "An Efficient Antialiasing Technique." SIGGRAPH '91.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::geometry::Vertex;
use crate::render::edge::Edge;

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "kebab-case"))]
pub enum LineAlgorithm {
    /// Integer midpoint algorithm, one opaque pixel per step.
    #[default]
    #[cfg_attr(feature = "config", serde(alias = "bresenham"))]
    Midpoint,
    /// Two-pixel coverage split per step.
    #[cfg_attr(feature = "config", serde(alias = "aa", alias = "wu"))]
    AntiAliasing,
}

impl LineAlgorithm {
    /// Every available algorithm, in menu order.
    pub const ALL: [Self; 2] = [Self::Midpoint, Self::AntiAliasing];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Midpoint => "midpoint",
            Self::AntiAliasing => "anti-aliasing",
        }
    }

    /// Rasterize the segment `start`-`end` with this algorithm.
    pub fn apply<S: FnMut(Vertex)>(self, start: Vertex, end: Vertex, sink: S) {
        match self {
            Self::Midpoint => rasterize_aliased(start, end, sink),
            Self::AntiAliasing => rasterize_antialiased(start, end, sink),
        }
    }
}

impl fmt::Display for LineAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LineAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "midpoint" | "bresenham" => Ok(Self::Midpoint),
            "anti-aliasing" | "antialiasing" | "aa" | "wu" => Ok(Self::AntiAliasing),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Slope class of a canonically ordered segment (`dx >= 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Octant {
    /// `0 <= slope < 1`: x drives, y steps up.
    PositiveShallow,
    /// `slope >= 1` (including vertical): y drives upward, x steps right.
    PositiveSteep,
    /// `-1 < slope < 0`: x drives, y steps down.
    NegativeShallow,
    /// `slope <= -1`: y drives downward, x steps right.
    NegativeSteep,
}

impl Octant {
    fn classify(dx: f64, dy: f64) -> Self {
        let steep = dy.abs() >= dx.abs();
        match (dx * dy < 0.0, steep) {
            (false, false) => Self::PositiveShallow,
            (false, true) => Self::PositiveSteep,
            (true, false) => Self::NegativeShallow,
            (true, true) => Self::NegativeSteep,
        }
    }
}

/// Swap endpoints so traversal runs left to right, or bottom to top when
/// the segment is vertical.
fn canonical(mut start: Vertex, mut end: Vertex) -> (Vertex, Vertex) {
    if start.x > end.x || (start.x == end.x && start.y > end.y) {
        std::mem::swap(&mut start, &mut end);
    }
    (start, end)
}

fn endpoints_finite(start: Vertex, end: Vertex, algorithm: LineAlgorithm) -> bool {
    if start.is_finite() && end.is_finite() {
        return true;
    }
    tracing::warn!(
        %algorithm,
        ?start,
        ?end,
        "skipping line with non-finite endpoint"
    );
    false
}

/// Integer deltas of a rounded segment, or `None` when the decision
/// variable updates (up to `2 * (|dx| + |dy|)`) would overflow `i64`.
fn integer_deltas(x0: i64, y0: i64, x1: i64, y1: i64) -> Option<(i64, i64)> {
    let dx = x1.checked_sub(x0)?;
    let dy = y1.checked_sub(y0)?;
    dx.checked_abs()?
        .checked_add(dy.checked_abs()?)?
        .checked_mul(2)
        .map(|_| (dx, dy))
}

/// Rasterize a segment with the midpoint algorithm.
///
/// Endpoints are rounded to the nearest pixel; every emitted pixel is an
/// integer position, including both rounded endpoints. The emitted color
/// ramps linearly from `start.color` to `end.color`.
///
/// Ties (decision variable exactly on its threshold) do not step the
/// secondary axis for positive shallow and negative steep slopes, and do
/// step it for positive steep and negative shallow slopes.
///
/// Segments whose rounded deltas do not fit the `i64` decision variable
/// emit nothing and log a warning.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Vertex;
/// use trueno_raster::render::rasterize_aliased;
///
/// let mut pixels = Vec::new();
/// rasterize_aliased(Vertex::new(0.0, 0.0), Vertex::new(3.0, 0.0), |v| pixels.push((v.x, v.y)));
/// assert_eq!(pixels, vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
/// ```
pub fn rasterize_aliased<S: FnMut(Vertex)>(start: Vertex, end: Vertex, mut sink: S) {
    if !endpoints_finite(start, end, LineAlgorithm::Midpoint) {
        return;
    }
    let (start, end) = canonical(start, end);
    let (start, end) = (start.rounded(), end.rounded());

    let (x0, y0) = (start.x as i64, start.y as i64);
    let (x1, y1) = (end.x as i64, end.y as i64);
    let Some((dx, dy)) = integer_deltas(x0, y0, x1, y1) else {
        tracing::warn!(x0, y0, x1, y1, "skipping midpoint line with out-of-range deltas");
        return;
    };

    let octant = Octant::classify(dx as f64, dy as f64);
    let steps = dx.abs().max(dy.abs());
    tracing::debug!(?octant, x0, y0, x1, y1, steps, "midpoint line");

    // Only the color of the ramp is used; positions come from the error term.
    let mut ramp = Edge::spanning(start, end, steps as f64);
    let (mut x, mut y) = (x0, y0);
    let mut emit = |x: i64, y: i64, ramp: &Edge| {
        sink(Vertex::with_color(x as f64, y as f64, ramp.color()));
    };
    emit(x, y, &ramp);

    match octant {
        Octant::PositiveShallow => {
            let del_e = 2 * dy;
            let del_ne = 2 * (dy - dx);
            let mut d = del_e - dx;
            while x < x1 {
                if d <= 0 {
                    d += del_e;
                } else {
                    d += del_ne;
                    y += 1;
                }
                x += 1;
                ramp.step();
                emit(x, y, &ramp);
            }
        }
        Octant::PositiveSteep => {
            let del_e = -2 * dx;
            let del_ne = 2 * (dy - dx);
            let mut d = dy + del_e;
            while y < y1 {
                if d > 0 {
                    d += del_e;
                } else {
                    d += del_ne;
                    x += 1;
                }
                y += 1;
                ramp.step();
                emit(x, y, &ramp);
            }
        }
        Octant::NegativeShallow => {
            let del_e = 2 * dy;
            let del_ne = 2 * (dy + dx);
            let mut d = del_e + dx;
            while x < x1 {
                if d > 0 {
                    d += del_e;
                } else {
                    d += del_ne;
                    y -= 1;
                }
                x += 1;
                ramp.step();
                emit(x, y, &ramp);
            }
        }
        Octant::NegativeSteep => {
            let del_e = 2 * dx;
            let del_ne = 2 * (dy + dx);
            let mut d = dy + del_e;
            while y > y1 {
                if d <= 0 {
                    d += del_e;
                } else {
                    d += del_ne;
                    x += 1;
                }
                y -= 1;
                ramp.step();
                emit(x, y, &ramp);
            }
        }
    }
}

/// Rasterize a segment with two-pixel weighted coverage.
///
/// Coordinates are not rounded. At each unit step along the driving axis,
/// with `i = floor(secondary)` and `alpha = secondary - i`, two vertices are
/// emitted: one at `i` with alpha `1 - alpha`, then one at `i + 1` with
/// alpha `alpha`. The red, green and blue channels ramp from `start.color`
/// to `end.color`; the alpha channel carries coverage only.
///
/// A segment whose endpoints round to the same pixel emits that pixel
/// once, fully covered, matching the midpoint rasterizer.
///
/// This is the simplified two-pixel split, not Wu's full double-ended
/// endpoint treatment.
pub fn rasterize_antialiased<S: FnMut(Vertex)>(start: Vertex, end: Vertex, mut sink: S) {
    if !endpoints_finite(start, end, LineAlgorithm::AntiAliasing) {
        return;
    }
    let (start, end) = canonical(start, end);
    let pixel = start.rounded();
    if pixel == end.rounded() {
        tracing::trace!(?pixel, "antialiased line collapsed to a point");
        sink(pixel.recolored(start.color.with_alpha(1.0)));
        return;
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let octant = Octant::classify(dx, dy);

    // One unit along the driving axis per step: the steep classes carry
    // 1/slope in delta.x, the shallow ones carry slope in delta.y. The span
    // is never zero here since the endpoints round apart.
    let span = dx.abs().max(dy.abs());
    if !span.is_finite() {
        tracing::warn!(?start, ?end, "skipping antialiased line with unbounded span");
        return;
    }
    let mut cursor = Edge::spanning(start, end, span);

    let steps = span.floor() as u64;
    tracing::debug!(?octant, steps = steps + 1, "antialiased line");

    for _ in 0..=steps {
        let p = cursor.position;
        match octant {
            Octant::PositiveShallow | Octant::NegativeShallow => {
                let yi = p.y.floor();
                let alpha = p.y - yi;
                sink(Vertex::with_color(p.x, yi, p.color.with_alpha(1.0 - alpha)));
                sink(Vertex::with_color(p.x, yi + 1.0, p.color.with_alpha(alpha)));
            }
            Octant::PositiveSteep | Octant::NegativeSteep => {
                let xi = p.x.floor();
                let alpha = p.x - xi;
                sink(Vertex::with_color(xi, p.y, p.color.with_alpha(1.0 - alpha)));
                sink(Vertex::with_color(xi + 1.0, p.y, p.color.with_alpha(alpha)));
            }
        }
        cursor.step();
    }
}
