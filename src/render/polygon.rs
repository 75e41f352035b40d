//! Scanline polygon fill with Gouraud-style color interpolation.
//!
//! The sweep starts at the lowest vertex and walks two boundaries upward:
//! the left one through decreasing vertex indices, the right one through
//! increasing indices. Each scanline fills the pixel centers in
//! `[ceil(left.x), ceil(right.x))`, with color interpolated along both
//! boundaries and then across the span.
//!
//! Winding is normalized to counter-clockwise first, so both vertex orders
//! produce the same pixels. The sweep assumes each scanline crosses the
//! boundary at most twice, which holds for convex and y-monotone polygons.

use crate::error::Result;
use crate::geometry::{is_counter_clockwise, lowest_vertex_index, validate, Vertex};
use crate::render::edge::Edge;

/// Direction a boundary walks around the vertex loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    /// Decreasing indices (the left boundary of a CCW loop).
    Backward,
    /// Increasing indices (the right boundary of a CCW loop).
    Forward,
}

/// One side of the sweep: the vertex it is heading toward and the edge
/// cursor interpolating toward it.
#[derive(Debug)]
struct Boundary {
    index: usize,
    walk: Walk,
    edge: Edge,
}

impl Boundary {
    fn new(index: usize, walk: Walk) -> Self {
        Self {
            index,
            walk,
            edge: Edge::default(),
        }
    }

    fn next_index(&self, n: usize) -> usize {
        match self.walk {
            Walk::Backward => (self.index + n - 1) % n,
            Walk::Forward => (self.index + 1) % n,
        }
    }

    /// First scanline this boundary no longer covers.
    fn end_y(&self, vertices: &[Vertex]) -> f64 {
        vertices[self.index].y.ceil()
    }

    /// Move past every vertex at or below `scan_y`, re-seeding the edge
    /// cursor on the first edge that reaches above it.
    ///
    /// Zero-height edges are consumed without building a cursor, so no
    /// delta is ever computed over a zero span.
    fn advance(&mut self, vertices: &[Vertex], scan_y: f64, remaining: &mut usize) {
        let mut y = self.end_y(vertices);
        while y <= scan_y && *remaining > 0 {
            let next = self.next_index(vertices.len());
            y = vertices[next].y.ceil();
            if y > scan_y {
                self.edge = Edge::along_y(vertices[self.index], vertices[next], scan_y);
            }
            self.index = next;
            *remaining -= 1;
        }
    }
}

/// Fill a polygon, invoking `sink` once per covered pixel center.
///
/// Pixels are emitted bottom scanline first and left to right within a
/// scanline. Every emitted vertex has integer coordinates and a color
/// interpolated from the polygon's vertex colors.
///
/// # Errors
///
/// Returns [`Error::DegeneratePolygon`](crate::Error::DegeneratePolygon)
/// for fewer than three vertices and
/// [`Error::NonFiniteVertex`](crate::Error::NonFiniteVertex) for NaN or
/// infinite coordinates. The sink is never called when an error is
/// returned.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Vertex;
/// use trueno_raster::render::fill_polygon;
///
/// let square = [
///     Vertex::new(0.0, 0.0),
///     Vertex::new(4.0, 0.0),
///     Vertex::new(4.0, 4.0),
///     Vertex::new(0.0, 4.0),
/// ];
/// let mut count = 0;
/// fill_polygon(&square, |_| count += 1).unwrap();
/// assert_eq!(count, 16);
/// ```
pub fn fill_polygon<S: FnMut(Vertex)>(vertices: &[Vertex], mut sink: S) -> Result<()> {
    validate(vertices)?;

    let mut vertices = vertices.to_vec();
    let reversed = !is_counter_clockwise(&vertices);
    if reversed {
        vertices.reverse();
    }
    let Some(lowest) = lowest_vertex_index(&vertices) else {
        return Ok(());
    };

    let mut scan_y = vertices[lowest].y.ceil();
    tracing::debug!(
        vertices = vertices.len(),
        lowest,
        scan_y,
        reversed,
        "filling polygon"
    );

    let mut remaining = vertices.len();
    let mut left = Boundary::new(lowest, Walk::Backward);
    let mut right = Boundary::new(lowest, Walk::Forward);
    let mut emitted = 0usize;

    while remaining > 0 {
        left.advance(&vertices, scan_y, &mut remaining);
        right.advance(&vertices, scan_y, &mut remaining);

        while scan_y < left.end_y(&vertices) && scan_y < right.end_y(&vertices) {
            emitted += fill_span(&left.edge, &right.edge, scan_y, &mut sink);
            left.edge.step();
            right.edge.step();
            scan_y += 1.0;
        }
    }

    tracing::debug!(pixels = emitted, "polygon filled");
    Ok(())
}

/// Emit the pixel centers between two boundary cursors on one scanline.
fn fill_span<S: FnMut(Vertex)>(left: &Edge, right: &Edge, y: f64, sink: &mut S) -> usize {
    let lx = left.position.x.ceil();
    let rx = right.position.x.ceil();
    if lx >= rx {
        return 0;
    }
    tracing::trace!(y, lx, rx, "span");

    let mut span = Edge::along_x(left.position, right.position, lx);
    let (start, end) = (lx as i64, rx as i64);
    for x in start..end {
        sink(Vertex::with_color(x as f64, y, span.color()));
        span.step();
    }
    (end - start) as usize
}
