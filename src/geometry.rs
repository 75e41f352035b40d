//! Geometric primitives consumed by the rasterizers.
//!
//! Provides the colored [`Vertex`], the [`Line`] segment and the closed
//! [`Polygon`] loop, plus the shoelace orientation check used to normalize
//! polygon winding before a scanline sweep.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::color::Rgba;
use crate::error::{Error, Result};

/// A 2D point with an attached color.
///
/// Equality compares coordinates only. The arithmetic operators act on the
/// coordinates and carry the left operand's color through untouched.
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Color attached to this point.
    pub color: Rgba,
}

impl Vertex {
    /// Origin point (0, 0), opaque black.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new opaque black vertex.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self::with_color(x, y, Rgba::BLACK)
    }

    /// Create a new vertex with the given color.
    #[must_use]
    pub const fn with_color(x: f64, y: f64, color: Rgba) -> Self {
        Self { x, y, color }
    }

    /// Same coordinates, different color.
    #[must_use]
    pub const fn recolored(self, color: Rgba) -> Self {
        Self::with_color(self.x, self.y, color)
    }

    /// Coordinates rounded to the nearest integer pixel center.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self::with_color(self.x.round(), self.y.round(), self.color)
    }

    /// True if both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Calculate the distance to another vertex.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Neg for Vertex {
    type Output = Self;

    fn neg(self) -> Self {
        Self::with_color(-self.x, -self.y, self.color)
    }
}

impl Add for Vertex {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sub for Vertex {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl Mul<f64> for Vertex {
    type Output = Self;

    fn mul(mut self, rhs: f64) -> Self {
        self *= rhs;
        self
    }
}

impl Mul<Vertex> for f64 {
    type Output = Vertex;

    fn mul(self, rhs: Vertex) -> Vertex {
        rhs * self
    }
}

impl Div<f64> for Vertex {
    type Output = Self;

    fn div(mut self, rhs: f64) -> Self {
        self /= rhs;
        self
    }
}

impl AddAssign for Vertex {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Vertex {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl MulAssign<f64> for Vertex {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl DivAssign<f64> for Vertex {
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

/// A line segment between two vertices.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Vertex,
    /// End point.
    pub end: Vertex,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Vertex, end: Vertex) -> Self {
        Self { start, end }
    }

    /// Create an opaque black line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::new(Vertex::new(x0, y0), Vertex::new(x1, y1))
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A closed loop of at least three finite vertices.
///
/// The last vertex implicitly connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vertex>,
}

impl Polygon {
    /// Create a polygon, validating the vertex loop.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegeneratePolygon`] for fewer than three vertices and
    /// [`Error::NonFiniteVertex`] if any coordinate is NaN or infinite.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self> {
        validate(&vertices)?;
        Ok(Self { vertices })
    }

    /// The vertices in input order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; a valid polygon has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Twice the signed area (positive when counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.vertices)
    }

    /// Whether the vertices are listed counter-clockwise.
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        is_counter_clockwise(&self.vertices)
    }

    /// Consume the polygon, returning its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

impl TryFrom<Vec<Vertex>> for Polygon {
    type Error = Error;

    fn try_from(vertices: Vec<Vertex>) -> Result<Self> {
        Self::new(vertices)
    }
}

/// Check a vertex loop against the polygon preconditions.
pub(crate) fn validate(vertices: &[Vertex]) -> Result<()> {
    if vertices.len() < 3 {
        return Err(Error::DegeneratePolygon {
            vertices: vertices.len(),
        });
    }
    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(Error::NonFiniteVertex { index });
    }
    Ok(())
}

/// Shoelace sum `Σ x_i · (y_{i+1} − y_{i−1})` over a closed loop.
///
/// This is twice the signed area: positive for counter-clockwise order in
/// a y-up frame, negative for clockwise, zero for collinear loops.
///
/// # References
///
/// - Braden, B. (1986). "The Surveyor's Area Formula." *The College
///   Mathematics Journal*, 17(4), 326-337.
#[must_use]
pub fn signed_area(vertices: &[Vertex]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let prev = vertices[(i + n - 1) % n];
            let next = vertices[(i + 1) % n];
            vertices[i].x * (next.y - prev.y)
        })
        .sum()
}

/// Whether a closed loop is counter-clockwise. Zero area counts as CCW.
#[must_use]
pub fn is_counter_clockwise(vertices: &[Vertex]) -> bool {
    signed_area(vertices) >= 0.0
}

/// Index of the vertex with the smallest `y`; ties go to the first one.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn lowest_vertex_index(vertices: &[Vertex]) -> Option<usize> {
    let mut iter = vertices.iter().enumerate();
    let (mut best, mut best_y) = iter.next().map(|(i, v)| (i, v.y))?;
    for (i, v) in iter {
        if v.y < best_y {
            best = i;
            best_y = v.y;
        }
    }
    Some(best)
}
