//! Rasterization Tests - Pixel-Exact Behaviour of the Public API
//!
//! Exercises the three rasterizers through the crate's public surface only,
//! with known reference outputs and property checks across random input.
//!
//! Run: cargo test --test rasterization_test

#![allow(clippy::unwrap_used, clippy::float_cmp)]

use std::collections::BTreeSet;

use approx::assert_relative_eq;
use proptest::prelude::*;
use trueno_raster::prelude::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("trueno_raster=trace"))
        .with_test_writer()
        .try_init();
}

fn aliased(start: (f64, f64), end: (f64, f64)) -> Vec<(i64, i64)> {
    let mut out = Vec::new();
    rasterize_aliased(Vertex::new(start.0, start.1), Vertex::new(end.0, end.1), |v| {
        out.push((v.x as i64, v.y as i64));
    });
    out
}

// ============================================================================
// REFERENCE OUTPUTS
// ============================================================================

#[test]
fn aliased_horizontal_segment() {
    init_tracing();
    assert_eq!(aliased((0.0, 0.0), (3.0, 0.0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn aliased_diagonal_segment() {
    init_tracing();
    assert_eq!(aliased((0.0, 0.0), (3.0, 3.0)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
}

#[test]
fn antialiased_segment_splits_coverage() {
    init_tracing();
    let mut calls = Vec::new();
    rasterize_antialiased(Vertex::new(0.0, 0.0), Vertex::new(4.0, 2.0), |v| calls.push(v));

    assert_eq!(calls.len(), 10, "5 driving steps, 2 calls each");
    for pair in calls.chunks(2) {
        assert_eq!(pair[0].x, pair[1].x);
        assert_eq!(pair[1].y, pair[0].y + 1.0);
        assert_relative_eq!(pair[0].color.a + pair[1].color.a, 1.0, epsilon = 1e-12);
    }
}

#[test]
fn square_fill_covers_exactly_its_interior() {
    init_tracing();
    let color = Rgba::rgb(0.2, 0.4, 0.6);
    let square = [
        Vertex::with_color(0.0, 0.0, color),
        Vertex::with_color(4.0, 0.0, color),
        Vertex::with_color(4.0, 4.0, color),
        Vertex::with_color(0.0, 4.0, color),
    ];

    let mut pixels = BTreeSet::new();
    fill_polygon(&square, |v| {
        assert_eq!(v.color, color);
        pixels.insert((v.x as i64, v.y as i64));
    })
    .unwrap();

    let expected: BTreeSet<_> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
    assert_eq!(pixels, expected);
}

#[test]
fn two_vertex_polygon_is_rejected_before_sink() {
    init_tracing();
    let mut touched = false;
    let result = fill_polygon(&[Vertex::new(0.0, 0.0), Vertex::new(1.0, 1.0)], |_| {
        touched = true;
    });

    assert!(matches!(result, Err(Error::DegeneratePolygon { vertices: 2 })));
    assert!(!touched, "sink must not run for rejected input");
}

// ============================================================================
// EDGE CASES
// ============================================================================

#[test]
fn degenerate_segment_emits_single_pixel() {
    assert_eq!(aliased((2.0, 2.0), (2.0, 2.0)), vec![(2, 2)]);

    let mut calls = 0;
    rasterize_antialiased(Vertex::new(2.0, 2.0), Vertex::new(2.0, 2.0), |v| {
        assert_eq!(v.color.a, 1.0);
        calls += 1;
    });
    assert_eq!(calls, 1);
}

#[test]
fn segment_inside_one_pixel_emits_it_once_for_both_algorithms() {
    let (start, end) = (Vertex::new(3.8, -1.2), Vertex::new(4.3, -0.9));
    assert_eq!(aliased((3.8, -1.2), (4.3, -0.9)), vec![(4, -1)]);

    let mut calls = Vec::new();
    rasterize_antialiased(start, end, |v| calls.push(v));
    assert_eq!(calls.len(), 1);
    assert_eq!((calls[0].x, calls[0].y), (4.0, -1.0));
    assert_eq!(calls[0].color.a, 1.0);
}

#[test]
fn vertical_segments_do_not_divide_by_zero() {
    assert_eq!(aliased((0.0, 0.0), (0.0, 2.0)), vec![(0, 0), (0, 1), (0, 2)]);

    let mut calls = Vec::new();
    rasterize_antialiased(Vertex::new(0.0, 2.0), Vertex::new(0.0, 0.0), |v| calls.push(v));
    assert!(calls.iter().all(|v| v.is_finite() && v.color.is_finite()));
    assert_eq!(calls.len(), 6);
}

#[test]
fn trapezoid_with_flat_top_and_bottom() {
    let trapezoid = [
        Vertex::new(0.0, 0.0),
        Vertex::new(6.0, 0.0),
        Vertex::new(4.0, 2.0),
        Vertex::new(2.0, 2.0),
    ];
    let mut rows: Vec<Vec<i64>> = vec![Vec::new(); 2];
    fill_polygon(&trapezoid, |v| rows[v.y as usize].push(v.x as i64)).unwrap();

    assert_eq!(rows[0], vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(rows[1], vec![1, 2, 3, 4]);
}

#[test]
fn polygon_type_and_free_function_agree() {
    let vertices = vec![
        Vertex::new(-3.0, -1.0),
        Vertex::new(3.0, -2.0),
        Vertex::new(1.0, 4.0),
    ];
    let mut direct = Vec::new();
    fill_polygon(&vertices, |v| direct.push(v)).unwrap();

    let polygon = Polygon::new(vertices).unwrap();
    let mut drawn = Vec::new();
    polygon.draw(|v| drawn.push(v)).unwrap();

    assert_eq!(direct, drawn);
    assert!(!direct.is_empty());
}

#[test]
fn algorithm_selection_by_name() {
    let algorithm: LineAlgorithm = "Anti-Aliasing".parse().unwrap();
    let mut calls = 0;
    algorithm.apply(Vertex::new(0.0, 0.0), Vertex::new(4.0, 2.0), |_| calls += 1);
    assert_eq!(calls, 10);

    assert!("scanline".parse::<LineAlgorithm>().is_err());
}

// ============================================================================
// PROPERTIES
// ============================================================================

fn arb_point() -> impl Strategy<Value = Vertex> {
    (-40.0f64..40.0, -40.0f64..40.0).prop_map(|(x, y)| Vertex::new(x, y))
}

fn arb_convex_polygon() -> impl Strategy<Value = Vec<Vertex>> {
    // Points on a circle in angular order form a convex polygon.
    (3usize..9, 2.0f64..20.0, -10.0f64..10.0, -10.0f64..10.0, 0.0f64..1.0).prop_map(
        |(n, radius, cx, cy, phase)| {
            (0..n)
                .map(|i| {
                    let angle = std::f64::consts::TAU * (i as f64 + phase) / n as f64;
                    Vertex::new(cx + radius * angle.cos(), cy + radius * angle.sin())
                })
                .collect()
        },
    )
}

fn fill_set(vertices: &[Vertex]) -> BTreeSet<(i64, i64)> {
    let mut out = BTreeSet::new();
    fill_polygon(vertices, |v| {
        out.insert((v.x as i64, v.y as i64));
    })
    .unwrap();
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_aliased_endpoint_swap_same_pixels(a in arb_point(), b in arb_point()) {
        let mut forward = BTreeSet::new();
        rasterize_aliased(a, b, |v| { forward.insert((v.x as i64, v.y as i64)); });
        let mut backward = BTreeSet::new();
        rasterize_aliased(b, a, |v| { backward.insert((v.x as i64, v.y as i64)); });
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_aliased_pixels_are_connected(a in arb_point(), b in arb_point()) {
        let mut pixels = Vec::new();
        rasterize_aliased(a, b, |v| pixels.push((v.x as i64, v.y as i64)));
        for w in pixels.windows(2) {
            prop_assert!((w[1].0 - w[0].0).abs() <= 1);
            prop_assert!((w[1].1 - w[0].1).abs() <= 1);
            prop_assert!(w[0] != w[1]);
        }
    }

    #[test]
    fn prop_fill_winding_invariance(polygon in arb_convex_polygon()) {
        let reversed: Vec<_> = polygon.iter().rev().copied().collect();
        prop_assert_eq!(fill_set(&polygon), fill_set(&reversed));
    }

    #[test]
    fn prop_fill_never_repeats_a_pixel(polygon in arb_convex_polygon()) {
        let mut seen = BTreeSet::new();
        let mut repeated = false;
        fill_polygon(&polygon, |v| repeated |= !seen.insert((v.x as i64, v.y as i64))).unwrap();
        prop_assert!(!repeated);
    }

    #[test]
    fn prop_fill_rows_are_contiguous(polygon in arb_convex_polygon()) {
        let mut last: Option<(i64, i64)> = None;
        let mut ok = true;
        fill_polygon(&polygon, |v| {
            let p = (v.y as i64, v.x as i64);
            if let Some(prev) = last {
                ok &= p.0 > prev.0 || (p.0 == prev.0 && p.1 == prev.1 + 1);
            }
            last = Some(p);
        }).unwrap();
        prop_assert!(ok);
    }
}
