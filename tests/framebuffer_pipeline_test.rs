//! Framebuffer Pipeline Tests - Config to Canvas to Pixels
//!
//! Loads a YAML configuration from disk, builds the centered canvas it
//! describes and draws through the framebuffer sink.
//!
//! Run: cargo test --test framebuffer_pipeline_test

#![cfg(feature = "config")]
#![allow(clippy::unwrap_used)]

use std::io::Write;

use trueno_raster::config::{RasterConfig, GRID_SIZES};
use trueno_raster::prelude::*;

fn write_config(yaml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn canvas_matches_configured_grid() {
    let file = write_config("canvas:\n  grid_size: 15\n");
    let config = RasterConfig::load(file.path()).unwrap();
    let fb = Framebuffer::from_config(&config).unwrap();

    assert_eq!(fb.width(), 31);
    assert_eq!(fb.height(), 31);
    assert_eq!(fb.origin(), (15, 15));
    assert_eq!(fb.get_pixel(0, 0), Some(Rgba::WHITE));
    assert_eq!(fb.covered_pixels(), 0);
}

#[test]
fn every_menu_grid_size_builds_a_canvas() {
    for size in GRID_SIZES {
        let mut config = RasterConfig::new();
        config.canvas.grid_size = size;
        let fb = Framebuffer::from_config(&config).unwrap();
        assert_eq!(fb.width(), 2 * size + 1);
    }
}

#[test]
fn invalid_grid_is_rejected_by_canvas() {
    let mut config = RasterConfig::new();
    config.canvas.grid_size = 0;
    assert!(matches!(
        Framebuffer::from_config(&config),
        Err(Error::ConfigInvalid { .. })
    ));
}

#[test]
fn configured_stroke_spans_the_grid() {
    let file = write_config(
        r#"
line:
  algorithm: midpoint
  color: { r: 0.0, g: 0.0, b: 1.0, a: 1.0 }
canvas:
  grid_size: 10
  background: { r: 0.0, g: 0.0, b: 0.0, a: 1.0 }
"#,
    );
    let config = RasterConfig::load(file.path()).unwrap();
    let mut fb = Framebuffer::from_config(&config).unwrap();

    config.line.stroke(-10.0, -10.0, 10.0, 10.0, fb.sink());

    assert_eq!(fb.covered_pixels(), 21);
    for i in 0..21 {
        assert_eq!(fb.get_pixel(i, i), Some(Rgba::BLUE));
    }
}

#[test]
fn antialiased_stroke_blends_into_background() {
    let mut config = RasterConfig::parse("line:\n  algorithm: anti-aliasing\n").unwrap();
    config.line.color = Rgba::BLACK;
    let mut fb = Framebuffer::from_config(&config).unwrap();

    // Slope 1/2: every other column sits half-way between two rows
    config.line.stroke(0.0, 0.0, 4.0, 2.0, fb.sink());

    let [r0, ..] = fb.get_pixel(10, 10).unwrap().to_rgba8();
    let [r1, ..] = fb.get_pixel(11, 10).unwrap().to_rgba8();
    let [r2, ..] = fb.get_pixel(11, 11).unwrap().to_rgba8();
    assert_eq!(r0, 0);
    assert_eq!(r1, 128);
    assert_eq!(r2, 128);
}

#[test]
fn polygon_and_outline_share_the_canvas() {
    let config = RasterConfig::new();
    let mut fb = Framebuffer::from_config(&config).unwrap();

    let diamond = Polygon::new(vec![
        Vertex::with_color(0.0, -5.0, Rgba::RED),
        Vertex::with_color(5.0, 0.0, Rgba::RED),
        Vertex::with_color(0.0, 5.0, Rgba::RED),
        Vertex::with_color(-5.0, 0.0, Rgba::RED),
    ])
    .unwrap();
    diamond.draw_to(&mut fb, false).unwrap();
    let filled = fb.covered_pixels();
    assert!(filled > 0);
    assert_eq!(fb.get_pixel(10, 10), Some(Rgba::RED));

    // Outline on top of the fill: only the rim pixels outside the fill are new
    let rim = diamond.vertices();
    for i in 0..rim.len() {
        let line = Line::new(rim[i], rim[(i + 1) % rim.len()]);
        line.draw_to(&mut fb, false).unwrap();
    }
    assert!(fb.covered_pixels() >= filled);
    assert_eq!(fb.get_pixel(10, 15), Some(Rgba::RED));
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let config = RasterConfig::load_or_default("/definitely/not/here.yaml");
    assert_eq!(config, RasterConfig::default());
}
