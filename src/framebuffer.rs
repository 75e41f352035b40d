//! Core framebuffer for pixel rendering.
//!
//! An 8-bit RGBA pixel grid that doubles as the standard pixel sink for the
//! rasterizers. Rasterizer output lives in a signed, y-up coordinate space;
//! the framebuffer maps it onto rows and columns through an integer origin,
//! so a centered grid spanning `-N..=N` fits in a `(2N+1)²` buffer.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Vertex;

/// RGBA framebuffer with a movable origin.
///
/// Row `0` holds the lowest `y`; rows grow with `y`.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
    /// Buffer position of raster coordinate (0, 0).
    origin: (i64, i64),
    /// Last clear color, used to tell drawn pixels from untouched ones.
    background: Rgba,
}

impl Framebuffer {
    /// Create a new framebuffer with the given dimensions.
    ///
    /// Pixels start transparent black and the origin is the bottom-left
    /// pixel.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;
        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
            origin: (0, 0),
            background: Rgba::TRANSPARENT,
        })
    }

    /// Create a square framebuffer covering `-half_extent..=half_extent`
    /// on both axes, with raster (0, 0) at its center.
    ///
    /// # Errors
    ///
    /// Returns an error if the side length overflows `u32`.
    pub fn centered(half_extent: u32) -> Result<Self> {
        let side = half_extent
            .checked_mul(2)
            .and_then(|s| s.checked_add(1))
            .ok_or(Error::InvalidDimensions {
                width: half_extent,
                height: half_extent,
            })?;
        let mut fb = Self::new(side, side)?;
        fb.origin = (i64::from(half_extent), i64::from(half_extent));
        Ok(fb)
    }

    /// Create a centered framebuffer sized and cleared from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured grid is invalid.
    #[cfg(feature = "config")]
    pub fn from_config(config: &crate::config::RasterConfig) -> Result<Self> {
        config.validate()?;
        let mut fb = Self::centered(config.canvas.grid_size)?;
        fb.clear(config.canvas.background);
        tracing::debug!(
            grid_size = config.canvas.grid_size,
            side = fb.width,
            "framebuffer from config"
        );
        Ok(fb)
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Buffer position of raster coordinate (0, 0).
    #[must_use]
    pub const fn origin(&self) -> (i64, i64) {
        self.origin
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Get a row of pixels as a slice.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize) * 4;
        Some(&self.pixels[start..start + (self.width as usize) * 4])
    }

    /// Clear the framebuffer to a solid color.
    ///
    /// The color also becomes the background for [`covered_pixels`](Self::covered_pixels).
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_rgba8();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
        self.background = color;
    }

    /// Get the color at a specific buffer coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_rgba8([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific buffer coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_rgba8());
    }

    /// Blend a color at a specific buffer coordinate using alpha blending.
    ///
    /// Uses the standard "over" compositing operation:
    /// `out = src * src_alpha + dst * dst_alpha * (1 - src_alpha)`
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        let Some(dst) = self.get_pixel(x, y) else {
            return;
        };

        let src_a = color.a.clamp(0.0, 1.0);
        let dst_a = dst.a;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }

        let blend = |src: f64, dst: f64| (src * src_a + dst * dst_a * (1.0 - src_a)) / out_a;
        let out = Rgba::new(
            blend(color.r, dst.r),
            blend(color.g, dst.g),
            blend(color.b, dst.b),
            out_a,
        );
        self.set_pixel(x, y, out);
    }

    /// Composite a rasterized vertex onto the buffer.
    ///
    /// Coordinates are rounded to the nearest pixel and shifted by the
    /// origin; anything that lands outside the buffer is dropped.
    pub fn plot(&mut self, vertex: Vertex) {
        if let Some((x, y)) = self.to_buffer(vertex) {
            self.blend_pixel(x, y, vertex.color);
        }
    }

    /// Pixel sink that plots every vertex it receives.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    /// use trueno_raster::geometry::Vertex;
    /// use trueno_raster::render::rasterize_aliased;
    ///
    /// let mut fb = Framebuffer::centered(5).unwrap();
    /// rasterize_aliased(Vertex::new(-5.0, 0.0), Vertex::new(5.0, 0.0), fb.sink());
    /// assert_eq!(fb.covered_pixels(), 11);
    /// ```
    pub fn sink(&mut self) -> impl FnMut(Vertex) + '_ {
        move |vertex| self.plot(vertex)
    }

    /// Number of pixels that differ from the last clear color.
    #[must_use]
    pub fn covered_pixels(&self) -> usize {
        let background = self.background.to_rgba8();
        self.pixels
            .chunks_exact(4)
            .filter(|chunk| chunk[..] != background[..])
            .count()
    }

    /// Map raster coordinates to a buffer position.
    fn to_buffer(&self, vertex: Vertex) -> Option<(u32, u32)> {
        if !vertex.is_finite() {
            return None;
        }
        let v = vertex.rounded();
        let x = (v.x as i64).saturating_add(self.origin.0);
        let y = (v.y as i64).saturating_add(self.origin.1);
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        Some((x, y))
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}
