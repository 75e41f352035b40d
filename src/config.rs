//! YAML configuration for rendering sessions.
//!
//! ```yaml
//! version: 1
//! line:
//!   algorithm: anti-aliasing
//!   color: { r: 0.5, g: 0.5, b: 0.5, a: 1.0 }
//! canvas:
//!   grid_size: 15
//!   background: { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }
//! ```
//!
//! Every field is optional and falls back to its default.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Vertex;
use crate::render::LineAlgorithm;

/// Grid half-extents offered by interactive front ends.
pub const GRID_SIZES: [u32; 5] = [10, 15, 20, 25, 30];

/// Line drawing settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineConfig {
    /// Rasterization algorithm for line segments.
    #[serde(default)]
    pub algorithm: LineAlgorithm,

    /// Stroke color for segments drawn from bare coordinates.
    #[serde(default = "default_line_color")]
    pub color: Rgba,
}

fn default_line_color() -> Rgba {
    Rgba::GRAY
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            algorithm: LineAlgorithm::default(),
            color: default_line_color(),
        }
    }
}

impl LineConfig {
    /// Rasterize a segment between two points in the configured color.
    pub fn stroke<S: FnMut(Vertex)>(&self, x0: f64, y0: f64, x1: f64, y1: f64, sink: S) {
        self.algorithm.apply(
            Vertex::with_color(x0, y0, self.color),
            Vertex::with_color(x1, y1, self.color),
            sink,
        );
    }
}

/// Canvas settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Half-extent of the centered grid; coordinates run `-N..=N`.
    #[serde(default = "default_grid_size")]
    pub grid_size: u32,

    /// Clear color.
    #[serde(default = "default_background")]
    pub background: Rgba,
}

fn default_grid_size() -> u32 {
    GRID_SIZES[0]
}
fn default_background() -> Rgba {
    Rgba::WHITE
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_size: default_grid_size(),
            background: default_background(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterConfig {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Line settings.
    #[serde(default)]
    pub line: LineConfig,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            line: LineConfig::default(),
            canvas: CanvasConfig::default(),
        }
    }
}

impl RasterConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        tracing::debug!(path = %path.display(), "loading raster config");
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails, or
    /// [`Error::ConfigInvalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map(|l| l.line()).unwrap_or(0);
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigInvalid`] naming the first offending key.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.grid_size == 0 {
            return Err(Error::ConfigInvalid {
                key: "canvas.grid_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        for (key, color) in [
            ("line.color", self.line.color),
            ("canvas.background", self.canvas.background),
        ] {
            if !color.is_finite() {
                return Err(Error::ConfigInvalid {
                    key: key.to_string(),
                    message: "color channels must be finite".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default raster config");
            Self::default()
        })
    }
}
