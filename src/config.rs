//! Configuration for the demo population, search, and drawing surface.

use serde::{Deserialize, Serialize};

use crate::errors::{DeckError, Result};
use crate::types::Metric;

/// Settings for the interactive nearest-neighbour demo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Number of points generated at startup.
    pub point_count: usize,
    /// Number of neighbours highlighted by a search.
    pub k: usize,
    /// Distance metric read at search time.
    pub metric: Metric,
    /// Display-only algorithm label shown in the results report.
    pub algorithm: String,
    /// Seed for the point generator; fixed so layouts are reproducible.
    pub seed: u64,
    /// Lower bound of the point radius range (inclusive).
    pub radius_min: f64,
    /// Upper bound of the point radius range (exclusive).
    pub radius_max: f64,
    /// Lower bound of the point hue band in degrees (inclusive).
    pub hue_min: f64,
    /// Upper bound of the point hue band in degrees (exclusive).
    pub hue_max: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            point_count: 200,
            k: 5,
            metric: Metric::Euclidean,
            algorithm: "HNSW".to_string(),
            seed: 42,
            radius_min: 3.0,
            radius_max: 5.0,
            hue_min: 180.0,
            hue_max: 240.0,
        }
    }
}

/// Dimensions for an offscreen drawing surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 500,
        }
    }
}

impl SurfaceConfig {
    /// Requires both dimensions to be nonzero.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(DeckError::Config(format!(
                "surface {}x{} has no area",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// Top-level configuration aggregating all sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeckConfig {
    /// Demo population and search settings.
    #[serde(default)]
    pub demo: DemoConfig,
    /// Drawing surface dimensions.
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl DeckConfig {
    /// Checks range fields the generators rely on. Sampling uses
    /// half-open ranges, so each `min` must be strictly below its `max`.
    pub fn validate(&self) -> Result<()> {
        if self.demo.radius_min >= self.demo.radius_max {
            return Err(DeckError::Config(format!(
                "radius range [{}, {}) is empty",
                self.demo.radius_min, self.demo.radius_max
            )));
        }
        if self.demo.hue_min >= self.demo.hue_max {
            return Err(DeckError::Config(format!(
                "hue band [{}, {}) is empty",
                self.demo.hue_min, self.demo.hue_max
            )));
        }
        self.surface.validate()
    }
}
