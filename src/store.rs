//! Point population for the nearest-neighbour demo.
//!
//! The population is generated once at startup and never resized. The
//! store owns the points and is the only place selection flags are
//! mutated; callers hand it the index set a search produced.

use rand::Rng;

use crate::config::DemoConfig;
use crate::types::{Bounds, Hsl, Point};

const POINT_SATURATION: f64 = 0.70;
const POINT_LIGHTNESS: f64 = 0.60;

/// Owns the generated demo points and their selection flags.
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Generates `config.point_count` points uniformly inside `bounds`,
    /// with radii from the configured range and hues from the configured
    /// band. Pure generation; the caller owns the store.
    pub fn generate<R: Rng>(config: &DemoConfig, bounds: Bounds, rng: &mut R) -> Self {
        let mut points = Vec::with_capacity(config.point_count);
        for _ in 0..config.point_count {
            points.push(Point {
                x: rng.gen_range(0.0..bounds.width),
                y: rng.gen_range(0.0..bounds.height),
                radius: rng.gen_range(config.radius_min..config.radius_max),
                color: Hsl {
                    h: rng.gen_range(config.hue_min..config.hue_max),
                    s: POINT_SATURATION,
                    l: POINT_LIGHTNESS,
                },
                selected: false,
            });
        }
        Self { points }
    }

    /// Wraps an explicit point sequence, e.g. for scripted scenarios.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The stored points in generation order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the store holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Clears every selection flag.
    pub fn clear_selection(&mut self) {
        for p in &mut self.points {
            p.selected = false;
        }
    }

    /// Marks the given indices selected. Prior flags are untouched, so
    /// callers clear first when replacing a selection. Out-of-range
    /// indices are skipped.
    pub fn apply_selection<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        for i in indices {
            if let Some(p) = self.points.get_mut(i) {
                p.selected = true;
            }
        }
    }

    /// Indices currently flagged as selected, in generation order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.selected)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of points currently flagged as selected.
    pub fn selected_count(&self) -> usize {
        self.points.iter().filter(|p| p.selected).count()
    }
}
