//! Common types shared across the demo, scenes, and deck.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// An HSL color token carried by each point.
///
/// Stored as plain components so the data model stays independent of the
/// rendering backend; the render pipeline converts to backend colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub h: f64,
    /// Saturation, [0, 1].
    pub s: f64,
    /// Lightness, [0, 1].
    pub l: f64,
}

/// A single 2-D demo point. Identity is its index in the generated
/// sequence; `selected` is the only mutable field.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    /// Horizontal surface coordinate.
    pub x: f64,
    /// Vertical surface coordinate.
    pub y: f64,
    /// Draw radius in surface units.
    pub radius: f64,
    /// Stored fill color.
    pub color: Hsl,
    /// Whether the last search marked this point as a nearest neighbour.
    pub selected: bool,
}

/// The user-chosen reference location for a search. At most one exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryPoint {
    /// Horizontal surface coordinate.
    pub x: f64,
    /// Vertical surface coordinate.
    pub y: f64,
}

/// One ranked search result: a point index paired with its distance to
/// the query. Produced fresh on every search and discarded after the
/// selection is applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Neighbor {
    /// Index of the point in the store's sequence.
    pub index: usize,
    /// Distance to the query under the metric used for the search.
    pub distance: f64,
}

/// Distance metric for the nearest-neighbour demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    /// Straight-line distance.
    Euclidean,
    /// Sum of absolute coordinate differences.
    Manhattan,
    /// 1 - dot/(|a||b|) over raw surface coordinates. A pedagogical
    /// stand-in, not a true cosine similarity over embeddings.
    CosineProxy,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
            Metric::CosineProxy => "cosine-proxy",
        };
        write!(f, "{}", name)
    }
}

/// Rectangular sampling bounds for point generation, anchored at the
/// surface origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Width in surface units.
    pub width: f64,
    /// Height in surface units.
    pub height: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_display_names() {
        assert_eq!(Metric::Euclidean.to_string(), "euclidean");
        assert_eq!(Metric::Manhattan.to_string(), "manhattan");
        assert_eq!(Metric::CosineProxy.to_string(), "cosine-proxy");
    }

    #[test]
    fn metric_serde_round() {
        let m: Metric = serde_json::from_str("\"cosine-proxy\"").unwrap();
        assert_eq!(m, Metric::CosineProxy);
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"cosine-proxy\"");
    }
}
