//! Distance metrics for the nearest-neighbour demo.
//!
//! All functions are pure: they never mutate the point or the query.

use crate::types::{Metric, Point, QueryPoint};

/// Straight-line distance.
pub fn euclidean(a: &Point, q: QueryPoint) -> f64 {
    let dx = a.x - q.x;
    let dy = a.y - q.y;
    (dx * dx + dy * dy).sqrt()
}

/// Sum of absolute coordinate differences.
pub fn manhattan(a: &Point, q: QueryPoint) -> f64 {
    (a.x - q.x).abs() + (a.y - q.y).abs()
}

/// Cosine-style dissimilarity over raw surface coordinates:
/// `1 - dot(a, q) / (|a| * |q|)`.
///
/// This is a pedagogical stand-in, not a true cosine similarity over
/// embeddings. If either operand sits at the origin the magnitude
/// product is zero and the result is non-finite (NaN or infinity);
/// callers sort such values to an unspecified position rather than
/// rejecting them.
pub fn cosine_proxy(a: &Point, q: QueryPoint) -> f64 {
    let dot = a.x * q.x + a.y * q.y;
    let mag_a = (a.x * a.x + a.y * a.y).sqrt();
    let mag_q = (q.x * q.x + q.y * q.y).sqrt();
    1.0 - dot / (mag_a * mag_q)
}

/// Distance between a point and the query under the selected metric.
pub fn distance(a: &Point, q: QueryPoint, metric: Metric) -> f64 {
    match metric {
        Metric::Euclidean => euclidean(a, q),
        Metric::Manhattan => manhattan(a, q),
        Metric::CosineProxy => cosine_proxy(a, q),
    }
}
