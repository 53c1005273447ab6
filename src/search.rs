//! Ranking and top-k selection for the nearest-neighbour demo.
//!
//! The selector reports ranked indices and leaves selection mutation to
//! the caller, which applies it through the point store.

use std::cmp::Ordering;

use crate::metric::distance;
use crate::types::{Metric, Neighbor, Point, QueryPoint};

/// Ranks every point by distance to the query, ascending. The sort is
/// stable, so equal distances keep generation-index order; non-finite
/// distances compare Equal and land at an unspecified position.
pub fn rank(points: &[Point], query: QueryPoint, metric: Metric) -> Vec<Neighbor> {
    let mut results: Vec<Neighbor> = points
        .iter()
        .enumerate()
        .map(|(index, p)| Neighbor {
            index,
            distance: distance(p, query, metric),
        })
        .collect();
    results.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    results
}

/// The `min(k, |points|)` nearest neighbours of the query, in rank order.
pub fn top_k(points: &[Point], query: QueryPoint, metric: Metric, k: usize) -> Vec<Neighbor> {
    let mut results = rank(points, query, metric);
    results.truncate(k.min(points.len()));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hsl;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn pt(x: f64, y: f64) -> Point {
        Point {
            x,
            y,
            radius: 1.0,
            color: Hsl {
                h: 200.0,
                s: 0.7,
                l: 0.6,
            },
            selected: false,
        }
    }

    fn scenario_points() -> Vec<Point> {
        vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0)]
    }

    #[test]
    fn euclidean_scenario_orders_by_distance() {
        let points = scenario_points();
        let query = QueryPoint { x: 1.0, y: 0.0 };
        let top = top_k(&points, query, Metric::Euclidean, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top[0].index, 0);
        assert_eq!(top[1].index, 1);
        assert_eq!(format!("{:.2}", top[0].distance), "1.00");
        assert_eq!(format!("{:.2}", top[1].distance), "9.00");
    }

    #[test]
    fn manhattan_ties_break_by_generation_index() {
        // All three points sit at manhattan distance 10 from (5, 5).
        let points = scenario_points();
        let query = QueryPoint { x: 5.0, y: 5.0 };
        let ranked = rank(&points, query, Metric::Manhattan);

        for n in &ranked {
            assert_eq!(format!("{:.2}", n.distance), "10.00");
        }
        assert_eq!(
            ranked.iter().map(|n| n.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );

        let top = top_k(&points, query, Metric::Manhattan, 2);
        assert_eq!(
            top.iter().map(|n| n.index).collect::<Vec<_>>(),
            vec![0, 1]
        );
    }

    #[test]
    fn k_clamps_to_population_size() {
        let points = scenario_points();
        let query = QueryPoint { x: 0.0, y: 0.0 };
        assert_eq!(top_k(&points, query, Metric::Euclidean, 50).len(), 3);
        assert_eq!(top_k(&[], query, Metric::Euclidean, 5).len(), 0);
    }

    #[test]
    fn top_k_partitions_distances() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        let points: Vec<Point> = (0..120)
            .map(|_| pt(rng.gen_range(0.0..800.0), rng.gen_range(0.0..500.0)))
            .collect();
        let query = QueryPoint { x: 400.0, y: 250.0 };

        for metric in [Metric::Euclidean, Metric::Manhattan] {
            let ranked = rank(&points, query, metric);
            let k = 5;
            let max_selected = ranked[..k]
                .iter()
                .map(|n| n.distance)
                .fold(f64::MIN, f64::max);
            let min_unselected = ranked[k..]
                .iter()
                .map(|n| n.distance)
                .fold(f64::MAX, f64::min);
            assert!(
                max_selected <= min_unselected,
                "{:?}: top-{} not a partition: {} > {}",
                metric,
                k,
                max_selected,
                min_unselected
            );
        }
    }

    #[test]
    fn ranking_never_mutates_points() {
        let points = scenario_points();
        let before = points.clone();
        let _ = rank(&points, QueryPoint { x: 3.0, y: 3.0 }, Metric::Euclidean);
        assert_eq!(points, before);
    }
}
