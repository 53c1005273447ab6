//! Distance web: a hub at the surface center connected to every nearby
//! point, each edge labelled with its rounded distance.

use plotters::coord::Shift;
use plotters::prelude::*;
use rand::Rng;

use super::{Scene, LIGHT_BLUE};
use crate::errors::Result;
use crate::render::{ACCENT, BACKGROUND};

/// Number of scattered points around the hub.
pub const POINT_COUNT: usize = 50;
/// Edges are drawn only to points closer than this.
pub const NEIGHBOR_THRESHOLD: f64 = 100.0;

const HUB_RADIUS: f64 = 8.0;

/// One point of the web, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebPoint {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
    /// Draw radius.
    pub radius: f64,
}

/// An edge from the hub to a nearby point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WebEdge {
    /// Index of the endpoint in the scene's point list.
    pub point: usize,
    /// Exact hub-to-point distance.
    pub distance: f64,
    /// Rounded distance shown as the edge label.
    pub label: u32,
}

/// The generated web layout.
#[derive(Debug, Clone)]
pub struct DistanceWebScene {
    points: Vec<WebPoint>,
    hub: WebPoint,
}

impl DistanceWebScene {
    /// Scatters points across a `width` x `height` surface and places
    /// the hub at its center.
    pub fn generate<R: Rng>(width: u32, height: u32, rng: &mut R) -> Self {
        let points = (0..POINT_COUNT)
            .map(|_| WebPoint {
                x: rng.gen_range(0.0..f64::from(width)),
                y: rng.gen_range(0.0..f64::from(height)),
                radius: rng.gen_range(4.0..8.0),
            })
            .collect();
        let hub = WebPoint {
            x: f64::from(width) / 2.0,
            y: f64::from(height) / 2.0,
            radius: HUB_RADIUS,
        };
        Self { points, hub }
    }

    /// The scattered points.
    pub fn points(&self) -> &[WebPoint] {
        &self.points
    }

    /// The center hub.
    pub fn hub(&self) -> WebPoint {
        self.hub
    }

    /// Edges from the hub to every point inside the threshold, with
    /// rounded distance labels.
    pub fn edges(&self) -> Vec<WebEdge> {
        self.points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                let dx = p.x - self.hub.x;
                let dy = p.y - self.hub.y;
                let distance = dx.hypot(dy);
                if distance < NEIGHBOR_THRESHOLD {
                    Some(WebEdge {
                        point: i,
                        distance,
                        label: distance.round() as u32,
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}

impl Scene for DistanceWebScene {
    fn name(&self) -> &'static str {
        "distance-web"
    }

    fn draw(&self, root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()> {
        root.fill(&BACKGROUND)?;

        for p in &self.points {
            root.draw(&Circle::new(
                (p.x as i32, p.y as i32),
                p.radius as i32,
                LIGHT_BLUE.mix(0.6).filled(),
            ))?;
        }

        let hub_px = (self.hub.x as i32, self.hub.y as i32);
        for edge in self.edges() {
            let p = self.points[edge.point];
            root.draw(&PathElement::new(
                vec![hub_px, (p.x as i32, p.y as i32)],
                WHITE.mix(0.2).stroke_width(1),
            ))?;

            let mid = (
                ((self.hub.x + p.x) / 2.0) as i32,
                ((self.hub.y + p.y) / 2.0) as i32,
            );
            root.draw(&Text::new(
                edge.label.to_string(),
                mid,
                ("sans-serif", 12).into_font().color(&WHITE.mix(0.7)),
            ))?;
        }

        root.draw(&Circle::new(hub_px, HUB_RADIUS as i32, ACCENT.filled()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn hub_sits_at_the_center() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let scene = DistanceWebScene::generate(640, 360, &mut rng);
        assert_eq!(scene.hub().x, 320.0);
        assert_eq!(scene.hub().y, 180.0);
        assert_eq!(scene.points().len(), POINT_COUNT);
        for p in scene.points() {
            assert!(p.radius >= 4.0 && p.radius < 8.0);
        }
    }

    #[test]
    fn edges_respect_the_threshold() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let scene = DistanceWebScene::generate(640, 360, &mut rng);

        let edges = scene.edges();
        for edge in &edges {
            assert!(edge.distance < NEIGHBOR_THRESHOLD);
            assert_eq!(edge.label, edge.distance.round() as u32);
        }

        // Points beyond the threshold get no edge.
        let connected: Vec<usize> = edges.iter().map(|e| e.point).collect();
        for (i, p) in scene.points().iter().enumerate() {
            let d = (p.x - scene.hub().x).hypot(p.y - scene.hub().y);
            assert_eq!(connected.contains(&i), d < NEIGHBOR_THRESHOLD);
        }
    }
}
