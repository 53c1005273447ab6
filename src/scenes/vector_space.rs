//! Vector-space scatter: points floating at random depths, with a few
//! rays drawn from the scene origin to suggest vectors.

use plotters::coord::Shift;
use plotters::prelude::*;
use rand::Rng;

use super::{Scene, LIGHT_BLUE};
use crate::errors::Result;
use crate::render::BACKGROUND;

/// Number of scattered points.
pub const POINT_COUNT: usize = 20;
/// How many of the first points get an origin ray.
pub const RAY_COUNT: usize = 5;

/// Corner the rays start from, in percent coordinates.
const ORIGIN: (f64, f64) = (10.0, 10.0);
/// Base point radius in pixels before depth scaling.
const BASE_RADIUS: f64 = 6.0;

/// One scatter point in percent coordinates (y measured from the
/// bottom edge), with a depth factor scaling both size and opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacePoint {
    /// Horizontal position in percent of the surface width.
    pub x: f64,
    /// Vertical position in percent, from the bottom edge.
    pub y: f64,
    /// Depth factor in [0.5, 1.0); nearer points draw larger and
    /// more opaque.
    pub z: f64,
}

/// A ray from the scene origin to one of the first points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Endpoint, percent coordinates.
    pub x: f64,
    /// Endpoint, percent coordinates from the bottom edge.
    pub y: f64,
    /// Length of the ray in percent units (the hypotenuse).
    pub length: f64,
    /// Direction from the origin in degrees.
    pub angle_deg: f64,
}

/// The generated scatter layout.
#[derive(Debug, Clone)]
pub struct VectorSpaceScene {
    points: Vec<SpacePoint>,
    rays: Vec<Ray>,
}

impl VectorSpaceScene {
    /// Samples the scatter inside the inner 80% of the surface and
    /// derives rays for the first [`RAY_COUNT`] points.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let points: Vec<SpacePoint> = (0..POINT_COUNT)
            .map(|_| SpacePoint {
                x: rng.gen_range(10.0..90.0),
                y: rng.gen_range(10.0..90.0),
                z: rng.gen_range(0.5..1.0),
            })
            .collect();

        let rays = points
            .iter()
            .take(RAY_COUNT)
            .map(|p| {
                let dx = p.x - ORIGIN.0;
                let dy = p.y - ORIGIN.1;
                Ray {
                    x: p.x,
                    y: p.y,
                    length: dx.hypot(dy),
                    angle_deg: dy.atan2(dx).to_degrees(),
                }
            })
            .collect();

        Self { points, rays }
    }

    /// The scattered points.
    pub fn points(&self) -> &[SpacePoint] {
        &self.points
    }

    /// The origin rays.
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }
}

impl Scene for VectorSpaceScene {
    fn name(&self) -> &'static str {
        "vector-space"
    }

    fn draw(&self, root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()> {
        root.fill(&BACKGROUND)?;
        let (w, h) = root.dim_in_pixel();

        // Percent coordinates with a bottom-edge origin map to pixels
        // by flipping y.
        let to_px = |x: f64, y: f64| {
            (
                (x / 100.0 * f64::from(w)) as i32,
                ((100.0 - y) / 100.0 * f64::from(h)) as i32,
            )
        };

        for ray in &self.rays {
            root.draw(&PathElement::new(
                vec![to_px(ORIGIN.0, ORIGIN.1), to_px(ray.x, ray.y)],
                LIGHT_BLUE.mix(0.5).stroke_width(1),
            ))?;
        }

        for p in &self.points {
            root.draw(&Circle::new(
                to_px(p.x, p.y),
                (BASE_RADIUS * p.z) as i32,
                LIGHT_BLUE.mix(p.z).filled(),
            ))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn layout_stays_in_the_inner_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let scene = VectorSpaceScene::generate(&mut rng);

        assert_eq!(scene.points().len(), POINT_COUNT);
        for p in scene.points() {
            assert!(p.x >= 10.0 && p.x < 90.0);
            assert!(p.y >= 10.0 && p.y < 90.0);
            assert!(p.z >= 0.5 && p.z < 1.0);
        }
    }

    #[test]
    fn rays_carry_hypotenuse_and_angle() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let scene = VectorSpaceScene::generate(&mut rng);

        assert_eq!(scene.rays().len(), RAY_COUNT);
        for (ray, p) in scene.rays().iter().zip(scene.points()) {
            let dx = p.x - 10.0;
            let dy = p.y - 10.0;
            assert!((ray.length - dx.hypot(dy)).abs() < 1e-12);
            assert!((ray.angle_deg - dy.atan2(dx).to_degrees()).abs() < 1e-12);
            assert!(ray.angle_deg >= -180.0 && ray.angle_deg <= 180.0);
        }
    }

    #[test]
    fn draw_touches_the_surface() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let scene = VectorSpaceScene::generate(&mut rng);
        let mut surface = crate::render::Surface::new(200, 120);
        surface.draw(|root| scene.draw(root)).unwrap();
        assert!(surface.buffer().iter().any(|&b| b != 0));
    }
}
