//! Decorative scene generators and their renderers.
//!
//! Each scene is a deterministic layout (seeded where random) paired
//! with a plotters renderer. Scenes are cosmetic: nothing here feeds
//! back into the search demo.

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::errors::Result;
use crate::render::Surface;

pub mod benchmark;
pub mod distance_web;
pub mod index_graph;
pub mod vector_space;

pub use benchmark::BenchmarkScene;
pub use distance_web::DistanceWebScene;
pub use index_graph::IndexGraphScene;
pub use vector_space::VectorSpaceScene;

/// Shared palette for the scenes, matching the deck's theme.
pub(crate) const LIGHT_BLUE: RGBColor = RGBColor(76, 201, 240);
pub(crate) const ROYAL_BLUE: RGBColor = RGBColor(67, 97, 238);
pub(crate) const DEEP_PURPLE: RGBColor = RGBColor(58, 12, 163);

/// A decorative visualization: a generated layout plus a renderer.
pub trait Scene {
    /// Stable name used for surface lookup and output file names.
    fn name(&self) -> &'static str;

    /// Draws the scene onto a drawing area.
    fn draw(&self, root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>;
}

/// Renders `scene` into `surface` when one is present. A missing
/// surface is a silent no-op, so a deck without that visual slot still
/// initializes cleanly.
pub fn render_into(surface: Option<&mut Surface>, scene: &dyn Scene) -> Result<()> {
    match surface {
        Some(s) => s.draw(|root| scene.draw(root)),
        None => {
            tracing::debug!("no surface for scene '{}', skipping", scene.name());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn missing_surface_is_a_noop() {
        let scene = IndexGraphScene::generate(640, 360);
        assert!(render_into(None, &scene).is_ok());
    }

    #[test]
    fn scenes_render_into_a_surface() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let scene = VectorSpaceScene::generate(&mut rng);
        let mut surface = Surface::new(320, 200);
        render_into(Some(&mut surface), &scene).unwrap();
        // Rendering filled the background, so the buffer is no longer zeroed.
        assert!(surface.buffer().iter().any(|&b| b != 0));
    }
}
