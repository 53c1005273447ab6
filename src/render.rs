//! Offscreen drawing surface and the demo render pipeline.
//!
//! The surface owns a plain RGB pixel buffer and hands plotters a
//! `BitMapBackend` over it for every draw, so repeated renders of the
//! same state produce byte-identical buffers. The same draw functions
//! also run against file-backed backends when the CLI writes PNGs.

use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::errors::{DeckError, Result};
use crate::types::{Bounds, Point, QueryPoint};

/// Background fill for every rendered surface.
pub const BACKGROUND: RGBColor = RGBColor(26, 26, 46);
/// Accent for the query marker, selected points, and connectors.
pub const ACCENT: RGBColor = RGBColor(247, 37, 133);

const QUERY_RADIUS: i32 = 8;
const QUERY_RING_RADIUS: i32 = 12;
const SELECTED_RING_OFFSET: f64 = 5.0;
const CONNECTOR_ALPHA: f64 = 0.3;

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for DeckError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        DeckError::Render(e.to_string())
    }
}

/// Fixed-size offscreen RGB surface for the demo and the scenes.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    buf: Vec<u8>,
}

impl Surface {
    /// Allocates a zeroed surface at the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buf: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The surface extent as sampling bounds for point generation.
    pub fn bounds(&self) -> Bounds {
        Bounds {
            width: f64::from(self.width),
            height: f64::from(self.height),
        }
    }

    /// Raw RGB8 pixel data, row-major.
    pub fn buffer(&self) -> &[u8] {
        &self.buf
    }

    /// Reallocates the pixel buffer at new dimensions. Anything drawn in
    /// old coordinates is discarded; demo state is not rescaled, so
    /// query/selection coordinates go stale until the next reset.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.buf = vec![0; width as usize * height as usize * 3];
    }

    /// Runs a drawing closure against a backend over this surface's
    /// buffer, then presents it.
    pub fn draw<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()>,
    {
        let root =
            BitMapBackend::with_buffer(&mut self.buf, (self.width, self.height)).into_drawing_area();
        f(&root)?;
        root.present()?;
        Ok(())
    }
}

/// Clears the area and draws the demo scene: every point in its stored
/// color (accent plus a highlight ring when selected), connector lines
/// from the query to each selected point, and the query marker on top.
/// Tolerates an empty point sequence and an absent query. Coordinates
/// outside the area are clipped by the backend, never an error.
pub fn draw_demo(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    points: &[Point],
    query: Option<QueryPoint>,
) -> Result<()> {
    root.fill(&BACKGROUND)?;

    for p in points {
        let center = (p.x as i32, p.y as i32);
        if p.selected {
            root.draw(&Circle::new(center, p.radius as i32, ACCENT.filled()))?;
            root.draw(&Circle::new(
                center,
                (p.radius + SELECTED_RING_OFFSET) as i32,
                ACCENT.stroke_width(2),
            ))?;
        } else {
            let fill = HSLColor(p.color.h / 360.0, p.color.s, p.color.l);
            root.draw(&Circle::new(center, p.radius as i32, fill.filled()))?;
        }
    }

    if let Some(q) = query {
        let q_center = (q.x as i32, q.y as i32);
        for p in points.iter().filter(|p| p.selected) {
            root.draw(&PathElement::new(
                vec![q_center, (p.x as i32, p.y as i32)],
                ACCENT.mix(CONNECTOR_ALPHA).stroke_width(2),
            ))?;
        }
        root.draw(&Circle::new(q_center, QUERY_RADIUS, ACCENT.filled()))?;
        root.draw(&Circle::new(q_center, QUERY_RING_RADIUS, ACCENT.stroke_width(2)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Hsl;

    fn pt(x: f64, y: f64, selected: bool) -> Point {
        Point {
            x,
            y,
            radius: 4.0,
            color: Hsl {
                h: 210.0,
                s: 0.7,
                l: 0.6,
            },
            selected,
        }
    }

    #[test]
    fn render_is_idempotent() {
        let points = vec![pt(10.0, 10.0, false), pt(40.0, 30.0, true)];
        let query = Some(QueryPoint { x: 25.0, y: 20.0 });

        let mut surface = Surface::new(120, 80);
        surface.draw(|root| draw_demo(root, &points, query)).unwrap();
        let first = surface.buffer().to_vec();

        surface.draw(|root| draw_demo(root, &points, query)).unwrap();
        assert_eq!(surface.buffer(), first.as_slice());
    }

    #[test]
    fn empty_scene_renders_background_only() {
        let mut surface = Surface::new(16, 16);
        surface.draw(|root| draw_demo(root, &[], None)).unwrap();

        // Every pixel is the background color.
        for px in surface.buffer().chunks(3) {
            assert_eq!(px, [BACKGROUND.0, BACKGROUND.1, BACKGROUND.2]);
        }
    }

    #[test]
    fn selection_and_query_change_pixels() {
        let base = vec![pt(30.0, 30.0, false)];
        let selected = vec![pt(30.0, 30.0, true)];

        let mut a = Surface::new(64, 64);
        a.draw(|root| draw_demo(root, &base, None)).unwrap();
        let mut b = Surface::new(64, 64);
        b.draw(|root| draw_demo(root, &selected, None)).unwrap();
        assert_ne!(a.buffer(), b.buffer());

        let mut c = Surface::new(64, 64);
        c.draw(|root| draw_demo(root, &base, Some(QueryPoint { x: 48.0, y: 48.0 })))
            .unwrap();
        assert_ne!(a.buffer(), c.buffer());
    }

    #[test]
    fn selected_ring_sits_five_pixels_out() {
        let points = vec![pt(32.0, 32.0, true)];
        let mut rendered = Surface::new(64, 64);
        rendered.draw(|root| draw_demo(root, &points, None)).unwrap();

        // Same sequence drawn by hand, ring at radius + 5.
        let mut expected = Surface::new(64, 64);
        expected
            .draw(|root| {
                root.fill(&BACKGROUND)?;
                root.draw(&Circle::new((32, 32), 4, ACCENT.filled()))?;
                root.draw(&Circle::new((32, 32), 9, ACCENT.stroke_width(2)))?;
                Ok(())
            })
            .unwrap();

        assert_eq!(rendered.buffer(), expected.buffer());
    }

    #[test]
    fn stale_coordinates_are_clipped_not_errors() {
        // Points far outside the surface, as after a shrink resize.
        let points = vec![pt(10_000.0, 10_000.0, true)];
        let query = Some(QueryPoint {
            x: -500.0,
            y: 9_999.0,
        });
        let mut surface = Surface::new(32, 32);
        assert!(surface.draw(|root| draw_demo(root, &points, query)).is_ok());
    }

    #[test]
    fn resize_reallocates_the_buffer() {
        let mut surface = Surface::new(10, 10);
        surface.draw(|root| draw_demo(root, &[], None)).unwrap();
        surface.resize(20, 5);
        assert_eq!(surface.width(), 20);
        assert_eq!(surface.height(), 5);
        assert_eq!(surface.buffer().len(), 20 * 5 * 3);
        assert!(surface.buffer().iter().all(|&b| b == 0));
    }
}
