//! Benchmark comparison chart: fixed search-time and precision figures
//! for four engines, rendered as grouped bars.

use plotters::coord::Shift;
use plotters::prelude::*;

use super::{Scene, DEEP_PURPLE, LIGHT_BLUE, ROYAL_BLUE};
use crate::errors::Result;
use crate::render::{ACCENT, BACKGROUND};

/// One measured system in the comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkEntry {
    /// Engine name.
    pub system: &'static str,
    /// Single-query search time in milliseconds.
    pub search_ms: f64,
    /// Recall-style precision percentage.
    pub precision_pct: f64,
}

/// The fixed comparison data behind the chart.
pub fn entries() -> [BenchmarkEntry; 4] {
    [
        BenchmarkEntry {
            system: "Faiss Flat",
            search_ms: 100.0,
            precision_pct: 100.0,
        },
        BenchmarkEntry {
            system: "Faiss HNSW",
            search_ms: 2.0,
            precision_pct: 99.0,
        },
        BenchmarkEntry {
            system: "Milvus",
            search_ms: 2.5,
            precision_pct: 98.0,
        },
        BenchmarkEntry {
            system: "Pinecone",
            search_ms: 3.0,
            precision_pct: 97.0,
        },
    ]
}

/// Chart wrapper over the fixed benchmark table.
#[derive(Debug, Clone)]
pub struct BenchmarkScene {
    entries: [BenchmarkEntry; 4],
}

impl BenchmarkScene {
    /// Builds the scene over the fixed data.
    pub fn new() -> Self {
        Self { entries: entries() }
    }

    /// The plotted rows.
    pub fn entries(&self) -> &[BenchmarkEntry] {
        &self.entries
    }
}

impl Default for BenchmarkScene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene for BenchmarkScene {
    fn name(&self) -> &'static str {
        "benchmark"
    }

    fn draw(&self, root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()> {
        root.fill(&BACKGROUND)?;

        let colors = [LIGHT_BLUE, ROYAL_BLUE, DEEP_PURPLE, ACCENT];
        let labels = self.entries;

        let mut chart = ChartBuilder::on(root)
            .caption(
                "Search time vs precision",
                ("sans-serif", 20).into_font().color(&WHITE),
            )
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(50)
            .build_cartesian_2d(0.0..4.0, 0.0..110.0)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(4)
            .x_label_formatter(&move |x| {
                labels
                    .get(*x as usize)
                    .map(|e| e.system.to_string())
                    .unwrap_or_default()
            })
            .y_desc("ms / %")
            .axis_style(WHITE.mix(0.3).stroke_width(1))
            .label_style(("sans-serif", 12).into_font().color(&WHITE.mix(0.7)))
            .draw()?;

        chart
            .draw_series(self.entries.iter().enumerate().map(|(i, e)| {
                Rectangle::new(
                    [(i as f64 + 0.15, 0.0), (i as f64 + 0.45, e.search_ms)],
                    colors[i].mix(0.7).filled(),
                )
            }))?
            .label("Search time (ms)")
            .legend(|(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], LIGHT_BLUE.mix(0.7).filled())
            });

        chart
            .draw_series(self.entries.iter().enumerate().map(|(i, e)| {
                Rectangle::new(
                    [(i as f64 + 0.55, 0.0), (i as f64 + 0.85, e.precision_pct)],
                    colors[i].mix(0.3).filled(),
                )
            }))?
            .label("Precision (%)")
            .legend(|(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], LIGHT_BLUE.mix(0.3).filled())
            });

        chart
            .configure_series_labels()
            .background_style(BACKGROUND.mix(0.8).filled())
            .border_style(WHITE.mix(0.3).stroke_width(1))
            .label_font(("sans-serif", 12).into_font().color(&WHITE.mix(0.7)))
            .draw()?;

        Ok(())
    }
}
