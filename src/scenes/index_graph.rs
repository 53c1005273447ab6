//! Mock hierarchical index graph: stacked levels of nodes wired to
//! their horizontally nearest neighbours. Purely cosmetic; no real
//! index structure is built or searched.

use ordered_float::OrderedFloat;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Undirected;
use plotters::coord::Shift;
use plotters::prelude::*;

use super::{Scene, DEEP_PURPLE, LIGHT_BLUE, ROYAL_BLUE};
use crate::errors::Result;
use crate::render::{ACCENT, BACKGROUND};

/// Number of stacked levels.
pub const LEVELS: usize = 3;

const SIDE_MARGIN: f64 = 100.0;
const LEVEL_Y_BASE: f64 = 50.0;
const LEVEL_Y_STEP: f64 = 100.0;
const NEIGHBOR_LINKS: usize = 2;

/// One node of the mock hierarchy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerNode {
    /// Level index; level 0 is the widest row, drawn on top.
    pub level: usize,
    /// Horizontal pixel position.
    pub x: f64,
    /// Vertical pixel position.
    pub y: f64,
}

/// Whether a link joins nodes within one level or across levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Both endpoints sit on the same level.
    SameLevel,
    /// Endpoints sit on adjacent levels.
    CrossLevel,
}

/// The generated layered graph and its pulse clock.
#[derive(Debug, Clone)]
pub struct IndexGraphScene {
    graph: Graph<LayerNode, LinkKind, Undirected>,
    pulse: f64,
}

impl IndexGraphScene {
    /// Lays out `10 - 3*level` nodes per level across `width` inside a
    /// fixed side margin and links each node to its nearest neighbours
    /// by horizontal distance. Fully deterministic.
    pub fn generate(width: u32, _height: u32) -> Self {
        let mut graph = Graph::new_undirected();
        for level in 0..LEVELS {
            let count = 10 - level * 3;
            for i in 0..count {
                let x = SIDE_MARGIN
                    + (f64::from(width) - 2.0 * SIDE_MARGIN) * (i as f64 / (count - 1) as f64);
                graph.add_node(LayerNode {
                    level,
                    x,
                    y: LEVEL_Y_BASE + level as f64 * LEVEL_Y_STEP,
                });
            }
        }

        let indices: Vec<NodeIndex> = graph.node_indices().collect();
        for &idx in &indices {
            let node = graph[idx];

            if node.level > 0 {
                let mut upper: Vec<(NodeIndex, f64)> = indices
                    .iter()
                    .filter(|&&o| graph[o].level == node.level - 1)
                    .map(|&o| (o, (graph[o].x - node.x).abs()))
                    .collect();
                upper.sort_by_key(|&(_, d)| OrderedFloat(d));
                for &(target, _) in upper.iter().take(NEIGHBOR_LINKS) {
                    graph.update_edge(idx, target, LinkKind::CrossLevel);
                }
            }

            let mut same: Vec<(NodeIndex, f64)> = indices
                .iter()
                .filter(|&&o| o != idx && graph[o].level == node.level)
                .map(|&o| (o, (graph[o].x - node.x).abs()))
                .collect();
            same.sort_by_key(|&(_, d)| OrderedFloat(d));
            for &(target, _) in same.iter().take(NEIGHBOR_LINKS) {
                graph.update_edge(idx, target, LinkKind::SameLevel);
            }
        }

        Self { graph, pulse: 0.0 }
    }

    /// Access to the underlying graph.
    pub fn inner(&self) -> &Graph<LayerNode, LinkKind, Undirected> {
        &self.graph
    }

    /// Node count per level, widest first.
    pub fn level_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; LEVELS];
        for idx in self.graph.node_indices() {
            counts[self.graph[idx].level] += 1;
        }
        counts
    }

    /// Base draw radius for a level's nodes.
    pub fn node_radius(level: usize) -> f64 {
        8.0 - 2.0 * level as f64
    }

    /// Radius multiplier at `seconds` on the pulse clock; oscillates
    /// within [0.8, 1.2].
    pub fn pulse_scale(seconds: f64) -> f64 {
        1.0 + seconds.sin() * 0.2
    }

    /// Moves the pulse clock; the next draw scales node radii by
    /// [`Self::pulse_scale`] at this time.
    pub fn set_pulse(&mut self, seconds: f64) {
        self.pulse = seconds;
    }
}

impl Scene for IndexGraphScene {
    fn name(&self) -> &'static str {
        "index-graph"
    }

    fn draw(&self, root: &DrawingArea<BitMapBackend<'_>, Shift>) -> Result<()> {
        root.fill(&BACKGROUND)?;

        for edge in self.graph.edge_references() {
            let a = self.graph[edge.source()];
            let b = self.graph[edge.target()];
            let style = match edge.weight() {
                LinkKind::SameLevel => LIGHT_BLUE.mix(0.3).stroke_width(2),
                LinkKind::CrossLevel => ACCENT.mix(0.5).stroke_width(2),
            };
            root.draw(&PathElement::new(
                vec![(a.x as i32, a.y as i32), (b.x as i32, b.y as i32)],
                style,
            ))?;
        }

        let scale = Self::pulse_scale(self.pulse);
        for idx in self.graph.node_indices() {
            let n = self.graph[idx];
            let color = match n.level {
                0 => LIGHT_BLUE,
                1 => ROYAL_BLUE,
                _ => DEEP_PURPLE,
            };
            root.draw(&Circle::new(
                (n.x as i32, n.y as i32),
                (Self::node_radius(n.level) * scale) as i32,
                color.filled(),
            ))?;
        }

        Ok(())
    }
}
