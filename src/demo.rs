//! Interactive nearest-neighbour demo: the controller owning all demo
//! state and the three triggers (pointer-down, search, reset).
//!
//! Every handler runs to completion synchronously on the caller's
//! thread; the point store's selection flags and the query point are
//! mutated only inside a single handler invocation.

use std::fmt::Write as _;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::{DeckConfig, DemoConfig};
use crate::errors::Result;
use crate::render::{draw_demo, Surface};
use crate::search::top_k;
use crate::store::PointStore;
use crate::types::{Metric, Neighbor, QueryPoint};

/// Panel text shown after a reset, prompting for the next search.
pub const RESET_PROMPT: &str = "Click \"Search\" to find similar vectors.";

/// Lifecycle of one demo instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoPhase {
    /// No query point set.
    Idle,
    /// Query present, no selection applied yet.
    QuerySet,
    /// Query present with a selection from the last search.
    Searched,
}

/// Mutable demo state, owned by the controller and passed by reference
/// to the selector and the render pipeline.
#[derive(Debug, Clone)]
pub struct DemoState {
    /// The generated population.
    pub store: PointStore,
    /// The current query point, if any. At most one exists.
    pub query: Option<QueryPoint>,
}

/// Controller for the nearest-neighbour demo.
#[derive(Debug)]
pub struct NeighborDemo {
    config: DemoConfig,
    state: DemoState,
    surface: Surface,
}

impl NeighborDemo {
    /// Builds a demo from configuration: allocates the surface, seeds
    /// the generator, populates the store, and renders the initial
    /// scene.
    pub fn new(config: &DeckConfig) -> Result<Self> {
        config.validate()?;
        let surface = Surface::new(config.surface.width, config.surface.height);
        let mut rng = ChaCha8Rng::seed_from_u64(config.demo.seed);
        let store = PointStore::generate(&config.demo, surface.bounds(), &mut rng);
        tracing::debug!("generated {} demo points", store.len());

        let mut demo = Self {
            config: config.demo.clone(),
            state: DemoState { store, query: None },
            surface,
        };
        demo.render()?;
        Ok(demo)
    }

    /// Sets the query point to surface-local coordinates, clears any
    /// prior selection, and redraws.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> Result<()> {
        self.state.query = Some(QueryPoint { x, y });
        self.state.store.clear_selection();
        tracing::debug!("query point set at ({:.1}, {:.1})", x, y);
        self.render()
    }

    /// Runs a search with the configured metric and k, applies the
    /// selection, redraws, and returns the results report. A search
    /// with no query point set is a no-op returning `None`.
    pub fn search(&mut self) -> Result<Option<String>> {
        let query = match self.state.query {
            Some(q) => q,
            None => {
                tracing::debug!("search skipped: no query point set");
                return Ok(None);
            }
        };

        let results = top_k(
            self.state.store.points(),
            query,
            self.config.metric,
            self.config.k,
        );
        self.state.store.clear_selection();
        self.state.store.apply_selection(results.iter().map(|n| n.index));
        self.render()?;

        tracing::info!(
            "search selected {} of {} points ({} metric)",
            results.len(),
            self.state.store.len(),
            self.config.metric
        );
        Ok(Some(self.report(&results)))
    }

    /// Clears the query point and all selections, then redraws.
    pub fn reset(&mut self) -> Result<()> {
        self.state.query = None;
        self.state.store.clear_selection();
        self.render()
    }

    /// Reinitializes the surface at new dimensions and redraws. Query
    /// and selection coordinates are kept as-is, so they go stale
    /// relative to the new dimensions (known limitation).
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        self.surface.resize(width, height);
        self.render()
    }

    /// Redraws the current state. Idempotent; may be called repeatedly.
    pub fn render(&mut self) -> Result<()> {
        let state = &self.state;
        self.surface
            .draw(|root| draw_demo(root, state.store.points(), state.query))
    }

    /// Current position in the demo lifecycle, derived from state.
    pub fn phase(&self) -> DemoPhase {
        match (self.state.query, self.state.store.selected_count()) {
            (None, _) => DemoPhase::Idle,
            (Some(_), 0) => DemoPhase::QuerySet,
            (Some(_), _) => DemoPhase::Searched,
        }
    }

    /// The demo state, for rendering or inspection.
    pub fn state(&self) -> &DemoState {
        &self.state
    }

    /// The rendered surface.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The demo section of the configuration in effect.
    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Switches the metric used by subsequent searches. Existing
    /// selection is left alone until the next search replaces it.
    pub fn set_metric(&mut self, metric: Metric) {
        self.config.metric = metric;
    }

    /// Replaces the display-only algorithm label in future reports.
    pub fn set_algorithm(&mut self, label: String) {
        self.config.algorithm = label;
    }

    /// Results panel text: an algorithm/metric header, then one line
    /// per neighbour in rank order with the distance to two decimals.
    fn report(&self, results: &[Neighbor]) -> String {
        let mut out = format!(
            "Algorithm: {}, Metric: {}\n",
            self.config.algorithm, self.config.metric
        );
        for (rank, n) in results.iter().enumerate() {
            let _ = writeln!(out, "Point #{}: Distance = {:.2}", rank + 1, n.distance);
        }
        out
    }
}
