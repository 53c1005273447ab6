#![forbid(unsafe_code)]
#![deny(
    warnings,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]

//! # vector-deck
//!
//! Vector search, explained interactively:
//! - a seeded 2-D point cloud searched brute-force under three metrics
//! - an off-screen plotters canvas with selection accents and query markers
//! - a slide deck with reveal cues, decorative scenes and a benchmark chart
//!
//! This crate is designed to be deterministic, testable, and headless.

pub mod config;
pub mod deck;
pub mod demo;
pub mod errors;
/// Toy Python syntax highlighting.
pub mod highlight;
pub mod metric;
/// Off-screen rendering surface and demo canvas painting.
pub mod render;
pub mod scenes;
/// Ranking and top-k selection.
pub mod search;
pub mod store;
pub mod types;

pub use config::DeckConfig;
pub use deck::Deck;
pub use demo::NeighborDemo;
pub use errors::DeckError;
pub use store::PointStore;
pub use types::{Metric, Point, QueryPoint};
