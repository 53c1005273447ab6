//! Slide deck model and navigation.
//!
//! The deck is plain data plus a cursor. Rendering decides what to do
//! with each [`SlideBody`]; navigation never fails, it just reports
//! whether the cursor moved. Timed reveal cues for step lists and the
//! benchmark chart are exposed as data so a front end can schedule
//! them however it likes.

use std::time::Duration;

use serde::Serialize;

use crate::scenes;

/// Decorative scene a slide can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneKind {
    /// Scatter of embedding points with rays from the origin.
    VectorSpace,
    /// Hub-and-spoke distance web.
    DistanceWeb,
    /// Layered navigation graph.
    IndexGraph,
}

/// Content of one slide.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SlideBody {
    /// Plain bullet list, all visible at once.
    Bullets(Vec<String>),
    /// Numbered steps revealed one at a time.
    Steps(Vec<String>),
    /// Highlighted code sample.
    Code(String),
    /// Embedded decorative scene.
    Scene(SceneKind),
    /// Benchmark bar chart with animated bars.
    Benchmark,
    /// The interactive nearest-neighbour demo.
    Demo,
}

impl SlideBody {
    /// Short label for outlines and logs, matching the serialized tag.
    pub fn kind(&self) -> &'static str {
        match self {
            SlideBody::Bullets(_) => "bullets",
            SlideBody::Steps(_) => "steps",
            SlideBody::Code(_) => "code",
            SlideBody::Scene(_) => "scene",
            SlideBody::Benchmark => "benchmark",
            SlideBody::Demo => "demo",
        }
    }
}

/// One slide: a title and its body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slide {
    /// Heading shown at the top of the slide.
    pub title: String,
    /// What the slide displays.
    pub body: SlideBody,
}

/// What a reveal cue uncovers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CueTarget {
    /// Step at this position in a [`SlideBody::Steps`] list.
    Step(usize),
    /// Bar at this position in the benchmark chart.
    Bar(usize),
}

/// A scheduled reveal relative to slide entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    /// Delay after the slide is shown.
    pub at: Duration,
    /// What appears when the delay elapses.
    pub target: CueTarget,
}

const STEP_CUE_BASE_MS: u64 = 500;
const STEP_CUE_STAGGER_MS: u64 = 300;
const BAR_CUE_BASE_MS: u64 = 500;
const BAR_CUE_STAGGER_MS: u64 = 200;

/// Slide sequence plus the current cursor.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
    current: usize,
}

impl Deck {
    /// Builds a deck from the given slides, cursor on the first.
    pub fn from_slides(slides: Vec<Slide>) -> Self {
        Self { slides, current: 0 }
    }

    /// The built-in vector search deck.
    pub fn standard() -> Self {
        let slide = |title: &str, body: SlideBody| Slide {
            title: title.to_string(),
            body,
        };
        let bullets = |items: &[&str]| {
            SlideBody::Bullets(items.iter().map(|s| s.to_string()).collect())
        };
        Self::from_slides(vec![
            slide(
                "Vector Search",
                bullets(&[
                    "From keyword matching to meaning",
                    "Documents, images and sounds as coordinates",
                    "Similar things sit close together",
                ]),
            ),
            slide("Embeddings as Coordinates", SlideBody::Scene(SceneKind::VectorSpace)),
            slide("Proximity Is Similarity", SlideBody::Scene(SceneKind::DistanceWeb)),
            slide(
                "Three Ways to Measure",
                bullets(&[
                    "Euclidean: straight-line distance",
                    "Manhattan: sum of per-axis differences",
                    "Cosine: angle between directions",
                ]),
            ),
            slide(
                "A Search, Step by Step",
                SlideBody::Steps(vec![
                    "Embed the query into the same space".to_string(),
                    "Measure its distance to every candidate".to_string(),
                    "Sort candidates from nearest to farthest".to_string(),
                    "Keep the k best matches".to_string(),
                ]),
            ),
            slide("Skipping Ahead with an Index", SlideBody::Scene(SceneKind::IndexGraph)),
            slide("A Few Lines of Python", SlideBody::Code(PYTHON_SAMPLE.to_string())),
            slide("Engines Compared", SlideBody::Benchmark),
            slide("Try It Yourself", SlideBody::Demo),
        ])
    }

    /// All slides in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Index of the slide under the cursor.
    pub fn current(&self) -> usize {
        self.current
    }

    /// The slide under the cursor, if the deck has any.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Moves the cursor to `index`. Returns false and stays put when
    /// `index` is out of range.
    pub fn goto(&mut self, index: usize) -> bool {
        if index < self.slides.len() {
            self.current = index;
            true
        } else {
            false
        }
    }

    /// Advances one slide. Returns false on the last slide.
    pub fn next(&mut self) -> bool {
        if self.current + 1 < self.slides.len() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Steps back one slide. Returns false on the first slide.
    pub fn prev(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Completion of the deck as a percentage, 0 when empty.
    pub fn progress(&self) -> f64 {
        if self.slides.is_empty() {
            0.0
        } else {
            (self.current + 1) as f64 / self.slides.len() as f64 * 100.0
        }
    }

    /// One flag per slide, true only under the cursor.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.slides.len()).map(|i| i == self.current).collect()
    }

    /// Applies a navigation key. Returns whether the cursor moved.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
        }
    }

    /// Reveal schedule for the slide at `index`, relative to the moment
    /// the slide is shown. Slides without staged content have none.
    pub fn cues(&self, index: usize) -> Vec<Cue> {
        match self.slides.get(index).map(|s| &s.body) {
            Some(SlideBody::Steps(steps)) => (0..steps.len())
                .map(|i| Cue {
                    at: Duration::from_millis(STEP_CUE_BASE_MS + STEP_CUE_STAGGER_MS * i as u64),
                    target: CueTarget::Step(i),
                })
                .collect(),
            Some(SlideBody::Benchmark) => (0..scenes::benchmark::entries().len())
                .map(|i| Cue {
                    at: Duration::from_millis(BAR_CUE_BASE_MS + BAR_CUE_STAGGER_MS * i as u64),
                    target: CueTarget::Bar(i),
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

/// Navigation keys the deck reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Step back one slide.
    ArrowLeft,
    /// Advance one slide.
    ArrowRight,
}

const PYTHON_SAMPLE: &str = r#"import faiss

# flat index over 128-dim embeddings
dim = 128
index = faiss.IndexFlatL2(dim)
index.add(embeddings)

def search(query, k=5):
    scores, ids = index.search(query, k)
    if k >= 1 and len(ids) > 0:
        return list(ids[0])
    return []

print("neighbours:", search(encode("hello world")))
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_covers_every_body_kind() {
        let deck = Deck::standard();
        assert_eq!(deck.len(), 9);
        assert_eq!(deck.current(), 0);
        let bodies = deck.slides().iter().map(|s| &s.body);
        assert!(bodies.clone().any(|b| matches!(b, SlideBody::Bullets(_))));
        assert!(bodies.clone().any(|b| matches!(b, SlideBody::Steps(_))));
        assert!(bodies.clone().any(|b| matches!(b, SlideBody::Code(_))));
        assert!(bodies
            .clone()
            .any(|b| matches!(b, SlideBody::Scene(SceneKind::VectorSpace))));
        assert!(bodies
            .clone()
            .any(|b| matches!(b, SlideBody::Scene(SceneKind::DistanceWeb))));
        assert!(bodies
            .clone()
            .any(|b| matches!(b, SlideBody::Scene(SceneKind::IndexGraph))));
        assert!(bodies.clone().any(|b| matches!(b, SlideBody::Benchmark)));
        assert!(bodies.clone().any(|b| matches!(b, SlideBody::Demo)));
    }

    #[test]
    fn body_kind_labels_match_the_serialized_tags() {
        assert_eq!(SlideBody::Bullets(Vec::new()).kind(), "bullets");
        assert_eq!(SlideBody::Steps(Vec::new()).kind(), "steps");
        assert_eq!(SlideBody::Code(String::new()).kind(), "code");
        assert_eq!(SlideBody::Scene(SceneKind::IndexGraph).kind(), "scene");
        assert_eq!(SlideBody::Benchmark.kind(), "benchmark");
        assert_eq!(
            serde_json::to_value(SlideBody::Demo).unwrap(),
            serde_json::Value::String(SlideBody::Demo.kind().to_string())
        );
    }

    #[test]
    fn goto_is_bounds_guarded() {
        let mut deck = Deck::standard();
        assert!(deck.goto(3));
        assert_eq!(deck.current(), 3);
        assert!(!deck.goto(deck.len()));
        assert_eq!(deck.current(), 3);
    }

    #[test]
    fn next_and_prev_stop_at_the_ends() {
        let mut deck = Deck::standard();
        assert!(!deck.prev());
        assert_eq!(deck.current(), 0);
        while deck.next() {}
        assert_eq!(deck.current(), deck.len() - 1);
        assert!(!deck.next());
        assert_eq!(deck.current(), deck.len() - 1);
    }

    #[test]
    fn progress_counts_the_current_slide() {
        let mut deck = Deck::standard();
        let expected = 1.0 / deck.len() as f64 * 100.0;
        assert!((deck.progress() - expected).abs() < 1e-9);
        deck.goto(deck.len() - 1);
        assert!((deck.progress() - 100.0).abs() < 1e-9);

        let empty = Deck::from_slides(Vec::new());
        assert_eq!(empty.progress(), 0.0);
        assert!(empty.current_slide().is_none());
    }

    #[test]
    fn indicators_light_exactly_one_dot() {
        let mut deck = Deck::standard();
        deck.goto(4);
        let dots = deck.indicators();
        assert_eq!(dots.len(), deck.len());
        assert_eq!(dots.iter().filter(|d| **d).count(), 1);
        assert!(dots[4]);
    }

    #[test]
    fn arrow_keys_move_the_cursor() {
        let mut deck = Deck::standard();
        assert!(!deck.handle_key(Key::ArrowLeft));
        assert!(deck.handle_key(Key::ArrowRight));
        assert_eq!(deck.current(), 1);
        assert!(deck.handle_key(Key::ArrowLeft));
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn step_cues_stagger_from_half_a_second() {
        let deck = Deck::standard();
        let steps_at = deck
            .slides()
            .iter()
            .position(|s| matches!(s.body, SlideBody::Steps(_)))
            .unwrap();
        let cues = deck.cues(steps_at);
        assert_eq!(cues.len(), 4);
        assert_eq!(cues[0].at, Duration::from_millis(500));
        assert_eq!(cues[1].at, Duration::from_millis(800));
        assert_eq!(cues[3].at, Duration::from_millis(1400));
        assert_eq!(cues[2].target, CueTarget::Step(2));
    }

    #[test]
    fn benchmark_cues_cover_every_bar() {
        let deck = Deck::standard();
        let chart_at = deck
            .slides()
            .iter()
            .position(|s| matches!(s.body, SlideBody::Benchmark))
            .unwrap();
        let cues = deck.cues(chart_at);
        assert_eq!(cues.len(), 4);
        assert_eq!(cues[0].at, Duration::from_millis(500));
        assert_eq!(cues[3].at, Duration::from_millis(1100));
        assert_eq!(cues[1].target, CueTarget::Bar(1));
    }

    #[test]
    fn slides_without_staged_content_have_no_cues() {
        let deck = Deck::standard();
        assert!(deck.cues(0).is_empty());
        assert!(deck.cues(deck.len()).is_empty());
    }

    #[test]
    fn code_sample_exercises_the_highlighter() {
        use crate::highlight::{highlight, TokenClass};
        let classes: Vec<TokenClass> = highlight(PYTHON_SAMPLE).iter().map(|t| t.class).collect();
        for class in [
            TokenClass::Keyword,
            TokenClass::Builtin,
            TokenClass::Str,
            TokenClass::Comment,
            TokenClass::Number,
            TokenClass::Operator,
        ] {
            assert!(classes.contains(&class), "missing {:?}", class);
        }
    }
}
