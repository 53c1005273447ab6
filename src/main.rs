use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use plotters::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vector_deck::{
    config::SurfaceConfig,
    deck::{CueTarget, Deck, SceneKind, SlideBody},
    demo::{NeighborDemo, RESET_PROMPT},
    highlight,
    render::draw_demo,
    scenes::{self, BenchmarkScene, DistanceWebScene, IndexGraphScene, Scene, VectorSpaceScene},
    types::Metric,
    DeckConfig,
};

#[derive(Parser, Debug)]
#[command(name = "vector-deck", about = "Interactive vector search demo and slide deck")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Place a query point, run one search, and print the report.
    Demo {
        /// Path to config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Query x coordinate (defaults to the canvas center)
        #[arg(long)]
        x: Option<f64>,
        /// Query y coordinate (defaults to the canvas center)
        #[arg(long)]
        y: Option<f64>,
        /// Distance metric override
        #[arg(long, value_enum)]
        metric: Option<Metric>,
        /// Neighbour count override
        #[arg(long)]
        k: Option<usize>,
        /// Write the rendered canvas to this PNG file
        #[arg(long)]
        png: Option<PathBuf>,
    },

    /// Interactive demo session on stdin.
    Repl {
        /// Path to config file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Render the decorative scenes to PNG files.
    Scenes {
        /// Output directory for the rendered images
        #[arg(long, default_value = "scenes-out")]
        out_dir: PathBuf,
        /// Canvas width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,
        /// Canvas height in pixels
        #[arg(long, default_value_t = 500)]
        height: u32,
        /// Seed for the randomized layouts
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// Print the deck outline, or show a single slide.
    Deck {
        /// Slide to show (0-based); omit for the outline
        #[arg(long)]
        slide: Option<usize>,
        /// Dump the outline as JSON
        #[arg(long)]
        json: bool,
        /// Render the slide's scene or chart into this directory
        #[arg(long)]
        render_dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            config,
            x,
            y,
            metric,
            k,
            png,
        } => {
            cmd_demo(config, x, y, metric, k, png)?;
        }
        Commands::Repl { config } => {
            cmd_repl(config)?;
        }
        Commands::Scenes {
            out_dir,
            width,
            height,
            seed,
        } => {
            cmd_scenes(out_dir, width, height, seed)?;
        }
        Commands::Deck {
            slide,
            json,
            render_dir,
        } => {
            cmd_deck(slide, json, render_dir)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<DeckConfig> {
    let config = if let Some(path) = path {
        let s = std::fs::read_to_string(path)?;
        serde_json::from_str(&s)?
    } else {
        DeckConfig::default()
    };
    Ok(config)
}

fn cmd_demo(
    config_path: Option<PathBuf>,
    x: Option<f64>,
    y: Option<f64>,
    metric: Option<Metric>,
    k: Option<usize>,
    png: Option<PathBuf>,
) -> anyhow::Result<()> {
    // 1) Load config and apply overrides
    let mut config = load_config(config_path)?;
    if let Some(metric) = metric {
        config.demo.metric = metric;
    }
    if let Some(k) = k {
        config.demo.k = k;
    }

    // 2) Seeded demo population
    let mut demo = NeighborDemo::new(&config)?;
    println!(
        "Generated {} points on a {}x{} canvas (seed {})",
        demo.state().store.len(),
        demo.surface().width(),
        demo.surface().height(),
        config.demo.seed
    );

    // 3) Place the query, defaulting to the canvas center
    let qx = x.unwrap_or_else(|| f64::from(config.surface.width) / 2.0);
    let qy = y.unwrap_or_else(|| f64::from(config.surface.height) / 2.0);
    demo.pointer_down(qx, qy)?;
    println!("Query at ({:.1}, {:.1})", qx, qy);

    // 4) Search and report
    match demo.search()? {
        Some(report) => println!("{}", report),
        None => println!("{}", RESET_PROMPT),
    }

    // 5) Optional canvas snapshot
    if let Some(path) = png {
        save_demo_png(&demo, &path)?;
        println!("Canvas written to {}", path.display());
    }

    Ok(())
}

fn cmd_repl(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // 1) Build the demo
    let config = load_config(config_path)?;
    let mut demo = NeighborDemo::new(&config)?;
    println!(
        "{} points on a {}x{} canvas. Metric: {}, k = {}.",
        demo.state().store.len(),
        demo.surface().width(),
        demo.surface().height(),
        demo.config().metric,
        demo.config().k
    );
    println!(
        "Type 'X Y' to place the query, 's' to search, 'r' to reset, \
         'm <metric>' to switch metrics, Enter to exit."
    );
    println!("{}", RESET_PROMPT);

    // 2) Command loop
    let stdin = io::stdin();
    loop {
        print!("demo> ");
        io::stdout().flush()?;

        let mut buf = String::new();
        let n = stdin.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            break;
        }

        match line {
            "s" | "search" => match demo.search()? {
                Some(report) => println!("{}", report),
                None => println!("{}", RESET_PROMPT),
            },
            "r" | "reset" => {
                demo.reset()?;
                println!("{}", RESET_PROMPT);
            }
            cmd if cmd.starts_with("metric ") || cmd.starts_with("m ") => {
                let name = cmd.split_whitespace().nth(1).unwrap_or("");
                match <Metric as clap::ValueEnum>::from_str(name, true) {
                    Ok(metric) => {
                        demo.set_metric(metric);
                        println!("Metric: {}", demo.config().metric);
                    }
                    Err(_) => println!("Unknown metric: '{}'", name),
                }
            }
            _ => {
                let mut parts = line.split_whitespace();
                let x = parts.next().and_then(|t| t.parse::<f64>().ok());
                let y = parts.next().and_then(|t| t.parse::<f64>().ok());
                if let (Some(x), Some(y)) = (x, y) {
                    demo.pointer_down(x, y)?;
                    println!("Query at ({:.1}, {:.1})", x, y);
                } else {
                    println!("Unrecognized command: '{}'", line);
                }
            }
        }
    }

    Ok(())
}

fn cmd_scenes(out_dir: PathBuf, width: u32, height: u32, seed: u64) -> anyhow::Result<()> {
    // 1) Reject degenerate canvas sizes
    SurfaceConfig { width, height }.validate()?;

    // 2) Output directory
    std::fs::create_dir_all(&out_dir)?;

    // 3) Seeded layouts
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let vector_space = VectorSpaceScene::generate(&mut rng);
    let distance_web = DistanceWebScene::generate(width, height, &mut rng);
    let index_graph = IndexGraphScene::generate(width, height);
    let benchmark = BenchmarkScene::new();

    // 4) Render each scene to its own file
    let all: [&dyn Scene; 4] = [&vector_space, &distance_web, &index_graph, &benchmark];
    for scene in all {
        let path = out_dir.join(format!("{}.png", scene.name()));
        render_scene_png(scene, &path, width, height)?;
        println!("Rendered {}", path.display());
    }

    Ok(())
}

fn cmd_deck(slide: Option<usize>, json: bool, render_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let mut deck = Deck::standard();

    // 1) Machine-readable outline
    if json {
        println!("{}", serde_json::to_string_pretty(deck.slides())?);
        return Ok(());
    }

    match slide {
        // 2) Single slide
        Some(index) => {
            if !deck.goto(index) {
                anyhow::bail!("slide {} out of range (deck has {})", index, deck.len());
            }
            show_slide(&deck, render_dir.as_deref())?;
        }
        // 3) Outline with the cursor marker
        None => {
            println!("Deck: {} slides", deck.len());
            let dots = deck.indicators();
            for (i, s) in deck.slides().iter().enumerate() {
                let marker = if dots[i] { ">" } else { " " };
                println!("{} {:>2}. {} [{}]", marker, i, s.title, s.body.kind());
            }
            println!("Progress: {:.0}%", deck.progress());
        }
    }

    Ok(())
}

fn show_slide(deck: &Deck, render_dir: Option<&Path>) -> anyhow::Result<()> {
    let index = deck.current();
    let slide = match deck.current_slide() {
        Some(s) => s,
        None => return Ok(()),
    };

    println!("[{}/{}] {}", index + 1, deck.len(), slide.title);
    println!("Progress: {:.0}%", deck.progress());

    match &slide.body {
        SlideBody::Bullets(items) => {
            for item in items {
                println!("  - {}", item);
            }
        }
        SlideBody::Steps(steps) => {
            let cues = deck.cues(index);
            for (i, (step, cue)) in steps.iter().zip(&cues).enumerate() {
                println!("  {}. {} (reveals at {} ms)", i + 1, step, cue.at.as_millis());
            }
        }
        SlideBody::Code(code) => {
            print!("{}", highlight::to_ansi(code));
        }
        SlideBody::Scene(kind) => {
            show_scene(*kind, render_dir)?;
        }
        SlideBody::Benchmark => {
            for e in scenes::benchmark::entries() {
                println!(
                    "  {:<12} search {:>5.1} ms, precision {:>5.1} %",
                    e.system, e.search_ms, e.precision_pct
                );
            }
            for cue in deck.cues(index) {
                if let CueTarget::Bar(i) = cue.target {
                    println!("  bar {} grows at {} ms", i, cue.at.as_millis());
                }
            }
            if let Some(dir) = render_dir {
                std::fs::create_dir_all(dir)?;
                let config = DeckConfig::default();
                let chart = BenchmarkScene::new();
                let path = dir.join(format!("{}.png", chart.name()));
                render_scene_png(&chart, &path, config.surface.width, config.surface.height)?;
                println!("  chart rendered to {}", path.display());
            }
        }
        SlideBody::Demo => {
            println!("  interactive; run the 'demo' or 'repl' subcommand");
        }
    }

    Ok(())
}

fn show_scene(kind: SceneKind, render_dir: Option<&Path>) -> anyhow::Result<()> {
    let config = DeckConfig::default();
    let (w, h) = (config.surface.width, config.surface.height);
    let mut rng = ChaCha8Rng::seed_from_u64(config.demo.seed);

    let scene: Box<dyn Scene> = match kind {
        SceneKind::VectorSpace => Box::new(VectorSpaceScene::generate(&mut rng)),
        SceneKind::DistanceWeb => Box::new(DistanceWebScene::generate(w, h, &mut rng)),
        SceneKind::IndexGraph => Box::new(IndexGraphScene::generate(w, h)),
    };

    match render_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(format!("{}.png", scene.name()));
            render_scene_png(scene.as_ref(), &path, w, h)?;
            println!("  scene '{}' rendered to {}", scene.name(), path.display());
        }
        None => {
            // No canvas attached; the renderer skips quietly.
            scenes::render_into(None, scene.as_ref())?;
            println!("  scene '{}' (pass --render-dir to rasterize)", scene.name());
        }
    }

    Ok(())
}

fn render_scene_png(scene: &dyn Scene, path: &Path, width: u32, height: u32) -> anyhow::Result<()> {
    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    scene.draw(&root)?;
    root.present()?;
    Ok(())
}

fn save_demo_png(demo: &NeighborDemo, path: &Path) -> anyhow::Result<()> {
    let state = demo.state();
    let root = BitMapBackend::new(path, (demo.surface().width(), demo.surface().height()))
        .into_drawing_area();
    draw_demo(&root, state.store.points(), state.query)?;
    root.present()?;
    Ok(())
}
