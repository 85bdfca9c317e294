//! Command-line interface for generating a document of maze pages

use crate::io::configuration::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_LINE_WIDTH, DEFAULT_MAZE_HEIGHT,
    DEFAULT_MAZE_WIDTH, DEFAULT_MAZE_WIDTH_PX, DEFAULT_OUTPUT, DEFAULT_PAGE_COUNT,
    GenerationConfig,
};
use crate::io::document::Document;
use crate::io::error::Result;
use crate::io::progress::PageProgress;
use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "mazepages")]
#[command(
    author,
    version,
    about = "Generate printable pages of random depth-first-search mazes"
)]
/// Command-line arguments for the maze page generator
pub struct Cli {
    /// Output file: `.pdf` or `.gif` for one multi-page file, `.png` for one file per page
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maze width in tiles
    #[arg(short = 'W', long, default_value_t = DEFAULT_MAZE_WIDTH)]
    pub width: usize,

    /// Maze height in tiles
    #[arg(short = 'H', long, default_value_t = DEFAULT_MAZE_HEIGHT)]
    pub height: usize,

    /// Wall thickness in pixels
    #[arg(short, long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: u32,

    /// Number of pages to generate
    #[arg(short, long, default_value_t = DEFAULT_PAGE_COUNT)]
    pub pages: usize,

    /// Random seed for reproducible documents (drawn at random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Generation parameters selected on the command line
    pub const fn config(&self) -> GenerationConfig {
        GenerationConfig {
            width: self.width,
            height: self.height,
            line_width: self.line_width,
            pages: self.pages,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            maze_width_px: DEFAULT_MAZE_WIDTH_PX,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Runs one generation job described by the command line
pub struct Generator {
    cli: Cli,
    seed: u64,
}

impl Generator {
    /// Fix the seed for this run, drawing one if none was given
    pub fn new(cli: Cli) -> Self {
        let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
        Self { cli, seed }
    }

    /// Seed driving this run
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate every page and write the document
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the output cannot be written
    pub fn run(&self) -> Result<Vec<PathBuf>> {
        let start_time = Instant::now();
        let config = self.cli.config();
        config.validate()?;

        info!(
            "generating {} page(s) of {}x{} mazes with seed {}",
            config.pages, config.width, config.height, self.seed
        );

        let progress = self
            .cli
            .should_show_progress()
            .then(|| PageProgress::new(config.pages));

        let mut rng = StdRng::seed_from_u64(self.seed);
        let document = Document::generate(&config, &mut rng, |done| {
            if let Some(ref pm) = progress {
                pm.set_done(done);
            }
        })?;

        if let Some(ref pm) = progress {
            pm.finish("writing");
        }

        let written = document.save(&self.cli.output)?;
        info!(
            "wrote {} page(s) to {} file(s) in {:.2?}",
            document.len(),
            written.len(),
            start_time.elapsed()
        );

        Ok(written)
    }
}
