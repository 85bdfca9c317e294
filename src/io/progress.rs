//! Terminal progress bar for page generation

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Pages: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many pages of a document have been rendered
pub struct PageProgress {
    bar: ProgressBar,
}

impl PageProgress {
    /// Create a bar expecting `total` pages
    pub fn new(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PAGE_STYLE.clone());
        Self { bar }
    }

    /// Record that `done` pages are complete
    pub fn set_done(&self, done: usize) {
        self.bar.set_position(done as u64);
    }

    /// Number of pages recorded so far
    pub fn done(&self) -> u64 {
        self.bar.position()
    }

    /// Show the final message while the document is written
    pub fn finish(&self, message: &str) {
        self.bar.finish_with_message(message.to_string());
    }
}
