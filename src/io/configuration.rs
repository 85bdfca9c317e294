//! Generation constants and validated runtime configuration

use crate::io::error::{Result, invalid_parameter};
use crate::render::layout::PageLayout;

// Maze dimensions in tiles
/// Default maze width in tiles
pub const DEFAULT_MAZE_WIDTH: usize = 22;
/// Default maze height in tiles
pub const DEFAULT_MAZE_HEIGHT: usize = 24;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 1000;

/// Default wall thickness in pixels
pub const DEFAULT_LINE_WIDTH: u32 = 6;

/// Default number of pages per document
pub const DEFAULT_PAGE_COUNT: usize = 10;

// A4 at 96 DPI
/// Default page width in pixels
pub const DEFAULT_CANVAS_WIDTH: u32 = 794;
/// Default page height in pixels
pub const DEFAULT_CANVAS_HEIGHT: u32 = 1123;

/// Width of the maze region on the page, in pixels
pub const DEFAULT_MAZE_WIDTH_PX: u32 = 750;

// Output settings
/// Default output file
pub const DEFAULT_OUTPUT: &str = "out.pdf";
/// Canvas resolution assumed when sizing PDF pages; A4 at 96 DPI is 794x1123
pub const PDF_PIXELS_PER_INCH: f64 = 96.0;
/// How long each page is shown in a multi-frame GIF document
pub const PAGE_DISPLAY_MS: u32 = 3000;

/// Parameters shared by every page of a document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Maze width in tiles
    pub width: usize,
    /// Maze height in tiles
    pub height: usize,
    /// Wall thickness in pixels
    pub line_width: u32,
    /// Number of pages to generate
    pub pages: usize,
    /// Page width in pixels
    pub canvas_width: u32,
    /// Page height in pixels
    pub canvas_height: u32,
    /// Horizontal extent of the maze region in pixels
    pub maze_width_px: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAZE_WIDTH,
            height: DEFAULT_MAZE_HEIGHT,
            line_width: DEFAULT_LINE_WIDTH,
            pages: DEFAULT_PAGE_COUNT,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            maze_width_px: DEFAULT_MAZE_WIDTH_PX,
        }
    }
}

impl GenerationConfig {
    /// Check that every parameter is usable before any page is generated
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either maze dimension is zero or exceeds `MAX_GRID_DIMENSION`
    /// - The page count or line width is zero
    /// - The maze region (plus one line width) does not fit on the canvas
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        if self.pages == 0 {
            return Err(invalid_parameter(
                "pages",
                &self.pages,
                &"at least one page is required",
            ));
        }

        if self.line_width == 0 {
            return Err(invalid_parameter(
                "line_width",
                &self.line_width,
                &"walls must be at least one pixel thick",
            ));
        }

        if self.maze_width_px == 0 {
            return Err(invalid_parameter(
                "maze_width_px",
                &self.maze_width_px,
                &"maze region must be at least one pixel wide",
            ));
        }

        let layout = self.layout();
        let line = f64::from(self.line_width);
        if f64::from(self.maze_width_px) + line > f64::from(self.canvas_width) {
            return Err(invalid_parameter(
                "maze_width_px",
                &self.maze_width_px,
                &format!("does not fit on a {}px wide page", self.canvas_width),
            ));
        }
        let maze_height_px = layout.maze_height_px(self.width, self.height);
        if maze_height_px + line > f64::from(self.canvas_height) {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &format!(
                    "maze would be {maze_height_px:.0}px tall on a {}px tall page",
                    self.canvas_height
                ),
            ));
        }

        Ok(())
    }

    /// Page geometry for this configuration
    pub const fn layout(&self) -> PageLayout {
        PageLayout {
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            maze_width_px: self.maze_width_px,
            line_width: self.line_width,
        }
    }
}
