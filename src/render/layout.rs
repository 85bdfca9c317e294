//! Page geometry: where each wall of each tile lands on the canvas

use crate::maze::grid::Grid;
use crate::maze::side::Side;
use crate::maze::tile::Position;

/// Axis-aligned rectangle in canvas pixels, `x0 <= x1` and `y0 <= y1`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge
    pub x0: f64,
    /// Top edge
    pub y0: f64,
    /// Right edge
    pub x1: f64,
    /// Bottom edge
    pub y1: f64,
}

/// A filled wall segment belonging to one tile
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallRect {
    /// Tile owning the wall
    pub position: Position,
    /// Which wall of the tile
    pub side: Side,
    /// Area to fill
    pub rect: Rect,
}

/// Fixed page size and wall thickness shared by every page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    /// Page width in pixels
    pub canvas_width: u32,
    /// Page height in pixels
    pub canvas_height: u32,
    /// Horizontal extent of the maze region in pixels
    pub maze_width_px: u32,
    /// Wall thickness in pixels
    pub line_width: u32,
}

impl PageLayout {
    /// Edge length of one square tile for a maze `width` tiles wide
    pub fn cell_size(&self, width: usize) -> f64 {
        f64::from(self.maze_width_px) / width as f64
    }

    /// Vertical extent of the maze region
    pub fn maze_height_px(&self, width: usize, height: usize) -> f64 {
        self.cell_size(width) * height as f64
    }

    /// Top-left corner of the maze region, centring maze plus one line width
    pub fn origin(&self, width: usize, height: usize) -> (f64, f64) {
        let line = f64::from(self.line_width);
        (
            (f64::from(self.canvas_width) - f64::from(self.maze_width_px) - line) / 2.0,
            (f64::from(self.canvas_height) - self.maze_height_px(width, height) - line) / 2.0,
        )
    }

    /// Rectangle covering one wall of the tile at `position` in a `width` x `height` maze
    ///
    /// Right, bottom and left walls run one line width past the cell so that
    /// corners where walls meet are filled.
    pub fn wall_rect(&self, width: usize, height: usize, position: Position, side: Side) -> Rect {
        let cell = self.cell_size(width);
        let line = f64::from(self.line_width);
        let (ox, oy) = self.origin(width, height);

        let left = (position.x as f64).mul_add(cell, ox);
        let right = ((position.x + 1) as f64).mul_add(cell, ox);
        let top = (position.y as f64).mul_add(cell, oy);
        let bottom = ((position.y + 1) as f64).mul_add(cell, oy);

        match side {
            Side::Top => Rect {
                x0: left,
                y0: top,
                x1: right,
                y1: top + line,
            },
            Side::Bottom => Rect {
                x0: left,
                y0: bottom,
                x1: right + line,
                y1: bottom + line,
            },
            Side::Right => Rect {
                x0: right,
                y0: top,
                x1: right + line,
                y1: bottom + line,
            },
            Side::Left => Rect {
                x0: left,
                y0: top,
                x1: left + line,
                y1: bottom + line,
            },
        }
    }

    /// Every present wall of the grid in draw order
    ///
    /// Tiles are visited row by row; within a tile the order is top, bottom,
    /// right, left.
    pub fn wall_rects(&self, grid: &Grid) -> Vec<WallRect> {
        const DRAW_ORDER: [Side; 4] = [Side::Top, Side::Bottom, Side::Right, Side::Left];
        let (width, height) = (grid.width(), grid.height());

        grid.tiles()
            .flat_map(move |tile| {
                DRAW_ORDER
                    .into_iter()
                    .filter(move |&side| tile.has_wall(side))
                    .map(move |side| WallRect {
                        position: tile.position,
                        side,
                        rect: self.wall_rect(width, height, tile.position, side),
                    })
            })
            .collect()
    }
}
