//! Rectangular tile grid with 4-connected adjacency
//!
//! The grid owns every tile of one maze. Tiles are stored row-major in an
//! `ndarray` matrix indexed `[y, x]` and refer to each other by `Position`,
//! so the neighbour graph is just coordinates into this one allocation.

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{MazeError, Result, invalid_parameter};
use crate::maze::tile::{Position, Tile};

/// All tiles of a single maze
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2<Tile>,
}

impl Grid {
    /// Build a `width` x `height` grid of fully walled tiles with neighbours wired
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or exceeds `MAX_GRID_DIMENSION`
    pub fn new(width: usize, height: usize) -> Result<Self> {
        for (parameter, value) in [("width", width), ("height", height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }

        let mut grid = Self {
            tiles: Array2::from_shape_fn((height, width), |(y, x)| Tile::new(x, y)),
        };
        grid.wire_neighbours();
        Ok(grid)
    }

    // Left, up, right, down; this order is what the carver shuffles
    fn wire_neighbours(&mut self) {
        let (width, height) = (self.width(), self.height());

        for tile in &mut self.tiles {
            let Position { x, y } = tile.position;
            if x > 0 {
                tile.neighbours.push(Position::new(x - 1, y));
            }
            if y > 0 {
                tile.neighbours.push(Position::new(x, y - 1));
            }
            if x + 1 < width {
                tile.neighbours.push(Position::new(x + 1, y));
            }
            if y + 1 < height {
                tile.neighbours.push(Position::new(x, y + 1));
            }
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.tiles.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.tiles.nrows()
    }

    /// Total number of tiles
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Look up a tile
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if the position is outside the grid
    pub fn tile(&self, position: Position) -> Result<&Tile> {
        let dimensions = (self.width(), self.height());
        self.tiles
            .get([position.y, position.x])
            .ok_or(MazeError::CoordinateOutOfRange {
                position: (position.x, position.y),
                dimensions,
            })
    }

    /// Look up a tile for mutation
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if the position is outside the grid
    pub fn tile_mut(&mut self, position: Position) -> Result<&mut Tile> {
        let dimensions = (self.width(), self.height());
        self.tiles
            .get_mut([position.y, position.x])
            .ok_or(MazeError::CoordinateOutOfRange {
                position: (position.x, position.y),
                dimensions,
            })
    }

    /// Iterate over tiles row by row, left to right
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of carved parent links; a fully carved grid has one fewer than its tiles
    pub fn edge_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.connected_from.is_some())
            .count()
    }

    /// Number of tiles the carver reached
    pub fn searched_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.searched).count()
    }
}
