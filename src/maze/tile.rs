//! Maze tiles: grid nodes carrying wall state and carved connections

use crate::io::error::Result;
use crate::maze::side::Side;

/// Grid coordinate of a tile, used as its handle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column, growing to the right
    pub x: usize,
    /// Row, growing downwards
    pub y: usize,
}

impl Position {
    /// Create a position from column and row
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// One cell of the maze
///
/// Connections are stored as positions rather than references so the
/// mutual neighbour lists never form ownership cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Location of this tile in its grid
    pub position: Position,
    /// Set once the carver has reached this tile
    pub searched: bool,
    /// Tile that discovered this one (None for the start tile)
    pub connected_from: Option<Position>,
    /// Tiles discovered from this one, in discovery order
    pub connected_to: Vec<Position>,
    /// Orthogonally adjacent tiles (left, up, right, down when present)
    pub neighbours: Vec<Position>,
    /// Wall presence indexed by `Side::index`
    pub walls: [bool; 4],
}

impl Tile {
    /// Create an unvisited, fully walled tile with no neighbours
    pub const fn new(x: usize, y: usize) -> Self {
        Self {
            position: Position::new(x, y),
            searched: false,
            connected_from: None,
            connected_to: Vec::new(),
            neighbours: Vec::new(),
            walls: [true; 4],
        }
    }

    /// Whether the wall on `side` is present
    pub const fn has_wall(&self, side: Side) -> bool {
        let [top, right, bottom, left] = self.walls;
        match side {
            Side::Top => top,
            Side::Right => right,
            Side::Bottom => bottom,
            Side::Left => left,
        }
    }

    /// Raise the wall on `side`
    pub fn add_wall(&mut self, side: Side) -> &mut Self {
        self.set_wall(side, true)
    }

    /// Knock down the wall on `side`
    pub fn remove_wall(&mut self, side: Side) -> &mut Self {
        self.set_wall(side, false)
    }

    fn set_wall(&mut self, side: Side, present: bool) -> &mut Self {
        *self.wall_mut(side) = present;
        self
    }

    const fn wall_mut(&mut self, side: Side) -> &mut bool {
        let [top, right, bottom, left] = &mut self.walls;
        match side {
            Side::Top => top,
            Side::Right => right,
            Side::Bottom => bottom,
            Side::Left => left,
        }
    }

    /// Sides with no wall
    pub fn open_sides(&self) -> Vec<Side> {
        Side::ALL
            .into_iter()
            .filter(|&side| !self.has_wall(side))
            .collect()
    }

    /// Wall every side except those facing carved connections
    ///
    /// # Errors
    ///
    /// Returns `NotAdjacent` if a recorded connection is not an orthogonal
    /// neighbour of this tile
    pub fn seal_unconnected(&mut self) -> Result<&mut Self> {
        let open = self
            .connected_from
            .iter()
            .chain(&self.connected_to)
            .map(|&other| Side::toward(self.position, other))
            .collect::<Result<Vec<_>>>()?;

        for side in Side::ALL {
            self.set_wall(side, !open.contains(&side));
        }

        Ok(self)
    }
}
