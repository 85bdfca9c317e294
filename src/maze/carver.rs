//! Randomized depth-first search carving a spanning tree through the grid
//!
//! The walk is the classic recursive backtracker, driven by an explicit stack
//! so large grids cannot overflow the call stack. Each frame owns a shuffled
//! copy of its tile's neighbours and a cursor into it; a child frame is pushed
//! as soon as an unsearched neighbour is found, so a branch is exhausted
//! before its next sibling is tried.

use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::io::error::Result;
use crate::maze::grid::Grid;
use crate::maze::side::Side;
use crate::maze::tile::Position;

struct Frame {
    position: Position,
    candidates: Vec<Position>,
    next: usize,
}

impl Frame {
    fn enter<R: Rng>(grid: &Grid, position: Position, rng: &mut R) -> Result<Self> {
        let mut candidates = grid.tile(position)?.neighbours.clone();
        candidates.shuffle(rng);
        Ok(Self {
            position,
            candidates,
            next: 0,
        })
    }
}

/// Carve a spanning tree from a uniformly random start tile
///
/// Every tile reachable from the start ends up searched, linked to the tile
/// that discovered it, and walled on exactly the sides without a link.
/// Tiles that cannot be reached keep all four walls.
///
/// # Errors
///
/// Returns an error if a neighbour list refers to a position outside the
/// grid or to a tile that is not orthogonally adjacent
pub fn carve<R: Rng>(grid: &mut Grid, rng: &mut R) -> Result<()> {
    // Row is drawn before column
    let y = rng.random_range(0..grid.height());
    let x = rng.random_range(0..grid.width());
    let start = Position::new(x, y);
    trace!("carving {}x{} grid from {start:?}", grid.width(), grid.height());

    grid.tile_mut(start)?.searched = true;
    let mut stack = vec![Frame::enter(grid, start, rng)?];

    while let Some(frame) = stack.last_mut() {
        let Some(&candidate) = frame.candidates.get(frame.next) else {
            let position = frame.position;
            stack.pop();
            grid.tile_mut(position)?.seal_unconnected()?;
            continue;
        };
        frame.next += 1;
        let current = frame.position;

        let next = grid.tile_mut(candidate)?;
        if next.searched {
            continue;
        }
        next.searched = true;
        next.connected_from = Some(current);
        grid.tile_mut(current)?.connected_to.push(candidate);

        stack.push(Frame::enter(grid, candidate, rng)?);
    }

    Ok(())
}

/// Open the entrance (top of the first tile) and exit (bottom of the last tile)
///
/// # Errors
///
/// Returns `CoordinateOutOfRange` only for an empty grid, which `Grid::new` rejects
pub fn carve_exits(grid: &mut Grid) -> Result<()> {
    let last = Position::new(grid.width() - 1, grid.height() - 1);
    grid.tile_mut(Position::new(0, 0))?.remove_wall(Side::Top);
    grid.tile_mut(last)?.remove_wall(Side::Bottom);
    Ok(())
}

/// Build, carve and open a fresh maze
///
/// # Errors
///
/// Returns an error if the dimensions are rejected by `Grid::new`
pub fn generate<R: Rng>(width: usize, height: usize, rng: &mut R) -> Result<Grid> {
    let mut grid = Grid::new(width, height)?;
    carve(&mut grid, rng)?;
    carve_exits(&mut grid)?;
    Ok(grid)
}
