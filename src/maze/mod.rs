//! Maze graph and carving
//!
//! This module contains:
//! - Wall sides and the neighbour direction rule
//! - Tiles and their connection state
//! - The grid that owns tiles and wires adjacency
//! - The randomized depth-first carver

/// Randomized depth-first spanning-tree carving
pub mod carver;
/// Tile storage and adjacency wiring
pub mod grid;
/// Wall sides and direction between adjacent tiles
pub mod side;
/// Tile state and wall manipulation
pub mod tile;

pub use grid::Grid;
pub use side::Side;
pub use tile::{Position, Tile};
