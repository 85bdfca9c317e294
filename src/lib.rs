//! Printable random mazes built by randomized depth-first search
//!
//! Each page carves a spanning tree through a rectangular grid of tiles,
//! opens an entrance at the top-left and an exit at the bottom-right, and
//! rasterizes the remaining walls onto a fixed-size page. Pages are
//! collected into a single multi-page document.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Maze graph construction and spanning-tree carving
pub mod maze;
/// Wall geometry and page rasterization
pub mod render;

pub use io::error::{MazeError, Result};
