//! Wall sides of a tile and the direction between adjacent tiles

use std::fmt;
use std::str::FromStr;

use crate::io::error::{MazeError, Result};
use crate::maze::tile::Position;

/// One of the four walls of a tile, indexed clockwise from the top
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Wall shared with the tile above
    Top = 0,
    /// Wall shared with the tile to the right
    Right = 1,
    /// Wall shared with the tile below
    Bottom = 2,
    /// Wall shared with the tile to the left
    Left = 3,
}

impl Side {
    /// All sides in index order
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Index into a tile's wall array
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Side for a wall array index
    ///
    /// # Errors
    ///
    /// Returns `InvalidSide` for indices of 4 or more
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| MazeError::InvalidSide {
                side: index.to_string(),
            })
    }

    /// The side facing this one across a shared wall
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
        }
    }

    /// Side of `from` that faces the adjacent tile `to`
    ///
    /// Same column: `1 + (to.y - from.y)`, giving top (0) or bottom (2).
    /// Otherwise: `2 + (from.x - to.x)`, giving right (1) or left (3).
    ///
    /// # Errors
    ///
    /// Returns `NotAdjacent` unless the tiles are exactly one step apart
    /// horizontally or vertically
    pub fn toward(from: Position, to: Position) -> Result<Self> {
        let dx = to.x as i64 - from.x as i64;
        let dy = to.y as i64 - from.y as i64;

        let index = match (dx, dy) {
            (0, -1 | 1) => 1 + dy,
            (-1 | 1, 0) => 2 - dx,
            _ => {
                return Err(MazeError::NotAdjacent {
                    from: (from.x, from.y),
                    to: (to.x, to.y),
                });
            }
        };

        Self::from_index(index as usize)
    }

    /// Lowercase name of the side
    pub const fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Side {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            _ => Err(MazeError::InvalidSide {
                side: s.to_string(),
            }),
        }
    }
}
