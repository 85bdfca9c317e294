//! Error types for maze generation, rendering and document export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all maze operations
#[derive(Debug)]
pub enum MazeError {
    /// Wall side identifier outside `top`, `right`, `bottom`, `left` (or 0..4)
    InvalidSide {
        /// The rejected identifier as given
        side: String,
    },

    /// Direction requested between tiles that are not orthogonally adjacent
    NotAdjacent {
        /// Tile the direction is measured from
        from: (usize, usize),
        /// Tile the direction points to
        to: (usize, usize),
    },

    /// Tile lookup outside the grid
    CoordinateOutOfRange {
        /// Requested coordinate (x, y)
        position: (usize, usize),
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Document cannot be written in its current state
    InvalidDocument {
        /// Description of what's wrong with the document
        reason: String,
    },

    /// Failed to encode or save a rendered page
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSide { side } => {
                write!(
                    f,
                    "Invalid wall side '{side}': expected top, right, bottom or left"
                )
            }
            Self::NotAdjacent { from, to } => {
                write!(
                    f,
                    "Tiles ({}, {}) and ({}, {}) are not orthogonally adjacent",
                    from.0, from.1, to.0, to.1
                )
            }
            Self::CoordinateOutOfRange {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Coordinate ({}, {}) is outside the {}x{} grid",
                    position.0, position.1, dimensions.0, dimensions.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidDocument { reason } => {
                write!(f, "Invalid document: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for maze results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
