//! Error types raised by the maze core.

use thiserror::Error;

/// Errors that can occur while building, generating or rendering a maze.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[expect(
    clippy::module_name_repetitions,
    reason = "Re-exported at the crate root, where a bare `Error` would be ambiguous."
)]
pub enum MazeError {
    /// The requested grid has a zero-sized axis, or is too large to address at double resolution.
    #[error("invalid maze dimension: {width}x{height}")]
    InvalidDimension {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },

    /// A passage was written through a cell outside the grid.
    #[error("cell ({x}, {y}) lies outside the grid")]
    OutOfBounds {
        /// Column of the offending cell.
        x: usize,
        /// Row of the offending cell.
        y: usize,
    },

    /// Two cells passed to the linker are not orthogonal neighbours.
    #[error("cells ({0}, {1}) and ({2}, {3}) are not adjacent")]
    NotAdjacent(usize, usize, usize, usize),

    /// The backtracking walk ran out of cells while some were still unvisited.
    #[error("internal error: generation path exhausted with {unvisited} cells unvisited")]
    ExhaustedPath {
        /// Number of cells never reached.
        unvisited: usize,
    },

    /// A wall coordinate fell outside the bitmap collecting it.
    #[error("wall ({x}, {y}) lies outside the raster")]
    WallOutOfRaster {
        /// Emitted column.
        x: usize,
        /// Emitted row.
        y: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let dimension = MazeError::InvalidDimension {
            width: 0,
            height: 4,
        };
        let exhausted = MazeError::ExhaustedPath { unvisited: 3 };

        assert_eq!(dimension.to_string(), "invalid maze dimension: 0x4");
        assert!(
            exhausted.to_string().starts_with("internal error"),
            "invariant breaks should be labelled as internal"
        );
    }

    #[test]
    fn test_not_adjacent_message() {
        let error = MazeError::NotAdjacent(0, 0, 2, 0);

        assert_eq!(error.to_string(), "cells (0, 0) and (2, 0) are not adjacent");
    }
}
