//! Wall bitmap collected from the emitter.

use crate::{error::MazeError, render::WallSink};

/// Boolean wall bitmap covering the full double-resolution wall space of a maze.
///
/// Rows are indexed by the `y` coordinate of the emitter, so the first row is the southern border.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    /// Number of wall-space columns.
    columns: usize,
    /// Number of wall-space rows.
    rows: usize,
    /// Wall flags, indexed row-major as `y * columns + x`.
    walls: Vec<bool>,
}

impl Raster {
    /// Allocates an empty bitmap for a maze of `width` by `height` cells.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::InvalidDimension`] if the bitmap cannot be addressed.
    pub fn for_maze(width: usize, height: usize) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimension { width, height };
        let columns = width
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(1))
            .ok_or(invalid)?;
        let rows = height
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(1))
            .ok_or(invalid)?;

        Ok(Self {
            columns,
            rows,
            walls: vec![false; columns.checked_mul(rows).ok_or(invalid)?],
        })
    }

    /// Returns the number of wall-space columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the number of wall-space rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Reports whether a wall was placed at the coordinate. Coordinates outside are open.
    #[must_use]
    pub fn is_wall(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .and_then(|index| self.walls.get(index))
            .copied()
            .unwrap_or(false)
    }

    /// Counts the distinct wall coordinates.
    #[must_use]
    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|wall| **wall).count()
    }

    /// Iterates the coordinates holding a wall, row by row.
    pub fn walls(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows).flat_map(move |y| {
            (0..self.columns)
                .filter(move |x| self.is_wall(*x, y))
                .map(move |x| (x, y))
        })
    }

    /// Renders every row as text, starting with the first emitted row.
    #[must_use]
    pub fn text_rows(&self, wall: char, floor: char) -> Vec<String> {
        (0..self.rows)
            .map(|y| {
                (0..self.columns)
                    .map(|x| if self.is_wall(x, y) { wall } else { floor })
                    .collect()
            })
            .collect()
    }

    /// Flat index of an in-bounds coordinate.
    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.columns && y < self.rows {
            Some(y * self.columns + x)
        } else {
            None
        }
    }
}

impl WallSink for Raster {
    type Error = MazeError;

    fn place_wall(&mut self, x: usize, y: usize) -> Result<(), Self::Error> {
        let wall = self
            .index(x, y)
            .and_then(|index| self.walls.get_mut(index))
            .ok_or(MazeError::WallOutOfRaster { x, y })?;
        *wall = true;

        Ok(())
    }
}
