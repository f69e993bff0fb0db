//! Grid model holding the passage topology of a maze.
//!
//! Every cell stores exactly two flags, one toward its northern neighbour and one toward its
//! eastern neighbour. Southern and western passages are answered by looking at the flag of the
//! neighbour on that side, so each passage has a single owner: the cell with the lower coordinate
//! along the axis of the passage.

use crate::error::MazeError;

/// Grid coordinate of a single maze cell.
///
/// The `x` axis grows eastward and the `y` axis grows northward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Column of the cell.
    pub x: usize,
    /// Row of the cell.
    pub y: usize,
}

impl Cell {
    /// Builds a cell from its column and row.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the orthogonal neighbour in the given direction, without any upper bound check.
    ///
    /// Only steps below zero are rejected here, as the grid is the one that knows its own extent.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        match direction {
            Direction::North => self.y.checked_add(1).map(|y| Self::new(self.x, y)),
            Direction::South => self.y.checked_sub(1).map(|y| Self::new(self.x, y)),
            Direction::East => self.x.checked_add(1).map(|x| Self::new(x, self.y)),
            Direction::West => self.x.checked_sub(1).map(|x| Self::new(x, self.y)),
        }
    }
}

/// Orthogonal direction between two neighbouring cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward increasing `y`.
    North,
    /// Toward decreasing `y`.
    South,
    /// Toward increasing `x`.
    East,
    /// Toward decreasing `x`.
    West,
}

impl Direction {
    /// All directions, in the order the generator probes neighbours.
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Slot of the stored flag for the two directions that own storage.
    const fn slot(self) -> Option<usize> {
        match self {
            Self::North => Some(0),
            Self::East => Some(1),
            Self::South | Self::West => None,
        }
    }

    /// Returns the direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }
}

/// Fixed-size cell grid storing a north flag and an east flag per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Flag pairs `[north, east]`, indexed column-major as `x * height + y`.
    passages: Vec<[bool; 2]>,
}

impl Grid {
    /// Allocates a grid with every passage closed.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::InvalidDimension`] if either axis is zero or if the
    /// double-resolution wall space of `(2 * width + 1) x (2 * height + 1)` cannot be addressed.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let invalid = MazeError::InvalidDimension { width, height };

        if width == 0 || height == 0 {
            return Err(invalid);
        }

        let count = width.checked_mul(height).ok_or(invalid)?;
        let columns = width
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(1))
            .ok_or(invalid)?;
        let rows = height
            .checked_mul(2)
            .and_then(|doubled| doubled.checked_add(1))
            .ok_or(invalid)?;
        if columns.checked_mul(rows).is_none() {
            return Err(invalid);
        }

        Ok(Self {
            width,
            height,
            passages: vec![[false; 2]; count],
        })
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the total number of cells.
    pub(crate) const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Checks whether the cell lies inside the grid.
    #[must_use]
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Returns the in-bounds neighbour of `cell` in the given direction, if there is one.
    #[must_use]
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        cell.step(direction)
            .filter(|neighbor| self.contains(*neighbor))
    }

    /// Flat storage index of a cell, for use against column-major buffers of grid size.
    pub(crate) fn index(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.x * self.height + cell.y)
    }

    /// Iterates every cell row by row, starting from the southern row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }

    /// Reports whether a passage leads from `cell` in `direction`.
    ///
    /// South and west passages are read from the neighbour that owns them. Cells outside the grid
    /// and edges without a neighbour report no passage.
    #[must_use]
    pub fn has_passage(&self, cell: Cell, direction: Direction) -> bool {
        let (owner, slot) = match direction.slot() {
            Some(slot) => (Some(cell), slot),
            None => (
                cell.step(direction),
                direction.opposite().slot().unwrap_or_default(),
            ),
        };

        owner
            .and_then(|owner| self.index(owner))
            .and_then(|index| self.passages.get(index))
            .and_then(|flags| flags.get(slot))
            .copied()
            .unwrap_or(false)
    }

    /// Opens or closes the passage leading from `cell` in `direction`.
    ///
    /// South and west writes are redirected to the neighbour that owns the flag. North and east
    /// flags of the last row and column are still stored, so the outer edge can be opened.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::OutOfBounds`] when the owning cell lies outside the
    /// grid.
    pub fn set_passage(
        &mut self,
        cell: Cell,
        direction: Direction,
        value: bool,
    ) -> Result<(), MazeError> {
        let out_of_bounds = MazeError::OutOfBounds {
            x: cell.x,
            y: cell.y,
        };
        let (owner, slot) = match direction.slot() {
            Some(slot) => (cell, slot),
            None => (
                cell.step(direction).ok_or(out_of_bounds)?,
                direction.opposite().slot().unwrap_or_default(),
            ),
        };

        let flag = self
            .index(owner)
            .and_then(|index| self.passages.get_mut(index))
            .and_then(|flags| flags.get_mut(slot))
            .ok_or(out_of_bounds)?;
        *flag = value;

        Ok(())
    }

    /// Opens the east passage of the last cell, which leads out through the exit.
    ///
    /// The last cell is also the last entry of the column-major storage.
    pub(crate) fn open_exit(&mut self) {
        if let Some([_, east]) = self.passages.last_mut() {
            *east = true;
        }
    }

    /// Counts the open passages that join two cells of the grid.
    ///
    /// East flags on the last column and north flags on the last row lead off the grid and are not
    /// counted.
    #[must_use]
    pub fn passage_count(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Direction::North, Direction::East]
                    .into_iter()
                    .filter(|direction| {
                        self.neighbor(cell, *direction).is_some()
                            && self.has_passage(cell, *direction)
                    })
                    .count()
            })
            .sum()
    }
}
