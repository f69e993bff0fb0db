//! Randomized depth-first maze generation with backtracking.
//!
//! The walk always extends the most recently reached cell. When that cell has no unvisited
//! neighbours left, the walk retreats along its own path until it finds one that does. Every cell
//! is entered exactly once, so the passages carved along the way form a spanning tree of the grid.

use log::{debug, trace};
use rand::{seq::SliceRandom as _, Rng};

use crate::{
    error::MazeError,
    grid::{Cell, Direction, Grid},
};

/// Transient state of a single generation run.
///
/// The visited matrix and the path stack only live for the duration of [`generate`].
#[derive(Debug)]
pub(crate) struct Walk {
    /// Number of columns of the grid being carved.
    width: usize,
    /// Number of rows of the grid being carved.
    height: usize,
    /// Visited flags, indexed column-major like the grid storage.
    visited: Vec<bool>,
    /// Cells of the current depth-first branch, oldest first.
    path: Vec<Cell>,
    /// Number of cells never entered.
    unvisited: usize,
}

impl Walk {
    /// Prepares a walk over a grid of the given extent, with nothing visited.
    pub(crate) fn new(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            visited: vec![false; grid.len()],
            path: Vec::new(),
            unvisited: grid.len(),
        }
    }

    /// Storage index of an in-bounds cell.
    const fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x < self.width && cell.y < self.height {
            Some(cell.x * self.height + cell.y)
        } else {
            None
        }
    }

    /// Reports whether the cell has been entered. Cells outside the grid count as visited.
    pub(crate) fn is_visited(&self, cell: Cell) -> bool {
        self.index(cell)
            .and_then(|index| self.visited.get(index))
            .copied()
            .unwrap_or(true)
    }

    /// Marks a cell as entered and pushes it on the path.
    pub(crate) fn enter(&mut self, cell: Cell) -> Result<(), MazeError> {
        let flag = self
            .index(cell)
            .and_then(|index| self.visited.get_mut(index))
            .ok_or(MazeError::OutOfBounds {
                x: cell.x,
                y: cell.y,
            })?;

        if !*flag {
            *flag = true;
            self.unvisited -= 1;
        }
        self.path.push(cell);

        Ok(())
    }

    /// Lists the in-bounds, unvisited neighbours of `cell` in north, south, east, west order.
    pub(crate) fn possible_moves(&self, cell: Cell) -> Vec<Cell> {
        Direction::ALL
            .into_iter()
            .filter_map(|direction| cell.step(direction))
            .filter(|neighbor| !self.is_visited(*neighbor))
            .collect()
    }

    /// Retreats along the path to the most recent cell that still has a possible move.
    ///
    /// The tail of the path is dropped first, since it is the exhausted cell the walk is leaving.
    /// Returns [`None`] once the whole path has been unwound.
    pub(crate) fn backtrack(&mut self) -> Option<Cell> {
        let _ = self.path.pop();

        while let Some(&last) = self.path.last() {
            if !self.possible_moves(last).is_empty() {
                trace!("backtracked to ({}, {})", last.x, last.y);
                return Some(last);
            }
            let _ = self.path.pop();
        }

        None
    }
}

/// Opens the passage between two orthogonally adjacent cells.
///
/// The flag is written on whichever cell has the lower coordinate along the axis they differ in.
///
/// # Errors
///
/// This function returns [`MazeError::NotAdjacent`] if the cells do not differ by exactly one step
/// along exactly one axis, and [`MazeError::OutOfBounds`] if the lower cell is outside the grid.
pub fn link_cells(grid: &mut Grid, first: Cell, second: Cell) -> Result<(), MazeError> {
    let not_adjacent = MazeError::NotAdjacent(first.x, first.y, second.x, second.y);

    match (first.x.abs_diff(second.x), first.y.abs_diff(second.y)) {
        (1, 0) => grid.set_passage(first.min(second), Direction::East, true),
        (0, 1) => grid.set_passage(first.min(second), Direction::North, true),
        _ => Err(not_adjacent),
    }
}

/// Draws the starting cell of the walk.
///
/// Both axes are sampled from the half-open range `[0, len - 1)`, so the last column and the last
/// row are never picked as a root. An axis of length one always yields zero.
fn start_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Cell {
    let sample = |rng: &mut R, len: usize| {
        if len > 1 {
            rng.gen_range(0..len - 1)
        } else {
            0
        }
    };

    let x = sample(rng, grid.width());
    let y = sample(rng, grid.height());

    Cell::new(x, y)
}

/// Generates a perfect maze over a `width` by `height` grid.
///
/// # Errors
///
/// This function returns [`MazeError::InvalidDimension`] for a zero-sized axis, and
/// [`MazeError::ExhaustedPath`] if the walk ever unwinds completely while cells remain unvisited,
/// which would indicate a bug in the walk rather than a bad input.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(width, height)?;
    let mut walk = Walk::new(&grid);

    let mut current = start_cell(&grid, rng);
    walk.enter(current)?;
    debug!(
        "generating {width}x{height} maze from ({}, {})",
        current.x, current.y
    );

    while walk.unvisited > 0 {
        let moves = walk.possible_moves(current);
        let Some(&next) = moves.choose(rng) else {
            current = walk.backtrack().ok_or(MazeError::ExhaustedPath {
                unvisited: walk.unvisited,
            })?;
            continue;
        };

        link_cells(&mut grid, current, next)?;
        walk.enter(next)?;
        current = next;
    }

    debug!("carved {} passages", grid.passage_count());

    Ok(grid)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::SeedableRng as _;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    /// Counts the cells reachable from the origin by following open passages.
    fn reachable_cells(grid: &Grid) -> usize {
        let mut seen = vec![false; grid.len()];
        let mut queue = VecDeque::from([Cell::new(0, 0)]);
        let mut count = 0;

        while let Some(cell) = queue.pop_front() {
            let index = grid.index(cell).expect("queued cell should be in bounds");
            let flag = seen.get_mut(index).expect("index should fit the buffer");
            if *flag {
                continue;
            }
            *flag = true;
            count += 1;

            for direction in Direction::ALL {
                if grid.has_passage(cell, direction) {
                    if let Some(neighbor) = grid.neighbor(cell, direction) {
                        queue.push_back(neighbor);
                    }
                }
            }
        }

        count
    }

    #[test]
    fn test_generate_spanning_tree() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        for (width, height) in [(1, 1), (1, 9), (9, 1), (2, 2), (5, 8), (35, 35)] {
            let grid = generate(width, height, &mut rng).expect("generation should succeed");

            assert_eq!(
                grid.passage_count(),
                width * height - 1,
                "a {width}x{height} perfect maze should have one passage less than cells"
            );
            assert_eq!(
                reachable_cells(&grid),
                width * height,
                "every cell of a {width}x{height} maze should be reachable"
            );
        }
    }

    #[test]
    fn test_generate_deterministic_with_seed() {
        let first = generate(12, 9, &mut ChaCha8Rng::seed_from_u64(42))
            .expect("generation should succeed");
        let second = generate(12, 9, &mut ChaCha8Rng::seed_from_u64(42))
            .expect("generation should succeed");
        let other = generate(12, 9, &mut ChaCha8Rng::seed_from_u64(43))
            .expect("generation should succeed");

        assert_eq!(first, second);
        assert_ne!(first, other, "different seeds should carve different mazes");
    }

    #[test]
    fn test_generate_single_cell() {
        let grid = generate(1, 1, &mut ChaCha8Rng::seed_from_u64(0))
            .expect("generation should succeed");

        assert_eq!(grid.passage_count(), 0);
        assert!(!grid.has_passage(Cell::new(0, 0), Direction::East));
        assert!(!grid.has_passage(Cell::new(0, 0), Direction::North));
    }

    #[test]
    fn test_generate_invalid_dimension() {
        let result = generate(0, 3, &mut ChaCha8Rng::seed_from_u64(0));

        assert_eq!(
            result,
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 3
            })
        );
    }

    #[test]
    fn test_start_cell_half_open_range() {
        let grid = Grid::new(4, 3).expect("failed to create grid");
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for _ in 0..200 {
            let cell = start_cell(&grid, &mut rng);
            assert!(cell.x < 3, "start column should never be the last column");
            assert!(cell.y < 2, "start row should never be the last row");
        }

        let narrow = Grid::new(1, 1).expect("failed to create grid");
        assert_eq!(start_cell(&narrow, &mut rng), Cell::new(0, 0));
    }

    #[test]
    fn test_possible_moves_order_and_bounds() {
        let grid = Grid::new(3, 3).expect("failed to create grid");
        let mut walk = Walk::new(&grid);

        assert_eq!(
            walk.possible_moves(Cell::new(1, 1)),
            vec![
                Cell::new(1, 2),
                Cell::new(1, 0),
                Cell::new(2, 1),
                Cell::new(0, 1)
            ]
        );
        assert_eq!(
            walk.possible_moves(Cell::new(0, 0)),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );

        walk.enter(Cell::new(1, 2)).expect("failed to enter cell");
        assert_eq!(
            walk.possible_moves(Cell::new(1, 1)),
            vec![Cell::new(1, 0), Cell::new(2, 1), Cell::new(0, 1)]
        );
    }

    #[test]
    fn test_possible_moves_empty_when_all_visited() {
        let grid = Grid::new(4, 3).expect("failed to create grid");
        let mut walk = Walk::new(&grid);

        for cell in grid.cells() {
            walk.enter(cell).expect("failed to enter cell");
        }

        assert_eq!(walk.unvisited, 0);
        assert!(
            grid.cells().all(|cell| walk.possible_moves(cell).is_empty()),
            "a fully visited grid should offer no moves"
        );
    }

    #[test]
    fn test_backtrack_returns_latest_open_cell() {
        let grid = Grid::new(3, 1).expect("failed to create grid");
        let mut walk = Walk::new(&grid);

        walk.enter(Cell::new(1, 0)).expect("failed to enter cell");
        walk.enter(Cell::new(2, 0)).expect("failed to enter cell");

        assert_eq!(walk.backtrack(), Some(Cell::new(1, 0)));
        assert_eq!(walk.path, vec![Cell::new(1, 0)]);
    }

    #[test]
    fn test_backtrack_exhausts_path() {
        let grid = Grid::new(2, 1).expect("failed to create grid");
        let mut walk = Walk::new(&grid);

        walk.enter(Cell::new(0, 0)).expect("failed to enter cell");
        walk.enter(Cell::new(1, 0)).expect("failed to enter cell");

        assert_eq!(walk.backtrack(), None);
        assert!(walk.path.is_empty(), "the path should be fully unwound");
    }

    #[test]
    fn test_link_cells_sets_lower_flag() {
        let mut grid = Grid::new(3, 3).expect("failed to create grid");

        link_cells(&mut grid, Cell::new(2, 1), Cell::new(1, 1)).expect("cells should link");
        link_cells(&mut grid, Cell::new(0, 1), Cell::new(0, 2)).expect("cells should link");

        assert!(grid.has_passage(Cell::new(1, 1), Direction::East));
        assert!(grid.has_passage(Cell::new(0, 1), Direction::North));
        assert!(!grid.has_passage(Cell::new(2, 1), Direction::East));
        assert_eq!(grid.passage_count(), 2);
    }

    #[test]
    fn test_link_cells_rejects_non_adjacent() {
        let mut grid = Grid::new(3, 3).expect("failed to create grid");

        assert_eq!(
            link_cells(&mut grid, Cell::new(0, 0), Cell::new(1, 1)),
            Err(MazeError::NotAdjacent(0, 0, 1, 1))
        );
        assert_eq!(
            link_cells(&mut grid, Cell::new(0, 0), Cell::new(0, 0)),
            Err(MazeError::NotAdjacent(0, 0, 0, 0))
        );
        assert_eq!(
            link_cells(&mut grid, Cell::new(0, 0), Cell::new(2, 0)),
            Err(MazeError::NotAdjacent(0, 0, 2, 0))
        );
    }
}
