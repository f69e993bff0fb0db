//! Wall emission at double resolution.
//!
//! Each maze cell `(i, j)` owns the wall space coordinate `(2i + 1, 2j + 1)`, and the coordinates
//! between two cells hold the wall segment separating them. The full wall space is therefore
//! `(2 * width + 1) x (2 * height + 1)`, with neighbouring cells sharing their walls. The emitter
//! never interprets the coordinates itself: it hands each of them to a caller-supplied callback.

use log::debug;

use crate::grid::{Cell, Direction, Grid};

/// Receiver of wall coordinates.
///
/// Implemented by collectors that want to consume the emitted walls as a value rather than
/// through a closure.
pub trait WallSink {
    /// Error raised when a wall cannot be placed.
    type Error;

    /// Places a single wall at the given wall-space coordinate.
    ///
    /// # Errors
    ///
    /// Implementations decide which coordinates they cannot place.
    fn place_wall(&mut self, x: usize, y: usize) -> Result<(), Self::Error>;
}

/// Opening left in the western border, next to the first cell.
#[must_use]
pub const fn entrance() -> (usize, usize) {
    (0, 1)
}

/// Opening left in the eastern border, next to the last cell.
#[must_use]
pub const fn exit(grid: &Grid) -> (usize, usize) {
    (grid.width() * 2, grid.height() * 2 - 1)
}

/// Emits every wall of the maze through `place_wall`.
///
/// Walls are emitted in a fixed order: the southern and northern borders, the western and eastern
/// borders without the [`entrance`] and [`exit`] openings, the interior corner posts, and finally
/// the east and north wall of every cell still closed. Before the per-cell walls, the east passage
/// of the last cell is opened so the [`exit`] is never blocked. Re-rendering the same grid is
/// idempotent and yields the same sequence.
///
/// # Errors
///
/// The first error returned by `place_wall` stops the emission and is returned unchanged.
pub fn render<E, F>(grid: &mut Grid, mut place_wall: F) -> Result<(), E>
where
    F: FnMut(usize, usize) -> Result<(), E>,
{
    let width = grid.width();
    let height = grid.height();

    for i in 0..=width * 2 {
        place_wall(i, 0)?;
        place_wall(i, height * 2)?;
    }

    for j in 0..height * 2 - 1 {
        if j != 0 {
            place_wall(0, j + 1)?;
        }
        if j != height * 2 - 2 {
            place_wall(width * 2, j + 1)?;
        }
    }

    for j in 0..height - 1 {
        for i in 0..width - 1 {
            place_wall(i * 2 + 2, j * 2 + 2)?;
        }
    }

    grid.open_exit();

    for j in 0..height {
        for i in 0..width {
            let cell = Cell::new(i, j);
            if !grid.has_passage(cell, Direction::East) {
                place_wall(i * 2 + 2, j * 2 + 1)?;
            }
            if !grid.has_passage(cell, Direction::North) {
                place_wall(i * 2 + 1, j * 2 + 2)?;
            }
        }
    }

    debug!("rendered {width}x{height} maze");

    Ok(())
}

/// Emits every wall of the maze into a [`WallSink`].
///
/// # Errors
///
/// This function forwards the first error raised by the sink.
#[expect(
    clippy::module_name_repetitions,
    reason = "Reads as the sink counterpart of `render`."
)]
pub fn render_into<S: WallSink + ?Sized>(grid: &mut Grid, sink: &mut S) -> Result<(), S::Error> {
    render(grid, |x, y| sink.place_wall(x, y))
}
