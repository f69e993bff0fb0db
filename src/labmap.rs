//! Plain-text `.labmap` export of rendered mazes.
//!
//! A labmap is a rectangle of digits, one per wall-space coordinate: `2` for a wall, `3` for an
//! open floor, `1` for the entrance opening and `4` for an exit opening. Both kinds of opening sit
//! on the outer border.

use std::{fs, path::Path};

use color_eyre::eyre::{ensure, Result};
use log::info;

use crate::{maze::Maze, raster::Raster, render};

/// Digit written for a wall.
const WALL: u8 = b'2';
/// Digit written for an open floor coordinate.
const FLOOR: u8 = b'3';
/// Digit written for the entrance opening.
const ENTRANCE: u8 = b'1';
/// Digit written for an exit opening.
const EXIT: u8 = b'4';

/// Encodes a raster as labmap rows, marking the given openings.
///
/// Rows are written in emission order, so the first line holds the wall-space row `y = 0`.
pub(crate) fn encode(raster: &Raster, entrance: (usize, usize), exit: (usize, usize)) -> String {
    let mut lines = Vec::with_capacity(raster.rows());

    for y in 0..raster.rows() {
        let line: String = (0..raster.columns())
            .map(|x| {
                let digit = if (x, y) == entrance {
                    ENTRANCE
                } else if (x, y) == exit {
                    EXIT
                } else if raster.is_wall(x, y) {
                    WALL
                } else {
                    FLOOR
                };
                char::from(digit)
            })
            .collect();
        lines.push(line);
    }

    lines.join("\n")
}

/// Encodes a maze as a labmap string.
///
/// # Errors
///
/// This function may return errors if the maze cannot be collected into a raster.
pub fn to_labmap(maze: &mut Maze) -> Result<String> {
    let raster = maze.raster()?;

    Ok(encode(&raster, render::entrance(), render::exit(maze.grid())))
}

/// Checks that text follows the labmap format.
///
/// The text must:
/// - Have at least three rows and three columns, with every row of the same length
/// - Contain only the digits 1 to 4
/// - Have exactly one entrance and at least one exit
/// - Hold openings only on the outer border, and only walls or openings there
pub fn validate(input: &str) -> bool {
    let lines: Vec<&str> = input.lines().collect();

    let Some(first_line) = lines.first() else {
        return false;
    };
    let expected_width = first_line.len();

    if lines.len() < 3 || expected_width < 3 {
        return false;
    }

    let last_row_idx = lines.len() - 1;
    let last_col_idx = expected_width - 1;
    let mut entrances = 0;
    let mut exits = 0;

    for (row_idx, line) in lines.iter().enumerate() {
        if line.len() != expected_width {
            return false;
        }

        for (col_idx, byte) in line.bytes().enumerate() {
            let is_edge =
                row_idx == 0 || row_idx == last_row_idx || col_idx == 0 || col_idx == last_col_idx;

            match byte {
                ENTRANCE if is_edge => entrances += 1,
                EXIT if is_edge => exits += 1,
                WALL => {}
                FLOOR if !is_edge => {}
                _ => return false,
            }
        }
    }

    entrances == 1 && exits >= 1
}

/// Writes the maze as a labmap file.
///
/// # Errors
///
/// This function may return errors if the maze cannot be encoded, if the encoded text fails
/// validation, or if the file cannot be written.
pub fn export(maze: &mut Maze, path: &Path) -> Result<()> {
    let contents = to_labmap(maze)?;
    ensure!(validate(&contents), "encoded maze is not a valid labmap");

    fs::write(path, format!("{contents}\n"))?;
    info!(
        "exported {}x{} maze to {}",
        maze.width(),
        maze.height(),
        path.display()
    );

    Ok(())
}
