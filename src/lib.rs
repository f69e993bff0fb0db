//! Perfect-maze generation by randomized depth-first backtracking.
//!
//! The core of this crate is split in three layers:
//! - [`grid`] stores the passage topology, one north flag and one east flag per cell
//! - [`generator`] carves a spanning tree into a grid
//! - [`render`] emits the wall coordinates of a grid, at double resolution, to a caller-supplied
//!   callback
//!
//! The remaining modules consume that wall stream: [`raster`] collects it into a bitmap,
//! [`labmap`] exports it as a text map, and the terminal viewer draws it on screen.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod config;
pub mod error;
mod events;
pub mod generator;
pub mod grid;
pub mod labmap;
pub mod logging;
pub mod maze;
pub mod raster;
pub mod render;
mod ui;

pub use app::{run, App};
pub use config::Config;
pub use error::MazeError;
pub use maze::Maze;
