//! Generated maze and its rendering entry points.

use std::convert::Infallible;

use rand::{Rng, SeedableRng as _};
use rand_chacha::ChaCha8Rng;

use crate::{
    error::MazeError,
    generator,
    grid::Grid,
    raster::Raster,
    render::{self, WallSink},
};

/// A fully generated perfect maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze {
    /// Passage topology carved by the generator.
    grid: Grid,
}

impl Maze {
    /// Generates a maze using the thread-local random generator.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::InvalidDimension`] if either axis is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        Self::from_rng(width, height, &mut rand::thread_rng())
    }

    /// Generates a maze reproducibly from a seed.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::InvalidDimension`] if either axis is zero.
    pub fn from_seed(width: usize, height: usize, seed: u64) -> Result<Self, MazeError> {
        Self::from_rng(width, height, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generates a maze drawing every random choice from `rng`.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::InvalidDimension`] if either axis is zero, and
    /// [`MazeError::ExhaustedPath`] if the generator breaks its own invariant.
    pub fn from_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
    ) -> Result<Self, MazeError> {
        Ok(Self {
            grid: generator::generate(width, height, rng)?,
        })
    }

    /// Returns the underlying grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the number of cell columns.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.grid.width()
    }

    /// Returns the number of cell rows.
    #[must_use]
    pub const fn height(&self) -> usize {
        self.grid.height()
    }

    /// Emits every wall through `place_wall`. See [`render::render`].
    ///
    /// # Errors
    ///
    /// The first error returned by `place_wall` stops the emission and is returned unchanged.
    pub fn render<E, F>(&mut self, place_wall: F) -> Result<(), E>
    where
        F: FnMut(usize, usize) -> Result<(), E>,
    {
        render::render(&mut self.grid, place_wall)
    }

    /// Emits every wall into a [`WallSink`].
    ///
    /// # Errors
    ///
    /// This function forwards the first error raised by the sink.
    pub fn render_into<S: WallSink + ?Sized>(&mut self, sink: &mut S) -> Result<(), S::Error> {
        render::render_into(&mut self.grid, sink)
    }

    /// Collects the emitted walls in emission order, duplicates included.
    #[must_use]
    pub fn walls(&mut self) -> Vec<(usize, usize)> {
        let mut walls = Vec::new();
        self.render(|x, y| {
            walls.push((x, y));
            Ok::<(), Infallible>(())
        })
        .unwrap_or_else(|never| match never {});

        walls
    }

    /// Collects the emitted walls into a bitmap.
    ///
    /// # Errors
    ///
    /// This function returns [`MazeError::WallOutOfRaster`] if the emitter leaves its own wall
    /// space, which would indicate a bug in the emitter.
    pub fn raster(&mut self) -> Result<Raster, MazeError> {
        let mut raster = Raster::for_maze(self.width(), self.height())?;
        self.render_into(&mut raster)?;

        Ok(raster)
    }
}
