//! Core application state and entry point for the maze viewer.

use std::io;

use color_eyre::eyre::Result;
use log::info;
use ratatui::DefaultTerminal;

use crate::{config::Config, events, labmap, maze::Maze, raster::Raster, ui};

/// Character printed for a wall in plain-text output.
const TEXT_WALL: char = '#';
/// Character printed for an open coordinate in plain-text output.
const TEXT_FLOOR: char = ' ';

/// Application state container for the maze viewer.
///
/// This structure holds the maze being shown along with the bitmap collected from its walls, so
/// the screen can be redrawn without re-running the emitter on every frame.
pub struct App {
    /// Application exit flag.
    ///
    /// This field is set to `true` when the user asks to quit and starts off `false`.
    pub(crate) exit: bool,
    /// Configuration the application was launched with.
    pub(crate) config: Config,
    /// Seed of the maze currently displayed.
    pub(crate) seed: u64,
    /// Maze currently displayed.
    pub(crate) maze: Maze,
    /// Wall bitmap of [`maze`](App::maze), refreshed whenever the maze is regenerated.
    pub(crate) raster: Raster,
    /// Feedback shown at the bottom of the screen after the last action, if any.
    pub(crate) status: Option<String>,
}

impl App {
    /// Creates the application state with a maze generated from `seed`.
    ///
    /// # Errors
    ///
    /// This function may return errors if the configured dimensions are invalid.
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        let mut maze = Maze::from_seed(config.width, config.height, seed)?;
        let raster = maze.raster()?;

        Ok(Self {
            exit: false,
            config,
            seed,
            maze,
            raster,
            status: None,
        })
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and redraws the screen. The loop continues until the exit
    /// condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Replaces the displayed maze with a fresh one of the same size.
    ///
    /// # Errors
    ///
    /// This function may return errors if generation or wall collection fails.
    pub(crate) fn regenerate(&mut self, seed: u64) -> Result<()> {
        let mut maze = Maze::from_seed(self.config.width, self.config.height, seed)?;
        self.raster = maze.raster()?;
        self.maze = maze;
        self.seed = seed;
        self.status = Some(format!("regenerated with seed {seed}"));
        info!("regenerated maze with seed {seed}");

        Ok(())
    }

    /// Writes the displayed maze to the configured labmap path.
    ///
    /// # Errors
    ///
    /// This function may return errors if the file cannot be written.
    pub(crate) fn export(&mut self) -> Result<()> {
        let path = self.config.export_path(self.seed);
        labmap::export(&mut self.maze, &path)?;
        self.status = Some(format!("exported to {}", path.display()));

        Ok(())
    }
}

/// Writes the maze as plain text, one line per wall-space row.
///
/// # Errors
///
/// This function may return errors if the output cannot be written.
pub(crate) fn print<W: io::Write>(raster: &Raster, out: &mut W) -> Result<()> {
    for row in raster.text_rows(TEXT_WALL, TEXT_FLOOR) {
        writeln!(out, "{}", row.trim_end())?;
    }

    Ok(())
}

/// Generates a maze according to `config` and presents it.
///
/// The maze is exported first when an export path is configured. It is then either printed as
/// plain text or shown in the terminal viewer until the user quits.
///
/// # Errors
///
/// This function may return errors if the dimensions are invalid, if exporting fails, or from
/// terminal I/O.
pub fn run(config: Config) -> Result<()> {
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "building {}x{} maze with seed {seed}",
        config.width, config.height
    );

    let mut app = App::new(config, seed)?;

    if let Some(path) = app.config.export.clone() {
        labmap::export(&mut app.maze, &path)?;
    }

    if app.config.print {
        return print(&app.raster, &mut io::stdout().lock());
    }

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result
}
