//! Logger setup.

use std::{fs::File, io, path::Path};

use color_eyre::eyre::Result;
use env_logger::{Builder, Target};
use log::LevelFilter;

/// Maps the number of `-v` flags to a level filter.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Where log records end up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination<'a> {
    /// Standard error, only safe while no full-screen interface owns the terminal.
    Stderr,
    /// A file given on the command line.
    File(&'a Path),
    /// Nowhere.
    Discard,
}

/// Picks the log destination.
///
/// A log file always wins. Without one, records go to standard error unless the terminal viewer
/// is about to take over the screen, in which case they are dropped.
#[must_use]
pub const fn destination(log_file: Option<&Path>, viewer: bool) -> Destination<'_> {
    match (log_file, viewer) {
        (Some(path), _) => Destination::File(path),
        (None, true) => Destination::Discard,
        (None, false) => Destination::Stderr,
    }
}

/// Installs the global logger.
///
/// The level comes from `verbosity` and can be overridden through `RUST_LOG`. Records are written
/// to the [`destination`] picked from `log_file` and `viewer`, so they never tear through the
/// terminal viewer.
///
/// # Errors
///
/// This function may return errors if the log file cannot be created or if a logger is already
/// installed.
pub fn init(verbosity: u8, log_file: Option<&Path>, viewer: bool) -> Result<()> {
    let mut builder = Builder::new();
    let _ = builder.filter_level(level_for(verbosity)).parse_default_env();

    match destination(log_file, viewer) {
        Destination::Stderr => {}
        Destination::File(path) => {
            let _ = builder.target(Target::Pipe(Box::new(File::create(path)?)));
        }
        Destination::Discard => {
            let _ = builder.target(Target::Pipe(Box::new(io::sink())));
        }
    }

    builder.try_init()?;

    Ok(())
}
