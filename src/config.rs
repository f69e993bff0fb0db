//! Command-line configuration.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Runtime configuration parsed from the command line.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(version, about)]
pub struct Config {
    /// Number of maze cells along the horizontal axis.
    #[arg(short = 'W', long, default_value_t = 35)]
    pub width: usize,
    /// Number of maze cells along the vertical axis.
    #[arg(short = 'H', long, default_value_t = 35)]
    pub height: usize,
    /// Seed for reproducible generation; a random one is drawn when absent.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Print the maze as plain text to standard output instead of opening the viewer.
    #[arg(short, long)]
    pub print: bool,
    /// Write the maze to this path as a labmap file.
    #[arg(short, long, value_name = "PATH")]
    pub export: Option<PathBuf>,
    /// Send log output to this file rather than standard error.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
    /// Increase log verbosity; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    /// Path used by the viewer's export key when no export path was given.
    #[must_use]
    pub fn export_path(&self, seed: u64) -> PathBuf {
        self.export
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("maze-{seed}.labmap")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::try_parse_from(["mazewright"]).expect("defaults should parse");

        assert_eq!(config.width, 35);
        assert_eq!(config.height, 35);
        assert_eq!(config.seed, None);
        assert!(!config.print);
        assert_eq!(config.export, None);
        assert_eq!(config.verbose, 0);
    }

    #[test]
    fn test_config_all_flags() {
        let config = Config::try_parse_from([
            "mazewright",
            "-W",
            "12",
            "--height",
            "8",
            "--seed",
            "77",
            "--print",
            "--export",
            "out.labmap",
            "--log-file",
            "maze.log",
            "-vv",
        ])
        .expect("flags should parse");

        assert_eq!(config.width, 12);
        assert_eq!(config.height, 8);
        assert_eq!(config.seed, Some(77));
        assert!(config.print);
        assert_eq!(config.export, Some(PathBuf::from("out.labmap")));
        assert_eq!(config.log_file, Some(PathBuf::from("maze.log")));
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn test_config_rejects_negative_width() {
        let result = Config::try_parse_from(["mazewright", "--width", "-3"]);

        assert!(result.is_err(), "a negative width should not parse");
    }

    #[test]
    fn test_export_path_fallback() {
        let config = Config::try_parse_from(["mazewright"]).expect("defaults should parse");

        assert_eq!(config.export_path(5), PathBuf::from("maze-5.labmap"));
    }
}
