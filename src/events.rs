//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::info;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};

use crate::App;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to [`handle_key`]. It uses a timeout
/// to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code)?;
            }
        }
    }

    Ok(())
}

/// Applies the action bound to a key.
///
/// - `q` quits the viewer
/// - `r` regenerates the maze with a fresh random seed
/// - `e` exports the maze as a labmap file
pub(crate) fn handle_key(app: &mut App, code: KeyCode) -> Result<()> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        KeyCode::Char('r') => app.regenerate(rand::random())?,
        KeyCode::Char('e') => {
            // A failed export is reported on screen rather than ending the session.
            if let Err(err) = app.export() {
                info!("export failed: {err}");
                app.status = Some(format!("export failed: {err}"));
            }
        }
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;
    use crate::config::Config;

    /// Creates a small app for event tests.
    fn create_test_app(args: &[&str]) -> App {
        let config = Config::try_parse_from(
            ["mazewright", "-W", "5", "-H", "4"]
                .into_iter()
                .chain(args.iter().copied()),
        )
        .expect("test arguments should parse");
        App::new(config, 3).expect("app should build")
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app(&[]);
        handle_key(&mut app, KeyCode::Char('q')).expect("quitting should succeed");
        assert!(app.exit);

        let mut app = create_test_app(&[]);
        handle_key(&mut app, KeyCode::Esc).expect("quitting should succeed");
        assert!(app.exit);
    }

    #[test]
    fn test_regenerate_key() {
        let mut app = create_test_app(&[]);

        handle_key(&mut app, KeyCode::Char('r')).expect("regeneration should succeed");

        assert!(!app.exit);
        assert_eq!(app.maze.width(), 5);
        assert_eq!(app.maze.grid().passage_count(), 19);
        assert!(app.status.is_some(), "regenerating should set a status");
    }

    #[test]
    fn test_export_failure_is_reported() {
        let mut app = create_test_app(&["-e", "/nonexistent-dir/for/sure/maze.labmap"]);

        handle_key(&mut app, KeyCode::Char('e')).expect("a failed export should not abort");

        assert!(!app.exit);
        assert!(
            app.status
                .as_deref()
                .is_some_and(|status| status.starts_with("export failed")),
            "the failure should be shown to the user"
        );
    }

    #[test]
    fn test_unbound_key_is_ignored() {
        let mut app = create_test_app(&[]);
        let before = app.maze.clone();

        handle_key(&mut app, KeyCode::Char('x')).expect("unbound keys should be ignored");

        assert!(!app.exit);
        assert_eq!(app.maze, before);
        assert_eq!(app.status, None);
    }
}
