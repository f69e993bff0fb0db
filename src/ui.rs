//! User interface rendering for the maze viewer.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear,
    },
    Frame,
};

use crate::{raster::Raster, App};

/// Help line shown beneath the maze.
const HELP: &str = "(r) regenerate / (e) export / (q) quit";

/// Updates the application UI based on the persistent state.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Maze and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    maze_view(&app.raster, frame, maze_content_area)?;
    tooltip(app, frame, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Renders the maze walls centred in `area`.
///
/// The wall bitmap is drawn on a [`Canvas`] with one point per wall coordinate. The canvas is
/// sized to the bitmap and centred in both directions.
///
/// # Errors
///
/// This function may return errors if the bitmap does not fit terminal coordinates.
pub(crate) fn maze_view(raster: &Raster, frame: &mut Frame, area: Rect) -> Result<()> {
    let columns = u16::try_from(raster.columns())?;
    let rows = u16::try_from(raster.rows())?;

    let area = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(rows),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;
    let space = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(columns),
        Constraint::Min(0),
    ])
    .split(area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Pre-compute screen coordinates to handle errors before the paint closure
    let walls: Vec<(usize, usize)> = raster.walls().collect();
    let wall_screen_coords = to_canvas_coords(&walls, raster)?;

    let maze = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Block)
        .paint(|ctx| {
            ctx.draw(&Points {
                coords: &wall_screen_coords,
                color: Color::Green,
            });
        });

    frame.render_widget(maze, space);

    Ok(())
}

/// Renders the bottom help block, with the maze description and the last status message.
pub(crate) fn tooltip(app: &App, frame: &mut Frame, area: Rect) {
    let description = format!(
        "{}x{} / seed {}",
        app.maze.width(),
        app.maze.height(),
        app.seed
    );

    let mut block = Block::bordered()
        .title(HELP)
        .title_bottom(description)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP | Borders::BOTTOM);

    if let Some(status) = &app.status {
        block = block.title(status.as_str());
    }

    frame.render_widget(block, area);
}

/// Transforms wall-space coordinates to canvas coordinates centred on the origin.
///
/// Columns map to `x = col - (n - 1) / 2` and rows map to `y = (n - 1) / 2 - row`, so the first
/// emitted row appears at the top of the screen.
///
/// # Errors
///
/// This function may return errors if a coordinate does not fit terminal dimensions.
pub(crate) fn to_canvas_coords(
    walls: &[(usize, usize)],
    raster: &Raster,
) -> Result<Vec<(f64, f64)>> {
    let cols_n = f64::from(u16::try_from(raster.columns())?);
    let rows_n = f64::from(u16::try_from(raster.rows())?);

    walls
        .iter()
        .map(|&(col, row)| {
            let screen_x = f64::from(u16::try_from(col)?) - (cols_n - 1.) / 2.;
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(row)?);

            Ok((screen_x, screen_y))
        })
        .collect()
}
