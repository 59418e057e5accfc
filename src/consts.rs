//! Assorted constants & hard-coded configuration
use crate::game::geometry::Grid;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Width of the playing field in pixels
pub(crate) const SCREEN_WIDTH: i32 = 640;

/// Height of the playing field in pixels
pub(crate) const SCREEN_HEIGHT: i32 = 480;

/// Side length of a single grid cell in pixels.  Every coordinate on the
/// field is a multiple of this.
pub(crate) const GRID_SIZE: i32 = 20;

/// The playing field used by the game
pub(crate) const GRID: Grid = Grid::new(SCREEN_WIDTH, SCREEN_HEIGHT, GRID_SIZE);

/// Number of ticks per second
pub(crate) const SPEED: u32 = 20;

/// Title shown in the terminal window's caption
pub(crate) const WINDOW_TITLE: &str = "Snake";

/// Number of terminal columns used to draw one grid cell, so that cells come
/// out roughly square
pub(crate) const CELL_COLUMNS: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window: a one-line length bar above the bordered board.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 27,
};

/// Color of the empty board
pub(crate) const BOARD_BACKGROUND_COLOR: Color = Color::Rgb(0, 0, 0);

/// Color of the frame around the board
pub(crate) const BORDER_COLOR: Color = Color::Rgb(93, 216, 228);

/// Color of the food
pub(crate) const APPLE_COLOR: Color = Color::Rgb(255, 0, 0);

/// Color of the snake's head and body
pub(crate) const SNAKE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Style for the length bar at the top of the game screen
pub(crate) const LENGTH_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);
