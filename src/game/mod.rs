pub(crate) mod direction;
pub(crate) mod food;
pub(crate) mod geometry;
pub(crate) mod input;
pub(crate) mod snake;
use self::food::Food;
use self::geometry::Grid;
use self::input::InputEvent;
use self::snake::Snake;
use crate::consts;
use crate::render::{Canvas, Renderer};
use crate::util::{center_rect, get_display_area};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    style::Style,
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::ops::ControlFlow;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    grid: Grid,
    snake: Snake,
    food: Food,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(grid: Grid) -> Self {
        Game::new_with_rng(grid, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(grid: Grid, mut rng: R) -> Game<R> {
        let food = Food::new(grid, &mut rng);
        Game {
            rng,
            grid,
            snake: Snake::new(grid),
            food,
        }
    }

    /// Run one tick of the simulation after applying the player's `events`.
    /// Returns `Break` if the player asked to quit, in which case nothing
    /// else happens.
    pub(crate) fn tick<I>(&mut self, events: I) -> ControlFlow<()>
    where
        I: IntoIterator<Item = InputEvent>,
    {
        input::handle_events(&mut self.snake, events)?;
        // The food test uses the head's position from before the move.
        let eaten = self.snake.head() == self.food.position();
        let new_len = self.snake.length() + usize::from(eaten);
        self.snake.step(new_len, self.grid);
        if eaten {
            self.food.relocate(self.grid, &mut self.rng);
            log::debug!(
                "Snake ate food; length is now {}, food moved to {}",
                self.snake.length(),
                self.food.position()
            );
        }
        if self.snake.self_collision() {
            log::info!(
                "Snake ran into itself at {} with length {}; starting over",
                self.snake.head(),
                self.snake.length()
            );
            self.snake.reset(self.grid);
        }
        ControlFlow::Continue(())
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Size of the bordered board in terminal cells
    fn board_size(&self) -> Size {
        let columns = u16::try_from(self.grid.columns())
            .unwrap_or(u16::MAX)
            .saturating_mul(consts::CELL_COLUMNS);
        let rows = u16::try_from(self.grid.rows()).unwrap_or(u16::MAX);
        Size {
            width: columns.saturating_add(2),
            height: rows.saturating_add(2),
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [bar_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(
            format!(" Length: {}", self.snake.length()),
            consts::LENGTH_BAR_STYLE,
        )
        .render(bar_area, buf);

        let block_area = center_rect(board_area, self.board_size());
        let block = Block::bordered().border_style(Style::new().fg(consts::BORDER_COLOR));
        let level_area = block.inner(block_area);
        block.render(block_area, buf);

        // The whole frame is redrawn every tick, so the board is cleared
        // each time rather than only after a reset.
        let mut canvas = Canvas {
            area: level_area,
            buf,
            grid: self.grid,
        };
        canvas.clear(consts::BOARD_BACKGROUND_COLOR);
        self.snake.draw(&mut canvas);
        self.food.draw(&mut canvas);
    }
}
