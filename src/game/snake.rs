use super::direction::Direction;
use super::geometry::{Cell, Grid};
use crate::consts;
use crate::render::Renderer;
use std::collections::VecDeque;

/// The player's snake: its body, heading, and any turn waiting to be made.
///
/// All cells are in pixel coordinates on the grid the snake lives on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, head first
    pub(super) segments: VecDeque<Cell>,

    /// How many segments the snake has once the current step settles
    pub(super) length: usize,

    /// The direction in which the snake is currently moving
    pub(super) direction: Direction,

    /// A turn requested by the player, applied on the next step
    pub(super) pending_direction: Option<Direction>,

    /// The cell vacated by the tail on the most recent step, if any
    pub(super) last_tail: Option<Cell>,
}

impl Snake {
    /// Create a one-segment snake at the center of `grid`, moving right
    pub(crate) fn new(grid: Grid) -> Snake {
        Snake {
            segments: VecDeque::from([grid.center()]),
            length: 1,
            direction: Direction::Right,
            pending_direction: None,
            last_tail: None,
        }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Cell {
        self.segments[0]
    }

    pub(crate) fn length(&self) -> usize {
        self.length
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Ask the snake to turn to `direction` on its next step.  Returns
    /// `false` and leaves the snake alone if `direction` would make it
    /// reverse into itself.
    pub(crate) fn request_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            false
        } else {
            self.pending_direction = Some(direction);
            true
        }
    }

    /// Adopt the requested turn, if any
    pub(crate) fn commit_direction(&mut self) {
        if let Some(d) = self.pending_direction.take() {
            self.direction = d;
        }
    }

    /// Move the snake forwards one cell within `grid`.  If `new_len` is
    /// greater than the current length, the snake grows by one segment;
    /// otherwise its tail moves up behind it.
    pub(crate) fn step(&mut self, new_len: usize, grid: Grid) {
        debug_assert!(
            new_len <= self.length + 1,
            "snake can only grow by one segment per step"
        );
        self.commit_direction();
        let new_head = self.direction.advance(self.head(), grid);
        debug_assert!(grid.contains(new_head), "{new_head} is off the grid");
        self.segments.push_front(new_head);
        if new_len > self.length {
            self.length = new_len;
            self.last_tail = None;
        } else {
            self.last_tail = self.segments.pop_back();
        }
    }

    /// Has the head run into the rest of the body?
    pub(crate) fn self_collision(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|&c| c == head)
    }

    /// Return the snake to its starting state at the center of `grid`
    pub(crate) fn reset(&mut self, grid: Grid) {
        *self = Snake::new(grid);
    }

    /// Draw the body, then the head on top of it, then erase the cell the
    /// tail just left unless the snake has already moved back into it
    pub(crate) fn draw<D: Renderer>(&self, renderer: &mut D) {
        for &cell in self.segments.iter().skip(1) {
            renderer.draw_cell(cell, consts::SNAKE_COLOR);
        }
        renderer.draw_cell(self.head(), consts::SNAKE_COLOR);
        if let Some(cell) = self.last_tail.filter(|c| !self.segments.contains(c)) {
            renderer.draw_cell(cell, consts::BOARD_BACKGROUND_COLOR);
        }
    }
}
