use super::geometry::{Cell, Grid};
use crate::consts;
use crate::render::Renderer;
use rand::Rng;

/// The single piece of food on the field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(super) position: Cell,
}

impl Food {
    /// Create a piece of food at a random cell of `grid`
    pub(crate) fn new<R: Rng>(grid: Grid, rng: &mut R) -> Food {
        let mut food = Food {
            position: Cell::new(0, 0),
        };
        food.relocate(grid, rng);
        food
    }

    pub(crate) fn position(&self) -> Cell {
        self.position
    }

    /// Move the food to a cell of `grid` chosen uniformly at random.
    ///
    /// Cells occupied by the snake are not excluded, so the food may land
    /// underneath its body.
    pub(crate) fn relocate<R: Rng>(&mut self, grid: Grid, rng: &mut R) {
        self.position = grid.cell_at(
            rng.random_range(0..grid.columns()),
            rng.random_range(0..grid.rows()),
        );
    }

    pub(crate) fn draw<D: Renderer>(&self, renderer: &mut D) {
        renderer.draw_cell(self.position, consts::APPLE_COLOR);
    }
}
