use super::geometry::{Cell, Grid};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector pointing in this direction, with y growing downwards
    pub(crate) fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub(crate) fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the cell one step from `cell` in this direction, wrapped back
    /// onto `grid`
    pub(crate) fn advance(self, cell: Cell, grid: Grid) -> Cell {
        let (dx, dy) = self.offset();
        grid.wrap(Cell {
            x: cell.x + dx * grid.cell_size(),
            y: cell.y + dy * grid.cell_size(),
        })
    }
}
