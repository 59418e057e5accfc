use std::fmt;

/// A grid-aligned position on the field.  Coordinates are measured in
/// pixels, so both of them are always multiples of the grid's cell size.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct Cell {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Cell {
    pub(crate) const fn new(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Dimensions of the playing field
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Grid {
    /// Create a field `width` × `height` pixels in size, divided into square
    /// cells with sides `cell_size` pixels long.  Both dimensions should be
    /// positive multiples of `cell_size`.
    pub(crate) const fn new(width: i32, height: i32, cell_size: i32) -> Grid {
        Grid {
            width,
            height,
            cell_size,
        }
    }

    pub(crate) fn cell_size(self) -> i32 {
        self.cell_size
    }

    /// Number of cells across the field
    pub(crate) fn columns(self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cells down the field
    pub(crate) fn rows(self) -> i32 {
        self.height / self.cell_size
    }

    /// Return the cell in column `column` and row `row`
    pub(crate) fn cell_at(self, column: i32, row: i32) -> Cell {
        Cell::new(column * self.cell_size, row * self.cell_size)
    }

    /// The cell that new snakes start in
    pub(crate) fn center(self) -> Cell {
        self.cell_at(self.columns() / 2, self.rows() / 2)
    }

    pub(crate) fn contains(self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Bring a cell that has just stepped off one edge of the field back in
    /// on the opposite edge
    pub(crate) fn wrap(self, cell: Cell) -> Cell {
        Cell {
            x: wrap_coord(cell.x, self.width, self.cell_size),
            y: wrap_coord(cell.y, self.height, self.cell_size),
        }
    }
}

/// Wrap a single coordinate that is at most one cell outside of
/// `[0, axis_len)`.
pub(crate) fn wrap_coord(coord: i32, axis_len: i32, cell_size: i32) -> i32 {
    if coord >= axis_len {
        0
    } else if coord < 0 {
        axis_len - cell_size
    } else {
        coord
    }
}
