//! Drawing surface handed to the game's entities
use crate::consts;
use crate::game::geometry::{Cell, Grid};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, style::Style};

/// Something that grid cells can be painted onto
pub(crate) trait Renderer {
    /// Fill the cell at `cell` with `color`
    fn draw_cell(&mut self, cell: Cell, color: Color);

    /// Fill the whole board with `color`
    fn clear(&mut self, color: Color);
}

/// A [`Renderer`] that paints into the region `area` of a ratatui buffer.
///
/// Each grid cell occupies [`CELL_COLUMNS`][consts::CELL_COLUMNS] terminal
/// cells side by side on one row.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Canvas<'a> {
    pub(crate) area: Rect,
    pub(crate) buf: &'a mut Buffer,
    pub(crate) grid: Grid,
}

impl Canvas<'_> {
    /// Return the terminal position of the leftmost column of `cell`, or
    /// `None` if it falls outside of the canvas
    fn locate(&self, cell: Cell) -> Option<(u16, u16)> {
        let column = u16::try_from(cell.x / self.grid.cell_size())
            .ok()?
            .checked_mul(consts::CELL_COLUMNS)?;
        let row = u16::try_from(cell.y / self.grid.cell_size()).ok()?;
        if column >= self.area.width || row >= self.area.height {
            return None;
        }
        Some((self.area.x.checked_add(column)?, self.area.y.checked_add(row)?))
    }
}

impl Renderer for Canvas<'_> {
    fn draw_cell(&mut self, cell: Cell, color: Color) {
        let Some((x, y)) = self.locate(cell) else {
            return;
        };
        for dx in 0..consts::CELL_COLUMNS {
            let Some(x) = x.checked_add(dx) else {
                return;
            };
            if let Some(c) = self.buf.cell_mut((x, y)) {
                c.set_char(' ');
                c.set_style(Style::reset().bg(color));
            }
        }
    }

    fn clear(&mut self, color: Color) {
        self.buf.set_style(self.area, Style::reset().bg(color));
    }
}
