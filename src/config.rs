#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::solver::dfs::DfsMode;

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 20;
pub const DEFAULT_CELL_SIZE: u32 = 30;
/// Pixel position of the top-left corner of the grid on the canvas, as (x, y).
pub const DEFAULT_OFFSET: (i32, i32) = (10, 20);

/// Settings fixed when a [Session](crate::session::Session) is created.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    pub rows: usize,
    pub cols: usize,
    /// Side length of a cell in pixels.
    pub cell_size: u32,
    /// Canvas position of the grid's top-left corner, as (x, y).
    pub offset: (i32, i32),
    pub dfs_mode: DfsMode,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cell_size: DEFAULT_CELL_SIZE,
            offset: DEFAULT_OFFSET,
            dfs_mode: DfsMode::default(),
        }
    }
}

impl SessionConfig {
    pub fn with_dimensions(mut self, rows: usize, cols: usize) -> SessionConfig {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> SessionConfig {
        self.cell_size = cell_size;
        self
    }

    pub fn with_offset(mut self, x: i32, y: i32) -> SessionConfig {
        self.offset = (x, y);
        self
    }

    pub fn with_dfs_mode(mut self, dfs_mode: DfsMode) -> SessionConfig {
        self.dfs_mode = dfs_mode;
        self
    }

    /// Maps a canvas pixel to the grid cell under it, or [None] if the pixel lies outside the
    /// grid.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        if self.cell_size == 0 {
            return None;
        }
        // Widened so that any pixel and offset combination subtracts without overflow.
        let size = i64::from(self.cell_size);
        let row = (i64::from(y) - i64::from(self.offset.1)).div_euclid(size);
        let col = (i64::from(x) - i64::from(self.offset.0)).div_euclid(size);
        let row = usize::try_from(row).ok().filter(|row| *row < self.rows)?;
        let col = usize::try_from(col).ok().filter(|col| *col < self.cols)?;
        Some(Cell::new(i32::try_from(row).ok()?, i32::try_from(col).ok()?))
    }

    /// Canvas size in pixels needed to draw the grid including the offset margin on both sides.
    /// Saturates at [u32::MAX].
    pub fn canvas_size(&self) -> (u32, u32) {
        let span = |cells: usize| {
            u32::try_from(cells)
                .unwrap_or(u32::MAX)
                .saturating_mul(self.cell_size)
        };
        let margin = |offset: i32| offset.max(0).unsigned_abs().saturating_mul(2);
        (
            span(self.cols).saturating_add(margin(self.offset.0)),
            span(self.rows).saturating_add(margin(self.offset.1)),
        )
    }
}
