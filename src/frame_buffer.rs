//! Frame buffer for composing a full cube image before drawing it
//!
//! The grid is dense and owned. Two flags change how writes are
//! interpreted: `enabled` stages writes into the grid instead of driving
//! pins, `inverted` flips the direct-drive polarity of on/off writes.

use crate::geometry::Cell;

/// Dense `LEVELS × COLS` on/off grid with buffering mode flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const LEVELS: usize, const COLS: usize> {
    cells: [[bool; COLS]; LEVELS],
    enabled: bool,
    inverted: bool,
}

impl<const LEVELS: usize, const COLS: usize> Default for FrameBuffer<LEVELS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const LEVELS: usize, const COLS: usize> FrameBuffer<LEVELS, COLS> {
    /// Create a cleared buffer in direct-drive mode
    pub const fn new() -> Self {
        Self {
            cells: [[false; COLS]; LEVELS],
            enabled: false,
            inverted: false,
        }
    }

    /// Read a cell
    ///
    /// Returns `None` if the cell is out of bounds.
    pub fn get(&self, cell: Cell) -> Option<bool> {
        self.cells
            .get(usize::from(cell.level))
            .and_then(|row| row.get(usize::from(cell.col)))
            .copied()
    }

    /// Write a cell
    ///
    /// Returns `false` if the cell is out of bounds and nothing was written.
    pub fn set(&mut self, cell: Cell, value: bool) -> bool {
        let slot = self
            .cells
            .get_mut(usize::from(cell.level))
            .and_then(|row| row.get_mut(usize::from(cell.col)));
        match slot {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Set every cell to `value`
    pub fn set_all(&mut self, value: bool) {
        for row in &mut self.cells {
            row.fill(value);
        }
    }

    /// Turn every cell off
    pub fn clear(&mut self) {
        self.set_all(false);
    }

    /// Turn every cell on
    pub fn fill(&mut self) {
        self.set_all(true);
    }

    /// Number of lit cells
    pub fn lit_count(&self) -> usize {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|lit| **lit).count())
            .sum()
    }

    /// Iterate over lit cells in level-major, column-minor order
    #[allow(clippy::cast_possible_truncation)]
    pub fn lit_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().enumerate().flat_map(|(level, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, lit)| **lit)
                .map(move |(col, _)| Cell::new(level as u8, col as u8))
        })
    }

    /// Check if writes are staged into the buffer
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if direct-drive polarity is inverted
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Switch buffered mode.
    ///
    /// Leaving buffered mode also resets inversion.
    pub fn enable(&mut self, enable: bool) {
        self.enabled = enable;
        if !enable {
            self.inverted = false;
        }
    }

    /// Switch direct-drive polarity
    pub fn invert(&mut self, invert: bool) {
        self.inverted = invert;
    }
}
