//! Cube geometry and cell coordinates
//!
//! A cube of size `n` has `n` horizontal levels, `n²` column drive lines
//! shared by every level and `n³` addressable cells.

use core::fmt;

/// Largest supported cube size.
///
/// Keeps the column count addressable with a `u8`.
pub const MAX_LEVELS: u8 = 15;

/// A single addressable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub level: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(level: u8, col: u8) -> Self {
        Self { level, col }
    }
}

impl From<(u8, u8)> for Cell {
    fn from((level, col): (u8, u8)) -> Self {
        Self { level, col }
    }
}

/// Errors raised while assembling a cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Cube size is zero or above [`MAX_LEVELS`]
    UnsupportedSize(usize),
    /// Column or cell count does not match the level count
    GeometryMismatch { levels: usize, cols: usize, cells: usize },
    /// Level pin list length differs from the level count
    LevelPins { expected: usize, actual: usize },
    /// Column pin list length differs from the column count
    ColumnPins { expected: usize, actual: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize(size) => {
                write!(f, "unsupported cube size {size} (1..={MAX_LEVELS})")
            }
            Self::GeometryMismatch {
                levels,
                cols,
                cells,
            } => write!(
                f,
                "geometry mismatch: {levels} levels need {} columns and {} cells, got {cols} and {cells}",
                levels * levels,
                levels * levels * levels
            ),
            Self::LevelPins { expected, actual } => {
                write!(f, "expected {expected} level pins, got {actual}")
            }
            Self::ColumnPins { expected, actual } => {
                write!(f, "expected {expected} column pins, got {actual}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Derived dimensions of a cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeGeometry {
    levels: u8,
    cols: u8,
    num: u16,
}

impl CubeGeometry {
    /// Derive the geometry from the cube size
    pub const fn new(size: u8) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_LEVELS {
            return Err(ConfigError::UnsupportedSize(size as usize));
        }
        let levels = size as u16;
        #[allow(clippy::cast_possible_truncation)]
        let cols = (levels * levels) as u8;
        Ok(Self {
            levels: size,
            cols,
            num: levels * levels * levels,
        })
    }

    /// Validate const-generic dimensions against each other
    pub const fn from_dimensions(
        levels: usize,
        cols: usize,
        cells: usize,
    ) -> Result<Self, ConfigError> {
        if levels == 0 || levels > MAX_LEVELS as usize {
            return Err(ConfigError::UnsupportedSize(levels));
        }
        if cols != levels * levels || cells != levels * cols {
            return Err(ConfigError::GeometryMismatch {
                levels,
                cols,
                cells,
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        let size = levels as u8;
        Self::new(size)
    }

    /// Number of horizontal levels
    pub const fn levels(self) -> u8 {
        self.levels
    }

    /// Number of column drive lines
    pub const fn cols(self) -> u8 {
        self.cols
    }

    /// Total number of cells
    pub const fn num(self) -> u16 {
        self.num
    }

    /// Check whether the cell addresses a real light
    pub const fn contains(self, cell: Cell) -> bool {
        cell.level < self.levels && cell.col < self.cols
    }

    /// Start column and stride of a 1-based row selector.
    ///
    /// Selectors `1..=levels` pick lines that step across the face,
    /// selectors `levels+1..=2*levels` pick lines of adjacent columns.
    pub const fn row_walk(self, selector: u8) -> Option<(u8, u8)> {
        let levels = self.levels;
        if selector == 0 || (selector as u16) > 2 * (levels as u16) {
            return None;
        }
        if selector <= levels {
            Some((selector - 1, levels))
        } else {
            Some(((selector - levels - 1) * levels, 1))
        }
    }

    /// Length of a plane's border ring
    pub const fn ring_len(self) -> usize {
        if self.levels == 1 {
            1
        } else {
            4 * (self.levels as usize - 1)
        }
    }

    /// Column index of the `step`-th position on a plane's border ring.
    ///
    /// The ring starts at column 0 and runs clockwise over the
    /// `levels × levels` column layout.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn ring_col(self, step: usize) -> u8 {
        let n = self.levels as usize;
        if n == 1 {
            return 0;
        }
        let side = n - 1;
        let step = step % self.ring_len();
        let (row, col) = match step / side {
            0 => (0, step),
            1 => (step - side, side),
            2 => (side, side - (step - 2 * side)),
            _ => (side - (step - 3 * side), 0),
        };
        (row * n + col) as u8
    }
}
