//! Geometric pattern generators
//!
//! Each generator turns a 1-based selector into the sequence of cells that
//! traces its shape. Nothing here touches hardware: the cube feeds the result
//! to its sequence player. A selector of zero or above its bound yields
//! `None`.
//!
//! N is the sequence capacity. Every generator fits within `levels³` cells.

use heapless::Vec;

use crate::geometry::{Cell, CubeGeometry};

pub(crate) fn collect<const N: usize>(cells: impl Iterator<Item = Cell>) -> Vec<Cell, N> {
    let mut seq = Vec::new();
    for cell in cells {
        if seq.push(cell).is_err() {
            break;
        }
    }
    seq
}

const fn plane_index(geometry: CubeGeometry, plane: u8) -> Option<u8> {
    if plane == 0 || plane > geometry.levels() {
        None
    } else {
        Some(plane - 1)
    }
}

/// Every column of one level, ascending
pub fn level<const N: usize>(geometry: CubeGeometry, plane: u8) -> Option<Vec<Cell, N>> {
    let level = plane_index(geometry, plane)?;
    Some(collect((0..geometry.cols()).map(|col| Cell::new(level, col))))
}

/// One line of `levels` cells across a level
///
/// `row` selects both the level (`row - 1`) and the line, as described in
/// [`CubeGeometry::row_walk`]. Selectors above `levels` yield cells on a
/// level outside the cube.
pub fn row<const N: usize>(geometry: CubeGeometry, row: u8) -> Option<Vec<Cell, N>> {
    let (start, stride) = geometry.row_walk(row)?;
    let level = row - 1;
    Some(collect(
        (0..geometry.levels()).map(|i| Cell::new(level, start + stride * i)),
    ))
}

/// Vertical slice through the cube, walked one level at a time
pub fn plane<const N: usize>(geometry: CubeGeometry, selector: u8) -> Option<Vec<Cell, N>> {
    let (start, stride) = geometry.row_walk(selector)?;
    let levels = geometry.levels();
    Some(collect((0..levels).flat_map(move |level| {
        (0..levels).map(move |i| Cell::new(level, start + stride * i))
    })))
}

/// One column from the bottom level up
pub fn column<const N: usize>(geometry: CubeGeometry, col: u8) -> Option<Vec<Cell, N>> {
    if col == 0 || col > geometry.cols() {
        return None;
    }
    Some(collect(
        (0..geometry.levels()).map(|level| Cell::new(level, col - 1)),
    ))
}

/// One column from the top level down
pub fn drop_column<const N: usize>(geometry: CubeGeometry, col: u8) -> Option<Vec<Cell, N>> {
    if col == 0 || col > geometry.cols() {
        return None;
    }
    Some(collect(
        (0..geometry.levels())
            .rev()
            .map(|level| Cell::new(level, col - 1)),
    ))
}

/// Border ring of one level, clockwise from column 0
pub fn perimeter<const N: usize>(geometry: CubeGeometry, plane: u8) -> Option<Vec<Cell, N>> {
    let level = plane_index(geometry, plane)?;
    Some(collect(
        (0..geometry.ring_len()).map(|step| Cell::new(level, geometry.ring_col(step))),
    ))
}
