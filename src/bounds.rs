//! Scan region computation from declared used ranges

use crate::address::CellCoordinate;
use crate::workbook::Workbook;
use serde::Serialize;

/// Inclusive upper bound of the region to scan; never smaller than (1, 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SheetBounds {
    pub max_row: u32,
    pub max_column: u32,
}

impl SheetBounds {
    /// The single-cell region `A1`
    pub const MIN: SheetBounds = SheetBounds {
        max_row: 1,
        max_column: 1,
    };

    pub fn new(max_row: u32, max_column: u32) -> Self {
        Self {
            max_row: max_row.max(1),
            max_column: max_column.max(1),
        }
    }

    /// Per-axis maximum of two bounds
    pub fn union(self, other: SheetBounds) -> SheetBounds {
        SheetBounds::new(
            self.max_row.max(other.max_row),
            self.max_column.max(other.max_column),
        )
    }

    pub fn cell_count(&self) -> u64 {
        self.max_row as u64 * self.max_column as u64
    }
}

/// Bounds from a used-range descriptor like `"A1:C5"`.
///
/// Only a two-part range is honoured; a single address, an empty string or
/// anything unparseable falls back to [`SheetBounds::MIN`].
pub fn parse_dimension(dimension: &str) -> SheetBounds {
    let mut parts = dimension.split(':');
    let (Some(_), Some(bottom_right), None) = (parts.next(), parts.next(), parts.next()) else {
        return SheetBounds::MIN;
    };

    match CellCoordinate::parse(bottom_right) {
        Ok(coord) => SheetBounds::new(coord.row, coord.column),
        Err(e) => {
            log::debug!("Ignoring malformed dimension '{}': {}", dimension, e);
            SheetBounds::MIN
        }
    }
}

/// Bounds of one sheet in one workbook
pub fn sheet_bounds(workbook: &dyn Workbook, sheet: &str) -> SheetBounds {
    workbook
        .sheet_dimension(sheet)
        .map(|dimension| parse_dimension(&dimension))
        .unwrap_or(SheetBounds::MIN)
}

/// Region covering every cell either workbook declares for the sheet
pub fn effective_bounds(a: &dyn Workbook, b: &dyn Workbook, sheet: &str) -> SheetBounds {
    sheet_bounds(a, sheet).union(sheet_bounds(b, sheet))
}
