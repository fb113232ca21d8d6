//! Cell-grid scanning for a single sheet

use crate::address::CellCoordinate;
use crate::bounds::SheetBounds;
use crate::workbook::Workbook;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell whose text differs between the two workbooks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difference {
    pub sheet: String,
    pub address: String,
    pub value_a: String,
    pub value_b: String,
}

impl Difference {
    /// The same difference seen from the other workbook's side
    pub fn swapped(&self) -> Self {
        Self {
            sheet: self.sheet.clone(),
            address: self.address.clone(),
            value_a: self.value_b.clone(),
            value_b: self.value_a.clone(),
        }
    }
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} <> {}", self.address, self.value_a, self.value_b)
    }
}

/// Compare every cell of `sheet` inside `bounds`.
///
/// Rows are the outer loop and columns the inner one, so the result is in
/// row-major order. Both workbooks are only read.
pub fn scan_sheet(
    a: &dyn Workbook,
    b: &dyn Workbook,
    sheet: &str,
    bounds: SheetBounds,
) -> Vec<Difference> {
    let mut differences = Vec::new();

    for row in 1..=bounds.max_row {
        for column in 1..=bounds.max_column {
            let address = CellCoordinate::new(row, column).to_address();
            let value_a = a.cell_value(sheet, &address);
            let value_b = b.cell_value(sheet, &address);

            if value_a != value_b {
                differences.push(Difference {
                    sheet: sheet.to_string(),
                    address,
                    value_a,
                    value_b,
                });
            }
        }
    }

    differences
}
