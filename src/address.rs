//! A1-style cell addressing

use crate::error::{Result, SheetDiffError};
use std::fmt;

/// Largest column index a worksheet can hold (`XFD`)
pub const MAX_COLUMN: u32 = 16_384;

/// Largest row index a worksheet can hold
pub const MAX_ROW: u32 = 1_048_576;

/// A 1-based (row, column) position within a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellCoordinate {
    pub row: u32,
    pub column: u32,
}

impl CellCoordinate {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Render as an A1-style address, e.g. `(2, 2)` becomes `B2`
    pub fn to_address(&self) -> String {
        format!("{}{}", column_to_letters(self.column), self.row)
    }

    /// Parse an A1-style address such as `B2` or `$AA$10`
    pub fn parse(address: &str) -> Result<Self> {
        let trimmed = address.trim().replace('$', "");
        let split = trimmed
            .find(|c: char| c.is_ascii_digit())
            .ok_or_else(|| SheetDiffError::invalid_address(address))?;
        let (letters, digits) = trimmed.split_at(split);

        let column = letters_to_column(letters)
            .ok_or_else(|| SheetDiffError::invalid_address(address))?;
        let row: u32 = digits
            .parse()
            .map_err(|_| SheetDiffError::invalid_address(address))?;

        if row == 0 || row > MAX_ROW {
            return Err(SheetDiffError::invalid_address(address));
        }

        Ok(Self { row, column })
    }
}

impl fmt::Display for CellCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", column_to_letters(self.column), self.row)
    }
}

/// Convert a 1-based column index to its letters (1 -> A, 27 -> AA)
pub fn column_to_letters(column: u32) -> String {
    let mut n = column;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

/// Convert column letters to a 1-based index, case-insensitively
pub fn letters_to_column(letters: &str) -> Option<u32> {
    if letters.is_empty() || letters.len() > 3 {
        return None;
    }

    let mut column: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        column = column * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
    }

    if column > MAX_COLUMN {
        return None;
    }
    Some(column)
}
