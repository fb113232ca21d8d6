//! Workbook access: the read-only capability the comparison engine consumes

use crate::address::CellCoordinate;
use crate::error::{Result, SheetDiffError};
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::NaiveTime;
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;

/// Read-only view of a workbook.
///
/// Implementations must be safe to read from many scan threads at once.
/// Lookups never fail: a missing sheet or cell reads as the empty string and
/// a missing used range reads as `None`.
pub trait Workbook: Send + Sync {
    /// Display label used in messages, usually the path as given
    fn identifier(&self) -> &str;

    /// Sheet names in workbook order
    fn sheet_names(&self) -> Vec<String>;

    /// Used-range descriptor such as `"A1:C5"`, if the sheet declares one
    fn sheet_dimension(&self, sheet: &str) -> Option<String>;

    /// Cell value rendered as text; empty when absent
    fn cell_value(&self, sheet: &str, address: &str) -> String;
}

/// Workbook loaded from disk (xlsx, xlsm, xlsb, xls, ods)
///
/// Every worksheet range is read eagerly at open time, so later lookups are
/// plain immutable reads.
#[derive(Debug)]
pub struct XlsxWorkbook {
    label: String,
    sheet_names: Vec<String>,
    ranges: HashMap<String, Range<Data>>,
}

impl XlsxWorkbook {
    /// Open and fully load a workbook file
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut workbook =
            open_workbook_auto(path).map_err(|e| SheetDiffError::workbook(path, e))?;

        let sheet_names: Vec<String> = workbook
            .sheet_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut ranges = HashMap::with_capacity(sheet_names.len());
        for name in &sheet_names {
            match workbook.worksheet_range(name) {
                Ok(range) => {
                    ranges.insert(name.clone(), range);
                }
                Err(e) => {
                    // Chart sheets and the like have no cell grid
                    log::debug!("No cell range for sheet '{}' in {}: {}", name, path.display(), e);
                }
            }
        }

        log::debug!("Loaded {} sheet(s) from {}", sheet_names.len(), path.display());

        Ok(Self {
            label: path.display().to_string(),
            sheet_names,
            ranges,
        })
    }
}

impl Workbook for XlsxWorkbook {
    fn identifier(&self) -> &str {
        &self.label
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheet_names.clone()
    }

    fn sheet_dimension(&self, sheet: &str) -> Option<String> {
        let range = self.ranges.get(sheet)?;
        let (start_row, start_col) = range.start()?;
        let (end_row, end_col) = range.end()?;

        let top_left = CellCoordinate::new(start_row + 1, start_col + 1);
        let bottom_right = CellCoordinate::new(end_row + 1, end_col + 1);
        Some(format!("{}:{}", top_left, bottom_right))
    }

    fn cell_value(&self, sheet: &str, address: &str) -> String {
        let Some(range) = self.ranges.get(sheet) else {
            return String::new();
        };
        let coord = match CellCoordinate::parse(address) {
            Ok(coord) => coord,
            Err(e) => {
                log::debug!("Treating unreadable cell as empty: {}", e);
                return String::new();
            }
        };

        range
            .get_value((coord.row - 1, coord.column - 1))
            .map(data_to_text)
            .unwrap_or_default()
    }
}

/// Render a cell the way it compares: as plain text
fn data_to_text(data: &Data) -> String {
    match data {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format_number(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => (if *b { "TRUE" } else { "FALSE" }).to_string(),
        Data::DateTime(dt) => format_datetime(dt),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => e.to_string(),
    }
}

/// Shortest round-trip text, switching to exponent form for very large or
/// very small magnitudes so `1e300` stays `1e300`
fn format_number(f: f64) -> String {
    let magnitude = f.abs();
    if magnitude >= 1e15 || (magnitude > 0.0 && magnitude < 1e-9) {
        format!("{:e}", f)
    } else {
        f.to_string()
    }
}

/// Dates as `YYYY-MM-DD`, adding the time of day only when it is set.
/// Durations and serials outside the calendar keep their numeric form.
fn format_datetime(dt: &ExcelDateTime) -> String {
    if dt.is_duration() {
        return format_number(dt.as_f64());
    }
    match dt.as_datetime() {
        Some(ndt) if ndt.time() == NaiveTime::MIN => ndt.format("%Y-%m-%d").to_string(),
        Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_number(dt.as_f64()),
    }
}

/// In-memory workbook, handy for library callers and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkbook {
    label: String,
    sheets: IndexMap<String, MemorySheet>,
}

#[derive(Debug, Clone, Default)]
struct MemorySheet {
    cells: HashMap<CellCoordinate, String>,
    dimension: Option<String>,
}

impl MemorySheet {
    /// Dimension derived from the populated cells, like a saved file would declare
    fn derived_dimension(&self) -> Option<String> {
        let min_row = self.cells.keys().map(|c| c.row).min()?;
        let min_col = self.cells.keys().map(|c| c.column).min()?;
        let max_row = self.cells.keys().map(|c| c.row).max()?;
        let max_col = self.cells.keys().map(|c| c.column).max()?;
        Some(format!(
            "{}:{}",
            CellCoordinate::new(min_row, min_col),
            CellCoordinate::new(max_row, max_col)
        ))
    }
}

impl MemoryWorkbook {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sheets: IndexMap::new(),
        }
    }

    /// Add an empty sheet (no-op if it already exists)
    pub fn with_sheet(mut self, sheet: &str) -> Self {
        self.sheets.entry(sheet.to_string()).or_default();
        self
    }

    /// Set a cell, creating the sheet if needed
    pub fn with_cell(mut self, sheet: &str, row: u32, column: u32, value: &str) -> Self {
        self.set_cell(sheet, CellCoordinate::new(row, column), value);
        self
    }

    /// Override the declared used range for a sheet
    pub fn with_dimension(mut self, sheet: &str, dimension: &str) -> Self {
        self.sheets.entry(sheet.to_string()).or_default().dimension = Some(dimension.to_string());
        self
    }

    pub fn set_cell(&mut self, sheet: &str, coord: CellCoordinate, value: &str) {
        self.sheets
            .entry(sheet.to_string())
            .or_default()
            .cells
            .insert(coord, value.to_string());
    }
}

impl Workbook for MemoryWorkbook {
    fn identifier(&self) -> &str {
        &self.label
    }

    fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    fn sheet_dimension(&self, sheet: &str) -> Option<String> {
        let sheet = self.sheets.get(sheet)?;
        sheet.dimension.clone().or_else(|| sheet.derived_dimension())
    }

    fn cell_value(&self, sheet: &str, address: &str) -> String {
        let Ok(coord) = CellCoordinate::parse(address) else {
            return String::new();
        };
        self.sheets
            .get(sheet)
            .and_then(|s| s.cells.get(&coord))
            .cloned()
            .unwrap_or_default()
    }
}
