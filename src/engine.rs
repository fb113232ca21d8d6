//! Two-workbook comparison: reconcile sheets, scan them in parallel, collect

use crate::bounds::effective_bounds;
use crate::collector::{DifferenceCollector, DifferenceReport};
use crate::progress::ProgressReporter;
use crate::reconcile::{reconcile, sheet_name_set, SheetSets};
use crate::scanner::scan_sheet;
use crate::workbook::Workbook;
use serde::Serialize;

/// Everything a reporter needs from one comparison run
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResult {
    pub label_a: String,
    pub label_b: String,
    pub only_in_a: Vec<String>,
    pub only_in_b: Vec<String>,
    pub differences: DifferenceReport,
}

impl ComparisonResult {
    pub fn total_differences(&self) -> usize {
        self.differences.values().map(Vec::len).sum()
    }

    /// Sheets with at least one difference
    pub fn changed_sheet_count(&self) -> usize {
        self.differences.values().filter(|d| !d.is_empty()).count()
    }

    pub fn is_identical(&self) -> bool {
        self.only_in_a.is_empty() && self.only_in_b.is_empty() && self.total_differences() == 0
    }
}

/// Compares two workbooks cell by cell.
///
/// Sheet sets are computed once here and never change. Each call to
/// [`WorkbookDiffer::compare`] recomputes bounds and rescans.
pub struct WorkbookDiffer<'a> {
    a: &'a dyn Workbook,
    b: &'a dyn Workbook,
    sheets: SheetSets,
}

impl<'a> WorkbookDiffer<'a> {
    pub fn new(a: &'a dyn Workbook, b: &'a dyn Workbook) -> Self {
        let sheets = reconcile(
            &sheet_name_set(a.sheet_names()),
            &sheet_name_set(b.sheet_names()),
        );

        log::debug!(
            "{} comparable sheet(s), {} only in {}, {} only in {}",
            sheets.comparable.len(),
            sheets.only_in_a.len(),
            a.identifier(),
            sheets.only_in_b.len(),
            b.identifier()
        );

        Self { a, b, sheets }
    }

    pub fn sheets(&self) -> &SheetSets {
        &self.sheets
    }

    /// Run the comparison without progress output
    pub fn compare(&self) -> ComparisonResult {
        self.compare_with_progress(&ProgressReporter::new_minimal())
    }

    /// Run the comparison, one scan task per comparable sheet.
    ///
    /// Returns only after every sheet scan has finished.
    pub fn compare_with_progress(&self, progress: &ProgressReporter) -> ComparisonResult {
        let collector = DifferenceCollector::new();

        rayon::scope(|scope| {
            for sheet in &self.sheets.comparable {
                let collector = &collector;
                scope.spawn(move |_| {
                    let bounds = effective_bounds(self.a, self.b, sheet);
                    let differences = scan_sheet(self.a, self.b, sheet, bounds);
                    log::debug!(
                        "Scanned '{}' ({} x {}): {} difference(s)",
                        sheet,
                        bounds.max_row,
                        bounds.max_column,
                        differences.len()
                    );
                    collector.extend(sheet, differences);
                    progress.sheet_finished(sheet);
                });
            }
        });

        let differences = collector.drain(&self.sheets.comparable);
        log::debug!(
            "Compared {} sheet(s) in {:.2?}",
            self.sheets.comparable.len(),
            progress.elapsed()
        );

        ComparisonResult {
            label_a: self.a.identifier().to_string(),
            label_b: self.b.identifier().to_string(),
            only_in_a: self.sheets.only_in_a.clone(),
            only_in_b: self.sheets.only_in_b.clone(),
            differences,
        }
    }
}
