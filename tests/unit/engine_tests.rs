//! Comparison engine properties over in-memory workbooks

use sheetdiff::bounds::{effective_bounds, SheetBounds};
use sheetdiff::{MemoryWorkbook, WorkbookDiffer};

fn workbook(label: &str, sheets: &[&str]) -> MemoryWorkbook {
    sheets
        .iter()
        .fold(MemoryWorkbook::new(label), |wb, sheet| wb.with_sheet(sheet))
}

#[test]
fn test_identical_documents_have_no_differences() {
    let a = MemoryWorkbook::new("a.xlsx")
        .with_cell("Prices", 1, 1, "sku")
        .with_cell("Prices", 1, 2, "price")
        .with_cell("Prices", 2, 1, "X-1")
        .with_cell("Prices", 2, 2, "9.99")
        .with_cell("Stock", 4, 3, "12");
    let b = a.clone();

    let differ = WorkbookDiffer::new(&a, &b);
    assert!(differ.sheets().only_in_a.is_empty());
    assert!(differ.sheets().only_in_b.is_empty());

    let result = differ.compare();
    assert!(result.differences.is_empty());
    assert!(result.is_identical());
}

#[test]
fn test_single_cell_change_is_isolated() {
    let base = MemoryWorkbook::new("a.xlsx")
        .with_cell("S", 1, 1, "header")
        .with_cell("S", 3, 4, "x")
        .with_cell("Other", 2, 2, "same");
    let mut changed = base.clone();
    changed.set_cell("S", sheetdiff::address::CellCoordinate::new(3, 4), "y");

    let result = WorkbookDiffer::new(&base, &changed).compare();
    assert_eq!(result.differences.len(), 1);

    let diffs = &result.differences["S"];
    assert_eq!(diffs.len(), 1);
    assert_eq!(diffs[0].address, "D3");
    assert_eq!(diffs[0].value_a, "x");
    assert_eq!(diffs[0].value_b, "y");
    assert_eq!(diffs[0].sheet, "S");
}

#[test]
fn test_sheet_only_in_a_is_never_scanned() {
    let a = workbook("a", &["Shared", "Extra"]).with_cell("Extra", 1, 1, "data");
    let b = workbook("b", &["Shared"]);

    let result = WorkbookDiffer::new(&a, &b).compare();
    assert_eq!(result.only_in_a, vec!["Extra"]);
    assert!(result.only_in_b.is_empty());
    assert!(!result.differences.contains_key("Extra"));
}

#[test]
fn test_mismatched_bounds_cover_both_extents() {
    let a = MemoryWorkbook::new("a")
        .with_cell("S", 1, 1, "a")
        .with_cell("S", 3, 2, "wide");
    let b = MemoryWorkbook::new("b")
        .with_cell("S", 1, 1, "a")
        .with_cell("S", 5, 1, "tall");

    assert_eq!(effective_bounds(&a, &b, "S"), SheetBounds::new(5, 2));

    let result = WorkbookDiffer::new(&a, &b).compare();
    let addresses: Vec<_> = result.differences["S"]
        .iter()
        .map(|d| d.address.as_str())
        .collect();
    assert_eq!(addresses, vec!["B3", "A5"]);
}

#[test]
fn test_symmetry_swaps_values() {
    let a = MemoryWorkbook::new("a")
        .with_cell("S", 1, 1, "1")
        .with_cell("S", 2, 3, "left")
        .with_cell("T", 7, 1, "t");
    let b = MemoryWorkbook::new("b")
        .with_cell("S", 1, 1, "2")
        .with_cell("S", 4, 1, "right")
        .with_cell("T", 7, 1, "t");

    let forward = WorkbookDiffer::new(&a, &b).compare();
    let backward = WorkbookDiffer::new(&b, &a).compare();

    assert_eq!(forward.differences.len(), backward.differences.len());
    for (sheet, diffs) in &forward.differences {
        let reversed = &backward.differences[sheet];
        assert_eq!(diffs.len(), reversed.len());
        for (d, r) in diffs.iter().zip(reversed) {
            assert_eq!(d.address, r.address);
            assert_eq!(d.value_a, r.value_b);
            assert_eq!(d.value_b, r.value_a);
        }
    }
}

#[test]
fn test_reference_scenario() {
    let a = workbook("a", &["Sheet1", "Sheet2"]).with_cell("Sheet1", 2, 2, "10");
    let b = workbook("b", &["Sheet1", "Sheet3"]).with_cell("Sheet1", 2, 2, "20");

    let differ = WorkbookDiffer::new(&a, &b);
    assert_eq!(differ.sheets().comparable, vec!["Sheet1"]);
    assert_eq!(differ.sheets().only_in_a, vec!["Sheet2"]);
    assert_eq!(differ.sheets().only_in_b, vec!["Sheet3"]);

    let result = differ.compare();
    let sheet1: Vec<_> = result.differences["Sheet1"]
        .iter()
        .map(|d| (d.address.as_str(), d.value_a.as_str(), d.value_b.as_str()))
        .collect();
    assert_eq!(sheet1, vec![("B2", "10", "20")]);
}

#[test]
fn test_empty_sheets_compare_only_a1() {
    let a = workbook("a", &["Blank"]);
    let b = workbook("b", &["Blank"]);
    assert_eq!(effective_bounds(&a, &b, "Blank"), SheetBounds::MIN);
    assert!(WorkbookDiffer::new(&a, &b).compare().differences.is_empty());

    // An explicit single-cell dimension still limits the scan to A1
    let a = MemoryWorkbook::new("a").with_dimension("Blank", "A1");
    let b = MemoryWorkbook::new("b")
        .with_cell("Blank", 1, 1, "a1 only")
        .with_dimension("Blank", "A1");
    let result = WorkbookDiffer::new(&a, &b).compare();
    assert_eq!(result.differences["Blank"].len(), 1);
    assert_eq!(result.differences["Blank"][0].address, "A1");
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let mut a = MemoryWorkbook::new("a");
    let mut b = MemoryWorkbook::new("b");
    for sheet in ["Gamma", "Alpha", "Beta", "Delta"] {
        for row in 1..=20 {
            a = a.with_cell(sheet, row, 1, &format!("{}-{}", sheet, row));
            if row % 3 != 0 {
                b = b.with_cell(sheet, row, 1, &format!("{}-{}", sheet, row));
            }
        }
    }

    let first = WorkbookDiffer::new(&a, &b).compare();
    for _ in 0..5 {
        let again = WorkbookDiffer::new(&a, &b).compare();
        assert_eq!(again.differences, first.differences);
    }

    let sheets: Vec<_> = first.differences.keys().map(String::as_str).collect();
    assert_eq!(sheets, vec!["Gamma", "Alpha", "Beta", "Delta"]);
    assert!(first.differences.values().all(|d| d.len() == 6));
}
