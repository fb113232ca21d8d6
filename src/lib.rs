//! # sheetdiff
//!
//! Cell-level comparison of two spreadsheet workbooks: reports sheets that
//! exist on one side only and every cell whose text differs.

pub mod address;
pub mod bounds;
pub mod cli;
pub mod collector;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod progress;
pub mod reconcile;
pub mod scanner;
pub mod workbook;

pub use engine::{ComparisonResult, WorkbookDiffer};
pub use error::{Result, SheetDiffError};
pub use scanner::Difference;
pub use workbook::{MemoryWorkbook, Workbook, XlsxWorkbook};
