//! Output formatting utilities

use crate::collector::DifferenceReport;
use crate::engine::ComparisonResult;
use crate::error::Result;
use std::io::Write;

/// Line-oriented text reporter
pub struct PrettyPrinter;

impl PrettyPrinter {
    /// Print one warning per sheet that exists on one side only.
    ///
    /// A sheet found only in the first workbook is missing from the second,
    /// so it is reported against `label_b`, and vice versa.
    pub fn print_missing_sheets<W: Write>(
        out: &mut W,
        only_in_a: &[String],
        only_in_b: &[String],
        label_a: &str,
        label_b: &str,
    ) -> Result<()> {
        for sheet in only_in_a {
            writeln!(out, "CAUTION: File {} has no sheet called \"{}\"", label_b, sheet)?;
        }
        for sheet in only_in_b {
            writeln!(out, "CAUTION: File {} has no sheet called \"{}\"", label_a, sheet)?;
        }
        Ok(())
    }

    /// Print a header per changed sheet followed by its differences
    pub fn print_differences<W: Write>(out: &mut W, report: &DifferenceReport) -> Result<()> {
        for (sheet, differences) in report {
            if differences.is_empty() {
                continue;
            }
            writeln!(out, "{}", sheet)?;
            for difference in differences {
                writeln!(out, "- {}", difference)?;
            }
        }
        Ok(())
    }

    /// Missing-sheet warnings, then all differences
    pub fn print_comparison<W: Write>(out: &mut W, result: &ComparisonResult) -> Result<()> {
        Self::print_missing_sheets(
            out,
            &result.only_in_a,
            &result.only_in_b,
            &result.label_a,
            &result.label_b,
        )?;
        Self::print_differences(out, &result.differences)
    }

    pub fn print_summary<W: Write>(out: &mut W, result: &ComparisonResult) -> Result<()> {
        writeln!(
            out,
            "{} difference(s) in {} sheet(s)",
            result.total_differences(),
            result.changed_sheet_count()
        )?;
        Ok(())
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format any serializable data as JSON
    pub fn format<T: serde::Serialize + ?Sized>(data: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    /// Format a full comparison result, adding the totals
    pub fn format_comparison(result: &ComparisonResult) -> Result<String> {
        let json = serde_json::json!({
            "file_a": result.label_a,
            "file_b": result.label_b,
            "only_in_a": result.only_in_a,
            "only_in_b": result.only_in_b,
            "total_differences": result.total_differences(),
            "differences": result.differences,
        });
        Self::format(&json)
    }
}
