//! Command implementation for the sheetdiff CLI

use crate::cli::{Cli, OutputFormat};
use crate::config::DiffConfig;
use crate::engine::{ComparisonResult, WorkbookDiffer};
use crate::error::Result;
use crate::output::{JsonFormatter, PrettyPrinter};
use crate::progress::ProgressReporter;
use crate::workbook::{Workbook, XlsxWorkbook};
use clap::CommandFactory;
use std::io::Write;

/// Execute the parsed command line.
///
/// Without both workbook paths this prints usage and succeeds. Both files
/// are opened before any comparison starts.
pub fn execute_command(cli: &Cli) -> Result<()> {
    let Some((path_a, path_b)) = cli.files() else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = DiffConfig::from_cli(cli)?;

    let workbook_a = XlsxWorkbook::open(path_a)?;
    let workbook_b = XlsxWorkbook::open(path_b)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    compare_command(&workbook_a, &workbook_b, &config, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Compare two opened workbooks and render the result to `out`
pub fn compare_command<W: Write>(
    workbook_a: &dyn Workbook,
    workbook_b: &dyn Workbook,
    config: &DiffConfig,
    out: &mut W,
) -> Result<ComparisonResult> {
    let format = config.output_format()?;
    let differ = WorkbookDiffer::new(workbook_a, workbook_b);

    let mut progress = if config.progress_enabled() {
        ProgressReporter::new_for_compare(differ.sheets().comparable.len() as u64)
    } else {
        ProgressReporter::new_minimal()
    };
    let result = differ.compare_with_progress(&progress);
    progress.finish();

    match format {
        OutputFormat::Pretty => {
            PrettyPrinter::print_comparison(out, &result)?;
            if config.show_summary {
                PrettyPrinter::print_summary(out, &result)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", JsonFormatter::format_comparison(&result)?)?;
        }
    }

    Ok(result)
}
