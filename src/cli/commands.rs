//! The `convert` command: workbook in, JSON array out.

use crate::error::ConvertResult;
use crate::excel::WorkbookReader;
use crate::merge::{merge_sheets, normalize_columns};
use crate::writer;
use colored::Colorize;
use std::path::Path;

/// Fixed source workbook, resolved against the working directory.
pub const INPUT_PATH: &str = "verb_conjugations.xlsx";

/// Fixed output file; its parent directory is created on demand.
pub const OUTPUT_PATH: &str = "public/verb_conjugations.json";

/// Execute the convert command
pub fn convert(verbose: bool) -> ConvertResult<()> {
    println!("{}", "📚 Verbforge - Workbook Export".bold().green());
    println!("   Input:  {}", INPUT_PATH);
    println!("   Output: {}\n", OUTPUT_PATH);

    // Read every sheet. Nothing is written until this succeeds, so a
    // missing or malformed workbook leaves the filesystem untouched.
    if verbose {
        println!("{}", "📖 Reading workbook...".cyan());
    }

    let reader = WorkbookReader::new(INPUT_PATH);
    let sheets = reader.read_sheets()?;
    let sheet_count = sheets.len();

    if verbose {
        for sheet in &sheets {
            println!("   📊 Sheet: {}", sheet.name.bright_blue());
            println!(
                "      {} columns, {} rows",
                sheet.columns.len(),
                sheet.row_count()
            );
        }
        println!();
    }

    // Tag, stack, and clean up column names
    if verbose {
        println!("{}", "🔀 Merging sheets...".cyan());
    }

    let mut table = merge_sheets(sheets);
    normalize_columns(&mut table);

    // Write JSON
    if verbose {
        println!("{}", "💾 Writing JSON...".cyan());
    }

    let record_count = writer::write_records(&table, Path::new(OUTPUT_PATH))?;

    println!("{}", "✅ Export Complete!".bold().green());
    println!(
        "   {} records from {} sheets → {}\n",
        record_count, sheet_count, OUTPUT_PATH
    );

    Ok(())
}
