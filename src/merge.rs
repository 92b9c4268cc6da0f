//! Tag, concatenate, and normalize sheets into one flat table.
//!
//! The pipeline mirrors how the front-end data is assembled: every row is
//! tagged with the series it belongs to (its sheet name), all sheets are
//! stacked into one record set, and column names are cleaned up once on
//! the merged result.

use crate::types::{CellValue, MergedTable, Sheet};

/// Column added to every row, carrying the trimmed sheet name.
pub const SERIES_COLUMN: &str = "serie";

/// Source header for the answer column, as the workbook spells it.
pub const ANSWER_COLUMN_SOURCE: &str = "correct antwoord";

/// Final name of the answer column in the JSON output.
pub const ANSWER_COLUMN: &str = "correcte";

/// Tag every sheet with its series and stack all rows into one table.
///
/// Concatenation uses outer-join semantics: the merged column set is the
/// union of all sheets' columns in first-seen order, and rows from sheets
/// lacking a column carry null there rather than omitting the key. Sheet
/// order and intra-sheet row order are preserved.
pub fn merge_sheets(mut sheets: Vec<Sheet>) -> MergedTable {
    for sheet in &mut sheets {
        let serie = sheet.name.trim().to_string();
        sheet.assign_column(SERIES_COLUMN, CellValue::Text(serie));
    }

    let mut columns: Vec<String> = Vec::new();
    for sheet in &sheets {
        for column in &sheet.columns {
            if !columns.contains(column) {
                columns.push(column.clone());
            }
        }
    }

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for sheet in &sheets {
        for row in &sheet.rows {
            let merged_row = columns
                .iter()
                .map(|column| {
                    sheet
                        .columns
                        .iter()
                        .position(|c| c == column)
                        .map(|idx| row[idx].clone())
                        .unwrap_or(CellValue::Null)
                })
                .collect();
            rows.push(merged_row);
        }
    }

    MergedTable { columns, rows }
}

/// Normalize column names on the merged table.
///
/// Applied once, globally, never per sheet: strip surrounding whitespace
/// from every name, then rename the answer column to its final spelling
/// (exact match, no-op when absent). Names colliding after the trim are
/// left in place; they collapse at serialization time, last column wins.
pub fn normalize_columns(table: &mut MergedTable) {
    for column in &mut table.columns {
        *column = column.trim().to_string();
    }
    for column in &mut table.columns {
        if column == ANSWER_COLUMN_SOURCE {
            *column = ANSWER_COLUMN.to_string();
        }
    }
}
