//! Workbook reader implementation - Excel (.xlsx) → in-memory sheets

use crate::error::{ConvertError, ConvertResult};
use crate::types::{CellValue, Sheet};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::{Path, PathBuf};

/// Reader for the source workbook.
///
/// The first row of each worksheet is the header; everything below it is
/// data. Worksheets are returned in workbook order.
pub struct WorkbookReader {
    path: PathBuf,
}

impl WorkbookReader {
    /// Create a new workbook reader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read all worksheets into `Sheet`s.
    ///
    /// Any open or parse failure is fatal; there is no per-sheet recovery.
    /// Worksheets without any cells are skipped entirely.
    pub fn read_sheets(&self) -> ConvertResult<Vec<Sheet>> {
        let mut workbook: Xlsx<_> = open_workbook(&self.path).map_err(|e| {
            ConvertError::Load(format!(
                "Failed to open workbook {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let sheet_names = workbook.sheet_names().to_vec();

        let mut sheets = Vec::new();
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
                ConvertError::Load(format!("Failed to read sheet '{}': {}", sheet_name, e))
            })?;
            if let Some(sheet) = Self::read_sheet(&sheet_name, &range) {
                sheets.push(sheet);
            }
        }

        Ok(sheets)
    }

    /// Read a single worksheet range; `None` if the sheet has no cells.
    fn read_sheet(sheet_name: &str, range: &Range<Data>) -> Option<Sheet> {
        if range.is_empty() {
            return None;
        }

        let (height, width) = range.get_size();

        // Header row (row 0). Non-string headers use their display form;
        // missing header cells get positional fallback names.
        let mut columns: Vec<String> = Vec::with_capacity(width);
        for col in 0..width {
            let name = match range.get((0, col)) {
                Some(Data::String(s)) => s.clone(),
                Some(Data::Int(i)) => i.to_string(),
                Some(Data::Float(f)) => f.to_string(),
                Some(Data::Empty) | None => format!("col_{}", col),
                Some(other) => other.to_string(),
            };
            columns.push(name);
        }

        // Data rows. A header-only sheet still contributes its columns to
        // the merged table's union, just with zero rows.
        let mut rows: Vec<Vec<CellValue>> = Vec::with_capacity(height.saturating_sub(1));
        for row in 1..height {
            let mut cells = Vec::with_capacity(width);
            for col in 0..width {
                cells.push(Self::convert_cell(range.get((row, col))));
            }
            rows.push(cells);
        }

        Some(Sheet {
            name: sheet_name.to_string(),
            columns,
            rows,
        })
    }

    /// Convert a calamine cell to a `CellValue`
    fn convert_cell(cell: Option<&Data>) -> CellValue {
        match cell {
            Some(Data::String(s)) => CellValue::Text(s.clone()),
            Some(Data::Float(f)) => CellValue::Number(*f),
            Some(Data::Int(i)) => CellValue::Integer(*i),
            Some(Data::Bool(b)) => CellValue::Bool(*b),
            // Serial date numbers pass through as-is; the front-end data
            // carries no date columns, so no calendar conversion is done.
            Some(Data::DateTime(dt)) => CellValue::Number(dt.as_f64()),
            Some(Data::DateTimeIso(s)) | Some(Data::DurationIso(s)) => CellValue::Text(s.clone()),
            Some(Data::Error(_)) | Some(Data::Empty) | None => CellValue::Null,
        }
    }
}
