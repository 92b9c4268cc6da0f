use crate::error::ConvertResult;
use serde::Serialize;
use serde_json::{Map, Value};

//==============================================================================
// Cell values
//==============================================================================

/// A single spreadsheet cell, mapped onto its JSON shape.
///
/// `untagged` makes each variant serialize as the bare JSON value
/// (string / number / boolean / null), which is exactly what the
/// front-end expects per record field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Integer(i64),
    Bool(bool),
    Null,
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

//==============================================================================
// Sheets
//==============================================================================

/// One worksheet read from the source workbook: a header row of column
/// names (raw, possibly whitespace-padded) plus row-major data.
///
/// Every row holds exactly one cell per column.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(name: String) -> Self {
        Self {
            name,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Assign a column with the same value in every row.
    ///
    /// Overwrites an existing column of the same name in place; otherwise
    /// appends the column after the sheet's own columns.
    pub fn assign_column(&mut self, name: &str, value: CellValue) {
        if let Some(idx) = self.columns.iter().position(|c| c == name) {
            for row in &mut self.rows {
                row[idx] = value.clone();
            }
        } else {
            self.columns.push(name.to_string());
            for row in &mut self.rows {
                row.push(value.clone());
            }
        }
    }
}

//==============================================================================
// Merged table
//==============================================================================

/// The flattened result of concatenating every sheet: the union of all
/// sheets' columns (in first-seen order) with rows padded to that union.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl MergedTable {
    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    /// Convert each row into an ordered JSON object keyed by column name.
    ///
    /// Keys follow table-column order. Column names that collapsed to the
    /// same string during normalization resolve by map overwrite, so the
    /// last column wins.
    pub fn to_records(&self) -> ConvertResult<Vec<Map<String, Value>>> {
        let mut records = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let mut record = Map::new();
            for (column, cell) in self.columns.iter().zip(row) {
                record.insert(column.clone(), serde_json::to_value(cell)?);
            }
            records.push(record);
        }
        Ok(records)
    }
}
