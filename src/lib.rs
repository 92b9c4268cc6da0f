//! Verbforge - verb-conjugation workbook to JSON converter
//!
//! This library flattens the multi-sheet `verb_conjugations.xlsx` workbook
//! into the single JSON array the practice front-end loads.
//!
//! # Pipeline
//!
//! - Read every worksheet in workbook order
//! - Tag each row with a `serie` column (trimmed sheet name)
//! - Concatenate all rows, outer-join style (missing columns become null)
//! - Trim column names; rename `correct antwoord` to `correcte`
//! - Write `public/verb_conjugations.json`, pretty-printed, UTF-8 literal
//!
//! # Example
//!
//! ```no_run
//! use verbforge::excel::WorkbookReader;
//! use verbforge::merge::{merge_sheets, normalize_columns};
//! use verbforge::writer::write_records;
//! use std::path::Path;
//!
//! let sheets = WorkbookReader::new("verb_conjugations.xlsx").read_sheets()?;
//! let mut table = merge_sheets(sheets);
//! normalize_columns(&mut table);
//!
//! let count = write_records(&table, Path::new("public/verb_conjugations.json"))?;
//! println!("{} records", count);
//! # Ok::<(), verbforge::error::ConvertError>(())
//! ```

pub mod cli;
pub mod error;
pub mod excel;
pub mod merge;
pub mod types;
pub mod writer;

// Re-export commonly used types
pub use error::{ConvertError, ConvertResult};
pub use types::{CellValue, MergedTable, Sheet};
