//! Excel import module
//!
//! Reads every worksheet of the source workbook into the in-memory
//! `Sheet` model, in workbook order.

mod reader;

pub use reader::WorkbookReader;
