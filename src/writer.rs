//! JSON output writer.

use crate::error::ConvertResult;
use crate::types::MergedTable;
use std::fs;
use std::path::Path;

/// Serialize the merged table as a pretty-printed JSON array and write it
/// to `path`, creating the parent directory if needed.
///
/// Serialization happens before anything touches the filesystem, so a
/// table that fails to serialize leaves no directory and no file behind.
/// The output is UTF-8 with 2-space indentation; non-ASCII characters are
/// written literally, never escaped. Returns the record count.
pub fn write_records(table: &MergedTable, path: &Path) -> ConvertResult<usize> {
    let records = table.to_records()?;
    let json = serde_json::to_string_pretty(&records)?;

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }
    fs::write(path, json)?;

    Ok(records.len())
}
