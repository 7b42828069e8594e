//! Write the compiled reading table as pretty-printed JSON.

use std::fs;
use std::io;
use std::path::Path;

use crate::model::ReadingTable;

/// Serialise `table` to `path`, creating parent directories as needed.
pub fn emit(table: &ReadingTable, path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, to_string(table)?)
}

/// Two-space indented JSON, days in "MM-DD" order.
pub fn to_string(table: &ReadingTable) -> io::Result<String> {
    serde_json::to_string_pretty(table).map_err(io::Error::other)
}
