//! Loading of the two inputs: the corpus JSON and the exported schedule sheet.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::RowError;
use crate::model::{BibleCorpus, Book, ScheduleRow};

/// Raw schedule sheet: one `Vec` of cell strings per row, header included.
pub type Sheet = Vec<Vec<String>>;

/// Parse the corpus file: an array of `{ abbrev, chapters }` book objects in
/// canonical order. A leading byte-order mark is ignored.
pub fn load_corpus(json: &str) -> Result<BibleCorpus> {
    let json = json.strip_prefix('\u{feff}').unwrap_or(json);
    let books: Vec<Book> = serde_json::from_str(json).map_err(|e| {
        let sample: String = json.chars().take(100).collect();
        anyhow!("corpus is not a list of books ({e}); starts with: {sample}")
    })?;

    info!("Loaded corpus with {} books", books.len());
    Ok(BibleCorpus { books })
}

/// Read the schedule from `path`, picking the decoder from the extension:
/// `.json` for a sheet exported as an array of row arrays, `.tsv`/`.txt` for
/// tab-separated text.
pub fn load_schedule(path: &Path) -> Result<Sheet> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    let sheet = match extension.as_deref() {
        Some("json") => load_schedule_json(&text),
        Some("tsv") | Some("txt") => Ok(load_schedule_tsv(&text)),
        other => Err(anyhow!(
            "unsupported schedule format `{}` (expected .json, .tsv or .txt)",
            other.unwrap_or("")
        )),
    }
    .with_context(|| format!("Parsing {}", path.display()))?;

    info!("Loaded schedule with {} rows", sheet.len());
    Ok(sheet)
}

/// Sheet exported as JSON: `[[month, day, _, section, reference], ...]`.
/// Cells may be strings, numbers or null.
pub fn load_schedule_json(json: &str) -> Result<Sheet> {
    let json = json.strip_prefix('\u{feff}').unwrap_or(json);
    let root: Value = serde_json::from_str(json)?;

    let rows = root
        .as_array()
        .ok_or_else(|| anyhow!("schedule is not an array of rows"))?;

    rows.iter()
        .enumerate()
        .map(|(i, row)| match row {
            Value::Array(cells) => Ok(cells.iter().map(cell_text).collect::<Vec<_>>()),
            Value::Null => Ok(Vec::new()),
            _ => Err(anyhow!("row {} is not an array", i)),
        })
        .collect()
}

/// Sheet exported as tab-separated text, one row per line.
pub fn load_schedule_tsv(text: &str) -> Sheet {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .map(|line| {
            line.trim_end_matches('\r')
                .split('\t')
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => match (n.as_u64(), n.as_f64()) {
            (Some(int), _) => int.to_string(),
            (None, Some(float)) if float.fract() == 0.0 && float >= 0.0 => {
                format!("{}", float as u64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// Pull the month, day, section and reference cells out of one sheet row.
///
/// Column 2 is unused. Empty, zero or non-numeric month/day cells count as
/// missing, like empty section or reference cells.
pub fn schedule_row(line: usize, cells: &[String]) -> Result<ScheduleRow, RowError> {
    if cells.len() < 5 {
        debug!("row {} has only {} cells", line, cells.len());
        return Err(RowError::MissingField);
    }

    let number = |cell: &str| cell.trim().parse::<u32>().ok().filter(|n| *n != 0);
    let text = |cell: &str| Some(cell.trim()).filter(|s| !s.is_empty()).map(String::from);

    let (Some(month), Some(day), Some(section), Some(reference)) = (
        number(&cells[0]),
        number(&cells[1]),
        text(&cells[3]),
        text(&cells[4]),
    ) else {
        return Err(RowError::MissingField);
    };

    if month > 12 || day > 31 {
        return Err(RowError::InvalidDate { month, day });
    }

    Ok(ScheduleRow {
        line,
        month,
        day,
        section,
        reference,
    })
}
