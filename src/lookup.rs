//! Date → reading lookup over the compiled table.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

use crate::model::{DailyReading, ReadingTable, date_key};

/// Display format of [`DailyReading::date`] once looked up.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl ReadingTable {
    /// Parse a table previously written by the compiler.
    pub fn from_json(json: &str) -> Result<Self> {
        let json = json.strip_prefix('\u{feff}').unwrap_or(json);
        serde_json::from_str(json).context("Parsing reading table")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Loading {}", path.display()))
    }

    /// Reading for a calendar date.
    ///
    /// Feb 29 is always a rest day, whatever the table holds. A date with no
    /// entry gets four empty sections rather than an error. The returned
    /// `date` is the requested date, not the stored "MM-DD" key.
    pub fn lookup(&self, date: NaiveDate) -> DailyReading {
        let display = date.format(DATE_FORMAT).to_string();

        if date.month() == 2 && date.day() == 29 {
            return DailyReading::rest_day(display);
        }

        match self.get(&date_key(date.month(), date.day())) {
            Some(reading) => DailyReading {
                date: display,
                ..reading.clone()
            },
            None => DailyReading::empty(display),
        }
    }
}
