//! Checked-verse state for the day currently on screen.

use std::collections::HashSet;

use chrono::{Days, Local, NaiveDate};

use crate::error::ExportError;
use crate::export::{self, Export};
use crate::model::{DailyReading, ReadingTable, Section, SectionKind};

/// Set of checked verse ids. Not persisted anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    checked: HashSet<String>,
}

impl Selection {
    /// Flip membership of `id`; returns whether it is now checked.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.checked.remove(id) {
            false
        } else {
            self.checked.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.checked.contains(id)
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}

/// How much of one section is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionProgress {
    pub kind: SectionKind,
    pub checked: usize,
    pub total: usize,
}

impl SectionProgress {
    fn of(kind: SectionKind, section: &Section, selection: &Selection) -> Self {
        Self {
            kind,
            checked: section
                .verses
                .iter()
                .filter(|v| selection.contains(&v.id))
                .count(),
            total: section.verses.len(),
        }
    }

    /// Non-empty and every verse checked.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.checked == self.total
    }
}

/// One viewed day: its date, reading and selection.
///
/// Every date change reloads the reading and empties the selection.
#[derive(Debug, Clone)]
pub struct DayView<'a> {
    table: &'a ReadingTable,
    date: NaiveDate,
    reading: DailyReading,
    selection: Selection,
}

impl<'a> DayView<'a> {
    pub fn new(table: &'a ReadingTable, date: NaiveDate) -> Self {
        Self {
            table,
            date,
            reading: table.lookup(date),
            selection: Selection::default(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn reading(&self) -> &DailyReading {
        &self.reading
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.date = date;
        self.reading = self.table.lookup(date);
        self.selection.clear();
    }

    pub fn previous(&mut self) {
        if let Some(date) = self.date.checked_sub_days(Days::new(1)) {
            self.go_to(date);
        }
    }

    pub fn next(&mut self) {
        if let Some(date) = self.date.checked_add_days(Days::new(1)) {
            self.go_to(date);
        }
    }

    pub fn today(&mut self) {
        self.go_to(Local::now().date_naive());
    }

    pub fn is_today(&self) -> bool {
        self.date == Local::now().date_naive()
    }

    pub fn toggle(&mut self, id: &str) -> bool {
        self.selection.toggle(id)
    }

    pub fn progress(&self) -> Vec<SectionProgress> {
        self.reading
            .sections
            .iter()
            .map(|(kind, section)| SectionProgress::of(kind, section, &self.selection))
            .collect()
    }

    /// Checked verses of this day as copy-ready text.
    pub fn export(&self) -> Result<Export, ExportError> {
        export::export(&self.reading, &self.selection)
    }
}
