use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The four reading categories of a day, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Psalms,
    NewTestament,
    OldTestament,
    Proverbs,
}

impl SectionKind {
    /// Fixed export / display order.
    pub const ALL: [SectionKind; 4] = [
        SectionKind::Psalms,
        SectionKind::NewTestament,
        SectionKind::OldTestament,
        SectionKind::Proverbs,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SectionKind::Psalms => "詩篇",
            SectionKind::NewTestament => "新約",
            SectionKind::OldTestament => "舊約",
            SectionKind::Proverbs => "箴言",
        }
    }

    /// Map the section cell of a schedule row onto a category.
    pub fn from_schedule_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.title() == name.trim())
    }
}

// ─────────────────────────────────────────────────────
// Corpus
// ─────────────────────────────────────────────────────

/// One book as it appears in the corpus file. Extra fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Book {
    pub abbrev: String,
    /// `chapters[c][v]` is the text of chapter `c + 1`, verse `v + 1`.
    pub chapters: Vec<Vec<String>>,
}

/// Full Bible text, indexed by canonical book position.
#[derive(Debug, Clone, Default)]
pub struct BibleCorpus {
    pub books: Vec<Book>,
}

impl BibleCorpus {
    pub fn book(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }
}

// ─────────────────────────────────────────────────────
// Schedule
// ─────────────────────────────────────────────────────

/// One schedule row after the required cells have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    /// Zero-based row position in the sheet (header is row 0).
    pub line: usize,
    pub month: u32,
    pub day: u32,
    pub section: String,
    pub reference: String,
}

impl ScheduleRow {
    /// "MM-DD" key of the day this row contributes to.
    pub fn date_key(&self) -> String {
        date_key(self.month, self.day)
    }
}

/// Zero-padded "MM-DD" lookup key.
pub fn date_key(month: u32, day: u32) -> String {
    format!("{month:02}-{day:02}")
}

/// Inclusive verse bounds inside a single chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseSpan {
    pub start: u32,
    pub end: u32,
}

/// A reference string broken into book / chapter / verse parts.
///
/// Verse bounds only exist for single-chapter references, so `verses` being
/// `Some` implies `start_chapter == end_chapter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    /// Book name exactly as written (not yet resolved).
    pub book: String,
    pub start_chapter: u32,
    pub end_chapter: u32,
    /// `None` means whole chapter(s).
    pub verses: Option<VerseSpan>,
}

// ─────────────────────────────────────────────────────
// Compiled output
// ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// `<abbrev>-<chapter>-<verse>`
    pub id: String,
    /// `<canonical book> <chapter>:<verse>`
    pub reference: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub verses: Vec<Verse>,
}

impl Section {
    fn empty(kind: SectionKind) -> Self {
        Self {
            title: kind.title().to_string(),
            verses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    pub psalms: Section,
    pub new_testament: Section,
    pub old_testament: Section,
    pub proverbs: Section,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            psalms: Section::empty(SectionKind::Psalms),
            new_testament: Section::empty(SectionKind::NewTestament),
            old_testament: Section::empty(SectionKind::OldTestament),
            proverbs: Section::empty(SectionKind::Proverbs),
        }
    }
}

impl Sections {
    pub fn get(&self, kind: SectionKind) -> &Section {
        match kind {
            SectionKind::Psalms => &self.psalms,
            SectionKind::NewTestament => &self.new_testament,
            SectionKind::OldTestament => &self.old_testament,
            SectionKind::Proverbs => &self.proverbs,
        }
    }

    pub fn get_mut(&mut self, kind: SectionKind) -> &mut Section {
        match kind {
            SectionKind::Psalms => &mut self.psalms,
            SectionKind::NewTestament => &mut self.new_testament,
            SectionKind::OldTestament => &mut self.old_testament,
            SectionKind::Proverbs => &mut self.proverbs,
        }
    }

    /// Sections paired with their kind, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &Section)> {
        SectionKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Every verse of the day, section by section.
    pub fn verses(&self) -> impl Iterator<Item = &Verse> {
        self.iter().flat_map(|(_, section)| section.verses.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.verses().next().is_none()
    }
}

/// Everything shown for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyReading {
    /// "MM-DD" when stored, "YYYY-MM-DD" once handed out by a lookup.
    pub date: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_rest_day: bool,
    pub sections: Sections,
}

impl DailyReading {
    /// Four empty sections, not a rest day.
    pub fn empty(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            is_rest_day: false,
            sections: Sections::default(),
        }
    }

    pub fn rest_day(date: impl Into<String>) -> Self {
        Self {
            is_rest_day: true,
            ..Self::empty(date)
        }
    }
}

/// Compiled "MM-DD" → reading table; the static artifact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReadingTable {
    pub days: BTreeMap<String, DailyReading>,
}

impl ReadingTable {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&DailyReading> {
        self.days.get(key)
    }

    /// Fetch the record for `key`, creating an empty one on first use.
    pub fn entry(&mut self, key: &str) -> &mut DailyReading {
        self.days
            .entry(key.to_string())
            .or_insert_with(|| DailyReading::empty(key))
    }
}
