//! Formatting checked verses as copy-ready text.
//
//  Verses are taken in section order (psalms, new testament, old testament,
//  proverbs). Consecutive verses from the same book and chapter share a
//  paragraph and are separated only by their verse number; a new book or
//  chapter starts a fresh paragraph with the full reference:
//
//      創世記 1:1 起初… 2 地是…
//
//      出埃及記 2:5 法老的女兒…

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ExportError;
use crate::model::{DailyReading, Verse};
use crate::selection::Selection;

static REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+)\s([0-9]+)[:：]([0-9]+)").unwrap());

/// Text produced by a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub text: String,
    /// Number of verses that went into `text`.
    pub verse_count: usize,
}

/// Format the checked verses of `reading`.
///
/// Fails with [`ExportError::NothingSelected`] instead of producing empty text
/// when nothing is checked or no checked id belongs to this day.
pub fn export(reading: &DailyReading, selection: &Selection) -> Result<Export, ExportError> {
    if selection.is_empty() {
        return Err(ExportError::NothingSelected);
    }

    let verses: Vec<&Verse> = reading
        .sections
        .verses()
        .filter(|v| selection.contains(&v.id))
        .collect();

    if verses.is_empty() {
        return Err(ExportError::NothingSelected);
    }

    Ok(Export {
        text: format_verses(&verses),
        verse_count: verses.len(),
    })
}

/// Group consecutive same-chapter verses into paragraphs.
pub fn format_verses(verses: &[&Verse]) -> String {
    let mut out = String::new();
    let mut last_chapter: Option<String> = None;

    for verse in verses {
        let (chapter, number) = split_reference(&verse.reference);

        if last_chapter.is_none() {
            out.push_str(&format!("{} {}", verse.reference, verse.text));
        } else if last_chapter.as_deref() == Some(chapter.as_str()) {
            out.push_str(&format!(" {} {}", number, verse.text));
        } else {
            out.push_str(&format!("\n\n{} {}", verse.reference, verse.text));
        }

        last_chapter = Some(chapter);
    }

    out
}

/// `("創世記 1", "2")` for `"創世記 1:2"`. References without a recognised
/// shape fall back to splitting on the first `:`.
fn split_reference(reference: &str) -> (String, &str) {
    if let Some(c) = REFERENCE.captures(reference) {
        let book = c.get(1).map_or("", |m| m.as_str());
        let chapter = c.get(2).map_or("", |m| m.as_str());
        let number = c.get(3).map_or("", |m| m.as_str());
        return (format!("{book} {chapter}"), number);
    }

    match reference.split_once(':') {
        Some((chapter, number)) => (chapter.to_string(), number),
        None => (reference.to_string(), ""),
    }
}
