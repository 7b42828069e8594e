//! Turns a resolved reference into concrete verse records.

use tracing::warn;

use crate::model::{Book, ParsedReference, Verse};

/// Verses of `book` covered by `reference`, in chapter-then-verse order.
///
/// A chapter missing from the corpus is logged and skipped; the remaining
/// chapters are still returned. Verse bounds are used as given, so indices past
/// the end of a chapter simply produce nothing. `missing_chapters` is bumped
/// once per skipped chapter.
pub fn extract_verses(
    book: &Book,
    canonical_name: &str,
    reference: &ParsedReference,
    missing_chapters: &mut usize,
) -> Vec<Verse> {
    let mut verses = Vec::new();

    for chapter in reference.start_chapter..=reference.end_chapter {
        if chapter as usize > book.chapters.len() {
            // everything from here on is past the end of the book
            let remaining = (reference.end_chapter - chapter) as usize + 1;
            warn!(
                "Chapter not found: {} {}..={}",
                reference.book, chapter, reference.end_chapter
            );
            *missing_chapters += remaining;
            break;
        }
        let Some(texts) = chapter_texts(book, chapter) else {
            warn!("Chapter not found: {} {}", reference.book, chapter);
            *missing_chapters += 1;
            continue;
        };

        let (first, last) = match reference.verses {
            Some(span) => (span.start, span.end),
            None => (1, texts.len() as u32),
        };

        // verses past the chapter end have no text
        for number in first..=last.min(texts.len() as u32) {
            let Some(text) = verse_text(texts, number) else {
                continue;
            };
            verses.push(Verse {
                id: format!("{}-{}-{}", book.abbrev, chapter, number),
                reference: format!("{canonical_name} {chapter}:{number}"),
                text: strip_whitespace(text),
            });
        }
    }

    verses
}

fn chapter_texts(book: &Book, chapter: u32) -> Option<&[String]> {
    let index = (chapter as usize).checked_sub(1)?;
    book.chapters.get(index).map(Vec::as_slice)
}

/// Empty verse strings count as absent.
fn verse_text(texts: &[String], number: u32) -> Option<&str> {
    let index = (number as usize).checked_sub(1)?;
    texts
        .get(index)
        .map(String::as_str)
        .filter(|text| !text.is_empty())
}

/// Drop every whitespace character, including full-width spaces.
fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VerseSpan;

    fn book() -> Book {
        Book {
            abbrev: "gn".into(),
            chapters: vec![
                vec!["起初 神創造天地。".into(), "地是 空虛混沌".into()],
                vec!["天地萬物都造齊了。".into()],
            ],
        }
    }

    fn reference(start: u32, end: u32, verses: Option<VerseSpan>) -> ParsedReference {
        ParsedReference {
            book: "創世記".into(),
            start_chapter: start,
            end_chapter: end,
            verses,
        }
    }

    #[test]
    fn whole_chapters_in_order() {
        let mut missing = 0;
        let verses = extract_verses(&book(), "創世記", &reference(1, 2, None), &mut missing);

        let ids: Vec<_> = verses.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["gn-1-1", "gn-1-2", "gn-2-1"]);
        assert_eq!(verses[0].reference, "創世記 1:1");
        assert_eq!(verses[0].text, "起初神創造天地。");
        assert_eq!(missing, 0);
    }

    #[test]
    fn verse_span_is_not_clamped() {
        let mut missing = 0;
        let span = Some(VerseSpan { start: 2, end: 9 });
        let verses = extract_verses(&book(), "創世記", &reference(1, 1, span), &mut missing);

        assert_eq!(verses.len(), 1);
        assert_eq!(verses[0].id, "gn-1-2");
        assert_eq!(verses[0].text, "地是空虛混沌");
    }

    #[test]
    fn missing_chapters_are_skipped() {
        let mut missing = 0;
        let verses = extract_verses(&book(), "創世記", &reference(2, 4, None), &mut missing);

        assert_eq!(verses.len(), 1);
        assert_eq!(missing, 2);
    }

    #[test]
    fn chapter_zero_is_missing() {
        let mut missing = 0;
        let verses = extract_verses(&book(), "創世記", &reference(0, 0, None), &mut missing);
        assert!(verses.is_empty());
        assert_eq!(missing, 1);
    }

    #[test]
    fn full_width_spaces_are_removed() {
        assert_eq!(strip_whitespace("神\u{3000}愛 世人\n"), "神愛世人");
    }
}
