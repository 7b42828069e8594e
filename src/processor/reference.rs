//! Parser for schedule reference strings such as `創世記 01~02`,
//! `箴言 1:01~06`, `馬太福音01章` or a bare `猶大書`.
//
//  Accepted forms, tried in this order once `篇`/`章` are stripped:
//
//      <book>                      single-chapter books only → chapter 1
//      <book> C:V~V  (or C:V-V)    verse range in one chapter
//      <book> C:V                  single verse
//      <book> C~C    (or C-C)      chapter range
//      <book> C                    single chapter
//
//  `:` may be the full-width `：`. The book is a run of CJK ideographs and is
//  returned as written; resolving it is left to `books::resolve`.

use std::sync::LazyLock;

use regex::Regex;

use super::books;
use crate::error::ReferenceError;
use crate::model::{ParsedReference, VerseSpan};

static BOOK_AND_REST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\x{4e00}-\x{9fa5}]+)(.*)$").unwrap());
static VERSE_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[:：]([0-9]+)[~-]([0-9]+)").unwrap());
static SINGLE_VERSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[:：]([0-9]+)$").unwrap());
static CHAPTER_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)[~-]([0-9]+)$").unwrap());
static SINGLE_CHAPTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)$").unwrap());

/// Break one reference string into its parts.
pub fn parse(reference: &str) -> Result<ParsedReference, ReferenceError> {
    let unparsable = || ReferenceError::Unparsable(reference.to_string());

    let cleaned = reference.replace(['篇', '章'], "");
    let caps = BOOK_AND_REST
        .captures(cleaned.trim())
        .ok_or_else(unparsable)?;

    let book = caps[1].trim().to_string();
    let rest = caps[2].trim();

    if rest.is_empty() && books::is_single_chapter(&book) {
        return Ok(ParsedReference {
            book,
            start_chapter: 1,
            end_chapter: 1,
            verses: None,
        });
    }

    let number = |s: &str| s.parse::<u32>().map_err(|_| unparsable());

    if let Some(c) = VERSE_RANGE.captures(rest) {
        let chapter = number(&c[1])?;
        return Ok(ParsedReference {
            book,
            start_chapter: chapter,
            end_chapter: chapter,
            verses: Some(VerseSpan {
                start: number(&c[2])?,
                end: number(&c[3])?,
            }),
        });
    }

    if let Some(c) = SINGLE_VERSE.captures(rest) {
        let chapter = number(&c[1])?;
        let verse = number(&c[2])?;
        return Ok(ParsedReference {
            book,
            start_chapter: chapter,
            end_chapter: chapter,
            verses: Some(VerseSpan {
                start: verse,
                end: verse,
            }),
        });
    }

    if let Some(c) = CHAPTER_RANGE.captures(rest) {
        return Ok(ParsedReference {
            book,
            start_chapter: number(&c[1])?,
            end_chapter: number(&c[2])?,
            verses: None,
        });
    }

    if let Some(c) = SINGLE_CHAPTER.captures(rest) {
        let chapter = number(&c[1])?;
        return Ok(ParsedReference {
            book,
            start_chapter: chapter,
            end_chapter: chapter,
            verses: None,
        });
    }

    Err(unparsable())
}
