//! Assembles schedule rows into the "MM-DD" reading table.

use tracing::{debug, warn};

use super::{books, extract, reference};
use crate::error::RowError;
use crate::model::{BibleCorpus, ReadingTable, ScheduleRow, SectionKind, Verse};
use crate::parser::{self, Sheet};

/// A row that contributed nothing, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    pub line: usize,
    pub error: RowError,
}

/// Result of a full compilation pass.
#[derive(Debug, Clone, Default)]
pub struct CompileReport {
    pub table: ReadingTable,
    pub skipped: Vec<SkippedRow>,
    /// Chapters named by the schedule but absent from the corpus.
    pub missing_chapters: usize,
}

/// Compile every data row of `sheet` (row 0 is the header).
///
/// Bad rows never abort the pass: each one is logged, recorded in
/// [`CompileReport::skipped`] and the next row is processed. Verses are
/// appended in row order, so several rows may feed the same day and section.
pub fn compile(sheet: &Sheet, corpus: &BibleCorpus) -> CompileReport {
    let mut report = CompileReport::default();

    for (line, cells) in sheet.iter().enumerate().skip(1) {
        let row = match parser::schedule_row(line, cells) {
            Ok(row) => row,
            Err(error) => {
                debug!("skipping row {}: {}", line, error);
                report.skipped.push(SkippedRow { line, error });
                continue;
            }
        };

        // the day exists as soon as a complete row names it
        let day = report.table.entry(&row.date_key());

        match compile_row(&row, corpus, &mut report.missing_chapters) {
            Ok((kind, verses)) => {
                debug!(
                    "row {} adds {} verses to {} {}",
                    line,
                    verses.len(),
                    day.date,
                    kind.title()
                );
                day.sections.get_mut(kind).verses.extend(verses);
            }
            Err(error) => {
                warn!("row {} ({}): {}", line, row.reference, error);
                report.skipped.push(SkippedRow { line, error });
            }
        }
    }

    report
}

/// Resolve one row into its target section and verses.
pub fn compile_row(
    row: &ScheduleRow,
    corpus: &BibleCorpus,
    missing_chapters: &mut usize,
) -> Result<(SectionKind, Vec<Verse>), RowError> {
    let kind = SectionKind::from_schedule_name(&row.section)
        .ok_or_else(|| RowError::UnknownSection(row.section.clone()))?;

    let parsed = reference::parse(&row.reference)?;

    let index = books::resolve(&parsed.book)
        .ok_or_else(|| RowError::UnknownBook(parsed.book.clone()))?;
    let canonical = books::CANONICAL_BOOKS[index];

    let book = corpus.book(index).ok_or_else(|| RowError::MissingBook {
        book: canonical.to_string(),
        index,
    })?;

    let verses = extract::extract_verses(book, canonical, &parsed, missing_chapters);
    Ok((kind, verses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ReferenceError;
    use crate::model::Book;

    /// 66 books; book `i` has two chapters of three verses each.
    fn corpus() -> BibleCorpus {
        let books = (0..66)
            .map(|i| Book {
                abbrev: format!("b{i}"),
                chapters: (1..=2)
                    .map(|c| (1..=3).map(|v| format!("{i} {c} {v}")).collect())
                    .collect(),
            })
            .collect();
        BibleCorpus { books }
    }

    fn sheet(rows: &[[&str; 5]]) -> Sheet {
        let header = ["月", "日", "", "類別", "進度"];
        std::iter::once(&header)
            .chain(rows)
            .map(|r| r.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn rows_append_in_order_to_their_section() {
        let sheet = sheet(&[
            ["1", "1", "", "舊約", "創世記 01~02"],
            ["1", "1", "", "詩篇", "詩篇 1篇"],
            ["1", "1", "", "舊約", "出埃及記 1:2~3"],
        ]);
        let report = compile(&sheet, &corpus());

        assert!(report.skipped.is_empty());
        let day = report.table.get("01-01").unwrap();
        let ids: Vec<_> = day
            .sections
            .old_testament
            .verses
            .iter()
            .map(|v| v.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["b0-1-1", "b0-1-2", "b0-1-3", "b0-2-1", "b0-2-2", "b0-2-3", "b1-1-2", "b1-1-3"]
        );
        assert_eq!(day.sections.psalms.verses.len(), 3);
        assert_eq!(day.sections.psalms.verses[0].reference, "詩篇 1:1");
        assert_eq!(day.sections.psalms.verses[0].text, "1811");
        assert!(day.sections.proverbs.verses.is_empty());
    }

    #[test]
    fn bad_rows_are_skipped_and_reported() {
        let sheet = sheet(&[
            ["2", "3", "", "新約", "Matthew 1"],
            ["2", "3", "", "新約", "多馬福音 1"],
            ["2", "3", "", "福音", "馬太福音 1"],
            ["", "3", "", "新約", "馬太福音 1"],
            ["2", "3", "", "新約", "馬太福音 1"],
        ]);
        let report = compile(&sheet, &corpus());

        let errors: Vec<_> = report
            .skipped
            .iter()
            .map(|s| (s.line, s.error.clone()))
            .collect();
        assert_eq!(
            errors,
            vec![
                (1, RowError::Reference(ReferenceError::Unparsable("Matthew 1".into()))),
                (2, RowError::UnknownBook("多馬福音".into())),
                (3, RowError::UnknownSection("福音".into())),
                (4, RowError::MissingField),
            ]
        );
        let day = report.table.get("02-03").unwrap();
        assert_eq!(day.sections.new_testament.verses.len(), 3);
    }

    #[test]
    fn day_exists_even_when_every_reference_fails() {
        let report = compile(&sheet(&[["5", "9", "", "箴言", "???"]]), &corpus());
        let day = report.table.get("05-09").unwrap();
        assert!(day.sections.is_empty());
        assert_eq!(day.date, "05-09");
    }

    #[test]
    fn missing_book_data_is_reported() {
        let mut short = corpus();
        short.books.truncate(10);
        let report = compile(&sheet(&[["1", "2", "", "新約", "猶大書"]]), &short);
        assert_eq!(
            report.skipped[0].error,
            RowError::MissingBook {
                book: "猶大書".into(),
                index: 64
            }
        );
    }

    #[test]
    fn missing_chapters_keep_the_rest_of_the_row() {
        let report = compile(&sheet(&[["1", "3", "", "舊約", "創世記 2~3"]]), &corpus());
        assert!(report.skipped.is_empty());
        assert_eq!(report.missing_chapters, 1);
        let day = report.table.get("01-03").unwrap();
        assert_eq!(day.sections.old_testament.verses.len(), 3);
    }
}
