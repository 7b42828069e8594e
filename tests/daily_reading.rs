use std::path::Path;

use chrono::NaiveDate;
use reading_plan::compile_files;
use reading_plan::error::ExportError;
use reading_plan::model::ReadingTable;
use reading_plan::selection::DayView;

fn table() -> ReadingTable {
    let dir = tempfile::tempdir().expect("create temp dir");
    let output = dir.path().join("bible-data.json");
    compile_files(
        Path::new("tests/fixtures/schedule.json"),
        Path::new("tests/fixtures/corpus.json"),
        &output,
    )
    .expect("compilation succeeds");
    ReadingTable::load(&output).expect("table reads back")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn lookup_injects_the_requested_year() {
    let table = table();
    let reading = table.lookup(date(2026, 1, 2));
    assert_eq!(reading.date, "2026-01-02");
    assert_eq!(reading.sections.old_testament.verses.len(), 2);
}

#[test]
fn leap_day_is_a_rest_day_even_with_compiled_data() {
    let table = table();
    assert!(table.get("02-29").is_some());

    let reading = table.lookup(date(2028, 2, 29));
    assert!(reading.is_rest_day);
    assert!(reading.sections.is_empty());
}

#[test]
fn unknown_day_is_empty_not_rest() {
    let reading = table().lookup(date(2026, 8, 8));
    assert!(!reading.is_rest_day);
    assert!(reading.sections.is_empty());
}

#[test]
fn export_groups_by_chapter_across_sections() {
    let table = table();
    let mut view = DayView::new(&table, date(2026, 1, 1));
    for id in ["gn-1-2", "ps-1-1", "gn-1-1", "gn-2-1"] {
        view.toggle(id);
    }

    let export = view.export().unwrap();
    assert_eq!(export.verse_count, 4);
    assert_eq!(
        export.text,
        "詩篇 1:1 不從惡人的計謀，不站罪人的道路，\n\n\
         創世記 1:1 起初，神創造天地。 2 地是空虛混沌，淵面黑暗；神的靈運行在水面上。\n\n\
         創世記 2:1 天地萬物都造齊了。"
    );
}

#[test]
fn moving_to_another_day_drops_the_selection() {
    let table = table();
    let mut view = DayView::new(&table, date(2026, 1, 1));
    view.toggle("gn-1-1");
    assert!(view.export().is_ok());

    view.next();
    assert_eq!(view.date(), date(2026, 1, 2));
    assert_eq!(view.export(), Err(ExportError::NothingSelected));

    view.toggle("ex-2-5");
    let export = view.export().unwrap();
    assert_eq!(export.text, "出埃及記 2:5 法老的女兒來到河邊洗澡。");

    view.previous();
    assert!(view.selection().is_empty());
}
