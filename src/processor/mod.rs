//! The functional core: reference strings in, reading table out.
pub mod books;
pub mod compiler;
pub mod extract;
pub mod reference;

pub use compiler::{CompileReport, SkippedRow};

use crate::model::BibleCorpus;
use crate::parser::Sheet;
use tracing::info;

/// Runs every processing pass and returns the table for the writer.
pub fn run(sheet: &Sheet, corpus: &BibleCorpus) -> CompileReport {
    let report = compiler::compile(sheet, corpus);

    info!(
        "Generated readings for {} days ({} rows skipped, {} chapters missing)",
        report.table.len(),
        report.skipped.len(),
        report.missing_chapters
    );

    report
}
