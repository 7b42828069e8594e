pub mod cli;
pub mod error;
pub mod export;
pub mod logging;
pub mod lookup;
pub mod model;
pub mod parser;
pub mod processor;
pub mod selection;
pub mod writer;

use std::path::Path;

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::info;

use cli::{Cli, Command, CompileArgs, ExportArgs, InspectArgs, ShowArgs};
use model::{DailyReading, ReadingTable};
use selection::DayView;

pub fn run() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    match args.command {
        Command::Compile(args) => run_compile(&args),
        Command::Show(args) => run_show(&args),
        Command::Export(args) => run_export(&args),
        Command::Inspect(args) => run_inspect(&args),
    }
}

/// Schedule + corpus in, reading table file out.
pub fn compile_files(
    schedule: &Path,
    corpus: &Path,
    output: &Path,
) -> anyhow::Result<processor::CompileReport> {
    // 1. ── Parse ──────────────────────────────────────────────────────
    let corpus_json = std::fs::read_to_string(corpus)
        .with_context(|| format!("Reading {}", corpus.display()))?;
    let corpus = parser::load_corpus(&corpus_json).with_context(|| "Parsing corpus JSON")?;
    let sheet = parser::load_schedule(schedule)?;

    // 2. ── Process ────────────────────────────────────────────────────
    let report = processor::run(&sheet, &corpus);

    // 3. ── Write outputs ──────────────────────────────────────────────
    writer::json::emit(&report.table, output)
        .with_context(|| format!("Writing {}", output.display()))?;
    info!("Successfully wrote to {}", output.display());

    Ok(report)
}

fn run_compile(args: &CompileArgs) -> anyhow::Result<()> {
    compile_files(&args.schedule, &args.corpus, &args.output)?;
    Ok(())
}

fn run_show(args: &ShowArgs) -> anyhow::Result<()> {
    let table = ReadingTable::load(&args.data)?;
    let reading = table.lookup(args.date.unwrap_or_else(today));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reading)?);
    } else {
        print!("{}", render(&reading));
    }
    Ok(())
}

fn run_export(args: &ExportArgs) -> anyhow::Result<()> {
    let table = ReadingTable::load(&args.data)?;
    let mut view = DayView::new(&table, args.date.unwrap_or_else(today));
    for id in &args.verses {
        view.toggle(id);
    }

    let export = view
        .export()
        .with_context(|| format!("Exporting {}", view.date()))?;
    info!("Copied {} verses", export.verse_count);
    println!("{}", export.text);
    Ok(())
}

fn run_inspect(args: &InspectArgs) -> anyhow::Result<()> {
    let sheet = parser::load_schedule(&args.schedule)?;
    for row in sheet.iter().take(args.rows) {
        println!("{}", serde_json::to_string(row)?);
    }
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Plain-text listing of one day.
pub fn render(reading: &DailyReading) -> String {
    let mut out = format!("{}\n", reading.date);
    if reading.is_rest_day {
        out.push_str("休息日\n");
        return out;
    }

    for (_, section) in reading.sections.iter() {
        out.push_str(&format!("\n{} ({})\n", section.title, section.verses.len()));
        for verse in &section.verses {
            out.push_str(&format!("  [{}] {} {}\n", verse.id, verse.reference, verse.text));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Verse;

    #[test]
    fn render_lists_sections_and_ids() {
        let mut reading = DailyReading::empty("2025-01-01");
        reading.sections.proverbs.verses.push(Verse {
            id: "prv-1-1".into(),
            reference: "箴言 1:1".into(),
            text: "以色列王".into(),
        });

        let out = render(&reading);
        assert!(out.starts_with("2025-01-01\n"));
        assert!(out.contains("\n詩篇 (0)\n"));
        assert!(out.contains("\n箴言 (1)\n  [prv-1-1] 箴言 1:1 以色列王\n"));
    }

    #[test]
    fn render_rest_day() {
        let out = render(&DailyReading::rest_day("2024-02-29"));
        assert_eq!(out, "2024-02-29\n休息日\n");
    }
}
