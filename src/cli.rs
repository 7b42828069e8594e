use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_SCHEDULE: &str = "attached_assets/schedule.json";
pub const DEFAULT_CORPUS: &str = "attached_assets/zh_cuv.json";
pub const DEFAULT_TABLE: &str = "client/src/lib/bible-data.json";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the daily reading table from the schedule and the Bible text
    Compile(CompileArgs),

    /// Show the reading for one day
    Show(ShowArgs),

    /// Print the chosen verses of one day as copy-ready text
    Export(ExportArgs),

    /// Print the first rows of the schedule sheet
    Inspect(InspectArgs),
}

#[derive(clap::Args, Debug)]
pub struct CompileArgs {
    /// Schedule sheet (.json rows or .tsv)
    #[arg(long, default_value = DEFAULT_SCHEDULE)]
    pub schedule: PathBuf,
    /// Bible text, an array of books
    #[arg(long, default_value = DEFAULT_CORPUS)]
    pub corpus: PathBuf,
    /// Where to write the compiled table
    #[arg(long, short, default_value = DEFAULT_TABLE)]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Compiled table
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub data: PathBuf,
    /// Day to show (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Print the reading as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExportArgs {
    /// Compiled table
    #[arg(long, default_value = DEFAULT_TABLE)]
    pub data: PathBuf,
    /// Day to export from (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Verse id to include, e.g. `gn-1-1`; repeat to toggle more
    #[arg(long = "verse", value_name = "ID")]
    pub verses: Vec<String>,
}

#[derive(clap::Args, Debug)]
pub struct InspectArgs {
    /// Schedule sheet (.json rows or .tsv)
    #[arg(long, default_value = DEFAULT_SCHEDULE)]
    pub schedule: PathBuf,
    /// Number of rows to print
    #[arg(long, default_value_t = 5)]
    pub rows: usize,
}
