use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pylint-md",
    version,
    about = "Run pylint over a source tree and write a markdown report"
)]
pub struct Cli {
    /// Root directory to scan for source files
    #[arg(short, long)]
    pub location: PathBuf,

    /// Path of the report to write (overwritten if present)
    #[arg(
        short,
        long = "output_file",
        required_unless_present = "check",
        conflicts_with = "check"
    )]
    pub output_file: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Assert that every discovered file has zero findings instead of writing a report
    #[arg(long)]
    pub check: bool,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors and failing checks
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}
