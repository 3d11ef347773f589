mod analyze;
mod check;
mod cli;
mod config;
mod error;
mod report;
mod scan;
mod types;

use crate::analyze::pylint::PylintAnalyzer;
use crate::error::PylintMdError;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const CHECK_FAILED: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run() -> Result<i32, PylintMdError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    tracing::debug!("pylint-md v{}", env!("CARGO_PKG_VERSION"));

    let loaded = config::load_config(&cli.location)?;
    let files = scan::discover(&cli.location, &loaded.discovery)?;
    let analyzer = PylintAnalyzer::new(&loaded.analyzer);

    if !cli.quiet {
        println!("Performing analysis of {} file(s)", files.len());
    }

    let output_file = match cli.output_file.as_deref() {
        Some(path) if !cli.check => path,
        _ => {
            let outcomes = check::check_files(&files, &analyzer);
            let failures = check::print_summary(&outcomes, cli.quiet);
            return Ok(if failures == 0 {
                exit_code::SUCCESS
            } else {
                exit_code::CHECK_FAILED
            });
        }
    };

    let run_report = analyze::run(&cli.location, &files, &analyzer)?;
    if !cli.quiet {
        let totals = run_report.totals;
        println!(
            "errors={};warnings={};refactors={};conventions={}",
            totals.error, totals.warning, totals.refactor, totals.convention
        );
    }

    let output_format = match cli.format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Sarif => report::OutputFormat::Sarif,
    };
    let rendered = report::render(&run_report, output_format)?;
    if !cli.quiet {
        println!(
            "Generating {} file: {}",
            output_format.label(),
            output_file.display()
        );
    }
    report::write_report(output_file, &rendered)?;

    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
