//! Command-line surface for the payroll report generator.
//!
//! This is a thin adapter around the core: it turns arguments into input
//! paths and a report kind, drives the read-aggregate-write pipeline, and
//! leaves process-exit decisions to the binary.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::diagnostics::DiagnosticSink;
use crate::error::ReportResult;
use crate::models::{Record, ReportKind};
use crate::output::write_report;
use crate::parser::read_records;
use crate::report::generator_for;

/// Generate payroll summary reports from delimited employee record files.
#[derive(Debug, Parser)]
#[command(name = "payroll-report")]
#[command(about = "Generate payroll summary reports from employee record files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// One or more delimited input files
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Report kind to generate
    #[arg(long, value_enum)]
    pub report: ReportKind,

    /// Output file (.json or .csv); defaults to JSON on stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Runs the full report pipeline for parsed CLI arguments.
///
/// Reads every input file in argument order, concatenates their records,
/// aggregates them with the selected strategy, and writes the result. The
/// first unreadable input fails the whole run before any output is
/// written.
pub fn run(cli: &Cli, sink: &mut dyn DiagnosticSink) -> ReportResult<()> {
    info!("Report kind: {}", cli.report);

    let mut records: Vec<Record> = Vec::new();
    for file in &cli.files {
        records.extend(read_records(file, sink)?);
    }

    let generator = generator_for(cli.report);
    let document = generator.generate(&records, sink);

    write_report(&document, cli.output.as_deref())
}
