use clap::Parser;
use tracing::error;

use payroll_report::cli::{Cli, run};
use payroll_report::diagnostics::LogSink;

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .init();

    let mut sink = LogSink;
    if let Err(err) = run(&cli, &mut sink) {
        error!("{}", err);
        std::process::exit(1);
    }
}
