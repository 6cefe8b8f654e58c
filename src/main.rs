//! Main binary entry point for spdx-json-model.

use clap::Parser;
use spdx_json_model::errors::SpdxError;
use spdx_json_model::{Config, ReportStyle};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// SPDX 2.3 JSON document to check
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Write the normalized document here
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[arg(
        long,
        value_name = "FILE",
        help = "Validate against this JSON Schema instead of the bundled SPDX 2.3 schema"
    )]
    schema: Option<PathBuf>,

    #[arg(long, help = "Skip JSON Schema validation")]
    no_validate: bool,

    #[arg(short, long)]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter_level = if verbose {
        log::LevelFilter::Info
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter(None, filter_level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn run_app() -> Result<(), SpdxError> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let report_style = if std::io::stdout().is_terminal() {
        ReportStyle::Colored
    } else {
        ReportStyle::Plain
    };

    let config = Config {
        input_file: cli.input,
        output_file: cli.output,
        schema_file: cli.schema,
        validate: !cli.no_validate,
        report_style,
    };

    spdx_json_model::run(config)
}

fn main() -> ExitCode {
    match run_app() {
        Ok(_) => {
            log::info!("Finished successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("A fatal error occurred:");
            log::error!("{}", e);
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                log::error!("  Caused by: {}", s);
                source = std::error::Error::source(s);
            }
            ExitCode::FAILURE
        }
    }
}
