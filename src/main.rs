//! extract-text CLI entry point

use std::io::Write;
use std::process::ExitCode;

use tracing::debug;
use tracing_subscriber::EnvFilter;

use extract_text::indexing::{collect_files, extract_files_with_jobs};
use extract_text::report::{render, write_report};
use extract_text::{Cli, ExtractConfig, Extractor};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: &Cli) -> extract_text::Result<()> {
    // 1. Resolve configuration and compile patterns; any failure here is fatal
    let config = ExtractConfig::resolve(cli)?;
    let extractor = Extractor::new(&config)?;
    debug!(
        range = extractor.filter().spec(),
        suffixes = ?config.suffixes,
        exclude = ?config.exclude,
        "configured"
    );

    // 2. Expand inputs
    let files = collect_files(&cli.input_paths())?;
    debug!("Collected {} files", files.len());

    // 3. Extract
    let report = extract_files_with_jobs(&extractor, &files, cli.jobs)?;

    // 4. Summarize and write the report
    if cli.stdout {
        eprintln!("\n{}\n", report.summary());
        let body = render(&report.records, config.format)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", body)?;
    } else {
        println!("\n{}\n", report.summary());
        let output = config.output_path();
        write_report(&output, &report.records, config.format)?;
        println!("Wrote {} records to {}", report.records.len(), output.display());
    }

    Ok(())
}
