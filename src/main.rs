use clap::Parser;
use survey_report::config::{logger, CliConfig};
use survey_report::ingestion::ingest_from_path;
use survey_report::report::{survey_report, write_report};
use survey_report::SurveyResult;

fn main() {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);
    tracing::debug!(?config, "starting survey-report");

    if let Err(e) = run(&config) {
        tracing::error!(error = %e, "survey report failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(config: &CliConfig) -> SurveyResult<()> {
    let responses = ingest_from_path(&config.input, &config.ingestion_options())?;

    let report = survey_report(&responses);
    write_report(&config.output, &report, config.report_format())?;

    println!("Report saved to: {}", config.output.display());
    Ok(())
}
