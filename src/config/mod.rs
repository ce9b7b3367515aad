//! Command-line configuration for the `survey-report` binary.

pub mod logger;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use crate::ingestion::{CompositeObserver, FileObserver, IngestionObserver, IngestionOptions, TracingObserver};
use crate::report::ReportFormat;

#[derive(Debug, Clone, Parser)]
#[command(name = "survey-report")]
#[command(about = "Turn a quoted survey export into a static statistics report")]
pub struct CliConfig {
    /// Survey export to read.
    #[arg(long, default_value = "questionnaire.csv")]
    pub input: PathBuf,

    /// Where to write the report.
    #[arg(long, default_value = "report.html")]
    pub output: PathBuf,

    /// Report format. Inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Append ingestion events to this file.
    #[arg(long)]
    pub event_log: Option<PathBuf>,

    /// Split rows on the exact "\n" boundary even if the export uses "\r\n".
    #[arg(long)]
    pub keep_line_endings: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// The explicit `--format`, else a guess from the output extension, else HTML.
    pub fn report_format(&self) -> ReportFormat {
        self.format
            .or_else(|| {
                self.output
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .and_then(ReportFormat::from_extension)
            })
            .unwrap_or_default()
    }

    pub fn ingestion_options(&self) -> IngestionOptions {
        let tracing_observer: Arc<dyn IngestionObserver> = Arc::new(TracingObserver);
        let observer: Arc<dyn IngestionObserver> = match &self.event_log {
            Some(path) => {
                let file_observer: Arc<dyn IngestionObserver> = Arc::new(FileObserver::new(path));
                Arc::new(CompositeObserver::new(vec![tracing_observer, file_observer]))
            }
            None => tracing_observer,
        };

        IngestionOptions {
            normalize_line_endings: !self.keep_line_endings,
            observer: Some(observer),
            ..Default::default()
        }
    }
}
