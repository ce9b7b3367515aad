//! Ingestion entrypoints.
//!
//! [`ingest_from_path`] reads a survey export from disk and parses it into responses;
//! [`ingest_from_str`] does the same for a document already in memory. Both report the outcome to
//! the [`IngestionObserver`] configured in [`IngestionOptions`], if any.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{SurveyError, SurveyResult};
use crate::types::Response;

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::survey::{parse_responses_with_stats, CRLF_ROW_BOUNDARY, ROW_BOUNDARY};

/// Options controlling ingestion behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Rewrite the `"\r\n"` row boundary to `"\n"` before splitting, so exports saved on Windows
    /// still split into rows. Line endings inside answers are left alone.
    pub normalize_line_endings: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("normalize_line_endings", &self.normalize_line_endings)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            normalize_line_endings: true,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Read and parse a survey export.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with row stats
/// - `on_warning` after `on_success` when some rows were short
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ```no_run
/// use std::sync::Arc;
///
/// use survey_report::ingestion::{ingest_from_path, IngestionOptions, TracingObserver};
///
/// # fn main() -> Result<(), survey_report::SurveyError> {
/// let opts = IngestionOptions {
///     observer: Some(Arc::new(TracingObserver)),
///     ..Default::default()
/// };
/// let responses = ingest_from_path("questionnaire.csv", &opts)?;
/// println!("responses={}", responses.len());
/// # Ok(())
/// # }
/// ```
pub fn ingest_from_path(path: impl AsRef<Path>, options: &IngestionOptions) -> SurveyResult<Vec<Response>> {
    let path = path.as_ref();
    let ctx = IngestionContext {
        path: path.to_path_buf(),
    };

    let result = std::fs::read_to_string(path)
        .map_err(|e| SurveyError::io(path, e))
        .and_then(|document| parse_with_options(&document, options));
    report_outcome(&ctx, options, result)
}

/// Parse a survey export that is already in memory.
pub fn ingest_from_str(document: &str, options: &IngestionOptions) -> SurveyResult<Vec<Response>> {
    let ctx = IngestionContext {
        path: PathBuf::from("<memory>"),
    };
    let result = parse_with_options(document, options);
    report_outcome(&ctx, options, result)
}

fn parse_with_options(
    document: &str,
    options: &IngestionOptions,
) -> SurveyResult<(Vec<Response>, IngestionStats)> {
    let document = if options.normalize_line_endings && document.contains(CRLF_ROW_BOUNDARY) {
        Cow::Owned(document.replace(CRLF_ROW_BOUNDARY, ROW_BOUNDARY))
    } else {
        Cow::Borrowed(document)
    };
    parse_responses_with_stats(&document)
}

fn report_outcome(
    ctx: &IngestionContext,
    options: &IngestionOptions,
    result: SurveyResult<(Vec<Response>, IngestionStats)>,
) -> SurveyResult<Vec<Response>> {
    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok((_, stats)) => {
                obs.on_success(ctx, *stats);
                if stats.severity() >= IngestionSeverity::Warning {
                    obs.on_warning(ctx, *stats);
                }
            }
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(ctx, sev, e);
                }
            }
        }
    }

    result.map(|(responses, _)| responses)
}

fn severity_for_error(e: &SurveyError) -> IngestionSeverity {
    match e {
        SurveyError::Io { .. } => IngestionSeverity::Critical,
        SurveyError::Json(err) if err.is_io() => IngestionSeverity::Critical,
        SurveyError::Json(_) => IngestionSeverity::Error,
        SurveyError::ParseError { .. } => IngestionSeverity::Error,
    }
}
