//! Hooks for watching ingestion outcomes.
//!
//! Every ingest ends in exactly one of: a clean success, a success with short rows (a
//! [`IngestionSeverity::Warning`]), or a failure classified as `Error` or `Critical`. Failures at
//! or above [`IngestionOptions::alert_at_or_above`](super::IngestionOptions) are also raised as
//! alerts.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::SurveyError;

/// How bad an ingestion event is. Ordered, so it can be compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Every row parsed with its full set of fields.
    Info,
    /// Parsed, but some rows stopped early and kept empty trailing fields.
    Warning,
    /// A value could not be parsed; nothing was ingested.
    Error,
    /// The input could not be read at all.
    Critical,
}

/// Where the ingested document came from.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// The input path, or a placeholder for in-memory documents.
    pub path: PathBuf,
}

/// Row counts of a successful ingest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestionStats {
    /// Number of parsed responses (header excluded).
    pub rows: usize,
    /// How many of those rows had fewer fields than the schema.
    pub short_rows: usize,
}

impl IngestionStats {
    /// `Warning` when any row was short, otherwise `Info`.
    pub fn severity(&self) -> IngestionSeverity {
        if self.short_rows > 0 {
            IngestionSeverity::Warning
        } else {
            IngestionSeverity::Info
        }
    }
}

/// Receives ingestion outcomes. All methods default to no-ops.
pub trait IngestionObserver: Send + Sync {
    /// The document was parsed. `stats.severity()` tells a clean ingest from one with short rows.
    fn on_success(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// The document was parsed but some rows were short. Called after [`Self::on_success`].
    fn on_warning(&self, _ctx: &IngestionContext, _stats: IngestionStats) {}

    /// Ingestion failed.
    fn on_failure(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &SurveyError) {}

    /// A failure met the alert threshold. Called after [`Self::on_failure`].
    fn on_alert(&self, _ctx: &IngestionContext, _severity: IngestionSeverity, _error: &SurveyError) {}
}

/// Forwards every event to each of its observers, in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }

    fn each(&self, f: impl Fn(&dyn IngestionObserver)) {
        self.observers.iter().for_each(|o| f(o.as_ref()));
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.each(|o| o.on_success(ctx, stats));
    }

    fn on_warning(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.each(|o| o.on_warning(ctx, stats));
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SurveyError) {
        self.each(|o| o.on_failure(ctx, severity, error));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SurveyError) {
        self.each(|o| o.on_alert(ctx, severity, error));
    }
}

/// Forwards ingestion events to `tracing`.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        tracing::info!(
            path = %ctx.path.display(),
            rows = stats.rows,
            short_rows = stats.short_rows,
            "survey ingested"
        );
    }

    fn on_warning(&self, ctx: &IngestionContext, stats: IngestionStats) {
        tracing::warn!(
            path = %ctx.path.display(),
            short_rows = stats.short_rows,
            "some rows had fewer fields than the schema"
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SurveyError) {
        tracing::warn!(path = %ctx.path.display(), ?severity, %error, "survey ingestion failed");
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SurveyError) {
        tracing::error!(path = %ctx.path.display(), ?severity, %error, "survey ingestion alert");
    }
}

/// Appends one line per event to a log file:
/// `<unix secs> <event> severity=<severity> path=<path> <detail>`.
///
/// Writing is best-effort; a log file that cannot be opened is reported through `tracing` and
/// otherwise ignored.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn record(
        &self,
        event: &str,
        severity: IngestionSeverity,
        ctx: &IngestionContext,
        detail: fmt::Arguments<'_>,
    ) {
        let _guard = self.lock.lock().ok();
        let written = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut f| {
                writeln!(
                    f,
                    "{} {event} severity={severity:?} path={} {detail}",
                    unix_ts(),
                    ctx.path.display()
                )
            });
        if let Err(error) = written {
            tracing::debug!(log = %self.path.display(), %error, "could not append ingestion event");
        }
    }
}

impl IngestionObserver for FileObserver {
    fn on_success(&self, ctx: &IngestionContext, stats: IngestionStats) {
        self.record(
            "ok",
            stats.severity(),
            ctx,
            format_args!("rows={} short_rows={}", stats.rows, stats.short_rows),
        );
    }

    fn on_failure(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SurveyError) {
        self.record("fail", severity, ctx, format_args!("err={error}"));
    }

    fn on_alert(&self, ctx: &IngestionContext, severity: IngestionSeverity, error: &SurveyError) {
        self.record("ALERT", severity, ctx, format_args!("err={error}"));
    }
}

fn unix_ts() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
