//! Report assembly and output.
//!
//! A [`Report`] is a flat list of [`Block`]s: headings, free lines and one block per aggregator
//! call. [`ReportBuilder`] runs the aggregators against a borrowed response slice and appends
//! their results; [`sections::survey_report`] drives it through the fixed survey layout.
//! [`write_report`] renders the result as HTML or JSON.

pub mod html;
pub mod sections;

use std::path::Path;

use serde::Serialize;

use crate::error::{SurveyError, SurveyResult};
use crate::processing::{
    count_set, count_string, count_yes_no, list_filtered, ranges, Bucket, Stat, TextProjection, YesNo,
};
use crate::types::Response;

pub use sections::survey_report;

/// One piece of report output, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Line { text: String },
    Heading { level: u8, title: String },
    Stats { stats: Vec<Stat> },
    YesNo { tally: YesNo },
    Ranges { buckets: Vec<Bucket> },
    Listing { rows: Vec<Vec<Option<String>>> },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub blocks: Vec<Block>,
}

/// Output format for [`write_report`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
}

impl ReportFormat {
    /// Guess a format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "html" | "htm" => Some(Self::Html),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Appends aggregator results to a [`Report`].
pub struct ReportBuilder<'a> {
    responses: &'a [Response],
    report: Report,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(responses: &'a [Response]) -> Self {
        Self {
            responses,
            report: Report::default(),
        }
    }

    pub fn line(&mut self, text: impl Into<String>) -> &mut Self {
        self.push(Block::Line { text: text.into() })
    }

    pub fn h1(&mut self, title: impl Into<String>) -> &mut Self {
        self.heading(1, title)
    }

    pub fn h2(&mut self, title: impl Into<String>) -> &mut Self {
        self.heading(2, title)
    }

    fn heading(&mut self, level: u8, title: impl Into<String>) -> &mut Self {
        self.push(Block::Heading {
            level,
            title: title.into(),
        })
    }

    pub fn count_set<F>(&mut self, projection: F, max_label_len: usize) -> &mut Self
    where
        F: Fn(&Response) -> &std::collections::BTreeSet<String>,
    {
        let stats = count_set(self.responses, projection, max_label_len);
        self.push(Block::Stats { stats })
    }

    pub fn count_string<F>(&mut self, projection: F) -> &mut Self
    where
        F: Fn(&Response) -> Option<&str>,
    {
        let stats = count_string(self.responses, projection);
        self.push(Block::Stats { stats })
    }

    pub fn count_yes_no<F>(&mut self, projection: F) -> &mut Self
    where
        F: Fn(&Response) -> Option<bool>,
    {
        let tally = count_yes_no(self.responses, projection);
        self.push(Block::YesNo { tally })
    }

    pub fn ranges<F>(&mut self, projection: F, boundaries: &[i64]) -> &mut Self
    where
        F: Fn(&Response) -> Option<i64>,
    {
        let buckets = ranges(self.responses, projection, boundaries);
        self.push(Block::Ranges { buckets })
    }

    pub fn list(&mut self, projections: &[TextProjection]) -> &mut Self {
        self.list_filtered(|_| true, projections)
    }

    pub fn list_filtered<F>(&mut self, filter: F, projections: &[TextProjection]) -> &mut Self
    where
        F: Fn(&Response) -> bool,
    {
        let rows = list_filtered(self.responses, filter, projections)
            .into_iter()
            .map(|row| row.into_iter().map(|v| v.map(str::to_owned)).collect())
            .collect();
        self.push(Block::Listing { rows })
    }

    pub fn finish(self) -> Report {
        self.report
    }

    fn push(&mut self, block: Block) -> &mut Self {
        self.report.blocks.push(block);
        self
    }
}

/// Render `report` and write it to `path` in one go.
///
/// Rendering happens in memory first, so a failure never leaves a half-written report behind.
pub fn write_report(path: impl AsRef<Path>, report: &Report, format: ReportFormat) -> SurveyResult<()> {
    let path = path.as_ref();
    let mut buf = Vec::new();
    match format {
        ReportFormat::Html => {
            html::render_html(report, &mut buf).map_err(|e| SurveyError::io(path, e))?
        }
        ReportFormat::Json => serde_json::to_writer_pretty(&mut buf, report)?,
    }
    std::fs::write(path, &buf).map_err(|e| SurveyError::io(path, e))?;

    tracing::info!(
        path = %path.display(),
        ?format,
        blocks = report.blocks.len(),
        bytes = buf.len(),
        "report written"
    );
    Ok(())
}
