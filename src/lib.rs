//! `survey-report` turns a quoted survey export into typed [`types::Response`]s and a static
//! statistics report.
//!
//! The export is read tolerantly: rows that stop early keep their remaining fields empty, empty
//! values become `None`, and `;`-packed multi-value answers become sets. The only hard parse
//! failure is non-numeric text in a numeric column.
//!
//! ## Quick example
//!
//! ```rust
//! use survey_report::ingestion::{ingest_from_str, IngestionOptions};
//! use survey_report::processing::{count_yes_no, YesNo};
//!
//! # fn main() -> Result<(), survey_report::SurveyError> {
//! let doc = concat!(
//!     "\"Timestamp\",\"Username\",\"Name\"\n",
//!     "\"2017/05/01\",\"jdoe\",\"Jane\",\"Acme\",\"\",\"\",\"\",\"Yes\"\n",
//!     "\"2017/05/02\",\"rroe\"\n",
//! );
//! let responses = ingest_from_str(doc, &IngestionOptions::default())?;
//! assert_eq!(responses.len(), 2);
//! assert_eq!(responses[1].company_name(), None);
//!
//! let refs = count_yes_no(&responses, |r| r.public_reference());
//! assert_eq!(refs, YesNo { yes: 1, no: 0 });
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`ingestion`]: reading and parsing the export, with observer hooks
//! - [`types`]: schema, values and the [`types::Response`] record
//! - [`processing`]: frequency counts, yes/no tallies, range buckets, listings
//! - [`report`]: the fixed report layout and HTML/JSON output
//! - [`error`]: the crate error type

#[cfg(feature = "cli")]
pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod types;

pub use error::{SurveyError, SurveyResult};
