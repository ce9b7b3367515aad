//! Ingestion entrypoints and implementations.
//!
//! Most callers should use [`ingest_from_path`] (from [`unified`]) which:
//!
//! - reads the whole export into memory
//! - parses it into typed [`crate::types::Response`]s
//! - optionally reports success/failure/alerts to an [`IngestionObserver`]
//!
//! The pieces are also available on their own:
//! - [`coerce`]: raw token → typed value
//! - [`survey`]: row/field splitting and record construction

pub mod coerce;
pub mod observability;
pub mod survey;
pub mod unified;

pub use observability::{
    CompositeObserver, FileObserver, IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats,
    TracingObserver,
};
pub use survey::{parse_responses, parse_responses_with_stats};
pub use unified::{ingest_from_path, ingest_from_str, IngestionOptions};
