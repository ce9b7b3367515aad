//! Aggregations over parsed responses.
//!
//! Every aggregator takes the full response slice plus one or more projections (plain closures or
//! accessor functions) and returns a fresh result; nothing is cached between calls.
//!
//! - [`count_set()`]: frequency of each value in a multi-value answer
//! - [`count_string()`]: frequency of each text answer
//! - [`count_yes_no()`]: yes/no tally
//! - [`ranges()`]: integer answers bucketed by thresholds
//! - [`list_filtered()`] / [`list()`]: rows of free-text answers
//!
//! ## Example
//!
//! ```rust
//! use survey_report::ingestion::parse_responses;
//! use survey_report::processing::{count_string, ranges, Stat};
//!
//! let doc = concat!(
//!     "\"Timestamp\",\"Username\"\n",
//!     "\"t1\",\"a\",\"\",\"\",\"Small\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"500\"\n",
//!     "\"t2\",\"b\",\"\",\"\",\"Small\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"\",\"50000\"\n",
//! );
//! let responses = parse_responses(doc).unwrap();
//!
//! assert_eq!(count_string(&responses, |r| r.project_size()), vec![Stat::new("Small", 2)]);
//!
//! let users = ranges(&responses, |r| r.num_users(), &[1000, 10000]);
//! let labels: Vec<_> = users.iter().map(|b| (b.label(), b.count)).collect();
//! assert_eq!(
//!     labels,
//!     vec![("0-1000".to_string(), 1), ("1000-10000".to_string(), 0), ("10000-50000".to_string(), 1)]
//! );
//! ```

pub mod frequency;
pub mod listing;
pub mod ranges;
pub mod tally;

pub use frequency::{count_set, count_string, truncate_label, Stat};
pub use listing::{list, list_filtered, ListingRow, TextProjection};
pub use ranges::{ranges, Bucket};
pub use tally::{count_yes_no, YesNo};
