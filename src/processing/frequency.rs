//! Frequency counts over text and multi-value projections.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::types::Response;

/// One `(label, count)` entry of a frequency table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub label: String,
    pub count: usize,
}

impl Stat {
    pub fn new(label: impl Into<String>, count: usize) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Count every distinct non-empty value across the projected sets.
///
/// Labels are cut to `max_label_len` characters after counting, so two long answers sharing a
/// prefix still count separately.
pub fn count_set<F>(responses: &[Response], projection: F, max_label_len: usize) -> Vec<Stat>
where
    F: Fn(&Response) -> &BTreeSet<String>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in responses {
        for value in projection(r) {
            if !value.is_empty() {
                *counts.entry(value.as_str()).or_default() += 1;
            }
        }
    }

    sorted_stats(counts)
        .into_iter()
        .map(|stat| Stat {
            label: truncate_label(&stat.label, max_label_len),
            count: stat.count,
        })
        .collect()
}

/// Count each distinct non-null projected string.
pub fn count_string<F>(responses: &[Response], projection: F) -> Vec<Stat>
where
    F: Fn(&Response) -> Option<&str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in responses.iter().filter_map(|r| projection(r)) {
        *counts.entry(value).or_default() += 1;
    }
    sorted_stats(counts)
}

/// Highest count first; equal counts ordered by label.
fn sorted_stats(counts: HashMap<&str, usize>) -> Vec<Stat> {
    let mut stats: Vec<Stat> = counts
        .into_iter()
        .map(|(label, count)| Stat::new(label, count))
        .collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    stats
}

/// First `max_chars` characters of `label`.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    match label.char_indices().nth(max_chars) {
        Some((idx, _)) => label[..idx].to_string(),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_features(items: &[&str]) -> Response {
        Response {
            features: items.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn with_db(db: Option<&str>) -> Response {
        Response {
            db: db.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn count_set_skips_empty_labels() {
        let responses = vec![
            with_features(&["x", "y"]),
            with_features(&["x"]),
            with_features(&[]),
            with_features(&[""]),
        ];
        let stats = count_set(&responses, |r| r.features(), 50);
        assert_eq!(stats, vec![Stat::new("x", 2), Stat::new("y", 1)]);
    }

    #[test]
    fn count_set_truncates_after_counting() {
        let responses = vec![
            with_features(&["Authentication flows"]),
            with_features(&["Authentication flows", "Authorization services"]),
        ];
        let stats = count_set(&responses, |r| r.features(), 4);
        assert_eq!(stats, vec![Stat::new("Auth", 2), Stat::new("Auth", 1)]);
    }

    #[test]
    fn count_string_ignores_nulls_and_sorts_by_count() {
        let responses = vec![
            with_db(Some("MySQL")),
            with_db(Some("PostgreSQL")),
            with_db(None),
            with_db(Some("PostgreSQL")),
        ];
        let stats = count_string(&responses, |r| r.db());
        assert_eq!(stats, vec![Stat::new("PostgreSQL", 2), Stat::new("MySQL", 1)]);
    }

    #[test]
    fn equal_counts_are_ordered_by_label() {
        let responses = vec![with_db(Some("b")), with_db(Some("c")), with_db(Some("a"))];
        let labels: Vec<_> = count_string(&responses, |r| r.db())
            .into_iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn count_over_no_responses_is_empty() {
        assert!(count_string(&[], |r| r.db()).is_empty());
        assert!(count_set(&[], |r| r.themes(), 10).is_empty());
    }

    #[test]
    fn truncate_label_counts_characters() {
        assert_eq!(truncate_label("héllo", 2), "hé");
        assert_eq!(truncate_label("abc", 10), "abc");
        assert_eq!(truncate_label("abc", 0), "");
    }
}
