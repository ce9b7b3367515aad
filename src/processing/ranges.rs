//! Threshold bucketing for integer projections.

use serde::Serialize;

use crate::types::Response;

/// One bucket of a [`ranges`] result, covering `(lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub lower: i64,
    pub upper: i64,
    pub count: usize,
    /// Set on the trailing bucket that collects values above every boundary. Its `upper` is the
    /// largest such value seen.
    pub overflow: bool,
}

impl Bucket {
    /// Display label, e.g. `100-1000`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.lower, self.upper)
    }
}

/// Bucket every non-null projected value into the first boundary it does not exceed.
///
/// `boundaries` should be ascending. The first bucket is labelled from 0, though nothing below
/// zero is rejected. Every boundary gets a bucket, even an empty one; the overflow bucket is only
/// present when some value exceeded all boundaries.
pub fn ranges<F>(responses: &[Response], projection: F, boundaries: &[i64]) -> Vec<Bucket>
where
    F: Fn(&Response) -> Option<i64>,
{
    let mut counts = vec![0usize; boundaries.len()];
    let mut overflow: Option<(i64, usize)> = None;

    for value in responses.iter().filter_map(|r| projection(r)) {
        match boundaries.iter().position(|b| value <= *b) {
            Some(idx) => counts[idx] += 1,
            None => {
                let (max, count) = overflow.get_or_insert((value, 0));
                *max = (*max).max(value);
                *count += 1;
            }
        }
    }

    let mut lower = 0;
    let mut buckets = Vec::with_capacity(boundaries.len() + 1);
    for (&upper, &count) in boundaries.iter().zip(&counts) {
        buckets.push(Bucket {
            lower,
            upper,
            count,
            overflow: false,
        });
        lower = upper;
    }
    if let Some((upper, count)) = overflow {
        buckets.push(Bucket {
            lower,
            upper,
            count,
            overflow: true,
        });
    }
    buckets
}
