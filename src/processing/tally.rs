//! Yes/no tallies over boolean projections.

use serde::Serialize;

use crate::types::Response;

/// Counts of affirmative and negative answers. Unanswered questions count toward neither.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct YesNo {
    pub yes: usize,
    pub no: usize,
}

pub fn count_yes_no<F>(responses: &[Response], projection: F) -> YesNo
where
    F: Fn(&Response) -> Option<bool>,
{
    responses
        .iter()
        .filter_map(|r| projection(r))
        .fold(YesNo::default(), |mut acc, answer| {
            if answer {
                acc.yes += 1;
            } else {
                acc.no += 1;
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_proxy(answer: Option<bool>) -> Response {
        Response {
            lightweight_proxy: answer,
            ..Default::default()
        }
    }

    #[test]
    fn nulls_count_toward_neither_side() {
        let responses = vec![
            with_proxy(Some(true)),
            with_proxy(None),
            with_proxy(Some(false)),
            with_proxy(Some(true)),
        ];
        assert_eq!(
            count_yes_no(&responses, |r| r.lightweight_proxy()),
            YesNo { yes: 2, no: 1 }
        );
    }

    #[test]
    fn empty_input_is_zero_zero() {
        assert_eq!(count_yes_no(&[], |r| r.public_reference()), YesNo::default());
    }
}
