//! Filtered row listings for free-text answers.

use crate::types::Response;

/// Projection used by listings. Accessors such as [`Response::company_name`] coerce to it.
pub type TextProjection = fn(&Response) -> Option<&str>;

/// One listed response: a value per projection, in projection order.
pub type ListingRow<'a> = Vec<Option<&'a str>>;

/// List the projected values of every response that passes `filter`.
///
/// A response is only listed when at least one projected value says something, i.e. is present
/// and is not a bare "no" (ASCII case-insensitive, whole value). Output keeps input order.
pub fn list_filtered<'a, F>(
    responses: &'a [Response],
    filter: F,
    projections: &[TextProjection],
) -> Vec<ListingRow<'a>>
where
    F: Fn(&Response) -> bool,
{
    responses
        .iter()
        .filter(|r| filter(r))
        .filter_map(|r| {
            let row: ListingRow<'a> = projections.iter().map(|p| p(r)).collect();
            let keep = row.iter().any(|v| is_meaningful(*v));
            keep.then_some(row)
        })
        .collect()
}

/// [`list_filtered`] without a filter.
pub fn list<'a>(responses: &'a [Response], projections: &[TextProjection]) -> Vec<ListingRow<'a>> {
    list_filtered(responses, |_| true, projections)
}

fn is_meaningful(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.eq_ignore_ascii_case("no"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(company: Option<&str>, hardware: Option<&str>, public: Option<bool>) -> Response {
        Response {
            company_name: company.map(str::to_string),
            hardware: hardware.map(str::to_string),
            public_reference: public,
            ..Default::default()
        }
    }

    #[test]
    fn bare_no_is_dropped_but_longer_answers_are_kept() {
        let responses = vec![
            response(Some("No"), None, None),
            response(Some("no impact"), None, None),
            response(Some("NO"), Some("nO"), None),
        ];
        let rows = list(&responses, &[Response::company_name, Response::hardware]);
        assert_eq!(rows, vec![vec![Some("no impact"), None]]);
    }

    #[test]
    fn one_meaningful_value_keeps_the_whole_row() {
        let responses = vec![response(Some("no"), Some("2 VMs"), None)];
        let rows = list(&responses, &[Response::company_name, Response::hardware]);
        assert_eq!(rows, vec![vec![Some("no"), Some("2 VMs")]]);
    }

    #[test]
    fn all_null_rows_are_skipped() {
        let responses = vec![response(None, None, None), response(None, Some("bare metal"), None)];
        let rows = list(&responses, &[Response::hardware]);
        assert_eq!(rows, vec![vec![Some("bare metal")]]);
    }

    #[test]
    fn filter_applies_before_projection_and_order_is_kept() {
        let responses = vec![
            response(Some("Acme"), None, Some(true)),
            response(Some("Initech"), None, Some(false)),
            response(Some("Globex"), None, Some(true)),
        ];
        let rows = list_filtered(
            &responses,
            |r| r.public_reference() == Some(true),
            &[Response::company_name],
        );
        assert_eq!(rows, vec![vec![Some("Acme")], vec![Some("Globex")]]);
    }
}
