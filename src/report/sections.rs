//! The survey report layout.

use crate::processing::TextProjection;
use crate::types::Response;

use super::{Report, ReportBuilder};

const REALM_BOUNDARIES: [i64; 6] = [1, 2, 5, 10, 50, 100];
const USER_BOUNDARIES: [i64; 4] = [1_000, 10_000, 100_000, 1_000_000];
const CLIENT_BOUNDARIES: [i64; 3] = [10, 100, 1_000];

/// Longest label shown for multi-value answers.
const SET_LABEL_LEN: usize = 50;
const THEME_LABEL_LEN: usize = 10;

/// Build the full survey report. Section order and headings are fixed.
pub fn survey_report(responses: &[Response]) -> Report {
    let mut r = ReportBuilder::new(responses);

    r.line(format!("Total responses: {}", responses.len()));

    r.h1("Securing Apps")
        .count_set(|e| e.app_security(), SET_LABEL_LEN);
    r.h2("Do you want a proxy?")
        .count_yes_no(|e| e.lightweight_proxy());

    r.h1("Features").count_set(|e| e.features(), SET_LABEL_LEN);
    r.h2("Missing features").list(&[Response::missing_features]);

    r.h1("Customization");
    r.h2("Themes").count_set(|e| e.themes(), THEME_LABEL_LEN);
    r.h2("SPIs").count_set(|e| e.spis(), SET_LABEL_LEN);
    r.h2("Significant changes").list(&[Response::significant_changes]);
    r.h2("Customizations").list(&[Response::customizations]);

    r.h1("Deployment size");
    r.h2("Realms").ranges(|e| e.num_realms(), &REALM_BOUNDARIES);
    r.h2("Users").ranges(|e| e.num_users(), &USER_BOUNDARIES);
    r.h2("Active Users").ranges(|e| e.num_active_users(), &USER_BOUNDARIES);
    r.h2("Logins per hour").ranges(|e| e.num_logins_per_hour(), &USER_BOUNDARIES);
    r.h2("Clients").ranges(|e| e.num_clients(), &CLIENT_BOUNDARIES);

    r.h1("Project");
    r.h2("Project size").count_string(|e| e.project_size());
    r.h2("Describe how you use").list(&[Response::usage_description]);

    r.h1("Deployment");
    r.h2("Deployment method").count_string(|e| e.deployment_method());
    r.h2("DB").count_string(|e| e.db());
    r.h2("Hardware").list(&[Response::hardware]);
    r.h2("Clustering").count_string(|e| e.clustering());

    r.h1("Comments");
    r.h2("Experience").list(&[Response::experience]);
    r.h2("Additional comments").list(&[Response::additional_comments]);
    r.h2("Last comments").list(&[Response::last_comments]);

    let contact: [TextProjection; 3] =
        [Response::company_name, Response::username, Response::contact_name];
    r.h1("Users");
    r.h2("Public references")
        .list_filtered(is_public_reference, &contact);
    r.h2("Others references")
        .list_filtered(|e| !is_public_reference(e), &contact);

    r.finish()
}

/// Agreed to be a public reference and gave a company name.
fn is_public_reference(e: &Response) -> bool {
    e.public_reference() == Some(true) && e.company_name().is_some()
}
