use survey_report::ingestion::{ingest_from_path, IngestionOptions};
use survey_report::processing::{Stat, YesNo};
use survey_report::report::{survey_report, write_report, Block, Report, ReportFormat};
use survey_report::types::Response;

fn fixture() -> Vec<Response> {
    ingest_from_path("tests/fixtures/survey.csv", &IngestionOptions::default()).unwrap()
}

/// The block right after the heading titled `title`.
fn section<'r>(report: &'r Report, title: &str) -> &'r Block {
    let idx = report
        .blocks
        .iter()
        .position(|b| matches!(b, Block::Heading { title: t, .. } if t == title))
        .unwrap_or_else(|| panic!("no heading '{title}'"));
    &report.blocks[idx + 1]
}

fn stats(block: &Block) -> Vec<(String, usize)> {
    match block {
        Block::Stats { stats } => stats.iter().map(|Stat { label, count }| (label.clone(), *count)).collect(),
        other => panic!("expected stats, got {other:?}"),
    }
}

fn listing(block: &Block) -> Vec<Vec<Option<String>>> {
    match block {
        Block::Listing { rows } => rows.clone(),
        other => panic!("expected listing, got {other:?}"),
    }
}

fn owned(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(str::to_string)).collect()
}

#[test]
fn frequency_sections_count_and_order_fixture_answers() {
    let report = survey_report(&fixture());

    assert_eq!(
        report.blocks[0],
        Block::Line {
            text: "Total responses: 5".to_string()
        }
    );
    assert_eq!(
        stats(section(&report, "Features")),
        vec![
            ("SSO".to_string(), 3),
            ("Social login".to_string(), 2),
            ("User federation".to_string(), 1),
        ]
    );
    // Tied counts fall back to label order.
    assert_eq!(
        stats(section(&report, "Securing Apps")),
        vec![("OpenID Connect adapter".to_string(), 2), ("SAML".to_string(), 2)]
    );
    assert_eq!(
        stats(section(&report, "Project size")),
        vec![
            ("Production".to_string(), 2),
            ("Development".to_string(), 1),
            ("Evaluation".to_string(), 1),
        ]
    );
    assert_eq!(
        *section(&report, "Do you want a proxy?"),
        Block::YesNo {
            tally: YesNo { yes: 2, no: 1 }
        }
    );
}

#[test]
fn range_sections_bucket_fixture_counts() {
    let report = survey_report(&fixture());

    let Block::Ranges { buckets } = section(&report, "Realms") else {
        panic!("expected ranges");
    };
    let labelled: Vec<_> = buckets.iter().map(|b| (b.label(), b.count)).collect();
    assert_eq!(
        labelled,
        vec![
            ("0-1".to_string(), 2),
            ("1-2".to_string(), 1),
            ("2-5".to_string(), 0),
            ("5-10".to_string(), 0),
            ("10-50".to_string(), 0),
            ("50-100".to_string(), 0),
            ("100-120".to_string(), 1),
        ]
    );
    assert!(buckets.last().unwrap().overflow);

    let Block::Ranges { buckets } = section(&report, "Users") else {
        panic!("expected ranges");
    };
    let counts: Vec<_> = buckets.iter().map(|b| b.count).collect();
    assert_eq!(counts, vec![1, 1, 0, 1, 1]);
    assert_eq!(buckets[4].label(), "1000000-2000000");
}

#[test]
fn listings_skip_bare_no_and_split_references() {
    let report = survey_report(&fixture());

    assert_eq!(
        listing(section(&report, "Significant changes")),
        vec![owned(&[Some("Forked the admin console")])]
    );
    assert_eq!(
        listing(section(&report, "Missing features")),
        vec![owned(&[Some("Better admin API")])]
    );
    assert_eq!(
        listing(section(&report, "Additional comments")),
        vec![owned(&[Some("Needs docs\nand examples")])]
    );
    assert_eq!(
        listing(section(&report, "Public references")),
        vec![
            owned(&[Some("Acme"), Some("alice@acme.test"), Some("Alice")]),
            owned(&[Some("Globex"), Some("carol@globex.test"), Some("Carol")]),
        ]
    );
    assert_eq!(
        listing(section(&report, "Others references")),
        vec![
            owned(&[Some("Initech"), Some("bob@initech.test"), Some("Bob")]),
            owned(&[None, Some("dave@example.test"), Some("Dave")]),
            owned(&[None, Some("erin@example.test"), Some("Erin")]),
        ]
    );
}

#[test]
fn html_report_is_written_and_escaped() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.html");

    write_report(&out, &survey_report(&fixture()), ReportFormat::Html).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<p>Total responses: 5</p>"));
    assert!(html.contains("<h1>Securing Apps</h1>"));
    assert!(html.contains("<h2>Others references</h2>"));
    assert!(html.contains("SSO for our &lt;internal&gt; apps"));
    assert!(!html.contains("<internal>"));
    assert_eq!(html.matches("<div class=\"maxheight\">").count(), 24);
}

#[test]
fn json_report_keeps_block_order() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.json");
    let report = survey_report(&fixture());

    write_report(&out, &report, ReportFormat::Json).unwrap();

    let json: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let blocks = json["blocks"].as_array().unwrap();
    assert_eq!(blocks.len(), report.blocks.len());
    assert_eq!(blocks[0]["kind"], "line");
    assert_eq!(blocks[0]["text"], "Total responses: 5");
    assert_eq!(blocks[1]["kind"], "heading");
    assert_eq!(blocks[1]["title"], "Securing Apps");
    assert_eq!(blocks[2]["kind"], "stats");
    assert_eq!(blocks[2]["stats"][0]["label"], "OpenID Connect adapter");
}

#[test]
fn writing_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("missing").join("report.html");
    let err = write_report(&out, &Report::default(), ReportFormat::Html).unwrap_err();
    assert!(matches!(&err, survey_report::SurveyError::Io { path, .. } if *path == out));
    assert!(err.to_string().contains("report.html"));
}
