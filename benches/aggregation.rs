use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use survey_report::ingestion::parse_responses;
use survey_report::processing::{count_set, count_string, list_filtered, ranges};
use survey_report::report::survey_report;
use survey_report::types::Response;

const ROWS: usize = 10_000;

fn synthetic_export(rows: usize) -> String {
    let mut doc = String::from("\"Timestamp\",\"Username\",\"Contact name\"");
    for i in 0..rows {
        let fields = [
            format!("2017/03/01 {:02}:00:00", i % 24),
            format!("user{i}@example.test"),
            format!("User {i}"),
            if i % 3 == 0 { String::new() } else { format!("Company {}", i % 50) },
            ["Production", "Development", "Evaluation"][i % 3].to_string(),
            "Internal SSO".to_string(),
            String::new(),
            if i % 2 == 0 { "Yes" } else { "No" }.to_string(),
            "SSO;Social login;User federation".to_string(),
            "OpenID Connect adapter;SAML".to_string(),
            "Yes".to_string(),
            "Login;Account".to_string(),
            "User Storage SPI".to_string(),
            if i % 4 == 0 { "No".to_string() } else { format!("Change {i}") },
            String::new(),
            (i * 37 % 2_000_000).to_string(),
            (i * 11 % 100_000).to_string(),
            (i % 5_000).to_string(),
            (i % 1_500).to_string(),
            (i % 130).to_string(),
            "Standalone HA".to_string(),
            ["PostgreSQL", "MySQL", "H2", "Oracle"][i % 4].to_string(),
            "2 VMs".to_string(),
            "Docker".to_string(),
            String::new(),
            String::new(),
            String::new(),
        ];
        doc.push('\n');
        doc.push('"');
        doc.push_str(&fields.join("\",\""));
        doc.push('"');
    }
    doc.push('\n');
    doc
}

fn bench_parse(c: &mut Criterion) {
    let doc = synthetic_export(ROWS);
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(ROWS as u64));
    group.bench_function("parse_responses", |b| {
        b.iter(|| parse_responses(black_box(&doc)).unwrap())
    });
    group.finish();
}

fn bench_aggregations(c: &mut Criterion) {
    let responses: Vec<Response> = parse_responses(&synthetic_export(ROWS)).unwrap();
    let mut group = c.benchmark_group("aggregate");
    group.throughput(Throughput::Elements(ROWS as u64));

    group.bench_function("count_set_features", |b| {
        b.iter(|| count_set(black_box(&responses), |r| r.features(), 50))
    });
    group.bench_function("count_string_db", |b| {
        b.iter(|| count_string(black_box(&responses), |r| r.db()))
    });
    group.bench_function("ranges_users", |b| {
        b.iter(|| {
            ranges(
                black_box(&responses),
                |r| r.num_users(),
                &[1_000, 10_000, 100_000, 1_000_000],
            )
        })
    });
    group.bench_function("list_public_references", |b| {
        b.iter(|| {
            list_filtered(
                black_box(&responses),
                |r| r.public_reference() == Some(true),
                &[Response::company_name, Response::username],
            )
        })
    });
    group.bench_function("survey_report", |b| {
        b.iter(|| survey_report(black_box(&responses)))
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_aggregations);
criterion_main!(benches);
