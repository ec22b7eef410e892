use std::hint::black_box;

use context_export_formatter::formatters::labels::EN;
use context_export_formatter::{build_report, parsers::parse_export_str};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Generate a synthetic export with N messages alternating text and tool round trips
fn generate_export(num_messages: usize) -> String {
    let mut messages = Vec::with_capacity(num_messages);
    for i in 0..num_messages {
        let message = if i % 2 == 0 {
            format!(
                r#"{{"type":"user","timestamp":"2024-01-{:02}T12:00:00Z","message":{{"role":"user","content":"Prompt {}"}}}}"#,
                (i % 28) + 1,
                i
            )
        } else {
            format!(
                r#"{{"type":"assistant","timestamp":"2024-01-{:02}T12:00:01.250Z","message":{{"role":"assistant","content":[{{"type":"text","text":"Reply {}"}},{{"type":"tool_use","name":"Grep","input":{{"pattern":"fn {}","path":"src"}}}},{{"type":"tool_result","content":"src/lib.rs:{}","is_error":false}}]}}}}"#,
                (i % 28) + 1,
                i,
                i,
                i
            )
        };
        messages.push(message);
    }

    format!(
        r#"{{"timestamp":"2024-01-01T00:00:00Z","exportId":"bench","messages":[{}],"context":{{"gitStatus":"clean","codeStyle":"{}"}}}}"#,
        messages.join(","),
        "x".repeat(2000)
    )
}

fn bench_build_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_report");

    for size in [10, 100, 1_000, 10_000].iter() {
        let record = parse_export_str(&generate_export(*size)).unwrap();

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| build_report(black_box(&record), "bench.json", &EN));
        });
    }

    group.finish();
}

fn bench_parse_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_export_str");

    for size in [100, 1_000, 10_000].iter() {
        let text = generate_export(*size);

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| parse_export_str(black_box(&text)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_build_report, bench_parse_export);
criterion_main!(benches);
