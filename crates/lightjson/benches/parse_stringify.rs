//! Benchmark – `lightjson::parse` and `lightjson::stringify`, with
//! `serde_json` as a baseline
#![allow(missing_docs)]

use std::{fmt::Write, hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lightjson::{parse, stringify};

/// A deterministic document of roughly `records` objects, mixing every value
/// type, escapes and non-ASCII text.
fn make_json_payload(records: usize) -> String {
    let mut s = String::from("[");
    for i in 0..records {
        if i > 0 {
            s.push(',');
        }
        write!(
            s,
            r#"{{"id":{i},"score":{score},"active":{active},"tags":["a","b\n","é"],"note":null,"nested":{{"x":[1,2.5,-3e-7]}}}}"#,
            score = f64::from(u32::try_from(i).unwrap_or(u32::MAX)) * 0.37,
            active = i % 2 == 0,
        )
        .unwrap();
    }
    s.push(']');
    s
}

/// A single long string, to exercise the plain-run fast path.
fn make_string_payload(len: usize) -> String {
    let mut s = String::with_capacity(len + 2);
    s.push('"');
    s.extend(std::iter::repeat_n('a', len));
    s.push('"');
    s
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for &records in &[10usize, 1_000] {
        let payload = make_json_payload(records);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("records", records), &payload, |b, p| {
            b.iter(|| parse(black_box(p)).unwrap());
        });
        group.bench_with_input(
            BenchmarkId::new("records_serde_json", records),
            &payload,
            |b, p| {
                b.iter(|| serde_json::from_str::<serde_json::Value>(black_box(p)).unwrap());
            },
        );
    }
    let payload = make_string_payload(100_000);
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_with_input(BenchmarkId::new("string", payload.len()), &payload, |b, p| {
        b.iter(|| parse(black_box(p)).unwrap());
    });
    group.finish();
}

fn bench_stringify(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify");
    for &records in &[10usize, 1_000] {
        let value = parse(&make_json_payload(records)).unwrap();
        group.bench_with_input(BenchmarkId::new("records", records), &value, |b, v| {
            b.iter(|| black_box(stringify(black_box(v))));
        });
        let theirs: serde_json::Value = serde_json::from_str(&stringify(&value)).unwrap();
        group.bench_with_input(
            BenchmarkId::new("records_serde_json", records),
            &theirs,
            |b, v| {
                b.iter(|| black_box(serde_json::to_string(black_box(v)).unwrap()));
            },
        );
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_parse, bench_stringify }
criterion_main!(benches);
