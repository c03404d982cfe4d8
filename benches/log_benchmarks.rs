use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;
use topic_log::prelude::*;
use topic_log::{build_entry_at, Payload};

fn bench_entry_building(c: &mut Criterion) {
    c.bench_function("build_msg_entry", |b| {
        b.iter(|| {
            build_entry_at(
                black_box(123),
                black_box("bench"),
                None,
                Topic::Ok,
                Payload::msg("Message"),
            )
        })
    });

    c.bench_function("build_data_entry", |b| {
        b.iter(|| {
            build_entry_at(
                black_box(123),
                black_box("bench"),
                None,
                Topic::Numbers,
                Payload::msg_data("Data", json!({"ms": 7000, "bytes_sent": 1536})),
            )
        })
    });
}

fn bench_serialization(c: &mut Criterion) {
    let entry = build_entry_at(
        123,
        "bench",
        None,
        Topic::Numbers,
        Payload::msg_data("Data", json!({"some": "string", "and": 42})),
    );

    c.bench_function("ndjson_serialize", |b| {
        b.iter(|| black_box(&entry).to_json().unwrap())
    });

    let basic = BasicFormat::new();
    c.bench_function("basic_format", |b| {
        b.iter(|| basic.format(black_box(&entry)))
    });

    let fancy = FancyFormat::new();
    c.bench_function("fancy_format", |b| {
        b.iter(|| fancy.format(black_box(&entry)))
    });
}

fn bench_sink_dispatch(c: &mut Criterion) {
    c.bench_function("registry_log_to_memory", |b| {
        let registry = LogRegistry::new();
        let (sink, _entries) = MemorySink::new();
        registry.set_sink(Box::new(sink));
        let log = registry.logger("bench");

        b.iter(|| log.ok(black_box("Message")))
    });
}

criterion_group!(
    benches,
    bench_entry_building,
    bench_serialization,
    bench_sink_dispatch
);
criterion_main!(benches);
