use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use ratatui_options_core::codec;
use ratatui_options_core::option::OptionPair;
use std::hint::black_box;

fn make_options(n: usize) -> Vec<OptionPair> {
    (0..n)
        .map(|i| OptionPair::new(format!("v{i}"), format!("Label number {i}")))
        .collect()
}

fn bench_codec(c: &mut Criterion) {
    let options = make_options(500);
    let delimited = codec::write_delimited(&options);
    let json = codec::write_json(&options);

    c.bench_function("load_delimited_500", |b| {
        b.iter(|| codec::load(black_box(&delimited)))
    });
    c.bench_function("load_json_500", |b| b.iter(|| codec::load(black_box(&json))));
    c.bench_function("write_json_500", |b| {
        b.iter(|| codec::write_json(black_box(&options)))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
