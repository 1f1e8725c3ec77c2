//! Lexer Benchmarks
//!
//! Throughput measurements for the Relay lexer.
//! Run with: `cargo bench --package relayc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use relayc_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source).filter(Result::is_ok).count()
}

fn bench_lexer_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "when Heating (temp >= limit) -> Cooling";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_rule", |b| {
        b.iter(|| lexer_token_count(black_box("when X -> 5")))
    });

    group.bench_function("guarded_rule", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_program(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_program");

    let source = r#"
        # Thermostat controller
        when Heating (temp >= limit) -> Cooling
        when Cooling (temp <= limit - 2) -> Heating
        onenter Cooling proc vent(true)
        every 250 ms poll($4)
        every 1 s report($$0 "temp")
        after 30 m -> Idle
        always fan == §fan !> Fault
        /* pin map:
           $4  temperature sensor
           $13 fan relay */
        when Fault $13 -> false
    "#;
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("thermostat", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    let repeated = source.repeat(100);
    group.throughput(Throughput::Bytes(repeated.len() as u64));
    group.bench_function("thermostat_x100", |b| {
        b.iter(|| lexer_token_count(black_box(repeated.as_str())))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_rules, bench_lexer_program);
criterion_main!(benches);
