use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;
use streamlog::{BufferWriter, Level, Options, Router, Rule, RuleSet};

fn rules() -> Vec<Rule> {
    (0..32)
        .map(|i| Rule::new(format!("^svc-{i}(-|$)"), Level::Info))
        .chain([Rule::new("^payments", Level::Error)])
        .collect()
}

fn bench_ruleset_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("RuleSet::resolve");
    let ruleset = RuleSet::compile(&rules(), Level::Off).unwrap();

    group.bench_function("first", |b| {
        b.iter(|| ruleset.resolve(black_box("svc-0-worker")));
    });
    group.bench_function("last", |b| {
        b.iter(|| ruleset.resolve(black_box("payments-api")));
    });
    group.bench_function("fallback", |b| {
        b.iter(|| ruleset.resolve(black_box("does-not-exist")));
    });

    group.finish();
}

fn bench_get_logger(c: &mut Criterion) {
    let options = Options::new().writer(Arc::new(BufferWriter::new()));
    let router = Router::new(&rules(), options).unwrap();
    router.get_logger("payments-api");

    c.bench_function("Router::get_logger (cached)", |b| {
        b.iter(|| router.get_logger(black_box("payments-api")));
    });
}

fn bench_disabled_call(c: &mut Criterion) {
    let options = Options::new().writer(Arc::new(BufferWriter::new()));
    let router = Router::new(&rules(), options).unwrap();
    let logger = router.get_logger("payments-api");

    c.bench_function("StreamLogger::debug (disabled)", |b| {
        b.iter(|| logger.debug(black_box("never written")));
    });
}

criterion_group!(
    benches,
    bench_ruleset_resolve,
    bench_get_logger,
    bench_disabled_call
);
criterion_main!(benches);
