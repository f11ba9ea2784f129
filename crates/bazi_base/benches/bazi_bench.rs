use bazi_base::{
    Gender, classify_pattern, classify_strength, compute_chart, compute_luck_cycle,
    count_elements, synthesize_timeline,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn chart_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(1996), black_box(3), black_box(15), black_box(10)))
    });

    let chart = compute_chart(1996, 3, 15, 10).unwrap();
    group.bench_function("count_elements", |b| b.iter(|| count_elements(black_box(&chart))));
    group.bench_function("classify_strength", |b| {
        b.iter(|| classify_strength(black_box(&chart)))
    });
    group.bench_function("classify_pattern", |b| {
        b.iter(|| classify_pattern(black_box(&chart)))
    });
    group.finish();
}

fn timeline_bench(c: &mut Criterion) {
    let chart = compute_chart(1996, 3, 15, 10).unwrap();
    let strength = classify_strength(&chart);

    let mut group = c.benchmark_group("timeline");
    group.bench_function("luck_cycle", |b| {
        b.iter(|| compute_luck_cycle(black_box(&chart), Gender::Male, black_box(1996)))
    });
    let cycle = compute_luck_cycle(&chart, Gender::Male, 1996);
    group.bench_function("synthesize_80_years", |b| {
        b.iter(|| synthesize_timeline(black_box(&chart), 1996, &cycle, strength))
    });
    group.finish();
}

criterion_group!(benches, chart_bench, timeline_bench);
criterion_main!(benches);
