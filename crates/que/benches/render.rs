use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use que::{Field, Filter, ParamStyle, Render, Select, Update};

/// SELECT col0, col1, ... FROM t WHERE col0 = ? AND col1 = ? ...
fn build_select(n: usize) -> Select {
    let mut select = Select::new("t");
    for i in 0..n {
        select = select
            .field(Field::name_only(format!("col{i}")))
            .filter(Filter::eq(format!("col{i}"), i as i64));
    }
    select
}

/// UPDATE t SET col0 = ?, ... WHERE key0 = ? AND ...
fn build_update(n: usize) -> Update {
    let mut update = Update::new("t");
    for i in 0..n {
        update = update
            .set(&format!("col{i}"), i as i64)
            .filter(Filter::eq(format!("key{i}"), i as i64));
    }
    update
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/select");

    for n in [1, 5, 10, 50, 100] {
        let select = build_select(n);
        for style in [ParamStyle::Positional, ParamStyle::Name] {
            group.bench_with_input(
                BenchmarkId::new(style.as_str(), n),
                &select,
                |b, select| {
                    b.iter(|| black_box(select.render(style)));
                },
            );
        }
    }

    group.finish();
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/update");

    for n in [1, 5, 10, 50, 100] {
        let update = build_update(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &update, |b, update| {
            b.iter(|| black_box(update.render(ParamStyle::Dollar)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_select, bench_update);
criterion_main!(benches);
