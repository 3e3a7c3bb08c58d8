use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlgen::{Builder, Cond, Field, FieldValue, Record, map_columns};

/// A record with `n` scalar columns.
struct Wide(Vec<i64>);

static NAMES: [&str; 8] = ["c0", "c1", "c2", "c3", "c4", "c5", "c6", "c7"];

impl Record for Wide {
    fn record_name(&self) -> &'static str {
        "Wide"
    }

    fn fields(&self) -> Vec<Field<'_>> {
        self.0
            .iter()
            .zip(NAMES.iter().cycle())
            .map(|(v, name)| Field {
                name: *name,
                tags: &[],
                value: FieldValue::Scalar((*v).into()),
            })
            .collect()
    }
}

fn bench_where_and(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/where_and");

    for n in [1, 5, 10, 50] {
        let conds: Vec<Cond> = (0..n)
            .map(|i| Cond::eq(format!("col{i}"), i as i64).unwrap())
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(n), &conds, |b, conds| {
            b.iter(|| {
                let mut q = Builder::postgres();
                q.select(["*"]).from(["t"]).where_and(conds.iter().cloned());
                black_box(q.into_parts());
            });
        });
    }

    group.finish();
}

fn bench_where_in(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/where_in");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut q = Builder::postgres();
                q.delete("t").where_in("id", values.iter().copied());
                black_box(q.into_parts());
            });
        });
    }

    group.finish();
}

fn bench_mirror(c: &mut Criterion) {
    let conds: Vec<Cond> = (0..10)
        .map(|i| Cond::eq(format!("col{i}"), i as i64).unwrap())
        .collect();

    c.bench_function("builder/mirror_10", |b| {
        b.iter(|| {
            let mut count = Builder::postgres();
            count.select(["COUNT(*)"]).from(["t"]);
            let mut page = Builder::postgres();
            page.select(["*"])
                .from(["t"])
                .mirror(&mut count)
                .where_and(conds.iter().cloned());
            black_box(page.into_parts());
            black_box(count.into_parts());
        });
    });
}

fn bench_map_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("builder/map_columns");

    for n in [4, 16, 64] {
        let record = Wide((0..n).collect());
        group.bench_with_input(BenchmarkId::from_parameter(n), &record, |b, record| {
            b.iter(|| black_box(map_columns(record, "").unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_where_and,
    bench_where_in,
    bench_mirror,
    bench_map_columns
);
criterion_main!(benches);
