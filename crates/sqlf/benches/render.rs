use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlf::{Builder, Value, args, format, new};

/// Build a filter with `n` segments: col0 = $1 AND col1 = $2 ...
fn build_filter(n: usize) -> Builder {
    let mut filter = new();
    for i in 0..n {
        filter.append(format!("col{i} = %p"), args![i as i64]);
    }
    filter
}

fn bench_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/to_sql");

    for n in [1, 5, 10, 50, 100] {
        let q = format("SELECT * FROM t WHERE %s LIMIT %p", args![build_filter(n), 10]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.to_sql()));
        });
    }

    group.finish();
}

fn bench_params(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/params");

    for n in [1, 5, 10, 50, 100] {
        let q = format("SELECT * FROM t WHERE %s LIMIT %p", args![build_filter(n), 10]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.params()));
        });
    }

    group.finish();
}

fn bench_list_placeholders(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/list_placeholders");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        let q = format("SELECT * FROM t WHERE id IN (%p)", args![values]);
        group.bench_with_input(BenchmarkId::from_parameter(n), &q, |b, q| {
            b.iter(|| black_box(q.build()));
        });
    }

    group.finish();
}

fn bench_spread_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/spread_rows");

    for n in [1, 10, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut rows = new().separated_by(", ");
                for i in 0..n {
                    rows.append("(%+p)", args![i as i64, "name", Value::Null]);
                }
                let q = format("INSERT INTO t (id, name, note) VALUES %s", args![rows]);
                black_box(q.build())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_to_sql,
    bench_params,
    bench_list_placeholders,
    bench_spread_rows
);
criterion_main!(benches);
