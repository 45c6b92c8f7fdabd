/*!
# Filter Benchmarks

Benchmarks for list-query normalization, sorting and pagination over an
in-memory pre-resultset.

## Usage

```bash
cargo bench --bench filter_benchmarks

# Quick benchmark with fewer samples
cargo bench --bench filter_benchmarks -- --quick
```

HTML reports are generated in `target/criterion/report/index.html`.
*/

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use filteroption::{FilterConfig, FilterOption, NormalizedFilter, ShowDeletedRule};
use std::hint::black_box;

#[derive(Clone)]
struct Row {
    id: i64,
    score: u64,
    deleted: bool,
}

fn rows(count: i64) -> Vec<Row> {
    (0..count)
        .map(|id| Row {
            id,
            score: (id as u64).wrapping_mul(2_654_435_761) % 10_000,
            deleted: id % 7 == 0,
        })
        .collect()
}

fn normalized(sort_by: &str, page_number: i64, page_size: i64) -> NormalizedFilter {
    FilterOption {
        page_number,
        page_size,
        sort_by: sort_by.to_string(),
        show: ShowDeletedRule::HideDeleted,
        ..Default::default()
    }
    .apply_defaults(&FilterConfig::default())
}

fn bench_normalization(c: &mut Criterion) {
    let config = FilterConfig::default();
    c.bench_function("apply_defaults", |b| {
        b.iter(|| {
            let option = FilterOption {
                sort_by: "-created_at".to_string(),
                page_number: 3,
                ..Default::default()
            };
            black_box(option.apply_defaults(black_box(&config)))
        });
    });
}

fn bench_list_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("List Pipeline");

    for size in [100_i64, 1_000, 10_000] {
        let data = rows(size);
        group.bench_with_input(BenchmarkId::new("filter_sort_page", size), &data, |b, data| {
            b.iter(|| {
                let mut filter = normalized("-score", 2, 25);
                let mut visible = data.clone();
                filter.retain_visible(&mut visible, |r| r.deleted);
                filter.sort_slice_by_key(&mut visible, |r| r.score);
                for row in &visible {
                    filter.add(row.id);
                }
                black_box(filter.page_ids().len())
            });
        });
    }

    group.finish();
}

fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(30)
        .measurement_time(std::time::Duration::from_secs(5))
        .warm_up_time(std::time::Duration::from_secs(1))
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = bench_normalization, bench_list_pipeline
}
criterion_main!(benches);
