// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_sparkle::ui::data_table::DataTable;
use std::hint::black_box;

fn build_table(rows: usize) -> DataTable {
    let categories = ["Paper", "Plastic", "Metal", "Organic", "Glass", "Mixed"];
    let body = (0..rows)
        .map(|i| {
            vec![
                format!("Area {}", i % 40),
                categories[i % categories.len()].to_string(),
                format!("Day {} {:02}:00", i % 7, i % 24),
                if i % 3 == 0 { "Done" } else { "Planned" }.to_string(),
            ]
        })
        .collect();
    DataTable::new(
        vec!["area", "category", "schedule", "status"],
        body,
    )
}

fn table_filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_filter");

    for rows in [100, 1_000, 10_000] {
        let mut table = build_table(rows);
        group.bench_function(format!("filter_{rows}_rows"), |b| {
            b.iter(|| {
                table.apply_filter(black_box("pla"));
                black_box(table.visible_count())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, table_filter_benchmark);
criterion_main!(benches);
