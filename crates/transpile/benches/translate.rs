// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Translation pipeline benchmarks
//!
//! Measures parse + generate across:
//! - Statement shapes (simple select, joins and windows, DDL)
//! - Target dialects

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use unified_sql_transpile::{TranspileOptions, translate};

const QUERIES: &[(&str, &str)] = &[
    ("simple", "SELECT a, b FROM t WHERE a > 1 ORDER BY b DESC LIMIT 10"),
    (
        "functions",
        "SELECT LEFT(x, 2), RIGHT(x, 2), MONTH('2021-03-01'), TO_DATE(y, 'yyyy-MM-dd') FROM t",
    ),
    (
        "joins",
        "WITH s AS (SELECT id, SUM(v) AS total FROM sales GROUP BY id) \
         SELECT c.name, s.total, ROW_NUMBER() OVER (PARTITION BY c.region ORDER BY s.total DESC) \
         FROM customers AS c LEFT JOIN s ON c.id = s.id WHERE s.total IS NOT NULL",
    ),
    (
        "ddl",
        "CREATE TABLE db.t (a INT, b STRUCT<x: INT, y: ARRAY<STRING>>) USING ICEBERG \
         PARTITIONED BY (MONTHS(c)) LOCATION 's3://bucket/t' TBLPROPERTIES ('k' = 'v')",
    ),
];

const TARGETS: &[&str] = &["presto", "hive", "duckdb", "bigquery"];

fn bench_translate(c: &mut Criterion) {
    let options = TranspileOptions::default();
    for (name, sql) in QUERIES {
        let mut group = c.benchmark_group(format!("translate/{name}"));
        group.throughput(Throughput::Bytes(sql.len() as u64));
        for target in TARGETS {
            // Some shapes have no spelling in some targets
            if translate(sql, "spark", target, &options).is_err() {
                continue;
            }
            group.bench_function(BenchmarkId::from_parameter(target), |b| {
                b.iter(|| {
                    let out = translate(black_box(sql), "spark", target, &options);
                    black_box(out)
                });
            });
        }
        group.finish();
    }
}

fn bench_pretty_layout(c: &mut Criterion) {
    let (_, sql) = QUERIES[2];
    let compact = TranspileOptions::default();
    let pretty = TranspileOptions::default().with_pretty(true);

    let mut group = c.benchmark_group("translate/layout");
    group.bench_function("compact", |b| {
        b.iter(|| translate(black_box(sql), "spark", "presto", &compact))
    });
    group.bench_function("pretty", |b| {
        b.iter(|| translate(black_box(sql), "spark", "presto", &pretty))
    });
    group.finish();
}

criterion_group!(benches, bench_translate, bench_pretty_layout);
criterion_main!(benches);
