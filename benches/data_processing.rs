//! Benchmarks for logger operations
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::path::Path;

use sensor_logger::{storage, DataLogger, Reading, SilentSink, Statistics};

const SOURCES: [&str; 3] = ["MPU6050_GyroX", "MPU6050_GyroY", "VL53L0X_Distance"];

fn filled_logger(path: &Path, size: usize) -> DataLogger {
    let mut logger = DataLogger::new(path).with_sink(SilentSink);
    for i in 0..size {
        logger.record(SOURCES[i % SOURCES.len()], (i as f64).sin(), "deg/s");
    }
    logger
}

fn bench_record(c: &mut Criterion) {
    let mut group = c.benchmark_group("record");
    group.throughput(Throughput::Elements(1));

    group.bench_function("record_silent", |b| {
        let mut logger = DataLogger::new("unused.csv").with_sink(SilentSink);
        let mut i = 0u64;
        b.iter(|| {
            logger.record(black_box("VL53L0X_Distance"), i as f64, "mm");
            i = i.wrapping_add(1);
        });
    });

    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics");

    for size in [1000, 10_000, 50_000].iter() {
        let logger = filled_logger(Path::new("unused.csv"), *size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("by_source", size), &logger, |b, logger| {
            b.iter(|| black_box(logger.statistics(black_box("VL53L0X_Distance"))));
        });
    }

    group.bench_function("from_values_10k", |b| {
        let values: Vec<f64> = (0..10_000).map(|i| (i as f64).cos()).collect();
        b.iter(|| black_box(Statistics::from_values(values.iter().copied())));
    });

    group.finish();
}

fn bench_format_line(c: &mut Criterion) {
    let reading = Reading::new("2024-11-20 12:30:00.123", "MPU6050_GyroX", 0.6, "deg/s");

    c.bench_function("format_line", |b| {
        b.iter(|| black_box(storage::format_line(black_box(&reading))));
    });
}

fn bench_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("flush");
    let dir = tempfile::tempdir().expect("tempdir");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("append", size), size, |b, &size| {
            let path = dir.path().join(format!("bench_{}.csv", size));
            b.iter_batched(
                || filled_logger(&path, size),
                |mut logger| black_box(logger.flush().expect("flush")),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_record,
    bench_statistics,
    bench_format_line,
    bench_flush,
);

criterion_main!(benches);
