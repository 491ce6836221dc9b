//! Benchmark: integer reads through the exact and lenient readers.
#![allow(missing_docs)]

use std::{fmt::Write, hint::black_box, time::Duration};

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use strictread::{IdenticalReader, Mode, Reader, StandardInteractor, StandardReader};

/// A deterministic `n` on the first line followed by `n` space-separated
/// integers on the second, each well inside `i64`.
fn make_input(n: usize) -> String {
    let mut s = String::with_capacity(n * 12);
    writeln!(s, "{n}").unwrap();
    let mut x: i64 = 0x2545_f491;
    for i in 0..n {
        x = x.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        if i > 0 {
            s.push(' ');
        }
        write!(s, "{}", (x >> 20) % 1_000_000_000).unwrap();
    }
    s.push('\n');
    s
}

fn sum<M: Mode>(mut reader: Reader<M, &[u8]>) -> i64 {
    let n = reader.try_read_single_int::<usize>(1..).unwrap();
    let values = reader.try_read_ints::<i64>(n, ..).unwrap();
    reader.try_read_eof().unwrap();
    values.iter().sum()
}

fn bench_read_ints(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_ints");

    for &n in &[1_000usize, 100_000] {
        let input = make_input(n);
        let bytes = input.as_bytes();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        group.bench_with_input(BenchmarkId::new("identical", n), bytes, |b, bytes| {
            b.iter(|| black_box(sum(IdenticalReader::try_new(black_box(bytes)).unwrap())));
        });
        group.bench_with_input(BenchmarkId::new("standard", n), bytes, |b, bytes| {
            b.iter(|| black_box(sum(StandardReader::try_new(black_box(bytes)).unwrap())));
        });
        // one byte per source read
        group.bench_with_input(BenchmarkId::new("interactive", n), bytes, |b, bytes| {
            b.iter(|| black_box(sum(StandardInteractor::try_new(black_box(bytes)).unwrap())));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(10));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_read_ints }
criterion_main!(benches);
