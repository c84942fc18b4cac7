//! Benchmarks for trackdock request parsing hot paths

use std::hint::black_box;
use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use trackdock::http::{percent_decode, read_request};

fn parse_benchmarks(c: &mut Criterion) {
    let raw: &[u8] =
        b"GET /stream/My%20Song HTTP/1.1\r\nHost: localhost\r\nRange: bytes=4096-\r\n\r\n";

    c.bench_function("read_request", |b| {
        b.iter(|| read_request(&mut Cursor::new(black_box(raw)), 8192).unwrap())
    });

    c.bench_function("percent_decode", |b| {
        b.iter(|| percent_decode(black_box("My%20Song+%E2%9C%93%2Ffinal")))
    });
}

criterion_group!(benches, parse_benchmarks);
criterion_main!(benches);
