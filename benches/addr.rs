use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use docaddr::mac::{self, MacAddress};
use docaddr::random::random_doc_ipv6;

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_mac", |b| {
        b.iter(|| MacAddress::parse(black_box("00-1b-2b-d5-ab-cd")))
    });
}

fn bench_to_doc_ipv6(c: &mut Criterion) {
    let addr = MacAddress::new(0x00, 0x1b, 0x2b, 0xd5, 0xab, 0xcd);

    c.bench_function("to_doc_ipv6_long", |b| {
        b.iter(|| mac::to_doc_ipv6(black_box(addr), false))
    });
    c.bench_function("to_doc_ipv6_short", |b| {
        b.iter(|| mac::to_doc_ipv6(black_box(addr), true))
    });
}

fn bench_random(c: &mut Criterion) {
    c.bench_function("random_doc_ipv6", |b| b.iter(|| random_doc_ipv6(black_box(0))));
}

criterion_group!(benches, bench_parse, bench_to_doc_ipv6, bench_random);
criterion_main!(benches);
