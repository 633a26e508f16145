use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sfv_codec::{parse_dictionary, parse_item, parse_list, serialize_dictionary, serialize_list};

fn list_input(size: usize) -> String {
    (0..size)
        .map(|i| format!("tok{};q=0.{};v=\"value {}\"", i, i % 10, i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn dictionary_input(size: usize) -> String {
    (0..size)
        .map(|i| match i % 3 {
            0 => format!("k{}={}", i, i),
            1 => format!("k{}=:aGVsbG8gd29ybGQ=:;fresh", i),
            _ => format!("k{}=(a b c);lvl={}", i, i),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn benchmark_parse_item(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_item");

    group.bench_function("integer", |b| b.iter(|| parse_item(black_box(b"123456789"))));
    group.bench_function("decimal", |b| b.iter(|| parse_item(black_box(b"123456789.123"))));
    group.bench_function("string", |b| {
        b.iter(|| parse_item(black_box(b"\"a medium length string with \\\"escapes\\\"\"")))
    });
    group.bench_function("display_string", |b| {
        b.iter(|| parse_item(black_box(b"%\"f%c3%bc%c3%bc and caf%c3%a9\"")))
    });

    group.finish();
}

fn benchmark_parse_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_list");

    for size in [10, 50, 100, 500].iter() {
        let input = list_input(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| parse_list(black_box(input.as_bytes())))
        });
    }
    group.finish();
}

fn benchmark_parse_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_dictionary");

    for size in [10, 50, 100, 500].iter() {
        let input = dictionary_input(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| parse_dictionary(black_box(input.as_bytes())))
        });
    }
    group.finish();
}

fn benchmark_serialize_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_list");

    for size in [10, 50, 100, 500].iter() {
        let list = parse_list(list_input(*size).as_bytes()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| serialize_list(black_box(list)))
        });
    }
    group.finish();
}

fn benchmark_serialize_dictionary(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_dictionary");

    for size in [10, 50, 100, 500].iter() {
        let dict = parse_dictionary(dictionary_input(*size).as_bytes()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &dict, |b, dict| {
            b.iter(|| serialize_dictionary(black_box(dict)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_item,
    benchmark_parse_list,
    benchmark_parse_dictionary,
    benchmark_serialize_list,
    benchmark_serialize_dictionary
);
criterion_main!(benches);
