#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Comparison benchmarks: query-string vs `url::form_urlencoded`
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use query_string::{ArrayFormat, Options, Query, Value};

// Rust url crate
use url::form_urlencoded;

const SIMPLE: &str = "name=John&age=30&city=Tokyo";
const ENCODED: &str = "q=caf%C3%A9+au+lait&tags=a%2Cb&redirect=https%3A%2F%2Fexample.com%2F%3Fx%3D1";

/// `k0=v0&k1=v1&...` with `size` pairs, every third name repeated
fn generated_query(size: usize) -> String {
    (0..size)
        .map(|i| format!("k{}=value%20{i}", i / 3))
        .collect::<Vec<_>>()
        .join("&")
}

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");
    let options = Options::new();

    group.bench_function("query_string", |b| {
        b.iter(|| query_string::parse(black_box(SIMPLE), &options));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| form_urlencoded::parse(black_box(SIMPLE).as_bytes()).count());
    });

    group.finish();
}

fn bench_parse_encoded_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_encoded");
    let options = Options::new();

    group.bench_function("query_string", |b| {
        b.iter(|| query_string::parse(black_box(ENCODED), &options));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::parse(black_box(ENCODED).as_bytes())
                .map(|(name, value)| name.len() + value.len())
                .sum::<usize>()
        });
    });

    group.finish();
}

fn bench_parse_array_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array_formats");
    let cases = [
        (ArrayFormat::None, "a=1&a=2&a=3&b=4"),
        (ArrayFormat::Bracket, "a[]=1&a[]=2&a[]=3&b=4"),
        (ArrayFormat::Index, "a[2]=3&a[0]=1&a[1]=2&b=4"),
        (ArrayFormat::Comma, "a=1,2,3&b=4"),
    ];

    for (format, input) in cases {
        let options = Options::new().array_format(format);
        group.bench_with_input(BenchmarkId::from_parameter(format), input, |b, input| {
            b.iter(|| query_string::parse(black_box(input), &options));
        });
    }

    group.finish();
}

fn bench_parse_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_scaling");
    let options = Options::new();

    for size in [10, 100, 1000] {
        let input = generated_query(size);
        group.bench_with_input(BenchmarkId::new("query_string", size), &input, |b, input| {
            b.iter(|| query_string::parse(black_box(input), &options));
        });
        group.bench_with_input(
            BenchmarkId::new("form_urlencoded", size),
            &input,
            |b, input| {
                b.iter(|| form_urlencoded::parse(black_box(input).as_bytes()).count());
            },
        );
    }

    group.finish();
}

fn bench_stringify_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify");
    let options = Options::new();
    let mut query = Query::new();
    query.insert("name", "John Smith");
    query.insert("tags", Value::from(vec!["rust", "url", "query"]));
    query.insert("redirect", "https://example.com/?x=1");

    group.bench_function("query_string", |b| {
        b.iter(|| query_string::stringify(black_box(&query), &options));
    });

    group.bench_function("form_urlencoded", |b| {
        b.iter(|| {
            form_urlencoded::Serializer::new(String::new())
                .append_pair("name", "John Smith")
                .append_pair("redirect", "https://example.com/?x=1")
                .append_pair("tags", "rust")
                .append_pair("tags", "url")
                .append_pair("tags", "query")
                .finish()
        });
    });

    group.finish();
}

fn bench_exclude(c: &mut Criterion) {
    let mut group = c.benchmark_group("exclude");
    let options = Options::new();
    let input = "https://example.com/search?q=rust&utm_source=a&utm_medium=b&page=2#results";

    group.bench_function("names", |b| {
        b.iter(|| query_string::exclude(black_box(input), ["utm_source", "utm_medium"], &options));
    });

    group.bench_function("predicate", |b| {
        b.iter(|| {
            query_string::exclude(
                black_box(input),
                query_string::Filter::predicate(|name, _| name.starts_with("utm_")),
                &options,
            )
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_encoded_all,
    bench_parse_array_formats,
    bench_parse_scaling,
    bench_stringify_all,
    bench_exclude,
);

criterion_main!(benches);
