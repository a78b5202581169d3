use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use serde_rawjson::{from_str, parse_with_options, to_string, write, ParseOptions};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_deserialize_simple(c: &mut Criterion) {
    let json = r#"{"id":123,"name":"Alice","email":"alice@example.com","active":true}"#;

    c.bench_function("deserialize_simple_struct", |b| {
        b.iter(|| from_str::<User>(black_box(json)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_deserialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("deserialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products: Vec<Product> = (0..*size)
            .map(|i| Product {
                sku: format!("SKU{}", i),
                name: format!("Product {}", i),
                price: 9.99 + f64::from(i),
                quantity: i,
            })
            .collect();
        let json = to_string(&products).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &json, |b, json| {
            b.iter(|| from_str::<Vec<Product>>(black_box(json)))
        });
    }
    group.finish();
}

fn benchmark_raw_number_mode(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_numbers");

    let literals: Vec<String> = (0..200)
        .map(|i| format!("{}23456789012345678901234567890.{:04}", i + 1, i))
        .collect();
    let json = format!("[{}]", literals.join(","));
    let options = ParseOptions::new().with_raw_numbers(true);

    group.bench_function("parse_default", |b| {
        b.iter(|| serde_rawjson::parse(black_box(&json)))
    });

    group.bench_function("parse_raw", |b| {
        b.iter(|| parse_with_options(black_box(&json), &options))
    });

    let doc = parse_with_options(&json, &options).unwrap();
    group.bench_function("write_raw", |b| b.iter(|| write(black_box(&doc))));

    group.finish();
}

fn benchmark_string_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_strings");

    let short = "short";
    let medium = "This is a medium length string with some content";
    let long = "This is a very long string that contains a lot of text and might require more processing time";

    group.bench_function("short_string", |b| b.iter(|| to_string(black_box(&short))));

    group.bench_function("medium_string", |b| {
        b.iter(|| to_string(black_box(&medium)))
    });

    group.bench_function("long_string", |b| b.iter(|| to_string(black_box(&long))));

    group.finish();
}

fn benchmark_comparison_with_serde_json(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    let mut group = c.benchmark_group("comparison");

    group.bench_function("rawjson_serialize", |b| {
        b.iter(|| serde_rawjson::to_string(black_box(&user)))
    });

    group.bench_function("serde_json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    let raw_str = serde_rawjson::to_string(&user).unwrap();
    let json_str = serde_json::to_string(&user).unwrap();

    group.bench_function("rawjson_deserialize", |b| {
        b.iter(|| serde_rawjson::from_str::<User>(black_box(&raw_str)))
    });

    group.bench_function("serde_json_deserialize", |b| {
        b.iter(|| serde_json::from_str::<User>(black_box(&json_str)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_deserialize_simple,
    benchmark_serialize_array,
    benchmark_deserialize_array,
    benchmark_raw_number_mode,
    benchmark_string_serialization,
    benchmark_comparison_with_serde_json,
);
criterion_main!(benches);
