use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gorepr::{reflect_struct, to_string, to_string_serialized, to_string_with_config, Config};
use serde::Serialize;

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

reflect_struct!("example.com/shop", User {
    ID: id,
    Name: name,
    Email: email,
    Active: active,
});

#[derive(Serialize)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
    tags: Vec<String>,
}

reflect_struct!("example.com/shop", Product {
    SKU: sku,
    Name: name,
    Price: price,
    Quantity: quantity,
    Tags: tags,
});

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
            tags: vec!["new".to_string(), format!("batch-{}", i % 7)],
        })
        .collect()
}

fn benchmark_render_simple(c: &mut Criterion) {
    let user = User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    };

    c.bench_function("render_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_render_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_array");

    for size in [10, 50, 100, 500].iter() {
        let products = products(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_render_single_line(c: &mut Criterion) {
    let products = products(100);
    let config = Config::single_line();

    c.bench_function("render_single_line", |b| {
        b.iter(|| to_string_with_config(black_box(&products), &config))
    });
}

fn benchmark_render_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_bytes");

    for size in [32, 1024, 16384].iter() {
        let bytes: Vec<u8> = (0..*size).map(|i| (i % 251) as u8).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&bytes)))
        });
    }
    group.finish();
}

fn benchmark_render_serialized(c: &mut Criterion) {
    let products = products(100);

    c.bench_function("render_serialized", |b| {
        b.iter(|| to_string_serialized(black_box(&products)))
    });
}

criterion_group!(
    benches,
    benchmark_render_simple,
    benchmark_render_array,
    benchmark_render_single_line,
    benchmark_render_bytes,
    benchmark_render_serialized
);
criterion_main!(benches);
