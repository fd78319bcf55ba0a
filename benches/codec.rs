use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use toon_codec::{decode, encode, from_str, to_string, to_value};

#[derive(Serialize, Deserialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

fn make_users(count: u32) -> Vec<User> {
    (0..count)
        .map(|i| User {
            id: i,
            name: format!("User {}", i),
            email: format!("user{}@example.com", i),
            active: i % 2 == 0,
        })
        .collect()
}

fn benchmark_encode_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode_tabular");
    for size in [10u32, 100, 1000] {
        let value = to_value(&make_users(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| encode(black_box(value)))
        });
    }
    group.finish();
}

fn benchmark_decode_tabular(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_tabular");
    for size in [10u32, 100, 1000] {
        let text = to_string(&make_users(size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| decode(black_box(text)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_typed_round_trip(c: &mut Criterion) {
    let users = make_users(100);
    let text = to_string(&users).unwrap();

    c.bench_function("to_string_100_users", |b| {
        b.iter(|| to_string(black_box(&users)).unwrap())
    });
    c.bench_function("from_str_100_users", |b| {
        b.iter(|| from_str::<Vec<User>>(black_box(&text)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_encode_tabular,
    benchmark_decode_tabular,
    benchmark_typed_round_trip
);
criterion_main!(benches);
