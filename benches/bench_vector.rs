use criterion::{criterion_group, criterion_main, Criterion};
use containers::{Variant, Vector};
use std::collections::VecDeque;

fn bench_push(c: &mut Criterion) {
    for &n in &[100, 1_000, 10_000] {
        c.bench_function(&format!("vector_push_{}", n), |b| {
            b.iter(|| {
                let mut v: Vector<usize> = Vector::new_ord(Variant::Unsorted);
                for i in 0..n {
                    v.insert(i);
                }
            })
        });

        c.bench_function(&format!("vecdeque_push_{}", n), |b| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(i);
                }
            })
        });
    }
}

fn bench_sorted_insert(c: &mut Criterion) {
    for &n in &[100, 1_000] {
        c.bench_function(&format!("vector_sorted_insert_{}", n), |b| {
            b.iter(|| {
                let mut v: Vector<usize> = Vector::new_ord(Variant::Sorted);
                for i in (0..n).rev() {
                    v.insert(i);
                }
            })
        });
    }
}

fn bench_push_pop(c: &mut Criterion) {
    for &n in &[100, 1_000, 10_000] {
        c.bench_function(&format!("vector_push_pop_{}", n), |b| {
            b.iter(|| {
                let mut v: Vector<usize> = Vector::new_ord(Variant::Unsorted);
                for i in 0..n {
                    v.insert(i);
                }
                while !v.is_empty() {
                    let _ = v.delete();
                }
            })
        });
    }
}

criterion_group!(benches, bench_push, bench_sorted_insert, bench_push_pop);
criterion_main!(benches);
