use std::collections::BTreeSet;

use criterion::{criterion_group, criterion_main, Criterion};
use containers::RbTree;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn rand_keys(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(0, n * 10)).collect()
}

fn seq_keys(n: usize) -> Vec<usize> {
    (0..n).collect()
}

fn bench_insert(c: &mut Criterion) {
    for &n in &[100, 1_000, 10_000] {
        let rand = rand_keys(n, 7);
        let seq = seq_keys(n);

        c.bench_function(&format!("rbtree_insert_{}_rand", n), |b| {
            b.iter(|| {
                let mut t: RbTree<usize> = RbTree::new_ord();
                for k in &rand {
                    let _ = t.insert(*k);
                }
            })
        });

        c.bench_function(&format!("btreeset_insert_{}_rand", n), |b| {
            b.iter(|| {
                let mut s = BTreeSet::new();
                for k in &rand {
                    s.insert(*k);
                }
            })
        });

        c.bench_function(&format!("rbtree_insert_{}_seq", n), |b| {
            b.iter(|| {
                let mut t: RbTree<usize> = RbTree::new_ord();
                for k in &seq {
                    let _ = t.insert(*k);
                }
            })
        });
    }
}

fn bench_search(c: &mut Criterion) {
    for &n in &[100, 1_000, 10_000] {
        let rand = rand_keys(n, 11);
        let mut t: RbTree<usize> = RbTree::new_ord();
        let mut s = BTreeSet::new();
        for k in &rand {
            let _ = t.insert(*k);
            s.insert(*k);
        }

        c.bench_function(&format!("rbtree_search_{}_rand", n), |b| {
            b.iter(|| {
                for k in &rand {
                    let _ = t.search(k);
                }
            })
        });

        c.bench_function(&format!("btreeset_search_{}_rand", n), |b| {
            b.iter(|| {
                for k in &rand {
                    let _ = s.get(k);
                }
            })
        });
    }
}

fn bench_delete(c: &mut Criterion) {
    for &n in &[100, 1_000] {
        let rand = rand_keys(n, 23);

        c.bench_function(&format!("rbtree_delete_{}_rand", n), |b| {
            b.iter(|| {
                let mut t: RbTree<usize> = RbTree::new_ord();
                for k in &rand {
                    let _ = t.insert(*k);
                }
                for k in &rand {
                    let _ = t.delete(k);
                }
            })
        });
    }
}

criterion_group!(benches, bench_insert, bench_search, bench_delete);
criterion_main!(benches);
