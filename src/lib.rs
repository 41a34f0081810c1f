mod disjoint_set;

pub use disjoint_set::DisjointSetUnion;

use rand::prelude::*;

fn bench<F: FnOnce()>(name: &str, f: F) {
    use std::time::Instant;

    let start = Instant::now();
    f();
    println!("BENCH `{}`:\t{:?}", name, start.elapsed());
}

/// O(n) per union. The obviously-correct model the real structure is
/// validated against.
struct NaivePartition {
    labels: Vec<usize>,
}

impl NaivePartition {
    fn new(size: usize) -> Self {
        Self {
            labels: (0..size).collect(),
        }
    }

    fn union(&mut self, i: usize, j: usize) {
        let (to, from) = (self.labels[i], self.labels[j]);
        if to != from {
            for label in self.labels.iter_mut() {
                if *label == from {
                    *label = to;
                }
            }
        }
    }

    fn connected(&self, i: usize, j: usize) -> bool {
        self.labels[i] == self.labels[j]
    }
}

#[allow(dead_code)]
fn validate_disjoint_set() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 512;
    const ROUNDS: usize = 4 * N;

    let mut dsu = DisjointSetUnion::new(N);
    let mut naive = NaivePartition::new(N);

    println!("[Validate DisjointSetUnion]");
    for _ in 0..ROUNDS {
        let i = rng.gen_range(0..N);
        let j = rng.gen_range(0..N);

        assert_eq!(dsu.connected(i, j), naive.connected(i, j));
        dsu.union(i, j);
        naive.union(i, j);
        assert!(dsu.connected(i, j));
        assert_eq!(dsu.find(i), dsu.find(j));
    }

    let num_roots = (0..N).filter(|&i| dsu.is_root(i)).count();
    assert_eq!(dsu.num_sets(), num_roots);

    for i in 0..N {
        for j in 0..N {
            assert_eq!(dsu.connected(i, j), naive.connected(i, j));
        }
    }
    println!("DisjointSetUnion VALIDATED");
    println!();
}

#[allow(dead_code)]
fn bench_disjoint_set() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 20;

    let pairs: Vec<(usize, usize)> = (0..N)
        .map(|_| (rng.gen_range(0..N), rng.gen_range(0..N)))
        .collect();

    let mut dsu = DisjointSetUnion::new(N);
    bench("DisjointSetUnion::union", || {
        for &(i, j) in pairs.iter() {
            dsu.union(i, j);
        }
    });
    bench("DisjointSetUnion::find_mut", || {
        for i in 0..N {
            dsu.find_mut(i);
        }
    });
    bench("DisjointSetUnion::find", || {
        for i in 0..N {
            dsu.find(i);
        }
    });
    println!("{} sets left of {}", dsu.num_sets(), N);
}

#[test]
pub fn main() {
    validate_disjoint_set();
    bench_disjoint_set();
}
