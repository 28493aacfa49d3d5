use capital::{CentralNodeFinder, FinderOptions, Strategy};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Every node points straight at node 0.
fn star(n: usize) -> (Vec<usize>, Vec<usize>) {
    ((1..=n).collect(), vec![0; n])
}

/// 0 -> 1 -> ... -> n
fn chain(n: usize) -> (Vec<usize>, Vec<usize>) {
    ((0..n).collect(), (1..=n).collect())
}

/// A pseudo-random in-tree rooted at 0: node `i` drains into some node `< i`.
fn random_tree(n: usize) -> (Vec<usize>, Vec<usize>) {
    let mut state = 0x2545_f491_4f6c_dd1du64;
    let mut targets = Vec::with_capacity(n);
    for i in 1..=n {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        targets.push((state % i as u64) as usize);
    }
    ((1..=n).collect(), targets)
}

fn bench_strategies(c: &mut Criterion) {
    let shapes: [(&str, fn(usize) -> (Vec<usize>, Vec<usize>)); 3] =
        [("star", star), ("chain", chain), ("random_tree", random_tree)];

    for (shape, build) in shapes {
        let mut group = c.benchmark_group(format!("central_node_{shape}"));
        for size in [100usize, 1000] {
            let (sources, targets) = build(size);
            for strategy in [Strategy::Elimination, Strategy::Exhaustive] {
                let finder = CentralNodeFinder::new(FinderOptions::default().strategy(strategy));
                group.bench_with_input(
                    BenchmarkId::new(strategy.as_str(), size),
                    &(&sources, &targets),
                    |b, (sources, targets)| {
                        b.iter(|| {
                            black_box(finder.find(
                                black_box(sources.as_slice()),
                                black_box(targets.as_slice()),
                            ))
                        })
                    },
                );
            }
        }
        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
