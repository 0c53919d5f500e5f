//! Benchmark automaton construction and overlapping search time.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use benches::corpus;
use benches::{Acscan, AcscanDense, AhoCorasick, BruteForce, Searcher};

criterion_main! { benches }
criterion_group! { benches, bench_build, bench_search }

/// Benchmarks the time taken to build a searcher from a set of patterns.
fn bench_build(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");

    macro_rules! bench {
        ($S:ty, $n:expr) => {{
            let corpus = corpus::random($n, 0);
            g.bench_with_input(
                BenchmarkId::new(<$S as Searcher>::name(), $n),
                &corpus.patterns,
                |b, patterns| b.iter(|| <$S as Searcher>::new(patterns)),
            );
        }};
    }

    for n in [10, 100, 1000] {
        bench!(Acscan, n);
        bench!(AcscanDense, n);
        bench!(AhoCorasick, n);
    }
}

/// Benchmarks the time taken to find every occurrence in a haystack.
fn bench_search(c: &mut Criterion) {
    let mut g = c.benchmark_group("search");

    let corpus = corpus::random(100, 64 * 1024);
    g.throughput(Throughput::Bytes(corpus.haystack.len() as u64));

    macro_rules! bench {
        ($S:ty) => {{
            g.bench_function(<$S as Searcher>::name(), |b| {
                let searcher = <$S as Searcher>::new(&corpus.patterns);
                b.iter(|| searcher.find_all(&corpus.haystack));
            });
        }};
    }

    bench!(Acscan);
    bench!(AcscanDense);
    bench!(AhoCorasick);
    g.sample_size(10);
    bench!(BruteForce);
}
