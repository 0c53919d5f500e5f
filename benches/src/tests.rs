use crate::corpus;
use crate::{Acscan, AcscanDense, AhoCorasick, BruteForce, Found, Searcher};

macro_rules! t {
    ($S:ty) => {{
        for _ in 0..20 {
            let corpus = corpus::random(30, 500);
            let expected = find_all::<BruteForce>(&corpus.patterns, &corpus.haystack);
            let result = find_all::<$S>(&corpus.patterns, &corpus.haystack);
            assert_eq!(result, expected, "{}", <$S as Searcher>::name());
        }
    }};
}

#[test]
fn acscan() {
    t!(Acscan);
}

#[test]
fn acscan_dense() {
    t!(AcscanDense);
}

#[test]
fn aho_corasick() {
    t!(AhoCorasick);
}

fn find_all<S: Searcher>(patterns: &[Vec<u8>], haystack: &[u8]) -> Vec<Found> {
    let mut found = S::new(patterns).find_all(haystack);
    found.sort_unstable();
    found
}
