use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates random patterns and haystacks over a small alphabet so that
/// overlapping and nested occurrences are common.
pub struct Generator {
    rng: StdRng,
    alphabet: &'static [u8],
}

impl Generator {
    pub fn new(seed: u64, alphabet: &'static [u8]) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            alphabet,
        }
    }

    pub fn bytes(&mut self, min: usize, max: usize) -> Vec<u8> {
        let len = self.rng.gen_range(min..=max);
        (0..len)
            .map(|_| self.alphabet[self.rng.gen_range(0..self.alphabet.len())])
            .collect()
    }

    pub fn patterns(&mut self, count: usize, min: usize, max: usize) -> Vec<Vec<u8>> {
        let n = self.rng.gen_range(0..=count);
        (0..n).map(|_| self.bytes(min, max)).collect()
    }

    /// Returns a haystack that embeds some of the given patterns.
    pub fn haystack(&mut self, patterns: &[Vec<u8>], len: usize) -> Vec<u8> {
        let mut haystack = self.bytes(0, len);
        if !patterns.is_empty() && !haystack.is_empty() {
            for _ in 0..self.rng.gen_range(0..4) {
                let pattern = &patterns[self.rng.gen_range(0..patterns.len())];
                let at = self.rng.gen_range(0..haystack.len());
                haystack.splice(at..at, pattern.iter().copied());
            }
        }
        haystack
    }
}
