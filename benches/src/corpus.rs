use rand::Rng;

pub struct Corpus {
    pub patterns: Vec<Vec<u8>>,
    pub haystack: Vec<u8>,
}

/// Generates `n` random lowercase patterns and a haystack of `len` bytes that
/// contains some of them.
pub fn random(n: usize, len: usize) -> Corpus {
    let mut rng = rand::thread_rng();
    let patterns: Vec<Vec<u8>> = (0..n)
        .map(|_| {
            let m = rng.gen_range(1..=8);
            (0..m).map(|_| rng.gen_range(b'a'..=b'f')).collect()
        })
        .collect();
    let mut haystack = Vec::with_capacity(len);
    while haystack.len() < len {
        if !patterns.is_empty() && rng.gen_ratio(1, 8) {
            haystack.extend_from_slice(&patterns[rng.gen_range(0..patterns.len())]);
        } else {
            haystack.push(rng.gen_range(b'a'..=b'z'));
        }
    }
    haystack.truncate(len);
    Corpus { patterns, haystack }
}
