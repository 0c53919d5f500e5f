#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    patterns: Vec<&'a [u8]>,
    haystack: &'a [u8],
    dense: bool,
}

fuzz_target!(|input: Input<'_>| {
    let Input {
        patterns,
        haystack,
        dense,
    } = input;
    let ac = acscan::Automaton::builder()
        .dense(dense)
        .build(&patterns)
        .unwrap();

    let mut result: Vec<_> = ac
        .find_overlapping_iter(haystack)
        .map(|m| (m.pattern_id(), m.start(), m.end()))
        .collect();
    result.sort_unstable();

    let mut expected = Vec::new();
    for (id, pattern) in patterns.iter().enumerate() {
        if pattern.is_empty() {
            continue;
        }
        for (start, window) in haystack.windows(pattern.len()).enumerate() {
            if window == *pattern {
                expected.push((id, start, start + pattern.len()));
            }
        }
    }
    expected.sort_unstable();

    assert_eq!(result, expected);
});
