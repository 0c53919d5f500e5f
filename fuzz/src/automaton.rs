#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<&[u8]>, bool, Option<u8>)| {
    let (patterns, dense, limit) = data;
    let mut builder = acscan::Automaton::builder();
    builder.dense(dense);
    if let Some(limit) = limit {
        builder.state_limit(limit as usize);
    }
    if let Ok(ac) = builder.build(&patterns) {
        let total: usize = patterns.iter().map(|p| p.len()).sum();
        assert!(ac.states_len() <= total + 1);
        assert_eq!(ac.patterns_len(), patterns.len());
    }
});
