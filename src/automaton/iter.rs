use std::iter::FusedIterator;

use super::state::{ROOT, S};
use super::{Automaton, Match};

/// An iterator over every occurrence of every pattern in a haystack.
///
/// This struct is created by [`Automaton::find_overlapping_iter`].
#[derive(Debug, Clone)]
pub struct FindOverlappingIter<'a, 'h> {
    ac: &'a Automaton,
    haystack: &'h [u8],
    /// The number of haystack bytes consumed, which is also the end offset
    /// of any match currently being reported.
    at: usize,
    /// The automaton state after consuming `at` bytes.
    state: S,
    /// The state on the output chain whose matches are being reported.
    out: Option<S>,
    /// The next match to report from `out`.
    match_id: usize,
}

impl<'a, 'h> FindOverlappingIter<'a, 'h> {
    pub(super) fn new(ac: &'a Automaton, haystack: &'h [u8]) -> Self {
        Self {
            ac,
            haystack,
            at: 0,
            state: ROOT,
            out: None,
            match_id: 0,
        }
    }
}

impl Iterator for FindOverlappingIter<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(id) = self.out {
                let state = self.ac.state(id);
                if let Some(&pattern) = state.matches.get(self.match_id) {
                    self.match_id += 1;
                    return Some(Match::new(pattern, self.at));
                }
                self.out = state.output;
                self.match_id = 0;
                continue;
            }

            let &byte = self.haystack.get(self.at)?;
            self.state = self.ac.next_state(self.state, byte);
            self.at += 1;
            self.out = self.ac.first_output(self.state);
            self.match_id = 0;
        }
    }
}

impl FusedIterator for FindOverlappingIter<'_, '_> {}
