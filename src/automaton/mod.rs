//! A multi-pattern searcher based on the [Aho-Corasick algorithm][wikipedia].
//!
//! This implementation reports *every* occurrence of every pattern, including
//! occurrences that overlap or are nested inside each other. Matches are
//! reported in order of their end offset. Matches that end at the same offset
//! are reported from the longest pattern to the shortest, and identical
//! patterns in the order they were given.
//!
//! [wikipedia]: https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm

mod build;
mod iter;
mod state;

use std::mem;

pub use self::build::Builder;
pub use self::iter::FindOverlappingIter;
use self::state::{State, ROOT, S};

/// An immutable automaton for searching many patterns at once.
///
/// Once built an automaton is never modified, so it can be shared between
/// threads and searched concurrently.
///
/// # Examples
///
/// ```
/// let patterns = ["a", "ab", "bab", "bc", "bca", "c", "caa"];
/// let ac = acscan::Automaton::new(patterns);
///
/// let found: Vec<_> = ac
///     .find_overlapping_iter("abccab")
///     .map(|m| (patterns[m.pattern_id()], m.start(), m.end()))
///     .collect();
///
/// assert_eq!(
///     found,
///     [
///         ("a", 0, 1),
///         ("ab", 0, 2),
///         ("bc", 1, 3),
///         ("c", 2, 3),
///         ("c", 3, 4),
///         ("a", 4, 5),
///         ("ab", 4, 6),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    pattern_lens: Vec<usize>,
}

/// A single occurrence of a pattern in a haystack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawMatch"))]
pub struct Match {
    pattern: usize,
    len: usize,
    end: usize,
}

/// The unchecked fields of a deserialized [`Match`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatch {
    pattern: usize,
    len: usize,
    end: usize,
}

/// A pattern as recorded in a match state.
#[derive(Debug, Clone, Copy)]
pub struct Pattern {
    id: usize,
    len: usize,
}

impl Automaton {
    /// Builds an automaton for the given patterns using the default
    /// configuration.
    ///
    /// Each pattern is identified by its position in the iterator. Patterns
    /// may be empty and may repeat. An empty pattern is accepted but never
    /// reported as a match.
    ///
    /// # Panics
    ///
    /// If the patterns need more states than a state identifier can address.
    /// Use [`Builder::build`] to handle this case.
    pub fn new<I, P>(patterns: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        match Builder::new().build(patterns) {
            Ok(ac) => ac,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create a new builder to configure an automaton.
    #[inline]
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Returns every occurrence of every pattern in the haystack.
    ///
    /// This is the same as collecting [`.find_overlapping_iter()`][Self::find_overlapping_iter].
    pub fn search<T>(&self, haystack: &T) -> Vec<Match>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.find_overlapping_iter(haystack).collect()
    }

    /// Returns an iterator over every occurrence of every pattern in the
    /// haystack.
    ///
    /// The haystack is scanned lazily, one byte at a time, and never scanned
    /// twice. Calling this again starts a new scan from the beginning.
    #[inline]
    pub fn find_overlapping_iter<'a, 'h, T>(&'a self, haystack: &'h T) -> FindOverlappingIter<'a, 'h>
    where
        T: AsRef<[u8]> + ?Sized,
    {
        FindOverlappingIter::new(self, haystack.as_ref())
    }

    /// Whether or not any pattern occurs in the haystack.
    pub fn is_match<T>(&self, haystack: &T) -> bool
    where
        T: AsRef<[u8]> + ?Sized,
    {
        self.find_overlapping_iter(haystack).next().is_some()
    }

    /// The number of patterns this automaton was built with.
    #[inline]
    pub fn patterns_len(&self) -> usize {
        self.pattern_lens.len()
    }

    /// The length of the pattern with the given identifier.
    #[inline]
    pub fn pattern_len(&self, pattern_id: usize) -> Option<usize> {
        self.pattern_lens.get(pattern_id).copied()
    }

    /// The number of states in this automaton, including the root state.
    #[inline]
    pub fn states_len(&self) -> usize {
        self.states.len()
    }

    /// Returns the approximate number of heap bytes used by this automaton.
    pub fn memory_usage(&self) -> usize {
        let states = self.states.capacity() * mem::size_of::<State>();
        let heap: usize = self.states.iter().map(State::heap_bytes).sum();
        let lens = self.pattern_lens.capacity() * mem::size_of::<usize>();
        states + heap + lens
    }

    /// Returns the next state for the given input byte, following failure
    /// transitions until a state has a forward transition for it.
    fn next_state(&self, mut id: S, byte: u8) -> S {
        loop {
            let state = self.state(id);
            if let Some(next) = state.next_state(byte) {
                return next;
            }
            if id == ROOT {
                return ROOT;
            }
            id = state.fail;
        }
    }

    /// Returns the first state whose matches are reported after arriving at
    /// the given state.
    fn first_output(&self, id: S) -> Option<S> {
        let state = self.state(id);
        if id != ROOT && state.is_match() {
            Some(id)
        } else {
            state.output
        }
    }

    fn state(&self, id: S) -> &State {
        &self.states[id as usize]
    }
}

impl Match {
    fn new(pattern: Pattern, end: usize) -> Self {
        Self {
            pattern: pattern.id,
            len: pattern.len,
            end,
        }
    }

    /// The identifier of the pattern that matched, which is its position in
    /// the patterns the automaton was built with.
    #[inline]
    pub fn pattern_id(&self) -> usize {
        self.pattern
    }

    /// The starting position of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.end - self.len
    }

    /// The ending position of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// The length of the match in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether or not the match is empty. Reported matches never are.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawMatch> for Match {
    type Error = String;

    fn try_from(raw: RawMatch) -> std::result::Result<Self, Self::Error> {
        let RawMatch { pattern, len, end } = raw;
        if len > end {
            return Err(format!("match of length {len} cannot end at {end}"));
        }
        Ok(Self { pattern, len, end })
    }
}

impl Pattern {
    fn new(id: usize, len: usize) -> Self {
        Self { id, len }
    }
}
