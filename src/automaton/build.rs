//! A builder for an Aho-Corasick automaton.
//!
//! Building happens in two passes. The first pass inserts every pattern into
//! a trie, so that each pattern has a path from the root state and the state
//! at the end of that path records the pattern. Consider the patterns 'abe',
//! 'bc' and 'c'. Here states are represented as `S?` and have an asterisk
//! (`*`) if any pattern ends at that state.
//!
//! ```text
//!      a - S1 - b - S2 - e - S3*
//!     /
//! S0 - b - S4 - c - S5*
//!     \
//!      c - S6*
//! ```
//!
//! The second pass links the trie. Every state gets a *failure* transition to
//! the state for the longest proper suffix of its path that is also a path in
//! the trie. With an input of 'abc', at S2 there is no transition for 'c', but
//! 'b' is a suffix of 'ab' so S2 fails to S4 and the search continues at S5
//! without looking at the input again. Every other state above fails back to
//! the root.
//!
//! Every state also gets an *output* transition to the nearest state reachable
//! through failure transitions that is a match state. S5 fails to S6, which
//! is a match state for 'c', so whenever the search reaches S5 it reports
//! 'bc' and then 'c' by following the output transition.
//!
//! Both transitions of a state only depend on states that are strictly
//! closer to the root, so the second pass is a breadth-first search starting
//! with all transitions out of the root state. For each state and for every
//! forward transition out of it we follow failure transitions backward until
//! we find a state with a forward transition on the same byte. That state's
//! child is the failure state for the original state's child.

use std::collections::VecDeque;

use super::state::{State, ROOT, S};
use super::{Automaton, Pattern};
use crate::{Error, Result};

/// A builder for configuring an [`Automaton`].
///
/// This struct is typically created using [`Automaton::builder()`].
///
/// # Examples
///
/// ```
/// let ac = acscan::Automaton::builder()
///     .dense(true)
///     .state_limit(1024)
///     .build(["he", "she", "his", "hers"])?;
///
/// let matches: Vec<_> = ac
///     .search("ushers")
///     .iter()
///     .map(|m| (m.pattern_id(), m.start(), m.end()))
///     .collect();
/// assert_eq!(matches, [(1, 1, 4), (0, 2, 4), (3, 2, 6)]);
/// # Ok::<(), acscan::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Builder {
    dense: bool,
    state_limit: Option<usize>,
}

impl Builder {
    /// Creates a new builder with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a full 256 entry transition table for every state.
    ///
    /// Dense tables make each transition a single lookup at the cost of
    /// roughly one kilobyte per state. The default is to use sorted tables
    /// that only hold the transitions that exist. This has no effect on
    /// which matches are reported.
    #[inline]
    pub fn dense(&mut self, yes: bool) -> &mut Self {
        self.dense = yes;
        self
    }

    /// Set the maximum number of states, including the root state.
    ///
    /// If not set then the number of states is only bounded by the state
    /// identifier type.
    #[inline]
    pub fn state_limit(&mut self, limit: usize) -> &mut Self {
        self.state_limit = Some(limit);
        self
    }

    /// Builds an automaton for the given patterns.
    ///
    /// Each pattern is identified by its position in the iterator. Patterns
    /// may be empty and may repeat.
    ///
    /// # Errors
    ///
    /// If the automaton needs more states than allowed.
    pub fn build<I, P>(&self, patterns: I) -> Result<Automaton>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let mut compiler = Compiler {
            states: Vec::new(),
            pattern_lens: Vec::new(),
            dense: self.dense,
            state_limit: self.state_limit,
        };
        compiler.push_state(0)?; // the root state
        compiler.build_initial_trie(patterns)?;
        compiler.fill_failure_transitions();

        let Compiler {
            states,
            pattern_lens,
            ..
        } = compiler;
        log::debug!(
            "built automaton with {} patterns and {} states ({} transitions)",
            pattern_lens.len(),
            states.len(),
            if self.dense { "dense" } else { "sparse" },
        );
        Ok(Automaton {
            states,
            pattern_lens,
        })
    }
}

struct Compiler {
    states: Vec<State>,
    pattern_lens: Vec<usize>,
    dense: bool,
    state_limit: Option<usize>,
}

impl Compiler {
    /// Build the initial trie where each pattern has a path from the root
    /// state until the end of the pattern.
    fn build_initial_trie<I, P>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        for (pattern_id, pattern) in patterns.into_iter().enumerate() {
            let pattern = pattern.as_ref();

            let mut id = ROOT;
            for (depth, &byte) in pattern.iter().enumerate() {
                id = match self.state(id).next_state(byte) {
                    Some(next) => next,
                    None => {
                        let next = self.push_state(depth + 1)?;
                        self.state_mut(id).set_transition(byte, next);
                        next
                    }
                };
            }

            // Identical patterns end up at the same state, one entry each.
            let p = Pattern::new(pattern_id, pattern.len());
            self.state_mut(id).push_match(p);
            self.pattern_lens.push(pattern.len());
        }
        Ok(())
    }

    fn fill_failure_transitions(&mut self) {
        // Initialize the queue for breadth first search with all transitions
        // out of the root state. Their only proper suffix is the empty
        // string, so they keep the default failure transition to the root
        // and have no output transition.
        let mut queue = VecDeque::new();
        let mut children = Vec::new();
        children.extend(self.state(ROOT).children());
        for &(_, next) in &children {
            debug_assert_eq!(self.state(next).fail, ROOT);
            queue.push_back(next);
        }

        while let Some(curr) = queue.pop_front() {
            children.clear();
            children.extend(self.state(curr).children());

            for &(byte, next) in &children {
                queue.push_back(next);

                let fail = {
                    let mut id = self.state(curr).fail;
                    loop {
                        if let Some(to) = self.state(id).next_state(byte) {
                            break to;
                        }
                        if id == ROOT {
                            break ROOT;
                        }
                        id = self.state(id).fail;
                    }
                };
                debug_assert!(
                    self.state(fail).depth < self.state(next).depth,
                    "failure transitions must point to a shallower state"
                );

                // The root is never part of an output chain, even if an empty
                // pattern ends there.
                let output = if fail != ROOT && self.state(fail).is_match() {
                    Some(fail)
                } else {
                    self.state(fail).output
                };

                let state = self.state_mut(next);
                state.fail = fail;
                state.output = output;
                log::trace!("linked state {next}: fail -> {fail}, output -> {output:?}");
            }
        }
    }

    fn push_state(&mut self, depth: usize) -> Result<S> {
        let id = self.states.len();
        if let Some(limit) = self.state_limit {
            if id >= limit {
                return Err(Error::state_limit(limit));
            }
        }
        let id = S::try_from(id).map_err(|_| Error::state_id_overflow(id))?;
        self.states.push(State::new(depth, self.dense));
        Ok(id)
    }

    fn state(&self, id: S) -> &State {
        &self.states[id as usize]
    }

    fn state_mut(&mut self, id: S) -> &mut State {
        &mut self.states[id as usize]
    }
}
