use std::mem;

use super::Pattern;

/// A unique identifier for a state.
pub type S = u32;

/// The identifier for an automaton's root state.
///
/// The root is never the target of a transition, which lets it double as the
/// "no transition" marker in dense tables.
pub const ROOT: S = 0;

/// A state in an Aho-Corasick automaton.
#[derive(Debug, Clone)]
pub struct State {
    /// The transitions to child states.
    pub trans: Transitions,

    /// The failure transition.
    pub fail: S,

    /// The nearest state reachable through failure transitions that is a
    /// match state, excluding the root.
    pub output: Option<S>,

    /// The patterns that end exactly at this state.
    pub matches: Vec<Pattern>,

    /// The distance from the root state in the automaton.
    pub depth: usize,
}

/// The set of forward transitions out of a state.
#[derive(Debug, Clone)]
pub enum Transitions {
    /// One slot per byte value, `ROOT` marks a missing transition.
    Dense(Box<[S; 256]>),
    /// Transitions sorted by byte.
    Sparse(Vec<(u8, S)>),
}

impl State {
    pub fn new(depth: usize, dense: bool) -> Self {
        let trans = if dense {
            Transitions::Dense(Box::new([ROOT; 256]))
        } else {
            Transitions::Sparse(Vec::new())
        };
        Self {
            trans,
            fail: ROOT,
            output: None,
            matches: Vec::new(),
            depth,
        }
    }

    /// Returns the child state for the given input byte, if any.
    #[inline]
    pub fn next_state(&self, byte: u8) -> Option<S> {
        match &self.trans {
            Transitions::Dense(table) => match table[byte as usize] {
                ROOT => None,
                id => Some(id),
            },
            Transitions::Sparse(table) => table
                .binary_search_by_key(&byte, |&(b, _)| b)
                .ok()
                .map(|i| table[i].1),
        }
    }

    /// Whether or not this state contains any matches.
    #[inline]
    pub fn is_match(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Iterates over all `(byte, child)` pairs in ascending byte order.
    pub fn children(&self) -> impl Iterator<Item = (u8, S)> + '_ {
        let (dense, sparse) = match &self.trans {
            Transitions::Dense(table) => (Some(table), None),
            Transitions::Sparse(table) => (None, Some(table)),
        };
        let dense = dense.into_iter().flat_map(|table| {
            (0..=255u8).filter_map(move |byte| match table[byte as usize] {
                ROOT => None,
                id => Some((byte, id)),
            })
        });
        let sparse = sparse.into_iter().flat_map(|table| table.iter().copied());
        dense.chain(sparse)
    }

    pub fn set_transition(&mut self, byte: u8, to: S) {
        debug_assert_ne!(to, ROOT, "the root state is never a child");
        match &mut self.trans {
            Transitions::Dense(table) => table[byte as usize] = to,
            Transitions::Sparse(table) => {
                match table.binary_search_by_key(&byte, |&(b, _)| b) {
                    Ok(i) => table[i].1 = to,
                    Err(i) => table.insert(i, (byte, to)),
                }
            }
        }
    }

    pub fn push_match(&mut self, p: Pattern) {
        self.matches.push(p);
    }

    /// Approximate number of heap bytes owned by this state.
    pub fn heap_bytes(&self) -> usize {
        let trans = match &self.trans {
            Transitions::Dense(_) => mem::size_of::<[S; 256]>(),
            Transitions::Sparse(table) => table.capacity() * mem::size_of::<(u8, S)>(),
        };
        trans + self.matches.capacity() * mem::size_of::<Pattern>()
    }
}
