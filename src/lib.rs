//! Find every occurrence of many byte patterns in a single pass.
//!
//! # Features
//!
//! - Reports *all* occurrences, including overlapping and nested ones
//! - Linear time in the length of the haystack plus the number of matches
//! - Build once, then search from any number of threads without locking
//! - Eager ([`Automaton::search`]) and lazy
//!   ([`Automaton::find_overlapping_iter`]) searching
//! - Optional [`serde`] support for [`Match`]
//!
//! # Getting started
//!
//! Your entry point is the [`Automaton`] struct. An automaton is built once
//! from a fixed list of patterns. Each pattern is identified by its position
//! in that list.
//!
//! ```
//! let ac = acscan::Automaton::new(["he", "she", "his", "hers"]);
//! ```
//!
//! Then [`.search`][Automaton::search] returns every match, ordered by where
//! each match ends.
//!
//! ```
//! # let ac = acscan::Automaton::new(["he", "she", "his", "hers"]);
//! let matches: Vec<_> = ac
//!     .search("ushers")
//!     .iter()
//!     .map(|m| (m.pattern_id(), m.start(), m.end()))
//!     .collect();
//! assert_eq!(matches, [(1, 1, 4), (0, 2, 4), (3, 2, 6)]);
//! ```
//!
//! Matches ending at the same position are reported from the longest to the
//! shortest pattern, so above "she" is reported before "he".
//!
//! # Examples
//!
//! ### Search lazily
//!
//! [`.find_overlapping_iter`][Automaton::find_overlapping_iter] reads the
//! haystack only as far as needed to produce the next match.
//!
//! ```
//! let ac = acscan::Automaton::new(["abc", "bc", "c"]);
//! let first = ac.find_overlapping_iter("xxabcxx").next().unwrap();
//! assert_eq!((first.pattern_id(), first.start(), first.end()), (0, 2, 5));
//! ```
//!
//! ### Configure the automaton
//!
//! A [`Builder`] can trade memory for speed or cap the size of the
//! automaton.
//!
//! ```
//! let ac = acscan::Automaton::builder()
//!     .dense(true)
//!     .state_limit(64)
//!     .build(["foo", "bar"])?;
//! assert!(ac.is_match("foobar"));
//!
//! let err = acscan::Automaton::builder()
//!     .state_limit(4)
//!     .build(["foo", "bar"])
//!     .unwrap_err();
//! assert_eq!(err.to_string(), "automaton exceeds the state limit of 4");
//! # Ok::<(), acscan::Error>(())
//! ```
//!
//! ### Search from many threads
//!
//! ```
//! let ac = acscan::Automaton::new(["needle"]);
//! std::thread::scope(|s| {
//!     for haystack in ["haystack", "a needle here"] {
//!         let ac = &ac;
//!         s.spawn(move || ac.search(haystack));
//!     }
//! });
//! ```
//!
//! # Logging
//!
//! Building an automaton emits diagnostics through the [`log`] crate: the
//! size of the automaton at `debug` level and every linked state at `trace`
//! level. No logger is installed by this crate.

mod automaton;
mod error;

pub use crate::automaton::{Automaton, Builder, FindOverlappingIter, Match};
pub use crate::error::{Error, Result};
