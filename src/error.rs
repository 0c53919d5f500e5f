use std::fmt;

/// A convenient type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can occur while building an automaton.
///
/// Searching never fails. Building only fails when the automaton would need
/// more states than the configured [`state_limit`][crate::Builder::state_limit]
/// or than can be addressed by a state identifier.
#[derive(Clone)]
pub struct Error {
    msg: String,
    limit: usize,
}

impl Error {
    pub(crate) fn state_limit(limit: usize) -> Self {
        Self {
            msg: format!("automaton exceeds the state limit of {limit}"),
            limit,
        }
    }

    pub(crate) fn state_id_overflow(limit: usize) -> Self {
        Self {
            msg: format!("state identifier space exhausted after {limit} states"),
            limit,
        }
    }

    /// The maximum number of states that was exceeded.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl std::error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("msg", &self.msg)
            .field("limit", &self.limit)
            .finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.msg)
    }
}
