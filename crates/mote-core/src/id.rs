//! Strongly-typed counters shared across the workspace.

use std::fmt;

/// Monotonically increasing frame counter.
///
/// Incremented each time the simulation advances one step. Reported in
/// per-step metrics so callers can correlate measurements with frames.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl TickId {
    /// The tick following this one.
    pub fn next(self) -> TickId {
        TickId(self.0 + 1)
    }
}

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_increments() {
        assert_eq!(TickId(0).next(), TickId(1));
        assert_eq!(TickId(41).next(), TickId(42));
    }
}
