//! Tab-aware document positions.

use std::cmp::Ordering;
use std::fmt;

/// A `(line, visual column)` position.
///
/// The column counts one unit per character and rounds tabs up to the next tab stop. It is not a
/// byte offset; see [`Document::char_index_for`](crate::Document::char_index_for) for the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinates {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based visual column.
    pub column: usize,
}

impl Coordinates {
    /// Create a position.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Coordinates {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Coordinates {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_line_major() {
        assert!(Coordinates::new(0, 10) < Coordinates::new(1, 0));
        assert!(Coordinates::new(2, 1) > Coordinates::new(2, 0));
        assert_eq!(
            Coordinates::new(3, 4).max(Coordinates::new(3, 2)),
            Coordinates::new(3, 4)
        );
    }
}
