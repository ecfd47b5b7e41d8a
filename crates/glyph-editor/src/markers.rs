//! Per-line side tables that follow structural edits.

use crate::document::LineEvent;
use std::collections::{BTreeMap, BTreeSet};

/// Something keyed by line number that must be renumbered when lines move.
pub trait LineObserver {
    /// Apply one structural change.
    fn on_line_event(&mut self, event: &LineEvent);
}

fn shifted(line: usize, event: &LineEvent) -> Option<usize> {
    match *event {
        LineEvent::Inserted { index } => Some(if line >= index { line + 1 } else { line }),
        LineEvent::Removed { start, end } => {
            if line < start {
                Some(line)
            } else if line < end {
                None
            } else {
                Some(line - (end - start))
            }
        }
        LineEvent::Joined { .. } => Some(line),
    }
}

/// Error messages keyed by zero-based line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMarkers {
    entries: BTreeMap<usize, String>,
}

impl ErrorMarkers {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every entry.
    pub fn set(&mut self, markers: impl IntoIterator<Item = (usize, String)>) {
        self.entries = markers.into_iter().collect();
    }

    /// Message on `line`, if any.
    pub fn get(&self, line: usize) -> Option<&str> {
        self.entries.get(&line).map(String::as_str)
    }

    /// All entries in line order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries.iter().map(|(line, msg)| (*line, msg.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl LineObserver for ErrorMarkers {
    fn on_line_event(&mut self, event: &LineEvent) {
        if let LineEvent::Joined { from, into } = *event {
            // The marker follows its text onto the receiving line, unless that line has one.
            if let Some(message) = self.entries.remove(&from) {
                self.entries.entry(into).or_insert(message);
            }
            return;
        }

        self.entries = std::mem::take(&mut self.entries)
            .into_iter()
            .filter_map(|(line, msg)| shifted(line, event).map(|line| (line, msg)))
            .collect();
    }
}

/// Breakpoint lines (zero-based).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakpoints {
    lines: BTreeSet<usize>,
}

impl Breakpoints {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every entry.
    pub fn set(&mut self, lines: impl IntoIterator<Item = usize>) {
        self.lines = lines.into_iter().collect();
    }

    /// Returns `true` if `line` has a breakpoint.
    pub fn contains(&self, line: usize) -> bool {
        self.lines.contains(&line)
    }

    /// All breakpoint lines in order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().copied()
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if there are no breakpoints.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl LineObserver for Breakpoints {
    fn on_line_event(&mut self, event: &LineEvent) {
        self.lines = std::mem::take(&mut self.lines)
            .into_iter()
            .filter_map(|line| shifted(line, event))
            .collect();
    }
}
