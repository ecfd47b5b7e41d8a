//! Linear undo/redo log.

use crate::coordinates::Coordinates;

/// Cursor and selection, snapshotted whole into every transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorState {
    /// Caret position.
    pub cursor: Coordinates,
    /// Selection start (never after `selection_end`).
    pub selection_start: Coordinates,
    /// Selection end.
    pub selection_end: Coordinates,
}

/// One reversible edit.
///
/// Undo deletes `added_start..added_end`, re-inserts `removed` at `removed_start` and restores
/// `before`. Redo deletes `removed_start..removed_end`, re-inserts `added` at `added_start` and
/// restores `after`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UndoRecord {
    pub added: String,
    pub added_start: Coordinates,
    pub added_end: Coordinates,
    pub removed: String,
    pub removed_start: Coordinates,
    pub removed_end: Coordinates,
    pub before: EditorState,
    pub after: EditorState,
}

impl UndoRecord {
    pub(crate) fn new(before: EditorState) -> Self {
        Self {
            before,
            ..Self::default()
        }
    }

    fn check(&self) {
        assert!(
            self.added_start <= self.added_end,
            "undo record: added range {}..{} is reversed",
            self.added_start,
            self.added_end
        );
        assert!(
            self.removed_start <= self.removed_end,
            "undo record: removed range {}..{} is reversed",
            self.removed_start,
            self.removed_end
        );
    }
}

/// Records plus a cursor separating done (left) from undone (right).
#[derive(Debug, Default)]
pub(crate) struct UndoLog {
    records: Vec<UndoRecord>,
    index: usize,
}

impl UndoLog {
    /// Append a record, discarding any undone tail.
    pub(crate) fn add(&mut self, record: UndoRecord) {
        record.check();
        self.records.truncate(self.index);
        self.records.push(record);
        self.index += 1;
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
        self.index = 0;
    }

    pub(crate) fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub(crate) fn can_redo(&self) -> bool {
        self.index < self.records.len()
    }

    /// Step back and return the record to undo.
    pub(crate) fn step_back(&mut self) -> Option<UndoRecord> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.records[self.index].clone())
    }

    /// Step forward and return the record to redo.
    pub(crate) fn step_forward(&mut self) -> Option<UndoRecord> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(self.records[self.index - 1].clone())
    }
}
