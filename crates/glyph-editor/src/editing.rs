//! Edit operations. Each one that changes the text records exactly one undo transaction.

use crate::clipboard::Clipboard;
use crate::coordinates::Coordinates;
use crate::editor::{Editor, SelectionMode};
use crate::text::{bytes_to_string, is_utf8_continuation};
use crate::undo::UndoRecord;

impl Editor {
    fn assert_writable(&self, operation: &str) {
        assert!(
            !self.config.read_only,
            "{operation}: the editor is read-only"
        );
    }

    fn collapse_selection_to_cursor(&mut self) {
        let cursor = self.state.cursor;
        self.state.selection_start = cursor;
        self.state.selection_end = cursor;
        self.interactive_start = cursor;
        self.interactive_end = cursor;
    }

    /// Type one character.
    ///
    /// A tab over a multi-line selection indents every touched line (or outdents with `shift`).
    /// Otherwise the selection is replaced. `\n` splits the line, copying its indentation when the
    /// language asks for auto-indentation.
    ///
    /// # Panics
    ///
    /// Panics if the editor is read-only.
    pub fn enter_character(&mut self, ch: char, shift: bool) {
        self.assert_writable("enter_character");

        let mut record = UndoRecord::new(self.state);

        if self.has_selection() {
            if ch == '\t' && self.state.selection_start.line != self.state.selection_end.line {
                self.indent_selection(record, shift);
                return;
            }

            record.removed = self.selected_text();
            record.removed_start = self.state.selection_start;
            record.removed_end = self.state.selection_end;
            self.delete_selection();
        }

        let coord = self.cursor_position();
        record.added_start = coord;

        if ch == '\n' {
            let index = self.document.index_of(coord);
            let indent = self
                .document
                .split_line(coord.line, index, self.language.auto_indentation);
            let column = self.document.column_for_char_index(coord.line + 1, indent);
            self.move_cursor_to(Coordinates::new(coord.line + 1, column));
        } else {
            let mut buf = [0u8; 4];
            let bytes = ch.encode_utf8(&mut buf).as_bytes();
            let index = self.document.index_of(coord);
            let line_len = self.document.line(coord.line).map_or(0, Vec::len);

            if self.config.overwrite && record.removed.is_empty() && index < line_len {
                record.removed_start = coord;
                record.removed_end = self.document.advance(coord);
                record.removed = bytes_to_string(self.document.remove_char_at(coord.line, index));
            }

            let index = self.document.insert_bytes(coord.line, index, bytes);
            let column = self.document.column_for_char_index(coord.line, index);
            self.move_cursor_to(Coordinates::new(coord.line, column));
        }

        self.text_changed = true;
        self.collapse_selection_to_cursor();
        self.sync_line_events();

        record.added_end = self.cursor_position();
        record.added = self.document.get_text(record.added_start, record.added_end);
        record.after = self.state;
        self.add_undo(record);

        self.colorize(coord.line as isize - 1, Some(3));
        self.scroll_to_cursor = true;
    }

    fn indent_selection(&mut self, mut record: UndoRecord, outdent: bool) {
        let start = Coordinates::new(self.state.selection_start.line, 0);
        let original_end = self.state.selection_end;

        let mut end_line = original_end.line;
        if original_end.column == 0 && end_line > 0 {
            end_line -= 1;
        }
        end_line = end_line.min(self.document.line_count() - 1);
        let end = Coordinates::new(end_line, self.document.line_max_column(end_line));

        record.removed_start = start;
        record.removed_end = end;
        record.removed = self.document.get_text(start, end);

        let mut modified = false;
        for line in start.line..=end_line {
            if outdent {
                modified |= self.document.outdent_line(line);
            } else {
                self.document.indent_line(line);
                modified = true;
            }
        }

        if !modified {
            return;
        }

        let (selection_end, range_end) = if original_end.column != 0 {
            let end = Coordinates::new(end_line, self.document.line_max_column(end_line));
            (end, end)
        } else {
            (
                Coordinates::new(original_end.line, 0),
                Coordinates::new(end_line, self.document.line_max_column(end_line)),
            )
        };

        record.added_start = start;
        record.added_end = range_end;
        record.added = self.document.get_text(start, range_end);

        self.state.selection_start = start;
        self.state.selection_end = selection_end;
        self.state.cursor = self.document.sanitize(self.state.cursor);
        self.interactive_start = start;
        self.interactive_end = selection_end;
        record.after = self.state;
        self.add_undo(record);

        self.text_changed = true;
        self.cursor_position_changed = true;
        self.colorize(start.line as isize - 1, Some(end_line - start.line + 2));
        self.scroll_to_cursor = true;
    }

    /// Delete the selection, without recording undo.
    pub(crate) fn delete_selection(&mut self) {
        let start = self.state.selection_start;
        let end = self.state.selection_end;
        if end == start {
            return;
        }

        self.document.delete_range(start, end);
        self.sync_line_events();

        self.set_selection(start, start, SelectionMode::Normal);
        self.interactive_start = start;
        self.interactive_end = start;
        self.move_cursor_to(start);
        self.text_changed = true;
        self.colorize(start.line as isize, Some(1));
    }

    /// Insert text at the cursor, replacing the selection. `\r` is dropped.
    ///
    /// # Panics
    ///
    /// Panics if the editor is read-only.
    pub fn insert_text(&mut self, text: &str) {
        self.assert_writable("insert_text");
        if text.is_empty() {
            return;
        }

        let mut record = UndoRecord::new(self.state);
        if self.has_selection() {
            record.removed = self.selected_text();
            record.removed_start = self.state.selection_start;
            record.removed_end = self.state.selection_end;
            self.delete_selection();
        }

        record.added_start = self.cursor_position();
        self.insert_at_cursor(text);
        record.added_end = self.cursor_position();
        record.added = self.document.get_text(record.added_start, record.added_end);

        if record.added.is_empty() && record.removed.is_empty() {
            return;
        }
        record.after = self.state;
        self.add_undo(record);
    }

    fn insert_at_cursor(&mut self, text: &str) {
        let mut pos = self.cursor_position();
        let start = pos.min(self.state.selection_start);
        let mut total_lines = pos.line - start.line;

        total_lines += self.document.insert_text_at(&mut pos, text);
        self.sync_line_events();

        self.set_selection(pos, pos, SelectionMode::Normal);
        self.interactive_start = pos;
        self.interactive_end = pos;
        self.move_cursor_to(pos);
        self.text_changed = true;
        self.colorize(start.line as isize - 1, Some(total_lines + 2));
    }

    /// Delete the selection, or the character after the cursor (joining the next line at a line
    /// end).
    ///
    /// # Panics
    ///
    /// Panics if the editor is read-only.
    pub fn delete(&mut self) {
        self.assert_writable("delete");

        let mut record = UndoRecord::new(self.state);

        if self.has_selection() {
            record.removed = self.selected_text();
            record.removed_start = self.state.selection_start;
            record.removed_end = self.state.selection_end;
            self.delete_selection();
        } else {
            let pos = self.cursor_position();
            self.move_cursor_to(pos);

            if pos.column == self.document.line_max_column(pos.line) {
                if pos.line + 1 == self.document.line_count() {
                    return;
                }

                record.removed = "\n".to_string();
                record.removed_start = pos;
                record.removed_end = self.document.advance(pos);
                self.document.join_next_line(pos.line);
            } else {
                let index = self.document.index_of(pos);
                let next = self.document.advance(pos);
                let removed = self.document.remove_char_at(pos.line, index);
                if removed.is_empty() {
                    return;
                }
                record.removed_start = pos;
                record.removed_end = next;
                record.removed = bytes_to_string(removed);
            }

            self.sync_line_events();
            self.collapse_selection_to_cursor();
            self.text_changed = true;
            self.colorize(pos.line as isize, Some(1));
        }

        record.after = self.state;
        self.add_undo(record);
    }

    /// Delete the selection, or the character before the cursor (joining into the previous line
    /// at column 0).
    ///
    /// # Panics
    ///
    /// Panics if the editor is read-only.
    pub fn backspace(&mut self) {
        self.assert_writable("backspace");

        let mut record = UndoRecord::new(self.state);

        if self.has_selection() {
            record.removed = self.selected_text();
            record.removed_start = self.state.selection_start;
            record.removed_end = self.state.selection_end;
            self.delete_selection();
        } else {
            let pos = self.cursor_position();
            self.move_cursor_to(pos);

            if pos.column == 0 {
                if pos.line == 0 {
                    return;
                }

                let prev = pos.line - 1;
                let prev_end = Coordinates::new(prev, self.document.line_max_column(prev));
                record.removed = "\n".to_string();
                record.removed_start = prev_end;
                record.removed_end = self.document.advance(prev_end);

                self.document.join_into_previous(pos.line);
                self.move_cursor_to(prev_end);
            } else {
                let Some(line) = self.document.line(pos.line) else {
                    return;
                };
                let end = self.document.index_of(pos);
                if end == 0 {
                    return;
                }
                let mut start = end - 1;
                while start > 0 && is_utf8_continuation(line[start].ch) {
                    start -= 1;
                }

                let start_column = self.document.column_for_char_index(pos.line, start);
                record.removed_start = Coordinates::new(pos.line, start_column);
                record.removed_end =
                    Coordinates::new(pos.line, self.document.column_for_char_index(pos.line, end));
                record.removed = bytes_to_string(self.document.remove_char_at(pos.line, start));
                self.move_cursor_to(Coordinates::new(pos.line, start_column));
            }

            self.sync_line_events();
            self.collapse_selection_to_cursor();
            self.text_changed = true;
            self.scroll_to_cursor = true;
            self.colorize(self.state.cursor.line as isize, Some(1));
        }

        record.after = self.state;
        self.add_undo(record);
    }

    /// Copy the selection, or the current line when nothing is selected.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) {
        clipboard.set_text(self.copy_text());
    }

    pub(crate) fn copy_text(&self) -> String {
        if self.has_selection() {
            self.selected_text()
        } else {
            self.current_line_text()
        }
    }

    /// Copy and delete the selection. Read-only editors only copy.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) {
        self.copy(clipboard);
        if !self.config.read_only {
            self.cut_selection();
        }
    }

    pub(crate) fn cut_selection(&mut self) {
        if !self.has_selection() {
            return;
        }

        let mut record = UndoRecord::new(self.state);
        record.removed = self.selected_text();
        record.removed_start = self.state.selection_start;
        record.removed_end = self.state.selection_end;
        self.delete_selection();
        record.after = self.state;
        self.add_undo(record);
    }

    /// Replace the selection with the clipboard text. Does nothing when read-only or when the
    /// clipboard is empty.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) {
        if self.config.read_only {
            return;
        }
        if let Some(text) = clipboard.get_text() {
            self.insert_text(&text);
        }
    }
}
