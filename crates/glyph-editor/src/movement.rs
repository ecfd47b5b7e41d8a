//! Cursor movement.
//!
//! With `select`, the end of the selection that sat on the old cursor follows the cursor and the
//! other end stays anchored. If the old cursor was on neither end the anchors are rebuilt from the
//! old and new positions.

use crate::coordinates::Coordinates;
use crate::editor::{Editor, SelectionMode};
use crate::text::{is_utf8_continuation, utf8_char_length};
use crate::words;

impl Editor {
    /// Anchor update for moves toward the start of the document.
    fn extend_backward(&mut self, old: Coordinates, select: bool) {
        let cursor = self.state.cursor;
        if !select {
            self.interactive_start = cursor;
            self.interactive_end = cursor;
        } else if old == self.interactive_start {
            self.interactive_start = cursor;
        } else if old == self.interactive_end {
            self.interactive_end = cursor;
        } else {
            self.interactive_start = cursor;
            self.interactive_end = old;
        }
    }

    /// Anchor update for moves toward the end of the document.
    fn extend_forward(&mut self, old: Coordinates, select: bool) {
        let cursor = self.state.cursor;
        if !select {
            self.interactive_start = cursor;
            self.interactive_end = cursor;
        } else if old == self.interactive_end {
            self.interactive_end = cursor;
        } else if old == self.interactive_start {
            self.interactive_start = cursor;
        } else {
            self.interactive_start = old;
            self.interactive_end = cursor;
        }
    }

    fn apply_interactive_selection(&mut self, mode: SelectionMode) {
        self.set_selection(self.interactive_start, self.interactive_end, mode);
        self.cursor_position_changed = true;
        self.scroll_to_cursor = true;
    }

    /// Move up `amount` lines, keeping the column.
    pub fn move_up(&mut self, amount: usize, select: bool) {
        let old = self.state.cursor;
        self.state.cursor.line = old.line.saturating_sub(amount);
        if self.state.cursor != old {
            self.extend_backward(old, select);
            self.apply_interactive_selection(SelectionMode::Normal);
        }
    }

    /// Move down `amount` lines, keeping the column.
    pub fn move_down(&mut self, amount: usize, select: bool) {
        let old = self.state.cursor;
        let last = self.document.line_count() - 1;
        self.state.cursor.line = old.line.saturating_add(amount).min(last);
        if self.state.cursor != old {
            self.extend_forward(old, select);
            self.apply_interactive_selection(SelectionMode::Normal);
        }
    }

    /// Move left `amount` characters, wrapping to the previous line. In word mode each step lands
    /// on a word start.
    pub fn move_left(&mut self, amount: usize, select: bool, word_mode: bool) {
        let old = self.state.cursor;
        let colorized = self.config.colorizer_enabled;

        let cursor = self.cursor_position();
        let mut line = cursor.line;
        let mut index = self.document.index_of(cursor);

        for _ in 0..amount {
            if index == 0 {
                if line > 0 {
                    line -= 1;
                    index = self.document.line(line).map_or(0, Vec::len);
                }
            } else {
                index -= 1;
                if let Some(glyphs) = self.document.line(line) {
                    while index > 0 && is_utf8_continuation(glyphs[index].ch) {
                        index -= 1;
                    }
                }
            }

            if word_mode {
                let at = Coordinates::new(line, self.document.column_for_char_index(line, index));
                let start = words::find_word_start(&self.document, at, colorized);
                index = self.document.index_of(start);
            }
        }

        self.state.cursor =
            Coordinates::new(line, self.document.column_for_char_index(line, index));
        self.extend_backward(old, select);

        let mode = if select && word_mode {
            SelectionMode::Word
        } else {
            SelectionMode::Normal
        };
        self.apply_interactive_selection(mode);
    }

    /// Move right `amount` characters, wrapping to the next line. In word mode each step lands on
    /// the start of the next word.
    pub fn move_right(&mut self, amount: usize, select: bool, word_mode: bool) {
        let old = self.state.cursor;
        if old.line >= self.document.line_count() {
            return;
        }

        let mut cursor = self.cursor_position();
        let mut index = self.document.index_of(cursor);

        for _ in 0..amount {
            let line_len = self.document.line(cursor.line).map_or(0, Vec::len);
            if index >= line_len {
                if cursor.line + 1 < self.document.line_count() {
                    cursor = Coordinates::new(cursor.line + 1, 0);
                    index = 0;
                } else {
                    break;
                }
            } else {
                let lead = self.document.line(cursor.line).map_or(0, |glyphs| glyphs[index].ch);
                index += utf8_char_length(lead);
                cursor = Coordinates::new(
                    cursor.line,
                    self.document.column_for_char_index(cursor.line, index),
                );
                if word_mode {
                    cursor = words::find_next_word(&self.document, cursor);
                    index = self.document.index_of(cursor);
                }
            }
        }

        self.state.cursor = cursor;
        if select && old == self.interactive_end {
            self.interactive_end = self.document.sanitize(cursor);
        } else {
            self.extend_forward(old, select);
        }

        let mode = if select && word_mode {
            SelectionMode::Word
        } else {
            SelectionMode::Normal
        };
        self.apply_interactive_selection(mode);
    }

    /// Move to the start of the document.
    pub fn move_top(&mut self, select: bool) {
        let old = self.state.cursor;
        self.move_cursor_to(Coordinates::new(0, 0));

        if self.state.cursor != old {
            if select {
                self.interactive_end = old;
                self.interactive_start = self.state.cursor;
            } else {
                self.interactive_start = self.state.cursor;
                self.interactive_end = self.state.cursor;
            }
            self.set_selection(self.interactive_start, self.interactive_end, SelectionMode::Normal);
        }
    }

    /// Move to the first column of the last line.
    pub fn move_bottom(&mut self, select: bool) {
        let old = self.cursor_position();
        let new = Coordinates::new(self.document.line_count() - 1, 0);
        self.move_cursor_to(new);

        if select {
            self.interactive_start = old;
            self.interactive_end = new;
        } else {
            self.interactive_start = new;
            self.interactive_end = new;
        }
        self.set_selection(self.interactive_start, self.interactive_end, SelectionMode::Normal);
    }

    /// Move to the start of the line.
    pub fn move_home(&mut self, select: bool) {
        let old = self.state.cursor;
        self.move_cursor_to(Coordinates::new(old.line, 0));

        if self.state.cursor != old {
            self.extend_backward(old, select);
            self.set_selection(self.interactive_start, self.interactive_end, SelectionMode::Normal);
        }
    }

    /// Move to the end of the line.
    pub fn move_end(&mut self, select: bool) {
        let old = self.state.cursor;
        let end = Coordinates::new(old.line, self.document.line_max_column(old.line));
        self.move_cursor_to(end);

        if self.state.cursor != old {
            self.extend_forward(old, select);
            self.set_selection(self.interactive_start, self.interactive_end, SelectionMode::Normal);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::coordinates::Coordinates;
    use crate::editor::Editor;

    fn editor(text: &str) -> Editor {
        let mut editor = Editor::new();
        editor.set_text(text);
        editor.colorize_all();
        editor
    }

    #[test]
    fn test_vertical_moves_keep_column() {
        let mut e = editor("long line\nab\nanother line");
        e.set_cursor_position(Coordinates::new(0, 7));
        e.move_down(1, false);
        assert_eq!(e.cursor_position(), Coordinates::new(1, 2));
        e.move_down(1, false);
        assert_eq!(e.cursor_position(), Coordinates::new(2, 7));
        e.move_down(5, false);
        assert_eq!(e.cursor_position(), Coordinates::new(2, 7));
        e.move_up(10, false);
        assert_eq!(e.cursor_position(), Coordinates::new(0, 7));
    }

    #[test]
    fn test_shift_moves_extend_selection() {
        let mut e = editor("abc\ndef");
        e.set_cursor_position(Coordinates::new(0, 1));
        e.move_right(2, true, false);
        assert_eq!(e.selection_start(), Coordinates::new(0, 1));
        assert_eq!(e.selection_end(), Coordinates::new(0, 3));

        e.move_down(1, true);
        assert_eq!(e.selection_end(), Coordinates::new(1, 3));

        e.move_left(1, false, false);
        assert!(!e.has_selection());
        assert_eq!(e.cursor_position(), Coordinates::new(1, 2));
    }

    #[test]
    fn test_left_right_wrap_lines_and_skip_multibyte() {
        let mut e = editor("a€\nb");
        e.set_cursor_position(Coordinates::new(0, 2));
        e.move_left(1, false, false);
        assert_eq!(e.cursor_position(), Coordinates::new(0, 1));
        e.move_right(2, false, false);
        assert_eq!(e.cursor_position(), Coordinates::new(1, 0));
        e.move_right(5, false, false);
        assert_eq!(e.cursor_position(), Coordinates::new(1, 1));
        e.move_left(2, false, false);
        assert_eq!(e.cursor_position(), Coordinates::new(0, 2));
    }

    #[test]
    fn test_word_moves() {
        let mut e = editor("foo bar baz");
        e.move_right(1, false, true);
        assert_eq!(e.cursor_position(), Coordinates::new(0, 4));
        e.move_right(1, false, true);
        assert_eq!(e.cursor_position(), Coordinates::new(0, 8));
        e.move_left(1, false, true);
        assert_eq!(e.cursor_position(), Coordinates::new(0, 4));
    }

    #[test]
    fn test_home_end_top_bottom() {
        let mut e = editor("one\ntwo\nthree");
        e.set_cursor_position(Coordinates::new(1, 1));
        e.move_end(true);
        assert_eq!(e.selected_text(), "wo");
        e.move_home(false);
        assert_eq!(e.cursor_position(), Coordinates::new(1, 0));
        assert!(!e.has_selection());

        e.move_bottom(true);
        assert_eq!(e.cursor_position(), Coordinates::new(2, 0));
        assert_eq!(e.selected_text(), "two\n");

        e.move_top(true);
        assert_eq!(e.cursor_position(), Coordinates::new(0, 0));
        assert_eq!(e.selection_start(), Coordinates::new(0, 0));
        assert_eq!(e.selection_end(), Coordinates::new(2, 0));
    }
}
