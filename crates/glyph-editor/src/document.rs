//! Document store: lines of glyphs plus the coordinate/byte-index mapping.
//!
//! # Overview
//!
//! A [`Document`] is an ordered list of [`Line`]s and is never empty. Positions come in two
//! flavors:
//!
//! - [`Coordinates`]: `(line, visual column)`, where a tab advances to the next tab stop and every
//!   other character (regardless of its UTF-8 length) advances by one.
//! - character index: a byte offset into one line's glyph vector.
//!
//! Converting between them is a left-to-right scan of the line; nothing is cached.
//!
//! Structural changes (line inserted, lines removed, line joined into its predecessor) are queued
//! as [`LineEvent`]s. The owner drains them with [`Document::take_events`] and forwards them to
//! whatever keeps per-line state (error markers, breakpoints).

use crate::coordinates::Coordinates;
use crate::glyph::{Glyph, Line, line_from_str};
use crate::text::{bytes_to_string, is_blank, next_tab_stop, utf8_char_length};
use glyph_editor_lang::SyntaxClass;

/// Structural change to the line list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// A blank line was inserted at `index`; lines at or after it moved down by one.
    Inserted {
        /// Index of the new line.
        index: usize,
    },
    /// Lines `start..end` were removed; lines at or after `end` moved up by `end - start`.
    Removed {
        /// First removed line.
        start: usize,
        /// One past the last removed line.
        end: usize,
    },
    /// Line `from` was appended to line `into` and is about to be removed.
    Joined {
        /// The line whose content moved.
        from: usize,
        /// The line that received it.
        into: usize,
    },
}

/// Ordered, never-empty list of lines.
#[derive(Debug, Clone)]
pub struct Document {
    lines: Vec<Line>,
    tab_size: usize,
    events: Vec<LineEvent>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(4)
    }
}

impl Document {
    /// Create a document holding one blank line.
    pub fn new(tab_size: usize) -> Self {
        Self {
            lines: vec![Line::new()],
            tab_size,
            events: Vec::new(),
        }
    }

    /// Create a document from text (see [`Document::set_text`]).
    pub fn from_text(text: &str, tab_size: usize) -> Self {
        let mut doc = Self::new(tab_size);
        doc.set_text(text);
        doc
    }

    /// Replace the content. Splits on `\n` and drops every `\r`.
    ///
    /// Bulk loads do not emit line events.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(line_from_str).collect();
    }

    /// Replace the content with one line per entry. An empty list yields one blank line.
    pub fn set_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        if lines.is_empty() {
            self.lines = vec![Line::new()];
        } else {
            self.lines = lines
                .iter()
                .map(|line| {
                    line.as_ref()
                        .bytes()
                        .map(|b| Glyph::new(b, SyntaxClass::Default))
                        .collect()
                })
                .collect();
        }
    }

    /// Tab width in columns.
    pub fn tab_size(&self) -> usize {
        self.tab_size
    }

    /// Set the tab width. Zero makes a tab advance by one column.
    pub fn set_tab_size(&mut self, tab_size: usize) {
        self.tab_size = tab_size;
    }

    /// Number of lines (always at least one).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// One line, if it exists.
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub(crate) fn lines_mut(&mut self) -> &mut [Line] {
        &mut self.lines
    }

    /// Drain the queued structural events, oldest first.
    pub fn take_events(&mut self) -> Vec<LineEvent> {
        std::mem::take(&mut self.events)
    }

    fn column_after(&self, column: usize, ch: u8) -> usize {
        if ch == b'\t' {
            next_tab_stop(column, self.tab_size)
        } else {
            column + 1
        }
    }

    // ---- coordinate mapping -------------------------------------------------------------

    /// Byte index reached by scanning `at.line` up to visual column `at.column`.
    ///
    /// Returns `None` when the line does not exist. A column past the end yields the line length;
    /// a column inside a tab's span yields the index after that tab.
    pub fn char_index_for(&self, at: Coordinates) -> Option<usize> {
        let line = self.lines.get(at.line)?;
        let mut column = 0;
        let mut index = 0;
        while index < line.len() && column < at.column {
            column = self.column_after(column, line[index].ch);
            index += utf8_char_length(line[index].ch);
        }
        Some(index.min(line.len()))
    }

    /// Like [`Document::char_index_for`], with a missing line mapping to 0.
    pub(crate) fn index_of(&self, at: Coordinates) -> usize {
        self.char_index_for(at).unwrap_or(0)
    }

    /// Visual column of byte `index` on `line` (0 when the line does not exist).
    pub fn column_for_char_index(&self, line: usize, index: usize) -> usize {
        let Some(glyphs) = self.lines.get(line) else {
            return 0;
        };

        let mut column = 0;
        let mut i = 0;
        while i < index && i < glyphs.len() {
            let ch = glyphs[i].ch;
            i += utf8_char_length(ch);
            column = self.column_after(column, ch);
        }
        column
    }

    /// Visual width of `line` (0 when the line does not exist).
    pub fn line_max_column(&self, line: usize) -> usize {
        self.lines
            .get(line)
            .map_or(0, |glyphs| self.column_for_char_index(line, glyphs.len()))
    }

    /// Number of characters (not bytes) on `line`.
    pub fn line_character_count(&self, line: usize) -> usize {
        let Some(glyphs) = self.lines.get(line) else {
            return 0;
        };

        let mut count = 0;
        let mut i = 0;
        while i < glyphs.len() {
            i += utf8_char_length(glyphs[i].ch);
            count += 1;
        }
        count
    }

    /// Clamp a position into the document.
    ///
    /// A line past the end maps to the end of the last line; the column is clamped to the line
    /// width.
    pub fn sanitize(&self, at: Coordinates) -> Coordinates {
        if at.line >= self.lines.len() {
            let last = self.lines.len() - 1;
            Coordinates::new(last, self.line_max_column(last))
        } else {
            Coordinates::new(at.line, at.column.min(self.line_max_column(at.line)))
        }
    }

    /// The position one character after `at`, stepping onto the next line at a line end.
    ///
    /// The end of the last line does not move.
    pub fn advance(&self, at: Coordinates) -> Coordinates {
        let Some(line) = self.lines.get(at.line) else {
            return at;
        };

        let index = self.index_of(at);
        if index < line.len() {
            let next = (index + utf8_char_length(line[index].ch)).min(line.len());
            Coordinates::new(at.line, self.column_for_char_index(at.line, next))
        } else if at.line + 1 < self.lines.len() {
            Coordinates::new(at.line + 1, 0)
        } else {
            at
        }
    }

    // ---- reading ------------------------------------------------------------------------

    /// Text between two positions, with `\n` at every line boundary crossed.
    pub fn get_text(&self, start: Coordinates, end: Coordinates) -> String {
        let mut line_no = start.line;
        let mut index = self.index_of(start);
        let end_index = self.index_of(end);

        let mut out = Vec::new();
        while index < end_index || line_no < end.line {
            let Some(line) = self.lines.get(line_no) else {
                break;
            };

            if index < line.len() {
                out.push(line[index].ch);
                index += 1;
            } else {
                index = 0;
                line_no += 1;
                out.push(b'\n');
            }
        }

        bytes_to_string(out)
    }

    /// Text of one whole line.
    pub fn line_text(&self, line: usize) -> String {
        self.lines.get(line).map_or_else(String::new, |glyphs| {
            bytes_to_string(glyphs.iter().map(|g| g.ch).collect())
        })
    }

    /// One string per line.
    pub fn text_lines(&self) -> Vec<String> {
        (0..self.lines.len()).map(|i| self.line_text(i)).collect()
    }

    /// The whole document, lines joined by `\n` (no trailing newline).
    pub fn text(&self) -> String {
        let last = self.lines.len() - 1;
        self.get_text(
            Coordinates::new(0, 0),
            Coordinates::new(last, self.line_max_column(last)),
        )
    }

    // ---- structural mutation ------------------------------------------------------------

    /// Insert a blank line at `index`.
    pub fn insert_line(&mut self, index: usize) {
        assert!(
            index <= self.lines.len(),
            "insert_line: index {index} out of range (line count {})",
            self.lines.len()
        );
        self.lines.insert(index, Line::new());
        self.events.push(LineEvent::Inserted { index });
    }

    /// Remove one line.
    ///
    /// # Panics
    ///
    /// Panics if it is the only line.
    pub fn remove_line(&mut self, index: usize) {
        self.remove_lines(index, index + 1);
    }

    /// Remove lines `start..end`.
    ///
    /// # Panics
    ///
    /// Panics if `end < start`, if the range is out of bounds, or if no line would remain.
    pub fn remove_lines(&mut self, start: usize, end: usize) {
        assert!(end >= start, "remove_lines: end {end} before start {start}");
        assert!(end <= self.lines.len(), "remove_lines: end {end} out of range");
        assert!(
            self.lines.len() > end - start,
            "remove_lines: a document must keep at least one line"
        );
        if start == end {
            return;
        }

        self.lines.drain(start..end);
        self.events.push(LineEvent::Removed { start, end });
    }

    /// Append line `line + 1` to `line` and remove it.
    pub fn join_next_line(&mut self, line: usize) {
        let next = std::mem::take(&mut self.lines[line + 1]);
        self.lines[line].extend(next);
        self.remove_line(line + 1);
    }

    /// Append `line` to `line - 1` and remove it, announcing the join first.
    pub fn join_into_previous(&mut self, line: usize) {
        assert!(line > 0, "join_into_previous: line 0 has no predecessor");
        let moved = std::mem::take(&mut self.lines[line]);
        self.lines[line - 1].extend(moved);
        self.events.push(LineEvent::Joined {
            from: line,
            into: line - 1,
        });
        self.remove_line(line);
    }

    /// Split `line` at byte `index` into a new following line.
    ///
    /// With `copy_indent`, the leading ASCII blanks of `line` are copied to the front of the new
    /// line. Returns the byte length of the copied indentation.
    pub fn split_line(&mut self, line: usize, index: usize, copy_indent: bool) -> usize {
        self.insert_line(line + 1);

        let mut new_line: Line = if copy_indent {
            self.lines[line]
                .iter()
                .take_while(|g| g.ch.is_ascii() && is_blank(g.ch))
                .copied()
                .collect()
        } else {
            Line::new()
        };
        let indent = new_line.len();

        let index = index.min(self.lines[line].len());
        new_line.extend(self.lines[line].drain(index..));
        self.lines[line + 1] = new_line;
        indent
    }

    // ---- glyph mutation -----------------------------------------------------------------

    /// Remove the glyphs between two positions.
    ///
    /// # Panics
    ///
    /// Panics if `end < start` or if `end` is past the last line. Columns past the end of a line
    /// are clamped.
    pub fn delete_range(&mut self, start: Coordinates, end: Coordinates) {
        assert!(end >= start, "delete_range: end {end} before start {start}");
        assert!(
            end.line < self.lines.len(),
            "delete_range: line {} out of range",
            end.line
        );
        if start == end {
            return;
        }

        let start_index = self.index_of(start);
        let end_index = self.index_of(end);

        if start.line == end.line {
            let max_column = self.line_max_column(start.line);
            let line = &mut self.lines[start.line];
            if end.column >= max_column {
                line.truncate(start_index);
            } else {
                line.drain(start_index..end_index.max(start_index));
            }
        } else {
            let tail: Vec<Glyph> = self.lines[end.line].drain(end_index..).collect();
            let first = &mut self.lines[start.line];
            first.truncate(start_index);
            first.extend(tail);
            self.remove_lines(start.line + 1, end.line + 1);
        }
    }

    /// Insert `text` at `at`, advancing `at` past the inserted text.
    ///
    /// `\r` is ignored and `\n` splits the current line. Returns the number of line breaks.
    pub fn insert_text_at(&mut self, at: &mut Coordinates, text: &str) -> usize {
        let mut index = self.index_of(*at);
        let mut breaks = 0;

        let bytes = text.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' => i += 1,
                b'\n' => {
                    self.split_line(at.line, index, false);
                    at.line += 1;
                    at.column = 0;
                    index = 0;
                    breaks += 1;
                    i += 1;
                }
                lead => {
                    let len = utf8_char_length(lead).min(bytes.len() - i);
                    let line = &mut self.lines[at.line];
                    line.splice(
                        index..index,
                        bytes[i..i + len]
                            .iter()
                            .map(|&b| Glyph::new(b, SyntaxClass::Default)),
                    );
                    index += len;
                    i += len;
                    at.column = self.column_for_char_index(at.line, index);
                }
            }
        }

        breaks
    }

    /// Insert raw bytes at byte `index` of `line`. Returns the index after them.
    pub(crate) fn insert_bytes(&mut self, line: usize, index: usize, bytes: &[u8]) -> usize {
        let glyphs = &mut self.lines[line];
        let index = index.min(glyphs.len());
        glyphs.splice(
            index..index,
            bytes.iter().map(|&b| Glyph::new(b, SyntaxClass::Default)),
        );
        index + bytes.len()
    }

    /// Remove the character starting at byte `index` of `line`, returning its bytes.
    pub(crate) fn remove_char_at(&mut self, line: usize, index: usize) -> Vec<u8> {
        let glyphs = &mut self.lines[line];
        if index >= glyphs.len() {
            return Vec::new();
        }
        let end = (index + utf8_char_length(glyphs[index].ch)).min(glyphs.len());
        glyphs.drain(index..end).map(|g| g.ch).collect()
    }

    /// Prepend a tab to `line`.
    pub(crate) fn indent_line(&mut self, line: usize) {
        self.lines[line].insert(0, Glyph::new(b'\t', SyntaxClass::Default));
    }

    /// Remove one leading tab, or else up to `tab_size` leading spaces. Returns whether anything
    /// was removed.
    pub(crate) fn outdent_line(&mut self, line: usize) -> bool {
        let tab_size = self.tab_size;
        let glyphs = &mut self.lines[line];
        match glyphs.first().map(|g| g.ch) {
            Some(b'\t') => {
                glyphs.remove(0);
                true
            }
            Some(b' ') => {
                let spaces = glyphs
                    .iter()
                    .take(tab_size)
                    .take_while(|g| g.ch == b' ')
                    .count();
                glyphs.drain(..spaces);
                spaces > 0
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc(text: &str) -> Document {
        Document::from_text(text, 4)
    }

    #[test]
    fn test_empty_document_has_one_line() {
        let d = Document::new(4);
        assert_eq!(d.line_count(), 1);
        assert_eq!(d.text(), "");

        let mut d = doc("a\nb");
        d.set_lines::<&str>(&[]);
        assert_eq!(d.line_count(), 1);
    }

    #[test]
    fn test_set_text_drops_carriage_returns() {
        let d = doc("one\r\ntwo\r\n");
        assert_eq!(d.text_lines(), vec!["one", "two", ""]);
    }

    #[test]
    fn test_tab_mapping() {
        let d = doc("\tab\tc");
        // '\t' -> 4, 'a' -> 5, 'b' -> 6, '\t' -> 8, 'c' -> 9
        assert_eq!(d.line_max_column(0), 9);
        assert_eq!(d.char_index_for(Coordinates::new(0, 4)), Some(1));
        assert_eq!(d.char_index_for(Coordinates::new(0, 2)), Some(1));
        assert_eq!(d.char_index_for(Coordinates::new(0, 8)), Some(4));
        assert_eq!(d.column_for_char_index(0, 4), 8);
        assert_eq!(d.char_index_for(Coordinates::new(0, 100)), Some(5));
        assert_eq!(d.char_index_for(Coordinates::new(1, 0)), None);
    }

    #[test]
    fn test_tab_size_zero_advances_one_column() {
        let d = Document::from_text("\t\tx", 0);
        assert_eq!(d.line_max_column(0), 3);
    }

    #[test]
    fn test_multibyte_mapping() {
        let d = doc("a€b");
        assert_eq!(d.line(0).map(Vec::len), Some(5));
        assert_eq!(d.line_character_count(0), 3);
        assert_eq!(d.line_max_column(0), 3);
        assert_eq!(d.char_index_for(Coordinates::new(0, 2)), Some(4));
        assert_eq!(d.column_for_char_index(0, 4), 2);
    }

    #[test]
    fn test_sanitize() {
        let d = doc("abc\nde");
        assert_eq!(d.sanitize(Coordinates::new(0, 10)), Coordinates::new(0, 3));
        assert_eq!(d.sanitize(Coordinates::new(5, 0)), Coordinates::new(1, 2));
        assert_eq!(d.sanitize(Coordinates::new(1, 1)), Coordinates::new(1, 1));
    }

    #[test]
    fn test_advance_crosses_line_end() {
        let d = doc("a€\nb");
        assert_eq!(d.advance(Coordinates::new(0, 0)), Coordinates::new(0, 1));
        assert_eq!(d.advance(Coordinates::new(0, 1)), Coordinates::new(0, 2));
        assert_eq!(d.advance(Coordinates::new(0, 2)), Coordinates::new(1, 0));
        assert_eq!(d.advance(Coordinates::new(1, 1)), Coordinates::new(1, 1));
    }

    #[test]
    fn test_get_text_across_lines() {
        let d = doc("hello\nworld\n!");
        assert_eq!(
            d.get_text(Coordinates::new(0, 3), Coordinates::new(1, 2)),
            "lo\nwo"
        );
        assert_eq!(
            d.get_text(Coordinates::new(0, 5), Coordinates::new(1, 0)),
            "\n"
        );
        assert_eq!(d.text(), "hello\nworld\n!");
    }

    #[test]
    fn test_delete_range_same_line() {
        let mut d = doc("abcdef");
        d.delete_range(Coordinates::new(0, 1), Coordinates::new(0, 3));
        assert_eq!(d.text(), "adef");
        d.delete_range(Coordinates::new(0, 2), Coordinates::new(0, 50));
        assert_eq!(d.text(), "ad");
    }

    #[test]
    fn test_delete_range_across_lines() {
        let mut d = doc("first\nmiddle\nlast");
        d.take_events();
        d.delete_range(Coordinates::new(0, 2), Coordinates::new(2, 1));
        assert_eq!(d.text_lines(), vec!["fiast"]);
        assert_eq!(d.take_events(), vec![LineEvent::Removed { start: 1, end: 3 }]);
    }

    #[test]
    #[should_panic(expected = "before start")]
    fn test_delete_range_rejects_reversed_range() {
        let mut d = doc("abc");
        d.delete_range(Coordinates::new(0, 2), Coordinates::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "line 3 out of range")]
    fn test_delete_range_rejects_missing_line() {
        let mut d = doc("one\ntwo");
        d.delete_range(Coordinates::new(0, 1), Coordinates::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "at least one line")]
    fn test_remove_last_line_panics() {
        let mut d = doc("only");
        d.remove_line(0);
    }

    #[test]
    fn test_insert_text_at_advances_position() {
        let mut d = doc("ad");
        let mut at = Coordinates::new(0, 1);
        let breaks = d.insert_text_at(&mut at, "b\r\nc\t");
        assert_eq!(breaks, 1);
        assert_eq!(d.text_lines(), vec!["ab", "c\td"]);
        assert_eq!(at, Coordinates::new(1, 4));
        assert_eq!(d.take_events(), vec![LineEvent::Inserted { index: 1 }]);
    }

    #[test]
    fn test_split_line_copies_indent() {
        let mut d = doc("\t  foo(bar)");
        let indent = d.split_line(0, 7, true);
        assert_eq!(indent, 3);
        assert_eq!(d.text_lines(), vec!["\t  foo(", "\t  bar)"]);
    }

    #[test]
    fn test_join_into_previous_announces_join() {
        let mut d = doc("a\nb\nc");
        d.join_into_previous(1);
        assert_eq!(d.text_lines(), vec!["ab", "c"]);
        assert_eq!(
            d.take_events(),
            vec![
                LineEvent::Joined { from: 1, into: 0 },
                LineEvent::Removed { start: 1, end: 2 },
            ]
        );
    }

    #[test]
    fn test_outdent_rule() {
        let mut d = doc("\t  x\n      y\n  z\nw");
        assert!(d.outdent_line(0));
        assert!(d.outdent_line(1));
        assert!(d.outdent_line(2));
        assert!(!d.outdent_line(3));
        assert_eq!(d.text_lines(), vec!["  x", "  y", "z", "w"]);
    }

    #[test]
    fn test_remove_char_at_removes_whole_sequence() {
        let mut d = doc("x€y");
        assert_eq!(d.remove_char_at(0, 1), "€".as_bytes().to_vec());
        assert_eq!(d.text(), "xy");
    }
}
