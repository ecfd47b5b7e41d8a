//! The [`Editor`]: document, cursor/selection state, undo log, markers and colorizer behind one
//! facade.
//!
//! Every coordinate accepted from outside is sanitized before use. Mutating operations assert
//! that the editor is writable; the [command interface](crate::Command) checks first and reports
//! [`CommandError::ReadOnly`](crate::CommandError::ReadOnly) instead.

use crate::colorizer::Colorizer;
use crate::config::{EditorConfig, MAX_TAB_SIZE};
use crate::coordinates::Coordinates;
use crate::document::Document;
use crate::markers::{Breakpoints, ErrorMarkers, LineObserver};
use crate::palette::Palette;
use crate::undo::{EditorState, UndoLog, UndoRecord};
use crate::words;
use glyph_editor_lang::LanguageDefinition;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How selection boundaries snap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// Exact positions.
    #[default]
    Normal,
    /// Snapped to word boundaries.
    Word,
    /// Snapped to whole lines.
    Line,
}

/// A source code editor without a windowing system.
#[derive(Debug)]
pub struct Editor {
    pub(crate) document: Document,
    pub(crate) config: EditorConfig,
    pub(crate) language: Arc<LanguageDefinition>,
    pub(crate) palette: Palette,
    pub(crate) state: EditorState,
    pub(crate) undo_log: UndoLog,
    pub(crate) error_markers: ErrorMarkers,
    pub(crate) breakpoints: Breakpoints,
    pub(crate) colorizer: Colorizer,
    pub(crate) selection_mode: SelectionMode,
    pub(crate) interactive_start: Coordinates,
    pub(crate) interactive_end: Coordinates,
    pub(crate) text_changed: bool,
    pub(crate) cursor_position_changed: bool,
    pub(crate) scroll_to_cursor: bool,
    pub(crate) scroll_to_top: bool,
    pub(crate) last_click: Option<f64>,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    /// Create an editor with default settings and the HLSL language.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default(), LanguageDefinition::hlsl())
    }

    /// Create an editor from a configuration and a language.
    pub fn with_config(
        config: EditorConfig,
        language: impl Into<Arc<LanguageDefinition>>,
    ) -> Self {
        let mut config = config;
        config.tab_size = config.tab_size.min(MAX_TAB_SIZE);

        Self {
            document: Document::new(config.tab_size),
            config,
            language: language.into(),
            palette: Palette::default(),
            state: EditorState::default(),
            undo_log: UndoLog::default(),
            error_markers: ErrorMarkers::new(),
            breakpoints: Breakpoints::new(),
            colorizer: Colorizer::default(),
            selection_mode: SelectionMode::Normal,
            interactive_start: Coordinates::default(),
            interactive_end: Coordinates::default(),
            text_changed: false,
            cursor_position_changed: false,
            scroll_to_cursor: false,
            scroll_to_top: false,
            last_click: None,
        }
    }

    // ---- configuration --------------------------------------------------------------------

    /// The live settings.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Allow or forbid mutation.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.config.read_only = read_only;
    }

    /// Returns `true` if mutation is forbidden.
    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    /// Turn syntax coloring on or off.
    pub fn set_colorizer_enabled(&mut self, enabled: bool) {
        self.config.colorizer_enabled = enabled;
    }

    /// Returns `true` if syntax coloring is on.
    pub fn is_colorizer_enabled(&self) -> bool {
        self.config.colorizer_enabled
    }

    /// Show or hide tab and space markers.
    pub fn set_show_whitespaces(&mut self, show: bool) {
        self.config.show_whitespaces = show;
    }

    /// Returns `true` if tab and space markers are shown.
    pub fn is_showing_whitespaces(&self) -> bool {
        self.config.show_whitespaces
    }

    /// Switch between insert and overwrite typing.
    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.config.overwrite = overwrite;
    }

    /// Returns `true` in overwrite mode.
    pub fn is_overwrite(&self) -> bool {
        self.config.overwrite
    }

    /// Set the tab width, clamped to `0..=32`.
    pub fn set_tab_size(&mut self, tab_size: usize) {
        self.config.tab_size = tab_size.min(MAX_TAB_SIZE);
        self.document.set_tab_size(self.config.tab_size);
    }

    /// Tab width in columns.
    pub fn tab_size(&self) -> usize {
        self.config.tab_size
    }

    /// Enable or disable [`Editor::handle_key`] and [`Editor::handle_text_input`].
    pub fn set_handle_keyboard_inputs(&mut self, enabled: bool) {
        self.config.handle_keyboard_inputs = enabled;
    }

    /// Enable or disable [`Editor::handle_mouse`].
    pub fn set_handle_mouse_inputs(&mut self, enabled: bool) {
        self.config.handle_mouse_inputs = enabled;
    }

    /// Set the line height multiplier.
    pub fn set_line_spacing(&mut self, spacing: f32) {
        self.config.line_spacing = spacing;
    }

    /// Replace the palette.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// The palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Swap the language and re-tokenize the whole document.
    pub fn set_language(&mut self, language: impl Into<Arc<LanguageDefinition>>) {
        self.language = language.into();
        tracing::debug!(language = %self.language.name, "language changed");
        self.colorizer.mark_all(self.document.line_count());
    }

    /// The active language.
    pub fn language(&self) -> &LanguageDefinition {
        &self.language
    }

    // ---- document -------------------------------------------------------------------------

    /// Read-only access to the lines and the coordinate mapping.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Replace the text. Clears undo history and re-tokenizes everything.
    pub fn set_text(&mut self, text: &str) {
        self.document.set_text(text);
        self.after_bulk_load();
    }

    /// Replace the text, one entry per line.
    pub fn set_text_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.document.set_lines(lines);
        self.after_bulk_load();
    }

    fn after_bulk_load(&mut self) {
        self.document.take_events();
        self.text_changed = true;
        self.scroll_to_top = true;
        self.undo_log.clear();

        self.state.cursor = self.document.sanitize(self.state.cursor);
        self.state.selection_start = self.document.sanitize(self.state.selection_start);
        self.state.selection_end = self.document.sanitize(self.state.selection_end);
        self.interactive_start = self.state.selection_start;
        self.interactive_end = self.state.selection_end;

        tracing::debug!(lines = self.document.line_count(), "text loaded");
        self.colorizer.mark_all(self.document.line_count());
    }

    /// The whole text, lines joined by `\n`.
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// One string per line.
    pub fn text_lines(&self) -> Vec<String> {
        self.document.text_lines()
    }

    /// The selected text.
    pub fn selected_text(&self) -> String {
        self.document
            .get_text(self.state.selection_start, self.state.selection_end)
    }

    /// Text of the line holding the cursor.
    pub fn current_line_text(&self) -> String {
        self.document.line_text(self.cursor_position().line)
    }

    /// The word under the cursor.
    pub fn word_under_cursor(&self) -> String {
        self.word_at(self.cursor_position())
    }

    /// The word around `at`.
    pub fn word_at(&self, at: Coordinates) -> String {
        let at = self.document.sanitize(at);
        words::word_at(&self.document, at, self.config.colorizer_enabled)
    }

    /// Description of the known identifier under `at`, if any.
    pub fn identifier_description_at(&self, at: Coordinates) -> Option<&str> {
        let word = self.word_at(at);
        if word.is_empty() {
            return None;
        }
        self.language.identifier_description(&word)
    }

    /// Number of lines.
    pub fn total_lines(&self) -> usize {
        self.document.line_count()
    }

    /// Number of characters on `line`.
    pub fn line_character_count(&self, line: usize) -> usize {
        self.document.line_character_count(line)
    }

    // ---- cursor and selection -------------------------------------------------------------

    /// The cursor, clamped into the document.
    pub fn cursor_position(&self) -> Coordinates {
        self.document.sanitize(self.state.cursor)
    }

    /// Move the cursor without touching the selection.
    pub fn set_cursor_position(&mut self, position: Coordinates) {
        let position = self.document.sanitize(position);
        self.move_cursor_to(position);
    }

    pub(crate) fn move_cursor_to(&mut self, position: Coordinates) {
        if self.state.cursor != position {
            self.state.cursor = position;
            self.cursor_position_changed = true;
            self.scroll_to_cursor = true;
        }
    }

    /// Selection start.
    pub fn selection_start(&self) -> Coordinates {
        self.state.selection_start
    }

    /// Selection end.
    pub fn selection_end(&self) -> Coordinates {
        self.state.selection_end
    }

    /// Set the selection start, swapping ends if needed.
    pub fn set_selection_start(&mut self, position: Coordinates) {
        self.state.selection_start = self.document.sanitize(position);
        self.order_selection();
    }

    /// Set the selection end, swapping ends if needed.
    pub fn set_selection_end(&mut self, position: Coordinates) {
        self.state.selection_end = self.document.sanitize(position);
        self.order_selection();
    }

    fn order_selection(&mut self) {
        if self.state.selection_start > self.state.selection_end {
            std::mem::swap(
                &mut self.state.selection_start,
                &mut self.state.selection_end,
            );
        }
    }

    /// Set the selection, snapping its ends according to `mode`.
    pub fn set_selection(&mut self, start: Coordinates, end: Coordinates, mode: SelectionMode) {
        let old = (self.state.selection_start, self.state.selection_end);

        self.state.selection_start = self.document.sanitize(start);
        self.state.selection_end = self.document.sanitize(end);
        self.order_selection();

        let colorized = self.config.colorizer_enabled;
        match mode {
            SelectionMode::Normal => {}
            SelectionMode::Word => {
                self.state.selection_start =
                    words::find_word_start(&self.document, self.state.selection_start, colorized);
                let end = self.state.selection_end;
                if !words::is_on_word_boundary(&self.document, end, colorized) {
                    let start = words::find_word_start(&self.document, end, colorized);
                    self.state.selection_end =
                        words::find_word_end(&self.document, start, colorized);
                }
            }
            SelectionMode::Line => {
                let line = self.state.selection_end.line;
                self.state.selection_start = Coordinates::new(self.state.selection_start.line, 0);
                self.state.selection_end =
                    Coordinates::new(line, self.document.line_max_column(line));
            }
        }
        // Snapping a column inside a tab can overshoot the other end.
        self.order_selection();

        if (self.state.selection_start, self.state.selection_end) != old {
            self.cursor_position_changed = true;
        }
    }

    /// Returns `true` if the selection is not empty.
    pub fn has_selection(&self) -> bool {
        self.state.selection_end > self.state.selection_start
    }

    /// Select the whole document.
    pub fn select_all(&mut self) {
        let end = Coordinates::new(self.document.line_count(), 0);
        self.set_selection(Coordinates::new(0, 0), end, SelectionMode::Normal);
    }

    /// Select the word under the cursor.
    pub fn select_word_under_cursor(&mut self) {
        let at = self.cursor_position();
        let colorized = self.config.colorizer_enabled;
        let start = words::find_word_start(&self.document, at, colorized);
        let end = words::find_word_end(&self.document, at, colorized);
        self.set_selection(start, end, SelectionMode::Normal);
    }

    /// The selection mode last chosen by mouse interaction.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    // ---- markers --------------------------------------------------------------------------

    /// Replace the error markers (zero-based line → message).
    pub fn set_error_markers(&mut self, markers: impl IntoIterator<Item = (usize, String)>) {
        self.error_markers.set(markers);
    }

    /// The error markers.
    pub fn error_markers(&self) -> &ErrorMarkers {
        &self.error_markers
    }

    /// Replace the breakpoints (zero-based lines).
    pub fn set_breakpoints(&mut self, lines: impl IntoIterator<Item = usize>) {
        self.breakpoints.set(lines);
    }

    /// The breakpoints.
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Forward queued structural events to the side tables.
    pub(crate) fn sync_line_events(&mut self) {
        for event in self.document.take_events() {
            self.error_markers.on_line_event(&event);
            self.breakpoints.on_line_event(&event);
        }
    }

    // ---- change tracking ------------------------------------------------------------------

    /// Start a new frame: clears the change flags.
    pub fn begin_frame(&mut self) {
        self.text_changed = false;
        self.cursor_position_changed = false;
    }

    /// Returns `true` if the text changed since [`Editor::begin_frame`].
    pub fn is_text_changed(&self) -> bool {
        self.text_changed
    }

    /// Returns `true` if the cursor or selection moved since [`Editor::begin_frame`].
    pub fn is_cursor_position_changed(&self) -> bool {
        self.cursor_position_changed
    }

    // ---- colorization ---------------------------------------------------------------------

    /// Widen the dirty range. `from` may be negative; `lines == None` means "to the end".
    pub(crate) fn colorize(&mut self, from: isize, lines: Option<usize>) {
        self.colorizer.mark(from, lines, self.document.line_count());
    }

    /// Run one bounded colorization step. Returns `true` if work was done.
    pub fn colorize_step(&mut self) -> bool {
        if !self.config.colorizer_enabled {
            return false;
        }
        self.colorizer.tick(&mut self.document, &self.language)
    }

    /// Colorize everything still pending.
    pub fn colorize_all(&mut self) {
        if self.config.colorizer_enabled {
            self.colorizer.run_to_completion(&mut self.document, &self.language);
        }
    }

    /// Returns `true` if colorization work is pending.
    pub fn is_colorizing(&self) -> bool {
        !self.colorizer.is_idle()
    }

    // ---- undo / redo ----------------------------------------------------------------------

    pub(crate) fn add_undo(&mut self, record: UndoRecord) {
        self.undo_log.add(record);
    }

    /// Returns `true` if an edit can be undone.
    pub fn can_undo(&self) -> bool {
        !self.config.read_only && self.undo_log.can_undo()
    }

    /// Returns `true` if an undone edit can be redone.
    pub fn can_redo(&self) -> bool {
        !self.config.read_only && self.undo_log.can_redo()
    }

    /// Undo up to `steps` edits.
    pub fn undo(&mut self, steps: usize) {
        for _ in 0..steps {
            if !self.can_undo() {
                break;
            }
            let Some(record) = self.undo_log.step_back() else {
                break;
            };
            tracing::debug!(added = record.added.len(), removed = record.removed.len(), "undo");
            self.revert(&record);
        }
    }

    /// Redo up to `steps` edits.
    pub fn redo(&mut self, steps: usize) {
        for _ in 0..steps {
            if !self.can_redo() {
                break;
            }
            let Some(record) = self.undo_log.step_forward() else {
                break;
            };
            tracing::debug!(added = record.added.len(), removed = record.removed.len(), "redo");
            self.replay(&record);
        }
    }

    fn revert(&mut self, record: &UndoRecord) {
        if !record.added.is_empty() {
            self.document.delete_range(record.added_start, record.added_end);
            self.colorize(
                record.added_start.line as isize - 1,
                Some(record.added_end.line - record.added_start.line + 2),
            );
        }

        if !record.removed.is_empty() {
            let mut at = record.removed_start;
            self.document.insert_text_at(&mut at, &record.removed);
            self.colorize(
                record.removed_start.line as isize - 1,
                Some(record.removed_end.line - record.removed_start.line + 2),
            );
        }

        self.restore(record.before);
    }

    fn replay(&mut self, record: &UndoRecord) {
        if !record.removed.is_empty() {
            self.document.delete_range(record.removed_start, record.removed_end);
            self.colorize(
                record.removed_start.line as isize - 1,
                Some(record.removed_end.line - record.removed_start.line + 1),
            );
        }

        if !record.added.is_empty() {
            let mut at = record.added_start;
            self.document.insert_text_at(&mut at, &record.added);
            self.colorize(
                record.added_start.line as isize - 1,
                Some(record.added_end.line - record.added_start.line + 1),
            );
        }

        self.restore(record.after);
    }

    fn restore(&mut self, state: EditorState) {
        self.sync_line_events();
        self.state = state;
        self.text_changed = true;
        self.cursor_position_changed = true;
        self.scroll_to_cursor = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor(text: &str) -> Editor {
        let mut editor = Editor::new();
        editor.set_text(text);
        editor
    }

    #[test]
    fn test_set_selection_orders_and_sanitizes() {
        let mut e = editor("hello\nworld");
        e.set_selection(Coordinates::new(9, 9), Coordinates::new(0, 2), SelectionMode::Normal);
        assert_eq!(e.selection_start(), Coordinates::new(0, 2));
        assert_eq!(e.selection_end(), Coordinates::new(1, 5));
        assert!(e.is_cursor_position_changed());
    }

    #[test]
    fn test_line_mode_selection() {
        let mut e = editor("one\ntwo three\nfour");
        e.set_selection(Coordinates::new(1, 4), Coordinates::new(1, 5), SelectionMode::Line);
        assert_eq!(e.selection_start(), Coordinates::new(1, 0));
        assert_eq!(e.selection_end(), Coordinates::new(1, 9));
    }

    #[test]
    fn test_word_mode_selection() {
        let mut e = editor("float alpha = 1;");
        e.colorize_all();
        e.set_selection(Coordinates::new(0, 7), Coordinates::new(0, 8), SelectionMode::Word);
        assert_eq!(e.selected_text(), "alpha");
    }

    #[test]
    fn test_select_all_and_text() {
        let mut e = editor("a\r\nbc\n");
        assert_eq!(e.text_lines(), vec!["a", "bc", ""]);
        e.select_all();
        assert_eq!(e.selected_text(), "a\nbc\n");
        assert_eq!(e.text(), "a\nbc\n");
    }

    #[test]
    fn test_tab_size_clamped() {
        let mut e = Editor::new();
        e.set_tab_size(100);
        assert_eq!(e.tab_size(), 32);
        assert_eq!(e.document().tab_size(), 32);
    }

    #[test]
    fn test_bulk_load_sanitizes_state_and_clears_history() {
        let mut e = editor("abcdef\nghi");
        e.set_cursor_position(Coordinates::new(1, 3));
        e.enter_character('x', false);
        assert!(e.can_undo());

        e.set_text("z");
        assert!(!e.can_undo());
        assert_eq!(e.cursor_position(), Coordinates::new(0, 1));
        assert!(!e.has_selection());
    }

    #[test]
    fn test_identifier_description_at() {
        let mut e = editor("x = saturate(y);");
        e.colorize_all();
        assert!(e.identifier_description_at(Coordinates::new(0, 6)).is_some());
        assert_eq!(e.identifier_description_at(Coordinates::new(0, 0)), None);
    }

    #[test]
    fn test_change_flags_reset_per_frame() {
        let mut e = editor("abc");
        assert!(e.is_text_changed());
        e.begin_frame();
        assert!(!e.is_text_changed());
        assert!(!e.is_cursor_position_changed());
        e.set_cursor_position(Coordinates::new(0, 2));
        assert!(e.is_cursor_position_changed());
    }
}
