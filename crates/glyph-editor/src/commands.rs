//! Command Interface Layer
//!
//! Wraps the [`Editor`] operations in a single [`Command`] value so that a frontend can queue,
//! log or replay them.
//!
//! Unlike the direct methods, which treat editing a read-only editor as a programming error, the
//! command layer checks first and returns [`CommandError::ReadOnly`].
//!
//! # Example
//!
//! ```rust
//! use glyph_editor::{Command, CommandResult, CursorCommand, EditCommand, Editor};
//!
//! let mut editor = Editor::new();
//! editor
//!     .execute(Command::Edit(EditCommand::InsertText {
//!         text: "float4 color;".to_string(),
//!     }))
//!     .unwrap();
//!
//! let result = editor
//!     .execute(Command::Cursor(CursorCommand::MoveHome { select: true }))
//!     .unwrap();
//! assert_eq!(result, CommandResult::Position(glyph_editor::Coordinates::new(0, 0)));
//! assert_eq!(editor.selected_text(), "float4 color;");
//! ```

use crate::config::MAX_TAB_SIZE;
use crate::coordinates::Coordinates;
use crate::editor::{Editor, SelectionMode};
use thiserror::Error;

/// Text editing commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Replace the selection with `text`, as one undoable edit
    InsertText {
        /// Text to insert.
        text: String,
    },
    /// Type one character
    EnterCharacter {
        /// The character; `'\n'` splits the line, `'\t'` over a multi-line selection indents it.
        ch: char,
        /// Shift is held (outdents instead of indenting).
        shift: bool,
    },
    /// Delete the selection or the character after the cursor
    Delete,
    /// Delete the selection or the character before the cursor
    Backspace,
    /// Copy the selection (or the current line); returns the copied text
    Copy,
    /// Copy, then delete the selection; returns the copied text
    ///
    /// Degrades to [`EditCommand::Copy`] when the editor is read-only.
    Cut,
    /// Insert clipboard text
    Paste {
        /// Clipboard contents.
        text: String,
    },
    /// Replace the whole document
    SetText {
        /// New text; `\r` is dropped.
        text: String,
    },
    /// Replace the whole document, one entry per line
    SetTextLines {
        /// New lines.
        lines: Vec<String>,
    },
}

/// Cursor & selection commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorCommand {
    /// Move up
    MoveUp {
        /// Number of lines.
        amount: usize,
        /// Extend the selection.
        select: bool,
    },
    /// Move down
    MoveDown {
        /// Number of lines.
        amount: usize,
        /// Extend the selection.
        select: bool,
    },
    /// Move left
    MoveLeft {
        /// Number of characters (or words).
        amount: usize,
        /// Extend the selection.
        select: bool,
        /// Jump by words.
        word_mode: bool,
    },
    /// Move right
    MoveRight {
        /// Number of characters (or words).
        amount: usize,
        /// Extend the selection.
        select: bool,
        /// Jump by words.
        word_mode: bool,
    },
    /// Move to the start of the document
    MoveTop {
        /// Extend the selection.
        select: bool,
    },
    /// Move to the last line
    MoveBottom {
        /// Extend the selection.
        select: bool,
    },
    /// Move to the start of the line
    MoveHome {
        /// Extend the selection.
        select: bool,
    },
    /// Move to the end of the line
    MoveEnd {
        /// Extend the selection.
        select: bool,
    },
    /// Place the cursor (clamped into the document)
    SetCursorPosition {
        /// Target position.
        position: Coordinates,
    },
    /// Set the selection range
    SetSelection {
        /// Selection start position.
        start: Coordinates,
        /// Selection end position.
        end: Coordinates,
        /// Boundary snapping.
        mode: SelectionMode,
    },
    /// Select everything
    SelectAll,
    /// Select the word under the cursor
    SelectWordUnderCursor,
}

/// Undo/redo commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryCommand {
    /// Undo edits
    Undo {
        /// Maximum number of edits to undo.
        steps: usize,
    },
    /// Redo undone edits
    Redo {
        /// Maximum number of edits to redo.
        steps: usize,
    },
}

/// Settings and side tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Allow or forbid editing
    SetReadOnly {
        /// New state.
        read_only: bool,
    },
    /// Set the tab width
    SetTabSize {
        /// Columns per tab stop, at most 32.
        tab_size: usize,
    },
    /// Turn syntax coloring on or off
    SetColorizerEnabled {
        /// New state.
        enabled: bool,
    },
    /// Show or hide whitespace markers
    SetShowWhitespaces {
        /// New state.
        show: bool,
    },
    /// Switch between insert and overwrite typing
    SetOverwrite {
        /// New state.
        overwrite: bool,
    },
    /// Replace the error markers
    SetErrorMarkers {
        /// `(zero-based line, message)` pairs.
        markers: Vec<(usize, String)>,
    },
    /// Replace the breakpoints
    SetBreakpoints {
        /// Zero-based lines.
        lines: Vec<usize>,
    },
}

/// Editor command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Text editing commands
    Edit(EditCommand),
    /// Cursor & selection commands
    Cursor(CursorCommand),
    /// Undo/redo commands
    History(HistoryCommand),
    /// Settings and side tables
    View(ViewCommand),
}

impl Command {
    /// Returns `true` if the command changes the text.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Edit(
                EditCommand::InsertText { .. }
                    | EditCommand::EnterCharacter { .. }
                    | EditCommand::Delete
                    | EditCommand::Backspace
                    | EditCommand::Paste { .. }
            ) | Command::History(_)
        )
    }
}

/// Command execution result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Success, no return value
    Success,
    /// Success, returns text
    Text(String),
    /// Success, returns the cursor position
    Position(Coordinates),
}

/// Command error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("the editor is read-only")]
    /// A mutating command was issued while the editor is read-only
    ReadOnly,

    #[error("nothing to undo")]
    /// The undo log has no edit before the current position
    NothingToUndo,

    #[error("nothing to redo")]
    /// The undo log has no edit after the current position
    NothingToRedo,

    #[error("tab size {0} is out of range (0..={max})", max = MAX_TAB_SIZE)]
    /// The requested tab size is larger than 32
    TabSize(usize),
}

impl Editor {
    /// Execute one command.
    pub fn execute(&mut self, command: Command) -> Result<CommandResult, CommandError> {
        if self.config.read_only && command.is_mutating() {
            return Err(CommandError::ReadOnly);
        }

        match command {
            Command::Edit(edit_cmd) => Ok(self.execute_edit(edit_cmd)),
            Command::Cursor(cursor_cmd) => Ok(self.execute_cursor(cursor_cmd)),
            Command::History(history_cmd) => self.execute_history(history_cmd),
            Command::View(view_cmd) => self.execute_view(view_cmd),
        }
    }

    /// Execute commands in order, stopping at the first error.
    pub fn execute_batch(
        &mut self,
        commands: Vec<Command>,
    ) -> Result<Vec<CommandResult>, CommandError> {
        commands
            .into_iter()
            .map(|command| self.execute(command))
            .collect()
    }

    fn execute_edit(&mut self, command: EditCommand) -> CommandResult {
        match command {
            EditCommand::InsertText { text } | EditCommand::Paste { text } => {
                self.insert_text(&text);
            }
            EditCommand::EnterCharacter { ch, shift } => self.enter_character(ch, shift),
            EditCommand::Delete => self.delete(),
            EditCommand::Backspace => self.backspace(),
            EditCommand::Copy => return CommandResult::Text(self.copy_text()),
            EditCommand::Cut => {
                let text = self.copy_text();
                if !self.config.read_only {
                    self.cut_selection();
                }
                return CommandResult::Text(text);
            }
            EditCommand::SetText { text } => self.set_text(&text),
            EditCommand::SetTextLines { lines } => self.set_text_lines(&lines),
        }
        CommandResult::Success
    }

    fn execute_cursor(&mut self, command: CursorCommand) -> CommandResult {
        match command {
            CursorCommand::MoveUp { amount, select } => self.move_up(amount, select),
            CursorCommand::MoveDown { amount, select } => self.move_down(amount, select),
            CursorCommand::MoveLeft {
                amount,
                select,
                word_mode,
            } => self.move_left(amount, select, word_mode),
            CursorCommand::MoveRight {
                amount,
                select,
                word_mode,
            } => self.move_right(amount, select, word_mode),
            CursorCommand::MoveTop { select } => self.move_top(select),
            CursorCommand::MoveBottom { select } => self.move_bottom(select),
            CursorCommand::MoveHome { select } => self.move_home(select),
            CursorCommand::MoveEnd { select } => self.move_end(select),
            CursorCommand::SetCursorPosition { position } => self.set_cursor_position(position),
            CursorCommand::SetSelection { start, end, mode } => {
                self.set_selection(start, end, mode)
            }
            CursorCommand::SelectAll => self.select_all(),
            CursorCommand::SelectWordUnderCursor => self.select_word_under_cursor(),
        }
        CommandResult::Position(self.cursor_position())
    }

    fn execute_history(&mut self, command: HistoryCommand) -> Result<CommandResult, CommandError> {
        match command {
            HistoryCommand::Undo { steps } => {
                if !self.can_undo() {
                    return Err(CommandError::NothingToUndo);
                }
                self.undo(steps);
            }
            HistoryCommand::Redo { steps } => {
                if !self.can_redo() {
                    return Err(CommandError::NothingToRedo);
                }
                self.redo(steps);
            }
        }
        Ok(CommandResult::Position(self.cursor_position()))
    }

    fn execute_view(&mut self, command: ViewCommand) -> Result<CommandResult, CommandError> {
        match command {
            ViewCommand::SetReadOnly { read_only } => self.set_read_only(read_only),
            ViewCommand::SetTabSize { tab_size } => {
                if tab_size > MAX_TAB_SIZE {
                    return Err(CommandError::TabSize(tab_size));
                }
                self.set_tab_size(tab_size);
            }
            ViewCommand::SetColorizerEnabled { enabled } => self.set_colorizer_enabled(enabled),
            ViewCommand::SetShowWhitespaces { show } => self.set_show_whitespaces(show),
            ViewCommand::SetOverwrite { overwrite } => self.set_overwrite(overwrite),
            ViewCommand::SetErrorMarkers { markers } => self.set_error_markers(markers),
            ViewCommand::SetBreakpoints { lines } => self.set_breakpoints(lines),
        }
        Ok(CommandResult::Success)
    }
}
