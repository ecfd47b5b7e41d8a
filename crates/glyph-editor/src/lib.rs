#![warn(missing_docs)]
//! Glyph Editor - Embeddable Source Code Editor Engine
//!
//! # Overview
//!
//! `glyph-editor` is the document and editing engine of a source code editor widget. It owns the
//! text, the cursor and selection, the undo log and the syntax colorizer, and leaves windows,
//! fonts, clipboard and drawing to the host application.
//!
//! # Core Features
//!
//! - **Glyph Document Store**: lines of UTF-8 bytes, each carrying its syntax classification
//! - **Tab-aware Coordinates**: `(line, visual column)` positions mapped to byte indices
//! - **Selection State Machine**: normal, word and line selection modes with anchored extension
//! - **Undo/Redo Log**: one reversible record per edit, including line splits and merges
//! - **Incremental Colorizer**: comment/string sweep plus rule-based tokenizer, run in bounded
//!   chunks per frame
//! - **Headless Rendering**: positioned colored runs, whitespace markers, caret and selection
//!   rectangles for the host to paint
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Command Interface / Input Mapping          │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Editor (cursor, selection, edits, undo)    │  ← State Machine
//! ├─────────────────────────────────────────────┤
//! │  Colorizer / Render Frames                  │  ← Presentation
//! ├─────────────────────────────────────────────┤
//! │  Document (lines of glyphs, line events)    │  ← Text Storage
//! ├─────────────────────────────────────────────┤
//! │  glyph-editor-lang (language definitions)   │  ← Token Rules
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use glyph_editor::{Coordinates, Editor};
//!
//! let mut editor = Editor::new();
//! editor.set_text("float4 main() : SV_Target\n{\n}");
//!
//! editor.set_cursor_position(Coordinates::new(1, 1));
//! editor.enter_character('\n', false);
//! editor.insert_text("return 1;");
//! assert_eq!(editor.text_lines()[2], "return 1;");
//!
//! editor.undo(2);
//! assert_eq!(editor.text(), "float4 main() : SV_Target\n{\n}");
//! ```
//!
//! # Module Description
//!
//! - [`document`] - Line and glyph storage, coordinate mapping, line events
//! - [`markers`] - Error markers and breakpoints that follow line edits
//! - [`palette`] - Color palettes and glyph color resolution
//! - [`config`] - Editor settings
//! - [`commands`] - Unified command interface
//! - [`input`] - Keyboard and mouse mapping
//! - [`render`] - Headless render frames
//! - [`clipboard`] - Clipboard abstraction

pub mod clipboard;
mod colorizer;
pub mod commands;
pub mod config;
mod coordinates;
pub mod document;
mod editing;
mod editor;
mod glyph;
pub mod input;
pub mod markers;
mod movement;
pub mod palette;
pub mod render;
mod text;
mod undo;
mod words;

pub use clipboard::{Clipboard, MemoryClipboard};
pub use commands::{
    Command, CommandError, CommandResult, CursorCommand, EditCommand, HistoryCommand, ViewCommand,
};
pub use config::{ConfigError, EditorConfig, MAX_TAB_SIZE};
pub use coordinates::Coordinates;
pub use document::{Document, LineEvent};
pub use editor::{Editor, SelectionMode};
pub use glyph::{Glyph, Line};
pub use input::{Key, KeyInput, Modifiers, MouseInput};
pub use markers::{Breakpoints, ErrorMarkers, LineObserver};
pub use palette::{Color, Palette};
pub use render::{
    Caret, CurrentLine, MonospaceMeasure, Point, RenderFrame, RenderLine, TextMeasure, TextRun,
    Tooltip, Viewport, WhitespaceMarker,
};
pub use text::{is_utf8_continuation, next_tab_stop, utf8_char_length};
pub use undo::EditorState;

pub use glyph_editor_lang::{
    Identifier, LanguageDefinition, LanguageError, SyntaxClass, Token, TokenRule, Tokenizer,
};
