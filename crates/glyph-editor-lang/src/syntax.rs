//! Syntax classes assigned to glyphs.

use serde::{Deserialize, Serialize};

/// Classification of a glyph, also used as an index into a color palette.
///
/// The first twelve variants are produced by the colorizer. The remaining ones never appear on a
/// glyph; they name UI elements so that one palette can carry every color the editor draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyntaxClass {
    /// Plain text.
    #[default]
    Default,
    /// Language keyword.
    Keyword,
    /// Numeric literal.
    Number,
    /// String literal.
    String,
    /// Character literal.
    CharLiteral,
    /// Operators and delimiters.
    Punctuation,
    /// Preprocessor directive.
    Preprocessor,
    /// Identifier with no special meaning.
    Identifier,
    /// Identifier from the language's known-identifier table.
    KnownIdentifier,
    /// Identifier from the language's preprocessor-identifier table.
    PreprocIdentifier,
    /// Single-line comment.
    Comment,
    /// Block comment.
    MultiLineComment,
    /// Editor background (UI only).
    Background,
    /// Caret (UI only).
    Cursor,
    /// Selection fill (UI only).
    Selection,
    /// Error marker line fill (UI only).
    ErrorMarker,
    /// Breakpoint line fill (UI only).
    Breakpoint,
    /// Line number gutter text (UI only).
    LineNumber,
    /// Current line fill while focused (UI only).
    CurrentLineFill,
    /// Current line fill while unfocused (UI only).
    CurrentLineFillInactive,
    /// Current line outline (UI only).
    CurrentLineEdge,
}

impl SyntaxClass {
    /// Number of variants (palette size).
    pub const COUNT: usize = 21;

    /// Every variant, in palette order.
    pub const ALL: [SyntaxClass; Self::COUNT] = [
        Self::Default,
        Self::Keyword,
        Self::Number,
        Self::String,
        Self::CharLiteral,
        Self::Punctuation,
        Self::Preprocessor,
        Self::Identifier,
        Self::KnownIdentifier,
        Self::PreprocIdentifier,
        Self::Comment,
        Self::MultiLineComment,
        Self::Background,
        Self::Cursor,
        Self::Selection,
        Self::ErrorMarker,
        Self::Breakpoint,
        Self::LineNumber,
        Self::CurrentLineFill,
        Self::CurrentLineFillInactive,
        Self::CurrentLineEdge,
    ];

    /// Palette index of this class.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for classes that only describe editor chrome, never text.
    pub fn is_ui_only(self) -> bool {
        self.index() >= Self::Background.index()
    }
}
