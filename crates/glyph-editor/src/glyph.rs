//! Glyph and line storage units.

use glyph_editor_lang::SyntaxClass;

/// One byte of a line plus its classification.
///
/// Multi-byte characters occupy one glyph per byte: the lead byte followed by its continuation
/// bytes, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Raw byte.
    pub ch: u8,
    /// Token class assigned by the colorizer.
    pub class: SyntaxClass,
    /// Inside a single-line comment.
    pub is_comment: bool,
    /// Inside a block comment.
    pub is_multi_line_comment: bool,
    /// Inside a preprocessor line.
    pub is_preprocessor: bool,
}

impl Glyph {
    /// Create a glyph with the given class and no comment/preprocessor flags.
    pub const fn new(ch: u8, class: SyntaxClass) -> Self {
        Self {
            ch,
            class,
            is_comment: false,
            is_multi_line_comment: false,
            is_preprocessor: false,
        }
    }
}

/// One line of glyphs, without its line terminator.
pub type Line = Vec<Glyph>;

pub(crate) fn line_from_str(text: &str) -> Line {
    text.bytes()
        .filter(|&b| b != b'\r')
        .map(|b| Glyph::new(b, SyntaxClass::Default))
        .collect()
}
