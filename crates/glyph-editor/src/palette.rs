//! Color palettes.
//!
//! Colors are packed `0xAABBGGRR` (ABGR), one per [`SyntaxClass`].

use crate::glyph::Glyph;
use glyph_editor_lang::SyntaxClass;
use serde::{Deserialize, Serialize};

/// A packed ABGR color.
pub type Color = u32;

/// One color per [`SyntaxClass`], in [`SyntaxClass::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: [Color; SyntaxClass::COUNT],
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}

impl Palette {
    /// Build a palette from raw colors.
    pub const fn from_colors(colors: [Color; SyntaxClass::COUNT]) -> Self {
        Self { colors }
    }

    /// The default dark palette.
    pub const fn dark() -> Self {
        Self::from_colors([
            0xffc6c8c5, 0xff6cc8da, 0xffb7be55, 0xff5f93de, 0xff74c6f0, 0xffffffff, 0xffc37fbc,
            0xffc6c8c5, 0xff6666cc, 0xffc040a0, 0xff68e8a0, 0xff68e8a0, 0xd0101010, 0xffe0e0e0,
            0x60b7be55, 0x800020ff, 0xff0000ff, 0xff707000, 0x40000000, 0x40808080, 0x40a0a0a0,
        ])
    }

    /// A light palette.
    pub const fn light() -> Self {
        Self::from_colors([
            0xff7f7f7f, 0xffff0c06, 0xff008000, 0xff2020a0, 0xff304070, 0xff000000, 0xff406060,
            0xff404040, 0xff606010, 0xffc040a0, 0xff205020, 0xff405020, 0xffffffff, 0xff000000,
            0x80600000, 0xa00010ff, 0x80f08000, 0xff505000, 0x40000000, 0x40808080, 0x40000000,
        ])
    }

    /// A blue, high-contrast palette.
    pub const fn retro_blue() -> Self {
        Self::from_colors([
            0xff00ffff, 0xffffff00, 0xff00ff00, 0xff808000, 0xff808000, 0xffffffff, 0xff008000,
            0xff00ffff, 0xffffffff, 0xffff00ff, 0xff808080, 0xff404040, 0xff800000, 0xff0080ff,
            0x80ffff00, 0xa00000ff, 0x80ff8000, 0xff808000, 0x40000000, 0x40808080, 0x40000000,
        ])
    }

    /// Color for `class`.
    pub fn color(&self, class: SyntaxClass) -> Color {
        self.colors[class.index()]
    }

    /// Override the color for `class`.
    pub fn set_color(&mut self, class: SyntaxClass, color: Color) {
        self.colors[class.index()] = color;
    }

    /// Color a glyph is drawn with.
    ///
    /// Comment flags win over the token class; preprocessor glyphs blend their class color with
    /// the preprocessor color.
    pub fn glyph_color(&self, glyph: &Glyph, colorizer_enabled: bool) -> Color {
        if !colorizer_enabled {
            return self.color(SyntaxClass::Default);
        }
        if glyph.is_comment {
            return self.color(SyntaxClass::Comment);
        }
        if glyph.is_multi_line_comment {
            return self.color(SyntaxClass::MultiLineComment);
        }

        let color = self.color(glyph.class);
        if glyph.is_preprocessor {
            blend(color, self.color(SyntaxClass::Preprocessor))
        } else {
            color
        }
    }
}

/// Per-channel average.
fn blend(a: Color, b: Color) -> Color {
    (0..4).fold(0, |acc, channel| {
        let shift = channel * 8;
        let ca = (a >> shift) & 0xff;
        let cb = (b >> shift) & 0xff;
        acc | (((ca + cb) / 2) << shift)
    })
}
