//! Word boundary search.
//!
//! A word is a run of glyphs sharing one syntax class. With the colorizer disabled classes are
//! ignored and only whitespace separates words.

use crate::coordinates::Coordinates;
use crate::document::Document;
use crate::glyph::Glyph;
use crate::text::{is_space, is_utf8_continuation, utf8_char_length};

fn same_class(a: &Glyph, b: &Glyph, colorizer_enabled: bool) -> bool {
    !colorizer_enabled || a.class == b.class
}

/// Start of the word containing (or left of) `from`.
pub(crate) fn find_word_start(
    doc: &Document,
    from: Coordinates,
    colorizer_enabled: bool,
) -> Coordinates {
    let Some(line) = doc.line(from.line) else {
        return from;
    };
    let mut index = doc.index_of(from);
    if index >= line.len() {
        return from;
    }

    while index > 0 && is_space(line[index].ch) {
        index -= 1;
    }

    let anchor = line[index];
    while index > 0 {
        let ch = line[index].ch;
        if !is_utf8_continuation(ch) {
            if is_space(ch) {
                index += 1;
                break;
            }
            if !same_class(&anchor, &line[index - 1], colorizer_enabled) {
                break;
            }
        }
        index -= 1;
    }

    Coordinates::new(from.line, doc.column_for_char_index(from.line, index))
}

/// End of the word starting at `from`; a trailing whitespace run is included.
pub(crate) fn find_word_end(
    doc: &Document,
    from: Coordinates,
    colorizer_enabled: bool,
) -> Coordinates {
    let Some(line) = doc.line(from.line) else {
        return from;
    };
    let mut index = doc.index_of(from);
    if index >= line.len() {
        return from;
    }

    let anchor = line[index];
    let started_on_space = is_space(anchor.ch);
    while index < line.len() {
        let glyph = &line[index];
        if !same_class(&anchor, glyph, colorizer_enabled) {
            break;
        }
        if started_on_space != is_space(glyph.ch) {
            if is_space(glyph.ch) {
                while index < line.len() && is_space(line[index].ch) {
                    index += 1;
                }
            }
            break;
        }
        index += utf8_char_length(glyph.ch);
    }

    let index = index.min(line.len());
    Coordinates::new(from.line, doc.column_for_char_index(from.line, index))
}

/// First character of the next ASCII-alphanumeric run after the current one, or the end of the
/// document.
pub(crate) fn find_next_word(doc: &Document, from: Coordinates) -> Coordinates {
    if from.line >= doc.line_count() {
        return from;
    }

    let mut line_no = from.line;
    let mut index = doc.index_of(from);
    let mut skip = doc
        .line(line_no)
        .and_then(|line| line.get(index))
        .is_some_and(|g| g.ch.is_ascii_alphanumeric());

    loop {
        let Some(line) = doc.line(line_no) else {
            let last = doc.line_count() - 1;
            return Coordinates::new(last, doc.line_max_column(last));
        };

        if let Some(glyph) = line.get(index) {
            let is_word = glyph.ch.is_ascii_alphanumeric();
            if is_word && !skip {
                return Coordinates::new(line_no, doc.column_for_char_index(line_no, index));
            }
            if !is_word {
                skip = false;
            }
            index += 1;
        } else {
            index = 0;
            line_no += 1;
            skip = false;
        }
    }
}

/// Returns `true` when `at` sits between two words.
pub(crate) fn is_on_word_boundary(
    doc: &Document,
    at: Coordinates,
    colorizer_enabled: bool,
) -> bool {
    let Some(line) = doc.line(at.line) else {
        return true;
    };
    if at.column == 0 {
        return true;
    }
    let index = doc.index_of(at);
    if index >= line.len() || index == 0 {
        return true;
    }

    if colorizer_enabled {
        line[index].class != line[index - 1].class
    } else {
        is_space(line[index].ch) != is_space(line[index - 1].ch)
    }
}

/// Text of the word around `at`.
pub(crate) fn word_at(doc: &Document, at: Coordinates, colorizer_enabled: bool) -> String {
    let start = find_word_start(doc, at, colorizer_enabled);
    let end = find_word_end(doc, at, colorizer_enabled);
    if end <= start {
        return String::new();
    }
    doc.get_text(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_editor_lang::SyntaxClass;

    fn classify(doc: &mut Document, line: usize, spans: &[(std::ops::Range<usize>, SyntaxClass)]) {
        for (range, class) in spans {
            for glyph in &mut doc.lines_mut()[line][range.clone()] {
                glyph.class = *class;
            }
        }
    }

    #[test]
    fn test_word_bounds_without_colorizer() {
        let doc = Document::from_text("foo bar.baz  qux", 4);
        assert_eq!(
            find_word_start(&doc, Coordinates::new(0, 6), false),
            Coordinates::new(0, 4)
        );
        assert_eq!(
            find_word_end(&doc, Coordinates::new(0, 4), false),
            Coordinates::new(0, 13)
        );
        assert_eq!(word_at(&doc, Coordinates::new(0, 1), false), "foo ");
    }

    #[test]
    fn test_word_bounds_follow_classes() {
        let mut doc = Document::from_text("a.b", 4);
        classify(
            &mut doc,
            0,
            &[
                (0..1, SyntaxClass::Identifier),
                (1..2, SyntaxClass::Punctuation),
                (2..3, SyntaxClass::Identifier),
            ],
        );
        assert_eq!(
            find_word_start(&doc, Coordinates::new(0, 2), true),
            Coordinates::new(0, 2)
        );
        assert_eq!(
            find_word_end(&doc, Coordinates::new(0, 0), true),
            Coordinates::new(0, 1)
        );
        assert!(is_on_word_boundary(&doc, Coordinates::new(0, 1), true));
        assert!(!is_on_word_boundary(&doc, Coordinates::new(0, 1), false));
    }

    #[test]
    fn test_find_next_word() {
        let doc = Document::from_text("foo  (bar)\n  baz", 4);
        assert_eq!(find_next_word(&doc, Coordinates::new(0, 0)), Coordinates::new(0, 6));
        assert_eq!(find_next_word(&doc, Coordinates::new(0, 7)), Coordinates::new(1, 2));
        assert_eq!(find_next_word(&doc, Coordinates::new(1, 3)), Coordinates::new(1, 5));
    }
}
