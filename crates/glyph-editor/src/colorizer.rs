//! Incremental lexical colorizer.
//!
//! Two phases run on every [`Colorizer::tick`]:
//!
//! 1. **Comment sweep** (only after an edit): one pass over the whole document that stamps each
//!    glyph's `is_comment`, `is_multi_line_comment` and `is_preprocessor` flags, tracking string
//!    literals, single-line comments, block comments and preprocessor lines.
//! 2. **Tokenization** of a bounded chunk of the dirty line range: every glyph gets a
//!    [`SyntaxClass`] from the language's custom tokenizer or, failing that, its first matching
//!    token rule. Identifiers are then upgraded through the keyword/identifier tables.
//!
//! Large documents are therefore colored over several ticks.

use crate::document::Document;
use crate::glyph::{Glyph, Line};
use crate::text::{is_space, utf8_char_length};
use glyph_editor_lang::{LanguageDefinition, SyntaxClass};
use std::ops::Range;

/// Lines tokenized per tick when the language supplies a custom tokenizer.
pub const TOKENIZER_CHUNK_LINES: usize = 10;
/// Lines tokenized per tick on the regex rule path.
pub const RULES_CHUNK_LINES: usize = 10_000;

#[derive(Debug, Clone)]
pub(crate) struct Colorizer {
    /// `usize::MAX` when no range is pending.
    range_min: usize,
    range_max: usize,
    check_comments: bool,
}

impl Default for Colorizer {
    fn default() -> Self {
        Self {
            range_min: 0,
            range_max: 0,
            check_comments: true,
        }
    }
}

impl Colorizer {
    /// Widen the dirty range by `line_count` lines from `from_line` (`None` = to the end) and
    /// request a comment sweep.
    pub(crate) fn mark(&mut self, from_line: isize, line_count: Option<usize>, total_lines: usize) {
        let total = total_lines as isize;
        let to = match line_count {
            None => total,
            Some(count) => total.min(from_line.saturating_add(count as isize)),
        };

        let from = from_line.max(0) as usize;
        let to = to.max(0) as usize;
        self.range_min = self.range_min.min(from);
        self.range_max = self.range_max.max(to).max(self.range_min);
        self.check_comments = true;
    }

    /// Mark the whole document.
    pub(crate) fn mark_all(&mut self, total_lines: usize) {
        self.mark(0, None, total_lines);
    }

    pub(crate) fn dirty_range(&self) -> Option<Range<usize>> {
        (self.range_min < self.range_max).then_some(self.range_min..self.range_max)
    }

    pub(crate) fn is_idle(&self) -> bool {
        !self.check_comments && self.dirty_range().is_none()
    }

    /// Run one bounded step. Returns `true` if any work was done.
    pub(crate) fn tick(&mut self, doc: &mut Document, lang: &LanguageDefinition) -> bool {
        let mut worked = false;

        if self.check_comments {
            comment_sweep(doc.lines_mut(), lang);
            self.check_comments = false;
            worked = true;
        }

        if let Some(range) = self.dirty_range() {
            let chunk = if lang.has_tokenizer() {
                TOKENIZER_CHUNK_LINES
            } else {
                RULES_CHUNK_LINES
            };
            let to = range.start.saturating_add(chunk).min(range.end);
            colorize_range(doc.lines_mut(), lang, range.start..to);
            self.range_min = to;

            tracing::debug!(
                from = range.start,
                to,
                remaining = range.end - to,
                "colorized chunk"
            );

            if self.range_min == self.range_max {
                self.range_min = usize::MAX;
                self.range_max = 0;
            }
            worked = true;
        }

        worked
    }

    /// Tick until nothing is pending.
    pub(crate) fn run_to_completion(&mut self, doc: &mut Document, lang: &LanguageDefinition) {
        while self.tick(doc, lang) {}
    }
}

fn matches_at(line: &Line, at: usize, pattern: &[u8]) -> bool {
    !pattern.is_empty()
        && at + pattern.len() <= line.len()
        && line[at..at + pattern.len()]
            .iter()
            .zip(pattern)
            .all(|(g, &b)| g.ch == b)
}

fn stamp(glyph: &mut Glyph, multi_line_comment: bool, comment: bool) {
    glyph.is_multi_line_comment = multi_line_comment;
    glyph.is_comment = comment;
}

/// Whole-document scan for block comments, single-line comments, strings and preprocessor lines.
pub(crate) fn comment_sweep(lines: &mut [Line], lang: &LanguageDefinition) {
    let comment_start = lang.comment_start.as_bytes();
    let comment_end = lang.comment_end.as_bytes();
    let single_line = lang.single_line_comment.as_bytes();
    let preproc_char = lang.preproc_char;

    // Position of the currently open block comment.
    let mut block_start: Option<(usize, usize)> = None;
    let mut within_string = false;
    let mut within_single_line = false;
    let mut within_preproc = false;
    let mut first_char = true;
    let mut continued = false;

    for (line_no, line) in lines.iter_mut().enumerate() {
        if !continued {
            within_single_line = false;
            within_preproc = false;
            first_char = true;
        }
        continued = line.last().is_some_and(|g| g.ch == b'\\');

        let in_block = |block_start: Option<(usize, usize)>, index: usize| {
            block_start.is_some_and(|(l, i)| l < line_no || (l == line_no && i <= index))
        };

        let len = line.len();
        let mut i = 0;
        while i < len {
            let c = line[i].ch;
            if c != preproc_char && !is_space(c) {
                first_char = false;
            }

            if within_string {
                let in_comment = in_block(block_start, i);
                stamp(&mut line[i], in_comment, false);

                if c == b'"' {
                    if i + 1 < len && line[i + 1].ch == b'"' {
                        i += 1;
                        stamp(&mut line[i], in_comment, false);
                    } else {
                        within_string = false;
                    }
                } else if c == b'\\' {
                    i += 1;
                    if i < len {
                        stamp(&mut line[i], in_comment, false);
                    }
                }
            } else {
                if first_char && c == preproc_char {
                    within_preproc = true;
                }

                if c == b'"' && !within_single_line {
                    within_string = true;
                    let in_comment = in_block(block_start, i);
                    stamp(&mut line[i], in_comment, false);
                } else {
                    if matches_at(line, i, single_line) {
                        within_single_line = true;
                    } else if !within_single_line && matches_at(line, i, comment_start) {
                        block_start = Some((line_no, i));
                    }

                    let in_comment = in_block(block_start, i);
                    stamp(&mut line[i], in_comment, within_single_line);

                    if !comment_end.is_empty()
                        && i + 1 >= comment_end.len()
                        && matches_at(line, i + 1 - comment_end.len(), comment_end)
                    {
                        block_start = None;
                    }
                }
            }

            line[i.min(len - 1)].is_preprocessor = within_preproc;

            // Continuation bytes share their lead byte's flags.
            let lead = line[i.min(len - 1)];
            let next = (i + utf8_char_length(c)).min(len);
            for glyph in &mut line[(i + 1).min(next)..next] {
                glyph.is_comment = lead.is_comment;
                glyph.is_multi_line_comment = lead.is_multi_line_comment;
                glyph.is_preprocessor = lead.is_preprocessor;
            }
            i = next.max(i + 1);
        }
    }

    tracing::trace!(lines = lines.len(), "comment sweep");
}

/// Assign token classes to lines `range` (clamped to the document).
pub(crate) fn colorize_range(lines: &mut [Line], lang: &LanguageDefinition, range: Range<usize>) {
    let end = range.end.min(lines.len());
    let mut buffer: Vec<u8> = Vec::new();

    for line in lines.iter_mut().take(end).skip(range.start) {
        if line.is_empty() {
            continue;
        }

        buffer.clear();
        for glyph in line.iter_mut() {
            buffer.push(glyph.ch);
            glyph.class = SyntaxClass::Default;
        }

        let mut first = 0;
        while first < buffer.len() {
            let input = &buffer[first..];
            match next_token(lang, input) {
                None => first += utf8_char_length(buffer[first]),
                Some((token, mut class)) => {
                    let start = first + token.start;
                    let stop = first + token.end;

                    if class == SyntaxClass::Identifier {
                        let word = String::from_utf8_lossy(&buffer[start..stop]);
                        class = lang.classify_identifier(&word, line[first].is_preprocessor);
                    }

                    for glyph in &mut line[start..stop] {
                        glyph.class = class;
                    }
                    first = stop;
                }
            }
        }
    }
}

/// Custom tokenizer first, then the ordered rules. Empty or out-of-bounds matches count as no
/// match.
fn next_token(lang: &LanguageDefinition, input: &[u8]) -> Option<(Range<usize>, SyntaxClass)> {
    if let Some(tokenizer) = lang.tokenizer()
        && let Some(token) = tokenizer.tokenize(input)
    {
        if token.is_well_formed(input.len()) {
            return Some((token.range, token.class));
        }
        tracing::warn!(
            start = token.range.start,
            end = token.range.end,
            input_len = input.len(),
            "custom tokenizer returned a malformed token; ignoring it"
        );
    }

    lang.token_rules().iter().find_map(|rule| {
        rule.match_len(input)
            .filter(|&len| len > 0)
            .map(|len| (0..len, rule.class()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyph_editor_lang::Token;
    use pretty_assertions::assert_eq;

    fn classes(doc: &Document, line: usize) -> Vec<SyntaxClass> {
        doc.line(line).map_or_else(Vec::new, |l| l.iter().map(|g| g.class).collect())
    }

    fn flags(doc: &Document, line: usize) -> String {
        doc.line(line).map_or_else(String::new, |l| {
            l.iter()
                .map(|g| match (g.is_comment, g.is_multi_line_comment, g.is_preprocessor) {
                    (true, _, _) => 'c',
                    (_, true, _) => 'm',
                    (_, _, true) => 'p',
                    _ => '.',
                })
                .collect()
        })
    }

    fn colorize(text: &str, lang: &LanguageDefinition) -> Document {
        let mut doc = Document::from_text(text, 4);
        let mut colorizer = Colorizer::default();
        colorizer.mark_all(doc.line_count());
        colorizer.run_to_completion(&mut doc, lang);
        doc
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let doc = colorize("a /* b\nc */ d", &LanguageDefinition::glsl());
        assert_eq!(flags(&doc, 0), "..mmmm");
        assert_eq!(flags(&doc, 1), "mmmm..");
    }

    #[test]
    fn test_single_line_comment_and_quote() {
        let doc = colorize("x // \"y\nz", &LanguageDefinition::glsl());
        assert_eq!(flags(&doc, 0), "..ccccc");
        // the quote inside the comment must not open a string that swallows the next line
        assert_eq!(flags(&doc, 1), ".");
    }

    #[test]
    fn test_string_hides_comment_markers() {
        let doc = colorize("s = \"/* no\"; t", &LanguageDefinition::glsl());
        assert!(flags(&doc, 0).chars().all(|f| f == '.'));
    }

    #[test]
    fn test_preprocessor_line_and_continuation() {
        let doc = colorize("  #define X \\\n  1\ny", &LanguageDefinition::hlsl());
        assert_eq!(flags(&doc, 0), "ppppppppppppp");
        assert_eq!(flags(&doc, 1), "ppp");
        assert_eq!(flags(&doc, 2), ".");
        assert_eq!(classes(&doc, 0)[0], SyntaxClass::Preprocessor);
    }

    #[test]
    fn test_case_insensitive_keywords() {
        let lang = LanguageDefinition::new("test")
            .with_case_sensitive(false)
            .with_keywords(["IF"])
            .with_token_rule(r"[a-zA-Z_][a-zA-Z0-9_]*", SyntaxClass::Identifier)
            .unwrap()
            .with_token_rule(r"[()]", SyntaxClass::Punctuation)
            .unwrap();
        let doc = colorize("if (x)", &lang);
        use SyntaxClass::*;
        assert_eq!(
            classes(&doc, 0),
            vec![Keyword, Keyword, Default, Punctuation, Identifier, Punctuation]
        );
    }

    #[test]
    fn test_hlsl_tokens() {
        let doc = colorize("float4 x = saturate(1.5f);", &LanguageDefinition::hlsl());
        let c = classes(&doc, 0);
        assert_eq!(c[0], SyntaxClass::Keyword);
        assert_eq!(c[7], SyntaxClass::Identifier);
        assert_eq!(c[9], SyntaxClass::Punctuation);
        assert_eq!(c[11], SyntaxClass::KnownIdentifier);
        assert_eq!(c[20], SyntaxClass::Number);
    }

    #[test]
    fn test_malformed_custom_token_falls_through() {
        let lang = LanguageDefinition::new("test")
            .with_tokenizer(|input: &[u8]| match input.first() {
                Some(b'!') => Some(Token::new(0..0, SyntaxClass::Keyword)),
                Some(b'?') => Some(Token::new(0..99, SyntaxClass::Keyword)),
                Some(b'@') => Some(Token::new(0..1, SyntaxClass::Preprocessor)),
                _ => None,
            })
            .with_token_rule(r"[!?]", SyntaxClass::Punctuation)
            .unwrap();
        let doc = colorize("!?@x", &lang);
        use SyntaxClass::*;
        assert_eq!(classes(&doc, 0), vec![Punctuation, Punctuation, Preprocessor, Default]);
    }

    #[test]
    fn test_multibyte_unmatched_advances_whole_character() {
        let doc = colorize("€1", &LanguageDefinition::glsl());
        use SyntaxClass::*;
        assert_eq!(classes(&doc, 0), vec![Default, Default, Default, Number]);
    }

    #[test]
    fn test_colorization_is_idempotent() {
        let lang = LanguageDefinition::hlsl();
        let mut doc = Document::from_text("/* c */ float a = 1;\n#if X\n\"s\" // t", 4);
        let mut colorizer = Colorizer::default();
        colorizer.mark_all(doc.line_count());
        colorizer.run_to_completion(&mut doc, &lang);
        let first = doc.lines().to_vec();

        colorizer.mark_all(doc.line_count());
        colorizer.run_to_completion(&mut doc, &lang);
        assert_eq!(doc.lines(), first.as_slice());
    }

    #[test]
    fn test_chunking_with_custom_tokenizer() {
        let lang = LanguageDefinition::new("test")
            .with_tokenizer(|input: &[u8]| Some(Token::new(0..input.len(), SyntaxClass::String)));
        let text = vec!["x"; 25].join("\n");
        let mut doc = Document::from_text(&text, 4);
        let mut colorizer = Colorizer::default();
        colorizer.mark_all(doc.line_count());

        assert!(colorizer.tick(&mut doc, &lang));
        assert_eq!(colorizer.dirty_range(), Some(10..25));
        assert_eq!(classes(&doc, 9), vec![SyntaxClass::String]);
        assert_eq!(classes(&doc, 10), vec![SyntaxClass::Default]);

        colorizer.run_to_completion(&mut doc, &lang);
        assert!(colorizer.is_idle());
        assert_eq!(classes(&doc, 24), vec![SyntaxClass::String]);
    }

    #[test]
    fn test_mark_clamps_and_widens() {
        let mut colorizer = Colorizer::default();
        colorizer.tick(&mut Document::new(4), &LanguageDefinition::default());
        assert!(colorizer.dirty_range().is_none());

        colorizer.mark(-1, Some(3), 100);
        assert_eq!(colorizer.dirty_range(), Some(0..2));
        colorizer.mark(50, Some(3), 100);
        assert_eq!(colorizer.dirty_range(), Some(0..53));
        colorizer.mark(98, Some(10), 100);
        assert_eq!(colorizer.dirty_range(), Some(0..100));
    }
}
