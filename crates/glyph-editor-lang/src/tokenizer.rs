//! Tokenization strategies: regex token rules and custom tokenizers.

use crate::error::LanguageError;
use crate::syntax::SyntaxClass;
use regex::bytes::Regex;
use std::ops::Range;

/// A token produced by a [`Tokenizer`], in byte offsets relative to the tokenizer input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Byte range of the token within the input slice.
    pub range: Range<usize>,
    /// Class stamped onto every glyph the token spans.
    pub class: SyntaxClass,
}

impl Token {
    /// Create a token.
    pub fn new(range: Range<usize>, class: SyntaxClass) -> Self {
        Self { range, class }
    }

    /// Returns `true` if the token is non-empty and lies within `input_len` bytes.
    pub fn is_well_formed(&self, input_len: usize) -> bool {
        self.range.start < self.range.end && self.range.end <= input_len
    }
}

/// A language-supplied tokenizer, tried before the regex rules at every scan position.
///
/// `input` starts at the current scan position and runs to the end of the line. Returning `None`
/// falls through to the language's [`TokenRule`]s. Empty or out-of-bounds tokens are rejected by
/// the colorizer and treated as "no match".
pub trait Tokenizer: Send + Sync {
    /// Try to match one token at the start of `input`.
    fn tokenize(&self, input: &[u8]) -> Option<Token>;
}

impl<F> Tokenizer for F
where
    F: Fn(&[u8]) -> Option<Token> + Send + Sync,
{
    fn tokenize(&self, input: &[u8]) -> Option<Token> {
        self(input)
    }
}

/// A single regex token rule.
///
/// The pattern is anchored: it only matches when the match begins exactly at the start of the
/// input, never at a later position.
#[derive(Debug, Clone)]
pub struct TokenRule {
    pattern: String,
    regex: Regex,
    class: SyntaxClass,
}

impl TokenRule {
    /// Compile a rule.
    pub fn new(pattern: &str, class: SyntaxClass) -> Result<Self, LanguageError> {
        let regex =
            Regex::new(&format!("^(?:{pattern})")).map_err(|err| LanguageError::RegexCompile {
                pattern: pattern.to_string(),
                message: err.to_string(),
            })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            class,
        })
    }

    /// The pattern as written, without the anchor.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The class assigned to matches of this rule.
    pub fn class(&self) -> SyntaxClass {
        self.class
    }

    /// Length in bytes of the match at the start of `input`, if any.
    pub fn match_len(&self, input: &[u8]) -> Option<usize> {
        self.regex.find(input).map(|m| m.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_only_matches_at_start() {
        let rule = TokenRule::new("[0-9]+", SyntaxClass::Number).unwrap();
        assert_eq!(rule.match_len(b"123abc"), Some(3));
        assert_eq!(rule.match_len(b"abc123"), None);
    }

    #[test]
    fn test_rule_alternation_is_anchored_as_a_whole() {
        let rule = TokenRule::new("a|b", SyntaxClass::Keyword).unwrap();
        assert_eq!(rule.match_len(b"xb"), None);
        assert_eq!(rule.match_len(b"bx"), Some(1));
    }

    #[test]
    fn test_invalid_pattern_reports_pattern() {
        let err = TokenRule::new("(", SyntaxClass::Default).unwrap_err();
        match err {
            LanguageError::RegexCompile { pattern, .. } => assert_eq!(pattern, "("),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_closure_tokenizer() {
        let tokenizer = |input: &[u8]| {
            (input.first() == Some(&b'@')).then(|| Token::new(0..1, SyntaxClass::Punctuation))
        };
        assert_eq!(
            tokenizer.tokenize(b"@x"),
            Some(Token::new(0..1, SyntaxClass::Punctuation))
        );
        assert_eq!(tokenizer.tokenize(b"x"), None);
        assert!(!Token::new(2..2, SyntaxClass::Default).is_well_formed(4));
        assert!(!Token::new(0..5, SyntaxClass::Default).is_well_formed(4));
    }
}
