#![warn(missing_docs)]
//! `glyph-editor-lang` - data-driven language definitions for `glyph-editor`.
//!
//! A [`LanguageDefinition`] is an immutable value describing how a language is colorized:
//!
//! - comment delimiters (block start/end and single-line marker) and the preprocessor character
//! - keyword, known-identifier and preprocessor-identifier tables
//! - an ordered list of [`TokenRule`]s (regex pattern + [`SyntaxClass`]), tried in priority order
//! - an optional custom [`Tokenizer`] strategy that takes precedence over the rules
//!
//! The crate does not know anything about documents or glyphs. The editor core consumes these
//! values; it never mutates them.
//!
//! # Example
//!
//! ```rust
//! use glyph_editor_lang::{LanguageDefinition, SyntaxClass};
//!
//! let lang = LanguageDefinition::new("Pascal")
//!     .with_case_sensitive(false)
//!     .with_keywords(["BEGIN", "END", "IF"])
//!     .with_token_rule(r"[a-zA-Z_][a-zA-Z0-9_]*", SyntaxClass::Identifier)
//!     .unwrap();
//!
//! assert_eq!(lang.classify_identifier("begin", false), SyntaxClass::Keyword);
//! assert_eq!(lang.classify_identifier("counter", false), SyntaxClass::Identifier);
//! ```

mod builtin;
mod definition;
mod error;
mod loader;
mod syntax;
mod tokenizer;

pub use definition::{Identifier, LanguageDefinition};
pub use error::LanguageError;
pub use syntax::SyntaxClass;
pub use tokenizer::{Token, TokenRule, Tokenizer};
