//! The language definition record.

use crate::error::LanguageError;
use crate::syntax::SyntaxClass;
use crate::tokenizer::{TokenRule, Tokenizer};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// A known identifier with a short human-readable description (shown as a tooltip).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identifier {
    /// Short description / declaration text.
    pub declaration: String,
}

impl Identifier {
    /// Create an identifier entry.
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            declaration: declaration.into(),
        }
    }
}

/// Declarative description of a language's lexical structure.
///
/// Case-insensitive languages compare identifiers in ASCII upper case, so their tables must list
/// names in upper case (the `with_*` builders normalize them for you).
#[derive(Clone)]
pub struct LanguageDefinition {
    /// Display name.
    pub name: String,
    /// Whether keyword/identifier lookup is case sensitive.
    pub case_sensitive: bool,
    /// Whether a new line copies the leading whitespace of the line it was split from.
    pub auto_indentation: bool,
    /// Block comment start marker (e.g. `/*`).
    pub comment_start: String,
    /// Block comment end marker (e.g. `*/`).
    pub comment_end: String,
    /// Single-line comment marker (e.g. `//`).
    pub single_line_comment: String,
    /// Character that opens a preprocessor line when it is the first non-blank character.
    pub preproc_char: u8,
    /// Keyword table.
    pub keywords: HashSet<String>,
    /// Known identifiers (built-in functions, types, ...).
    pub identifiers: HashMap<String, Identifier>,
    /// Identifiers recognized inside preprocessor lines.
    pub preproc_identifiers: HashMap<String, Identifier>,
    token_rules: Vec<TokenRule>,
    tokenizer: Option<Arc<dyn Tokenizer>>,
}

impl fmt::Debug for LanguageDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageDefinition")
            .field("name", &self.name)
            .field("case_sensitive", &self.case_sensitive)
            .field("auto_indentation", &self.auto_indentation)
            .field("comment_start", &self.comment_start)
            .field("comment_end", &self.comment_end)
            .field("single_line_comment", &self.single_line_comment)
            .field("preproc_char", &(self.preproc_char as char))
            .field("keywords", &self.keywords.len())
            .field("identifiers", &self.identifiers.len())
            .field("preproc_identifiers", &self.preproc_identifiers.len())
            .field("token_rules", &self.token_rules.len())
            .field("has_tokenizer", &self.tokenizer.is_some())
            .finish()
    }
}

impl Default for LanguageDefinition {
    fn default() -> Self {
        Self::new("Plain text")
    }
}

impl LanguageDefinition {
    /// Create an empty definition with C-style comment markers and `#` as preprocessor character.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            case_sensitive: true,
            auto_indentation: true,
            comment_start: "/*".to_string(),
            comment_end: "*/".to_string(),
            single_line_comment: "//".to_string(),
            preproc_char: b'#',
            keywords: HashSet::new(),
            identifiers: HashMap::new(),
            preproc_identifiers: HashMap::new(),
            token_rules: Vec::new(),
            tokenizer: None,
        }
    }

    /// Set case sensitivity. Turning it off upper-cases the existing tables.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        if !case_sensitive {
            self.keywords = self.keywords.drain().map(|k| k.to_ascii_uppercase()).collect();
            self.identifiers = self
                .identifiers
                .drain()
                .map(|(k, v)| (k.to_ascii_uppercase(), v))
                .collect();
            self.preproc_identifiers = self
                .preproc_identifiers
                .drain()
                .map(|(k, v)| (k.to_ascii_uppercase(), v))
                .collect();
        }
        self
    }

    /// Enable or disable auto-indentation.
    pub fn with_auto_indentation(mut self, auto_indentation: bool) -> Self {
        self.auto_indentation = auto_indentation;
        self
    }

    /// Set the block comment markers.
    pub fn with_block_comment(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.comment_start = start.into();
        self.comment_end = end.into();
        self
    }

    /// Set the single-line comment marker.
    pub fn with_single_line_comment(mut self, marker: impl Into<String>) -> Self {
        self.single_line_comment = marker.into();
        self
    }

    /// Set the preprocessor character.
    pub fn with_preproc_char(mut self, ch: char) -> Result<Self, LanguageError> {
        if !ch.is_ascii() {
            return Err(LanguageError::InvalidPreprocChar(ch));
        }
        self.preproc_char = ch as u8;
        Ok(self)
    }

    /// Add keywords.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for keyword in keywords {
            let keyword = self.normalize(keyword.into());
            self.keywords.insert(keyword);
        }
        self
    }

    /// Add known identifiers with their descriptions.
    pub fn with_identifiers<I, K, D>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: Into<String>,
    {
        for (name, declaration) in identifiers {
            let name = self.normalize(name.into());
            self.identifiers.insert(name, Identifier::new(declaration));
        }
        self
    }

    /// Add preprocessor identifiers with their descriptions.
    pub fn with_preproc_identifiers<I, K, D>(mut self, identifiers: I) -> Self
    where
        I: IntoIterator<Item = (K, D)>,
        K: Into<String>,
        D: Into<String>,
    {
        for (name, declaration) in identifiers {
            let name = self.normalize(name.into());
            self.preproc_identifiers
                .insert(name, Identifier::new(declaration));
        }
        self
    }

    /// Append a token rule (lower priority than every rule added before it).
    pub fn with_token_rule(
        mut self,
        pattern: &str,
        class: SyntaxClass,
    ) -> Result<Self, LanguageError> {
        self.token_rules.push(TokenRule::new(pattern, class)?);
        Ok(self)
    }

    /// Append already compiled token rules.
    pub fn with_compiled_rules(mut self, rules: impl IntoIterator<Item = TokenRule>) -> Self {
        self.token_rules.extend(rules);
        self
    }

    /// Install a custom tokenizer, tried before the token rules.
    pub fn with_tokenizer(mut self, tokenizer: impl Tokenizer + 'static) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    /// Ordered token rules.
    pub fn token_rules(&self) -> &[TokenRule] {
        &self.token_rules
    }

    /// The custom tokenizer, if any.
    pub fn tokenizer(&self) -> Option<&dyn Tokenizer> {
        self.tokenizer.as_deref()
    }

    /// Returns `true` if a custom tokenizer is installed.
    pub fn has_tokenizer(&self) -> bool {
        self.tokenizer.is_some()
    }

    /// Upgrade an identifier token to keyword / known identifier / preprocessor identifier.
    ///
    /// Inside a preprocessor line only the preprocessor-identifier table is consulted.
    pub fn classify_identifier(&self, word: &str, in_preprocessor: bool) -> SyntaxClass {
        let id = self.normalize(word.to_string());

        if in_preprocessor {
            if self.preproc_identifiers.contains_key(&id) {
                return SyntaxClass::PreprocIdentifier;
            }
            return SyntaxClass::Identifier;
        }

        if self.keywords.contains(&id) {
            SyntaxClass::Keyword
        } else if self.identifiers.contains_key(&id) {
            SyntaxClass::KnownIdentifier
        } else if self.preproc_identifiers.contains_key(&id) {
            SyntaxClass::PreprocIdentifier
        } else {
            SyntaxClass::Identifier
        }
    }

    /// Description of a known identifier, falling back to the preprocessor table.
    pub fn identifier_description(&self, word: &str) -> Option<&str> {
        let id = self.normalize(word.to_string());
        self.identifiers
            .get(&id)
            .or_else(|| self.preproc_identifiers.get(&id))
            .map(|ident| ident.declaration.as_str())
    }

    fn normalize(&self, word: String) -> String {
        if self.case_sensitive {
            word
        } else {
            word.to_ascii_uppercase()
        }
    }
}
