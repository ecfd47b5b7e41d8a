//! YAML loading for host-supplied language definitions.

use crate::definition::LanguageDefinition;
use crate::error::LanguageError;
use crate::syntax::SyntaxClass;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
/// Raw YAML language file.
struct LanguageFile {
    /// Display name.
    name: String,

    #[serde(default = "default_true")]
    /// Case sensitivity of keyword lookup.
    case_sensitive: bool,

    #[serde(default = "default_true")]
    /// Auto-indentation on newline.
    auto_indentation: bool,

    #[serde(default = "default_comment_start")]
    comment_start: String,

    #[serde(default = "default_comment_end")]
    comment_end: String,

    #[serde(default = "default_single_line_comment")]
    single_line_comment: String,

    #[serde(default = "default_preproc_char")]
    preproc_char: char,

    #[serde(default)]
    keywords: Vec<String>,

    #[serde(default)]
    /// Known identifiers: name -> description.
    identifiers: BTreeMap<String, String>,

    #[serde(default)]
    preproc_identifiers: BTreeMap<String, String>,

    #[serde(default)]
    /// Token rules in priority order.
    token_rules: Vec<RawTokenRule>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTokenRule {
    pattern: String,
    class: SyntaxClass,
}

fn default_true() -> bool {
    true
}

fn default_comment_start() -> String {
    "/*".to_string()
}

fn default_comment_end() -> String {
    "*/".to_string()
}

fn default_single_line_comment() -> String {
    "//".to_string()
}

fn default_preproc_char() -> char {
    '#'
}

impl LanguageDefinition {
    /// Parse a language definition from YAML and compile its token rules.
    ///
    /// ```yaml
    /// name: Lua
    /// case_sensitive: true
    /// comment_start: "--[["
    /// comment_end: "]]"
    /// single_line_comment: "--"
    /// keywords: [and, break, do, else, end]
    /// identifiers:
    ///   print: Prints its arguments.
    /// token_rules:
    ///   - { pattern: "[a-zA-Z_][a-zA-Z0-9_]*", class: identifier }
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LanguageError> {
        let file: LanguageFile = serde_yaml::from_str(yaml)?;

        let mut definition = LanguageDefinition::new(file.name)
            .with_auto_indentation(file.auto_indentation)
            .with_block_comment(file.comment_start, file.comment_end)
            .with_single_line_comment(file.single_line_comment)
            .with_preproc_char(file.preproc_char)?
            .with_case_sensitive(file.case_sensitive)
            .with_keywords(file.keywords)
            .with_identifiers(file.identifiers)
            .with_preproc_identifiers(file.preproc_identifiers);

        for rule in file.token_rules {
            definition = definition.with_token_rule(&rule.pattern, rule.class)?;
        }

        tracing::debug!(
            name = %definition.name,
            rules = definition.token_rules().len(),
            "loaded language definition"
        );
        Ok(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const LUA: &str = r#"
name: Lua
case_sensitive: true
comment_start: "--[["
comment_end: "]]"
single_line_comment: "--"
keywords: [and, break, do, else, end, if, then]
identifiers:
  print: Prints its arguments.
token_rules:
  - { pattern: '"(\\.|[^"])*"', class: string }
  - { pattern: "[0-9]+", class: number }
  - { pattern: "[a-zA-Z_][a-zA-Z0-9_]*", class: identifier }
"#;

    #[test]
    fn test_load_lua() {
        let lang = LanguageDefinition::from_yaml_str(LUA).unwrap();
        assert_eq!(lang.name, "Lua");
        assert_eq!(lang.comment_start, "--[[");
        assert_eq!(lang.single_line_comment, "--");
        assert_eq!(lang.preproc_char, b'#');
        assert_eq!(lang.token_rules().len(), 3);
        assert_eq!(lang.token_rules()[1].class(), SyntaxClass::Number);
        assert_eq!(lang.classify_identifier("then", false), SyntaxClass::Keyword);
        assert_eq!(lang.identifier_description("print"), Some("Prints its arguments."));
    }

    #[test]
    fn test_case_insensitive_tables_are_upper_cased() {
        let yaml = "name: Pascal\ncase_sensitive: false\nkeywords: [begin, end]\n";
        let lang = LanguageDefinition::from_yaml_str(yaml).unwrap();
        assert!(lang.keywords.contains("BEGIN"));
        assert_eq!(lang.classify_identifier("Begin", false), SyntaxClass::Keyword);
    }

    #[test]
    fn test_bad_regex_is_reported() {
        let yaml = "name: Broken\ntoken_rules:\n  - { pattern: \"[a-\", class: number }\n";
        let err = LanguageDefinition::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(err, LanguageError::RegexCompile { .. }));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = LanguageDefinition::from_yaml_str("name: X\ncolour: red\n").unwrap_err();
        assert!(matches!(err, LanguageError::Yaml(_)));
    }

    #[test]
    fn test_non_ascii_preproc_char() {
        let err = LanguageDefinition::from_yaml_str("name: X\npreproc_char: \"§\"\n").unwrap_err();
        assert!(matches!(err, LanguageError::InvalidPreprocChar('§')));
    }
}
