use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building or loading a [`LanguageDefinition`](crate::LanguageDefinition).
pub enum LanguageError {
    #[error("YAML parse error: {0}")]
    /// YAML parsing failed.
    Yaml(#[from] serde_yaml::Error),

    #[error("regex compile error for pattern '{pattern}': {message}")]
    /// A token rule pattern failed to compile.
    RegexCompile {
        /// The pattern as written in the definition.
        pattern: String,
        /// The compiler error message.
        message: String,
    },

    #[error("preprocessor character must be a single ASCII character, got '{0}'")]
    /// The preprocessor marker is not representable as one byte.
    InvalidPreprocChar(char),
}
