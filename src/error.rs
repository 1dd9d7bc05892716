//! Error type shared by every localization operation.

use thiserror::Error;

/// Errors raised while configuring a store or building and resolving tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizationError {
    /// The store or the language set it was created with is invalid.
    #[error("invalid localization configuration: {0}")]
    Configuration(String),

    /// A table has no entry for a language of the set.
    #[error("missing translation for language '{language}' in {table}")]
    MissingTranslation { language: String, table: String },

    /// A table has an entry keyed by a code outside the language set.
    #[error("unknown language code '{code}' in {table}")]
    UnknownLanguage { code: String, table: String },

    /// A catalog has no entry with the requested key.
    #[error("no translation with key '{0}' in catalog")]
    MissingKey(String),

    /// A catalog document could not be read or parsed.
    #[error("failed to load catalog: {0}")]
    Catalog(String),
}

impl LocalizationError {
    /// Re-label the table named by a table-scoped error.
    ///
    /// Catalog loading uses this to report the entry key rather than the
    /// generic description produced by the constructors.
    pub fn in_table(self, name: impl Into<String>) -> Self {
        match self {
            Self::MissingTranslation { language, .. } => Self::MissingTranslation {
                language,
                table: name.into(),
            },
            Self::UnknownLanguage { code, .. } => Self::UnknownLanguage {
                code,
                table: name.into(),
            },
            other => other,
        }
    }
}
