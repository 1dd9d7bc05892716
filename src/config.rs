use crate::i18n::{LanguageSet, LanguageStore};
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Code of the language active outside any scope
    pub default_language: String,

    /// Optional JSON catalog replacing the built-in texts
    pub catalog_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = std::env::var("DEFAULT_LANGUAGE")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|_| "en".to_string());
        if default_language.is_empty() {
            bail!("DEFAULT_LANGUAGE is set but empty");
        }

        Ok(Self {
            default_language,
            catalog_path: std::env::var("CATALOG_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty()),
        })
    }

    /// Create a store for `L` using the configured default language.
    pub fn store<L: LanguageSet>(&self) -> Result<LanguageStore<L>> {
        LanguageStore::from_code(&self.default_language).with_context(|| {
            format!(
                "DEFAULT_LANGUAGE '{}' is not a supported language",
                self.default_language
            )
        })
    }
}
