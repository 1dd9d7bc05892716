//! Language registry: validated view over a language set.
//!
//! A [`LanguageSet`] is declared at compile time, but nothing in the type
//! system stops an implementation from being empty, repeating a code or
//! listing members out of order. The registry checks those invariants once,
//! when a store is created, so the rest of the crate can rely on them.
//! Codes themselves are opaque: any non-empty token is accepted.

use crate::error::LocalizationError;
use crate::i18n::LanguageSet;
use std::collections::HashSet;

/// Validated registry of the members of a language set.
#[derive(Debug, Clone, Copy)]
pub struct LanguageRegistry<L: LanguageSet> {
    languages: &'static [L],
}

impl<L: LanguageSet> LanguageRegistry<L> {
    /// Validate `L` and build its registry.
    ///
    /// # Returns
    /// * `Ok(LanguageRegistry)` if the set is non-empty, every code is
    ///   non-empty and unique, and `index` agrees with the order of `L::ALL`
    /// * `Err(LocalizationError::Configuration)` describing the first problem
    pub fn load() -> Result<Self, LocalizationError> {
        validate(L::ALL)?;
        Ok(Self { languages: L::ALL })
    }

    /// Get a language by its code.
    pub fn get_by_code(&self, code: &str) -> Option<L> {
        self.languages
            .iter()
            .copied()
            .find(|language| language.code() == code)
    }

    /// Get all languages of the set, in declaration order.
    pub fn list_all(&self) -> &'static [L] {
        self.languages
    }

    /// Get every code of the set, in declaration order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.languages.iter().map(|language| language.code()).collect()
    }

    /// Check whether `language` is a member of the set.
    pub fn contains(&self, language: L) -> bool {
        self.languages.contains(&language)
    }

    /// Check whether a code names a member of the set.
    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }

    /// Number of languages in the set.
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    /// Always `false` for a loaded registry; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Check the invariants of a language list.
pub(crate) fn validate<L: LanguageSet>(languages: &[L]) -> Result<(), LocalizationError> {
    if languages.is_empty() {
        return Err(LocalizationError::Configuration(
            "language set is empty".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(languages.len());
    for (position, language) in languages.iter().enumerate() {
        let code = language.code();

        if code.is_empty() {
            return Err(LocalizationError::Configuration(format!(
                "empty language code for {:?}",
                language
            )));
        }

        if !seen.insert(code) {
            return Err(LocalizationError::Configuration(format!(
                "duplicate language code '{}'",
                code
            )));
        }

        if language.index() != position {
            return Err(LocalizationError::Configuration(format!(
                "{:?} reports index {} but is listed at position {}",
                language,
                language.index(),
                position
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::language_set! {
        enum Language {
            Norwegian => "nb",
            English => "en",
            Brazilian => "pt-BR",
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Empty {}

    impl LanguageSet for Empty {
        const ALL: &'static [Self] = &[];

        fn code(self) -> &'static str {
            match self {}
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Duplicated {
        British,
        American,
    }

    impl LanguageSet for Duplicated {
        const ALL: &'static [Self] = &[Duplicated::British, Duplicated::American];

        fn code(self) -> &'static str {
            "en"
        }
    }

    crate::language_set! {
        enum Posix {
            English => "en_US",
            Norwegian => "nb_NO",
        }
    }

    crate::language_set! {
        enum Named {
            English => "english",
            Norwegian => "norsk",
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Blank {
        Unnamed,
    }

    impl LanguageSet for Blank {
        const ALL: &'static [Self] = &[Blank::Unnamed];

        fn code(self) -> &'static str {
            ""
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Misindexed {
        English,
        Spanish,
    }

    impl LanguageSet for Misindexed {
        const ALL: &'static [Self] = &[Misindexed::English, Misindexed::Spanish];

        fn code(self) -> &'static str {
            match self {
                Misindexed::English => "en",
                Misindexed::Spanish => "es",
            }
        }

        fn index(self) -> usize {
            0
        }
    }

    // ==================== Load Tests ====================

    #[test]
    fn test_load_valid_set() {
        let registry = LanguageRegistry::<Language>::load().expect("Should succeed");
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_load_empty_set() {
        let result = LanguageRegistry::<Empty>::load();
        assert!(matches!(result, Err(LocalizationError::Configuration(ref m)) if m.contains("empty")));
    }

    #[test]
    fn test_load_duplicate_codes() {
        let result = LanguageRegistry::<Duplicated>::load();
        assert!(
            matches!(result, Err(LocalizationError::Configuration(ref m)) if m.contains("duplicate"))
        );
    }

    #[test]
    fn test_load_accepts_opaque_codes() {
        let posix = LanguageRegistry::<Posix>::load().expect("Should succeed");
        assert_eq!(posix.get_by_code("en_US"), Some(Posix::English));

        let named = LanguageRegistry::<Named>::load().expect("Should succeed");
        assert_eq!(named.codes(), vec!["english", "norsk"]);
        assert_eq!(named.get_by_code("norsk"), Some(Named::Norwegian));
    }

    #[test]
    fn test_load_empty_code() {
        let result = LanguageRegistry::<Blank>::load();
        assert!(
            matches!(result, Err(LocalizationError::Configuration(ref m)) if m.contains("empty language code"))
        );
    }

    #[test]
    fn test_load_inconsistent_index() {
        let result = LanguageRegistry::<Misindexed>::load();
        assert!(
            matches!(result, Err(LocalizationError::Configuration(ref m)) if m.contains("index"))
        );
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_by_code() {
        let registry = LanguageRegistry::<Language>::load().unwrap();
        assert_eq!(registry.get_by_code("nb"), Some(Language::Norwegian));
        assert_eq!(registry.get_by_code("pt-BR"), Some(Language::Brazilian));
        assert_eq!(registry.get_by_code("fr"), None);
    }

    #[test]
    fn test_list_all_and_codes() {
        let registry = LanguageRegistry::<Language>::load().unwrap();
        assert_eq!(registry.list_all(), Language::ALL);
        assert_eq!(registry.codes(), vec!["nb", "en", "pt-BR"]);
    }

    #[test]
    fn test_is_supported() {
        let registry = LanguageRegistry::<Language>::load().unwrap();
        assert!(registry.is_supported("en"));
        assert!(!registry.is_supported("es"));
        assert!(!registry.is_supported(""));
    }

    #[test]
    fn test_contains() {
        let registry = LanguageRegistry::<Language>::load().unwrap();
        assert!(Language::ALL.iter().all(|l| registry.contains(*l)));
    }
}
