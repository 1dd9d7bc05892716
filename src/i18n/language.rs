//! Language sets: the closed, application-defined enumeration of languages.
//!
//! An application declares its supported languages once, usually with the
//! [`language_set!`](crate::language_set) macro, and every other type in the
//! crate is generic over that set.

use std::fmt;
use std::hash::Hash;

/// A closed set of language codes.
///
/// Implementors are plain fieldless enums. The set must be non-empty and each
/// code unique; [`LanguageRegistry`](crate::LanguageRegistry) checks this when
/// a store is created.
pub trait LanguageSet: Copy + Eq + Hash + fmt::Debug + 'static {
    /// Every member of the set, in declaration order.
    const ALL: &'static [Self];

    /// The opaque code for this language (e.g., "en", "nb").
    fn code(self) -> &'static str;

    /// Position of this language in [`LanguageSet::ALL`].
    ///
    /// # Panics
    /// Panics if `self` is missing from `ALL`, which means the implementation
    /// is inconsistent. The registry rejects such sets before a store exists.
    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|language| *language == self)
            .expect("language should be a member of its own set")
    }

    /// Look up a member of the set by its code.
    ///
    /// # Returns
    /// * `Some(language)` if a member has exactly this code
    /// * `None` otherwise
    fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|language| language.code() == code)
    }
}

/// Declare a language set.
///
/// Generates a fieldless enum with the usual value-type derives, its
/// [`LanguageSet`] implementation, `Display` (the code) and `FromStr`.
///
/// ```rust,ignore
/// scoped_i18n::language_set! {
///     /// Languages the app ships with
///     pub enum Language {
///         Norwegian => "nb",
///         English => "en",
///     }
/// }
/// ```
#[macro_export]
macro_rules! language_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::LanguageSet for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code),+
                }
            }

            fn index(self) -> usize {
                self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::LanguageSet::code(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::LocalizationError;

            fn from_str(code: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::LanguageSet>::from_code(code).ok_or_else(|| {
                    $crate::LocalizationError::UnknownLanguage {
                        code: code.to_string(),
                        table: ::std::format!("language set {}", stringify!($name)),
                    }
                })
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocalizationError;

    crate::language_set! {
        pub enum Language {
            Norwegian => "nb",
            English => "en",
        }
    }

    /// Hand-written set relying on the trait's default methods.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Manual {
        German,
        French,
    }

    impl LanguageSet for Manual {
        const ALL: &'static [Self] = &[Manual::French, Manual::German];

        fn code(self) -> &'static str {
            match self {
                Manual::German => "de",
                Manual::French => "fr",
            }
        }
    }

    // ==================== Macro Tests ====================

    #[test]
    fn test_all_is_declaration_order() {
        assert_eq!(Language::ALL, &[Language::Norwegian, Language::English]);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Language::Norwegian.code(), "nb");
        assert_eq!(Language::English.code(), "en");
    }

    #[test]
    fn test_index_matches_all() {
        for (position, language) in Language::ALL.iter().enumerate() {
            assert_eq!(language.index(), position);
        }
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(Language::English.to_string(), "en");
        assert_eq!(format!("{}", Language::Norwegian), "nb");
    }

    #[test]
    fn test_from_str_known() {
        let language: Language = "nb".parse().expect("Should parse");
        assert_eq!(language, Language::Norwegian);
    }

    #[test]
    fn test_from_str_unknown() {
        let result = "fr".parse::<Language>();
        match result {
            Err(LocalizationError::UnknownLanguage { code, table }) => {
                assert_eq!(code, "fr");
                assert!(table.contains("Language"));
            }
            other => panic!("Expected UnknownLanguage, got {:?}", other),
        }
    }

    // ==================== Default Method Tests ====================

    #[test]
    fn test_default_index_uses_all_order() {
        assert_eq!(Manual::French.index(), 0);
        assert_eq!(Manual::German.index(), 1);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Manual::from_code("de"), Some(Manual::German));
        assert_eq!(Manual::from_code("fr"), Some(Manual::French));
        assert_eq!(Manual::from_code("en"), None);
        assert_eq!(Manual::from_code(""), None);
    }

    #[test]
    fn test_from_code_is_case_sensitive() {
        assert_eq!(Language::from_code("EN"), None);
    }
}
