//! Translatable values: one payload per language of a set.
//!
//! A [`Translatable`] is total by construction. The [`translatable!`] macro
//! expands to an exhaustive `match`, so leaving a language out is a compile
//! error; every runtime constructor rejects incomplete input with
//! [`LocalizationError::MissingTranslation`]. Looking a value up can
//! therefore never fail.
//!
//! [`translatable!`]: crate::translatable

use crate::error::LocalizationError;
use crate::i18n::LanguageSet;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::marker::PhantomData;

/// Description used in errors when the caller has not named the table.
const UNNAMED_TABLE: &str = "translatable value";

/// A complete mapping from every language of `L` to a payload of type `U`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Translatable<L: LanguageSet, U> {
    /// Payloads indexed by `LanguageSet::index`
    values: Box<[U]>,
    _set: PhantomData<fn() -> L>,
}

impl<L: LanguageSet, U> Translatable<L, U> {
    /// Build a value by asking `f` for the payload of every language.
    ///
    /// Use an exhaustive `match` inside `f` to have the compiler check that
    /// every language is covered.
    pub fn from_fn(mut f: impl FnMut(L) -> U) -> Self {
        Self {
            values: L::ALL.iter().map(|language| f(*language)).collect(),
            _set: PhantomData,
        }
    }

    /// Build a value from `(language, payload)` pairs.
    ///
    /// A language listed twice keeps its last payload.
    ///
    /// # Returns
    /// * `Ok(Translatable)` if every language of `L` has a payload
    /// * `Err(LocalizationError::MissingTranslation)` naming the first
    ///   language (in `L::ALL` order) without one
    pub fn from_entries(entries: impl IntoIterator<Item = (L, U)>) -> Result<Self, LocalizationError> {
        let mut slots: Vec<Option<U>> = L::ALL.iter().map(|_| None).collect();

        for (language, value) in entries {
            match slots.get_mut(language.index()) {
                Some(slot) => *slot = Some(value),
                None => {
                    return Err(LocalizationError::UnknownLanguage {
                        code: language.code().to_string(),
                        table: UNNAMED_TABLE.to_string(),
                    })
                }
            }
        }

        let mut values = Vec::with_capacity(slots.len());
        for (language, slot) in L::ALL.iter().zip(slots) {
            match slot {
                Some(value) => values.push(value),
                None => {
                    return Err(LocalizationError::MissingTranslation {
                        language: language.code().to_string(),
                        table: UNNAMED_TABLE.to_string(),
                    })
                }
            }
        }

        Ok(Self {
            values: values.into_boxed_slice(),
            _set: PhantomData,
        })
    }

    /// Build a value from `(code, payload)` pairs, as found in data files.
    ///
    /// # Returns
    /// * `Err(LocalizationError::UnknownLanguage)` for a code outside `L`
    /// * `Err(LocalizationError::MissingTranslation)` for an incomplete table
    pub fn from_code_entries<K: AsRef<str>>(
        entries: impl IntoIterator<Item = (K, U)>,
    ) -> Result<Self, LocalizationError> {
        let mut resolved = Vec::new();
        for (code, value) in entries {
            let code = code.as_ref();
            let language = L::from_code(code).ok_or_else(|| LocalizationError::UnknownLanguage {
                code: code.to_string(),
                table: UNNAMED_TABLE.to_string(),
            })?;
            resolved.push((language, value));
        }
        Self::from_entries(resolved)
    }

    /// Start building a value one language at a time.
    pub fn builder() -> TranslatableBuilder<L, U> {
        TranslatableBuilder::new()
    }

    /// The payload for `language`.
    pub fn get(&self, language: L) -> &U {
        &self.values[language.index()]
    }

    /// Iterate over `(language, payload)` pairs in `L::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (L, &U)> + '_ {
        L::ALL.iter().copied().zip(self.values.iter())
    }

    /// Payloads in `L::ALL` order.
    pub fn values(&self) -> &[U] {
        &self.values
    }

    /// Transform every payload, keeping the language mapping.
    pub fn map<V>(&self, mut f: impl FnMut(&U) -> V) -> Translatable<L, V> {
        Translatable {
            values: self.values.iter().map(&mut f).collect(),
            _set: PhantomData,
        }
    }
}

impl<L: LanguageSet, U: fmt::Debug> fmt::Debug for Translatable<L, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(language, value)| (language.code(), value)))
            .finish()
    }
}

impl<L: LanguageSet, U: Serialize> Serialize for Translatable<L, U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (language, value) in self.iter() {
            map.serialize_entry(language.code(), value)?;
        }
        map.end()
    }
}

impl<'de, L: LanguageSet, U: Deserialize<'de>> Deserialize<'de> for Translatable<L, U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = BTreeMap::<String, U>::deserialize(deserializer)?;
        Self::from_code_entries(entries).map_err(D::Error::custom)
    }
}

/// Incremental constructor for [`Translatable`].
///
/// ```rust,ignore
/// let heading = Translatable::builder()
///     .describe("heading")
///     .with(Language::English, "Heading")
///     .with(Language::Norwegian, "Overskrift")
///     .build()?;
/// ```
pub struct TranslatableBuilder<L: LanguageSet, U> {
    name: Option<String>,
    entries: Vec<(L, U)>,
}

impl<L: LanguageSet, U> TranslatableBuilder<L, U> {
    fn new() -> Self {
        Self {
            name: None,
            entries: Vec::with_capacity(L::ALL.len()),
        }
    }

    /// Name the value in construction errors.
    pub fn describe(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the payload for `language`, replacing any earlier one.
    pub fn with(mut self, language: L, value: U) -> Self {
        self.entries.push((language, value));
        self
    }

    /// Finish the value, failing if any language has no payload.
    pub fn build(self) -> Result<Translatable<L, U>, LocalizationError> {
        let name = self.name;
        Translatable::from_entries(self.entries).map_err(|error| match name {
            Some(name) => error.in_table(format!("'{}'", name)),
            None => error,
        })
    }
}

/// A source of per-language payloads that may be incomplete.
///
/// [`Translatable`] always has an entry; plain maps may not, and resolving
/// them goes through [`Translation::try_t`](crate::Translation::try_t).
pub trait TranslationTable<L: LanguageSet> {
    /// Payload type returned by lookups.
    type Value;

    /// The payload for `language`, if present.
    fn lookup(&self, language: L) -> Option<&Self::Value>;

    /// Human-readable description for error messages.
    fn describe(&self) -> String;
}

impl<L: LanguageSet, U> TranslationTable<L> for Translatable<L, U> {
    type Value = U;

    fn lookup(&self, language: L) -> Option<&U> {
        Some(self.get(language))
    }

    fn describe(&self) -> String {
        UNNAMED_TABLE.to_string()
    }
}

impl<L: LanguageSet, U, S: BuildHasher> TranslationTable<L> for HashMap<L, U, S> {
    type Value = U;

    fn lookup(&self, language: L) -> Option<&U> {
        self.get(&language)
    }

    fn describe(&self) -> String {
        describe_partial(|language| self.contains_key(&language))
    }
}

impl<L: LanguageSet + Ord, U> TranslationTable<L> for BTreeMap<L, U> {
    type Value = U;

    fn lookup(&self, language: L) -> Option<&U> {
        self.get(&language)
    }

    fn describe(&self) -> String {
        describe_partial(|language| self.contains_key(&language))
    }
}

fn describe_partial<L: LanguageSet>(has: impl Fn(L) -> bool) -> String {
    let covered: Vec<&str> = L::ALL
        .iter()
        .copied()
        .filter(|language| has(*language))
        .map(LanguageSet::code)
        .collect();
    format!("table covering [{}]", covered.join(", "))
}

/// Build a [`Translatable`] from one payload per language.
///
/// The expansion contains an exhaustive `match` over the language enum, so
/// omitting a language fails to compile.
///
/// ```rust,ignore
/// let greeting = translatable!(Language {
///     English => "Hello",
///     Norwegian => "Hei",
/// });
/// ```
#[macro_export]
macro_rules! translatable {
    ($lang:ident { $($variant:ident => $value:expr),+ $(,)? }) => {{
        let _exhaustive = |language: $lang| match language {
            $($lang::$variant => ()),+
        };
        $crate::Translatable::<$lang, _>::from_entries([$(($lang::$variant, $value)),+])
            .expect("language set should list every variant of its enum")
    }};
}
