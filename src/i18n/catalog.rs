//! Catalogs: named translatable values loaded eagerly from JSON.
//!
//! A catalog document maps keys to complete per-language tables:
//!
//! ```json
//! {
//!   "title": { "nb": "Lobo-T", "en": "Lobo-T" },
//!   "languageLabel": { "nb": "Aktivt språk", "en": "Active language" }
//! }
//! ```
//!
//! Objects may also group keys. An object holding at least one language
//! code of the set (or nothing at all) is a table; any other object is a
//! group, and its keys are joined to the group's with a `.`:
//!
//! ```json
//! {
//!   "examples": {
//!     "labels": {
//!       "string": { "nb": "Strenger", "en": "Strings" }
//!     }
//!   }
//! }
//! ```
//!
//! defines the single key `examples.labels.string`.
//!
//! Every entry is checked when the document is loaded, so an incomplete
//! table is reported up front with its key instead of at render time.

use crate::error::LocalizationError;
use crate::i18n::{LanguageSet, Translatable};
use serde::de::DeserializeOwned;
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Named [`Translatable`] values sharing one payload type.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<L: LanguageSet, U> {
    entries: BTreeMap<String, Translatable<L, U>>,
}

impl<L: LanguageSet, U> Default for Catalog<L, U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LanguageSet, U> Catalog<L, U> {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Add a value under `key`, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Translatable<L, U>,
    ) -> Option<Translatable<L, U>> {
        self.entries.insert(key.into(), value)
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Translatable<L, U>> {
        self.entries.get(key)
    }

    /// Get the value stored under `key`, failing if there is none.
    pub fn require(&self, key: &str) -> Result<&Translatable<L, U>, LocalizationError> {
        self.get(key)
            .ok_or_else(|| LocalizationError::MissingKey(key.to_string()))
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    /// `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Translatable<L, U>)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: LanguageSet, U: DeserializeOwned> Catalog<L, U> {
    /// Parse a catalog document.
    ///
    /// # Returns
    /// * `Err(LocalizationError::Catalog)` if the document is not valid JSON,
    ///   holds something other than tables and groups, defines a key twice,
    ///   or has a payload that is not of type `U`
    /// * `Err(LocalizationError::MissingTranslation)` or
    ///   `Err(LocalizationError::UnknownLanguage)` naming the offending key
    pub fn from_json_str(json: &str) -> Result<Self, LocalizationError> {
        let document: Value =
            serde_json::from_str(json).map_err(|e| LocalizationError::Catalog(e.to_string()))?;
        Self::from_document(document)
    }

    /// Parse a catalog document from a reader.
    pub fn from_reader(reader: impl Read) -> Result<Self, LocalizationError> {
        let document: Value = serde_json::from_reader(reader)
            .map_err(|e| LocalizationError::Catalog(e.to_string()))?;
        Self::from_document(document)
    }

    /// Load a catalog document from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LocalizationError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| LocalizationError::Catalog(format!("{}: {}", path.display(), e)))?;

        let catalog = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            entries = catalog.len(),
            "Loaded translation catalog"
        );
        Ok(catalog)
    }

    fn from_document(document: Value) -> Result<Self, LocalizationError> {
        let Value::Object(root) = document else {
            return Err(LocalizationError::Catalog(
                "catalog document must be a JSON object".to_string(),
            ));
        };

        let mut catalog = Self::new();
        catalog.collect_group(None, root)?;
        Ok(catalog)
    }

    fn collect_group(
        &mut self,
        prefix: Option<&str>,
        group: Map<String, Value>,
    ) -> Result<(), LocalizationError> {
        for (name, value) in group {
            let key = match prefix {
                Some(prefix) => format!("{}.{}", prefix, name),
                None => name,
            };

            let Value::Object(object) = value else {
                return Err(LocalizationError::Catalog(format!(
                    "'{}' is neither a translation table nor a group",
                    key
                )));
            };

            if !is_table::<L>(&object) {
                self.collect_group(Some(&key), object)?;
                continue;
            }

            let value = parse_table(&key, object)?;
            if self.entries.contains_key(&key) {
                return Err(LocalizationError::Catalog(format!(
                    "'{}' is defined more than once",
                    key
                )));
            }
            self.entries.insert(key, value);
        }
        Ok(())
    }
}

fn is_table<L: LanguageSet>(object: &Map<String, Value>) -> bool {
    object.is_empty() || object.keys().any(|code| L::from_code(code).is_some())
}

fn parse_table<L: LanguageSet, U: DeserializeOwned>(
    key: &str,
    object: Map<String, Value>,
) -> Result<Translatable<L, U>, LocalizationError> {
    let mut entries = Vec::with_capacity(object.len());
    for (code, payload) in object {
        match serde_json::from_value::<U>(payload) {
            Ok(payload) => entries.push((code, payload)),
            Err(e) => {
                return Err(LocalizationError::Catalog(format!(
                    "'{}' for '{}': {}",
                    key, code, e
                )))
            }
        }
    }
    Translatable::from_code_entries(entries).map_err(|error| error.in_table(format!("'{}'", key)))
}

impl<L: LanguageSet, U> FromIterator<(String, Translatable<L, U>)> for Catalog<L, U> {
    fn from_iter<I: IntoIterator<Item = (String, Translatable<L, U>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<L: LanguageSet, U: Serialize> Serialize for Catalog<L, U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}
