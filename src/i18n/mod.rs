//! Internationalization (i18n) module: type-checked, scoped translations.
//!
//! # Architecture
//!
//! - `language`: The `LanguageSet` trait and the `language_set!` declaration macro
//! - `registry`: Validation of a language set (non-empty, unique, well-formed codes)
//! - `translatable`: Complete per-language values and the `translatable!` macro
//! - `store`: The ambient active language, scoped overrides and resolution
//! - `catalog`: Named translatable values loaded eagerly from JSON
//! - `validator`: Quality checks for text catalogs
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{init, Translatable};
//!
//! let store = init(Language::English)?;
//! let button: Translatable<Language, &str> = translatable!(Language {
//!     Norwegian => "Trykk her",
//!     English => "Click here",
//! });
//!
//! let t = store.use_translation();
//! render_button(t.t(&button));
//! ```

mod catalog;
mod language;
mod registry;
mod store;
mod translatable;
mod validator;

pub use catalog::Catalog;
pub use language::LanguageSet;
pub use registry::LanguageRegistry;
pub use store::{init, LanguageStore, ScopeGuard, Translation};
pub use translatable::{Translatable, TranslatableBuilder, TranslationTable};
pub use validator::{TranslationValidator, ValidationReport};
