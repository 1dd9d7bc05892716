//! Type-checked translations resolved against an ambient, scoped language.
//!
//! Declare the closed set of supported languages once with [`language_set!`],
//! author translatable values with [`translatable!`], and resolve them inside
//! the render of any component through a [`LanguageStore`].
//!
//! ```rust,ignore
//! use scoped_i18n::{init, language_set, translatable};
//!
//! language_set! {
//!     pub enum Language {
//!         Norwegian => "nb",
//!         English => "en",
//!     }
//! }
//!
//! let store = init(Language::English)?;
//! let greeting = translatable!(Language {
//!     English => "Hello",
//!     Norwegian => "Hei",
//! });
//!
//! assert_eq!(*store.use_translation().t(&greeting), "Hello");
//! store.scope(Language::Norwegian, || {
//!     assert_eq!(*store.use_translation().t(&greeting), "Hei");
//! });
//! ```

pub mod config;
pub mod error;
pub mod i18n;

pub use error::LocalizationError;
pub use i18n::{
    init, Catalog, LanguageRegistry, LanguageSet, LanguageStore, ScopeGuard, Translatable,
    TranslatableBuilder, Translation, TranslationTable, TranslationValidator, ValidationReport,
};
