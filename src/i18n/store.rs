//! Language context store: the ambient active language of a UI tree.
//!
//! The store keeps a stack of scoped overrides on top of a default. Entering
//! a scope pushes a language and returns a [`ScopeGuard`]; dropping the guard
//! pops it again, so nested overrides always restore correctly, including
//! when a render unwinds. The innermost open scope is the active language.
//!
//! Components never receive the language as a parameter. They call
//! [`LanguageStore::use_translation`] during their render and resolve their
//! own translatable values with the returned [`Translation`].

use crate::error::LocalizationError;
use crate::i18n::{LanguageRegistry, LanguageSet, Translatable, TranslationTable};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, warn};

/// Create the store for a language set with the given default language.
///
/// This is the entry point of the crate; the returned store provides both
/// scoping ([`LanguageStore::scope`]) and resolution
/// ([`LanguageStore::use_translation`]).
pub fn init<L: LanguageSet>(default_language: L) -> Result<LanguageStore<L>, LocalizationError> {
    LanguageStore::new(default_language)
}

/// Ambient language state shared by every component of one UI tree.
///
/// Cloning is cheap and every clone observes the same scopes. The store is
/// bound to the thread that renders the tree and is neither `Send` nor `Sync`.
pub struct LanguageStore<L: LanguageSet> {
    inner: Rc<StoreInner<L>>,
}

struct StoreInner<L: LanguageSet> {
    default_language: L,
    registry: LanguageRegistry<L>,
    scopes: RefCell<Vec<ScopeEntry<L>>>,
    next_scope_id: Cell<u64>,
}

#[derive(Debug, Clone, Copy)]
struct ScopeEntry<L> {
    id: u64,
    language: L,
}

impl<L: LanguageSet> Clone for LanguageStore<L> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<L: LanguageSet> std::fmt::Debug for LanguageStore<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageStore")
            .field("default_language", &self.inner.default_language)
            .field("active", &self.active())
            .field("depth", &self.depth())
            .finish()
    }
}

impl<L: LanguageSet> LanguageStore<L> {
    /// Create a store whose active language is `default_language` outside
    /// of any scope.
    ///
    /// # Returns
    /// * `Err(LocalizationError::Configuration)` if the language set is
    ///   invalid or does not list `default_language`
    pub fn new(default_language: L) -> Result<Self, LocalizationError> {
        let registry = LanguageRegistry::<L>::load()?;

        if !registry.contains(default_language) {
            return Err(LocalizationError::Configuration(format!(
                "default language {:?} is not a member of the language set [{}]",
                default_language,
                registry.codes().join(", ")
            )));
        }

        debug!(
            default_language = default_language.code(),
            languages = registry.len(),
            "Created language store"
        );

        Ok(Self {
            inner: Rc::new(StoreInner {
                default_language,
                registry,
                scopes: RefCell::new(Vec::new()),
                next_scope_id: Cell::new(0),
            }),
        })
    }

    /// Create a store from a default language code, e.g. one read from
    /// configuration.
    ///
    /// # Returns
    /// * `Err(LocalizationError::Configuration)` if `code` is not in the set
    pub fn from_code(code: &str) -> Result<Self, LocalizationError> {
        let registry = LanguageRegistry::<L>::load()?;
        let default_language = registry.get_by_code(code).ok_or_else(|| {
            LocalizationError::Configuration(format!(
                "default language '{}' is not one of [{}]",
                code,
                registry.codes().join(", ")
            ))
        })?;
        Self::new(default_language)
    }

    /// The language active outside of any scope.
    pub fn default_language(&self) -> L {
        self.inner.default_language
    }

    /// The validated registry of the store's language set.
    pub fn registry(&self) -> &LanguageRegistry<L> {
        &self.inner.registry
    }

    /// The language visible at the current point of the render.
    pub fn active(&self) -> L {
        self.inner
            .scopes
            .borrow()
            .last()
            .map(|entry| entry.language)
            .unwrap_or(self.inner.default_language)
    }

    /// Number of currently open scopes.
    pub fn depth(&self) -> usize {
        self.inner.scopes.borrow().len()
    }

    /// Open a scope making `language` active until the guard is dropped.
    ///
    /// A language missing from the set cannot be resolved, so the scope then
    /// keeps the language that was active when it was entered. Use
    /// [`LanguageStore::try_enter`] to reject such a language instead.
    pub fn enter(&self, language: L) -> ScopeGuard<L> {
        let language = if self.inner.registry.contains(language) {
            language
        } else {
            let active = self.active();
            warn!(
                language = language.code(),
                keeping = active.code(),
                "Language is not a member of the language set; keeping the active language"
            );
            active
        };
        self.push_scope(language)
    }

    /// Open a scope making `language` active, failing if it is not a member
    /// of the language set.
    pub fn try_enter(&self, language: L) -> Result<ScopeGuard<L>, LocalizationError> {
        if !self.inner.registry.contains(language) {
            return Err(self.not_a_member(language));
        }
        Ok(self.push_scope(language))
    }

    fn push_scope(&self, language: L) -> ScopeGuard<L> {
        let id = self.inner.next_scope_id.get();
        self.inner.next_scope_id.set(id.wrapping_add(1));

        let mut scopes = self.inner.scopes.borrow_mut();
        scopes.push(ScopeEntry { id, language });
        debug!(language = language.code(), depth = scopes.len(), "Entered language scope");

        ScopeGuard {
            store: self.clone(),
            id,
        }
    }

    fn not_a_member(&self, language: L) -> LocalizationError {
        LocalizationError::Configuration(format!(
            "language {:?} is not a member of the language set [{}]",
            language,
            self.inner.registry.codes().join(", ")
        ))
    }

    /// Render `children` with `language` as the active language.
    ///
    /// ```rust,ignore
    /// store.scope(Language::Norwegian, || render_page(&store));
    /// ```
    pub fn scope<R>(&self, language: L, children: impl FnOnce() -> R) -> R {
        let _guard = self.enter(language);
        children()
    }

    /// Capture the active language for one render of a component.
    pub fn use_translation(&self) -> Translation<L> {
        Translation {
            language: self.active(),
        }
    }

    /// Resolve `table` against the active language.
    pub fn resolve<'a, U>(&self, table: &'a Translatable<L, U>) -> &'a U {
        table.get(self.active())
    }

    fn position_of(&self, id: u64) -> Option<usize> {
        self.inner
            .scopes
            .borrow()
            .iter()
            .rposition(|entry| entry.id == id)
    }
}

/// An open language scope.
///
/// Dropping the guard closes the scope. Guards should be dropped innermost
/// first; closing an outer scope also closes every scope opened inside it.
#[must_use = "the scope closes as soon as the guard is dropped"]
pub struct ScopeGuard<L: LanguageSet> {
    store: LanguageStore<L>,
    id: u64,
}

impl<L: LanguageSet> ScopeGuard<L> {
    /// The language this scope provides, or `None` once it has been closed
    /// by an enclosing scope.
    pub fn language(&self) -> Option<L> {
        let position = self.store.position_of(self.id)?;
        Some(self.store.inner.scopes.borrow()[position].language)
    }

    /// Change the language this scope provides.
    ///
    /// Every read made after the change, by any descendant not covered by a
    /// nested scope, observes the new language. A language missing from the
    /// set is ignored and the scope keeps its current language.
    pub fn set(&mut self, language: L) {
        if let Err(error) = self.try_set(language) {
            warn!(language = language.code(), "Ignoring language change: {}", error);
        }
    }

    /// Change the language this scope provides, failing if it is not a member
    /// of the language set or the scope has already been closed.
    pub fn try_set(&mut self, language: L) -> Result<(), LocalizationError> {
        if !self.store.inner.registry.contains(language) {
            return Err(self.store.not_a_member(language));
        }

        let Some(position) = self.store.position_of(self.id) else {
            return Err(LocalizationError::Configuration(
                "language scope is already closed".to_string(),
            ));
        };

        let mut scopes = self.store.inner.scopes.borrow_mut();
        let previous = std::mem::replace(&mut scopes[position].language, language);
        if previous != language {
            debug!(
                from = previous.code(),
                to = language.code(),
                depth = position + 1,
                "Changed scoped language"
            );
        }
        Ok(())
    }
}

impl<L: LanguageSet> Drop for ScopeGuard<L> {
    fn drop(&mut self) {
        let Some(position) = self.store.position_of(self.id) else {
            return;
        };

        let mut scopes = self.store.inner.scopes.borrow_mut();
        let nested = scopes.len() - position - 1;
        if nested > 0 {
            warn!(nested, "Closing language scope with nested scopes still open");
        }
        scopes.truncate(position);
        debug!(depth = position, "Left language scope");
    }
}

/// Per-render access to the active language, as returned by
/// [`LanguageStore::use_translation`].
///
/// The language is captured once, so everything resolved through the same
/// `Translation` agrees on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation<L: LanguageSet> {
    /// The active language, for display
    pub language: L,
}

impl<L: LanguageSet> Translation<L> {
    /// Pick the payload of `table` for the active language.
    pub fn t<'a, U>(&self, table: &'a Translatable<L, U>) -> &'a U {
        table.get(self.language)
    }

    /// Pick the payload of a possibly incomplete table.
    ///
    /// # Returns
    /// * `Err(LocalizationError::MissingTranslation)` naming the active
    ///   language if the table has no entry for it. Another language's entry
    ///   is never substituted.
    pub fn try_t<'a, T>(&self, table: &'a T) -> Result<&'a T::Value, LocalizationError>
    where
        T: TranslationTable<L> + ?Sized,
    {
        table
            .lookup(self.language)
            .ok_or_else(|| LocalizationError::MissingTranslation {
                language: self.language.code().to_string(),
                table: table.describe(),
            })
    }
}
