//! Demo binary - renders a small home page, switches language and renders again
//!
//! Usage:
//!   cargo run                                  # Render with the default language
//!   DEFAULT_LANGUAGE=nb cargo run              # Start in Norwegian
//!   CATALOG_PATH=texts.json cargo run          # Also validate and print a JSON catalog
//!
//! Optional environment variables:
//! - DEFAULT_LANGUAGE (defaults to en)
//! - CATALOG_PATH (no catalog by default)

use anyhow::{bail, Context, Result};
use scoped_i18n::config::Config;
use scoped_i18n::{
    language_set, translatable, Catalog, LanguageSet, LanguageStore, Translatable,
    TranslationValidator,
};
use tracing::{info, warn};

language_set! {
    /// Languages the demo ships with
    pub enum Language {
        Norwegian => "nb",
        English => "en",
    }
}

/// A tiny renderable fragment, standing in for a UI component tree.
#[derive(Debug, Clone, PartialEq)]
enum Node {
    Text(&'static str),
    Strong(&'static str),
}

fn render_fragment(fragment: &[Node]) -> String {
    fragment
        .iter()
        .map(|node| match node {
            Node::Text(text) => text.to_string(),
            Node::Strong(text) => format!("*{}*", text),
        })
        .collect()
}

/// Texts used by the home page.
struct Texts {
    title: Translatable<Language, &'static str>,
    description: Translatable<Language, &'static str>,
    language_label: Translatable<Language, &'static str>,
    examples_heading: Translatable<Language, &'static str>,
    examples_description: Translatable<Language, &'static str>,
    label_string: Translatable<Language, &'static str>,
    label_numbers: Translatable<Language, &'static str>,
    label_components: Translatable<Language, &'static str>,
    some_string: Translatable<Language, &'static str>,
    some_number: Translatable<Language, u32>,
    some_component: Translatable<Language, Vec<Node>>,
}

impl Texts {
    fn new() -> Self {
        Self {
            title: translatable!(Language {
                Norwegian => "Scoped i18n",
                English => "Scoped i18n",
            }),
            description: translatable!(Language {
                Norwegian => "Et enkelt bibliotek for typesikre oversettelser.",
                English => "A simple library for type-safe translations.",
            }),
            language_label: translatable!(Language {
                Norwegian => "Aktivt språk",
                English => "Active language",
            }),
            examples_heading: translatable!(Language {
                Norwegian => "Biblioteket bryr seg ikke om hva du oversetter",
                English => "The library doesn't care what you translate",
            }),
            examples_description: translatable!(Language {
                Norwegian => "Det kan være f.eks.:",
                English => "It can be for example:",
            }),
            label_string: translatable!(Language {
                Norwegian => "Strenger",
                English => "Strings",
            }),
            label_numbers: translatable!(Language {
                Norwegian => "Tall",
                English => "Numbers",
            }),
            label_components: translatable!(Language {
                Norwegian => "Tilogmed komponenter",
                English => "Even components",
            }),
            some_string: translatable!(Language {
                Norwegian => "Dette er en streng",
                English => "This is a string",
            }),
            some_number: translatable!(Language {
                Norwegian => 1234,
                English => 5678,
            }),
            some_component: translatable!(Language {
                Norwegian => vec![Node::Text("Dette er "), Node::Strong("stilig")],
                English => vec![Node::Text("This is "), Node::Strong("cool")],
            }),
        }
    }
}

fn examples_list(store: &LanguageStore<Language>, texts: &Texts) -> String {
    let t = store.use_translation();
    format!(
        "  - {}: {}\n  - {}: {}\n  - {}: {}",
        t.t(&texts.label_string),
        t.t(&texts.some_string),
        t.t(&texts.label_numbers),
        t.t(&texts.some_number),
        t.t(&texts.label_components),
        render_fragment(t.t(&texts.some_component).as_slice()),
    )
}

fn home_page(store: &LanguageStore<Language>, texts: &Texts) -> String {
    let t = store.use_translation();
    format!(
        "# {}\n{}\n{}: {}\n\n## {}\n{}\n{}\n",
        t.t(&texts.title),
        t.t(&texts.description),
        t.t(&texts.language_label),
        t.language,
        t.t(&texts.examples_heading),
        t.t(&texts.examples_description),
        examples_list(store, texts),
    )
}

fn next_language(language: Language) -> Language {
    let all = Language::ALL;
    all[(language.index() + 1) % all.len()]
}

fn print_catalog(store: &LanguageStore<Language>, path: &str) -> Result<()> {
    let catalog = Catalog::<Language, String>::from_path(path)
        .with_context(|| format!("Failed to load catalog {}", path))?;
    info!("Loaded {} catalog entries", catalog.len());

    let report = TranslationValidator::validate_catalog(&catalog);
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.has_errors() {
        bail!("Catalog has errors: {}", report.errors.join("; "));
    }

    for language in Language::ALL {
        store.scope(*language, || {
            let t = store.use_translation();
            println!("[{}]", t.language);
            for (key, value) in catalog.iter() {
                println!("  {} = {}", key, t.t(value));
            }
        });
    }
    Ok(())
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scoped_i18n=info".parse()?),
        )
        .init();

    info!("Starting localization demo");

    let config = Config::from_env()?;
    let store: LanguageStore<Language> = config.store()?;
    let texts = Texts::new();

    // The app owns the selected language and passes it to the outermost scope
    let mut current = store.default_language();
    let mut scope = store.enter(current);
    println!("{}", home_page(&store, &texts));

    current = next_language(current);
    info!(language = %current, "Changing language");
    scope.set(current);
    println!("{}", home_page(&store, &texts));
    drop(scope);

    if let Some(path) = &config.catalog_path {
        print_catalog(&store, path)?;
    }

    info!("Done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LanguageStore<Language> {
        scoped_i18n::init(Language::English).expect("Should succeed")
    }

    #[test]
    fn test_render_fragment_marks_strong() {
        let fragment = [Node::Text("This is "), Node::Strong("cool")];
        assert_eq!(render_fragment(&fragment), "This is *cool*");
    }

    #[test]
    fn test_home_page_english() {
        let store = store();
        let page = home_page(&store, &Texts::new());

        assert!(page.starts_with("# Scoped i18n\n"));
        assert!(page.contains("Active language: en"));
        assert!(page.contains("  - Strings: This is a string"));
        assert!(page.contains("  - Numbers: 5678"));
        assert!(page.contains("  - Even components: This is *cool*"));
    }

    #[test]
    fn test_home_page_norwegian_scope() {
        let store = store();
        let texts = Texts::new();
        let page = store.scope(Language::Norwegian, || home_page(&store, &texts));

        assert!(page.contains("Aktivt språk: nb"));
        assert!(page.contains("  - Tall: 1234"));
        assert!(page.contains("  - Tilogmed komponenter: Dette er *stilig*"));
        assert!(!page.contains("5678"));
    }

    #[test]
    fn test_language_switch_rerenders_page() {
        let store = store();
        let texts = Texts::new();
        let mut scope = store.enter(store.default_language());
        let before = home_page(&store, &texts);

        scope.set(next_language(Language::English));
        let after = home_page(&store, &texts);

        assert!(before.contains("Numbers: 5678"));
        assert!(after.contains("Tall: 1234"));
    }

    #[test]
    fn test_next_language_cycles() {
        assert_eq!(next_language(Language::Norwegian), Language::English);
        assert_eq!(next_language(Language::English), Language::Norwegian);
    }
}
