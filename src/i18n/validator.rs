//! Translation quality validation module.
//!
//! Completeness is guaranteed by construction; this module looks for the
//! problems construction cannot see in text tables: blank entries, and
//! translations that dropped a URL or a markdown link present in the
//! reference language.

use crate::i18n::{Catalog, LanguageSet, Translatable};
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about translations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Critical errors that indicate translation issues
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    /// Append the findings of another report
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for text translations.
pub struct TranslationValidator;

// Regex patterns for extraction (cached for performance)
static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static MARKDOWN_LINK_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate every entry of a text catalog.
    pub fn validate_catalog<L, U>(catalog: &Catalog<L, U>) -> ValidationReport
    where
        L: LanguageSet,
        U: AsRef<str>,
    {
        let mut report = ValidationReport::new();
        for (key, value) in catalog.iter() {
            report.merge(Self::validate(key, value));
        }
        report
    }

    /// Validate one translatable text.
    ///
    /// The first language of the set is the reference. Every language is
    /// checked for blank text (an error); every other language is compared
    /// with the reference for URLs and markdown link count (warnings).
    ///
    /// # Arguments
    /// * `name` - Name of the value, used in messages
    /// * `value` - The translatable text
    pub fn validate<L, U>(name: &str, value: &Translatable<L, U>) -> ValidationReport
    where
        L: LanguageSet,
        U: AsRef<str>,
    {
        let mut report = ValidationReport::new();

        let mut languages = value.iter();
        let Some((reference, reference_text)) = languages.next() else {
            return report;
        };
        let reference_text = reference_text.as_ref();

        if reference_text.trim().is_empty() {
            report
                .errors
                .push(format!("'{}' is blank for '{}'", name, reference.code()));
        }

        let ref_urls = Self::extract_urls(reference_text);
        let ref_md_links = Self::extract_markdown_links(reference_text);

        for (language, text) in languages {
            let text = text.as_ref();

            if text.trim().is_empty() {
                report
                    .errors
                    .push(format!("'{}' is blank for '{}'", name, language.code()));
                continue;
            }

            // Check URLs
            let urls = Self::extract_urls(text);
            if urls != ref_urls {
                report.warnings.push(format!(
                    "URL mismatch in '{}': '{}' has {} URLs, '{}' has {} URLs",
                    name,
                    reference.code(),
                    ref_urls.len(),
                    language.code(),
                    urls.len()
                ));
            }

            // Check markdown links count (approximate check)
            let md_links = Self::extract_markdown_links(text);
            if md_links.len() != ref_md_links.len() {
                report.warnings.push(format!(
                    "Markdown link count mismatch in '{}': '{}' has {}, '{}' has {}",
                    name,
                    reference.code(),
                    ref_md_links.len(),
                    language.code(),
                    md_links.len()
                ));
            }
        }

        report
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex =
            URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").expect("valid regex"));

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Extract markdown links from text (approximate)
    fn extract_markdown_links(text: &str) -> Vec<String> {
        let regex = MARKDOWN_LINK_REGEX
            .get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"));

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
