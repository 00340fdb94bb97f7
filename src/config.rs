//! Configuration of a report run.
//!
//! A [ReportConfig] is created for a root identity and refined with chained
//! `with_*` calls. [ReportConfig::validate] is called before every run.

use crate::error::{Result, SosaError};
use crate::layout::LayoutGeometry;
use crate::locale::Locale;
use crate::model::{GenerationCap, XrefId};

/// Default number of generations drawn on one tree page
pub const DEFAULT_GENERATIONS_PER_PAGE: u32 = 5;

/// Settings of one report run.
///
/// # Defaults
/// * Generation cap: [GenerationCap::Unbounded]
/// * Generations per page: [DEFAULT_GENERATIONS_PER_PAGE]
/// * Locale: [Locale::English]
/// * Geometry: [LayoutGeometry::default]
/// * Title: the locale's document title; no author
///
/// # Example
/// ```
/// use sosatree::ReportConfig;
/// use sosatree::locale::Locale;
/// use sosatree::model::GenerationCap;
///
/// let config = ReportConfig::new("@I0123@")
///     .with_max_generation(GenerationCap::Limited(12))
///     .with_max_generation_per_page(4)
///     .with_locale(Locale::French)
///     .with_author("Marc");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.title(), "Arbre généalogique");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    root: XrefId,
    max_generation: GenerationCap,
    max_generation_per_page: u32,
    locale: Locale,
    geometry: LayoutGeometry,
    title: Option<String>,
    author: Option<String>,
}

impl ReportConfig {
    /// Creates a configuration with default settings for the given root.
    pub fn new(root: impl Into<XrefId>) -> Self {
        ReportConfig {
            root: root.into(),
            max_generation: GenerationCap::default(),
            max_generation_per_page: DEFAULT_GENERATIONS_PER_PAGE,
            locale: Locale::default(),
            geometry: LayoutGeometry::default(),
            title: None,
            author: None,
        }
    }

    /// Sets the global generation cap across report and all tree pages.
    pub fn with_max_generation(mut self, cap: GenerationCap) -> Self {
        self.max_generation = cap;
        self
    }

    /// Sets how many generations one tree page may draw.
    pub fn with_max_generation_per_page(mut self, generations: u32) -> Self {
        self.max_generation_per_page = generations;
        self
    }

    /// Sets the language of captions.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Sets node spacing of the tree pages.
    pub fn with_geometry(mut self, geometry: LayoutGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Sets the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Checks that all settings are usable.
    ///
    /// # Errors
    /// Returns [SosaError::InvalidConfig] if the root identity is empty, the
    /// generation cap is zero, fewer than one generation per page is requested,
    /// or the geometry is not strictly positive.
    pub fn validate(&self) -> Result<()> {
        if self.root.as_str().trim().is_empty() {
            return Err(SosaError::InvalidConfig("root identity is empty".to_string()));
        }
        if self.max_generation == GenerationCap::Limited(0) {
            return Err(SosaError::InvalidConfig(
                "maximum generation must be positive".to_string(),
            ));
        }
        if self.max_generation_per_page == 0 {
            return Err(SosaError::InvalidConfig(
                "at least one generation per page is required".to_string(),
            ));
        }
        if !self.geometry.is_valid() {
            return Err(SosaError::InvalidConfig(format!(
                "layout geometry must be positive and finite, got {:?}",
                self.geometry
            )));
        }
        Ok(())
    }

    pub fn root(&self) -> &XrefId {
        &self.root
    }

    pub fn max_generation(&self) -> GenerationCap {
        self.max_generation
    }

    pub fn max_generation_per_page(&self) -> u32 {
        self.max_generation_per_page
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn geometry(&self) -> LayoutGeometry {
        self.geometry
    }

    /// Returns the configured title, or the locale's default title.
    pub fn title(&self) -> &str {
        self.title
            .as_deref()
            .unwrap_or(self.locale.captions().document_title)
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::new("@I1@");
        assert_eq!(config.max_generation(), GenerationCap::Unbounded);
        assert_eq!(config.max_generation_per_page(), DEFAULT_GENERATIONS_PER_PAGE);
        assert_eq!(config.title(), "Family tree");
        assert!(config.author().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_settings() {
        assert!(ReportConfig::new(" ").validate().is_err());
        assert!(
            ReportConfig::new("@I1@")
                .with_max_generation(GenerationCap::Limited(0))
                .validate()
                .is_err()
        );
        assert!(
            ReportConfig::new("@I1@")
                .with_max_generation_per_page(0)
                .validate()
                .is_err()
        );
        let flat = LayoutGeometry {
            generation_spacing: 4.5,
            branch_spread: 0.0,
        };
        assert!(ReportConfig::new("@I1@").with_geometry(flat).validate().is_err());
    }
}
