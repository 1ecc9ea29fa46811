#![forbid(unsafe_code)]

//! Slug codec: URL path segments to and from catalog identifiers.
//!
//! Category slugs come from the category's display label and use hyphens
//! (`"Data Display"` becomes `data-display`). Component slugs come from the
//! raw component identifier and use underscores (`BUTTON_3D` becomes
//! `button_3d`). Both normalizers are total and idempotent, so any
//! user-edited variant (`Data_Display`, `DATA DISPLAY`, `Button-3D`) lands on
//! the same key.
//!
//! The reverse maps live in [`SlugIndex`], built once when a
//! [`Registry`](crate::registry::Registry) is constructed.

use std::collections::HashMap;

use crate::catalog::{Category, ComponentId};
use crate::registry::{CategoryMeta, ComponentEntry, RegistryError};

/// Normalize a category label or user-supplied category segment.
///
/// Trims, lowercases, and collapses every run of whitespace and underscores
/// into a single `-`.
pub fn normalize_category_slug(value: &str) -> String {
    let lowered = value.trim().to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_separator = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() || ch == '_' {
            if !in_separator {
                slug.push('-');
                in_separator = true;
            }
        } else {
            slug.push(ch);
            in_separator = false;
        }
    }
    slug
}

/// Normalize a component identifier or user-supplied component segment.
///
/// Trims, lowercases, and turns every `-` into `_`.
pub fn normalize_component_slug(value: &str) -> String {
    value.trim().to_lowercase().replace('-', "_")
}

/// Slug for a component id.
pub fn component_to_slug(id: ComponentId) -> String {
    normalize_component_slug(id.as_str())
}

/// A slug must be non-empty and survive route parsing as one segment.
fn is_path_segment_safe(slug: &str) -> bool {
    !slug.is_empty() && !slug.contains(['/', '?', '#'])
}

/// Precomputed reverse lookups from normalized slug to identifier.
#[derive(Debug, Clone, Default)]
pub struct SlugIndex {
    categories: HashMap<String, Category>,
    category_slugs: HashMap<Category, String>,
    components: HashMap<String, ComponentId>,
}

impl SlugIndex {
    /// Build the index, rejecting unusable category slugs and any two
    /// categories that share a slug.
    pub(crate) fn build(
        categories: &[CategoryMeta],
        entries: &[ComponentEntry],
    ) -> Result<Self, RegistryError> {
        let mut index = Self::default();

        for meta in categories {
            let slug = normalize_category_slug(meta.label);
            if !is_path_segment_safe(&slug) {
                return Err(RegistryError::UnsafeCategorySlug {
                    category: meta.id,
                    slug,
                });
            }
            if let Some(&existing) = index.categories.get(&slug) {
                return Err(RegistryError::CategorySlugCollision {
                    slug,
                    first: existing,
                    second: meta.id,
                });
            }
            index.category_slugs.insert(meta.id, slug.clone());
            index.categories.insert(slug, meta.id);
        }

        // Raw ids are distinct upper-snake strings, so their slugs are too.
        for entry in entries {
            index.components.insert(component_to_slug(entry.id), entry.id);
        }

        Ok(index)
    }

    /// Slug for a declared category, if the index knows it.
    pub fn category_slug(&self, category: Category) -> Option<&str> {
        self.category_slugs.get(&category).map(String::as_str)
    }

    /// Decode a category segment. Unknown or empty input yields `None`.
    pub fn slug_to_category(&self, slug: &str) -> Option<Category> {
        self.categories
            .get(&normalize_category_slug(slug))
            .copied()
    }

    /// Decode a component segment. Unknown or empty input yields `None`.
    pub fn slug_to_component_id(&self, slug: &str) -> Option<ComponentId> {
        self.components
            .get(&normalize_component_slug(slug))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_slug_examples() {
        assert_eq!(normalize_category_slug("Data Display"), "data-display");
        assert_eq!(normalize_category_slug("  Buttons  "), "buttons");
        assert_eq!(normalize_category_slug("Data__ \t Display"), "data-display");
        assert_eq!(normalize_category_slug("DATA-DISPLAY"), "data-display");
        assert_eq!(normalize_category_slug(""), "");
    }

    #[test]
    fn category_hyphens_are_not_collapsed() {
        assert_eq!(normalize_category_slug("a - b"), "a---b");
        assert_eq!(normalize_category_slug("a---b"), "a---b");
    }

    #[test]
    fn component_slug_examples() {
        assert_eq!(normalize_component_slug("BUTTON_3D"), "button_3d");
        assert_eq!(normalize_component_slug("button-3d"), "button_3d");
        assert_eq!(normalize_component_slug(" Parallax-Card "), "parallax_card");
        assert_eq!(normalize_component_slug("xyz-not-real"), "xyz_not_real");
    }

    #[test]
    fn component_to_slug_uses_raw_identifier() {
        assert_eq!(component_to_slug(ComponentId::Button3d), "button_3d");
        assert_eq!(component_to_slug(ComponentId::Decrypt), "decrypt");
        assert_eq!(
            component_to_slug(ComponentId::ParallaxGallery),
            "parallax_gallery"
        );
    }

    #[test]
    fn path_segment_safety() {
        assert!(is_path_segment_safe("data-display"));
        assert!(!is_path_segment_safe(""));
        assert!(!is_path_segment_safe("a/b"));
        assert!(!is_path_segment_safe("a?b"));
        assert!(!is_path_segment_safe("a#b"));
    }

    #[test]
    fn normalizers_are_idempotent_on_samples() {
        for sample in ["Data Display", " _x_ ", "A-B c_D", "ÉCLAIR  Ünïcode", "\u{3000}x"] {
            let once = normalize_category_slug(sample);
            assert_eq!(normalize_category_slug(&once), once, "category: {sample:?}");
            let once = normalize_component_slug(sample);
            assert_eq!(normalize_component_slug(&once), once, "component: {sample:?}");
        }
    }
}
