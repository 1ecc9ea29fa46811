#![forbid(unsafe_code)]

//! Component registry: single source of truth for category and component
//! ordering plus metadata.
//!
//! # Invariants
//!
//! 1. Every category has exactly one [`CategoryMeta`].
//! 2. Component ids are unique and every entry's category is declared.
//! 3. No two categories (and no two components) normalize to the same slug.
//! 4. Insertion order is display order; the first entry of a category is
//!    the one selected when that category is opened.
//!
//! A declared category with zero entries is allowed. All lookups are total:
//! unknown input yields `None` or `false`.

use std::fmt;
use std::sync::OnceLock;

use crate::catalog::{Category, ComponentId};
use crate::preview::{self, Preview, RenderFn};
use crate::slug::{SlugIndex, component_to_slug, normalize_category_slug};

/// Icon name used by the left sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRef(pub &'static str);

/// Sidebar metadata for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryMeta {
    pub id: Category,
    pub label: &'static str,
    pub icon: IconRef,
}

/// One renderable component.
#[derive(Debug, Clone, Copy)]
pub struct ComponentEntry {
    pub id: ComponentId,
    pub label: &'static str,
    pub category: Category,
    pub render: RenderFn,
}

impl ComponentEntry {
    /// Invoke the leaf factory.
    pub fn preview(&self) -> Preview {
        (self.render)()
    }
}

/// Category metadata in left-sidebar order.
pub const CATEGORY_METADATA: &[CategoryMeta] = &[
    CategoryMeta {
        id: Category::Buttons,
        label: "Buttons",
        icon: IconRef("toggle-left"),
    },
    CategoryMeta {
        id: Category::Cards,
        label: "Cards",
        icon: IconRef("layers-2"),
    },
    CategoryMeta {
        id: Category::Background,
        label: "Background",
        icon: IconRef("sparkles"),
    },
    CategoryMeta {
        id: Category::DataDisplay,
        label: "Data Display",
        icon: IconRef("layout-grid"),
    },
    CategoryMeta {
        id: Category::Forms,
        label: "Forms",
        icon: IconRef("text-cursor-input"),
    },
    CategoryMeta {
        id: Category::Feedback,
        label: "Feedback",
        icon: IconRef("bell"),
    },
];

/// Built-in component table, in display order.
pub const COMPONENT_REGISTRY: &[ComponentEntry] = &[
    // Background
    ComponentEntry {
        id: ComponentId::Aurora,
        label: "Aurora Background",
        category: Category::Background,
        render: preview::aurora,
    },
    // Buttons
    ComponentEntry {
        id: ComponentId::Decrypt,
        label: "Decrypt",
        category: Category::Buttons,
        render: preview::decrypt,
    },
    ComponentEntry {
        id: ComponentId::Button3d,
        label: "Button 3D",
        category: Category::Buttons,
        render: preview::button_3d,
    },
    ComponentEntry {
        id: ComponentId::WaveButton,
        label: "Wave Button",
        category: Category::Buttons,
        render: preview::wave_button,
    },
    ComponentEntry {
        id: ComponentId::PulseButton,
        label: "Pulse Button",
        category: Category::Buttons,
        render: preview::pulse_button,
    },
    // Cards
    ComponentEntry {
        id: ComponentId::ParallaxGallery,
        label: "Parallax Gallery",
        category: Category::Cards,
        render: preview::parallax_gallery,
    },
    ComponentEntry {
        id: ComponentId::ParallaxCard,
        label: "Parallax Card",
        category: Category::Cards,
        render: preview::parallax_card,
    },
    // Data Display
    ComponentEntry {
        id: ComponentId::Avatar,
        label: "Avatar",
        category: Category::DataDisplay,
        render: preview::avatar,
    },
    ComponentEntry {
        id: ComponentId::Card,
        label: "Card",
        category: Category::DataDisplay,
        render: preview::card,
    },
    // Forms
    ComponentEntry {
        id: ComponentId::Input,
        label: "Input",
        category: Category::Forms,
        render: preview::input,
    },
    // Feedback
    ComponentEntry {
        id: ComponentId::Alert,
        label: "Alert",
        category: Category::Feedback,
        render: preview::alert,
    },
    ComponentEntry {
        id: ComponentId::Badge,
        label: "Badge",
        category: Category::Feedback,
        render: preview::badge,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// A registry table that breaks one of the construction invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two metadata records for the same category.
    DuplicateCategory(Category),
    /// Two entries with the same component id.
    DuplicateComponent(ComponentId),
    /// An entry points at a category with no metadata record.
    UndeclaredCategory {
        id: ComponentId,
        category: Category,
    },
    /// Two category labels normalize to the same slug.
    CategorySlugCollision {
        slug: String,
        first: Category,
        second: Category,
    },
    /// A category label whose slug cannot appear as one path segment.
    UnsafeCategorySlug { category: Category, slug: String },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateCategory(category) => {
                write!(f, "category {category} is declared more than once")
            }
            RegistryError::DuplicateComponent(id) => {
                write!(f, "component {id} is registered more than once")
            }
            RegistryError::UndeclaredCategory { id, category } => {
                write!(f, "component {id} uses undeclared category {category}")
            }
            RegistryError::CategorySlugCollision {
                slug,
                first,
                second,
            } => write!(f, "categories {first} and {second} share slug {slug:?}"),
            RegistryError::UnsafeCategorySlug { category, slug } => {
                write!(f, "category {category} has unusable slug {slug:?}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

// ─────────────────────────────────────────────────────────────────────────────
// Registry
// ─────────────────────────────────────────────────────────────────────────────

/// Immutable catalog of categories and components.
#[derive(Debug, Clone)]
pub struct Registry {
    categories: Vec<CategoryMeta>,
    entries: Vec<ComponentEntry>,
    slugs: SlugIndex,
}

impl Registry {
    /// Validate the tables and build the slug lookups.
    pub fn new(
        categories: Vec<CategoryMeta>,
        entries: Vec<ComponentEntry>,
    ) -> Result<Self, RegistryError> {
        for (idx, meta) in categories.iter().enumerate() {
            if categories[..idx].iter().any(|other| other.id == meta.id) {
                return Err(RegistryError::DuplicateCategory(meta.id));
            }
        }
        for (idx, entry) in entries.iter().enumerate() {
            if entries[..idx].iter().any(|other| other.id == entry.id) {
                return Err(RegistryError::DuplicateComponent(entry.id));
            }
            if !categories.iter().any(|meta| meta.id == entry.category) {
                return Err(RegistryError::UndeclaredCategory {
                    id: entry.id,
                    category: entry.category,
                });
            }
        }

        let slugs = SlugIndex::build(&categories, &entries)?;
        crate::debug!(
            categories = categories.len(),
            components = entries.len(),
            "component registry built"
        );
        Ok(Self {
            categories,
            entries,
            slugs,
        })
    }

    /// The built-in catalog, constructed on first use.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Registry::new(CATEGORY_METADATA.to_vec(), COMPONENT_REGISTRY.to_vec())
                .expect("built-in component registry violates its invariants")
        })
    }

    /// Category metadata in sidebar order.
    pub fn categories(&self) -> &[CategoryMeta] {
        &self.categories
    }

    /// Metadata record for a category.
    pub fn category_meta(&self, category: Category) -> Option<&CategoryMeta> {
        self.categories.iter().find(|meta| meta.id == category)
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[ComponentEntry] {
        &self.entries
    }

    /// Entries of a category, preserving registry order.
    pub fn components_in_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &ComponentEntry> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.category == category)
    }

    /// Count entries in a category.
    pub fn component_count_in_category(&self, category: Category) -> usize {
        self.components_in_category(category).count()
    }

    pub fn entry_by_id(&self, id: ComponentId) -> Option<&ComponentEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// First component of a category (if any).
    pub fn first_in_category(&self, category: Category) -> Option<ComponentId> {
        self.components_in_category(category)
            .next()
            .map(|entry| entry.id)
    }

    pub fn belongs_to_category(&self, id: ComponentId, category: Category) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.id == id && entry.category == category)
    }

    /// Next component within the same category (wraps).
    pub fn next_in_category(&self, current: ComponentId) -> Option<ComponentId> {
        self.step_in_category(current, 1)
    }

    /// Previous component within the same category (wraps).
    pub fn prev_in_category(&self, current: ComponentId) -> Option<ComponentId> {
        self.step_in_category(current, -1)
    }

    fn step_in_category(&self, current: ComponentId, delta: isize) -> Option<ComponentId> {
        let category = self.entry_by_id(current)?.category;
        let ids: Vec<ComponentId> = self
            .components_in_category(category)
            .map(|entry| entry.id)
            .collect();
        let idx = ids.iter().position(|id| *id == current)?;
        let len = ids.len() as isize;
        let next = (idx as isize + delta).rem_euclid(len) as usize;
        Some(ids[next])
    }

    /// URL slug for a category, derived from its label.
    pub fn category_to_slug(&self, category: Category) -> String {
        match self.slugs.category_slug(category) {
            Some(slug) => slug.to_owned(),
            // Undeclared categories have no label; fall back to the identifier.
            None => normalize_category_slug(category.as_str()),
        }
    }

    /// URL slug for a component id.
    pub fn component_to_slug(&self, id: ComponentId) -> String {
        component_to_slug(id)
    }

    pub fn slug_to_category(&self, slug: &str) -> Option<Category> {
        self.slugs.slug_to_category(slug)
    }

    pub fn slug_to_component_id(&self, slug: &str) -> Option<ComponentId> {
        self.slugs.slug_to_component_id(slug)
    }
}
