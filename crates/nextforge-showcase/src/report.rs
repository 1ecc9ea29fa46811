#![forbid(unsafe_code)]

//! JSON snapshots of navigation state and of the catalog.

use nextforge_core::{NavState, Registry, Resolver};
use serde::Serialize;

use crate::history::MemoryHistory;
use crate::shell::{NavOutcome, NavigationShell};

/// Resolved selection plus what happened to the address bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavReport {
    pub category: String,
    pub category_label: String,
    pub component: String,
    pub component_label: String,
    pub path: String,
    pub redirected_to: Option<String>,
    pub history: Vec<String>,
}

impl NavReport {
    pub fn new(shell: &NavigationShell<'_, MemoryHistory>, initial: &NavOutcome) -> Self {
        let registry = shell.resolver().registry();
        let NavState {
            category,
            component,
        } = shell.state();
        Self {
            category: registry.category_to_slug(category),
            category_label: registry
                .category_meta(category)
                .map_or_else(|| category.to_string(), |meta| meta.label.to_string()),
            component: registry.component_to_slug(component),
            component_label: registry
                .entry_by_id(component)
                .map_or_else(|| component.to_string(), |entry| entry.label.to_string()),
            path: shell.canonical_path(),
            redirected_to: initial.redirected_to.clone(),
            history: shell.history().entries().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentListing {
    pub slug: String,
    pub label: String,
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryListing {
    pub slug: String,
    pub label: String,
    pub icon: String,
    pub components: Vec<ComponentListing>,
}

/// The whole catalog, in sidebar order.
pub fn catalog_report(resolver: &Resolver<'_>) -> Vec<CategoryListing> {
    let registry: &Registry = resolver.registry();
    registry
        .categories()
        .iter()
        .map(|meta| CategoryListing {
            slug: registry.category_to_slug(meta.id),
            label: meta.label.to_string(),
            icon: meta.icon.0.to_string(),
            components: registry
                .components_in_category(meta.id)
                .map(|entry| ComponentListing {
                    slug: registry.component_to_slug(entry.id),
                    label: entry.label.to_string(),
                    path: resolver.canonical_path(meta.id, entry.id),
                })
                .collect(),
        })
        .collect()
}
