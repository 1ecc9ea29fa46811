#![forbid(unsafe_code)]

//! Navigation resolver.
//!
//! Turns raw, possibly missing or bogus URL segments into a [`NavState`]
//! that always names a registered component inside its category. Every
//! branch has a fallback; nothing here returns an error.
//!
//! ```text
//! category  = slug_to_category(raw_category)  ?? defaults.category
//! candidate = slug_to_component_id(raw_component)
//! component = candidate if it belongs to category
//!           ?? first_in_category(category)
//!           ?? defaults.component
//! ```

use crate::catalog::{Category, ComponentId};
use crate::registry::Registry;

/// Path prefix shared by every catalog route.
pub const COMPONENT_ROUTE_PREFIX: &str = "/component";

/// The active (category, component) selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NavState {
    pub category: Category,
    pub component: ComponentId,
}

impl NavState {
    pub const fn new(category: Category, component: ComponentId) -> Self {
        Self {
            category,
            component,
        }
    }
}

/// Fallback selection used when the URL names nothing usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavDefaults {
    pub category: Category,
    pub component: ComponentId,
}

impl Default for NavDefaults {
    fn default() -> Self {
        Self {
            category: Category::Buttons,
            component: ComponentId::Decrypt,
        }
    }
}

impl From<NavDefaults> for NavState {
    fn from(defaults: NavDefaults) -> Self {
        NavState::new(defaults.category, defaults.component)
    }
}

/// Resolves navigation input against a registry.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    registry: &'a Registry,
    defaults: NavDefaults,
}

impl Resolver<'static> {
    /// Resolver over the built-in registry with the built-in defaults.
    pub fn builtin() -> Self {
        Resolver::new(Registry::builtin(), NavDefaults::default())
    }
}

impl<'a> Resolver<'a> {
    pub fn new(registry: &'a Registry, defaults: NavDefaults) -> Self {
        Self { registry, defaults }
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    pub fn defaults(&self) -> NavDefaults {
        self.defaults
    }

    /// Resolve raw route segments into a valid selection.
    pub fn resolve(&self, raw_category: Option<&str>, raw_component: Option<&str>) -> NavState {
        let category = match raw_category.and_then(|slug| self.registry.slug_to_category(slug)) {
            Some(category) => category,
            None => {
                if raw_category.is_some() {
                    crate::debug!(
                        raw = raw_category.unwrap_or_default(),
                        fallback = %self.defaults.category,
                        "unknown category slug, using default"
                    );
                }
                self.defaults.category
            }
        };

        let candidate = raw_component.and_then(|slug| self.registry.slug_to_component_id(slug));
        let component = match candidate {
            Some(id) if self.registry.belongs_to_category(id, category) => id,
            mismatched => {
                if mismatched.is_some() {
                    crate::debug!(
                        component = ?mismatched,
                        category = %category,
                        "component does not belong to category, using first"
                    );
                }
                self.first_or_default(category)
            }
        };

        let state = NavState::new(category, component);
        crate::trace!(
            category = %state.category,
            component = %state.component,
            "navigation resolved"
        );
        state
    }

    /// Switching category always selects that category's first component.
    pub fn on_category_selected(&self, category: Category) -> NavState {
        NavState::new(category, self.first_or_default(category))
    }

    /// Select a component inside the current category.
    ///
    /// A component from another category (a stale sidebar click) leaves the
    /// state unchanged.
    pub fn on_component_selected(&self, current: NavState, id: ComponentId) -> NavState {
        self.try_select_component(current, id).unwrap_or(current)
    }

    /// Like [`on_component_selected`](Self::on_component_selected), but a
    /// stale selection yields `None` instead of the unchanged state.
    pub fn try_select_component(&self, current: NavState, id: ComponentId) -> Option<NavState> {
        if self.registry.belongs_to_category(id, current.category) {
            Some(NavState::new(current.category, id))
        } else {
            crate::debug!(
                component = %id,
                category = %current.category,
                "ignoring selection outside the active category"
            );
            None
        }
    }

    /// `/component/{category-slug}/{component-slug}`
    pub fn canonical_path(&self, category: Category, component: ComponentId) -> String {
        format!(
            "{COMPONENT_ROUTE_PREFIX}/{}/{}",
            self.registry.category_to_slug(category),
            self.registry.component_to_slug(component)
        )
    }

    /// Canonical path of a resolved state.
    pub fn path_of(&self, state: NavState) -> String {
        self.canonical_path(state.category, state.component)
    }

    /// Selection used when the route has no segments at all.
    pub fn default_state(&self) -> NavState {
        self.defaults.into()
    }

    /// Redirect target for a bare `/component` request.
    pub fn default_path(&self) -> String {
        self.path_of(self.default_state())
    }

    fn first_or_default(&self, category: Category) -> ComponentId {
        match self.registry.first_in_category(category) {
            Some(id) => id,
            None => {
                crate::warn!(
                    category = %category,
                    fallback = %self.defaults.component,
                    "category has no components; registry is misconfigured"
                );
                self.defaults.component
            }
        }
    }
}
