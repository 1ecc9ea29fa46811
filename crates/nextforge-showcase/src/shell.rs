#![forbid(unsafe_code)]

//! Navigation shell: glues the resolver to the address bar and the sidebars.
//!
//! Every event runs to completion before the state is observable: the new
//! [`NavState`] is computed in one call and only then stored and written to
//! history.
//!
//! | Event | State | History |
//! |-------|-------|---------|
//! | location change | resolve the route | `replace` if not canonical |
//! | bare `/component` | configured defaults | `replace` |
//! | category click | first component of category | `push` if changed |
//! | component click (same category) | clicked component | `push` if changed |
//! | component click (stale) | unchanged | untouched |

use nextforge_core::{Category, ComponentEntry, ComponentId, NavState, Resolver};
use tracing::{debug, info};

use crate::history::History;
use crate::route::ComponentRoute;
use crate::sidebar::SidebarState;

/// Result of syncing with the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavOutcome {
    pub state: NavState,
    /// Canonical path written with `replace`, if the location was not canonical.
    pub redirected_to: Option<String>,
}

pub struct NavigationShell<'a, H: History> {
    resolver: Resolver<'a>,
    history: H,
    state: NavState,
    sidebars: SidebarState,
}

impl<'a, H: History> NavigationShell<'a, H> {
    /// Create a shell whose selection reflects the current location.
    ///
    /// The address is not rewritten until [`sync_with_location`] runs.
    ///
    /// [`sync_with_location`]: Self::sync_with_location
    pub fn new(resolver: Resolver<'a>, history: H, viewport_width: u32) -> Self {
        let state = Self::state_for(&resolver, history.current_path())
            .unwrap_or_else(|| resolver.default_state());
        Self {
            resolver,
            history,
            state,
            sidebars: SidebarState::new(viewport_width),
        }
    }

    fn state_for(resolver: &Resolver<'a>, location: &str) -> Option<NavState> {
        let route = ComponentRoute::parse(location)?;
        if route.is_bare() {
            Some(resolver.default_state())
        } else {
            Some(resolver.resolve(route.category, route.component))
        }
    }

    /// Route change: resolve the location and rewrite it to canonical form.
    ///
    /// Locations outside the catalog leave the selection untouched.
    pub fn sync_with_location(&mut self) -> NavOutcome {
        let location = self.history.current_path().to_owned();
        let Some(route) = ComponentRoute::parse(&location) else {
            debug!(location = %location, "location outside the component catalog");
            return NavOutcome {
                state: self.state,
                redirected_to: None,
            };
        };

        let state = if route.is_bare() {
            self.resolver.default_state()
        } else {
            self.resolver.resolve(route.category, route.component)
        };
        self.state = state;

        let target = self.resolver.path_of(state);
        let redirected_to = if route.pathname != target {
            info!(from = %location, to = %target, "rewriting to canonical path");
            self.history.replace(target.clone());
            Some(target)
        } else {
            None
        };

        NavOutcome {
            state,
            redirected_to,
        }
    }

    /// User typed or followed a link: push it, then sync.
    pub fn visit(&mut self, location: impl Into<String>) -> NavOutcome {
        self.history.push(location.into());
        self.sync_with_location()
    }

    /// Browser back button.
    pub fn back(&mut self) -> Option<NavOutcome> {
        self.history.back().then(|| self.sync_with_location())
    }

    /// Browser forward button.
    pub fn forward(&mut self) -> Option<NavOutcome> {
        self.history.forward().then(|| self.sync_with_location())
    }

    /// Left sidebar click.
    pub fn select_category(&mut self, category: Category) -> NavState {
        let next = self.resolver.on_category_selected(category);
        self.navigate_to(next);
        self.sidebars.close_left();
        next
    }

    /// Right sidebar click. Stale clicks from another category are ignored.
    pub fn select_component(&mut self, id: ComponentId) -> NavState {
        let Some(next) = self.resolver.try_select_component(self.state, id) else {
            return self.state;
        };
        self.navigate_to(next);
        self.sidebars.close_right();
        next
    }

    /// Step to the next (or previous) component of the active category.
    pub fn step_component(&mut self, forward: bool) -> NavState {
        let registry = self.resolver.registry();
        let target = if forward {
            registry.next_in_category(self.state.component)
        } else {
            registry.prev_in_category(self.state.component)
        };
        match target {
            Some(id) => self.select_component(id),
            None => self.state,
        }
    }

    fn navigate_to(&mut self, state: NavState) {
        self.state = state;
        let target = self.resolver.path_of(state);
        let current = ComponentRoute::parse(self.history.current_path()).map(|r| r.pathname);
        if current != Some(target.as_str()) {
            debug!(to = %target, "pushing navigation");
            self.history.push(target);
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    /// Registry entry of the active component.
    pub fn active_entry(&self) -> Option<&'a ComponentEntry> {
        self.resolver.registry().entry_by_id(self.state.component)
    }

    pub fn resolver(&self) -> &Resolver<'a> {
        &self.resolver
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    pub fn sidebars(&self) -> &SidebarState {
        &self.sidebars
    }

    pub fn sidebars_mut(&mut self) -> &mut SidebarState {
        &mut self.sidebars
    }

    /// Canonical path of the active selection.
    pub fn canonical_path(&self) -> String {
        self.resolver.path_of(self.state)
    }
}
