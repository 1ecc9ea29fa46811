#![forbid(unsafe_code)]

//! Route matching for `/component/{category}/{component}`.
//!
//! Segments are handed over exactly as the host router decoded them; the
//! resolver does all normalization. Query string and fragment are ignored,
//! empty segments are skipped, and anything past the second segment is
//! dropped (the canonical rewrite removes it from the address bar).

use nextforge_core::COMPONENT_ROUTE_PREFIX;

/// Parameters extracted from a catalog path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentRoute<'a> {
    /// Path without query string or fragment.
    pub pathname: &'a str,
    pub category: Option<&'a str>,
    pub component: Option<&'a str>,
}

impl<'a> ComponentRoute<'a> {
    /// Match a location against the catalog route.
    ///
    /// Returns `None` for paths outside `/component`.
    pub fn parse(location: &'a str) -> Option<Self> {
        let pathname = location.split(['?', '#']).next().unwrap_or_default();
        let rest = pathname.strip_prefix(COMPONENT_ROUTE_PREFIX)?;
        if !rest.is_empty() && !rest.starts_with('/') {
            // e.g. `/components` or `/componentTest`
            return None;
        }
        let mut segments = rest.split('/').filter(|segment| !segment.is_empty());
        Some(Self {
            pathname,
            category: segments.next(),
            component: segments.next(),
        })
    }

    /// `/component` with no segments at all.
    pub fn is_bare(&self) -> bool {
        self.category.is_none() && self.component.is_none()
    }
}
