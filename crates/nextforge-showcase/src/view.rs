#![forbid(unsafe_code)]

//! Plain-text rendering of the documentation page.
//!
//! Desktop layout shows the category list, the component panel, and the
//! component list in that order. Mobile layout shows a one-line header with
//! the current selection, any open drawers, and the panel.

use nextforge_core::{NavState, Registry};

use crate::history::History;
use crate::shell::NavigationShell;

const ACTIVE_MARKER: &str = ">";
const INACTIVE_MARKER: &str = " ";
const RULE: &str = "----------------------------------------";

fn marker(active: bool) -> &'static str {
    if active { ACTIVE_MARKER } else { INACTIVE_MARKER }
}

/// Category list with the active category marked.
pub fn left_sidebar(registry: &Registry, state: NavState) -> Vec<String> {
    let mut lines = vec!["CATEGORIES".to_string()];
    lines.extend(registry.categories().iter().map(|meta| {
        format!(
            "{} [{}] {}",
            marker(meta.id == state.category),
            meta.icon.0,
            meta.label
        )
    }));
    lines
}

/// Components of the active category, in registry order.
pub fn right_sidebar(registry: &Registry, state: NavState) -> Vec<String> {
    let header = registry
        .category_meta(state.category)
        .map_or_else(|| state.category.to_string(), |meta| meta.label.to_string());
    let mut lines = vec![header.to_uppercase()];

    let before = lines.len();
    lines.extend(
        registry
            .components_in_category(state.category)
            .map(|entry| format!("{} {}", marker(entry.id == state.component), entry.label)),
    );
    if lines.len() == before {
        lines.push("No components available in this category yet.".to_string());
    }
    lines
}

/// Breadcrumb, source tab, and preview of the active component.
pub fn component_panel(registry: &Registry, state: NavState) -> Vec<String> {
    let Some(entry) = registry.entry_by_id(state.component) else {
        return vec![
            "No Component Selected".to_string(),
            "Select a component from the right sidebar.".to_string(),
        ];
    };
    let category_label = registry
        .category_meta(state.category)
        .map_or(state.category.as_str(), |meta| meta.label);
    let preview = entry.preview();

    vec![
        format!("{category_label} > {}", entry.label),
        "Interactive component preview and usage guide.".to_string(),
        String::new(),
        format!("[ {} ]", registry.component_to_slug(entry.id)),
        format!("{}: {}", preview.title, preview.summary),
    ]
}

/// Mobile sub-header: `Category / Component`.
pub fn mobile_header(registry: &Registry, state: NavState) -> String {
    let category = registry
        .category_meta(state.category)
        .map_or(state.category.as_str(), |meta| meta.label);
    let component = registry
        .entry_by_id(state.component)
        .map_or(state.component.as_str(), |entry| entry.label);
    format!("* {category} / {component}")
}

/// Render the whole page for the shell's current state.
pub fn render_page<H: History>(shell: &NavigationShell<'_, H>) -> String {
    let registry = shell.resolver().registry();
    let state = shell.state();
    let sidebars = shell.sidebars();

    let mut sections: Vec<Vec<String>> = Vec::new();
    if sidebars.is_desktop() {
        sections.push(left_sidebar(registry, state));
        sections.push(component_panel(registry, state));
        sections.push(right_sidebar(registry, state));
    } else {
        sections.push(vec![mobile_header(registry, state)]);
        if sidebars.left_open() {
            sections.push(left_sidebar(registry, state));
        }
        if sidebars.right_open() {
            sections.push(right_sidebar(registry, state));
        }
        sections.push(component_panel(registry, state));
    }

    let mut out = format!("{}\n{RULE}\n", shell.canonical_path());
    let separator = format!("\n{RULE}\n");
    let body: Vec<String> = sections.into_iter().map(|lines| lines.join("\n")).collect();
    out.push_str(&body.join(separator.as_str()));
    out.push('\n');
    out
}

/// Every category with its components and canonical paths.
pub fn catalog_listing(registry: &Registry, path_of: impl Fn(NavState) -> String) -> String {
    let mut lines = Vec::new();
    for meta in registry.categories() {
        lines.push(format!(
            "{} ({}) [{}]",
            meta.label,
            registry.category_to_slug(meta.id),
            meta.icon.0
        ));
        let mut any = false;
        for entry in registry.components_in_category(meta.id) {
            any = true;
            lines.push(format!(
                "  {:<18} {}",
                entry.label,
                path_of(NavState::new(meta.id, entry.id))
            ));
        }
        if !any {
            lines.push("  (empty)".to_string());
        }
    }
    lines.join("\n") + "\n"
}
