//! Resolver scenarios against custom registries and injected defaults.

use nextforge_core::preview::{Preview, RenderFn};
use nextforge_core::{
    CatalogConfig, Category, CategoryMeta, ComponentEntry, ComponentId, IconRef, NavDefaults,
    NavState, Registry, Resolver,
};
use pretty_assertions::assert_eq;

fn placeholder() -> Preview {
    Preview {
        title: "placeholder",
        summary: "",
    }
}

const PLACEHOLDER: RenderFn = placeholder;

fn meta(id: Category, label: &'static str) -> CategoryMeta {
    CategoryMeta {
        id,
        label,
        icon: IconRef("box"),
    }
}

fn entry(id: ComponentId, category: Category) -> ComponentEntry {
    ComponentEntry {
        id,
        label: id.as_str(),
        category,
        render: PLACEHOLDER,
    }
}

/// Buttons has two components, Forms is declared but empty.
fn sparse_registry() -> Registry {
    Registry::new(
        vec![meta(Category::Buttons, "Buttons"), meta(Category::Forms, "Forms")],
        vec![
            entry(ComponentId::PulseButton, Category::Buttons),
            entry(ComponentId::Decrypt, Category::Buttons),
        ],
    )
    .expect("valid registry")
}

#[test]
fn empty_category_falls_back_to_default_component() {
    let registry = sparse_registry();
    let resolver = Resolver::new(
        &registry,
        NavDefaults {
            category: Category::Buttons,
            component: ComponentId::Decrypt,
        },
    );

    assert_eq!(
        resolver.resolve(Some("forms"), None),
        NavState::new(Category::Forms, ComponentId::Decrypt)
    );
    assert_eq!(
        resolver.on_category_selected(Category::Forms),
        NavState::new(Category::Forms, ComponentId::Decrypt)
    );
}

#[test]
fn empty_input_uses_first_of_default_category() {
    let registry = sparse_registry();
    let resolver = Resolver::new(
        &registry,
        NavDefaults {
            category: Category::Buttons,
            component: ComponentId::Decrypt,
        },
    );
    // Insertion order decides: PulseButton was registered first.
    assert_eq!(
        resolver.resolve(None, None),
        NavState::new(Category::Buttons, ComponentId::PulseButton)
    );
    // The bare-path redirect uses the configured pair as-is.
    assert_eq!(resolver.default_path(), "/component/buttons/decrypt");
}

#[test]
fn configured_defaults_drive_fallback() {
    let registry = Registry::builtin();
    let defaults = CatalogConfig::from_json_str(
        r#"{ "default_category": "Cards", "default_component": "parallax-gallery" }"#,
    )
    .and_then(|config| config.nav_defaults(registry))
    .expect("valid config");
    let resolver = Resolver::new(registry, defaults);

    assert_eq!(
        resolver.resolve(None, None),
        NavState::new(Category::Cards, ComponentId::ParallaxGallery)
    );
    assert_eq!(
        resolver.resolve(Some("not-a-category"), Some("parallax_card")),
        NavState::new(Category::Cards, ComponentId::ParallaxCard)
    );
    assert_eq!(resolver.default_path(), "/component/cards/parallax_gallery");
}

#[test]
fn absent_and_empty_segments_behave_alike() {
    let resolver = Resolver::builtin();
    assert_eq!(resolver.resolve(Some(""), Some("")), resolver.resolve(None, None));
    assert_eq!(
        resolver.resolve(Some("   "), Some("\t")),
        resolver.resolve(None, None)
    );
}

#[test]
fn canonical_paths_for_builtin_catalog() {
    let resolver = Resolver::builtin();
    let paths: Vec<String> = resolver
        .registry()
        .entries()
        .iter()
        .map(|entry| resolver.canonical_path(entry.category, entry.id))
        .collect();
    assert_eq!(
        paths,
        vec![
            "/component/background/aurora",
            "/component/buttons/decrypt",
            "/component/buttons/button_3d",
            "/component/buttons/wave_button",
            "/component/buttons/pulse_button",
            "/component/cards/parallax_gallery",
            "/component/cards/parallax_card",
            "/component/data-display/avatar",
            "/component/data-display/card",
            "/component/forms/input",
            "/component/feedback/alert",
            "/component/feedback/badge",
        ]
    );
}

#[test]
fn registry_is_shareable_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let resolver = Resolver::builtin();
                let category = Category::ALL[i % Category::ALL.len()];
                resolver.on_category_selected(category)
            })
        })
        .collect();
    for handle in handles {
        let state = handle.join().expect("thread panicked");
        assert!(
            Registry::builtin().belongs_to_category(state.component, state.category),
            "inconsistent state {state:?}"
        );
    }
}
