#![forbid(unsafe_code)]

//! End-to-end navigation sessions through the shell.
//!
//! Each test drives a [`NavigationShell`] the way a browser would: an initial
//! location, sidebar clicks, back/forward, and viewport changes.

use nextforge_core::{CatalogConfig, Category, ComponentId, NavState, Registry, Resolver};
use nextforge_showcase::cli::{Action, Command, Opts};
use nextforge_showcase::history::{History, MemoryHistory};
use nextforge_showcase::report::NavReport;
use nextforge_showcase::shell::NavigationShell;
use nextforge_showcase::view;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn shell_at(path: &str, width: u32) -> NavigationShell<'static, MemoryHistory> {
    NavigationShell::new(Resolver::builtin(), MemoryHistory::new(path), width)
}

// ═════════════════════════════════════════════════════════════════════════
// Scripted sessions
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn browse_session_records_history() {
    let mut shell = shell_at("/component", 1280);
    shell.sync_with_location();

    shell.select_category(Category::Cards);
    shell.select_component(ComponentId::ParallaxCard);
    shell.select_category(Category::Feedback);
    shell.select_component(ComponentId::Badge);

    assert_eq!(
        shell.history().entries(),
        [
            "/component/buttons/decrypt",
            "/component/cards/parallax_gallery",
            "/component/cards/parallax_card",
            "/component/feedback/alert",
            "/component/feedback/badge",
        ]
    );

    let outcome = shell.back().expect("previous entry");
    assert_eq!(outcome.state, NavState::new(Category::Feedback, ComponentId::Alert));
    assert_eq!(outcome.redirected_to, None);

    // Clicking after going back drops the forward entry.
    shell.select_category(Category::Background);
    assert!(shell.forward().is_none());
    assert_eq!(shell.canonical_path(), "/component/background/aurora");
}

#[test]
fn typed_variant_urls_settle_on_canonical_paths() {
    let mut shell = shell_at("/component/buttons/decrypt", 1280);
    shell.sync_with_location();

    let cases = [
        ("/component/Data_Display/AVATAR", "/component/data-display/avatar"),
        ("/component/data display/card?tab=code", "/component/data-display/card"),
        ("/component/forms/decrypt", "/component/forms/input"),
        ("/component/unknown/thing", "/component/buttons/decrypt"),
        ("/component/feedback/", "/component/feedback/alert"),
    ];
    for (typed, canonical) in cases {
        let outcome = shell.visit(typed);
        assert_eq!(outcome.redirected_to.as_deref(), Some(canonical), "{typed}");
        assert_eq!(shell.history().current_path(), canonical);
    }

    let outcome = shell.visit("/component/feedback/badge");
    assert_eq!(outcome.redirected_to, None);
}

#[test]
fn replace_does_not_grow_history() {
    let mut shell = shell_at("/component/cards/parallax_card", 1280);
    shell.sync_with_location();
    shell.visit("/component/CARDS/Parallax-Gallery");
    assert_eq!(
        shell.history().entries(),
        [
            "/component/cards/parallax_card",
            "/component/cards/parallax_gallery",
        ]
    );
}

#[test]
fn mobile_drawers_follow_clicks_and_resize() {
    let mut shell = shell_at("/component", 390);
    shell.sync_with_location();

    shell.sidebars_mut().open_left();
    assert!(shell.sidebars().scroll_locked());
    shell.select_category(Category::DataDisplay);
    assert!(!shell.sidebars().left_open());

    shell.sidebars_mut().open_right();
    let page = view::render_page(&shell);
    assert!(page.contains("* Data Display / Avatar"));
    assert!(page.contains("DATA DISPLAY"));

    shell.sidebars_mut().on_resize(1280);
    assert!(!shell.sidebars().overlay_visible());
    let page = view::render_page(&shell);
    assert!(page.contains("CATEGORIES"));
    assert!(page.contains("Data Display > Avatar"));
}

#[test]
fn configured_defaults_drive_bare_redirect() {
    let registry = Registry::builtin();
    let config = CatalogConfig::from_json_str(
        r#"{ "default_category": "cards", "default_component": "parallax_card" }"#,
    )
    .expect("valid config");
    let resolver = Resolver::new(registry, config.nav_defaults(registry).expect("valid"));

    let mut shell = NavigationShell::new(resolver, MemoryHistory::new("/component"), 1280);
    let outcome = shell.sync_with_location();
    assert_eq!(
        outcome.redirected_to.as_deref(),
        Some("/component/cards/parallax_card")
    );

    let report = NavReport::new(&shell, &outcome);
    assert_eq!(report.category_label, "Cards");
    assert_eq!(report.component_label, "Parallax Card");
}

#[test]
fn cli_actions_replay_on_shell() {
    let args: Vec<String> = [
        "--path=/component/buttons",
        "--select-category=data_display",
        "--next",
        "--select-component=decrypt",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    let Ok(Command::Run(opts)) = Opts::parse_from(&args, |_| None) else {
        panic!("expected run");
    };

    let mut shell = shell_at(&opts.path, opts.width);
    shell.sync_with_location();
    let registry = Registry::builtin();
    for action in &opts.actions {
        match action {
            Action::SelectCategory(slug) => {
                shell.select_category(registry.slug_to_category(slug).expect("known"));
            }
            Action::SelectComponent(slug) => {
                shell.select_component(registry.slug_to_component_id(slug).expect("known"));
            }
            Action::Next => {
                shell.step_component(true);
            }
            Action::Prev => {
                shell.step_component(false);
            }
            Action::Back => {
                shell.back();
            }
        }
    }

    // The Decrypt click is stale in Data Display and leaves Card selected.
    assert_eq!(
        shell.state(),
        NavState::new(Category::DataDisplay, ComponentId::Card)
    );
}

// ═════════════════════════════════════════════════════════════════════════
// Property: any session ends on a canonical path that matches the state
// ═════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
enum Step {
    Category(usize),
    Component(usize),
    Visit(String),
    Back,
    Forward,
    Resize(u32),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..Category::ALL.len()).prop_map(Step::Category),
        (0..ComponentId::ALL.len()).prop_map(Step::Component),
        "/component(/[-A-Za-z_ ]{0,12}){0,3}".prop_map(Step::Visit),
        Just(Step::Back),
        Just(Step::Forward),
        (200u32..2000).prop_map(Step::Resize),
    ]
}

proptest! {
    #[test]
    fn sessions_always_end_canonical(steps in prop::collection::vec(step_strategy(), 1..24)) {
        let mut shell = shell_at("/component", 800);
        shell.sync_with_location();

        for step in steps {
            match step {
                Step::Category(i) => {
                    shell.select_category(Category::ALL[i]);
                }
                Step::Component(i) => {
                    shell.select_component(ComponentId::ALL[i]);
                }
                Step::Visit(path) => {
                    shell.visit(path);
                }
                Step::Back => {
                    shell.back();
                }
                Step::Forward => {
                    shell.forward();
                }
                Step::Resize(width) => shell.sidebars_mut().on_resize(width),
            }

            let state = shell.state();
            let registry = shell.resolver().registry();
            prop_assert!(registry.belongs_to_category(state.component, state.category));
            prop_assert_eq!(shell.history().current_path(), shell.canonical_path());
            prop_assert!(!(shell.sidebars().is_desktop() && shell.sidebars().overlay_visible()));
        }
    }
}
