#![forbid(unsafe_code)]

//! NextForge showcase binary entry point.

use std::error::Error;
use std::process;

use nextforge_core::{CatalogConfig, Registry, Resolver};
use nextforge_showcase::cli::{self, Action, Command, Opts};
use nextforge_showcase::history::{History, MemoryHistory};
use nextforge_showcase::report::{NavReport, catalog_report};
use nextforge_showcase::shell::NavigationShell;
use nextforge_showcase::view;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_env("NEXTFORGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        eprintln!("Failed to install log subscriber: {e}");
    }
}

fn load_config(opts: &Opts) -> Result<CatalogConfig, Box<dyn Error>> {
    let mut config = match &opts.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    if let Some(category) = &opts.default_category {
        config.default_category = category.clone();
    }
    if let Some(component) = &opts.default_component {
        config.default_component = component.clone();
    }
    Ok(config)
}

fn apply_action<H: History>(shell: &mut NavigationShell<'_, H>, action: &Action) {
    let registry: &Registry = shell.resolver().registry();
    match action {
        Action::SelectCategory(slug) => match registry.slug_to_category(slug) {
            Some(category) => {
                shell.select_category(category);
            }
            None => warn!(slug = %slug, "unknown category, skipping"),
        },
        Action::SelectComponent(slug) => match registry.slug_to_component_id(slug) {
            Some(id) => {
                shell.select_component(id);
            }
            None => warn!(slug = %slug, "unknown component, skipping"),
        },
        Action::Next => {
            shell.step_component(true);
        }
        Action::Prev => {
            shell.step_component(false);
        }
        Action::Back => {
            if shell.back().is_none() {
                warn!("history has no previous entry");
            }
        }
    }
}

fn run(opts: &Opts) -> Result<(), Box<dyn Error>> {
    let registry = Registry::builtin();
    let defaults = load_config(opts)?.nav_defaults(registry)?;
    let resolver = Resolver::new(registry, defaults);

    if opts.list {
        if opts.json {
            println!("{}", serde_json::to_string_pretty(&catalog_report(&resolver))?);
        } else {
            print!(
                "{}",
                view::catalog_listing(registry, |state| resolver.path_of(state))
            );
        }
        return Ok(());
    }

    let mut shell = NavigationShell::new(resolver, MemoryHistory::new(&opts.path), opts.width);
    let initial = shell.sync_with_location();
    for action in &opts.actions {
        apply_action(&mut shell, action);
    }

    if opts.json {
        println!("{}", NavReport::new(&shell, &initial).to_json()?);
    } else {
        print!("{}", view::render_page(&shell));
    }
    Ok(())
}

fn main() {
    let opts = match Opts::parse() {
        Ok(Command::Run(opts)) => opts,
        Ok(Command::Help) => {
            println!("{}", cli::HELP_TEXT);
            return;
        }
        Ok(Command::Version) => {
            println!("nextforge-showcase {}", cli::VERSION);
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Run with --help for usage information.");
            process::exit(2);
        }
    };

    init_tracing(opts.log_json);

    if let Err(e) = run(&opts) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
