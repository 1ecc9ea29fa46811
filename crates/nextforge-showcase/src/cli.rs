#![forbid(unsafe_code)]

//! Command-line argument parsing for the showcase binary.
//!
//! Parses args by hand to keep the binary lean. Environment variables with
//! the `NEXTFORGE_*` prefix supply defaults; explicit flags override them.

use std::env;
use std::fmt;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
NextForge UI component catalog navigator

USAGE:
    nextforge-showcase [OPTIONS]

OPTIONS:
    --path=PATH                Initial location (default: /component)
    --select-category=SLUG     Simulate a category click (repeatable, applied in order)
    --select-component=SLUG    Simulate a component click (repeatable, applied in order)
    --next / --prev            Step to the next/previous component in the category
    --back                     Simulate the browser back button
    --width=N                  Viewport width in px (default: 1280)
    --config=FILE              JSON config with default_category / default_component
    --default-category=SLUG    Override the default category
    --default-component=SLUG   Override the default component
    --json                     Print a JSON report instead of the text view
    --list                     Print the whole catalog and exit
    --log-json                 Emit logs as JSON lines on stderr
    --help, -h                 Show this help message
    --version, -V              Show version

ENVIRONMENT VARIABLES:
    NEXTFORGE_PATH                Override --path
    NEXTFORGE_CONFIG              Override --config
    NEXTFORGE_DEFAULT_CATEGORY    Override --default-category
    NEXTFORGE_DEFAULT_COMPONENT   Override --default-component
    NEXTFORGE_WIDTH               Override --width
    NEXTFORGE_LOG                 Log filter (e.g. debug, nextforge_core=trace)";

/// A scripted UI event, applied after the initial route sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCategory(String),
    SelectComponent(String),
    Next,
    Prev,
    Back,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// Initial location.
    pub path: String,
    /// Events applied in command-line order.
    pub actions: Vec<Action>,
    /// Viewport width in px.
    pub width: u32,
    /// Optional JSON config file.
    pub config: Option<PathBuf>,
    /// Default category slug, overriding the config file.
    pub default_category: Option<String>,
    /// Default component slug, overriding the config file.
    pub default_component: Option<String>,
    pub json: bool,
    pub list: bool,
    pub log_json: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            path: "/component".into(),
            actions: Vec::new(),
            width: 1280,
            config: None,
            default_category: None,
            default_component: None,
            json: false,
            list: false,
            log_json: false,
        }
    }
}

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    UnknownArgument(String),
    InvalidValue { flag: &'static str, value: String },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
            CliError::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
        }
    }
}

impl std::error::Error for CliError {}

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Command, CliError> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::parse_from(&args, |key| env::var(key).ok())
    }

    /// Parse an argument list with an injectable environment lookup.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse_from(
        args: &[String],
        env_var: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, CliError> {
        let mut opts = Self::default();

        // Apply environment variable defaults first
        if let Some(val) = env_var("NEXTFORGE_PATH") {
            opts.path = val;
        }
        if let Some(val) = env_var("NEXTFORGE_CONFIG") {
            opts.config = Some(PathBuf::from(val));
        }
        if let Some(val) = env_var("NEXTFORGE_DEFAULT_CATEGORY") {
            opts.default_category = Some(val);
        }
        if let Some(val) = env_var("NEXTFORGE_DEFAULT_COMPONENT") {
            opts.default_component = Some(val);
        }
        if let Some(val) = env_var("NEXTFORGE_WIDTH")
            && let Ok(n) = val.parse()
        {
            opts.width = n;
        }

        // Parse command-line args (override env vars)
        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--json" => opts.json = true,
                "--list" => opts.list = true,
                "--log-json" => opts.log_json = true,
                "--next" => opts.actions.push(Action::Next),
                "--prev" => opts.actions.push(Action::Prev),
                "--back" => opts.actions.push(Action::Back),
                other => {
                    if let Some(val) = other.strip_prefix("--path=") {
                        opts.path = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--select-category=") {
                        opts.actions.push(Action::SelectCategory(val.to_string()));
                    } else if let Some(val) = other.strip_prefix("--select-component=") {
                        opts.actions.push(Action::SelectComponent(val.to_string()));
                    } else if let Some(val) = other.strip_prefix("--width=") {
                        opts.width = val.parse().map_err(|_| CliError::InvalidValue {
                            flag: "--width",
                            value: val.to_string(),
                        })?;
                    } else if let Some(val) = other.strip_prefix("--config=") {
                        opts.config = Some(PathBuf::from(val));
                    } else if let Some(val) = other.strip_prefix("--default-category=") {
                        opts.default_category = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--default-component=") {
                        opts.default_component = Some(val.to_string());
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}
