#![forbid(unsafe_code)]

//! Catalog configuration.
//!
//! The default selection is configuration, not code. It is written as slugs
//! so a config file reads like the URLs it affects:
//!
//! ```json
//! { "default_category": "cards", "default_component": "parallax_card" }
//! ```
//!
//! Missing keys keep the built-in defaults. Slugs go through the same
//! normalization as URL segments, so `"Data Display"` is accepted.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, ComponentId};
use crate::registry::Registry;
use crate::resolver::NavDefaults;

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised while loading or validating configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(std::io::Error),
    /// The config file is not valid JSON for [`CatalogConfig`].
    Parse(serde_json::Error),
    /// `default_category` names no registered category.
    UnknownCategory(String),
    /// `default_component` names no registered component.
    UnknownComponent(String),
    /// The default component is not part of the default category.
    DefaultMismatch {
        category: Category,
        component: ComponentId,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::UnknownCategory(slug) => {
                write!(f, "unknown default category: {slug:?}")
            }
            ConfigError::UnknownComponent(slug) => {
                write!(f, "unknown default component: {slug:?}")
            }
            ConfigError::DefaultMismatch {
                category,
                component,
            } => write!(
                f,
                "default component {component} does not belong to default category {category}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

// ─────────────────────────────────────────────────────────────────────────────
// Config
// ─────────────────────────────────────────────────────────────────────────────

/// User-facing catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Category slug used when the URL names none (or an unknown one).
    pub default_category: String,
    /// Component slug used for the bare `/component` redirect.
    pub default_component: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_category: "buttons".into(),
            default_component: "decrypt".into(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        crate::info!(path = %path.display(), "loaded catalog config");
        Ok(config)
    }

    /// Decode and validate the defaults against a registry.
    pub fn nav_defaults(&self, registry: &Registry) -> ConfigResult<NavDefaults> {
        let category = registry
            .slug_to_category(&self.default_category)
            .ok_or_else(|| ConfigError::UnknownCategory(self.default_category.clone()))?;
        let component = registry
            .slug_to_component_id(&self.default_component)
            .ok_or_else(|| ConfigError::UnknownComponent(self.default_component.clone()))?;
        if !registry.belongs_to_category(component, category) {
            return Err(ConfigError::DefaultMismatch {
                category,
                component,
            });
        }
        Ok(NavDefaults {
            category,
            component,
        })
    }
}
