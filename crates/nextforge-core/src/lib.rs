#![forbid(unsafe_code)]

//! Core: component catalog, slug codec, and navigation resolution.
//!
//! Everything here is built once and read-only afterwards. Resolution is a
//! single synchronous call that always yields a complete [`NavState`].

pub mod catalog;
pub mod config;
pub mod logging;
pub mod preview;
pub mod registry;
pub mod resolver;
pub mod slug;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, info, trace, warn};

pub use catalog::{Category, ComponentId};
pub use config::{CatalogConfig, ConfigError};
pub use preview::Preview;
pub use registry::{CategoryMeta, ComponentEntry, IconRef, Registry, RegistryError};
pub use resolver::{COMPONENT_ROUTE_PREFIX, NavDefaults, NavState, Resolver};
