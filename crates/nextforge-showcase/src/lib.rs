#![forbid(unsafe_code)]

//! NextForge showcase: the documentation shell around the catalog core.
//!
//! Owns everything the core leaves to its host: parsing the address bar,
//! a history stack, drawer state, and a text rendering of the page.

pub mod cli;
pub mod history;
pub mod report;
pub mod route;
pub mod shell;
pub mod sidebar;
pub mod view;
