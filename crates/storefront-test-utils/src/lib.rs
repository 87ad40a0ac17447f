//! Shared test utilities for the storefront workspace.
//!
//! This crate provides standardised settings fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`fixtures`]: settings documents as JSON values, from minimal to complete
//! - [`files`]: [`SettingsDir`] for writing documents to a temporary directory

pub mod files;
pub mod fixtures;

pub use files::SettingsDir;
