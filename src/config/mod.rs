//! Configuration types and options for the application.
//!
//! This module contains the loader options and the persistent configuration
//! file they can be layered from.

pub mod catalog;
pub mod file;

pub use catalog::CatalogOptions;
pub use file::FileConfig;
