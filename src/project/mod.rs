//! Project record model.
//!
//! This module contains the data structures produced by the catalog loader.
//!
//! ## Main Parts
//!
//! - [`ProjectRecord`] - One project folder turned into structured data
//! - [`Projects`] - The catalog: all records loaded at one point in time
//! - [`ProjectStatus`] - Development stage tag
//! - [`ProjectFile`] / [`FileKind`] - Published downloads and their classification

#[allow(clippy::module_inception)]
pub mod project;
pub mod projects;

pub use project::{
    FileKind, IMAGE_EXTENSIONS, ProjectFile, ProjectRecord, ProjectStatus, README_FILE,
    is_gallery_image,
};
pub use projects::Projects;
