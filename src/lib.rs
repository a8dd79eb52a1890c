//! # hios-catalog
//!
//! Loads the HIOS hardware project catalog from a `projects/` directory tree.
//!
//! Each sub-directory is one project. Its `README.md`, `pics/` gallery and
//! top-level documents are turned into a [`project::ProjectRecord`] that the
//! website's landing grid and detail pages render.

pub mod catalog;
pub mod config;
pub mod locale;
pub mod output;
pub mod project;
pub mod readme;
pub mod slug;
