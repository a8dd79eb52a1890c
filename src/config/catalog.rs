//! Catalog loader configuration.
//!
//! This module defines the options that control where the catalog is read
//! from and how records are built.

use std::path::PathBuf;

use crate::project::ProjectStatus;

/// Default catalog root, relative to the working directory.
pub const DEFAULT_ROOT: &str = "projects";

/// Default URL prefix of gallery images.
pub const DEFAULT_IMAGES_PREFIX: &str = "/images";

/// Default URL prefix of downloadable files.
pub const DEFAULT_DOWNLOADS_PREFIX: &str = "/downloads";

/// Configuration for the catalog loader.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogOptions {
    /// Directory holding one sub-directory per project
    pub root: PathBuf,

    /// Status assigned to every record
    ///
    /// Project folders carry no status information, so this is a catalog-wide
    /// setting rather than something read from disk.
    pub status: ProjectStatus,

    /// Whether slugs, images and files are ordered by file name
    ///
    /// When `false` the host filesystem's enumeration order is kept, which is
    /// platform-dependent.
    pub sorted: bool,

    /// URL prefix for gallery images (`<prefix>/<slug>/<file>`)
    pub images_prefix: String,

    /// URL prefix for downloadable files (`<prefix>/<slug>/<file>`)
    pub downloads_prefix: String,

    /// Whether to report per-project load errors on stderr
    pub verbose: bool,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            status: ProjectStatus::default(),
            sorted: true,
            images_prefix: DEFAULT_IMAGES_PREFIX.to_string(),
            downloads_prefix: DEFAULT_DOWNLOADS_PREFIX.to_string(),
            verbose: false,
        }
    }
}

impl CatalogOptions {
    /// Options reading from `root`, everything else at its default.
    #[must_use]
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Public URL of a gallery image.
    #[must_use]
    pub fn image_url(&self, slug: &str, file_name: &str) -> String {
        join_url(&self.images_prefix, slug, file_name)
    }

    /// Public URL of a downloadable file.
    #[must_use]
    pub fn download_url(&self, slug: &str, file_name: &str) -> String {
        join_url(&self.downloads_prefix, slug, file_name)
    }
}

fn join_url(prefix: &str, slug: &str, file_name: &str) -> String {
    format!("{}/{slug}/{file_name}", prefix.trim_end_matches('/'))
}
