//! Project catalog loading.
//!
//! This module reads the `projects/` directory tree and turns every project
//! folder into a [`ProjectRecord`]. Nothing is cached: every call re-reads the
//! filesystem, so folders added or removed out-of-band show up on the next
//! load.
//!
//! Expected layout:
//!
//! ```text
//! projects/
//! └── <slug>/
//!     ├── README.md        name, description and raw readme
//!     ├── pics/*.jpg|png   gallery images
//!     └── *.pdf, *.md      published downloads
//! ```

use std::{
    fs,
    path::Path,
    sync::{Arc, Mutex},
};

use anyhow::{Result, anyhow};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::{
    config::CatalogOptions,
    project::{FileKind, ProjectFile, ProjectRecord, README_FILE, is_gallery_image},
    readme,
    slug::is_valid_slug,
};

/// Name of the gallery sub-directory inside a project folder.
pub const PICS_DIR: &str = "pics";

/// Loader for the project catalog.
pub struct Catalog {
    /// Configuration options for loading behavior
    options: CatalogOptions,

    /// When `true`, suppresses the progress spinner (used by `--json` mode).
    quiet: bool,
}

impl Catalog {
    /// Create a new catalog loader with the specified options.
    #[must_use]
    pub const fn new(options: CatalogOptions) -> Self {
        Self {
            options,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses progress spinner).
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The directory projects are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.options.root
    }

    /// List the identifiers of the available projects.
    ///
    /// Returns the names of the directories directly under the root.
    /// Symlinks are followed, plain files are skipped, and so are names that
    /// are not valid UTF-8.
    ///
    /// A missing root is not an error: it simply yields no projects.
    #[must_use]
    pub fn slugs(&self) -> Vec<String> {
        let root = self.root();

        if !root.is_dir() {
            return Vec::new();
        }

        self.children(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(ToOwned::to_owned))
            .collect()
    }

    /// Load one project record by slug.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` when `<root>/<slug>` is a directory
    /// - `Ok(None)` when the slug is not a valid identifier or no such
    ///   directory exists
    ///
    /// # Errors
    ///
    /// I/O failures while reading an existing project folder (unreadable
    /// README, permission errors, the folder vanishing mid-read) are returned
    /// with the offending path.
    pub fn load(&self, slug: &str) -> Result<Option<ProjectRecord>> {
        if !is_valid_slug(slug) {
            return Ok(None);
        }

        let project_path = self.root().join(slug);

        if !project_path.is_dir() {
            return Ok(None);
        }

        let text = Self::read_readme(&project_path)?;
        let images = self.collect_images(slug, &project_path.join(PICS_DIR))?;
        let files = self.collect_files(slug, &project_path)?;

        Ok(Some(ProjectRecord {
            slug: slug.to_string(),
            name: readme::display_name(&text, slug),
            description: readme::description(&text),
            status: self.options.status,
            images,
            readme: text,
            files,
        }))
    }

    /// Load every available project.
    ///
    /// Equivalent to [`Catalog::load_slugs`] over [`Catalog::slugs`].
    pub fn load_all(&self) -> Vec<ProjectRecord> {
        let slugs = self.slugs();
        self.load_slugs(&slugs)
    }

    /// Load the records of the given slugs, keeping their order.
    ///
    /// Slugs that do not resolve to a record are dropped, so a project folder
    /// deleted after listing does not abort the batch. Load errors are dropped
    /// as well and reported on stderr in verbose mode.
    pub fn load_slugs(&self, slugs: &[String]) -> Vec<ProjectRecord> {
        let errors = Arc::new(Mutex::new(Vec::<String>::new()));

        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.set_message("Loading projects...");
            pb
        };

        let records: Vec<_> = slugs
            .par_iter()
            .filter_map(|slug| match self.load(slug) {
                Ok(record) => record,
                Err(e) => {
                    if self.options.verbose
                        && let Ok(mut errors) = errors.lock()
                    {
                        errors.push(format!("Skipping {slug}: {e}"));
                    }
                    None
                }
            })
            .collect();

        progress.finish_and_clear();

        if self.options.verbose
            && let Ok(errors) = errors.lock()
        {
            for error in errors.iter() {
                eprintln!("{}", error.red());
            }
        }

        records
    }

    /// Direct children of `dir`, ordered by name when sorting is enabled.
    fn children(&self, dir: &Path) -> WalkDir {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        if self.options.sorted {
            walker.sort_by_file_name()
        } else {
            walker
        }
    }

    /// Read `README.md`, or an empty string when the project has none.
    ///
    /// Invalid UTF-8 (a README saved as Windows-1252, say) is decoded
    /// lossily with U+FFFD replacement characters instead of failing.
    fn read_readme(project_path: &Path) -> Result<String> {
        let readme_path = project_path.join(README_FILE);

        if !readme_path.is_file() {
            return Ok(String::new());
        }

        let bytes = fs::read(&readme_path)
            .map_err(|e| anyhow!("Failed to read {}: {e}", readme_path.display()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Public URLs of the raster images in the project's `pics/` folder.
    fn collect_images(&self, slug: &str, pics_path: &Path) -> Result<Vec<String>> {
        if !pics_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut images = Vec::new();

        for entry in self.children(pics_path) {
            let entry =
                entry.map_err(|e| anyhow!("Failed to read {}: {e}", pics_path.display()))?;

            if !entry.file_type().is_file() {
                continue;
            }

            if let Some(name) = entry.file_name().to_str()
                && is_gallery_image(name)
            {
                images.push(self.options.image_url(slug, name));
            }
        }

        Ok(images)
    }

    /// Published documents at the top level of the project folder.
    fn collect_files(&self, slug: &str, project_path: &Path) -> Result<Vec<ProjectFile>> {
        let mut files = Vec::new();

        for entry in self.children(project_path) {
            let entry = entry
                .map_err(|e| anyhow!("Failed to read {}: {e}", project_path.display()))?;

            if !entry.file_type().is_file() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                continue;
            };

            let kind = FileKind::from_file_name(name);
            if !kind.is_published(name) {
                continue;
            }

            let size = entry
                .metadata()
                .map_err(|e| anyhow!("Failed to read {}: {e}", entry.path().display()))?
                .len();

            files.push(ProjectFile {
                name: name.to_string(),
                path: self.options.download_url(slug, name),
                kind,
                size,
            });
        }

        Ok(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn catalog(root: &Path) -> Catalog {
        Catalog::new(CatalogOptions::with_root(root)).with_quiet(true)
    }

    #[test]
    fn test_missing_root_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let catalog = catalog(&temp.path().join("does-not-exist"));

        assert!(catalog.slugs().is_empty());
        assert!(catalog.load_all().is_empty());
    }

    #[test]
    fn test_root_that_is_a_file_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("projects");
        fs::write(&root, "not a directory").unwrap();

        assert!(catalog(&root).slugs().is_empty());
    }

    #[test]
    fn test_invalid_slug_is_not_found_without_io() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("projects");
        fs::create_dir_all(root.join("widget")).unwrap();
        fs::create_dir_all(temp.path().join("private")).unwrap();
        let catalog = catalog(&root);

        assert!(catalog.load("..").unwrap().is_none());
        assert!(catalog.load("../private").unwrap().is_none());
        assert!(catalog.load("").unwrap().is_none());
    }

    #[test]
    fn test_slug_naming_a_file_is_not_found() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes"), "x").unwrap();

        assert!(catalog(temp.path()).load("notes").unwrap().is_none());
    }

    #[test]
    fn test_empty_project_folder() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("bare")).unwrap();

        let record = catalog(temp.path()).load("bare").unwrap().unwrap();

        assert_eq!(record.slug, "bare");
        assert_eq!(record.name, "BARE");
        assert_eq!(record.description, "");
        assert_eq!(record.readme, "");
        assert!(record.images.is_empty());
        assert!(record.files.is_empty());
    }

    #[test]
    fn test_subdirectories_are_not_downloads() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("widget");
        fs::create_dir_all(project.join("docs.md")).unwrap();
        fs::create_dir_all(project.join("pics").join("nested.jpg")).unwrap();

        let record = catalog(temp.path()).load("widget").unwrap().unwrap();

        assert!(record.files.is_empty());
        assert!(record.images.is_empty());
    }

    #[test]
    fn test_non_utf8_readme_is_decoded_lossily() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("amp");
        fs::create_dir(&project).unwrap();
        fs::write(
            project.join("README.md"),
            b"# Verst\xe4rker\n\nGitarren-Effekt f\xfcr B\xfchne\n",
        )
        .unwrap();

        let record = catalog(temp.path()).load("amp").unwrap().unwrap();

        assert_eq!(record.name, "Verst\u{fffd}rker");
        assert_eq!(record.description, "Gitarren-Effekt f\u{fffd}r B\u{fffd}hne");
        assert!(record.readme.starts_with("# Verst\u{fffd}rker\n"));
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_in_project_is_an_error() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("widget");
        fs::create_dir(&project).unwrap();
        std::os::unix::fs::symlink(project.join("gone.pdf"), project.join("manual.pdf")).unwrap();

        let err = catalog(temp.path()).load("widget").unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
        assert!(err.to_string().contains("widget"));
    }

    #[test]
    fn test_status_comes_from_options() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("widget")).unwrap();

        let options = CatalogOptions {
            status: crate::project::ProjectStatus::Concept,
            ..CatalogOptions::with_root(temp.path())
        };
        let record = Catalog::new(options)
            .with_quiet(true)
            .load("widget")
            .unwrap()
            .unwrap();

        assert_eq!(record.status, crate::project::ProjectStatus::Concept);
    }
}
