//! Collection management for loaded project records.
//!
//! This module provides the `Projects` struct which wraps the records of a
//! catalog and offers lookup and summary reporting on them.

use colored::Colorize;
use humansize::{DECIMAL, format_size};

use super::{ProjectRecord, ProjectStatus};

/// The full set of records derived from all project directories at one point in time.
pub struct Projects(Vec<ProjectRecord>);

impl From<Vec<ProjectRecord>> for Projects {
    fn from(projects: Vec<ProjectRecord>) -> Self {
        Self(projects)
    }
}

impl<'a> IntoIterator for &'a Projects {
    type Item = &'a ProjectRecord;
    type IntoIter = std::slice::Iter<'a, ProjectRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Projects {
    /// Get the number of projects in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the catalog holds no project at all.
    ///
    /// An empty catalog is a valid state (missing or empty `projects/` root).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the records in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[ProjectRecord] {
        &self.0
    }

    /// Look up a record by slug.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<&ProjectRecord> {
        self.0.iter().find(|p| p.slug == slug)
    }

    /// Calculate the total size of all published downloads in the collection.
    #[must_use]
    pub fn total_download_size(&self) -> u64 {
        self.0.iter().map(ProjectRecord::download_size).sum()
    }

    /// Number of records carrying the given status.
    #[must_use]
    pub fn count_by_status(&self, status: ProjectStatus) -> usize {
        self.0.iter().filter(|p| p.status == status).count()
    }

    /// Print one line per project followed by catalog totals.
    ///
    /// # Output Format
    ///
    /// ```text
    ///   🔧 Widget (widget) - 3 images, 2 downloads
    ///   🔧 AMP-01 (amp-01) - 0 images, 0 downloads
    ///
    ///   🔧 2 prototypes
    ///   🖼️  3 gallery images
    ///   💾 Total downloads: 1.2 MB
    /// ```
    pub fn print_summary(&self) {
        for project in &self.0 {
            println!(
                "  {} - {} images, {} downloads",
                project,
                project.images.len(),
                project.files.len()
            );
        }

        println!();

        for (status, icon, label) in [
            (ProjectStatus::Prototype, "🔧", "prototypes"),
            (ProjectStatus::Concept, "💡", "concepts"),
            (ProjectStatus::Wip, "🚧", "works in progress"),
        ] {
            let count = self.count_by_status(status);
            if count > 0 {
                println!("  {icon} {} {label}", count.to_string().bright_white());
            }
        }

        let images: usize = self.0.iter().map(|p| p.images.len()).sum();
        println!("  🖼️  {} gallery images", images.to_string().bright_white());

        println!(
            "  💾 Total downloads: {}",
            format_size(self.total_download_size(), DECIMAL)
                .bright_green()
                .bold()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{FileKind, ProjectFile};

    fn record(slug: &str, status: ProjectStatus, sizes: &[u64]) -> ProjectRecord {
        ProjectRecord {
            slug: slug.to_string(),
            name: slug.to_uppercase(),
            description: String::new(),
            status,
            images: vec![format!("/images/{slug}/cover.jpg")],
            readme: String::new(),
            files: sizes
                .iter()
                .enumerate()
                .map(|(i, &size)| ProjectFile {
                    name: format!("doc{i}.pdf"),
                    path: format!("/downloads/{slug}/doc{i}.pdf"),
                    kind: FileKind::Pdf,
                    size,
                })
                .collect(),
        }
    }

    #[test]
    fn test_empty_collection() {
        let projects = Projects::from(vec![]);

        assert!(projects.is_empty());
        assert_eq!(projects.len(), 0);
        assert_eq!(projects.total_download_size(), 0);
        assert!(projects.find("anything").is_none());
    }

    #[test]
    fn test_find_and_totals() {
        let projects = Projects::from(vec![
            record("amp-01", ProjectStatus::Prototype, &[100, 200]),
            record("synth", ProjectStatus::Concept, &[50]),
        ]);

        assert_eq!(projects.len(), 2);
        assert_eq!(projects.total_download_size(), 350);
        assert_eq!(projects.find("synth").map(|p| p.name.as_str()), Some("SYNTH"));
        assert_eq!(projects.count_by_status(ProjectStatus::Prototype), 1);
        assert_eq!(projects.count_by_status(ProjectStatus::Wip), 0);
    }

    #[test]
    fn test_iteration_keeps_catalog_order() {
        let projects = Projects::from(vec![
            record("b", ProjectStatus::Prototype, &[]),
            record("a", ProjectStatus::Prototype, &[]),
        ]);

        let slugs: Vec<_> = projects.into_iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
    }
}
