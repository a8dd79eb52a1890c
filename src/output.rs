//! JSON documents printed by `--json` mode.
//!
//! The catalog document is what the page renderer consumes: the full records,
//! field names matching the web front end's project type.

use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::{
    locale::{Locale, RouteParams},
    project::ProjectRecord,
    slug::is_valid_slug,
};

/// Full catalog as one JSON document.
#[derive(Serialize)]
pub struct JsonOutput {
    /// When the catalog was read (RFC 3339, local time)
    pub generated_at: String,

    /// Catalog root the records were read from
    pub root: String,

    /// Number of records
    pub count: usize,

    pub projects: Vec<ProjectRecord>,
}

impl JsonOutput {
    /// Build the document for the records read from `root`.
    #[must_use]
    pub fn from_projects(root: &Path, projects: &[ProjectRecord]) -> Self {
        Self::at(Local::now(), root, projects)
    }

    fn at(now: DateTime<Local>, root: &Path, projects: &[ProjectRecord]) -> Self {
        Self {
            generated_at: now.to_rfc3339(),
            root: root.display().to_string(),
            count: projects.len(),
            projects: projects.to_vec(),
        }
    }
}

/// One folder of the catalog root, as printed by `--list`.
#[derive(Serialize)]
pub struct JsonSlug {
    pub slug: String,

    /// Whether the name passes slug validation; `false` folders are never loaded
    pub loadable: bool,
}

impl From<String> for JsonSlug {
    fn from(slug: String) -> Self {
        Self {
            loadable: is_valid_slug(&slug),
            slug,
        }
    }
}

/// One statically generated page.
#[derive(Serialize)]
pub struct JsonRoute {
    pub locale: Locale,
    pub slug: String,
    pub path: String,
}

/// Every locale × slug page route.
#[derive(Serialize)]
pub struct JsonRoutes {
    pub count: usize,
    pub routes: Vec<JsonRoute>,
}

impl From<Vec<RouteParams>> for JsonRoutes {
    fn from(params: Vec<RouteParams>) -> Self {
        let routes: Vec<_> = params
            .into_iter()
            .map(|p| JsonRoute {
                path: p.path(),
                locale: p.locale,
                slug: p.slug,
            })
            .collect();

        Self {
            count: routes.len(),
            routes,
        }
    }
}
