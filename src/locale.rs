//! Supported site locales and locale-prefixed project routes.
//!
//! Every project detail page exists once per locale under
//! `/<locale>/projects/<slug>`. Translations themselves live with the web
//! front end; this module only knows the locale codes and how routes are
//! expanded for static page generation.

use std::fmt::{Display, Formatter};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A site language.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,

    /// Spanish
    Es,

    /// German
    De,

    /// Italian
    It,
}

impl Locale {
    /// All supported locales, default first.
    pub const ALL: [Self; 4] = [Self::En, Self::Es, Self::De, Self::It];

    /// Two-letter code used as the first path segment.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
            Self::It => "it",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Parameters of one statically generated project page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RouteParams {
    pub locale: Locale,
    pub slug: String,
}

impl RouteParams {
    /// Page path of these parameters.
    #[must_use]
    pub fn path(&self) -> String {
        project_route(self.locale, &self.slug)
    }
}

/// Page path of a project detail page: `/<locale>/projects/<slug>`.
#[must_use]
pub fn project_route(locale: Locale, slug: &str) -> String {
    format!("/{locale}/projects/{slug}")
}

/// Expand every locale with every slug, locale-major.
///
/// All slugs of the first locale come first, then all slugs of the next one.
#[must_use]
pub fn static_routes(locales: &[Locale], slugs: &[String]) -> Vec<RouteParams> {
    locales
        .iter()
        .flat_map(|&locale| {
            slugs.iter().map(move |slug| RouteParams {
                locale,
                slug: slug.clone(),
            })
        })
        .collect()
}
