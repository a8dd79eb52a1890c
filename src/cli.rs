//! Command-line interface definition.
//!
//! Arguments are grouped the way the options are grouped in the config file,
//! and every getter layers CLI > config file > default.

use std::path::PathBuf;

use clap::Parser;
use hios_catalog::{
    config::{
        CatalogOptions, FileConfig,
        catalog::{DEFAULT_DOWNLOADS_PREFIX, DEFAULT_IMAGES_PREFIX, DEFAULT_ROOT},
        file::expand_tilde,
    },
    locale::Locale,
    project::ProjectStatus,
};

#[derive(Parser)]
struct CatalogArgs {
    /// Status tag assigned to every project [default: prototype]
    #[arg(long, value_enum)]
    status: Option<ProjectStatus>,

    /// Keep the filesystem's listing order instead of sorting by name
    #[arg(long)]
    unsorted: bool,
}

#[derive(Parser)]
struct LoadingArgs {
    /// The number of threads to use for loading projects (0 = one per core)
    #[arg(short = 't', long)]
    threads: Option<usize>,

    /// Show errors of projects that could not be loaded
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[derive(Parser)]
struct OutputArgs {
    /// Show a single project
    #[arg(long, conflicts_with_all = ["list", "routes"])]
    slug: Option<String>,

    /// Print project identifiers only; folders whose names are not letters,
    /// digits and '-' are flagged as skipped
    #[arg(long, conflicts_with = "routes")]
    list: bool,

    /// Print the localized page route of every project
    #[arg(long)]
    routes: bool,

    /// Locales to generate routes for (repeatable) [default: all]
    #[arg(long = "locale", value_enum, action = clap::ArgAction::Append, requires = "routes")]
    locales: Vec<Locale>,

    /// Emit JSON instead of human-readable output
    #[arg(long)]
    json: bool,
}

#[derive(Parser)]
#[command(name = "hios-catalog")]
#[command(about = "Inspect the HIOS project catalog built from a projects/ directory")]
pub(crate) struct Cli {
    /// The directory holding one folder per project [default: ./projects]
    dir: Option<PathBuf>,

    /// Record options
    #[command(flatten)]
    catalog: CatalogArgs,

    /// Loading options
    #[command(flatten)]
    loading: LoadingArgs,

    /// Output options
    #[command(flatten)]
    output: OutputArgs,
}

/// What the invocation asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Summary,
    Show(String),
    List,
    Routes,
}

impl Cli {
    pub(crate) const fn json(&self) -> bool {
        self.output.json
    }

    pub(crate) fn command(&self) -> Command {
        if let Some(slug) = &self.output.slug {
            Command::Show(slug.clone())
        } else if self.output.list {
            Command::List
        } else if self.output.routes {
            Command::Routes
        } else {
            Command::Summary
        }
    }

    pub(crate) fn directory(&self, config: &FileConfig) -> PathBuf {
        self.dir
            .clone()
            .or_else(|| config.dir.as_deref().map(expand_tilde))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT))
    }

    pub(crate) fn threads(&self, config: &FileConfig) -> usize {
        self.loading
            .threads
            .or(config.loading.threads)
            .unwrap_or(0)
    }

    pub(crate) fn locales(&self, config: &FileConfig) -> Vec<Locale> {
        if !self.output.locales.is_empty() {
            return self.output.locales.clone();
        }

        config
            .routes
            .locales
            .clone()
            .filter(|locales| !locales.is_empty())
            .unwrap_or_else(|| Locale::ALL.to_vec())
    }

    pub(crate) fn catalog_options(&self, config: &FileConfig) -> CatalogOptions {
        let file = &config.catalog;

        CatalogOptions {
            root: self.directory(config),
            status: self
                .catalog
                .status
                .or(file.status)
                .unwrap_or_default(),
            sorted: if self.catalog.unsorted {
                false
            } else {
                file.sorted.unwrap_or(true)
            },
            images_prefix: file
                .images_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_IMAGES_PREFIX.to_string()),
            downloads_prefix: file
                .downloads_prefix
                .clone()
                .unwrap_or_else(|| DEFAULT_DOWNLOADS_PREFIX.to_string()),
            verbose: self.loading.verbose || config.loading.verbose.unwrap_or(false),
        }
    }
}
