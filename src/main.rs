//! # hios-catalog
//!
//! Inspect the HIOS hardware project catalog built from a `projects/`
//! directory: one folder per project, each with an optional `README.md`,
//! a `pics/` gallery and downloadable documents.
//!
//! ## Usage
//!
//! ```bash
//! # Summary of every project under ./projects
//! hios-catalog
//!
//! # One project, as the JSON record the detail page renders
//! hios-catalog --slug amp-01 --json
//!
//! # Localized page routes to pre-render
//! hios-catalog --routes --locale en --locale es
//! ```

mod cli;

use std::process::exit;

use anyhow::{Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use colored::Colorize;
use hios_catalog::{
    catalog::Catalog,
    config::FileConfig,
    locale::static_routes,
    output::{JsonOutput, JsonRoutes, JsonSlug},
    project::Projects,
    slug::{is_valid_slug, list_line},
};

/// Entry point for the hios-catalog application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// This function:
/// 1. Parses command-line arguments
/// 2. Loads the persistent configuration file (if present)
/// 3. Configures the thread pool used to load projects
/// 4. Runs the requested command against the catalog
///
/// # Errors
///
/// This function can return errors from:
/// - Thread pool configuration
/// - Reading a single requested project
/// - JSON serialization
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    let json_mode = args.json();

    let file_config = match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            if !json_mode {
                eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            }
            FileConfig::default()
        }
    };

    let options = args.catalog_options(&file_config);
    let threads = args.threads(&file_config);

    if threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    let catalog = Catalog::new(options).with_quiet(json_mode);

    match args.command() {
        Command::Show(slug) => {
            let Some(project) = catalog.load(&slug)? else {
                bail!("project not found: {slug}");
            };

            if json_mode {
                println!("{}", serde_json::to_string_pretty(&project)?);
            } else {
                project.print_detail();
            }
        }
        Command::List => {
            let slugs = catalog.slugs();

            if json_mode {
                let listing: Vec<_> = slugs.into_iter().map(JsonSlug::from).collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for slug in &slugs {
                    println!("{}", list_line(slug));
                }
            }
        }
        Command::Routes => {
            let slugs: Vec<_> = catalog
                .slugs()
                .into_iter()
                .filter(|slug| is_valid_slug(slug))
                .collect();
            let routes = static_routes(&args.locales(&file_config), &slugs);

            if json_mode {
                let output = JsonRoutes::from(routes);
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                for route in &routes {
                    println!("{}", route.path());
                }
            }
        }
        Command::Summary => {
            let projects: Projects = catalog.load_all().into();

            if json_mode {
                let output = JsonOutput::from_projects(catalog.root(), projects.as_slice());
                println!("{}", serde_json::to_string_pretty(&output)?);
                return Ok(());
            }

            if projects.is_empty() {
                println!(
                    "{} {}",
                    "✨ No projects found in".green(),
                    catalog.root().display()
                );
                return Ok(());
            }

            println!("Found {} projects\n", projects.len());
            println!("{}", "📦 Projects:".bold());
            projects.print_summary();
        }
    }

    Ok(())
}
