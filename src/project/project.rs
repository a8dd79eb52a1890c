//! Core project record data structures and types.
//!
//! This module defines the records the catalog loader derives from each
//! project folder: the record itself, its status tag and its published
//! downloadable files.

use std::fmt::{Display, Formatter, Result};

use clap::ValueEnum;
use colored::Colorize;
use humansize::{DECIMAL, format_size};
use serde::{Deserialize, Serialize};

/// Name of the README file read from every project folder.
pub const README_FILE: &str = "README.md";

/// Raster formats accepted in a project's `pics/` gallery (compared case-insensitively).
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Development stage shown on a project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Working hardware exists
    #[default]
    Prototype,

    /// Idea and early sketches only
    Concept,

    /// Under active construction
    Wip,
}

impl ProjectStatus {
    /// Lowercase tag used in JSON and on the web pages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prototype => "prototype",
            Self::Concept => "concept",
            Self::Wip => "wip",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.as_str())
    }
}

/// Classification of a top-level file in a project folder.
///
/// Classification only looks at the file name suffix, and the comparison is
/// case-sensitive: `manual.PDF` is [`FileKind::Other`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// `.pdf` document
    Pdf,

    /// `.md` markdown document
    Md,

    /// Firmware source (`.ino`, `.cpp`, `.h`)
    Code,

    /// Anything else
    Other,
}

impl FileKind {
    /// Lowercase tag used in JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Md => "md",
            Self::Code => "code",
            Self::Other => "other",
        }
    }

    /// Classify a file by the suffix of its name.
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        if name.ends_with(".pdf") {
            Self::Pdf
        } else if name.ends_with(".md") {
            Self::Md
        } else if [".ino", ".cpp", ".h"].iter().any(|ext| name.ends_with(ext)) {
            Self::Code
        } else {
            Self::Other
        }
    }

    /// Whether a file of this kind called `name` is offered as a download.
    ///
    /// Only documents are published: every PDF, and every markdown file
    /// except the project's own README.
    #[must_use]
    pub fn is_published(self, name: &str) -> bool {
        match self {
            Self::Pdf => true,
            Self::Md => name != README_FILE,
            Self::Code | Self::Other => false,
        }
    }
}

/// Whether `name` has one of the [`IMAGE_EXTENSIONS`], ignoring case.
#[must_use]
pub fn is_gallery_image(name: &str) -> bool {
    name.rsplit_once('.').is_some_and(|(_, ext)| {
        IMAGE_EXTENSIONS
            .iter()
            .any(|allowed| ext.eq_ignore_ascii_case(allowed))
    })
}

/// A downloadable document published for a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectFile {
    /// File name as found on disk
    pub name: String,

    /// Public URL path (`/downloads/<slug>/<name>` by default)
    pub path: String,

    /// Classification of the file
    #[serde(rename = "type")]
    pub kind: FileKind,

    /// Size in bytes
    pub size: u64,
}

/// Structured representation of one project folder.
///
/// Records are derived fresh from disk on every load and never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectRecord {
    /// Identifier, taken verbatim from the folder name
    pub slug: String,

    /// Title from the README's first `# ` heading, or the uppercased slug
    pub name: String,

    /// First non-empty, non-heading README line, or empty
    pub description: String,

    /// Status tag; the configured default for every record
    pub status: ProjectStatus,

    /// Public URL paths of the gallery images
    pub images: Vec<String>,

    /// Raw README text, or empty when the folder has none
    pub readme: String,

    /// Published downloadable documents
    pub files: Vec<ProjectFile>,
}

impl ProjectRecord {
    /// Total size in bytes of the published downloads.
    #[must_use]
    pub fn download_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Print every field of the record in a human-readable layout.
    pub fn print_detail(&self) {
        println!("{}", self.to_string().bold());

        if !self.description.is_empty() {
            println!("  {}", self.description);
        }

        println!("  🏷️  Status: {}", self.status.to_string().bright_white());

        println!("  🖼️  Images: {}", self.images.len().to_string().bright_white());
        for image in &self.images {
            println!("     {image}");
        }

        println!(
            "  📄 Downloads: {} ({})",
            self.files.len().to_string().bright_white(),
            format_size(self.download_size(), DECIMAL).bright_white()
        );
        for file in &self.files {
            println!(
                "     {} [{}] {}",
                file.path,
                file.kind.as_str(),
                format_size(file.size, DECIMAL)
            );
        }

        if self.readme.is_empty() {
            println!("  {}", "No README.md".yellow());
        }
    }
}

impl Display for ProjectRecord {
    /// `🔧 Widget (widget)`
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let icon = match self.status {
            ProjectStatus::Prototype => "🔧",
            ProjectStatus::Concept => "💡",
            ProjectStatus::Wip => "🚧",
        };

        write!(f, "{icon} {} ({})", self.name, self.slug)
    }
}
