//! Slug validation.
//!
//! Slugs come from URLs and are joined onto the catalog root, so they are
//! checked against an allow-list before any path is built from them.

use colored::Colorize;

/// Whether `slug` is safe to use as a project folder name.
///
/// Accepts non-empty strings made of ASCII letters, digits and `-`. Anything
/// else (path separators, `..`, whitespace, non-ASCII) is rejected.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slug.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// One line of the `--list` output.
///
/// Folder names that fail [`is_valid_slug`] are still listed, but flagged,
/// since loading and route generation skip them.
#[must_use]
pub fn list_line(slug: &str) -> String {
    if is_valid_slug(slug) {
        slug.to_string()
    } else {
        format!(
            "{slug} {}",
            "(skipped: name must use only letters, digits and '-')".yellow()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_url_safe_slugs() {
        assert!(is_valid_slug("widget"));
        assert!(is_valid_slug("amp-01"));
        assert!(is_valid_slug("HIOS-Synth-2"));
        assert!(is_valid_slug("-"));
    }

    #[test]
    fn test_rejects_path_traversal() {
        assert!(!is_valid_slug(".."));
        assert!(!is_valid_slug("../secrets"));
        assert!(!is_valid_slug("a/b"));
        assert!(!is_valid_slug("a\\b"));
        assert!(!is_valid_slug("/etc"));
    }

    #[test]
    fn test_rejects_other_characters() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("with space"));
        assert!(!is_valid_slug("under_score"));
        assert!(!is_valid_slug("dot.ted"));
        assert!(!is_valid_slug("café"));
    }

    #[test]
    fn test_list_line_flags_unloadable_names() {
        assert_eq!(list_line("amp-01"), "amp-01");

        let line = list_line("draft copy");
        assert!(line.starts_with("draft copy "));
        assert!(line.contains("skipped"));
    }
}
