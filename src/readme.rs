//! Display name and description heuristics over README text.
//!
//! Both fields are derived from free-form markdown prose on a best-effort
//! basis. The functions here only look at lines of text so they can be tested
//! without touching the filesystem. Each scan starts from the top and the
//! first matching line wins.

/// Prefix of a top-level markdown heading (exactly one marker followed by a space).
const TITLE_PREFIX: &str = "# ";

/// Byte order mark some editors put at the start of a UTF-8 file.
const BOM: char = '\u{feff}';

/// Trim whitespace and byte order marks from both ends of a line.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

/// README text without a leading byte order mark.
fn strip_bom(readme: &str) -> &str {
    readme.strip_prefix(BOM).unwrap_or(readme)
}

/// Extract the project title from the first top-level heading.
///
/// A line qualifies when it starts with `# `; deeper headings (`## `) and
/// markers without a trailing space (`#Title`) do not. The remainder of the
/// line is trimmed and returned, so a bare `# ` heading yields an empty title.
pub fn extract_name<'a, I>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| trim_line(title).to_string())
}

/// Extract the description from the first line of prose.
///
/// The first line that is non-empty after trimming and does not start with
/// any heading marker is returned, trimmed. Indented headings (`  # x`) count
/// as prose since only the raw line start is checked.
pub fn extract_description<'a, I>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .find(|line| !trim_line(line).is_empty() && !line.starts_with('#'))
        .map(|line| trim_line(line).to_string())
}

/// Title of a project: the README heading, or the uppercased slug when there is none.
#[must_use]
pub fn display_name(readme: &str, slug: &str) -> String {
    extract_name(strip_bom(readme).lines()).unwrap_or_else(|| slug.to_uppercase())
}

/// Description of a project, empty when the README has no prose line.
#[must_use]
pub fn description(readme: &str) -> String {
    extract_description(strip_bom(readme).lines()).unwrap_or_default()
}
