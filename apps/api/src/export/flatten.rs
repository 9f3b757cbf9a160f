//! Strips template markup from a resume before it is laid out.

/// Removes `**` bold markers, trims each line and drops blank lines.
///
/// Returns an empty vector when nothing printable is left.
pub fn flatten_resume(text: &str) -> Vec<String> {
    text.replace("**", "")
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
