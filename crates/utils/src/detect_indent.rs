/// Detects the indentation width of text from its first indented line.
///
/// Whitespace-only lines are skipped. Returns the number of leading space or tab
/// characters on the first line that has any (a tab counts as 1), or 0 when no line is indented.
#[must_use]
pub fn detect_indent(content: &str) -> usize {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(leading_width)
        .find(|width| *width > 0)
        .unwrap_or(0)
}

/// Count of leading space and tab characters on `line`.
#[must_use]
pub fn leading_width(line: &str) -> usize {
    line.chars().take_while(|c| matches!(c, ' ' | '\t')).count()
}
