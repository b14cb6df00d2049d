use indent_tracker_core::IndentTracker;

use crate::{detect_indent, leading_width};

/// Re-renders indented text through `tracker`.
///
/// The source indent width is taken from [`detect_indent`]; each line's nesting level is its
/// leading width divided by that width (any remainder is dropped). The tracker is moved to
/// that level before the stripped line is formatted. Whitespace-only lines become empty and
/// leave the level untouched.
pub fn reindent(content: &str, mut tracker: IndentTracker) -> Vec<String> {
    let source_width = detect_indent(content);
    tracing::debug!(source_width, "reindenting content");

    content
        .lines()
        .map(|line| {
            let body = line.trim_start_matches([' ', '\t']);
            if body.is_empty() {
                return tracker.format("");
            }
            let level = leading_width(line).checked_div(source_width).unwrap_or(0);
            move_to_level(&mut tracker, level);
            tracker.format(body)
        })
        .collect()
}

fn move_to_level(tracker: &mut IndentTracker, level: usize) {
    let current = tracker.level();
    if level > current {
        tracker.increment_by(level - current);
    } else {
        tracker.decrement_by(current - level);
    }
}
