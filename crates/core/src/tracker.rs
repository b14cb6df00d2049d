/// Spaces contributed by each level when no width is given.
pub const DEFAULT_SPACES_PER_LEVEL: usize = 2;

/// Tracks the current nesting level and pads lines with `spaces_per_level * level` spaces.
///
/// Callers increment when entering a nested block and decrement when leaving it.
/// The level never drops below root, and empty lines are never padded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentTracker {
    spaces_per_level: usize,
    level: usize,
}

impl IndentTracker {
    /// Tracker at root level with [`DEFAULT_SPACES_PER_LEVEL`] spaces per level.
    #[must_use]
    pub fn new() -> Self {
        Self {
            spaces_per_level: DEFAULT_SPACES_PER_LEVEL,
            level: 0,
        }
    }

    /// Tracker at root level with the given width per level.
    ///
    /// A negative width is clamped to zero, producing a tracker that never indents.
    #[must_use]
    pub fn with_spaces_per_level(spaces_per_level: i64) -> Self {
        let spaces_per_level = usize::try_from(spaces_per_level.max(0)).unwrap_or(usize::MAX);
        Self {
            spaces_per_level,
            level: 0,
        }
    }

    pub fn spaces_per_level(&self) -> usize {
        self.spaces_per_level
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn increment(&mut self) {
        self.increment_by(1);
    }

    pub fn increment_by(&mut self, levels: usize) {
        self.level = self.level.saturating_add(levels);
    }

    pub fn decrement(&mut self) {
        self.decrement_by(1);
    }

    /// Moves `levels` towards root, stopping at root.
    pub fn decrement_by(&mut self, levels: usize) {
        if self.level < levels {
            tracing::debug!(
                level = self.level,
                levels,
                "decrement past root level, clamping to root"
            );
            self.level = 0;
        } else {
            self.level -= levels;
        }
    }

    pub fn is_at_root_level(&self) -> bool {
        self.level == 0
    }

    /// Padding for the current level: `spaces_per_level * level` spaces.
    ///
    /// The padding is allocated in full, so callers accepting untrusted widths or levels
    /// should bound them first (see `Config::MAX_SPACES_PER_LEVEL` and `Config::MAX_LEVEL`).
    pub fn indentation(&self) -> String {
        " ".repeat(self.spaces_per_level.saturating_mul(self.level))
    }

    /// Prefix `line` with the current indentation of `spaces_per_level * level` spaces.
    ///
    /// Absent or empty lines yield an empty string at every level.
    pub fn format<'a>(&self, line: impl Into<Option<&'a str>>) -> String {
        match line.into() {
            None | Some("") => String::new(),
            Some(line) => format!("{}{}", self.indentation(), line),
        }
    }
}

impl Default for IndentTracker {
    fn default() -> Self {
        Self::new()
    }
}
