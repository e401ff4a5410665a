//! Configuration for a bake run.

use std::path::PathBuf;

/// Family name applied when none is given.
pub const DEFAULT_FAMILY: &str = "Inter Variable";

/// Substring scrubbed from style names.
pub const STRIP_STYLE_TOKEN: &str = "Display";

/// Settings for a single bake run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BakeOptions {
    /// Family name to rename to.
    pub family: String,
    /// Output path; `None` overwrites the input.
    pub output: Option<PathBuf>,
}

impl BakeOptions {
    /// Build options from optional overrides; an empty family falls back to
    /// [`DEFAULT_FAMILY`].
    pub fn new(family: Option<String>, output: Option<PathBuf>) -> Self {
        let family = family.filter(|f| !f.is_empty()).unwrap_or_else(|| DEFAULT_FAMILY.into());
        Self { family, output }
    }
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self::new(None, None)
    }
}
