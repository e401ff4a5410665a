//! Error types for STAT synthesis.

use read_fonts::types::Tag;

/// Result type for STAT synthesis.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while modelling or compiling a STAT table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Axis tag isn't four printable ASCII characters.
    #[error("Invalid axis tag '{0}': expected four printable ASCII characters")]
    InvalidTag(String),

    /// Range bounds don't enclose the nominal value.
    #[error("Invalid range for '{name}': expected {min} <= {nominal} <= {max}")]
    InvalidRange { name: String, nominal: f64, min: f64, max: f64 },

    /// Two axes share a tag.
    #[error("Duplicate axis tag '{0}'")]
    DuplicateAxis(Tag),

    /// Registering a name string failed.
    #[error("Name table error: {0}")]
    Names(#[from] vfbake_font_names::Error),

    /// The table failed validation while compiling.
    #[error("Failed to compile STAT table: {0}")]
    Compile(String),
}
