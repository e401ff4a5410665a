//! Error types for name table operations.

/// Result type for name table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading or rewriting a name table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The font could not be parsed.
    #[error("Font read error: {0}")]
    ReadError(#[from] read_fonts::ReadError),

    /// The font has no `name` table.
    #[error("Font has no name table")]
    MissingNameTable,

    /// No family name record exists on the Windows or Mac platforms.
    #[error("Family name not found")]
    FamilyNameNotFound,

    /// No subfamily name record exists on the Windows or Mac platforms.
    #[error("Style name not found")]
    StyleNameNotFound,

    /// Every name ID up to 32767 is taken.
    #[error("No unused name ID at or above {0}")]
    NameIdsExhausted(u16),
}
