//! # Font Names
//!
//! Family and style renaming over an owned model of a font's `name` table.
//!
//! ```no_run
//! use read_fonts::FontRef;
//! use vfbake_font_names::{NameTable, rename_family, rename_style};
//!
//! let data = std::fs::read("Inter.var.ttf").unwrap();
//! let font = FontRef::new(&data).unwrap();
//! let mut names = NameTable::from_font(&font).unwrap();
//! rename_family(&mut names, "Inter Variable").unwrap();
//! rename_style(&mut names, "Regular").unwrap();
//! ```

mod error;
mod family;
mod style;
mod table;
mod text;

pub use error::{Error, Result};
pub use family::{
    FAMILY_RELATED_IDS, FamilyCandidates, FieldPolicy, family_name, postscript_variants,
    rename_family,
};
pub use style::{REGULAR, clean_style_name, full_name, is_italic, rename_style, style_name};
pub use table::{NameKey, NameTable, Platform};
pub use text::{normalize_whitespace, remove_whitespace, replace_first_match};
