//! vfbake core: finalise the names and STAT table of a variable font.
//!
//! The pipeline renames the family, scrubs "Display" from the style name and
//! synthesises a STAT table, then writes the font.

pub mod config;
pub mod font;
pub mod io;
pub mod pipeline;

pub use config::{BakeOptions, DEFAULT_FAMILY, STRIP_STYLE_TOKEN};
pub use pipeline::{bake, bake_file};
