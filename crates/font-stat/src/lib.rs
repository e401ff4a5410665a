//! # STAT Table Synthesis
//!
//! Build a [STAT](https://learn.microsoft.com/en-us/typography/opentype/spec/stat)
//! table describing the optical size, weight and italic axes of a variable
//! font.
//!
//! Only format 1 (single value) and format 2 (range) axis value tables are
//! emitted. Some applications, Adobe InDesign among them, misbehave when they
//! encounter format 3 or 4 records.
//!
//! ```no_run
//! use vfbake_font_names::NameTable;
//! use vfbake_font_stat::{StatEncoding, build_stat_table};
//!
//! let mut names = NameTable::new();
//! let stat = build_stat_table(false).unwrap();
//! let bytes = stat.compile(&mut names, StatEncoding::PointsAndRanges).unwrap();
//! ```

mod axes;
mod compile;
mod error;
mod model;

pub use axes::{ITAL, OPSZ, WGHT, build_stat_table};
pub use compile::{STAT_TAG, StatEncoding};
pub use error::{Error, Result};
pub use model::{Axis, AxisValue, AxisValueKind, StatTable};
