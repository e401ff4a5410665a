//! Reassemble a font with rebuilt tables.

use anyhow::Result;
use read_fonts::{FontRef, TableProvider, types::Tag};
use vfbake_font_stat::STAT_TAG;
use write_fonts::{FontBuilder, tables::name::Name};

/// Tables produced by the pipeline instead of copied from the source.
const REBUILT_TABLES: [Tag; 2] = [Tag::new(b"name"), STAT_TAG];

/// Copy every table of `font` verbatim except `name` and `STAT`, which are
/// replaced by `name` and the compiled `stat` bytes.
pub fn assemble_font(font: &FontRef, name: &Name, stat: Vec<u8>) -> Result<Vec<u8>> {
    let mut builder = FontBuilder::new();

    for record in font.table_directory.table_records() {
        let tag = record.tag();
        if REBUILT_TABLES.contains(&tag) {
            continue;
        }
        if let Some(table_data) = font.table_data(tag) {
            builder.add_raw(tag, table_data);
        }
    }

    builder.add_table(name)?;
    builder.add_raw(STAT_TAG, stat);
    Ok(builder.build())
}

/// Axis tags declared in the font's `fvar` table; empty without one.
pub fn declared_axes(font: &FontRef) -> Vec<Tag> {
    font.fvar()
        .ok()
        .and_then(|fvar| fvar.axis_instance_arrays().ok())
        .map(|arrays| arrays.axes().iter().map(|axis| axis.axis_tag()).collect())
        .unwrap_or_default()
}
