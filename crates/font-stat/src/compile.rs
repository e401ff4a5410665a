//! Compile the STAT model into table bytes.

use log::debug;
use read_fonts::types::Tag;
use vfbake_font_names::NameTable;
use write_fonts::{
    dump_table,
    tables::stat::{AxisRecord, AxisValue as WriteAxisValue, Stat},
    types::Fixed,
};

use crate::{
    error::{Error, Result},
    model::{AxisValueKind, StatTable},
};

pub const STAT_TAG: Tag = Tag::new(b"STAT");

/// First name ID used for strings the table introduces.
const MIN_STAT_NAME_ID: u16 = 256;

/// How axis values are laid out in the compiled table.
///
/// Formats 3 (linked value) and 4 (multi-axis location) are not provided:
/// applications such as InDesign misbehave on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatEncoding {
    /// Format 1 for point values, format 2 for ranges.
    ///
    /// Neither format has a linked-value field, so links stay in the model.
    #[default]
    PointsAndRanges,
}

impl StatTable {
    /// Convert to a writable table, registering every axis and value name in
    /// `names`.
    pub fn to_write_table(&self, names: &mut NameTable, encoding: StatEncoding) -> Result<Stat> {
        let mut design_axes = Vec::with_capacity(self.axes().len());
        let mut axis_values = Vec::new();

        for (axis_index, axis) in self.axes().iter().enumerate() {
            let axis_name_id = names.add_name(axis.name(), MIN_STAT_NAME_ID)?;
            design_axes.push(AxisRecord::new(axis.tag(), axis_name_id, axis.ordering()));

            for value in axis.values() {
                let value_name_id = names.add_name(value.name(), MIN_STAT_NAME_ID)?;
                let record = match (encoding, value.kind()) {
                    (StatEncoding::PointsAndRanges, AxisValueKind::Point(v)) => {
                        WriteAxisValue::format_1(
                            axis_index as u16,
                            value.flags(),
                            value_name_id,
                            Fixed::from_f64(v),
                        )
                    }
                    (StatEncoding::PointsAndRanges, AxisValueKind::Range { nominal, min, max }) => {
                        WriteAxisValue::format_2(
                            axis_index as u16,
                            value.flags(),
                            value_name_id,
                            Fixed::from_f64(nominal),
                            Fixed::from_f64(min),
                            Fixed::from_f64(max),
                        )
                    }
                };
                axis_values.push(record);
            }

            debug!(
                "STAT axis '{}' ({}, ordering {}): {} values",
                axis.tag(),
                axis.name(),
                axis.ordering(),
                axis.values().len()
            );
        }

        Ok(Stat::new(design_axes, axis_values, self.elided_fallback_name_id()))
    }

    /// Compile to a version 1.1 STAT table.
    ///
    /// Version 1.1 and 1.2 share a header layout; 1.2 only adds format 4
    /// axis values, which are never emitted, so the minor version is lowered.
    pub fn compile(&self, names: &mut NameTable, encoding: StatEncoding) -> Result<Vec<u8>> {
        let stat = self.to_write_table(names, encoding)?;
        let mut bytes = dump_table(&stat).map_err(|e| Error::Compile(e.to_string()))?;
        bytes[2..4].copy_from_slice(&1u16.to_be_bytes());
        Ok(bytes)
    }
}
