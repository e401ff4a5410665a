//! Typed model of a STAT table: axes and their named values.

use read_fonts::types::{NameId, Tag};
use write_fonts::tables::stat::AxisValueTableFlags;

use crate::error::{Error, Result};

/// Where an axis value sits on its axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisValueKind {
    /// A single design coordinate.
    Point(f64),
    /// A nominal coordinate and the range it names.
    Range { nominal: f64, min: f64, max: f64 },
}

/// A named value on one design axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisValue {
    name: String,
    kind: AxisValueKind,
    elidable: bool,
    linked_value: Option<f64>,
}

impl AxisValue {
    pub fn point(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            kind: AxisValueKind::Point(value),
            elidable: false,
            linked_value: None,
        }
    }

    /// A range value; fails unless `min <= nominal <= max`.
    pub fn range(name: impl Into<String>, nominal: f64, min: f64, max: f64) -> Result<Self> {
        let name = name.into();
        if !(min <= nominal && nominal <= max) {
            return Err(Error::InvalidRange { name, nominal, min, max });
        }
        Ok(Self {
            name,
            kind: AxisValueKind::Range { nominal, min, max },
            elidable: false,
            linked_value: None,
        })
    }

    /// Mark the value as the axis default, omitted when composing names.
    pub fn elidable(mut self) -> Self {
        self.elidable = true;
        self
    }

    /// Link this value to its style-linked counterpart on the same axis.
    pub fn linked_to(mut self, value: f64) -> Self {
        self.linked_value = Some(value);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AxisValueKind {
        self.kind
    }

    /// The point value, or the nominal value of a range.
    pub fn nominal(&self) -> f64 {
        match self.kind {
            AxisValueKind::Point(value) => value,
            AxisValueKind::Range { nominal, .. } => nominal,
        }
    }

    pub fn is_elidable(&self) -> bool {
        self.elidable
    }

    pub fn linked_value(&self) -> Option<f64> {
        self.linked_value
    }

    pub fn flags(&self) -> AxisValueTableFlags {
        let mut flags = AxisValueTableFlags::empty();
        if self.elidable {
            flags |= AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME;
        }
        flags
    }
}

/// A design axis and its named values.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    tag: Tag,
    name: String,
    ordering: u16,
    values: Vec<AxisValue>,
}

impl Axis {
    /// Create an axis; `tag` must be four printable ASCII characters.
    pub fn new(tag: &str, name: impl Into<String>, ordering: u16) -> Result<Self> {
        let bytes: [u8; 4] = tag
            .as_bytes()
            .try_into()
            .map_err(|_| Error::InvalidTag(tag.to_string()))?;
        if !bytes.iter().all(|b| (0x20..=0x7e).contains(b)) {
            return Err(Error::InvalidTag(tag.to_string()));
        }
        Ok(Self { tag: Tag::new(&bytes), name: name.into(), ordering, values: Vec::new() })
    }

    pub fn with_values(mut self, values: impl IntoIterator<Item = AxisValue>) -> Self {
        self.values.extend(values);
        self
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ordering(&self) -> u16 {
        self.ordering
    }

    pub fn values(&self) -> &[AxisValue] {
        &self.values
    }

    /// Find a value by its point or nominal coordinate.
    pub fn value_at(&self, nominal: f64) -> Option<&AxisValue> {
        self.values.iter().find(|v| v.nominal() == nominal)
    }
}

/// Axes of a STAT table, declared in ordering order.
#[derive(Debug, Clone, PartialEq)]
pub struct StatTable {
    axes: Vec<Axis>,
    elided_fallback_name_id: NameId,
}

impl StatTable {
    /// Create a table; axes are declared by ascending ordering.
    ///
    /// The elided fallback name defaults to the legacy subfamily name (ID 2).
    pub fn new(mut axes: Vec<Axis>) -> Result<Self> {
        for (i, axis) in axes.iter().enumerate() {
            if axes[..i].iter().any(|other| other.tag == axis.tag) {
                return Err(Error::DuplicateAxis(axis.tag));
            }
        }
        axes.sort_by_key(|axis| axis.ordering);
        Ok(Self { axes, elided_fallback_name_id: NameId::SUBFAMILY_NAME })
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn axis(&self, tag: Tag) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.tag == tag)
    }

    pub fn elided_fallback_name_id(&self) -> NameId {
        self.elided_fallback_name_id
    }

    /// Axis tags not present in `declared`, typically the font's `fvar` axes.
    pub fn undeclared_axes(&self, declared: &[Tag]) -> Vec<Tag> {
        self.axes.iter().map(|axis| axis.tag).filter(|tag| !declared.contains(tag)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_tag_validation() {
        assert!(Axis::new("wght", "Weight", 0).is_ok());
        assert!(matches!(Axis::new("wgt", "Weight", 0), Err(Error::InvalidTag(_))));
        assert!(matches!(Axis::new("weight", "Weight", 0), Err(Error::InvalidTag(_))));
        assert!(matches!(Axis::new("wg\tt", "Weight", 0), Err(Error::InvalidTag(_))));
    }

    #[test]
    fn test_range_validation() {
        assert!(AxisValue::range("Bold", 660.0, 620.0, 720.0).is_ok());
        assert!(AxisValue::range("Black", 900.0, 840.0, 900.0).is_ok());
        assert!(matches!(
            AxisValue::range("Bad", 100.0, 150.0, 200.0),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_value_flags() {
        let roman = AxisValue::point("Roman", 0.0).elidable().linked_to(1.0);
        assert!(roman.flags().contains(AxisValueTableFlags::ELIDABLE_AXIS_VALUE_NAME));
        assert_eq!(roman.linked_value(), Some(1.0));
        assert_eq!(AxisValue::point("Italic", 1.0).flags(), AxisValueTableFlags::empty());
    }

    #[test]
    fn test_table_orders_axes() {
        let table = StatTable::new(vec![
            Axis::new("ital", "Italic", 2).unwrap(),
            Axis::new("opsz", "Optical Size", 0).unwrap(),
            Axis::new("wght", "Weight", 1).unwrap(),
        ])
        .unwrap();
        let tags: Vec<Tag> = table.axes().iter().map(Axis::tag).collect();
        assert_eq!(tags, vec![Tag::new(b"opsz"), Tag::new(b"wght"), Tag::new(b"ital")]);
    }

    #[test]
    fn test_table_rejects_duplicate_axes() {
        let result = StatTable::new(vec![
            Axis::new("wght", "Weight", 0).unwrap(),
            Axis::new("wght", "Weight", 1).unwrap(),
        ]);
        assert!(matches!(result, Err(Error::DuplicateAxis(_))));
    }

    #[test]
    fn test_undeclared_axes() {
        let table = StatTable::new(vec![
            Axis::new("opsz", "Optical Size", 0).unwrap(),
            Axis::new("wght", "Weight", 1).unwrap(),
        ])
        .unwrap();
        assert_eq!(table.undeclared_axes(&[Tag::new(b"wght")]), vec![Tag::new(b"opsz")]);
    }
}
