//! The fixed axis set: optical size, weight and italic.

use read_fonts::types::Tag;

use crate::{
    error::Result,
    model::{Axis, AxisValue, StatTable},
};

pub const OPSZ: Tag = Tag::new(b"opsz");
pub const WGHT: Tag = Tag::new(b"wght");
pub const ITAL: Tag = Tag::new(b"ital");

/// Optical size ranges: (name, nominal, min, max).
const OPTICAL_SIZES: [(&str, f64, f64, f64); 2] =
    [("14pt", 14.0, 14.0, 21.0), ("28pt", 28.0, 21.0, 28.0)];

/// Weight stops: (name, nominal, min, max).
const WEIGHTS: [(&str, f64, f64, f64); 9] = [
    ("Thin", 100.0, 100.0, 150.0),
    ("ExtraLight", 200.0, 150.0, 250.0),
    ("Light", 300.0, 250.0, 350.0),
    ("Regular", 400.0, 350.0, 450.0),
    ("Medium", 500.0, 450.0, 540.0),
    ("SemiBold", 580.0, 540.0, 620.0),
    ("Bold", 660.0, 620.0, 720.0),
    ("ExtraBold", 780.0, 720.0, 840.0),
    ("Black", 900.0, 840.0, 900.0),
];

const REGULAR_WEIGHT: f64 = 400.0;

/// Weight paired with Regular for style linking.
const BOLD_WEIGHT: f64 = 660.0;

/// Build the STAT model for an upright or italic font.
///
/// Regular is elidable and linked to Bold. An italic font gets a single
/// "Italic" value at 1; an upright font gets an elidable "Roman" value at 0
/// linked to 1.
pub fn build_stat_table(is_italic: bool) -> Result<StatTable> {
    let optical_size = Axis::new("opsz", "Optical Size", 0)?.with_values(
        OPTICAL_SIZES
            .iter()
            .map(|&(name, nominal, min, max)| AxisValue::range(name, nominal, min, max))
            .collect::<Result<Vec<_>>>()?,
    );

    let weight = Axis::new("wght", "Weight", 1)?.with_values(
        WEIGHTS
            .iter()
            .map(|&(name, nominal, min, max)| {
                let value = AxisValue::range(name, nominal, min, max)?;
                Ok(if nominal == REGULAR_WEIGHT {
                    value.elidable().linked_to(BOLD_WEIGHT)
                } else {
                    value
                })
            })
            .collect::<Result<Vec<_>>>()?,
    );

    let italic_value = if is_italic {
        AxisValue::point("Italic", 1.0)
    } else {
        AxisValue::point("Roman", 0.0).elidable().linked_to(1.0)
    };
    let italic = Axis::new("ital", "Italic", 2)?.with_values([italic_value]);

    StatTable::new(vec![optical_size, weight, italic])
}
