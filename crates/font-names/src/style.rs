//! Style (subfamily) name cleanup and rewriting.

use log::info;
use read_fonts::types::NameId;

use crate::{
    error::{Error, Result},
    family::family_name,
    table::{NameTable, Platform},
    text::{normalize_whitespace, remove_whitespace},
};

/// The default style, elided from full names.
pub const REGULAR: &str = "Regular";

const STYLE_LOOKUP_IDS: [NameId; 2] = [NameId::TYPOGRAPHIC_SUBFAMILY_NAME, NameId::SUBFAMILY_NAME];

/// Resolve the font's current style name.
///
/// Windows-English is searched before Mac-Roman, and the typographic
/// subfamily before the legacy subfamily on each.
pub fn style_name(names: &NameTable) -> Result<&str> {
    Platform::CANONICAL
        .iter()
        .flat_map(|platform| STYLE_LOOKUP_IDS.iter().map(move |id| (*id, *platform)))
        .find_map(|(id, platform)| names.get(id, platform))
        .ok_or(Error::StyleNameNotFound)
}

/// Whether the Windows-English subfamily name contains `"Italic"`.
///
/// A font without that record is treated as upright.
pub fn is_italic(names: &NameTable) -> bool {
    names
        .get(NameId::SUBFAMILY_NAME, Platform::WINDOWS_ENGLISH)
        .is_some_and(|style| style.contains("Italic"))
}

/// Strip every occurrence of `token` from a style name.
///
/// Whitespace is normalised afterwards; an empty result becomes [`REGULAR`].
///
/// ```
/// use vfbake_font_names::clean_style_name;
///
/// assert_eq!(clean_style_name("Thin Display", "Display"), "Thin");
/// assert_eq!(clean_style_name("Display", "Display"), "Regular");
/// ```
pub fn clean_style_name(raw: &str, token: &str) -> String {
    let stripped = if token.is_empty() {
        raw.trim().to_string()
    } else {
        raw.trim().replace(token, "")
    };
    let cleaned = normalize_whitespace(&stripped);
    if cleaned.is_empty() { REGULAR.to_string() } else { cleaned }
}

/// Compose a full name, eliding [`REGULAR`].
pub fn full_name(family: &str, style: &str) -> String {
    let family = family.trim();
    if style == REGULAR { family.to_string() } else { format!("{family} {style}") }
}

/// Apply `style` as the font's style name.
///
/// Rewrites the full and PostScript names on both canonical platforms from the
/// current family name, then sets every subfamily and typographic subfamily
/// record, on any platform, to `style`.
pub fn rename_style(names: &mut NameTable, style: &str) -> Result<()> {
    let full = full_name(family_name(names)?, style);
    let postscript = remove_whitespace(&full);

    for platform in [Platform::MAC_ROMAN, Platform::WINDOWS_ENGLISH] {
        names.set(full.clone(), NameId::FULL_NAME, platform);
        names.set(postscript.clone(), NameId::POSTSCRIPT_NAME, platform);
    }

    for (key, value) in names.records_mut() {
        if STYLE_LOOKUP_IDS.contains(&key.name_id) {
            *value = style.to_string();
        }
    }

    info!("Set style '{style}': full name '{full}', PostScript name '{postscript}'");
    Ok(())
}
