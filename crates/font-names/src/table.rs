//! Owned, mutable model of a font's `name` table.

use std::{collections::BTreeMap, fmt};

use log::{debug, warn};
use read_fonts::{
    FontRef, ReadError, TableProvider,
    tables::name::Encoding,
    types::NameId,
};
use write_fonts::tables::name::{LangTagRecord, Name, NameRecord};

use crate::error::{Error, Result};

/// Largest name ID the allocator will hand out.
const MAX_NAME_ID: u32 = 32767;

/// A platform/encoding/language triple identifying where a record applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Platform {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
}

impl Platform {
    /// Windows, Unicode BMP, English (United States).
    pub const WINDOWS_ENGLISH: Self = Self::new(3, 1, 0x409);

    /// Macintosh, Roman, English.
    pub const MAC_ROMAN: Self = Self::new(1, 0, 0);

    /// Platforms consulted when resolving family and style names, in order.
    pub const CANONICAL: [Self; 2] = [Self::WINDOWS_ENGLISH, Self::MAC_ROMAN];

    pub const fn new(platform_id: u16, encoding_id: u16, language_id: u16) -> Self {
        Self { platform_id, encoding_id, language_id }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{:#x}", self.platform_id, self.encoding_id, self.language_id)
    }
}

/// Key of a single name record.
///
/// The derived ordering (platform, encoding, language, name ID) is the order
/// the binary table requires its records to be sorted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameKey {
    pub platform: Platform,
    pub name_id: NameId,
}

impl NameKey {
    pub const fn new(name_id: NameId, platform: Platform) -> Self {
        Self { platform, name_id }
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nameID {} ({})", self.name_id.to_u16(), self.platform)
    }
}

/// Human-readable string records of a font, keyed by [`NameKey`].
///
/// Language tags of a version 1 table are carried alongside; records with a
/// language ID of `0x8000 + n` refer to the `n`th tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
    records: BTreeMap<NameKey, String>,
    lang_tags: Option<Vec<String>>,
}

impl NameTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode every record of the font's `name` table.
    ///
    /// Records in an encoding other than UTF-16BE or Mac Roman can be neither
    /// decoded nor written back, so they are dropped with a warning, as are
    /// records whose string data is out of bounds.
    pub fn from_font(font: &FontRef) -> Result<Self> {
        let name = match font.name() {
            Ok(name) => name,
            Err(ReadError::TableIsMissing(_)) => return Err(Error::MissingNameTable),
            Err(e) => return Err(e.into()),
        };

        let mut records = BTreeMap::new();
        for record in name.name_record() {
            let platform =
                Platform::new(record.platform_id(), record.encoding_id(), record.language_id());
            let key = NameKey::new(record.name_id(), platform);
            if Encoding::new(platform.platform_id, platform.encoding_id) == Encoding::Unknown {
                warn!("Dropping {key}: unsupported encoding");
                continue;
            }
            match record.string(name.string_data()) {
                Ok(s) => {
                    records.insert(key, s.chars().collect::<String>());
                }
                Err(e) => warn!("Dropping {key}: {e}"),
            }
        }

        let lang_tags = name
            .lang_tag_record()
            .map(|tags| {
                tags.iter()
                    .map(|tag| Ok(tag.lang_tag(name.string_data())?.chars().collect()))
                    .collect::<Result<Vec<String>>>()
            })
            .transpose()?;

        Ok(Self { records, lang_tags })
    }

    /// Look up a record; absent records are `None`, never an error.
    pub fn get(&self, name_id: NameId, platform: Platform) -> Option<&str> {
        self.records.get(&NameKey::new(name_id, platform)).map(String::as_str)
    }

    /// Create or overwrite a record.
    pub fn set(&mut self, value: impl Into<String>, name_id: NameId, platform: Platform) {
        self.records.insert(NameKey::new(name_id, platform), value.into());
    }

    /// Whether any platform carries a record for `name_id`.
    pub fn has_name_id(&self, name_id: NameId) -> bool {
        self.records.keys().any(|key| key.name_id == name_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NameKey, &str)> {
        self.records.iter().map(|(key, value)| (key, value.as_str()))
    }

    /// Mutable access to every record, for bulk rewrites.
    pub fn records_mut(&mut self) -> impl Iterator<Item = (&NameKey, &mut String)> {
        self.records.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Language tags of a version 1 table; `None` for version 0.
    pub fn lang_tags(&self) -> Option<&[String]> {
        self.lang_tags.as_deref()
    }

    /// Find a name ID at or above `min_name_id` whose Windows-English and
    /// Mac-Roman records both equal `value`.
    pub fn find_name(&self, value: &str, min_name_id: u16) -> Option<NameId> {
        self.records
            .keys()
            .map(|key| key.name_id)
            .filter(|id| id.to_u16() >= min_name_id)
            .filter(|id| {
                Platform::CANONICAL
                    .iter()
                    .all(|platform| self.get(*id, *platform) == Some(value))
            })
            .min()
    }

    /// Register `value` as a name string and return its ID.
    ///
    /// An existing ID carrying the same string on both canonical platforms is
    /// reused; otherwise the next free ID at or above `min_name_id` is taken
    /// and written for both platforms.
    pub fn add_name(&mut self, value: &str, min_name_id: u16) -> Result<NameId> {
        if let Some(id) = self.find_name(value, min_name_id) {
            return Ok(id);
        }

        let next = self
            .records
            .keys()
            .map(|key| u32::from(key.name_id.to_u16()) + 1)
            .max()
            .unwrap_or(0)
            .max(u32::from(min_name_id));
        if next > MAX_NAME_ID {
            return Err(Error::NameIdsExhausted(min_name_id));
        }

        let id = NameId::new(next as u16);
        for platform in Platform::CANONICAL {
            self.set(value, id, platform);
        }
        debug!("Added name '{value}' as nameID {next}");
        Ok(id)
    }

    /// Build a writable `name` table with records in the required order.
    ///
    /// Language tags are kept, so a version 1 table stays version 1.
    pub fn to_table(&self) -> Name {
        let mut table = Name::new(
            self.records
                .iter()
                .map(|(key, value)| {
                    NameRecord::new(
                        key.platform.platform_id,
                        key.platform.encoding_id,
                        key.platform.language_id,
                        key.name_id,
                        value.clone().into(),
                    )
                })
                .collect(),
        );
        table.lang_tag_record = self.lang_tags.as_ref().map(|tags| {
            tags.iter().map(|tag| LangTagRecord::new(tag.clone().into())).collect()
        });
        table
    }
}
