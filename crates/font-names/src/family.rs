//! Family name discovery and substitution.

use log::{debug, info};
use read_fonts::types::NameId;

use crate::{
    error::{Error, Result},
    style::is_italic,
    table::{NameTable, Platform},
    text::{remove_whitespace, replace_first_match},
};

/// Name IDs whose strings embed the family name.
pub const FAMILY_RELATED_IDS: [NameId; 7] = [
    NameId::FAMILY_NAME,
    NameId::UNIQUE_ID,
    NameId::FULL_NAME,
    NameId::POSTSCRIPT_NAME,
    NameId::TYPOGRAPHIC_FAMILY_NAME,
    NameId::WWS_FAMILY_NAME,
    NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX,
];

/// Family fields consulted on each platform, preferred first.
const FAMILY_LOOKUP_IDS: [NameId; 2] = [NameId::TYPOGRAPHIC_FAMILY_NAME, NameId::FAMILY_NAME];

/// Resolve the font's primary family name.
///
/// Windows-English is searched before Mac-Roman, and the typographic family
/// before the legacy family on each.
pub fn family_name(names: &NameTable) -> Result<&str> {
    Platform::CANONICAL
        .iter()
        .flat_map(|platform| FAMILY_LOOKUP_IDS.iter().map(move |id| (*id, *platform)))
        .find_map(|(id, platform)| names.get(id, platform))
        .ok_or(Error::FamilyNameNotFound)
}

/// Derive the PostScript-safe spellings of a family name.
///
/// `"Foo Bar Baz"` yields `"FooBarBaz"` and `"Foo Bar-Baz"`; a name without
/// spaces yields itself.
pub fn postscript_variants(name: &str) -> Vec<String> {
    let name = name.trim();
    match name.rfind(' ') {
        None => vec![name.to_string()],
        Some(p) => vec![name.replace(' ', ""), format!("{}-{}", &name[..p], &name[p + 1..])],
    }
}

/// Ranked search candidates for the previous family name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyCandidates {
    human: Vec<String>,
    postscript: Vec<String>,
}

impl FamilyCandidates {
    /// Gather the distinct family strings from the typographic and legacy
    /// family fields of both canonical platforms.
    pub fn collect(names: &NameTable) -> Result<Self> {
        let found = Platform::CANONICAL
            .iter()
            .flat_map(|platform| FAMILY_LOOKUP_IDS.iter().map(move |id| (*id, *platform)))
            .filter_map(|(id, platform)| names.get(id, platform))
            .filter(|s| !s.is_empty());
        let candidates = Self::from_names(found);
        if candidates.human.is_empty() {
            return Err(Error::FamilyNameNotFound);
        }
        Ok(candidates)
    }

    /// Rank the given family strings.
    ///
    /// Human candidates are deduplicated and sorted longest first so that a
    /// short name never matches inside a longer one. PostScript candidates
    /// follow the same ranking.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut human: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !human.contains(&name) {
                human.push(name);
            }
        }
        human.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| b.cmp(a)));

        let mut postscript: Vec<String> = Vec::new();
        for variant in human.iter().flat_map(|name| postscript_variants(name)) {
            if !postscript.contains(&variant) {
                postscript.push(variant);
            }
        }

        Self { human, postscript }
    }

    pub fn human(&self) -> &[String] {
        &self.human
    }

    pub fn postscript(&self) -> &[String] {
        &self.postscript
    }
}

/// How a family-related field is matched and rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Match human candidates, write the family verbatim.
    Human,
    /// Match PostScript candidates, write the family without spaces.
    PostScript,
    /// Try PostScript candidates first, then fall back to [`FieldPolicy::Human`].
    ///
    /// This field usually embeds the PostScript name, but not always; a
    /// human-form record that happens to contain a PostScript candidate is
    /// rewritten in PostScript form.
    UniqueId,
}

impl FieldPolicy {
    /// Policy for a name ID, or `None` if the field doesn't carry the family.
    pub fn for_name_id(name_id: NameId) -> Option<Self> {
        match name_id {
            NameId::POSTSCRIPT_NAME => Some(Self::PostScript),
            NameId::UNIQUE_ID => Some(Self::UniqueId),
            id if FAMILY_RELATED_IDS.contains(&id) => Some(Self::Human),
            _ => None,
        }
    }

    /// Rewrite `value`, returning `None` when no candidate occurs in it.
    pub fn apply(
        self,
        value: &str,
        candidates: &FamilyCandidates,
        family: &str,
        postscript_family: &str,
    ) -> Option<String> {
        match self {
            Self::Human => replace_first_match(value, candidates.human(), family),
            Self::PostScript => {
                replace_first_match(value, candidates.postscript(), postscript_family)
            }
            Self::UniqueId => {
                match candidates.postscript().iter().find(|c| value.contains(c.as_str())) {
                    Some(ps) => {
                        replace_first_match(value, std::slice::from_ref(ps), postscript_family)
                    }
                    None => replace_first_match(value, candidates.human(), family),
                }
            }
        }
    }
}

/// Substitute the font's current family name with `family` in every
/// family-related record.
///
/// Records without a match are left alone. When no record carries a
/// variations PostScript name prefix and `family` contains `"Variable"`, one
/// is synthesised for both canonical platforms.
pub fn rename_family(names: &mut NameTable, family: &str) -> Result<()> {
    let candidates = FamilyCandidates::collect(names)?;
    let postscript_family = family.replace(' ', "");
    let italic = is_italic(names);

    let mut has_prefix = false;
    let mut renamed = 0;

    for (key, value) in names.records_mut() {
        let Some(policy) = FieldPolicy::for_name_id(key.name_id) else {
            continue;
        };
        if key.name_id == NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX {
            has_prefix = true;
        }
        if let Some(new_value) = policy.apply(value, &candidates, family, &postscript_family) {
            debug!("{key}: '{value}' -> '{new_value}'");
            *value = new_value;
            renamed += 1;
        }
    }

    if !has_prefix && family.contains("Variable") {
        let mut prefix = remove_whitespace(family);
        if italic {
            prefix.push_str("Italic");
        }
        debug!("Adding variations PostScript name prefix '{prefix}'");
        for platform in [Platform::MAC_ROMAN, Platform::WINDOWS_ENGLISH] {
            names.set(prefix.clone(), NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX, platform);
        }
    }

    info!(
        "Renamed family {:?} -> '{family}' in {renamed} records",
        candidates.human()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inter_names(style: &str) -> NameTable {
        let mut names = NameTable::new();
        for platform in Platform::CANONICAL {
            names.set("Inter", NameId::FAMILY_NAME, platform);
            names.set(style, NameId::SUBFAMILY_NAME, platform);
            names.set("3.019;RSMS;Inter-Regular", NameId::UNIQUE_ID, platform);
            names.set(format!("Inter {style}"), NameId::FULL_NAME, platform);
            names.set("Inter-Regular", NameId::POSTSCRIPT_NAME, platform);
            names.set("Version 3.019", NameId::VERSION_STRING, platform);
        }
        names
    }

    #[test]
    fn test_family_name_prefers_typographic_on_windows() {
        let mut names = NameTable::new();
        names.set("Mac Family", NameId::TYPOGRAPHIC_FAMILY_NAME, Platform::MAC_ROMAN);
        names.set("Legacy", NameId::FAMILY_NAME, Platform::WINDOWS_ENGLISH);
        names.set("Typographic", NameId::TYPOGRAPHIC_FAMILY_NAME, Platform::WINDOWS_ENGLISH);
        assert_eq!(family_name(&names).unwrap(), "Typographic");
    }

    #[test]
    fn test_family_name_falls_back_to_mac() {
        let mut names = NameTable::new();
        names.set("Inter", NameId::FAMILY_NAME, Platform::MAC_ROMAN);
        assert_eq!(family_name(&names).unwrap(), "Inter");
    }

    #[test]
    fn test_family_name_not_found() {
        let mut names = NameTable::new();
        names.set("Inter", NameId::FAMILY_NAME, Platform::new(0, 3, 0));
        assert!(matches!(family_name(&names), Err(Error::FamilyNameNotFound)));
    }

    #[test]
    fn test_postscript_variants() {
        assert_eq!(postscript_variants("Inter"), vec!["Inter"]);
        assert_eq!(postscript_variants(" Foo Bar Baz "), vec!["FooBarBaz", "Foo Bar-Baz"]);
    }

    #[test]
    fn test_candidates_longest_first() {
        let candidates = FamilyCandidates::from_names(["Inter", "Inter Display", "Inter"]);
        assert_eq!(candidates.human(), &["Inter Display", "Inter"]);
        assert_eq!(candidates.postscript(), &["InterDisplay", "Inter-Display", "Inter"]);
    }

    #[test]
    fn test_candidates_collect_requires_family() {
        let names = NameTable::new();
        assert!(matches!(FamilyCandidates::collect(&names), Err(Error::FamilyNameNotFound)));
    }

    #[test]
    fn test_field_policy_for_name_id() {
        assert_eq!(
            FieldPolicy::for_name_id(NameId::POSTSCRIPT_NAME),
            Some(FieldPolicy::PostScript)
        );
        assert_eq!(FieldPolicy::for_name_id(NameId::UNIQUE_ID), Some(FieldPolicy::UniqueId));
        assert_eq!(FieldPolicy::for_name_id(NameId::WWS_FAMILY_NAME), Some(FieldPolicy::Human));
        assert_eq!(FieldPolicy::for_name_id(NameId::SUBFAMILY_NAME), None);
        assert_eq!(FieldPolicy::for_name_id(NameId::VERSION_STRING), None);
    }

    #[test]
    fn test_unique_id_prefers_postscript_match() {
        let candidates = FamilyCandidates::from_names(["Inter"]);
        let renamed = FieldPolicy::UniqueId
            .apply("3.019;RSMS;Inter-Regular", &candidates, "Inter Variable", "InterVariable");
        assert_eq!(renamed.as_deref(), Some("3.019;RSMS;InterVariable-Regular"));
    }

    #[test]
    fn test_unique_id_falls_back_to_human_match() {
        let candidates = FamilyCandidates::from_names(["Foo Bar"]);
        let renamed =
            FieldPolicy::UniqueId.apply("1.0;Foo Bar Bold", &candidates, "Baz Qux", "BazQux");
        assert_eq!(renamed.as_deref(), Some("1.0;Baz Qux Bold"));
    }

    #[test]
    fn test_rename_family() {
        let mut names = inter_names("Regular");
        rename_family(&mut names, "Inter Variable").unwrap();

        for platform in Platform::CANONICAL {
            assert_eq!(names.get(NameId::FAMILY_NAME, platform), Some("Inter Variable"));
            assert_eq!(names.get(NameId::FULL_NAME, platform), Some("Inter Variable Regular"));
            assert_eq!(names.get(NameId::POSTSCRIPT_NAME, platform), Some("InterVariable-Regular"));
            assert_eq!(
                names.get(NameId::UNIQUE_ID, platform),
                Some("3.019;RSMS;InterVariable-Regular")
            );
            assert_eq!(names.get(NameId::VERSION_STRING, platform), Some("Version 3.019"));
            assert_eq!(names.get(NameId::SUBFAMILY_NAME, platform), Some("Regular"));
            assert_eq!(
                names.get(NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX, platform),
                Some("InterVariable")
            );
        }
    }

    #[test]
    fn test_rename_family_italic_prefix() {
        let mut names = inter_names("Italic");
        rename_family(&mut names, "Inter Variable").unwrap();
        assert_eq!(
            names.get(NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX, Platform::WINDOWS_ENGLISH),
            Some("InterVariableItalic")
        );
    }

    #[test]
    fn test_rename_family_keeps_existing_prefix() {
        let mut names = inter_names("Regular");
        names.set("Inter", NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX, Platform::WINDOWS_ENGLISH);
        rename_family(&mut names, "Inter Variable").unwrap();

        assert_eq!(
            names.get(NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX, Platform::WINDOWS_ENGLISH),
            Some("Inter Variable")
        );
        assert_eq!(
            names.get(NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX, Platform::MAC_ROMAN),
            None
        );
    }

    #[test]
    fn test_rename_family_without_variable_adds_no_prefix() {
        let mut names = inter_names("Regular");
        rename_family(&mut names, "Inter Text").unwrap();
        assert!(!names.has_name_id(NameId::VARIATIONS_POSTSCRIPT_NAME_PREFIX));
        assert_eq!(
            names.get(NameId::POSTSCRIPT_NAME, Platform::MAC_ROMAN),
            Some("InterText-Regular")
        );
    }

    #[test]
    fn test_rename_family_round_trip() {
        let before = inter_names("Bold");
        let mut names = before.clone();

        rename_family(&mut names, "Inter Variable").unwrap();
        rename_family(&mut names, "Inter").unwrap();

        for (key, value) in before.iter() {
            assert_eq!(names.get(key.name_id, key.platform), Some(value), "{key}");
        }
    }

    #[test]
    fn test_rename_family_missing_family_does_not_mutate() {
        let mut names = NameTable::new();
        names.set("Inter-Regular", NameId::POSTSCRIPT_NAME, Platform::WINDOWS_ENGLISH);
        let before = names.clone();

        assert!(matches!(
            rename_family(&mut names, "Inter Variable"),
            Err(Error::FamilyNameNotFound)
        ));
        assert_eq!(names, before);
    }
}
