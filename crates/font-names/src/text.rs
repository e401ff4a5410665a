//! String helpers shared by the family and style rewriters.

/// Remove every whitespace character.
pub fn remove_whitespace(s: &str) -> String {
    s.split_whitespace().collect()
}

/// Collapse runs of whitespace to single spaces and trim both ends.
pub fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Replace the first occurrence of the first candidate found in `value`.
///
/// Candidates are tried in order, so callers rank them longest first. Returns
/// `None` when no candidate occurs; empty candidates never match.
pub fn replace_first_match<S: AsRef<str>>(
    value: &str,
    candidates: &[S],
    replacement: &str,
) -> Option<String> {
    candidates.iter().map(AsRef::as_ref).filter(|c| !c.is_empty()).find_map(|candidate| {
        value.find(candidate).map(|start| {
            let end = start + candidate.len();
            format!("{}{replacement}{}", &value[..start], &value[end..])
        })
    })
}
