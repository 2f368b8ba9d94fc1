use regex::Regex;
use std::{borrow::Cow, sync::OnceLock};

/// Path separator in query property paths.
pub const PATH_SEPARATOR: char = '/';

/// Wildcard marker for "any element" of a list.
pub const WILDCARD: char = '*';

// name[123], name[*] or name[*7]
fn non_canonical_index() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([^/\[\]]+)\[(\d+|\*|\*\d+)\]").expect("valid list index pattern")
    })
}

// prefix . * digits [. suffix], anchored on the whole storage path
fn wildcard_split() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([^*]*)\.\*(\d*)(?:\.(.*))?$").expect("valid wildcard pattern"))
}

/// Canonicalize a property path.
///
/// Leading separators are stripped and bracketed list indexes are rewritten
/// into plain segments: `files[3]/name` becomes `files/3/name`, `a[*]` becomes
/// `a/*` and `a[*2]` becomes `a/*2`. Canonical paths are fixed points.
///
/// The segment before the bracket is kept. An element-name form such as
/// `files/item[3]/file` therefore becomes `files/item/3/file` and resolves
/// through a sub-field named `item`, which fails as an unknown property
/// unless the list's element type declares one.
#[must_use]
pub fn canonical_path(path: &str) -> String {
    let trimmed = path.trim_start_matches(PATH_SEPARATOR);
    if !trimmed.contains('[') {
        return trimmed.to_string();
    }

    // repeat so stacked indexes (`a[1][2]`) collapse fully
    let mut current = trimmed.to_string();
    while let Cow::Owned(next) = non_canonical_index().replace_all(&current, "${1}/${2}") {
        current = next;
    }

    current
}

/// True for explicit list index segments.
#[must_use]
pub fn is_index_segment(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// True for `*` and `*N` segments.
#[must_use]
pub fn is_wildcard_segment(segment: &str) -> bool {
    segment
        .strip_prefix(WILDCARD)
        .is_some_and(|rest| rest.bytes().all(|b| b.is_ascii_digit()))
}

/// Whether a dotted storage path addresses list elements through a wildcard.
#[must_use]
pub fn has_wildcard(storage_path: &str) -> bool {
    wildcard_split().is_match(storage_path)
}
