//! URL-safe slugs for categorical attribute values.
//!
//! A slug is lowercase ASCII letters, digits, underscores, and single
//! hyphens, with no leading or trailing hyphen or underscore. Several raw
//! values may share a slug (`"Organic"` and `"organic "` both become
//! `organic`); lookups by slug therefore resolve to every matching raw value.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Normalise `value` into a slug.
///
/// Accented letters fold to their base letter (NFKD, combining marks
/// dropped). Remaining characters other than ASCII alphanumerics,
/// whitespace, `-` and `_` are dropped. Runs of whitespace and hyphens
/// collapse to one `-`.
///
/// # Examples
/// ```
/// use mineral_catalog::domain::slugify;
///
/// assert_eq!(slugify("Light Gray"), "light-gray");
/// assert_eq!(slugify("  organic "), "organic");
/// assert_eq!(slugify("Sulfide, Sulfosalt"), "sulfide-sulfosalt");
/// assert_eq!(slugify("Grün"), "grun");
/// ```
#[must_use]
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_separator = false;
    for ch in value.nfkd().filter(|ch| !is_combining_mark(*ch)) {
        if ch.is_whitespace() || ch == '-' {
            pending_separator = true;
        } else if ch.is_ascii_alphanumeric() || ch == '_' {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        }
    }
    slug.trim_matches(|ch| ch == '-' || ch == '_').to_owned()
}

/// Slug every value, preserving order and multiplicity.
#[must_use]
pub fn slugify_all<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values.iter().map(|value| slugify(value.as_ref())).collect()
}

/// Slug every value, then sort and drop duplicates.
///
/// Used for navigation menus, where each slug appears once however many raw
/// spellings share it.
#[must_use]
pub fn unique_sorted_slugs<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut slugs = slugify_all(values);
    slugs.sort_unstable();
    slugs.dedup();
    slugs
}

/// Every raw value whose slug equals `slug`.
#[must_use]
pub fn raw_values_for_slug<S: AsRef<str>>(values: &[S], slug: &str) -> Vec<String> {
    values
        .iter()
        .filter(|value| slugify((*value).as_ref()) == slug)
        .map(|value| value.as_ref().to_owned())
        .collect()
}

/// Return `true` when `value` is already in slug form.
pub(crate) fn is_valid_slug(value: &str) -> bool {
    !value.is_empty() && slugify(value) == value
}
