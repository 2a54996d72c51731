// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Case transfer from a matched substring onto its replacement.

use unicode_normalization::char::is_combining_mark;

/// Letter casing detected on a matched substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq,)]
enum CaseShape
{
    SingleUpper,
    Upper,
    Lower,
    Capitalized,
    Irregular,
}

fn has_upper(value: &str,) -> bool
{
    value.chars().any(char::is_uppercase,)
}

fn has_lower(value: &str,) -> bool
{
    value.chars().any(char::is_lowercase,)
}

/// Classifies `original`. The single-letter check runs first because a lone
/// uppercase letter is also entirely uppercase. Combining marks are ignored,
/// so decomposed and precomposed letters classify alike.
fn classify(original: &str,) -> CaseShape
{
    let letters: String = original.chars().filter(|ch| !is_combining_mark(*ch,),).collect();
    let original = letters.as_str();
    let mut chars = original.chars();
    let Some(first,) = chars.next() else {
        return CaseShape::Irregular;
    };
    let rest = chars.as_str();

    if rest.is_empty() && first.is_uppercase() {
        return CaseShape::SingleUpper;
    }
    if has_upper(original,) && !has_lower(original,) {
        return CaseShape::Upper;
    }
    if has_lower(original,) && !has_upper(original,) {
        return CaseShape::Lower;
    }
    if first.is_uppercase() && !has_upper(rest,) {
        return CaseShape::Capitalized;
    }

    CaseShape::Irregular
}

fn capitalize(value: &str,) -> String
{
    let mut chars = value.chars();
    match chars.next() {
        Some(first,) => {
            let mut capitalized: String = first.to_uppercase().collect();
            capitalized.push_str(&chars.as_str().to_lowercase(),);
            capitalized
        }
        None => String::new(),
    }
}

/// Returns `replacement` re-cased to follow the casing of `original`.
///
/// A single uppercase letter or a capitalized word yields a capitalized
/// replacement, fully upper or lower case originals force the same casing,
/// and anything else (including originals without cased letters) leaves the
/// replacement untouched.
///
/// # Examples
///
/// ```
/// use slugline::preserve_case;
///
/// assert_eq!(preserve_case("F", "bar"), "Bar");
/// assert_eq!(preserve_case("FOO", "bar"), "BAR");
/// assert_eq!(preserve_case("Foo", "bAR"), "Bar");
/// assert_eq!(preserve_case("fOo", "bAr"), "bAr");
/// ```
pub fn preserve_case(original: &str, replacement: &str,) -> String
{
    match classify(original,) {
        CaseShape::SingleUpper | CaseShape::Capitalized => capitalize(replacement,),
        CaseShape::Upper => replacement.to_uppercase(),
        CaseShape::Lower => replacement.to_lowercase(),
        CaseShape::Irregular => replacement.to_owned(),
    }
}
