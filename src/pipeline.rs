// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Ordered text rewrites that turn a trimmed string into a slug.
//!
//! Every stage is a pure function over strings so it can be exercised in
//! isolation. [`transform`] chains them in their fixed order; reordering the
//! stages changes results, e.g. case transfer in the replacement stages relies
//! on seeing the original casing before [`fold_case`] runs.

use std::sync::LazyLock;

use regex::{Captures, NoExpand, Regex};
use tracing::{debug, trace};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::{
    case::preserve_case,
    config::{Replacements, SlugOptions},
    pattern::{literal_pattern, whole_word_patterns},
    tables::{LOCALE_TABLE, SHARP_S},
};

static WHITESPACE_OR_HYPHEN: LazyLock<Regex,> =
    LazyLock::new(|| Regex::new(r"[\s-]+",).expect("static pattern compiles",),);

/// Runs every stage over `text`, which must already be trimmed and non-empty.
pub(crate) fn transform(text: &str, options: &SlugOptions,) -> String
{
    let separator = options.separator.as_str();

    let mut slug = apply_custom_replacements(text, &options.custom_replacements,);
    slug = transliterate(&slug, options.locale,);
    slug = strip_diacritics(&slug,);
    if options.lowercase {
        slug = slug.to_lowercase();
    }
    if let Some(words,) = options.remove_stop_words.active_words() {
        slug = remove_stop_words(&slug, &words,);
    }
    trace!("Normalizing words of {:?}", slug);
    slug = normalize_whitespace(&slug, separator,);
    slug = filter_characters(&slug, separator, options.strict,);
    slug = collapse_separators(&slug, separator,);
    slug = trim_separators(&slug, separator,);

    if let Some(limit,) = options.effective_max_length() {
        slug = truncate(&slug, limit,);
        slug = trim_partial_separator(&slug, separator,);
    }

    slug
}

/// Replaces every occurrence of `pattern` with `replacement`, re-cased to
/// follow each matched occurrence.
pub fn replace_preserving_case(text: &str, pattern: &str, replacement: &str,) -> String
{
    if pattern.is_empty() || !text.contains(pattern,) {
        return text.to_owned();
    }

    match literal_pattern(pattern,) {
        Some(regex,) => regex
            .replace_all(text, |captures: &Captures<'_,>| preserve_case(&captures[0], replacement,),)
            .into_owned(),
        None => {
            debug!("Literal pattern {:?} did not compile, scanning matches directly", pattern);
            replace_matches(text, pattern, replacement,)
        }
    }
}

/// Case-preserving literal replacement without a compiled pattern.
fn replace_matches(text: &str, pattern: &str, replacement: &str,) -> String
{
    let mut result = String::with_capacity(text.len(),);
    let mut last = 0;
    for (start, matched,) in text.match_indices(pattern,) {
        result.push_str(&text[last..start],);
        result.push_str(&preserve_case(matched, replacement,),);
        last = start + matched.len();
    }
    result.push_str(&text[last..],);
    result
}

/// Applies custom replacements, longest pattern first.
pub fn apply_custom_replacements(text: &str, replacements: &Replacements,) -> String
{
    if replacements.is_empty() {
        return text.to_owned();
    }

    debug!("Applying {} custom replacements", replacements.len());
    replacements.by_length().into_iter().fold(text.to_owned(), |current, (pattern, replacement,)| {
        replace_preserving_case(&current, pattern, replacement,)
    },)
}

/// Applies the locale table when `locale` is set. Sharp s is always
/// replaced.
pub fn transliterate(text: &str, locale: bool,) -> String
{
    let mut result = text.to_owned();
    if locale {
        for (pattern, replacement,) in LOCALE_TABLE.iter() {
            result = replace_preserving_case(&result, pattern, replacement,);
        }
    }
    for (pattern, replacement,) in SHARP_S {
        if result.contains(pattern,) {
            result = result.replace(pattern, replacement,);
        }
    }
    result
}

/// Decomposes characters canonically and drops the combining marks.
pub fn strip_diacritics(text: &str,) -> String
{
    text.nfd().filter(|ch| !is_combining_mark(*ch,),).collect()
}

/// Removes whole-word, case-insensitive occurrences of `words` and collapses
/// the remaining whitespace to single spaces.
pub fn remove_stop_words(text: &str, words: &[&str],) -> String
{
    let patterns = whole_word_patterns(words.iter().copied(),);
    if patterns.is_empty() {
        return text.to_owned();
    }

    let stripped = patterns.iter().fold(text.to_owned(), |current, pattern| {
        pattern.replace_all(&current, " ",).into_owned()
    },);
    stripped.split_whitespace().collect::<Vec<&str,>>().join(" ",)
}

/// Turns each run of whitespace or hyphens into one separator.
pub fn normalize_whitespace(text: &str, separator: &str,) -> String
{
    WHITESPACE_OR_HYPHEN.replace_all(text, NoExpand(separator,),).into_owned()
}

/// Keeps ASCII alphanumerics, separators, and (unless `strict`) underscores.
///
/// The text is split into spans between separator occurrences and only the
/// spans are filtered, so separators made of otherwise disallowed characters
/// survive intact. In strict mode underscores become separators.
pub fn filter_characters(text: &str, separator: &str, strict: bool,) -> String
{
    let filter_span = |span: &str| -> String {
        let mut filtered = String::with_capacity(span.len(),);
        for ch in span.chars() {
            match ch {
                'a'..='z' | 'A'..='Z' | '0'..='9' => filtered.push(ch,),
                '_' if strict => filtered.push_str(separator,),
                '_' => filtered.push(ch,),
                _ => {}
            }
        }
        filtered
    };

    if separator.is_empty() {
        return filter_span(text,);
    }

    text.split(separator,).map(filter_span,).collect::<Vec<String,>>().join(separator,)
}

/// Collapses consecutive separators into one.
pub fn collapse_separators(text: &str, separator: &str,) -> String
{
    if separator.is_empty() {
        return text.to_owned();
    }

    let doubled = separator.repeat(2,);
    let mut result = text.to_owned();
    while result.contains(&doubled,) {
        result = result.replace(&doubled, separator,);
    }
    result
}

/// Removes separators anchored at either end.
pub fn trim_separators(text: &str, separator: &str,) -> String
{
    if separator.is_empty() {
        return text.to_owned();
    }

    let mut trimmed = text;
    while let Some(rest,) = trimmed.strip_prefix(separator,) {
        trimmed = rest;
    }
    while let Some(rest,) = trimmed.strip_suffix(separator,) {
        trimmed = rest;
    }
    trimmed.to_owned()
}

/// Cuts `text` to at most `limit` characters.
pub fn truncate(text: &str, limit: usize,) -> String
{
    match text.char_indices().nth(limit,) {
        Some((cut, _,),) => {
            debug!("Truncating slug to {} characters", limit);
            text[..cut].to_owned()
        }
        None => text.to_owned(),
    }
}

/// Strips trailing separators and trailing fragments of a separator cut by
/// truncation, until the text ends with no non-empty prefix of `separator`.
pub fn trim_partial_separator(text: &str, separator: &str,) -> String
{
    if separator.is_empty() {
        return text.to_owned();
    }

    let prefix_ends: Vec<usize,> =
        separator.char_indices().map(|(index, _,)| index,).skip(1,).collect();
    let mut trimmed = text;
    loop {
        if let Some(rest,) = trimmed.strip_suffix(separator,) {
            trimmed = rest;
            continue;
        }

        let fragment = prefix_ends
            .iter()
            .rev()
            .map(|end| &separator[..*end],)
            .find(|prefix| trimmed.ends_with(*prefix,),);
        match fragment {
            Some(prefix,) => trimmed = &trimmed[..trimmed.len() - prefix.len()],
            None => break,
        }
    }
    trimmed.to_owned()
}
