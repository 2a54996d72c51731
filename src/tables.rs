// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Process-wide read-only tables: locale transliterations and the default
//! English stop-word list.

use std::sync::LazyLock;

/// Transliterations applied when locale handling is enabled.
///
/// Values are written in lowercase; the matched text decides the final
/// casing. Decomposed sequences (base letter plus combining mark) are listed
/// next to their precomposed forms so both spellings transliterate the same
/// way before diacritics are stripped.
const LOCALE_ENTRIES: &[(&str, &str,)] = &[
    // German
    ("ä", "ae",),
    ("ö", "oe",),
    ("ü", "ue",),
    ("Ä", "ae",),
    ("Ö", "oe",),
    ("Ü", "ue",),
    ("a\u{308}", "ae",),
    ("o\u{308}", "oe",),
    ("u\u{308}", "ue",),
    ("A\u{308}", "ae",),
    ("O\u{308}", "oe",),
    ("U\u{308}", "ue",),
    // Scandinavian
    ("æ", "ae",),
    ("Æ", "ae",),
    ("ø", "oe",),
    ("Ø", "oe",),
    ("å", "aa",),
    ("Å", "aa",),
    ("a\u{30a}", "aa",),
    ("A\u{30a}", "aa",),
    // French and ligatures
    ("œ", "oe",),
    ("Œ", "oe",),
    ("ĳ", "ij",),
    ("Ĳ", "ij",),
    ("ﬀ", "ff",),
    ("ﬁ", "fi",),
    ("ﬂ", "fl",),
    ("ﬃ", "ffi",),
    ("ﬄ", "ffl",),
    // Icelandic
    ("ð", "d",),
    ("Ð", "d",),
    ("þ", "th",),
    ("Þ", "th",),
    // Slavic and Baltic letters without a canonical decomposition
    ("ł", "l",),
    ("Ł", "l",),
    ("đ", "d",),
    ("Đ", "d",),
    ("ħ", "h",),
    ("Ħ", "h",),
    // Turkish
    ("ı", "i",),
    ("İ", "i",),
];

/// Locale entries ordered longest key first, ties kept in declaration order.
pub(crate) static LOCALE_TABLE: LazyLock<Vec<(&'static str, &'static str,),>,> =
    LazyLock::new(|| {
        let mut entries = LOCALE_ENTRIES.to_vec();
        entries.sort_by_key(|(key, _,)| std::cmp::Reverse(key.chars().count(),),);
        entries
    },);

/// Lowercase and uppercase sharp s, replaced even when locale handling is off.
pub(crate) const SHARP_S: [(&str, &str,); 2] = [("ß", "ss",), ("ẞ", "SS",),];

/// Common English function words removed when stop-word removal is enabled
/// without a custom list.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "down", "during", "each", "few", "for", "from",
    "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself", "him",
    "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just", "me",
    "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
    "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she", "should", "so",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom", "why",
    "will", "with", "you", "your", "yours", "yourself", "yourselves",
];
