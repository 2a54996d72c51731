// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Literal pattern helpers for the regex-backed pipeline stages.

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Escapes `literal` so it matches itself exactly when compiled as a regex.
///
/// # Examples
///
/// ```
/// use slugline::escape_pattern;
///
/// assert_eq!(escape_pattern("a.b"), r"a\.b");
/// assert_eq!(escape_pattern("(c)"), r"\(c\)");
/// ```
pub fn escape_pattern(literal: &str,) -> String
{
    regex::escape(literal,)
}

/// Compiles `literal` into an exact-match [`Regex`].
///
/// Escaped literals always form a valid expression; `None` is only returned
/// when the compiled program would exceed the regex size limit.
pub(crate) fn literal_pattern(literal: &str,) -> Option<Regex,>
{
    Regex::new(&escape_pattern(literal,),).ok()
}

/// Size limit applied to compiled stop-word patterns, matching the regex
/// crate default.
const PATTERN_SIZE_LIMIT: usize = 10 * (1 << 20);

fn compile_whole_words(alternatives: &[String], size_limit: usize,) -> Result<Regex, regex::Error,>
{
    RegexBuilder::new(&format!(r"\b(?:{})\b", alternatives.join("|")),)
        .case_insensitive(true,)
        .size_limit(size_limit,)
        .build()
}

/// Compiles case-insensitive whole-word matchers for `words`.
///
/// All words share one alternation when it fits the size limit. Otherwise
/// each word gets its own pattern; a word that still does not fit is logged
/// and skipped. Returns an empty list when there are no non-empty words.
pub(crate) fn whole_word_patterns<'word,>(
    words: impl IntoIterator<Item = &'word str,>,
) -> Vec<Regex,>
{
    whole_word_patterns_within(words, PATTERN_SIZE_LIMIT,)
}

pub(crate) fn whole_word_patterns_within<'word,>(
    words: impl IntoIterator<Item = &'word str,>,
    size_limit: usize,
) -> Vec<Regex,>
{
    let alternatives: Vec<String,> = words
        .into_iter()
        .filter(|word| !word.is_empty(),)
        .map(escape_pattern,)
        .collect();

    if alternatives.is_empty() {
        return Vec::new();
    }

    match compile_whole_words(&alternatives, size_limit,) {
        Ok(pattern,) => vec![pattern],
        Err(error,) => {
            warn!(
                "Stop-word alternation of {} words did not compile ({}), matching words individually",
                alternatives.len(),
                error
            );
            alternatives
                .iter()
                .filter_map(|alternative| {
                    match compile_whole_words(std::slice::from_ref(alternative,), size_limit,) {
                        Ok(pattern,) => Some(pattern,),
                        Err(error,) => {
                            warn!("Skipping stop word {:?}: {}", alternative, error);
                            None
                        }
                    }
                },)
                .collect()
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::{escape_pattern, literal_pattern, whole_word_patterns, whole_word_patterns_within};
    use crate::tables::DEFAULT_STOP_WORDS;

    #[test]
    fn escapes_every_metacharacter()
    {
        let escaped = escape_pattern(r".+*?()|[]{}^$\",);
        assert_eq!(escaped, r"\.\+\*\?\(\)\|\[\]\{\}\^\$\\");
    }

    #[test]
    fn plain_text_is_unchanged()
    {
        assert_eq!(escape_pattern("hello world"), "hello world");
    }

    #[test]
    fn literal_pattern_matches_only_itself()
    {
        let pattern = literal_pattern("a.c",).expect("pattern compiles",);
        assert!(pattern.is_match("xa.cx"));
        assert!(!pattern.is_match("abc"));
    }

    #[test]
    fn whole_word_patterns_respect_boundaries()
    {
        let patterns = whole_word_patterns(["the", "a",],);
        assert_eq!(patterns.len(), 1);
        assert!(patterns[0].is_match("The end"));
        assert!(!patterns[0].is_match("theory"));
        assert!(!patterns[0].is_match("banana"));
    }

    #[test]
    fn whole_word_patterns_skip_empty_lists()
    {
        assert!(whole_word_patterns(Vec::<&str,>::new(),).is_empty());
        assert!(whole_word_patterns(["",],).is_empty());
    }

    #[test]
    fn oversized_alternation_falls_back_to_single_words()
    {
        let patterns = whole_word_patterns_within(DEFAULT_STOP_WORDS.iter().copied(), 4096,);
        assert!(!patterns.is_empty());
        for word in DEFAULT_STOP_WORDS {
            let sentence = format!("keep {word} keep");
            assert!(
                patterns.iter().any(|pattern| pattern.is_match(&sentence,)),
                "stop word {word:?} was not matched"
            );
        }
        assert!(!patterns.iter().any(|pattern| pattern.is_match("keep keep",)));
    }
}
