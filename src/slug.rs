// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Entry points for deriving slugs from user-supplied strings.
//!
//! [`slugify`] is the typed, infallible entry point. [`slugify_value`]
//! accepts untyped JSON values and rejects anything that is not a string.
//! [`SlugStrategy`] offers a builder over the same pipeline.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    config::{Replacements, SlugOptions, StopWords},
    error::Error,
    pipeline,
};

/// Converts `input` into a slug according to `options`.
///
/// Leading and trailing whitespace is trimmed first; blank input yields an
/// empty string without running the pipeline.
///
/// # Examples
///
/// ```
/// use slugline::{SlugOptions, slugify};
///
/// let options = SlugOptions::default();
/// assert_eq!(slugify("  für Straße ", &options), "fuer-strasse");
/// assert_eq!(slugify("   ", &options), "");
/// ```
pub fn slugify(input: &str, options: &SlugOptions,) -> String
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    pipeline::transform(trimmed, options,)
}

/// Converts an untyped `input` into a slug, decoding `options` when present.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](Error::InvalidArgument) when `input` is
/// not a JSON string, checked before anything else, or when `options` cannot
/// be decoded into [`SlugOptions`].
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use slugline::slugify_value;
///
/// let slug = slugify_value(&json!("foo_bar-baz!"), Some(&json!({"strict": true})),)
///     .expect("string input",);
/// assert_eq!(slug, "foo-bar-baz");
/// assert!(slugify_value(&json!(42), None).is_err());
/// ```
pub fn slugify_value(input: &Value, options: Option<&Value,>,) -> Result<String, Error,>
{
    let Value::String(text,) = input else {
        return Err(Error::invalid_argument(format!(
            "expected a string input, got {}",
            describe(input,)
        ),),);
    };

    let options = match options {
        None | Some(Value::Null,) => SlugOptions::default(),
        Some(value,) => SlugOptions::deserialize(value,)
            .map_err(|error| Error::invalid_argument(format!("invalid options: {error}"),),)?,
    };

    Ok(slugify(text, &options,),)
}

fn describe(value: &Value,) -> &'static str
{
    match value {
        Value::Null => "null",
        Value::Bool(_,) => "a boolean",
        Value::Number(_,) => "a number",
        Value::String(_,) => "a string",
        Value::Array(_,) => "an array",
        Value::Object(_,) => "an object",
    }
}

/// Builder for slug strings over a borrowed source.
///
/// # Examples
///
/// ```
/// use slugline::SlugStrategy;
///
/// let slug = SlugStrategy::builder("foo   bar---baz",).separator("--",).max_length(9,).build();
/// assert_eq!(slug, "foo--bar");
/// ```
#[derive(Debug, Clone,)]
pub struct SlugStrategy<'input,>
{
    source:  &'input str,
    options: SlugOptions,
}

impl<'input,> SlugStrategy<'input,>
{
    /// Creates a builder for `source` with default options.
    pub fn builder(source: &'input str,) -> Self
    {
        Self {
            source,
            options: SlugOptions::default(),
        }
    }

    /// Replaces all options at once.
    pub fn options(mut self, options: SlugOptions,) -> Self
    {
        self.options = options;
        self
    }

    /// Sets the word separator.
    pub fn separator(mut self, separator: impl Into<String,>,) -> Self
    {
        self.options.separator = separator.into();
        self
    }

    /// Enables or disables lowercasing.
    pub fn lowercase(mut self, lowercase: bool,) -> Self
    {
        self.options.lowercase = lowercase;
        self
    }

    /// Enables or disables the locale transliteration table.
    pub fn locale(mut self, locale: bool,) -> Self
    {
        self.options.locale = locale;
        self
    }

    /// Enables or disables strict mode.
    pub fn strict(mut self, strict: bool,) -> Self
    {
        self.options.strict = strict;
        self
    }

    /// Caps the output length in characters.
    pub fn max_length(mut self, limit: usize,) -> Self
    {
        self.options.max_length = Some(limit,);
        self
    }

    /// Enables removal of the default English stop words.
    pub fn remove_stop_words(mut self, enabled: bool,) -> Self
    {
        self.options.remove_stop_words = StopWords::from(enabled,);
        self
    }

    /// Removes the given words instead of the default stop-word list.
    pub fn stop_words<I, W,>(mut self, words: I,) -> Self
    where
        I: IntoIterator<Item = W,>,
        W: Into<String,>,
    {
        self.options.remove_stop_words =
            StopWords::Custom(words.into_iter().map(Into::into,).collect(),);
        self
    }

    /// Adds a custom replacement.
    pub fn replacement(mut self, pattern: impl Into<String,>, replacement: impl Into<String,>,) -> Self
    {
        self.options.custom_replacements.push(pattern, replacement,);
        self
    }

    /// Replaces the whole custom replacement list.
    pub fn replacements(mut self, replacements: Replacements,) -> Self
    {
        self.options.custom_replacements = replacements;
        self
    }

    /// Builds the slug from the source string.
    pub fn build(&self,) -> String
    {
        slugify(self.source, &self.options,)
    }
}

#[cfg(test)]
mod tests
{
    use proptest::prelude::*;
    use serde_json::json;

    use super::{SlugStrategy, slugify, slugify_value};
    use crate::{Error, SlugOptions};

    fn options_with_separator(separator: &str,) -> SlugOptions
    {
        SlugOptions {
            separator: separator.to_owned(), ..SlugOptions::default()
        }
    }

    proptest! {
        #[test]
        fn output_has_no_stray_separators(
            input in "[A-Za-z0-9 _.~!äöüß-]{0,48}",
            separator in prop::sample::select(vec!["-", "--", "_", ".", "-~", "~~~"]),
        ) {
            let slug = slugify(&input, &options_with_separator(separator));
            let doubled = separator.repeat(2);
            prop_assert!(!slug.starts_with(separator));
            prop_assert!(!slug.ends_with(separator));
            prop_assert!(!slug.contains(&doubled));
        }

        #[test]
        fn truncation_respects_limit_and_leaves_no_fragment(
            input in "[A-Za-z0-9 _.~!äöüß-]{0,48}",
            separator in prop::sample::select(vec!["-", "--", "-~", "~~~"]),
            limit in 1usize..24,
        ) {
            let options = SlugOptions {
                separator: separator.to_owned(),
                max_length: Some(limit),
                ..SlugOptions::default()
            };
            let slug = slugify(&input, &options);
            prop_assert!(slug.chars().count() <= limit);
            for (end, _) in separator.char_indices().skip(1) {
                prop_assert!(!slug.ends_with(&separator[..end]));
            }
            prop_assert!(!slug.ends_with(separator));
        }

        #[test]
        fn default_output_is_url_safe(input in "\\PC{0,48}") {
            let slug = slugify(&input, &SlugOptions::default());
            prop_assert!(slug.chars().all(|ch| matches!(ch, 'a'..='z' | '0'..='9' | '-' | '_')));
        }
    }

    #[test]
    fn blank_input_yields_empty_slug()
    {
        let options = SlugOptions {
            custom_replacements: [("", "x",),].into_iter().collect(),
            ..SlugOptions::default()
        };
        assert_eq!(slugify("", &options,), "");
        assert_eq!(slugify("   ", &options,), "");
        assert_eq!(slugify("\t\n", &SlugOptions::default(),), "");
    }

    #[test]
    fn symbols_only_yield_empty_slug()
    {
        assert_eq!(slugify("!@#$%^&*()", &SlugOptions::default(),), "");
    }

    #[test]
    fn locale_transliteration_is_deterministic()
    {
        assert_eq!(slugify("für Straße", &SlugOptions::default(),), "fuer-strasse");

        let without_locale = SlugOptions {
            locale: false, ..SlugOptions::default()
        };
        assert_eq!(slugify("straße", &without_locale,), "strasse");
        assert_eq!(slugify("für", &without_locale,), "fur");
    }

    #[test]
    fn stop_words_are_removed()
    {
        let slug = SlugStrategy::builder("The quick brown fox jumps over the lazy dog",)
            .remove_stop_words(true,)
            .build();
        assert_eq!(slug, "quick-brown-fox-jumps-lazy-dog");
    }

    #[test]
    fn custom_stop_words_replace_default_list()
    {
        let slug = SlugStrategy::builder("The quick brown fox",).stop_words(["quick", "fox",],).build();
        assert_eq!(slug, "the-brown");
    }

    #[test]
    fn multi_character_separator_round_trip()
    {
        let builder = SlugStrategy::builder("foo   bar---baz",).separator("--",);
        assert_eq!(builder.build(), "foo--bar--baz");
        assert_eq!(builder.clone().max_length(8,).build(), "foo--bar");
        assert_eq!(builder.clone().max_length(9,).build(), "foo--bar");
        assert_eq!(builder.clone().max_length(5,).build(), "foo");
        assert_eq!(builder.max_length(4,).build(), "foo");
    }

    #[test]
    fn strict_mode_converts_underscores()
    {
        let strict = SlugStrategy::builder("foo_bar-baz!",).strict(true,).build();
        assert_eq!(strict, "foo-bar-baz");

        let relaxed = SlugStrategy::builder("foo_bar-baz!",).build();
        assert_eq!(relaxed, "foo_bar-baz");
    }

    #[test]
    fn empty_separator_joins_words()
    {
        let slug = SlugStrategy::builder("Hello big World",).separator("",).build();
        assert_eq!(slug, "hellobigworld");
    }

    #[test]
    fn keeping_case_preserves_replacement_casing()
    {
        let slug = SlugStrategy::builder("I ♥ DOGS & Cats",)
            .lowercase(false,)
            .replacement("♥", "love",)
            .replacement("&", "and",)
            .build();
        assert_eq!(slug, "I-love-DOGS-and-Cats");
    }

    #[test]
    fn custom_replacement_adjusts_case_to_match()
    {
        let slug = SlugStrategy::builder("FOO foo Foo F",)
            .lowercase(false,)
            .replacement("FOO", "bar",)
            .replacement("foo", "BAR",)
            .replacement("Foo", "bAR",)
            .replacement("F", "bar",)
            .build();
        assert_eq!(slug, "BAR-bar-Bar-Bar");
    }

    #[test]
    fn equal_length_overlapping_replacements_apply_in_source_order()
    {
        let first = SlugStrategy::builder("abc",).replacement("ab", "x",).replacement("bc", "y",).build();
        assert_eq!(first, "xc");

        let reversed =
            SlugStrategy::builder("abc",).replacement("bc", "y",).replacement("ab", "x",).build();
        assert_eq!(reversed, "ay");

        let decoded = slugify_value(
            &json!("abc"),
            Some(&json!({"customReplacements": {"bc": "y", "ab": "x"}})),
        )
        .expect("valid call",);
        assert_eq!(decoded, "ay");
    }

    #[test]
    fn decomposed_umlaut_keeps_original_case()
    {
        let slug = SlugStrategy::builder("A\u{308}rger",).lowercase(false,).build();
        assert_eq!(slug, "Aerger");
        assert_eq!(slug, SlugStrategy::builder("Ärger",).lowercase(false,).build());
    }

    #[test]
    fn custom_replacements_run_before_transliteration()
    {
        let slug = SlugStrategy::builder("Ä team",).replacement("Ä", "A",).build();
        assert_eq!(slug, "a-team");
    }

    #[test]
    fn zero_max_length_keeps_full_slug()
    {
        let slug = SlugStrategy::builder("hello world",).max_length(0,).build();
        assert_eq!(slug, "hello-world");
    }

    #[test]
    fn value_boundary_rejects_non_strings()
    {
        for input in [json!(null), json!(42), json!(true), json!({"a": 1}), json!(["a"])] {
            let error = slugify_value(&input, Some(&json!({"separator": "_"})),)
                .expect_err("non-string input must fail",);
            assert!(matches!(error, Error::InvalidArgument { .. }));
        }
    }

    #[test]
    fn value_boundary_checks_input_before_options()
    {
        let error = slugify_value(&json!(1), Some(&json!("not options")),)
            .expect_err("non-string input must fail",);
        match error {
            Error::InvalidArgument {
                message,
            } => assert_eq!(message, "expected a string input, got a number"),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn value_boundary_decodes_options()
    {
        let slug = slugify_value(
            &json!("Tom & Jerry"),
            Some(&json!({"customReplacements": [["&", "and"]], "separator": "_", "unknown": 1})),
        )
        .expect("valid call",);
        assert_eq!(slug, "tom_and_jerry");

        assert_eq!(slugify_value(&json!("  "), None).expect("valid call"), "");
        assert_eq!(slugify_value(&json!("A B"), Some(&json!(null))).expect("valid call"), "a-b");
    }

    #[test]
    fn value_boundary_rejects_malformed_options()
    {
        let error = slugify_value(&json!("text"), Some(&json!({"strict": "yes"})),)
            .expect_err("malformed options must fail",);
        assert!(matches!(error, Error::InvalidArgument { .. }));
    }

    #[test]
    fn slug_strategy_debug_format()
    {
        let builder = SlugStrategy::builder("debug",);
        let debug_str = format!("{:?}", builder);
        assert!(debug_str.contains("SlugStrategy"));
        assert!(debug_str.contains("source"));
    }
}
