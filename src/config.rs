// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Option types controlling the slug pipeline.
//!
//! The types mirror the documents accepted at the dynamic boundary: field
//! names are camelCase, every field falls back to its default when absent,
//! and unknown fields are ignored. Once a call begins the options are only
//! ever borrowed immutably.

use std::{cmp::Reverse, fmt};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, SeqAccess, Visitor},
    ser::SerializeMap,
};

use crate::{error::Error, tables::DEFAULT_STOP_WORDS};

/// Separator used when none is configured.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Declarative configuration for a single slug transformation.
///
/// # Examples
///
/// ```
/// use slugline::SlugOptions;
///
/// let options: SlugOptions =
///     serde_json::from_str(r#"{"separator": "_", "maxLength": 12}"#,).expect("valid options",);
/// assert_eq!(options.separator, "_");
/// assert_eq!(options.max_length, Some(12));
/// assert!(options.lowercase);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(rename_all = "camelCase", default)]
pub struct SlugOptions
{
    /// String joining words in the output. May be empty or multi-character.
    pub separator:           String,
    /// Lowercases the whole string after diacritics are stripped.
    pub lowercase:           bool,
    /// Literal substitutions applied before anything else, longest first.
    pub custom_replacements: Replacements,
    /// Enables the built-in transliteration table.
    pub locale:              bool,
    /// Treats underscores as disallowed characters.
    pub strict:              bool,
    /// Hard cap on the output length in characters. `0` disables the cap.
    pub max_length:          Option<usize,>,
    /// Stop-word removal: off, the default English list, or a custom list.
    pub remove_stop_words:   StopWords,
}

impl Default for SlugOptions
{
    fn default() -> Self
    {
        Self {
            separator:           DEFAULT_SEPARATOR.to_owned(),
            lowercase:           true,
            custom_replacements: Replacements::default(),
            locale:              true,
            strict:              false,
            max_length:          None,
            remove_stop_words:   StopWords::default(),
        }
    }
}

impl SlugOptions
{
    /// Returns the length cap, treating zero as "no cap".
    pub fn effective_max_length(&self,) -> Option<usize,>
    {
        self.max_length.filter(|limit| *limit > 0,)
    }
}

/// Ordered list of literal `(pattern, replacement)` pairs.
///
/// Decodes from either a mapping (`{"&": "and"}`) or a list of pairs
/// (`[["&", "and"]]`). Source order is retained and breaks ties between
/// patterns of equal length.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct Replacements(Vec<(String, String,),>,);

impl Replacements
{
    /// Creates an empty replacement list.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Appends a pattern and its replacement.
    pub fn push<P, R,>(&mut self, pattern: P, replacement: R,)
    where
        P: Into<String,>,
        R: Into<String,>,
    {
        self.0.push((pattern.into(), replacement.into(),),);
    }

    /// Number of configured pairs.
    pub fn len(&self,) -> usize
    {
        self.0.len()
    }

    /// Returns `true` when no pairs are configured.
    pub fn is_empty(&self,) -> bool
    {
        self.0.is_empty()
    }

    /// Iterates pairs in source order.
    pub fn iter(&self,) -> impl Iterator<Item = (&str, &str,),>
    {
        self.0.iter().map(|(pattern, replacement,)| (pattern.as_str(), replacement.as_str(),),)
    }

    /// Pairs in application order: longest pattern first, ties in source
    /// order. Empty patterns never match and are left out.
    pub fn by_length(&self,) -> Vec<(&str, &str,),>
    {
        let mut ordered: Vec<(&str, &str,),> =
            self.iter().filter(|(pattern, _,)| !pattern.is_empty(),).collect();
        ordered.sort_by_key(|(pattern, _,)| Reverse(pattern.chars().count(),),);
        ordered
    }
}

impl<P, R,> FromIterator<(P, R,),> for Replacements
where
    P: Into<String,>,
    R: Into<String,>,
{
    fn from_iter<I: IntoIterator<Item = (P, R,),>,>(iter: I,) -> Self
    {
        Self(iter.into_iter().map(|(pattern, replacement,)| (pattern.into(), replacement.into(),),).collect(),)
    }
}

impl Serialize for Replacements
{
    fn serialize<S,>(&self, serializer: S,) -> Result<S::Ok, S::Error,>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len(),),)?;
        for (pattern, replacement,) in &self.0 {
            map.serialize_entry(pattern, replacement,)?;
        }
        map.end()
    }
}

struct ReplacementsVisitor;

impl<'de,> Visitor<'de,> for ReplacementsVisitor
{
    type Value = Replacements;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        formatter.write_str("a map of pattern to replacement or a list of [pattern, replacement] pairs",)
    }

    fn visit_map<A,>(self, mut access: A,) -> Result<Self::Value, A::Error,>
    where
        A: MapAccess<'de,>,
    {
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0,),);
        while let Some((pattern, replacement,),) = access.next_entry::<String, String,>()? {
            pairs.push((pattern, replacement,),);
        }
        Ok(Replacements(pairs,),)
    }

    fn visit_seq<A,>(self, mut access: A,) -> Result<Self::Value, A::Error,>
    where
        A: SeqAccess<'de,>,
    {
        let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0,),);
        while let Some(pair,) = access.next_element::<(String, String,),>()? {
            pairs.push(pair,);
        }
        Ok(Replacements(pairs,),)
    }

    fn visit_unit<E,>(self,) -> Result<Self::Value, E,>
    where
        E: serde::de::Error,
    {
        Ok(Replacements::default(),)
    }
}

impl<'de,> Deserialize<'de,> for Replacements
{
    fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error,>
    where
        D: Deserializer<'de,>,
    {
        deserializer.deserialize_any(ReplacementsVisitor,)
    }
}

/// Stop-word removal setting: a flag selecting the default English list, or
/// an explicit list of words.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize,)]
#[serde(untagged)]
pub enum StopWords
{
    /// `false` disables removal, `true` uses [`DEFAULT_STOP_WORDS`].
    Enabled(bool,),
    /// Caller-supplied list replacing the default one.
    Custom(Vec<String,>,),
}

impl Default for StopWords
{
    fn default() -> Self
    {
        Self::Enabled(false,)
    }
}

impl From<bool,> for StopWords
{
    fn from(enabled: bool,) -> Self
    {
        Self::Enabled(enabled,)
    }
}

impl From<Vec<String,>,> for StopWords
{
    fn from(words: Vec<String,>,) -> Self
    {
        Self::Custom(words,)
    }
}

impl StopWords
{
    /// Returns the active word list, or `None` when removal is disabled.
    pub fn active_words(&self,) -> Option<Vec<&str,>,>
    {
        match self {
            Self::Enabled(false,) => None,
            Self::Enabled(true,) => Some(DEFAULT_STOP_WORDS.to_vec(),),
            Self::Custom(words,) => Some(words.iter().map(String::as_str,).collect(),),
        }
    }
}

/// Parses options from an inline YAML or JSON document.
///
/// A blank document yields the defaults.
///
/// # Errors
///
/// Returns [`Error::Parse`](Error::Parse) when the document cannot be decoded.
///
/// # Examples
///
/// ```
/// use slugline::parse_options;
///
/// let options = parse_options("separator: '_'\nstrict: true",).expect("valid document",);
/// assert_eq!(options.separator, "_");
/// assert!(options.strict);
/// ```
pub fn parse_options(document: &str,) -> Result<SlugOptions, Error,>
{
    if document.trim().is_empty() {
        return Ok(SlugOptions::default(),);
    }

    let options: SlugOptions = serde_yaml::from_str(document,)?;
    Ok(options,)
}
