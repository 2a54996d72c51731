//! Configurable pipeline that turns free text into URL-safe slugs.
//!
//! The pipeline applies custom substitutions, locale transliteration,
//! diacritic stripping, case folding, stop-word removal, separator
//! normalization, character filtering, and length truncation in a fixed
//! order. Every call is independent: the only shared state is a pair of
//! read-only tables, so slugs can be derived from any number of threads.
//!
//! ```
//! use slugline::{SlugStrategy, slugify, SlugOptions};
//!
//! assert_eq!(slugify("Crème Brûlée Recipes!", &SlugOptions::default()), "creme-brulee-recipes");
//! assert_eq!(SlugStrategy::builder("snake_case name").strict(true).build(), "snake-case-name");
//! ```

mod batch;
mod case;
mod config;
mod error;
mod pattern;
mod pipeline;
mod slug;
mod tables;

pub use batch::slugify_all;
pub use case::preserve_case;
pub use config::{DEFAULT_SEPARATOR, Replacements, SlugOptions, StopWords, parse_options};
pub use error::Error;
pub use pattern::escape_pattern;
pub use pipeline::{
    apply_custom_replacements, collapse_separators, filter_characters, normalize_whitespace,
    remove_stop_words, replace_preserving_case, strip_diacritics, transliterate, trim_partial_separator,
    trim_separators, truncate,
};
pub use slug::{SlugStrategy, slugify, slugify_value};
pub use tables::DEFAULT_STOP_WORDS;
