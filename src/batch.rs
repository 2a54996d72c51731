// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Parallel slug derivation for many inputs sharing one set of options.

use rayon::prelude::*;
use tracing::debug;

use crate::{config::SlugOptions, slug::slugify};

/// Slugifies every input in parallel, returning slugs in input order.
///
/// # Examples
///
/// ```
/// use slugline::{SlugOptions, slugify_all};
///
/// let slugs = slugify_all(&["Hello World", "Grüße"], &SlugOptions::default(),);
/// assert_eq!(slugs, vec!["hello-world", "gruesse"]);
/// ```
pub fn slugify_all<S,>(inputs: &[S], options: &SlugOptions,) -> Vec<String,>
where
    S: AsRef<str,> + Sync,
{
    debug!("Slugifying {} inputs", inputs.len());
    inputs.par_iter().map(|input| slugify(input.as_ref(), options,),).collect()
}
