// SPDX-License-Identifier: PMPL-1.0-or-later

//! Vocabulary catalog for palavra.
//!
//! Embeds the English→Portuguese word table as a compile-time static slice.
//! Lookup is O(n) on the key list, which is fine at this size: one lookup
//! per process, not a hot loop.
//!
//! ## Adding a new word
//!
//! 1. Add a `("word", "tradução")` pair to `EN_PT`, key in lowercase
//! 2. Keys must stay unique; `table_keys_lowercase_and_unique` enforces both

/// Returned when no translation exists for the looked-up word.
///
/// A miss is a normal outcome, not an error; `translate` hands this value
/// back instead of failing.
pub const FALLBACK: &str = "That bad word";

/// The fixed vocabulary. Keys are stored lowercase; `translate` case-folds
/// its input so any casing of a known word resolves.
const EN_PT: &[(&str, &str)] = &[
    ("weather", "clima"),
    ("earth", "terra"),
    ("rain", "chuva"),
];

/// Translate an English word to Portuguese.
///
/// Case-folds the input to lowercase before the lookup. Returns [`FALLBACK`]
/// for any word outside the table. Never panics, never errors.
///
/// # Examples
///
/// ```
/// use palavra::vocab::{translate, FALLBACK};
/// assert_eq!(translate("Weather"), "clima");
/// assert_eq!(translate("RAIN"), "chuva");
/// assert_eq!(translate("ocean"), FALLBACK);
/// ```
pub fn translate(word: &str) -> &'static str {
    lookup(&word.to_lowercase()).unwrap_or(FALLBACK)
}

/// Exact-match lookup over the table.
///
/// The key must already be lowercase; no folding happens here. Returns
/// `None` on a miss so callers that care about hit/miss (the structured
/// output layer) can tell the two apart.
pub fn lookup(word: &str) -> Option<&'static str> {
    for &(k, v) in EN_PT {
        if k == word {
            return Some(v);
        }
    }
    None
}

/// Read-only view of the vocabulary, in table order.
pub fn entries() -> &'static [(&'static str, &'static str)] {
    EN_PT
}
