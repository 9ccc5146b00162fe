//! Text folding shared by the search index and name collation.

use icu_collator::{Collator, CollatorBorrowed, options::CollatorOptions};
use icu_locale_core::locale;
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Russian collation: Cyrillic sorts ahead of Latin, letters in alphabet order.
static RU_COLLATOR: Lazy<Option<CollatorBorrowed<'static>>> = Lazy::new(|| {
    Collator::try_new(locale!("ru").into(), CollatorOptions::default())
        .map_err(|e| log::warn!("ru collation data unavailable, sorting by code point: {e}"))
        .ok()
});

/// Lower-case `text` and strip diacritics (NFD, combining marks dropped).
/// Runs of whitespace collapse to a single space and the ends are trimmed, so
/// a query typed with stray spaces still matches the index.
pub fn fold(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.nfd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Build the search blob for an item from its searchable fields.
pub fn search_index<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    let joined = fields
        .into_iter()
        .filter(|f| !f.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    fold(&joined)
}

/// Compare two precomputed collation keys (see [`fold`]) under Russian collation.
///
/// Keys are folded first, so `ё` ties with `е` and case never decides. Keys that
/// fold equal compare `Equal`, and a stable sort keeps their insertion order.
pub fn collate(a: &str, b: &str) -> Ordering {
    match RU_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}
