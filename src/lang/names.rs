//! Display-name index: case-folded name → code lookups plus the sorted
//! name list used by language pickers. Built once, read-only afterwards.

use std::collections::HashMap;

use icu_casemap::CaseMapper;
use icu_collator::{Collator, CollatorOptions, Strength};
use once_cell::sync::Lazy;

use crate::lang::data::LOCALE_REGISTRY;

struct NamesIndex {
    native: HashMap<String, &'static str>,
    english: HashMap<String, &'static str>,
    sorted: Vec<&'static str>,
}

static CASE_MAPPER: Lazy<CaseMapper> = Lazy::new(CaseMapper::new);

static NAMES: Lazy<NamesIndex> = Lazy::new(build_index);

/// Full Unicode case fold, the same transform applied to stored names
/// and to lookup keys.
pub(crate) fn fold_key(name: &str) -> String {
    CASE_MAPPER.fold_string(name.trim())
}

fn build_index() -> NamesIndex {
    let mut native = HashMap::with_capacity(LOCALE_REGISTRY.len());
    let mut english = HashMap::with_capacity(LOCALE_REGISTRY.len());
    let mut sorted = Vec::with_capacity(LOCALE_REGISTRY.len());

    for (code, name) in LOCALE_REGISTRY.entries() {
        native.insert(fold_key(name.native), *code);
        english.insert(fold_key(name.english), *code);
        sorted.push(name.native);
    }

    // Secondary strength ignores case but keeps accents distinct. If the
    // collator cannot be constructed, fall back to a plain
    // case-insensitive sort rather than failing the whole index.
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Secondary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => sorted.sort_by(|a, b| collator.compare(a, b)),
        Err(_) => sorted.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase())),
    }

    NamesIndex { native, english, sorted }
}

/// Case-folded native display name → code.
pub(crate) fn from_native_name(name: &str) -> Option<&'static str> {
    NAMES.native.get(&fold_key(name)).copied()
}

/// Case-folded English display name → code.
pub(crate) fn from_english_name(name: &str) -> Option<&'static str> {
    NAMES.english.get(&fold_key(name)).copied()
}

/// All known native display names, collation-sorted. Suitable for
/// populating a language picker; every entry round-trips through
/// name-based parsing.
pub fn all_formatted_names() -> &'static [&'static str] {
    &Lazy::force(&NAMES).sorted
}
