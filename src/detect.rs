//! Source-text language detection seam.
//!
//! The crate does not ship a detector; callers plug one in behind
//! [`TextDetector`] (an offline n-gram model, a service, a fixture in
//! tests). What lives here is the ranking policy around whatever the
//! detector returns.

use crate::lang::Language;

/// A ranked-guess language detector. Implementations return candidate
/// codes or BCP-47 tags, best guess first; anything [`Language::try_parse`]
/// accepts works.
pub trait TextDetector {
    fn guesses(&self, text: &str, hint: Option<&Language>) -> Vec<String>;
}

/// Picks a language for `text` from the detector's ranking.
///
/// Detectors are notoriously shaky on short technical strings, which in
/// source text are overwhelmingly English. So when the top guess is not
/// English but English is the runner-up and matches what the surrounding
/// context expected (`hint`), the ranking is overruled in English's
/// favor. Without a detector the hint is returned unchanged.
pub fn detect_from_text(
    detector: Option<&dyn TextDetector>,
    text: &str,
    hint: Option<&Language>,
) -> Language {
    let Some(detector) = detector else {
        return hint.cloned().unwrap_or_else(Language::invalid);
    };

    let guesses: Vec<Language> = detector
        .guesses(text, hint)
        .iter()
        .map(|g| Language::try_parse(g))
        .filter(Language::is_valid)
        .collect();

    let Some(first) = guesses.first() else {
        return hint.cloned().unwrap_or_else(Language::invalid);
    };

    if first.lang() != "en" {
        if let (Some(second), Some(hint)) = (guesses.get(1), hint) {
            if second.lang() == "en" && second == hint {
                return second.clone();
            }
        }
    }
    first.clone()
}
