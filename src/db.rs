//! Locale database collaborator.
//!
//! Everything the resolver needs from "an ICU": BCP-47 tag parsing,
//! script-direction lookup and ISO code membership. Tag parsing and
//! directionality come from the `icu_locid` family; the ISO membership
//! sets and the locale registry are static tables in [`crate::lang::data`].

use icu_locid::Locale;
use icu_locid_transform::{Direction, LocaleDirectionality};
use once_cell::sync::Lazy;

use crate::lang::data;

static DIRECTIONALITY: Lazy<LocaleDirectionality> = Lazy::new(LocaleDirectionality::new);

/// Subtags of a successfully parsed BCP-47 tag.
#[derive(Debug, Clone)]
pub(crate) struct ParsedTag {
    pub language: String,
    pub script: Option<String>,
    pub region: Option<String>,
    /// First private-use subtag (`-x-foo`), if any.
    pub private: Option<String>,
}

/// Parses a BCP-47 language tag into its subtags. `None` for syntactically
/// invalid tags and for the root (`und`) locale, which carries no usable
/// language.
pub(crate) fn parse_language_tag(tag: &str) -> Option<ParsedTag> {
    if tag.is_empty() {
        return None;
    }
    let locale: Locale = tag.parse().ok()?;
    let language = locale.id.language;
    if language == icu_locid::subtags::Language::UND {
        return None;
    }
    Some(ParsedTag {
        language: language.as_str().to_owned(),
        script: locale.id.script.map(|s| s.as_str().to_owned()),
        region: locale.id.region.map(|r| r.as_str().to_owned()),
        private: locale
            .extensions
            .private
            .iter()
            .next()
            .map(|s| s.as_str().to_owned()),
    })
}

/// Whether the script implied by `tag` runs right to left. Unknown or
/// unparsable tags fall back to LTR.
pub(crate) fn is_rtl(tag: &str) -> bool {
    let Ok(locale) = tag.parse::<Locale>() else {
        return false;
    };
    matches!(
        DIRECTIONALITY.get(&locale.id),
        Some(Direction::RightToLeft)
    )
}

/// ISO-639 language code membership test.
pub(crate) fn is_iso_language(code: &str) -> bool {
    data::ISO_LANGUAGES.contains(code)
}

/// ISO-3166 country code membership test.
pub(crate) fn is_iso_country(code: &str) -> bool {
    data::ISO_COUNTRIES.contains(code)
}
