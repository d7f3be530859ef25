//! Gettext language codes.
//!
//! A [`Language`] wraps one canonical `lang[_COUNTRY][@variant]` code, the
//! form PO headers use (`cs`, `pt_BR`, `sr@latin`). Parsing is total: every
//! constructor returns a value, with the empty code standing in for
//! "unrecognized". The permissive entry point [`Language::try_parse`] also
//! accepts BCP-47 tags and display names ("Czech", "čeština").

pub mod data;
pub mod names;

use std::fmt;
use std::path::{Component, Path};

use crate::db;
use crate::detect::{self, TextDetector};
use crate::plural::PluralFormsExpr;

pub use names::all_formatted_names;

/// Display names for one registry locale.
#[derive(Debug, Clone, Copy)]
pub struct LocaleName {
    pub english: &'static str,
    pub native: &'static str,
}

/// Horizontal writing direction of a locale's script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// One gettext locale code, canonical or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Language {
    code: String,
}

/// ---------------------------------------------------------------------------
///    Code grammar
/// ---------------------------------------------------------------------------

fn is_valid_lang(lang: &str) -> bool {
    (2..=3).contains(&lang.len()) && lang.bytes().all(|b| b.is_ascii_lowercase())
}

fn is_valid_country(country: &str) -> bool {
    (country.len() == 2 && country.bytes().all(|b| b.is_ascii_uppercase()))
        || (country.len() == 3 && country.bytes().all(|b| b.is_ascii_digit()))
}

/// Full match against `^[a-z]{2,3}(_([A-Z]{2}|[0-9]{3}))?(@[a-z]+)?$`.
pub fn is_valid_code(code: &str) -> bool {
    let (base, variant) = match code.split_once('@') {
        Some((base, variant)) => (base, Some(variant)),
        None => (code, None),
    };
    if let Some(variant) = variant {
        if variant.is_empty() || !variant.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }
    }
    match base.split_once('_') {
        Some((lang, country)) => is_valid_lang(lang) && is_valid_country(country),
        None => is_valid_lang(base),
    }
}

/// The shapes [`normalize_code`] can repair: any-case subtags, `-` or `_`
/// as the separator.
fn matches_permissive(code: &str) -> bool {
    let (base, variant) = match code.split_once('@') {
        Some((base, variant)) => (base, Some(variant)),
        None => (code, None),
    };
    if let Some(variant) = variant {
        if variant.is_empty() || !variant.bytes().all(|b| b.is_ascii_alphabetic()) {
            return false;
        }
    }
    let (lang, country) = match base.split_once(['_', '-']) {
        Some((lang, country)) => (lang, Some(country)),
        None => (base, None),
    };
    if !(2..=3).contains(&lang.len()) || !lang.bytes().all(|b| b.is_ascii_alphabetic()) {
        return false;
    }
    match country {
        Some(c) => {
            (c.len() == 2 && c.bytes().all(|b| b.is_ascii_alphabetic()))
                || (c.len() == 3 && c.bytes().all(|b| b.is_ascii_digit()))
        }
        None => true,
    }
}

/// Repairs case and separators: `-` becomes `_`, everything before the
/// first `_` is lowercased, everything after it is uppercased, and the
/// variant after the last `@` is lowercased. Idempotent on its own output.
pub fn normalize_code(code: &str) -> String {
    let code = code.trim();
    let mut out = String::with_capacity(code.len());
    let (base, variant) = match code.rsplit_once('@') {
        Some((base, variant)) => (base, Some(variant)),
        None => (code, None),
    };
    let mut upper = false;
    for c in base.chars() {
        if c == '-' || c == '_' {
            out.push('_');
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    if let Some(variant) = variant {
        out.push('@');
        out.extend(variant.chars().flat_map(char::to_lowercase));
    }
    out
}

/// ---------------------------------------------------------------------------
///    Resolution chain
/// ---------------------------------------------------------------------------

// Ordered strategies tried by `try_parse`; the first valid result wins.
const RESOLUTION_CHAIN: &[fn(&str) -> Language] = &[
    step_strict,
    step_chinese_alias,
    step_permissive,
    step_native_name,
    step_english_name,
    step_language_tag,
];

fn step_strict(s: &str) -> Language {
    Language::parse_strict(s)
}

// "zh-Hans"/"zh-Hant" are common enough in headers to resolve before the
// general BCP-47 step.
fn step_chinese_alias(s: &str) -> Language {
    if s.eq_ignore_ascii_case("zh-Hans") {
        Language { code: "zh_CN".to_owned() }
    } else if s.eq_ignore_ascii_case("zh-Hant") {
        Language { code: "zh_TW".to_owned() }
    } else {
        Language::invalid()
    }
}

fn step_permissive(s: &str) -> Language {
    if matches_permissive(s) {
        Language::parse_strict(&normalize_code(s))
    } else {
        Language::invalid()
    }
}

fn step_native_name(s: &str) -> Language {
    match names::from_native_name(s) {
        Some(code) => Language { code: code.to_owned() },
        None => Language::invalid(),
    }
}

fn step_english_name(s: &str) -> Language {
    match names::from_english_name(s) {
        Some(code) => Language { code: code.to_owned() },
        None => Language::invalid(),
    }
}

fn step_language_tag(s: &str) -> Language {
    Language::from_language_tag(s)
}

/// ---------------------------------------------------------------------------
///    Language
/// ---------------------------------------------------------------------------

impl Language {
    /// The "no language" sentinel.
    #[inline]
    pub fn invalid() -> Self {
        Self { code: String::new() }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.code.is_empty()
    }

    /// The canonical code; empty for the invalid sentinel.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Accepts exactly the canonical grammar, nothing else.
    pub fn parse_strict(code: &str) -> Self {
        if is_valid_code(code) {
            Self { code: code.to_owned() }
        } else {
            Self::invalid()
        }
    }

    /// Best-effort parse of whatever a PO header or UI handed us: canonical
    /// codes, miscased/misdelimited codes, display names ("Czech",
    /// "čeština"), and BCP-47 tags.
    pub fn try_parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return Self::invalid();
        }
        for step in RESOLUTION_CHAIN {
            let lang = step(s);
            if lang.is_valid() {
                return lang;
            }
        }
        Self::invalid()
    }

    /// [`try_parse`](Self::try_parse) plus ISO-639/ISO-3166 membership
    /// checks on the subtags. Used where the input is untrusted enough that
    /// a shape-valid code is not evidence of a real locale (filename
    /// guessing in particular).
    pub fn try_parse_with_validation(s: &str) -> Self {
        let lang = Self::try_parse(s);
        if !lang.is_valid() {
            return lang;
        }
        if !db::is_iso_language(lang.lang()) {
            return Self::invalid();
        }
        if let Some(country) = lang.country() {
            if !db::is_iso_country(country) {
                return Self::invalid();
            }
        }
        lang
    }

    /// BCP-47 tag → canonical code. Scripts map to gettext variants
    /// (`Latn`→`@latin`, `Cyrl`→`@cyrillic` except for Serbian, where
    /// Cyrillic is the default); `zh` with an explicit Han script and no
    /// region resolves to `zh_CN`/`zh_TW`; the first private-use subtag
    /// (`-x-foo`) becomes `@foo`.
    pub fn from_language_tag(tag: &str) -> Self {
        let Some(parsed) = db::parse_language_tag(tag) else {
            return Self::invalid();
        };
        let mut code = parsed.language.clone();
        if let Some(country) = &parsed.region {
            code.push('_');
            code.push_str(country);
        } else if parsed.language == "zh" {
            match parsed.script.as_deref() {
                Some("Hans") => code.push_str("_CN"),
                Some("Hant") => code.push_str("_TW"),
                _ => {}
            }
        }
        let script_variant = match parsed.script.as_deref() {
            Some("Latn") => Some("latin"),
            Some("Cyrl") if parsed.language != "sr" => Some("cyrillic"),
            _ => None,
        };
        if let Some(variant) = parsed.private.as_deref().or(script_variant) {
            code.push('@');
            code.push_str(variant);
        }
        Self::parse_strict(&code)
    }

    /// Legacy pre-gettext-0.11 header values: English language and country
    /// names ("Czech", "Brazilian Portuguese") instead of codes. Lookups
    /// are case-insensitive against the static tables.
    pub fn from_legacy_names(lang: &str, country: Option<&str>) -> Self {
        fn lookup(
            table: &phf::Map<&'static str, &'static str>,
            key: &str,
        ) -> Option<&'static str> {
            table.get(key).copied().or_else(|| {
                table
                    .entries()
                    .find(|(k, _)| k.eq_ignore_ascii_case(key))
                    .map(|(_, v)| *v)
            })
        }

        let Some(base) = lookup(&data::LEGACY_LANGUAGES, lang.trim()) else {
            return Self::invalid();
        };
        let mut code = base.to_owned();
        // A table hit like "pt_BR" already carries its country.
        if !code.contains('_') {
            if let Some(name) = country {
                if let Some(cc) = lookup(&data::LEGACY_COUNTRIES, name.trim()) {
                    code.push('_');
                    code.push_str(cc);
                }
            }
        }
        Self::parse_strict(&code)
    }

    /// Guesses the locale from a catalog path: the full stem first, then
    /// every `.`/`-`/`_`-delimited suffix of it ("app-cs_CZ" → "cs_CZ"),
    /// then directory names from innermost outwards, skipping
    /// `LC_MESSAGES` and stripping macOS `.lproj` suffixes. Everything
    /// goes through the ISO-validated parse so "installer" or "v2" cannot
    /// be mistaken for a locale.
    pub fn try_guess_from_filename(path: &Path) -> Self {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            let lang = Self::try_parse_with_validation(stem);
            if lang.is_valid() {
                return lang;
            }
            let mut rest = stem;
            while let Some(pos) = rest.find(['.', '-', '_']) {
                rest = &rest[pos + 1..];
                if rest.is_empty() {
                    break;
                }
                let lang = Self::try_parse_with_validation(rest);
                if lang.is_valid() {
                    return lang;
                }
            }
        }
        if let Some(parent) = path.parent() {
            for component in parent.components().rev() {
                let Component::Normal(name) = component else {
                    continue;
                };
                let Some(name) = name.to_str() else { continue };
                if name.eq_ignore_ascii_case("LC_MESSAGES") {
                    continue;
                }
                let name = name.strip_suffix(".lproj").unwrap_or(name);
                let lang = Self::try_parse_with_validation(name);
                if lang.is_valid() {
                    return lang;
                }
            }
        }
        Self::invalid()
    }

    /// Asks a language detector for ranked guesses over `text` and picks
    /// the best one, keeping `hint` when no detector is supplied. See
    /// [`detect`](crate::detect) for the English-bias correction applied
    /// to the ranking.
    pub fn try_detect_from_text(
        detector: Option<&dyn TextDetector>,
        text: &str,
        hint: Option<&Language>,
    ) -> Self {
        detect::detect_from_text(detector, text, hint)
    }

    // ------------------------------------------------------------------
    //    Accessors
    // ------------------------------------------------------------------

    /// The bare language subtag (`"pt"` for `pt_BR`).
    pub fn lang(&self) -> &str {
        let end = self.code.find(['_', '@']).unwrap_or(self.code.len());
        &self.code[..end]
    }

    /// The code without its variant (`"sr"` for `sr@latin`, `"pt_BR"`
    /// stays whole).
    pub fn lang_and_country(&self) -> &str {
        let end = self.code.find('@').unwrap_or(self.code.len());
        &self.code[..end]
    }

    pub fn country(&self) -> Option<&str> {
        self.lang_and_country().split_once('_').map(|(_, c)| c)
    }

    pub fn variant(&self) -> Option<&str> {
        self.code.split_once('@').map(|(_, v)| v)
    }

    /// The BCP-47 tag for this code: `latin`/`cyrillic` variants become
    /// scripts, the country a region subtag, anything else a private-use
    /// subtag (`cs@informal` → `cs-x-informal`). Empty for the invalid
    /// sentinel.
    pub fn language_tag(&self) -> String {
        if !self.is_valid() {
            return String::new();
        }
        let mut tag = String::from(self.lang());
        match self.variant() {
            Some("latin") => tag.push_str("-Latn"),
            Some("cyrillic") => tag.push_str("-Cyrl"),
            _ => {}
        }
        if let Some(country) = self.country() {
            tag.push('-');
            tag.push_str(country);
        }
        match self.variant() {
            Some(v) if v != "latin" && v != "cyrillic" => {
                tag.push_str("-x-");
                tag.push_str(v);
            }
            _ => {}
        }
        tag
    }

    /// Writing direction of the locale's script; left-to-right when the
    /// locale is unknown.
    pub fn direction(&self) -> TextDirection {
        if db::is_rtl(&self.language_tag()) {
            TextDirection::RightToLeft
        } else {
            TextDirection::LeftToRight
        }
    }

    fn registry_entry(&self) -> Option<&'static LocaleName> {
        data::LOCALE_REGISTRY
            .get(self.code.as_str())
            .or_else(|| data::LOCALE_REGISTRY.get(self.lang_and_country()))
            .or_else(|| data::LOCALE_REGISTRY.get(self.lang()))
    }

    /// English display name, falling back to the raw code for locales the
    /// registry does not know.
    pub fn display_name(&self) -> &str {
        match self.registry_entry() {
            Some(name) => name.english,
            None => &self.code,
        }
    }

    /// Display name in the language itself ("čeština" for `cs`).
    pub fn display_name_in_itself(&self) -> &str {
        match self.registry_entry() {
            Some(name) => name.native,
            None => &self.code,
        }
    }

    /// A form safe to write out and parse back: the English display name
    /// when it resolves to exactly this code, otherwise the raw code.
    /// Codes with variants other than `latin`/`cyrillic` are always shown
    /// raw, since no display name can carry them.
    pub fn format_for_roundtrip(&self) -> String {
        if let Some(v) = self.variant() {
            if v != "latin" && v != "cyrillic" {
                return self.code.clone();
            }
        }
        let name = self.display_name();
        if Self::try_parse(name) == *self {
            name.to_owned()
        } else {
            self.code.clone()
        }
    }

    // ------------------------------------------------------------------
    //    Plural forms
    // ------------------------------------------------------------------

    /// The CLDR-derived default `Plural-Forms` header for this locale,
    /// looked up by exact code, then `lang_COUNTRY`, then bare `lang`.
    /// Unknown locales get the empty expression.
    pub fn default_plural_forms_expr(&self) -> PluralFormsExpr {
        if self.is_valid() {
            for key in [self.code.as_str(), self.lang_and_country(), self.lang()] {
                if let Some(expr) = data::PLURAL_FORMS.get(key) {
                    return PluralFormsExpr::new(*expr);
                }
            }
        }
        PluralFormsExpr::default()
    }

    /// Number of plural forms of the default expression, when known.
    pub fn nplurals(&self) -> Option<u32> {
        self.default_plural_forms_expr().nplurals()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for Language {
    fn as_ref(&self) -> &str {
        &self.code
    }
}
