//! Static locale data tables.
//!
//! All of this is data, not logic: the locale registry driving display
//! names, the ISO membership sets used by validated parsing, the legacy
//! gettext header names, and the CLDR-derived default plural-forms
//! expressions (same expression texts the gettext `cldr-plurals` tool
//! emits, keyed by exact code, `lang_COUNTRY`, or bare `lang`).

use crate::lang::LocaleName;
use phf::{phf_map, phf_set, Map, Set};

/// ---------------------------------------------------------------------------
///    Macro – the registry is written as one `code => english / native` table
/// ---------------------------------------------------------------------------
macro_rules! locale_registry {
    ($( $code:literal => $english:literal / $native:literal; )*) => {
        /// Known locales: canonical code → display names. This is the
        /// enumeration the display-name index is built from.
        pub static LOCALE_REGISTRY: Map<&'static str, LocaleName> = phf_map! {
            $( $code => LocaleName { english: $english, native: $native }, )*
        };
    };
}

locale_registry! {
    "ar" => "Arabic" / "العربية";
    "az" => "Azerbaijani" / "azərbaycan";
    "be" => "Belarusian" / "беларуская";
    "bg" => "Bulgarian" / "български";
    "bn" => "Bangla" / "বাংলা";
    "br" => "Breton" / "brezhoneg";
    "bs" => "Bosnian" / "bosanski";
    "ca" => "Catalan" / "català";
    "cs" => "Czech" / "čeština";
    "cy" => "Welsh" / "Cymraeg";
    "da" => "Danish" / "dansk";
    "de" => "German" / "Deutsch";
    "de_AT" => "German (Austria)" / "Deutsch (Österreich)";
    "de_CH" => "German (Switzerland)" / "Deutsch (Schweiz)";
    "de_DE" => "German (Germany)" / "Deutsch (Deutschland)";
    "el" => "Greek" / "Ελληνικά";
    "en" => "English" / "English";
    "en_AU" => "English (Australia)" / "English (Australia)";
    "en_CA" => "English (Canada)" / "English (Canada)";
    "en_GB" => "English (United Kingdom)" / "English (United Kingdom)";
    "en_US" => "English (United States)" / "English (United States)";
    "eo" => "Esperanto" / "esperanto";
    "es" => "Spanish" / "español";
    "es_AR" => "Spanish (Argentina)" / "español (Argentina)";
    "es_MX" => "Spanish (Mexico)" / "español (México)";
    "et" => "Estonian" / "eesti";
    "eu" => "Basque" / "euskara";
    "fa" => "Persian" / "فارسی";
    "fi" => "Finnish" / "suomi";
    "fo" => "Faroese" / "føroyskt";
    "fr" => "French" / "français";
    "fr_BE" => "French (Belgium)" / "français (Belgique)";
    "fr_CA" => "French (Canada)" / "français (Canada)";
    "fr_CH" => "French (Switzerland)" / "français (Suisse)";
    "ga" => "Irish" / "Gaeilge";
    "gd" => "Scottish Gaelic" / "Gàidhlig";
    "gl" => "Galician" / "galego";
    "he" => "Hebrew" / "עברית";
    "hi" => "Hindi" / "हिन्दी";
    "hr" => "Croatian" / "hrvatski";
    "hu" => "Hungarian" / "magyar";
    "hy" => "Armenian" / "հայերեն";
    "id" => "Indonesian" / "Indonesia";
    "is" => "Icelandic" / "íslenska";
    "it" => "Italian" / "italiano";
    "ja" => "Japanese" / "日本語";
    "ka" => "Georgian" / "ქართული";
    "kk" => "Kazakh" / "қазақ тілі";
    "km" => "Khmer" / "ខ្មែរ";
    "kn" => "Kannada" / "ಕನ್ನಡ";
    "ko" => "Korean" / "한국어";
    "lt" => "Lithuanian" / "lietuvių";
    "lv" => "Latvian" / "latviešu";
    "mk" => "Macedonian" / "македонски";
    "ml" => "Malayalam" / "മലയാളം";
    "mn" => "Mongolian" / "монгол";
    "mr" => "Marathi" / "मराठी";
    "ms" => "Malay" / "Melayu";
    "mt" => "Maltese" / "Malti";
    "my" => "Burmese" / "မြန်မာ";
    "nb" => "Norwegian Bokmål" / "norsk bokmål";
    "ne" => "Nepali" / "नेपाली";
    "nl" => "Dutch" / "Nederlands";
    "nn" => "Norwegian Nynorsk" / "nynorsk";
    "pa" => "Punjabi" / "ਪੰਜਾਬੀ";
    "pl" => "Polish" / "polski";
    "pt" => "Portuguese" / "português";
    "pt_BR" => "Portuguese (Brazil)" / "português (Brasil)";
    "pt_PT" => "Portuguese (Portugal)" / "português (Portugal)";
    "ro" => "Romanian" / "română";
    "ru" => "Russian" / "русский";
    "sk" => "Slovak" / "slovenčina";
    "sl" => "Slovenian" / "slovenščina";
    "sq" => "Albanian" / "shqip";
    "sr" => "Serbian" / "српски";
    "sr@latin" => "Serbian (Latin)" / "srpski";
    "sv" => "Swedish" / "svenska";
    "sw" => "Swahili" / "Kiswahili";
    "ta" => "Tamil" / "தமிழ்";
    "te" => "Telugu" / "తెలుగు";
    "th" => "Thai" / "ไทย";
    "tr" => "Turkish" / "Türkçe";
    "uk" => "Ukrainian" / "українська";
    "ur" => "Urdu" / "اردو";
    "uz" => "Uzbek" / "oʻzbek";
    "vi" => "Vietnamese" / "Tiếng Việt";
    "zh_CN" => "Chinese (Simplified)" / "简体中文";
    "zh_TW" => "Chinese (Traditional)" / "繁體中文";
}

/// ISO-639 language codes (alpha-2 plus the three-letter codes that show up
/// in real gettext catalogs without an alpha-2 equivalent).
pub static ISO_LANGUAGES: Set<&'static str> = phf_set! {
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az",
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs",
    "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy",
    "da", "de", "dv", "dz",
    "ee", "el", "en", "eo", "es", "et", "eu",
    "fa", "ff", "fi", "fj", "fo", "fr", "fy",
    "ga", "gd", "gl", "gn", "gu", "gv",
    "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz",
    "ia", "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu",
    "ja", "jv",
    "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn", "ko", "kr", "ks", "ku",
    "kv", "kw", "ky",
    "la", "lb", "lg", "li", "ln", "lo", "lt", "lu", "lv",
    "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my",
    "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny",
    "oc", "oj", "om", "or", "os",
    "pa", "pi", "pl", "ps", "pt",
    "qu",
    "rm", "rn", "ro", "ru", "rw",
    "sa", "sc", "sd", "se", "sg", "si", "sk", "sl", "sm", "sn", "so", "sq",
    "sr", "ss", "st", "su", "sv", "sw",
    "ta", "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt",
    "tw", "ty",
    "ug", "uk", "ur", "uz",
    "ve", "vi", "vo",
    "wa", "wo",
    "xh",
    "yi", "yo",
    "za", "zh", "zu",
    // three-letter codes
    "ace", "ach", "ast", "bal", "ber", "ckb", "crh", "csb", "fil", "frp",
    "fur", "gez", "haw", "hmn", "ilo", "jbo", "kab", "kok", "ksh", "mai",
    "mni", "nds", "nqo", "pap", "pms", "rue", "sah", "sat", "sco", "shn",
    "szl", "tzm", "vec", "wae", "yue",
};

/// ISO-3166 alpha-2 country codes.
pub static ISO_COUNTRIES: Set<&'static str> = phf_set! {
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT",
    "AU", "AW", "AX", "AZ",
    "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN",
    "BO", "BQ", "BR", "BS", "BT", "BV", "BW", "BY", "BZ",
    "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK", "CL", "CM", "CN", "CO",
    "CR", "CU", "CV", "CW", "CX", "CY", "CZ",
    "DE", "DJ", "DK", "DM", "DO", "DZ",
    "EC", "EE", "EG", "EH", "ER", "ES", "ET",
    "FI", "FJ", "FK", "FM", "FO", "FR",
    "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP",
    "GQ", "GR", "GS", "GT", "GU", "GW", "GY",
    "HK", "HM", "HN", "HR", "HT", "HU",
    "ID", "IE", "IL", "IM", "IN", "IO", "IQ", "IR", "IS", "IT",
    "JE", "JM", "JO", "JP",
    "KE", "KG", "KH", "KI", "KM", "KN", "KP", "KR", "KW", "KY", "KZ",
    "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV", "LY",
    "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO",
    "MP", "MQ", "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ",
    "NA", "NC", "NE", "NF", "NG", "NI", "NL", "NO", "NP", "NR", "NU", "NZ",
    "OM",
    "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM", "PN", "PR", "PS", "PT",
    "PW", "PY",
    "QA",
    "RE", "RO", "RS", "RU", "RW",
    "SA", "SB", "SC", "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM",
    "SN", "SO", "SR", "SS", "ST", "SV", "SX", "SY", "SZ",
    "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
    "TT", "TV", "TW", "TZ",
    "UA", "UG", "UM", "US", "UY", "UZ",
    "VA", "VC", "VE", "VG", "VI", "VN", "VU",
    "WF", "WS",
    "YE", "YT",
    "ZA", "ZM", "ZW",
};

/// Legacy gettext header language names → canonical language code.
pub static LEGACY_LANGUAGES: Map<&'static str, &'static str> = phf_map! {
    "Abkhazian" => "ab",
    "Afrikaans" => "af",
    "Albanian" => "sq",
    "Amharic" => "am",
    "Arabic" => "ar",
    "Armenian" => "hy",
    "Assamese" => "as",
    "Aymara" => "ay",
    "Azerbaijani" => "az",
    "Bashkir" => "ba",
    "Basque" => "eu",
    "Belarusian" => "be",
    "Bengali" => "bn",
    "Bislama" => "bi",
    "Brazilian Portuguese" => "pt_BR",
    "Breton" => "br",
    "Bulgarian" => "bg",
    "Burmese" => "my",
    "Catalan" => "ca",
    "Chinese" => "zh",
    "Corsican" => "co",
    "Croatian" => "hr",
    "Czech" => "cs",
    "Danish" => "da",
    "Dutch" => "nl",
    "English" => "en",
    "Esperanto" => "eo",
    "Estonian" => "et",
    "Faroese" => "fo",
    "Fijian" => "fj",
    "Finnish" => "fi",
    "French" => "fr",
    "Frisian" => "fy",
    "Friulian" => "fur",
    "Galician" => "gl",
    "Georgian" => "ka",
    "German" => "de",
    "Greek" => "el",
    "Greenlandic" => "kl",
    "Guarani" => "gn",
    "Gujarati" => "gu",
    "Hausa" => "ha",
    "Hebrew" => "he",
    "Hindi" => "hi",
    "Hungarian" => "hu",
    "Icelandic" => "is",
    "Indonesian" => "id",
    "Interlingua" => "ia",
    "Inuktitut" => "iu",
    "Irish" => "ga",
    "Italian" => "it",
    "Japanese" => "ja",
    "Javanese" => "jv",
    "Kannada" => "kn",
    "Kashmiri" => "ks",
    "Kazakh" => "kk",
    "Kinyarwanda" => "rw",
    "Kirghiz" => "ky",
    "Korean" => "ko",
    "Kurdish" => "ku",
    "Lao" => "lo",
    "Latin" => "la",
    "Latvian" => "lv",
    "Lingala" => "ln",
    "Lithuanian" => "lt",
    "Macedonian" => "mk",
    "Malagasy" => "mg",
    "Malay" => "ms",
    "Malayalam" => "ml",
    "Maltese" => "mt",
    "Maori" => "mi",
    "Marathi" => "mr",
    "Mongolian" => "mn",
    "Nepali" => "ne",
    "Norwegian" => "nb",
    "Occitan" => "oc",
    "Oriya" => "or",
    "Pashto" => "ps",
    "Persian" => "fa",
    "Polish" => "pl",
    "Portuguese" => "pt",
    "Punjabi" => "pa",
    "Quechua" => "qu",
    "Rhaeto-Romance" => "rm",
    "Romanian" => "ro",
    "Russian" => "ru",
    "Samoan" => "sm",
    "Sanskrit" => "sa",
    "Serbian" => "sr",
    "Sesotho" => "st",
    "Shona" => "sn",
    "Sindhi" => "sd",
    "Sinhala" => "si",
    "Slovak" => "sk",
    "Slovenian" => "sl",
    "Somali" => "so",
    "Spanish" => "es",
    "Sundanese" => "su",
    "Swahili" => "sw",
    "Swedish" => "sv",
    "Tagalog" => "tl",
    "Tajik" => "tg",
    "Tamil" => "ta",
    "Tatar" => "tt",
    "Telugu" => "te",
    "Thai" => "th",
    "Tibetan" => "bo",
    "Tigrinya" => "ti",
    "Tonga" => "to",
    "Turkish" => "tr",
    "Turkmen" => "tk",
    "Twi" => "tw",
    "Ukrainian" => "uk",
    "Urdu" => "ur",
    "Uzbek" => "uz",
    "Vietnamese" => "vi",
    "Welsh" => "cy",
    "Wolof" => "wo",
    "Xhosa" => "xh",
    "Yiddish" => "yi",
    "Yoruba" => "yo",
    "Zulu" => "zu",
};

/// Legacy gettext header country names → ISO-3166 code.
pub static LEGACY_COUNTRIES: Map<&'static str, &'static str> = phf_map! {
    "Argentina" => "AR",
    "Australia" => "AU",
    "Austria" => "AT",
    "Belgium" => "BE",
    "Brazil" => "BR",
    "Bulgaria" => "BG",
    "Canada" => "CA",
    "Chile" => "CL",
    "China" => "CN",
    "Colombia" => "CO",
    "Croatia" => "HR",
    "Czech Republic" => "CZ",
    "Denmark" => "DK",
    "Egypt" => "EG",
    "Estonia" => "EE",
    "Finland" => "FI",
    "France" => "FR",
    "Germany" => "DE",
    "Greece" => "GR",
    "Hong Kong" => "HK",
    "Hungary" => "HU",
    "Iceland" => "IS",
    "India" => "IN",
    "Indonesia" => "ID",
    "Iran" => "IR",
    "Ireland" => "IE",
    "Israel" => "IL",
    "Italy" => "IT",
    "Japan" => "JP",
    "Korea" => "KR",
    "Latvia" => "LV",
    "Lithuania" => "LT",
    "Luxembourg" => "LU",
    "Mexico" => "MX",
    "Netherlands" => "NL",
    "New Zealand" => "NZ",
    "Norway" => "NO",
    "Peru" => "PE",
    "Poland" => "PL",
    "Portugal" => "PT",
    "Romania" => "RO",
    "Russia" => "RU",
    "Singapore" => "SG",
    "Slovakia" => "SK",
    "Slovenia" => "SI",
    "South Africa" => "ZA",
    "Spain" => "ES",
    "Sweden" => "SE",
    "Switzerland" => "CH",
    "Taiwan" => "TW",
    "Thailand" => "TH",
    "Turkey" => "TR",
    "Ukraine" => "UA",
    "United Kingdom" => "GB",
    "United States" => "US",
    "Venezuela" => "VE",
    "Vietnam" => "VN",
};

// Shared plural-forms expression texts. The lookup is three-tier (exact
// code, then lang_COUNTRY, then bare lang), so country-specific entries
// exist only where the default actually differs (e.g. pt vs. pt_PT).
const ONE_FORM: &str = "nplurals=1; plural=0;";
const TWO_FORMS_NOT_ONE: &str = "nplurals=2; plural=(n != 1);";
const TWO_FORMS_GT_ONE: &str = "nplurals=2; plural=(n > 1);";
const THREE_FORMS_EAST_SLAVIC: &str =
    "nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<12 || n%100>14) ? 1 : 2);";
const THREE_FORMS_POLISH: &str =
    "nplurals=3; plural=(n==1 ? 0 : n%10>=2 && n%10<=4 && (n%100<12 || n%100>14) ? 1 : 2);";
const THREE_FORMS_CZECH: &str = "nplurals=3; plural=(n==1 ? 0 : (n>=2 && n<=4) ? 1 : 2);";
const FOUR_FORMS_SORBIAN: &str =
    "nplurals=4; plural=(n%100==1 ? 0 : n%100==2 ? 1 : n%100==3 || n%100==4 ? 2 : 3);";

/// Default `Plural-Forms` expressions, CLDR-derived.
pub static PLURAL_FORMS: Map<&'static str, &'static str> = phf_map! {
    // languages without plural distinctions
    "id" => ONE_FORM,
    "ja" => ONE_FORM,
    "jbo" => ONE_FORM,
    "km" => ONE_FORM,
    "ko" => ONE_FORM,
    "lo" => ONE_FORM,
    "ms" => ONE_FORM,
    "my" => ONE_FORM,
    "sah" => ONE_FORM,
    "su" => ONE_FORM,
    "th" => ONE_FORM,
    "to" => ONE_FORM,
    "tt" => ONE_FORM,
    "vi" => ONE_FORM,
    "wo" => ONE_FORM,
    "yo" => ONE_FORM,
    "yue" => ONE_FORM,
    "zh" => ONE_FORM,

    // two forms, singular only for n == 1
    "af" => TWO_FORMS_NOT_ONE,
    "an" => TWO_FORMS_NOT_ONE,
    "ast" => TWO_FORMS_NOT_ONE,
    "az" => TWO_FORMS_NOT_ONE,
    "bg" => TWO_FORMS_NOT_ONE,
    "ca" => TWO_FORMS_NOT_ONE,
    "da" => TWO_FORMS_NOT_ONE,
    "de" => TWO_FORMS_NOT_ONE,
    "el" => TWO_FORMS_NOT_ONE,
    "en" => TWO_FORMS_NOT_ONE,
    "eo" => TWO_FORMS_NOT_ONE,
    "es" => TWO_FORMS_NOT_ONE,
    "et" => TWO_FORMS_NOT_ONE,
    "eu" => TWO_FORMS_NOT_ONE,
    "fi" => TWO_FORMS_NOT_ONE,
    "fo" => TWO_FORMS_NOT_ONE,
    "fur" => TWO_FORMS_NOT_ONE,
    "fy" => TWO_FORMS_NOT_ONE,
    "gl" => TWO_FORMS_NOT_ONE,
    "ha" => TWO_FORMS_NOT_ONE,
    "hu" => TWO_FORMS_NOT_ONE,
    "ia" => TWO_FORMS_NOT_ONE,
    "it" => TWO_FORMS_NOT_ONE,
    "ka" => TWO_FORMS_NOT_ONE,
    "kk" => TWO_FORMS_NOT_ONE,
    "kl" => TWO_FORMS_NOT_ONE,
    "ku" => TWO_FORMS_NOT_ONE,
    "ky" => TWO_FORMS_NOT_ONE,
    "lb" => TWO_FORMS_NOT_ONE,
    "ml" => TWO_FORMS_NOT_ONE,
    "mn" => TWO_FORMS_NOT_ONE,
    "mr" => TWO_FORMS_NOT_ONE,
    "nb" => TWO_FORMS_NOT_ONE,
    "ne" => TWO_FORMS_NOT_ONE,
    "nl" => TWO_FORMS_NOT_ONE,
    "nn" => TWO_FORMS_NOT_ONE,
    "no" => TWO_FORMS_NOT_ONE,
    "om" => TWO_FORMS_NOT_ONE,
    "or" => TWO_FORMS_NOT_ONE,
    "ps" => TWO_FORMS_NOT_ONE,
    "pt_PT" => TWO_FORMS_NOT_ONE,
    "sd" => TWO_FORMS_NOT_ONE,
    "sq" => TWO_FORMS_NOT_ONE,
    "sv" => TWO_FORMS_NOT_ONE,
    "sw" => TWO_FORMS_NOT_ONE,
    "ta" => TWO_FORMS_NOT_ONE,
    "te" => TWO_FORMS_NOT_ONE,
    "tk" => TWO_FORMS_NOT_ONE,
    "tr" => TWO_FORMS_NOT_ONE,
    "ug" => TWO_FORMS_NOT_ONE,
    "ur" => TWO_FORMS_NOT_ONE,
    "uz" => TWO_FORMS_NOT_ONE,
    "vo" => TWO_FORMS_NOT_ONE,
    "yi" => TWO_FORMS_NOT_ONE,

    // two forms, singular for n == 0 and n == 1
    "ak" => TWO_FORMS_GT_ONE,
    "am" => TWO_FORMS_GT_ONE,
    "as" => TWO_FORMS_GT_ONE,
    "bn" => TWO_FORMS_GT_ONE,
    "fa" => TWO_FORMS_GT_ONE,
    "ff" => TWO_FORMS_GT_ONE,
    "fr" => TWO_FORMS_GT_ONE,
    "gu" => TWO_FORMS_GT_ONE,
    "hi" => TWO_FORMS_GT_ONE,
    "hy" => TWO_FORMS_GT_ONE,
    "kab" => TWO_FORMS_GT_ONE,
    "kn" => TWO_FORMS_GT_ONE,
    "ln" => TWO_FORMS_GT_ONE,
    "mg" => TWO_FORMS_GT_ONE,
    "oc" => TWO_FORMS_GT_ONE,
    "pa" => TWO_FORMS_GT_ONE,
    "pt" => TWO_FORMS_GT_ONE,
    "si" => TWO_FORMS_GT_ONE,
    "ti" => TWO_FORMS_GT_ONE,
    "wa" => TWO_FORMS_GT_ONE,
    "zu" => TWO_FORMS_GT_ONE,

    // Slavic and Baltic families
    "be" => THREE_FORMS_EAST_SLAVIC,
    "bs" => THREE_FORMS_EAST_SLAVIC,
    "hr" => THREE_FORMS_EAST_SLAVIC,
    "ru" => THREE_FORMS_EAST_SLAVIC,
    "sr" => THREE_FORMS_EAST_SLAVIC,
    "sr@latin" => THREE_FORMS_EAST_SLAVIC,
    "uk" => THREE_FORMS_EAST_SLAVIC,
    "pl" => THREE_FORMS_POLISH,
    "szl" => THREE_FORMS_POLISH,
    "cs" => THREE_FORMS_CZECH,
    "sk" => THREE_FORMS_CZECH,
    "dsb" => FOUR_FORMS_SORBIAN,
    "hsb" => FOUR_FORMS_SORBIAN,
    "lt" => "nplurals=3; plural=(n%10==1 && (n%100<11 || n%100>19) ? 0 : n%10>=2 && n%10<=9 && (n%100<11 || n%100>19) ? 1 : 2);",
    "lv" => "nplurals=3; plural=(n%10==0 || (n%100>=11 && n%100<=19) ? 0 : n%10==1 && n%100!=11 ? 1 : 2);",
    "sl" => "nplurals=4; plural=(n%100==1 ? 0 : n%100==2 ? 1 : n%100==3 || n%100==4 ? 2 : 3);",

    // everything else with its own pattern
    "ar" => "nplurals=6; plural=(n==0 ? 0 : n==1 ? 1 : n==2 ? 2 : n%100>=3 && n%100<=10 ? 3 : n%100>=11 && n%100<=99 ? 4 : 5);",
    "br" => "nplurals=5; plural=(n%10==1 && n%100!=11 && n%100!=71 && n%100!=91 ? 0 : n%10==2 && n%100!=12 && n%100!=72 && n%100!=92 ? 1 : ((n%10>=3 && n%10<=4) || n%10==9) && (n%100<10 || n%100>19) && (n%100<70 || n%100>79) && (n%100<90 || n%100>99) ? 2 : n!=0 && n%1000000==0 ? 3 : 4);",
    "cy" => "nplurals=6; plural=(n==0 ? 0 : n==1 ? 1 : n==2 ? 2 : n==3 ? 3 : n==6 ? 4 : 5);",
    "ga" => "nplurals=5; plural=(n==1 ? 0 : n==2 ? 1 : n>=3 && n<=6 ? 2 : n>=7 && n<=10 ? 3 : 4);",
    "gd" => "nplurals=4; plural=(n==1 || n==11 ? 0 : n==2 || n==12 ? 1 : (n>=3 && n<=10) || (n>=13 && n<=19) ? 2 : 3);",
    "he" => "nplurals=4; plural=(n==1 ? 0 : n==2 ? 1 : n>10 && n%10==0 ? 2 : 3);",
    "is" => "nplurals=2; plural=(n%10!=1 || n%100==11);",
    "mk" => "nplurals=2; plural=(n%10==1 && n%100!=11 ? 0 : 1);",
    "mt" => "nplurals=4; plural=(n==1 ? 0 : n==0 || (n%100>=2 && n%100<=10) ? 1 : n%100>=11 && n%100<=19 ? 2 : 3);",
    "ro" => "nplurals=3; plural=(n==1 ? 0 : n==0 || (n%100>=2 && n%100<=19) ? 1 : 2);",
};
