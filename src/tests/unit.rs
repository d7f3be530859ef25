#[cfg(test)]
mod unit_tests {

    use crate::{Language, PluralFormsExpr, TextDirection};

    // ------------------------------------------------------------------
    //    Code grammar and normalization
    // ------------------------------------------------------------------

    #[test]
    fn strict_accepts_canonical_shapes() {
        for code in ["cs", "ast", "pt_BR", "es_419", "sr@latin", "ca_ES@valencia"] {
            let lang = Language::parse_strict(code);
            assert!(lang.is_valid(), "{code} should be canonical");
            assert_eq!(lang.code(), code);
        }
    }

    #[test]
    fn strict_rejects_near_misses() {
        for code in [
            "", "c", "czech", "CS", "cs_cz", "cs-CZ", "pt_BRA", "pt_B", "es_41",
            "sr@", "sr@Latin", "_CZ", "cs_",
        ] {
            assert!(
                !Language::parse_strict(code).is_valid(),
                "{code:?} should be rejected"
            );
        }
    }

    #[test]
    fn normalize_repairs_case_and_separators() {
        assert_eq!(Language::try_parse("DE-de").code(), "de_DE");
        assert_eq!(Language::try_parse("PT-br").code(), "pt_BR");
        assert_eq!(Language::try_parse("SR@LATIN").code(), "sr@latin");
        assert_eq!(Language::try_parse(" cs ").code(), "cs");
    }

    #[test]
    fn normalize_is_idempotent() {
        use crate::lang::normalize_code;
        for input in ["DE-de", "sr@LATIN", "ZH-hans", "pt-br", "cs"] {
            let once = normalize_code(input);
            assert_eq!(normalize_code(&once), once);
        }
    }

    #[test]
    fn code_grammar_predicate() {
        use crate::lang::is_valid_code;
        assert!(is_valid_code("pt_BR"));
        assert!(is_valid_code("es_419"));
        assert!(!is_valid_code("pt-BR"));
        assert!(!is_valid_code("pt_br"));
    }

    #[test]
    fn strict_parse_is_idempotent() {
        for code in ["cs", "pt_BR", "sr@latin", "es_419"] {
            let once = Language::parse_strict(code);
            let twice = Language::parse_strict(once.code());
            assert_eq!(once, twice);
        }
    }

    // ------------------------------------------------------------------
    //    Resolution chain
    // ------------------------------------------------------------------

    #[test]
    fn chinese_script_aliases() {
        assert_eq!(Language::try_parse("zh-Hans").code(), "zh_CN");
        assert_eq!(Language::try_parse("zh-Hant").code(), "zh_TW");
        assert_eq!(Language::try_parse("ZH-HANS").code(), "zh_CN");
    }

    #[test]
    fn parses_display_names() {
        assert_eq!(Language::try_parse("Czech").code(), "cs");
        assert_eq!(Language::try_parse("čeština").code(), "cs");
        assert_eq!(Language::try_parse("ČEŠTINA").code(), "cs");
        assert_eq!(Language::try_parse("Portuguese (Brazil)").code(), "pt_BR");
        assert_eq!(Language::try_parse("Serbian (Latin)").code(), "sr@latin");
    }

    #[test]
    fn falls_back_to_bcp47() {
        assert_eq!(Language::try_parse("sr-Latn").code(), "sr@latin");
        assert!(!Language::try_parse("not a language at all").is_valid());
    }

    #[test]
    fn validation_rejects_shape_valid_nonsense() {
        // "xx" matches the grammar but is no ISO-639 language.
        assert!(Language::try_parse("xx").is_valid());
        assert!(!Language::try_parse_with_validation("xx").is_valid());
        assert!(!Language::try_parse_with_validation("en_XX").is_valid());
        assert_eq!(Language::try_parse_with_validation("en_US").code(), "en_US");
    }

    // ------------------------------------------------------------------
    //    Accessors
    // ------------------------------------------------------------------

    #[test]
    fn subtag_accessors() {
        let lang = Language::parse_strict("pt_BR");
        assert_eq!(lang.lang(), "pt");
        assert_eq!(lang.country(), Some("BR"));
        assert_eq!(lang.lang_and_country(), "pt_BR");
        assert_eq!(lang.variant(), None);

        let lang = Language::parse_strict("sr@latin");
        assert_eq!(lang.lang(), "sr");
        assert_eq!(lang.country(), None);
        assert_eq!(lang.lang_and_country(), "sr");
        assert_eq!(lang.variant(), Some("latin"));

        let lang = Language::parse_strict("ca_ES@valencia");
        assert_eq!(lang.lang(), "ca");
        assert_eq!(lang.country(), Some("ES"));
        assert_eq!(lang.variant(), Some("valencia"));
    }

    #[test]
    fn language_tags() {
        assert_eq!(Language::parse_strict("cs").language_tag(), "cs");
        assert_eq!(Language::parse_strict("pt_BR").language_tag(), "pt-BR");
        assert_eq!(Language::parse_strict("sr@latin").language_tag(), "sr-Latn");
        assert_eq!(Language::parse_strict("uz@cyrillic").language_tag(), "uz-Cyrl");
        assert_eq!(
            Language::parse_strict("ca_ES@valencia").language_tag(),
            "ca-ES-x-valencia"
        );
        assert_eq!(Language::invalid().language_tag(), "");
    }

    #[test]
    fn tag_parsing() {
        assert_eq!(Language::from_language_tag("pt-BR").code(), "pt_BR");
        assert_eq!(Language::from_language_tag("sr-Latn").code(), "sr@latin");
        assert_eq!(Language::from_language_tag("uz-Cyrl").code(), "uz@cyrillic");
        assert_eq!(Language::from_language_tag("zh-Hans").code(), "zh_CN");
        assert_eq!(Language::from_language_tag("zh-Hant").code(), "zh_TW");
        assert_eq!(Language::from_language_tag("zh-Hant-HK").code(), "zh_HK");
        assert_eq!(
            Language::from_language_tag("ca-ES-x-valencia").code(),
            "ca_ES@valencia"
        );
        // Serbian's default script is Cyrillic, so no variant appears.
        assert_eq!(Language::from_language_tag("sr-Cyrl").code(), "sr");
        assert!(!Language::from_language_tag("").is_valid());
        assert!(!Language::from_language_tag("und").is_valid());
    }

    #[test]
    fn direction() {
        assert_eq!(Language::parse_strict("cs").direction(), TextDirection::LeftToRight);
        assert_eq!(Language::parse_strict("ar").direction(), TextDirection::RightToLeft);
        assert_eq!(Language::parse_strict("he").direction(), TextDirection::RightToLeft);
        assert_eq!(Language::parse_strict("fa").direction(), TextDirection::RightToLeft);
        assert_eq!(Language::invalid().direction(), TextDirection::LeftToRight);
    }

    #[test]
    fn display_names() {
        assert_eq!(Language::parse_strict("cs").display_name(), "Czech");
        assert_eq!(Language::parse_strict("cs").display_name_in_itself(), "čeština");
        assert_eq!(Language::parse_strict("pt_BR").display_name(), "Portuguese (Brazil)");
        // Unknown but valid codes fall back to the raw code.
        assert_eq!(Language::parse_strict("tlh").display_name(), "tlh");
    }

    #[test]
    fn roundtrip_formatting() {
        let cs = Language::parse_strict("cs");
        assert_eq!(Language::try_parse(&cs.format_for_roundtrip()), cs);

        // cs_CZ has no registry entry of its own; its display name would
        // resolve to plain "cs", so the raw code must be used.
        let cs_cz = Language::parse_strict("cs_CZ");
        assert_eq!(cs_cz.format_for_roundtrip(), "cs_CZ");

        let sr_latin = Language::parse_strict("sr@latin");
        assert_eq!(sr_latin.format_for_roundtrip(), "Serbian (Latin)");

        // Arbitrary variants cannot be expressed by a display name.
        let valencia = Language::parse_strict("ca_ES@valencia");
        assert_eq!(valencia.format_for_roundtrip(), "ca_ES@valencia");
    }

    // ------------------------------------------------------------------
    //    Legacy names
    // ------------------------------------------------------------------

    #[test]
    fn legacy_header_names() {
        assert_eq!(Language::from_legacy_names("Czech", None).code(), "cs");
        assert_eq!(Language::from_legacy_names("czech", None).code(), "cs");
        assert_eq!(
            Language::from_legacy_names("German", Some("Austria")).code(),
            "de_AT"
        );
        assert_eq!(
            Language::from_legacy_names("Brazilian Portuguese", None).code(),
            "pt_BR"
        );
        assert!(!Language::from_legacy_names("Klingon", None).is_valid());
        // Unknown country names degrade to the bare language.
        assert_eq!(
            Language::from_legacy_names("French", Some("Atlantis")).code(),
            "fr"
        );
    }

    // ------------------------------------------------------------------
    //    Plural-forms expressions
    // ------------------------------------------------------------------

    #[test]
    fn english_expression() {
        let expr = PluralFormsExpr::new("nplurals=2; plural=(n != 1);");
        assert_eq!(expr.nplurals(), Some(2));
        assert_eq!(expr.evaluate(0), 1);
        assert_eq!(expr.evaluate(1), 0);
        assert_eq!(expr.evaluate(2), 1);
    }

    #[test]
    fn russian_expression() {
        let expr = PluralFormsExpr::new(
            "nplurals=3; plural=(n%10==1 && n%100!=11 ? 0 : n%10>=2 && n%10<=4 && (n%100<12 || n%100>14) ? 1 : 2);",
        );
        assert_eq!(expr.nplurals(), Some(3));
        assert_eq!(expr.evaluate(1), 0);
        assert_eq!(expr.evaluate(2), 1);
        assert_eq!(expr.evaluate(5), 2);
        assert_eq!(expr.evaluate(11), 2);
        assert_eq!(expr.evaluate(21), 0);
        assert_eq!(expr.evaluate(22), 1);
        assert_eq!(expr.evaluate(111), 2);
    }

    #[test]
    fn polish_differs_from_russian_at_one() {
        let ru = Language::parse_strict("ru").default_plural_forms_expr();
        let pl = Language::parse_strict("pl").default_plural_forms_expr();
        assert_eq!(ru.evaluate(1), 0);
        assert_eq!(pl.evaluate(1), 0);
        assert_eq!(ru.evaluate(101), 0);
        assert_eq!(pl.evaluate(101), 2);
        assert_ne!(ru, pl);
    }

    #[test]
    fn arabic_six_forms() {
        let expr = Language::parse_strict("ar").default_plural_forms_expr();
        assert_eq!(expr.nplurals(), Some(6));
        assert_eq!(expr.evaluate(0), 0);
        assert_eq!(expr.evaluate(1), 1);
        assert_eq!(expr.evaluate(2), 2);
        assert_eq!(expr.evaluate(5), 3);
        assert_eq!(expr.evaluate(15), 4);
        assert_eq!(expr.evaluate(100), 5);
    }

    #[test]
    fn malformed_expressions_are_harmless() {
        for text in ["", "???", "garbage(((", "nplurals=; plural=n", "plural=(n != 1)"] {
            let expr = PluralFormsExpr::new(text);
            assert!(!expr.is_well_formed(), "{text:?} should not compile");
            assert_eq!(expr.evaluate(7), 0);
        }
    }

    #[test]
    fn nplurals_textual_fallback() {
        // The header text fixes nplurals even when the expression part is broken.
        let expr = PluralFormsExpr::new("nplurals=4; plural=bogus!!!");
        assert!(!expr.is_well_formed());
        assert_eq!(expr.nplurals(), Some(4));
        assert_eq!(PluralFormsExpr::new("no header here").nplurals(), None);
    }

    #[test]
    fn supplied_nplurals_wins() {
        let expr = PluralFormsExpr::with_nplurals("nplurals=2; plural=(n != 1);", 5);
        assert_eq!(expr.nplurals(), Some(5));
    }

    #[test]
    fn modulo_by_zero_evaluates_to_zero() {
        let expr = PluralFormsExpr::new("nplurals=2; plural=n % 0;");
        assert_eq!(expr.evaluate(17), 0);
    }

    #[test]
    fn equality_ignores_blanks() {
        let a = PluralFormsExpr::new("nplurals=2; plural=(n != 1);");
        let b = PluralFormsExpr::new("nplurals=2;plural=(n!=1);");
        assert_eq!(a, b);
    }

    #[test]
    fn equality_by_semantics() {
        let a = PluralFormsExpr::new("nplurals=2; plural=(n != 1);");
        let b = PluralFormsExpr::new("nplurals=2; plural=(n == 1 ? 0 : 1);");
        assert_eq!(a, b);
    }

    #[test]
    fn different_counts_never_equal() {
        let a = PluralFormsExpr::new("nplurals=2; plural=(n != 1);");
        let b = PluralFormsExpr::new("nplurals=3; plural=(n != 1);");
        assert_ne!(a, b);
    }

    #[test]
    fn default_lookup_is_three_tier() {
        // No pt_BR entry exists, so the bare-language tier answers.
        let br = Language::parse_strict("pt_BR").default_plural_forms_expr();
        assert_eq!(br.text(), "nplurals=2; plural=(n > 1);");
        // European Portuguese has its own entry.
        let pt = Language::parse_strict("pt_PT").default_plural_forms_expr();
        assert_eq!(pt.text(), "nplurals=2; plural=(n != 1);");
        // Unknown locales get the empty expression.
        let none = Language::parse_strict("tlh").default_plural_forms_expr();
        assert!(!none.is_well_formed());
        assert_eq!(none.nplurals(), None);
    }

    #[test]
    fn nplurals_convenience() {
        assert_eq!(Language::parse_strict("ja").nplurals(), Some(1));
        assert_eq!(Language::parse_strict("en").nplurals(), Some(2));
        assert_eq!(Language::parse_strict("ru").nplurals(), Some(3));
        assert_eq!(Language::parse_strict("ar").nplurals(), Some(6));
        assert_eq!(Language::invalid().nplurals(), None);
    }
}
