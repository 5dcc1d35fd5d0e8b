// locales the web app ships translations for
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    pub name: &'static str,
}

pub const DEFAULT_LOCALE: &str = "en_US";

pub const LOCALES: &[Locale] = &[
    Locale { tag: "en_US", name: "English (US)" },
    Locale { tag: "de_DE", name: "Deutsch (Deutschland)" },
    Locale { tag: "es_ES", name: "Español (España)" },
    Locale { tag: "fr_FR", name: "Français (France)" },
    Locale { tag: "it_IT", name: "Italiano (Italia)" },
    Locale { tag: "ja_JP", name: "日本語 (日本)" },
    Locale { tag: "ko_KR", name: "한국어 (Korean)" },
    Locale { tag: "pt_BR", name: "Português (Brasil)" },
    Locale { tag: "pt_PT", name: "Português (Portugal)" },
    Locale { tag: "ru_RU", name: "Pусский (Россия)" },
    Locale { tag: "zh_CN", name: "简体中文 (中国)" },
];

// browser tags look like "de-AT" or "de", ours look like "de_DE"
//
// an exact region match wins, otherwise the first locale with the same language
pub fn detect(browser_language: &str) -> Option<Locale> {
    let tag = browser_language.trim().replace('-', "_");
    if tag.is_empty() {
        return None;
    }

    if let Some(locale) = LOCALES.iter().find(|l| l.tag.eq_ignore_ascii_case(&tag)) {
        return Some(*locale);
    }

    let language = tag.split('_').next().unwrap_or_default().to_ascii_lowercase();
    LOCALES
        .iter()
        .find(|l| l.tag.split('_').next() == Some(language.as_str()))
        .copied()
}

// only users still on the default language are nudged, anyone who picked
// a language on purpose is left alone
pub fn suggested_locale(user_language: &str, browser_language: Option<&str>) -> Option<Locale> {
    if user_language != DEFAULT_LOCALE {
        return None;
    }

    let locale = detect(browser_language?)?;
    if locale.tag == user_language {
        None
    } else {
        Some(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_exact_and_language() {
        assert_eq!(detect("de-DE").unwrap().tag, "de_DE");
        assert_eq!(detect("de-AT").unwrap().tag, "de_DE");
        assert_eq!(detect("pt-PT").unwrap().tag, "pt_PT");
        assert_eq!(detect("pt").unwrap().tag, "pt_BR");
        assert_eq!(detect("FR").unwrap().tag, "fr_FR");
        assert!(detect("xx-YY").is_none());
        assert!(detect("").is_none());
    }

    #[test]
    fn suggests_for_default_users() {
        assert_eq!(suggested_locale("en_US", Some("ja")).unwrap().tag, "ja_JP");
        assert!(suggested_locale("en_US", Some("en-GB")).is_none());
        assert!(suggested_locale("en_US", None).is_none());
    }

    #[test]
    fn leaves_chosen_languages_alone() {
        assert!(suggested_locale("fr_FR", Some("de-DE")).is_none());
    }
}
