use serde::{Deserialize, Serialize};

/// Language an answer is written in, deciding which folding applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    German,
    Turkish,
}

impl Language {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "de" => Some(Self::German),
            "tr" => Some(Self::Turkish),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::German => "de",
            Self::Turkish => "tr",
        }
    }
}

/// Canonicalize text for comparison: trim, lowercase, collapse internal
/// whitespace runs to single spaces.
///
/// German additionally folds its special letters to their ASCII digraphs
/// so answers typed on a non-German keyboard layout still compare equal.
/// Total and idempotent; empty input stays empty.
pub fn normalize(text: &str, language: Language) -> String {
    let folded = fold_whitespace(text);
    match language {
        Language::German => folded
            .replace('ß', "ss")
            .replace('ä', "ae")
            .replace('ö', "oe")
            .replace('ü', "ue"),
        Language::Turkish => folded,
    }
}

fn fold_whitespace(text: &str) -> String {
    let lowered = text.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize("  Gehen  ", Language::German), "gehen");
        assert_eq!(normalize("ELMA", Language::Turkish), "elma");
    }

    #[test]
    fn test_collapses_internal_whitespace() {
        assert_eq!(normalize("elma   ağacı", Language::Turkish), "elma ağacı");
        assert_eq!(normalize("der \t Apfel", Language::German), "der apfel");
    }

    #[test]
    fn test_german_diacritic_folding() {
        assert_eq!(normalize("schön", Language::German), "schoen");
        assert_eq!(normalize("Straße", Language::German), "strasse");
        assert_eq!(normalize("über", Language::German), "ueber");
        assert_eq!(normalize("Mädchen", Language::German), "maedchen");
    }

    #[test]
    fn test_turkish_keeps_its_letters() {
        assert_eq!(normalize("güzel", Language::Turkish), "güzel");
        assert_eq!(normalize("ağaç", Language::Turkish), "ağaç");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize("", Language::German), "");
        assert_eq!(normalize("   ", Language::Turkish), "");
    }

    #[test]
    fn test_idempotent() {
        for (text, lang) in [
            ("  Schöne  Grüße ", Language::German),
            ("Elma Ağacı", Language::Turkish),
        ] {
            let once = normalize(text, lang);
            assert_eq!(normalize(&once, lang), once);
        }
    }

    #[test]
    fn test_language_roundtrip() {
        for lang in [Language::German, Language::Turkish] {
            assert_eq!(Language::from_str(lang.as_str()), Some(lang));
        }
        assert_eq!(Language::from_str("en"), None);
    }
}
