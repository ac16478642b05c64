use std::collections::HashSet;

use super::normalize::{Language, normalize};

/// Split raw translation input into distinct entries.
///
/// Entries are separated by `;`, `,` or `/` (runs collapse), trimmed, and
/// de-duplicated case/whitespace-insensitively with first-seen casing and
/// order preserved. This rule defines what counts as one translation
/// everywhere raw input enters the system.
pub fn parse_translations(raw: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unique = Vec::new();

    for part in raw.split([';', ',', '/']) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let key = normalize(part, Language::Turkish);
        if seen.insert(key) {
            unique.push(part.to_string());
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_all_separators() {
        assert_eq!(
            parse_translations("gitmek, yürümek; ilerlemek / varmak"),
            vec!["gitmek", "yürümek", "ilerlemek", "varmak"]
        );
    }

    #[test]
    fn test_dedupes_case_insensitively_keeping_first_casing() {
        assert_eq!(parse_translations("Elma, elma, ELMA"), vec!["Elma"]);
    }

    #[test]
    fn test_mixed_separators_with_duplicates() {
        assert_eq!(parse_translations("elma, elma ağacı; elma"), vec!["elma", "elma ağacı"]);
    }

    #[test]
    fn test_separator_runs_and_blanks() {
        assert_eq!(parse_translations(";;elma,,  ,güzel//"), vec!["elma", "güzel"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_translations("").is_empty());
        assert!(parse_translations(" ; , / ").is_empty());
    }

    #[test]
    fn test_whitespace_insensitive_dedup() {
        assert_eq!(parse_translations("elma ağacı, elma   ağacı"), vec!["elma ağacı"]);
    }
}
