use crate::config::{FUZZY_MIN_LEN, FUZZY_THRESHOLD};

use super::normalize::{Language, normalize};
use super::similarity::similarity;

/// Verdict for one submitted answer.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeOutcome {
    pub accepted: bool,
    /// True when the accepted answer equalled a target after normalization
    pub exact: bool,
    /// 1.0 for exact matches, the similarity for fuzzy ones, and the best
    /// similarity observed across all targets for rejections
    pub confidence: f64,
    /// The accepted target, or the closest-scoring one for rejections
    pub matched: Option<String>,
}

impl GradeOutcome {
    fn rejected() -> Self {
        Self { accepted: false, exact: false, confidence: 0.0, matched: None }
    }
}

/// Grade a free-text answer against the acceptable targets.
///
/// Targets are tried in input order. Exact equality after normalization
/// accepts immediately with confidence 1.0. Fuzzy acceptance needs both
/// normalized strings longer than three characters and a similarity at or
/// above the threshold; the first target clearing it wins. When nothing
/// is accepted, the best similarity seen across all targets is reported
/// together with the target that produced it, so the caller can still
/// show the closest match.
pub fn grade(user_answer: &str, targets: &[String], language: Language) -> GradeOutcome {
    let user = normalize(user_answer, language);
    if user.is_empty() || targets.is_empty() {
        return GradeOutcome::rejected();
    }

    let mut best_similarity = 0.0_f64;
    let mut best_target: Option<&String> = None;

    for target in targets {
        let candidate = normalize(target, language);
        if candidate.is_empty() {
            continue;
        }

        if user == candidate {
            return GradeOutcome {
                accepted: true,
                exact: true,
                confidence: 1.0,
                matched: Some(target.clone()),
            };
        }

        let sim = similarity(&user, &candidate);
        if sim > best_similarity {
            best_similarity = sim;
            best_target = Some(target);
        }

        // One substitution in a very short word is a 100% miss; below the
        // length floor only the exact check above counts.
        if user.chars().count() <= FUZZY_MIN_LEN || candidate.chars().count() <= FUZZY_MIN_LEN {
            continue;
        }

        if sim >= FUZZY_THRESHOLD {
            return GradeOutcome {
                accepted: true,
                exact: false,
                confidence: sim,
                matched: Some(target.clone()),
            };
        }
    }

    GradeOutcome {
        accepted: false,
        exact: false,
        confidence: best_similarity,
        matched: best_target.cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_accepts_with_full_confidence() {
        let outcome = grade("gitmek", &targets(&["gitmek", "yürümek"]), Language::Turkish);
        assert!(outcome.accepted);
        assert!(outcome.exact);
        assert_eq!(outcome.confidence, 1.0);
        assert_eq!(outcome.matched.as_deref(), Some("gitmek"));
    }

    #[test]
    fn test_exact_match_ignores_case_and_whitespace() {
        let outcome = grade("  Elma  Ağacı ", &targets(&["elma ağacı"]), Language::Turkish);
        assert!(outcome.accepted);
        assert!(outcome.exact);
    }

    #[test]
    fn test_exact_match_through_diacritic_folding() {
        // "schoen" typed on an ASCII keyboard matches "schön"
        let outcome = grade("schoen", &targets(&["schön"]), Language::German);
        assert!(outcome.accepted);
        assert!(outcome.exact);
        assert_eq!(outcome.confidence, 1.0);
    }

    #[test]
    fn test_exact_match_accepts_short_strings() {
        let outcome = grade("zu", &targets(&["zu"]), Language::German);
        assert!(outcome.accepted);
        assert!(outcome.exact);
        assert_eq!(outcome.confidence, 1.0);
    }

    #[test]
    fn test_short_strings_never_fuzzy_match() {
        // "zu" and "du" are 50% similar but single-substitution short words
        // must not pass
        let outcome = grade("zu", &targets(&["du"]), Language::German);
        assert!(!outcome.accepted);
        assert!(outcome.confidence > 0.0);
        assert_eq!(outcome.matched.as_deref(), Some("du"));
    }

    #[test]
    fn test_fuzzy_match_above_threshold() {
        // similarity("gehen", "gehn") = 8/9 ~ 0.889
        let outcome = grade("gehn", &targets(&["gehen"]), Language::German);
        assert!(outcome.accepted);
        assert!(!outcome.exact);
        assert!(outcome.confidence >= 0.88);
        assert!(outcome.confidence < 1.0);
        assert_eq!(outcome.matched.as_deref(), Some("gehen"));
    }

    #[test]
    fn test_fuzzy_match_below_threshold_rejects() {
        // similarity("aabbccdd", "aabbccde") = 14/16 = 0.875, just under 0.88
        let outcome = grade("aabbccdd", &targets(&["aabbccde"]), Language::Turkish);
        assert!(!outcome.accepted);
        assert!((outcome.confidence - 0.875).abs() < 1e-9);
        assert_eq!(outcome.matched.as_deref(), Some("aabbccde"));
    }

    #[test]
    fn test_empty_answer_rejected() {
        let outcome = grade("   ", &targets(&["gitmek"]), Language::Turkish);
        assert_eq!(outcome, GradeOutcome::rejected());
    }

    #[test]
    fn test_empty_target_list_rejected() {
        let outcome = grade("gitmek", &[], Language::Turkish);
        assert_eq!(outcome, GradeOutcome::rejected());
    }

    #[test]
    fn test_blank_targets_are_skipped() {
        let outcome = grade("gitmek", &targets(&["  ", "gitmek"]), Language::Turkish);
        assert!(outcome.accepted);
        assert_eq!(outcome.matched.as_deref(), Some("gitmek"));
    }

    #[test]
    fn test_first_accepting_target_wins() {
        let outcome = grade("gitmek", &targets(&["gitmek", "gitmek "]), Language::Turkish);
        assert_eq!(outcome.matched.as_deref(), Some("gitmek"));
    }

    #[test]
    fn test_best_similarity_scanned_across_all_targets() {
        // Neither target is accepted; the closer one is reported even though
        // it comes after a poor one
        let outcome = grade("gehen", &targets(&["haus", "gehem"]), Language::German);
        assert!(!outcome.accepted);
        assert_eq!(outcome.matched.as_deref(), Some("gehem"));
        assert!((outcome.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_no_overlap_leaves_matched_empty() {
        let outcome = grade("abc", &targets(&["xyz"]), Language::Turkish);
        assert!(!outcome.accepted);
        assert_eq!(outcome.confidence, 0.0);
        assert!(outcome.matched.is_none());
    }
}
