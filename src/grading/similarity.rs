//! Character-level similarity as a ratio of matching blocks.

/// Proportion of matching characters between two strings, 0.0 to 1.0.
///
/// Gestalt pattern matching: the total length M of non-overlapping common
/// substrings, found greedily longest-first, scored as
/// `2*M / (len(a) + len(b))`. Deterministic and symmetric; two empty
/// strings score 0.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    // Canonical argument order keeps the measure exactly symmetric even
    // when equally long matching blocks would tie-break differently.
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    let matched = matching_len(&a, &b);
    2.0 * matched as f64 / total as f64
}

/// Total length of non-overlapping common substrings, longest first.
///
/// Finds the longest common block, then recurses into the unmatched
/// pieces on either side of it.
fn matching_len(a: &[char], b: &[char]) -> usize {
    let (start_a, start_b, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }
    len
        + matching_len(&a[..start_a], &b[..start_b])
        + matching_len(&a[start_a + len..], &b[start_b + len..])
}

/// Longest common substring as (start_a, start_b, len); earliest
/// positions win ties.
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    let mut prev = vec![0usize; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        let mut current = vec![0usize; b.len() + 1];
        for (j, &cb) in b.iter().enumerate() {
            if ca == cb {
                let len = prev[j] + 1;
                current[j + 1] = len;
                if len > best.2 {
                    best = (i + 1 - len, j + 1 - len, len);
                }
            }
        }
        prev = current;
    }

    best
}
