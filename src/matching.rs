//! Substring search with instrumented comparison counts.
//!
//! Two searchers over byte strings: a brute-force scan and
//! Knuth-Morris-Pratt over a longest-proper-prefix-suffix table. Both
//! report the first match index and how many comparisons they spent,
//! so a caller can put the O(n*m) and O(n+m) behaviours side by side.

/// Outcome of a single search run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchStats {
    /// Byte index of the first match, if any.
    pub found: Option<usize>,
    /// Character comparisons charged by the algorithm.
    pub comparisons: u64,
    /// Wall-clock seconds, filled in by the caller that timed the run.
    pub seconds: f64,
}

impl MatchStats {
    fn new() -> Self {
        MatchStats {
            found: None,
            comparisons: 0,
            seconds: 0.0,
        }
    }
}

/// Brute-force scan: tries the pattern at every text offset and counts
/// every character comparison, including the one that mismatches.
pub fn brute_force(text: &str, pattern: &str) -> MatchStats {
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    let mut stats = MatchStats::new();

    if pattern.is_empty() {
        stats.found = Some(0);
        return stats;
    }
    if pattern.len() > text.len() {
        return stats;
    }

    for i in 0..=text.len() - pattern.len() {
        let mut matched = true;
        for (j, &p) in pattern.iter().enumerate() {
            stats.comparisons += 1;
            if text[i + j] != p {
                matched = false;
                break;
            }
        }
        if matched {
            stats.found = Some(i);
            break;
        }
    }
    stats
}

/// Longest-proper-prefix-suffix table for the KMP failure function.
/// `lps[i]` is the length of the longest proper prefix of
/// `pattern[..=i]` that is also a suffix of it.
pub fn lps_table(pattern: &str) -> Vec<usize> {
    let pattern = pattern.as_bytes();
    let mut lps = vec![0usize; pattern.len()];
    let mut len = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}

/// Knuth-Morris-Pratt search. Charges one comparison per loop pass,
/// even when a pass probes the same pair of characters twice.
pub fn kmp(text: &str, pattern: &str) -> MatchStats {
    let lps = lps_table(pattern);
    let text = text.as_bytes();
    let pattern = pattern.as_bytes();
    let mut stats = MatchStats::new();

    if pattern.is_empty() {
        stats.found = Some(0);
        return stats;
    }

    let mut i = 0;
    let mut j = 0;
    while i < text.len() {
        stats.comparisons += 1;
        if pattern[j] == text[i] {
            i += 1;
            j += 1;
        }
        if j == pattern.len() {
            stats.found = Some(i - j);
            break;
        } else if i < text.len() && pattern[j] != text[i] {
            if j != 0 {
                j = lps[j - 1];
            } else {
                i += 1;
            }
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_TEXT: &str = "ABABDABACDABABCABAB";
    const DEMO_PATTERN: &str = "ABABCABAB";

    #[test]
    fn brute_force_finds_demo_match() {
        let stats = brute_force(DEMO_TEXT, DEMO_PATTERN);
        assert_eq!(stats.found, Some(10));
        assert_eq!(stats.comparisons, 29);
    }

    #[test]
    fn kmp_finds_demo_match_with_fewer_comparisons() {
        let stats = kmp(DEMO_TEXT, DEMO_PATTERN);
        assert_eq!(stats.found, Some(10));
        assert_eq!(stats.comparisons, 23);
    }

    #[test]
    fn lps_table_for_demo_pattern() {
        assert_eq!(lps_table(DEMO_PATTERN), [0, 0, 1, 2, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn lps_table_known_shapes() {
        assert_eq!(lps_table("AAAA"), [0, 1, 2, 3]);
        assert_eq!(lps_table("ABCDE"), [0, 0, 0, 0, 0]);
        assert_eq!(
            lps_table("AABAACAABAA"),
            [0, 1, 0, 1, 2, 0, 1, 2, 3, 4, 5]
        );
        assert!(lps_table("").is_empty());
    }

    #[test]
    fn absent_pattern_reports_not_found() {
        let bf = brute_force("AAAA", "AB");
        assert_eq!(bf.found, None);
        assert_eq!(bf.comparisons, 6);

        let k = kmp("AAAA", "AB");
        assert_eq!(k.found, None);
    }

    #[test]
    fn pattern_longer_than_text_is_never_probed() {
        let bf = brute_force("AB", "ABC");
        assert_eq!(bf.found, None);
        assert_eq!(bf.comparisons, 0);
        assert_eq!(kmp("AB", "ABC").found, None);
    }

    #[test]
    fn pattern_equal_to_text_matches_at_zero() {
        assert_eq!(brute_force("HELLO", "HELLO").found, Some(0));
        assert_eq!(kmp("HELLO", "HELLO").found, Some(0));
    }

    #[test]
    fn match_at_end_of_text() {
        assert_eq!(brute_force("XXABC", "ABC").found, Some(2));
        assert_eq!(kmp("XXABC", "ABC").found, Some(2));
    }

    #[test]
    fn empty_pattern_matches_immediately() {
        let bf = brute_force("ABC", "");
        assert_eq!(bf.found, Some(0));
        assert_eq!(bf.comparisons, 0);
        assert_eq!(kmp("ABC", "").found, Some(0));
    }

    #[test]
    fn both_searchers_agree_on_first_index() {
        let cases = [
            ("the quick brown fox", "quick"),
            ("aaaaaaaaab", "aab"),
            ("mississippi", "issip"),
            ("mississippi", "zzz"),
            ("", "a"),
        ];
        for (text, pattern) in cases {
            assert_eq!(
                brute_force(text, pattern).found,
                kmp(text, pattern).found,
                "disagreement for {text:?} / {pattern:?}"
            );
        }
    }
}
