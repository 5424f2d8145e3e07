//! Dynamic term matcher: matches description words against values that
//! actually exist in the supplied catalog, so new catalog entries become
//! matchable without code changes.

/// Minimum token length considered significant for word-overlap matching.
const SIGNIFICANT_LEN: usize = 3;

/// Match a candidate word or phrase against known catalog values using three
/// widening tiers, first success wins:
///
/// 1. exact lower-cased equality;
/// 2. substring containment in either direction ("british accent" contains
///    "british");
/// 3. shared significant word — both sides split on hyphen/space, tokens
///    longer than two characters match when equal or when one contains the
///    other ("Indian-American" matches a bare "indian").
///
/// Returns the original-cased known value so display strings retain the
/// catalog's casing. `None` means no match across all tiers — an absence,
/// not an error. Ties resolve to the first value in source order.
#[must_use]
pub fn match_term(candidate: &str, known: &[String]) -> Option<String> {
    let candidate = candidate.trim().to_lowercase();
    if candidate.is_empty() {
        return None;
    }

    for value in known {
        if value.to_lowercase() == candidate {
            return Some(value.clone());
        }
    }

    for value in known {
        let lower = value.to_lowercase();
        if candidate.contains(&lower) || lower.contains(&candidate) {
            return Some(value.clone());
        }
    }

    let candidate_tokens = significant_tokens(&candidate);
    for value in known {
        let lower = value.to_lowercase();
        for value_token in significant_tokens(&lower) {
            for candidate_token in &candidate_tokens {
                if value_token == *candidate_token
                    || value_token.contains(candidate_token.as_str())
                    || candidate_token.contains(&value_token)
                {
                    return Some(value.clone());
                }
            }
        }
    }

    None
}

/// Split on hyphen/space and keep only tokens long enough to carry meaning.
#[must_use]
pub fn significant_tokens(value: &str) -> Vec<String> {
    value
        .split(['-', ' '])
        .filter(|token| token.len() >= SIGNIFICANT_LEN)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn known(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn exact_match_returns_original_casing() {
        let values = known(&["British", "Indian-American"]);
        assert_eq!(match_term("british", &values).as_deref(), Some("British"));
    }

    #[test]
    fn substring_matches_either_direction() {
        let values = known(&["British"]);
        assert_eq!(
            match_term("british accent", &values).as_deref(),
            Some("British")
        );

        let values = known(&["Received Pronunciation British"]);
        assert_eq!(
            match_term("british", &values).as_deref(),
            Some("Received Pronunciation British")
        );
    }

    #[test]
    fn word_overlap_bridges_compound_accents() {
        let values = known(&["Indian-American"]);
        assert_eq!(
            match_term("indian", &values).as_deref(),
            Some("Indian-American")
        );

        let values = known(&["Indian"]);
        assert_eq!(
            match_term("indian-american", &values).as_deref(),
            Some("Indian")
        );
    }

    #[test]
    fn short_tokens_are_not_significant() {
        assert!(significant_tokens("us of a").is_empty());
        assert_eq!(significant_tokens("latin-american"), ["latin", "american"]);
    }

    #[test]
    fn no_match_is_none() {
        let values = known(&["British", "Australian"]);
        assert_eq!(match_term("nigerian", &values), None);
        assert_eq!(match_term("", &values), None);
        assert_eq!(match_term("british", &[]), None);
    }

    #[test]
    fn exact_tier_beats_substring_tier() {
        let values = known(&["South African", "African"]);
        assert_eq!(match_term("african", &values).as_deref(), Some("African"));
    }

    #[test]
    fn ties_break_by_source_order() {
        let values = known(&["African Standard", "African Heritage"]);
        assert_eq!(
            match_term("african", &values).as_deref(),
            Some("African Standard")
        );
    }
}
