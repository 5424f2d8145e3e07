//! Personality filter: drops behavior/delivery words before matching.

use crate::vocabulary::PERSONALITY_WORDS;

/// Remove personality words from a description.
///
/// Tokens are compared case-insensitively with surrounding punctuation
/// stripped; surviving tokens are rejoined with single spaces, so a
/// non-matching input passes through modulo whitespace normalization.
#[must_use]
pub fn strip_personality(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| {
            let cleaned = token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            !PERSONALITY_WORDS.contains(&cleaned.as_str())
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_personality_words() {
        assert_eq!(
            strip_personality("friendly calm British male"),
            "British male"
        );
    }

    #[test]
    fn strips_punctuated_and_cased_tokens() {
        assert_eq!(
            strip_personality("Warm, Bubbly! narrator voice"),
            "narrator voice"
        );
    }

    #[test]
    fn non_matching_text_passes_through() {
        assert_eq!(
            strip_personality("young  British   male"),
            "young British male"
        );
        assert_eq!(strip_personality(""), "");
    }

    #[test]
    fn strips_tone_words_unconditionally() {
        // Known heuristic limitation: "warm" is removed even when it
        // describes voice tone rather than behavior. Preserved on purpose.
        assert_eq!(strip_personality("a warm low voice"), "a low voice");
    }
}
