//! Scoring engine: weighs one catalog voice against parsed attributes.
//!
//! Weights: language up to 40, gender up to 30, accent up to 20, age group
//! up to 10, plus a multi-match bonus over {gender, accent, age group}.
//! Absent fields on either side simply contribute zero; there are no error
//! paths.

use voxmatch_core::{CatalogVoice, ParsedAttributes};

use crate::dynamic::significant_tokens;

/// Accent labels treated as the same region for full accent credit.
const ACCENT_SYNONYM_GROUPS: &[&[&str]] = &[
    &["british", "uk", "england", "english"],
    &["american", "usa", "us", "united states"],
    &["australian", "aussie"],
    &["new zealand", "kiwi"],
    &["latin american", "latino", "latina", "hispanic"],
    &["middle eastern", "arab", "arabic"],
    &["scottish", "scots"],
    &["southern", "deep southern"],
];

/// Catalog gender strings accepted as synonyms for a male voice.
const MALE_SYNONYMS: &[&str] = &["m", "man", "men", "boy", "guy", "gentleman", "masculine"];

/// Catalog gender strings accepted as synonyms for a female voice.
const FEMALE_SYNONYMS: &[&str] = &["f", "woman", "women", "girl", "lady", "gal", "feminine"];

/// Score a voice record against parsed attributes on a 0–100 scale.
///
/// The raw sum can exceed 100 when every term hits its maximum together
/// with the full bonus; the clamp is an explicit guarantee, not an
/// assumption.
#[must_use]
pub fn score_voice(voice: &CatalogVoice, attrs: &ParsedAttributes) -> u8 {
    let language = language_score(voice.language.as_deref(), attrs);
    let (gender, gender_matched) = gender_score(voice.gender.as_deref(), attrs);
    let (accent, accent_matched) = accent_score(voice.accent.as_deref(), attrs);
    let (age, age_matched) = age_score(voice.age_group.as_deref(), attrs);

    // Language is excluded from the multi-match bonus, as is the gender
    // consolation credit.
    let matches = u32::from(gender_matched) + u32::from(accent_matched) + u32::from(age_matched);
    let bonus = if matches >= 2 { (matches - 1) * 5 } else { 0 };

    let total = u32::from(language) + u32::from(gender) + u32::from(accent) + u32::from(age) + bonus;
    total.min(100) as u8
}

/// Up to 40: full credit for an exact code match, 30 for a prefix
/// relationship such as "en" vs "en-US".
fn language_score(voice_language: Option<&str>, attrs: &ParsedAttributes) -> u8 {
    let (Some(voice_language), Some(requested)) = (voice_language, attrs.language) else {
        return 0;
    };
    let voice_language = voice_language.trim().to_lowercase();
    let requested = requested.as_str();

    if voice_language == requested {
        40
    } else if voice_language.starts_with(requested) || requested.starts_with(&voice_language) {
        30
    } else {
        0
    }
}

/// Up to 30: exact canonical match, 25 for a recognized synonym on the
/// catalog side, 10 consolation when a gender was requested but the record
/// has none. The consolation credit does not count as a match.
fn gender_score(voice_gender: Option<&str>, attrs: &ParsedAttributes) -> (u8, bool) {
    let Some(requested) = attrs.gender else {
        return (0, false);
    };
    let Some(voice_gender) = voice_gender else {
        return (10, false);
    };
    let voice_gender = voice_gender.trim().to_lowercase();

    if voice_gender == requested.as_str() {
        return (30, true);
    }
    let synonyms = match requested {
        voxmatch_core::Gender::Male => MALE_SYNONYMS,
        voxmatch_core::Gender::Female => FEMALE_SYNONYMS,
    };
    if synonyms.contains(&voice_gender.as_str()) {
        return (25, true);
    }
    (0, false)
}

/// Up to 20: exact or regional synonym, 15 for substring containment either
/// direction, 10 for any shared significant word token, 0 when the record
/// has no accent at all.
fn accent_score(voice_accent: Option<&str>, attrs: &ParsedAttributes) -> (u8, bool) {
    let (Some(voice_accent), Some(requested)) = (voice_accent, attrs.accent.as_deref()) else {
        return (0, false);
    };
    let voice_accent = voice_accent.trim().to_lowercase();
    let requested = requested.trim().to_lowercase();
    if voice_accent.is_empty() || requested.is_empty() {
        return (0, false);
    }

    if voice_accent == requested || same_accent_region(&voice_accent, &requested) {
        return (20, true);
    }
    if voice_accent.contains(&requested) || requested.contains(&voice_accent) {
        return (15, true);
    }
    let voice_tokens = significant_tokens(&voice_accent);
    let requested_tokens = significant_tokens(&requested);
    let shared = voice_tokens.iter().any(|vt| {
        requested_tokens
            .iter()
            .any(|rt| vt == rt || vt.contains(rt.as_str()) || rt.contains(vt.as_str()))
    });
    if shared {
        return (10, true);
    }
    (0, false)
}

fn same_accent_region(a: &str, b: &str) -> bool {
    ACCENT_SYNONYM_GROUPS
        .iter()
        .any(|group| group.contains(&a) && group.contains(&b))
}

/// Up to 10: exact case-insensitive match only.
fn age_score(voice_age: Option<&str>, attrs: &ParsedAttributes) -> (u8, bool) {
    let (Some(voice_age), Some(requested)) = (voice_age, attrs.age_group) else {
        return (0, false);
    };
    if voice_age.trim().eq_ignore_ascii_case(requested.as_str()) {
        (10, true)
    } else {
        (0, false)
    }
}
