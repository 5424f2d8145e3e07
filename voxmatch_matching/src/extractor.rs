//! Attribute extractor: turns a free-text voice description into
//! [`ParsedAttributes`].
//!
//! Processing order is fixed and load-bearing: personality filter, language,
//! gender, age group, tags, character, accent. When a catalog is supplied,
//! gender/age/accent matching is driven by the values that actually exist in
//! it; the static vocabulary tables are the fallback.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use voxmatch_core::{AgeGroup, CatalogIndex, CatalogVoice, Gender, ParsedAttributes};

use crate::dynamic;
use crate::filter::strip_personality;
use crate::vocabulary::{
    ACCENT_PATTERNS, AGE_TERMS, CHARACTER_ARCHETYPES, GENDER_KEYWORDS, GENERATION_TERMS,
    LANGUAGE_KEYWORDS, LGBTQ_TAG, LGBTQ_TERMS,
};

/// Multi-word accent phrase shapes, tried in declared order once single-word
/// dynamic matching has failed: "X accent", "X voice", "with/has X accent".
const ACCENT_PHRASE_PATTERNS: &[&str] = &[
    r"([a-z][a-z-]*(?:\s+[a-z][a-z-]*)?)\s+accent",
    r"([a-z][a-z-]*(?:\s+[a-z][a-z-]*)?)\s+voice",
    r"(?:with|has)\s+(?:an?\s+)?([a-z][a-z-]*(?:\s+[a-z][a-z-]*){0,2})\s+accent",
];

static ACCENT_PHRASE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ACCENT_PHRASE_PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

/// Last-resort capture of the phrase between "with"/"has" and "accent".
static FREE_ACCENT_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?:with|has)\s+(?:an?\s+)?([a-z][a-z -]+?)\s+accent").ok());

/// Extract structured attributes from a voice description.
///
/// A blank description yields an all-empty [`ParsedAttributes`]; there are
/// no error paths, every edge case degrades to a valid value. For a fixed
/// description and catalog the output is identical on every call.
#[must_use]
pub fn extract(description: &str, catalog: Option<&[CatalogVoice]>) -> ParsedAttributes {
    let mut attrs = ParsedAttributes::default();
    if description.trim().is_empty() {
        return attrs;
    }

    // All matching operates on the lower-cased, personality-stripped text.
    let text = strip_personality(description).to_lowercase();
    let tokens = tokenize(&text);
    let index = catalog.map(CatalogIndex::build);

    extract_language(&text, &mut attrs);
    extract_gender(&tokens, index.as_ref(), &mut attrs);
    extract_age_group(&text, &tokens, index.as_ref(), &mut attrs);
    extract_tags(&text, &tokens, &mut attrs);
    extract_character(&tokens, &mut attrs);
    extract_accent(&text, &tokens, index.as_ref(), &mut attrs);

    debug!(?attrs, "extracted attributes");
    attrs
}

/// Split into lower-cased word tokens with surrounding punctuation removed;
/// inner hyphens survive ("middle-aged" stays one token).
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .filter(|token| !token.is_empty())
        .collect()
}

/// Language detection by keyword containment, Spanish → Arabic → English.
fn extract_language(text: &str, attrs: &mut ParsedAttributes) {
    for (keyword, language) in LANGUAGE_KEYWORDS {
        if text.contains(keyword) {
            attrs.language = Some(*language);
            return;
        }
    }
}

/// Gender detection on whole word tokens. With a catalog whose gender set is
/// non-empty, a keyword is accepted only when its canonical gender exists in
/// the catalog. "girl"/"boy" additionally imply a young age group.
fn extract_gender(tokens: &[String], index: Option<&CatalogIndex>, attrs: &mut ParsedAttributes) {
    for keyword in GENDER_KEYWORDS {
        if !tokens.iter().any(|t| t == keyword.word) {
            continue;
        }
        if let Some(index) = index.filter(|i| i.has_genders()) {
            if !index.contains_gender(keyword.gender.as_str()) {
                continue;
            }
        }
        attrs.gender = Some(keyword.gender);
        if keyword.implies_young && attrs.age_group.is_none() {
            attrs.age_group = Some(AgeGroup::Young);
        }
        return;
    }
}

/// Generational terms first, then decade/descriptive terms. Skipped when the
/// gender pass already inferred an age group.
fn extract_age_group(
    text: &str,
    tokens: &[String],
    index: Option<&CatalogIndex>,
    attrs: &mut ParsedAttributes,
) {
    if attrs.age_group.is_some() {
        return;
    }

    let accepted = |age: AgeGroup| {
        index
            .filter(|i| i.has_age_groups())
            .is_none_or(|i| i.contains_age_group(age.as_str()))
    };

    for (term, age) in GENERATION_TERMS.iter().chain(AGE_TERMS) {
        if age_term_matches(text, tokens, term) && accepted(*age) {
            attrs.age_group = Some(*age);
            return;
        }
    }
}

/// Phrases and decade forms match by containment; plain words match whole
/// tokens by prefix so "teen" also covers "teenager" and "old" covers
/// "older" without hitting the middle of unrelated words.
fn age_term_matches(text: &str, tokens: &[String], term: &str) -> bool {
    if term.contains(' ') || term.chars().any(|c| c.is_ascii_digit()) {
        text.contains(term)
    } else {
        tokens.iter().any(|t| t.starts_with(term))
    }
}

/// Scan for LGBTQ vocabulary and record the single neutral tag. Matched
/// terms are never surfaced verbatim.
fn extract_tags(text: &str, tokens: &[String], attrs: &mut ParsedAttributes) {
    let found = LGBTQ_TERMS.iter().any(|term| {
        if term.contains(' ') {
            text.contains(term)
        } else {
            tokens.iter().any(|t| t == term)
        }
    });
    if found {
        attrs.push_tag(LGBTQ_TAG);
    }
}

/// First archetype in description word order wins; at most one is recorded.
fn extract_character(tokens: &[String], attrs: &mut ParsedAttributes) {
    for token in tokens {
        if CHARACTER_ARCHETYPES.contains(&token.as_str()) {
            attrs.character = Some(token.clone());
            return;
        }
    }
}

/// Words never fed to accent matching: timbre and already-handled special
/// cases, the structural words of accent phrases, and gender keywords (which
/// would otherwise substring-match accents — "man" sits inside "german").
fn is_accent_stopword(word: &str) -> bool {
    matches!(word, "deep" | "latino" | "latina" | "accent" | "voice")
        || GENDER_KEYWORDS.iter().any(|k| k.word == word)
}

/// Accent extraction with explicit precedence: latina/latino special case,
/// dynamic catalog matching (single words, then phrases), the static
/// pattern table, and a last-resort free-text capture.
fn extract_accent(
    text: &str,
    tokens: &[String],
    index: Option<&CatalogIndex>,
    attrs: &mut ParsedAttributes,
) {
    // "deep" describes timbre, not origin. Remember the phrasing so no
    // later stage can mistake it for an accent name.
    let deep_timbre = text.contains("deep voice") || text.contains("deep accent");

    // "latina"/"latino" imply both an accent and a gender, and override a
    // gender picked up earlier from a generic keyword.
    let latina = tokens.iter().any(|t| t == "latina");
    let latino = tokens.iter().any(|t| t == "latino");
    if latina || latino {
        attrs.gender = Some(if latina { Gender::Female } else { Gender::Male });
        attrs.accent = Some(latin_american_label(index));
        debug!(accent = ?attrs.accent, gender = ?attrs.gender, "latina/latino special case");
        return;
    }

    // Dynamic matching against the catalog's own accent values.
    if let Some(index) = index.filter(|i| i.has_accents()) {
        for word in tokens
            .iter()
            .filter(|w| w.len() > 2 && !is_accent_stopword(w))
        {
            if let Some(matched) = dynamic::match_term(word, index.accents()) {
                debug!(%word, %matched, "dynamic accent match");
                attrs.accent = Some(matched);
                return;
            }
        }
        for phrase in accent_phrases(text) {
            if let Some(matched) = dynamic::match_term(&phrase, index.accents()) {
                debug!(%phrase, %matched, "dynamic accent phrase match");
                attrs.accent = Some(matched);
                return;
            }
        }
    }

    // Static fallback table, in declared precedence order.
    for entry in ACCENT_PATTERNS {
        if deep_timbre && entry.label.to_lowercase().contains("deep") {
            continue;
        }
        if entry.patterns.iter().any(|p| text.contains(p)) {
            attrs.accent = Some(entry.label.to_string());
            return;
        }
    }

    // Last resort: free-text capture of "with/has <phrase> accent".
    if let Some(re) = FREE_ACCENT_RE.as_ref() {
        if let Some(caps) = re.captures(text) {
            if let Some(phrase) = caps.get(1) {
                let label = phrase
                    .as_str()
                    .split_whitespace()
                    .filter(|word| *word != "deep")
                    .map(capitalize)
                    .collect::<Vec<_>>()
                    .join(" ");
                if !label.is_empty() {
                    attrs.accent = Some(label);
                }
            }
        }
    }
}

/// The display label for the latina/latino accent: the catalog's own Latin
/// American value when present, its Spanish value as the next best thing,
/// and the literal "Latin American" otherwise.
fn latin_american_label(index: Option<&CatalogIndex>) -> String {
    if let Some(index) = index.filter(|i| i.has_accents()) {
        if let Some(matched) = dynamic::match_term("latin american", index.accents()) {
            return matched;
        }
        if let Some(matched) = dynamic::match_term("spanish", index.accents()) {
            return matched;
        }
    }
    "Latin American".to_string()
}

/// Candidate multi-word phrases around "accent"/"voice", minus phrases made
/// entirely of stopwords.
fn accent_phrases(text: &str) -> Vec<String> {
    let mut phrases = Vec::new();
    for re in ACCENT_PHRASE_RES.iter() {
        for caps in re.captures_iter(text) {
            if let Some(phrase) = caps.get(1) {
                let phrase = phrase.as_str().trim();
                if phrase.is_empty()
                    || phrase.split_whitespace().all(is_accent_stopword)
                    || phrases.iter().any(|p| p == phrase)
                {
                    continue;
                }
                phrases.push(phrase.to_string());
            }
        }
    }
    phrases
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
