//! End-to-end extraction scenarios across the personality filter, the
//! catalog-driven dynamic matcher, and the static fallback tables.

use voxmatch_core::{AgeGroup, CatalogVoice, Gender, Language};
use voxmatch_matching::extract;

fn catalog() -> Vec<CatalogVoice> {
    let rows = [
        ("Amelia", "female", "British", "young", "en"),
        ("Raj", "male", "Indian-American", "middle-aged", "en"),
        ("Thandi", "female", "South African", "young", "en"),
        ("Sofia", "female", "Latin American", "young", "es"),
        ("Omar", "male", "Middle Eastern", "older", "ar"),
    ];
    rows.iter()
        .map(|(name, gender, accent, age, language)| CatalogVoice {
            name: Some((*name).to_string()),
            gender: Some((*gender).to_string()),
            accent: Some((*accent).to_string()),
            age_group: Some((*age).to_string()),
            language: Some((*language).to_string()),
            id: None,
        })
        .collect()
}

#[test]
fn full_description_against_catalog() {
    let catalog = catalog();
    let attrs = extract("young British male with a confident tone", Some(&catalog));

    assert_eq!(attrs.accent.as_deref(), Some("British"));
    assert_eq!(attrs.gender, Some(Gender::Male));
    assert_eq!(attrs.age_group, Some(AgeGroup::Young));
    assert_eq!(attrs.language, None);
}

#[test]
fn dynamic_and_static_fallback_agree_on_british() {
    let catalog = catalog();
    let with_catalog = extract("british accent", Some(&catalog));
    let without_catalog = extract("british accent", None);

    // The dynamic matcher surfaces the catalog's own casing; the static
    // table resolves to the same label.
    assert_eq!(with_catalog.accent.as_deref(), Some("British"));
    assert_eq!(without_catalog.accent.as_deref(), Some("British"));
}

#[test]
fn south_african_is_preserved_against_catalog() {
    let catalog = catalog();
    let attrs = extract("a South African storyteller", Some(&catalog));
    assert_eq!(attrs.accent.as_deref(), Some("South African"));
}

#[test]
fn compound_catalog_accent_matches_bare_country_word() {
    let catalog = catalog();
    let attrs = extract("an indian narrator", Some(&catalog));
    assert_eq!(attrs.accent.as_deref(), Some("Indian-American"));
}

#[test]
fn latina_picks_the_catalog_latin_american_voice_attributes() {
    let catalog = catalog();
    let attrs = extract("latina with a confident tone", Some(&catalog));

    assert_eq!(attrs.accent.as_deref(), Some("Latin American"));
    assert_eq!(attrs.gender, Some(Gender::Female));
}

#[test]
fn spanish_description_sets_language_and_accent() {
    let attrs = extract("a spanish speaking grandma", None);

    assert_eq!(attrs.language, Some(Language::Es));
    assert_eq!(attrs.accent.as_deref(), Some("Spanish"));
    assert_eq!(attrs.gender, Some(Gender::Female));
    assert_eq!(attrs.age_group, Some(AgeGroup::Older));
}

#[test]
fn character_and_tags_are_independent_of_other_fields() {
    let attrs = extract("a gay pirate with a deep voice", None);

    assert_eq!(attrs.character.as_deref(), Some("pirate"));
    assert!(attrs.has_tag("lgbtq"));
    assert_eq!(attrs.accent, None, "deep voice is timbre, not an accent");
}

#[test]
fn repeated_calls_are_bit_identical() {
    let catalog = catalog();
    let description = "friendly young latina detective in her 20s";
    let first = extract(description, Some(&catalog));
    for _ in 0..3 {
        assert_eq!(extract(description, Some(&catalog)), first);
    }
}
