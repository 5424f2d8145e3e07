//! Attribute value objects produced by description parsing.

use serde::{Deserialize, Serialize};

/// Language of a voice, limited to the three languages the catalog carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    En,
    Es,
    Ar,
}

impl Language {
    /// Returns the two-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::En => "en",
            Self::Es => "es",
            Self::Ar => "ar",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            "ar" => Ok(Self::Ar),
            _ => Err(anyhow::anyhow!("unknown language: {s}")),
        }
    }
}

/// Gender of a voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Returns the canonical lowercase form used by catalog records.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(anyhow::anyhow!("unknown gender: {s}")),
        }
    }
}

/// Coarse age bracket of a voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AgeGroup {
    Young,
    MiddleAged,
    Older,
}

impl AgeGroup {
    /// Returns the canonical lowercase form used by catalog records.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Young => "young",
            Self::MiddleAged => "middle-aged",
            Self::Older => "older",
        }
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgeGroup {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "young" => Ok(Self::Young),
            "middle-aged" => Ok(Self::MiddleAged),
            "older" => Ok(Self::Older),
            _ => Err(anyhow::anyhow!("unknown age group: {s}")),
        }
    }
}

/// Structured attributes parsed out of a free-text voice description.
///
/// Every scalar field holds at most one value. `tags` is deduplicated and
/// represented as `None` when empty, never as an empty list, so downstream
/// equality checks stay simple.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,

    /// Display-cased accent label, e.g. "South African" or "Indian-American".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<AgeGroup>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Special marker tags, e.g. "lgbtq".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Character archetype, e.g. "pirate" or "detective". First match wins.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
}

impl ParsedAttributes {
    /// True when nothing was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.language.is_none()
            && self.accent.is_none()
            && self.age_group.is_none()
            && self.gender.is_none()
            && self.tags.is_none()
            && self.character.is_none()
    }

    /// Append a tag, preserving the no-duplicates and no-empty-list
    /// invariants.
    pub fn push_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if tag.is_empty() {
            return;
        }
        match &mut self.tags {
            Some(tags) => {
                if !tags.iter().any(|t| t == &tag) {
                    tags.push(tag);
                }
            }
            None => self.tags = Some(vec![tag]),
        }
    }

    /// True when the given tag is present.
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags
            .as_ref()
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn language_round_trip() {
        for lang in [Language::En, Language::Es, Language::Ar] {
            assert_eq!(
                Language::from_str(lang.as_str()).ok(),
                Some(lang),
                "round trip for {lang}"
            );
        }
        assert!(Language::from_str("fr").is_err());
    }

    #[test]
    fn age_group_uses_kebab_case() {
        assert_eq!(AgeGroup::MiddleAged.as_str(), "middle-aged");
        assert_eq!(
            AgeGroup::from_str("middle-aged").ok(),
            Some(AgeGroup::MiddleAged)
        );
    }

    #[test]
    fn push_tag_deduplicates() {
        let mut attrs = ParsedAttributes::default();
        attrs.push_tag("lgbtq");
        attrs.push_tag("lgbtq");
        assert_eq!(attrs.tags.as_deref(), Some(&["lgbtq".to_string()][..]));
    }

    #[test]
    fn empty_tags_stay_absent() {
        let attrs = ParsedAttributes::default();
        assert!(attrs.tags.is_none());
        assert!(attrs.is_empty());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn serialization_omits_empty_fields() {
        let attrs = ParsedAttributes {
            gender: Some(Gender::Female),
            ..Default::default()
        };
        let json = serde_json::to_string(&attrs).expect("attributes should serialize");
        assert_eq!(json, r#"{"gender":"female"}"#);
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn deserialization_fills_missing_fields() {
        let attrs: ParsedAttributes =
            serde_json::from_str(r#"{"accent":"British"}"#).expect("valid JSON should deserialize");
        assert_eq!(attrs.accent.as_deref(), Some("British"));
        assert!(attrs.gender.is_none());
        assert!(attrs.tags.is_none());
    }
}
