//! Catalog voice records and the per-call attribute index derived from them.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single voice record from the externally supplied catalog.
///
/// Every field may be absent; the matching engine tolerates any subset and
/// never mutates a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogVoice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Distinct attribute values present in a catalog.
///
/// Built fresh for each extraction call and discarded afterwards; never
/// cached. Membership checks are lower-cased and order-independent. The
/// accent list additionally keeps the first-seen original casing in source
/// order, so dynamic matches can surface the catalog's own display string
/// and multi-candidate ties resolve reproducibly.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    accents: Vec<String>,
    accent_set: HashSet<String>,
    genders: HashSet<String>,
    age_groups: HashSet<String>,
}

impl CatalogIndex {
    /// Collect the distinct accent, gender, and age-group values of a
    /// catalog. An empty catalog yields empty sets, which makes extraction
    /// fall back entirely to the static rule tables.
    #[must_use]
    pub fn build(catalog: &[CatalogVoice]) -> Self {
        let mut index = Self::default();
        for voice in catalog {
            if let Some(accent) = voice.accent.as_deref().filter(|a| !a.is_empty()) {
                if index.accent_set.insert(accent.to_lowercase()) {
                    index.accents.push(accent.to_string());
                }
            }
            if let Some(gender) = voice.gender.as_deref().filter(|g| !g.is_empty()) {
                index.genders.insert(gender.to_lowercase());
            }
            if let Some(age) = voice.age_group.as_deref().filter(|a| !a.is_empty()) {
                index.age_groups.insert(age.to_lowercase());
            }
        }
        index
    }

    /// Original-cased accent values in first-seen source order.
    #[must_use]
    pub fn accents(&self) -> &[String] {
        &self.accents
    }

    #[must_use]
    pub fn has_accents(&self) -> bool {
        !self.accents.is_empty()
    }

    #[must_use]
    pub fn has_genders(&self) -> bool {
        !self.genders.is_empty()
    }

    #[must_use]
    pub fn has_age_groups(&self) -> bool {
        !self.age_groups.is_empty()
    }

    /// Lower-cased membership check against the catalog's gender values.
    #[must_use]
    pub fn contains_gender(&self, value: &str) -> bool {
        self.genders.contains(&value.to_lowercase())
    }

    /// Lower-cased membership check against the catalog's age-group values.
    #[must_use]
    pub fn contains_age_group(&self, value: &str) -> bool {
        self.age_groups.contains(&value.to_lowercase())
    }

    /// Lower-cased membership check against the catalog's accent values.
    #[must_use]
    pub fn contains_accent(&self, value: &str) -> bool {
        self.accent_set.contains(&value.to_lowercase())
    }
}
