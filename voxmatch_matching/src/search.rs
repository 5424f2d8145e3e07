//! Ranking layer: scores a whole catalog against parsed attributes and
//! keeps the matches worth presenting.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use voxmatch_core::{CatalogVoice, ParsedAttributes};

use crate::scoring::score_voice;

/// A catalog voice together with its match score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoiceMatch {
    pub voice: CatalogVoice,
    pub score: u8,
}

/// Knobs of the ranking layer. The good-match threshold is an empirically
/// chosen constant calibrated outside the engine, so it stays overridable
/// here rather than hardcoded in scoring.
#[derive(Debug, Clone, Copy)]
pub struct RankingOptions {
    /// Only scores strictly above this value are considered a good match.
    pub good_match_threshold: u8,
    /// Maximum number of matches returned.
    pub max_results: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            good_match_threshold: 20,
            max_results: 5,
        }
    }
}

/// Rank a catalog against parsed attributes: score every record, keep
/// scores above the threshold, sort descending. Ties keep their catalog
/// source order, so results are reproducible for a fixed input.
#[must_use]
pub fn rank_catalog(
    catalog: &[CatalogVoice],
    attrs: &ParsedAttributes,
    options: &RankingOptions,
) -> Vec<VoiceMatch> {
    let mut scored: Vec<(usize, u8)> = catalog
        .par_iter()
        .enumerate()
        .map(|(position, voice)| (position, score_voice(voice, attrs)))
        .collect();

    scored.sort_by_key(|&(position, score)| (std::cmp::Reverse(score), position));

    let matches: Vec<VoiceMatch> = scored
        .into_iter()
        .filter(|&(_, score)| score > options.good_match_threshold)
        .take(options.max_results)
        .map(|(position, score)| VoiceMatch {
            voice: catalog[position].clone(),
            score,
        })
        .collect();

    debug!(
        catalog_size = catalog.len(),
        kept = matches.len(),
        threshold = options.good_match_threshold,
        "ranked catalog"
    );
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxmatch_core::{AgeGroup, Gender};

    fn voice(name: &str, gender: &str, accent: &str, age_group: &str) -> CatalogVoice {
        CatalogVoice {
            name: Some(name.to_string()),
            gender: Some(gender.to_string()),
            accent: Some(accent.to_string()),
            age_group: Some(age_group.to_string()),
            ..Default::default()
        }
    }

    fn requested() -> ParsedAttributes {
        ParsedAttributes {
            gender: Some(Gender::Female),
            accent: Some("British".to_string()),
            age_group: Some(AgeGroup::Young),
            ..Default::default()
        }
    }

    #[test]
    fn ranks_best_match_first() {
        let catalog = vec![
            voice("partial", "female", "American", "older"),
            voice("full", "female", "British", "young"),
        ];
        let matches = rank_catalog(&catalog, &requested(), &RankingOptions::default());

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].voice.name.as_deref(), Some("full"));
        assert_eq!(matches[0].score, 70);
        assert!(matches[0].score > matches[1].score);
    }

    #[test]
    fn threshold_is_strict() {
        let catalog = vec![voice("weak", "male", "Texan", "older")];
        let options = RankingOptions {
            good_match_threshold: 20,
            max_results: 5,
        };
        // Every term scores zero against this record; nothing clears the
        // threshold, not even at zero, because the cut is strict.
        assert!(rank_catalog(&catalog, &requested(), &options).is_empty());

        let options = RankingOptions {
            good_match_threshold: 0,
            max_results: 5,
        };
        assert!(rank_catalog(&catalog, &requested(), &options).is_empty());
    }

    #[test]
    fn ties_keep_source_order() {
        let catalog = vec![
            voice("first", "female", "British", "older"),
            voice("second", "female", "British", "older"),
        ];
        let matches = rank_catalog(&catalog, &requested(), &RankingOptions::default());

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].voice.name.as_deref(), Some("first"));
        assert_eq!(matches[1].voice.name.as_deref(), Some("second"));
        assert_eq!(matches[0].score, matches[1].score);
    }

    #[test]
    fn respects_max_results() {
        let catalog: Vec<CatalogVoice> = (0..10)
            .map(|i| voice(&format!("v{i}"), "female", "British", "young"))
            .collect();
        let options = RankingOptions {
            good_match_threshold: 20,
            max_results: 3,
        };
        assert_eq!(rank_catalog(&catalog, &requested(), &options).len(), 3);
    }

    #[test]
    fn empty_catalog_yields_no_matches() {
        let matches = rank_catalog(&[], &requested(), &RankingOptions::default());
        assert!(matches.is_empty());
    }
}
