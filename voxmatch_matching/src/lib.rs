#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation
)]

//! Attribute extraction and catalog matching for voice descriptions.
//!
//! The engine is pure, synchronous string processing: a description goes
//! through the personality filter and the attribute extractor, and the
//! resulting attributes are scored against catalog voice records. No state
//! survives between calls.

pub mod dynamic;
pub mod extractor;
pub mod filter;
pub mod scoring;
pub mod search;
pub mod vocabulary;

pub use extractor::extract;
pub use filter::strip_personality;
pub use scoring::score_voice;
pub use search::{RankingOptions, VoiceMatch, rank_catalog};
