//! Static vocabularies used when no catalog is available to drive matching.
//!
//! Every table here is plain constant data evaluated top to bottom. Ordering
//! encodes disambiguation intent (specific before general), so entries must
//! not be reordered for convenience.

use voxmatch_core::{AgeGroup, Gender, Language};

/// Words that describe delivery or personality rather than physical voice
/// traits. Stripped before any attribute matching so they cannot pollute it.
///
/// Removal is unconditional: "energetic", "calm", and "warm" are dropped
/// even when a description uses them for voice tone.
pub const PERSONALITY_WORDS: &[&str] = &[
    "friendly",
    "aggressive",
    "bubbly",
    "calm",
    "warm",
    "energetic",
    "cheerful",
    "upbeat",
    "confident",
    "shy",
    "sassy",
    "serious",
    "playful",
    "gentle",
    "bold",
    "relaxed",
    "enthusiastic",
    "soothing",
    "happy",
    "sad",
    "angry",
    "grumpy",
    "nervous",
    "excited",
    "mellow",
    "perky",
    "laid-back",
    "chill",
    "stern",
    "quirky",
];

/// Language keywords in priority order: Spanish, then Arabic, then English.
/// First containment match wins.
pub const LANGUAGE_KEYWORDS: &[(&str, Language)] = &[
    ("spanish", Language::Es),
    ("español", Language::Es),
    ("espanol", Language::Es),
    ("arabic", Language::Ar),
    ("english", Language::En),
];

/// A gender-indicating keyword and the canonical gender it maps to.
#[derive(Debug, Clone, Copy)]
pub struct GenderKeyword {
    pub word: &'static str,
    pub gender: Gender,
    /// "girl"/"boy" imply youth more specifically than other gender words.
    pub implies_young: bool,
}

const fn gender_word(word: &'static str, gender: Gender) -> GenderKeyword {
    GenderKeyword {
        word,
        gender,
        implies_young: false,
    }
}

const fn young_gender_word(word: &'static str, gender: Gender) -> GenderKeyword {
    GenderKeyword {
        word,
        gender,
        implies_young: true,
    }
}

/// Gender keywords, matched on whole word tokens only — "female" must never
/// be hit by the "male" keyword. Female entries come first.
pub const GENDER_KEYWORDS: &[GenderKeyword] = &[
    gender_word("female", Gender::Female),
    gender_word("woman", Gender::Female),
    gender_word("women", Gender::Female),
    young_gender_word("girl", Gender::Female),
    young_gender_word("girls", Gender::Female),
    gender_word("lady", Gender::Female),
    gender_word("ladies", Gender::Female),
    gender_word("feminine", Gender::Female),
    gender_word("gal", Gender::Female),
    gender_word("grandma", Gender::Female),
    gender_word("grandmother", Gender::Female),
    gender_word("granny", Gender::Female),
    gender_word("male", Gender::Male),
    gender_word("man", Gender::Male),
    gender_word("men", Gender::Male),
    young_gender_word("boy", Gender::Male),
    young_gender_word("boys", Gender::Male),
    gender_word("guy", Gender::Male),
    gender_word("guys", Gender::Male),
    gender_word("gentleman", Gender::Male),
    gender_word("masculine", Gender::Male),
    gender_word("dude", Gender::Male),
    gender_word("grandpa", Gender::Male),
    gender_word("grandfather", Gender::Male),
];

/// Generational terms, checked before the decade/descriptive terms.
pub const GENERATION_TERMS: &[(&str, AgeGroup)] = &[
    ("gen z", AgeGroup::Young),
    ("gen-z", AgeGroup::Young),
    ("genz", AgeGroup::Young),
    ("zoomer", AgeGroup::Young),
    ("millennial", AgeGroup::MiddleAged),
    ("gen y", AgeGroup::MiddleAged),
    ("gen x", AgeGroup::MiddleAged),
    ("boomer", AgeGroup::Older),
];

/// Decade and descriptive age terms. Young entries are listed first, older
/// entries last; first match wins.
pub const AGE_TERMS: &[(&str, AgeGroup)] = &[
    ("20s", AgeGroup::Young),
    ("twenties", AgeGroup::Young),
    ("teen", AgeGroup::Young),
    ("college", AgeGroup::Young),
    ("young", AgeGroup::Young),
    ("youthful", AgeGroup::Young),
    ("kid", AgeGroup::Young),
    ("child", AgeGroup::Young),
    ("30s", AgeGroup::MiddleAged),
    ("40s", AgeGroup::MiddleAged),
    ("thirties", AgeGroup::MiddleAged),
    ("forties", AgeGroup::MiddleAged),
    ("middle", AgeGroup::MiddleAged),
    ("50s", AgeGroup::Older),
    ("60s", AgeGroup::Older),
    ("70s", AgeGroup::Older),
    ("80s", AgeGroup::Older),
    ("fifties", AgeGroup::Older),
    ("sixties", AgeGroup::Older),
    ("seventies", AgeGroup::Older),
    ("elder", AgeGroup::Older),
    ("senior", AgeGroup::Older),
    ("old", AgeGroup::Older),
    ("grandpa", AgeGroup::Older),
    ("grandma", AgeGroup::Older),
    ("grandfather", AgeGroup::Older),
    ("grandmother", AgeGroup::Older),
];

/// Vocabulary mapped to the single neutral tag used for downstream
/// filtering. Matched terms are never surfaced verbatim.
pub const LGBTQ_TAG: &str = "lgbtq";

/// Matched on whole word tokens; spaced entries match as phrases.
pub const LGBTQ_TERMS: &[&str] = &[
    "lgbt",
    "lgbtq",
    "lgbtq+",
    "gay",
    "lesbian",
    "queer",
    "trans",
    "transgender",
    "nonbinary",
    "non-binary",
    "non binary",
    "genderqueer",
    "genderfluid",
    "bisexual",
    "drag",
];

/// Character archetypes. The first archetype appearing in description word
/// order wins; at most one is recorded.
pub const CHARACTER_ARCHETYPES: &[&str] = &[
    "pirate",
    "detective",
    "wizard",
    "witch",
    "vampire",
    "robot",
    "alien",
    "cowboy",
    "cowgirl",
    "knight",
    "ninja",
    "superhero",
    "villain",
    "coach",
    "announcer",
    "narrator",
    "newscaster",
    "santa",
    "elf",
    "zombie",
    "ghost",
    "princess",
    "soldier",
    "scientist",
    "professor",
    "butler",
    "surfer",
];

/// One row of the static accent fallback table.
#[derive(Debug, Clone, Copy)]
pub struct AccentPattern {
    /// Lower-cased phrases checked by containment against the description.
    pub patterns: &'static [&'static str],
    /// Display-cased accent label recorded on a match.
    pub label: &'static str,
}

const fn accent(patterns: &'static [&'static str], label: &'static str) -> AccentPattern {
    AccentPattern { patterns, label }
}

/// The static accent table, evaluated top to bottom. Ordering resolves
/// ambiguity between overlapping phrases and must be preserved.
pub const ACCENT_PATTERNS: &[AccentPattern] = &[
    // Compound nationality+ethnicity accents before any generic pattern,
    // otherwise "indian-american" would stop at "Indian" or "American".
    accent(&["indian-american", "indian american"], "Indian-American"),
    accent(&["mexican-american", "mexican american"], "Mexican-American"),
    accent(&["african-american", "african american"], "African-American"),
    accent(&["asian-american", "asian american"], "Asian-American"),
    // Country-level African accents before the standalone "south"/"southern"
    // pattern: "South African" must never degrade to "Southern".
    accent(&["south african"], "South African"),
    accent(&["nigerian"], "Nigerian"),
    accent(&["kenyan"], "Kenyan"),
    accent(&["egyptian"], "Egyptian"),
    // South-Asian countries before the generic "indian" pattern.
    accent(&["pakistani"], "Pakistani"),
    accent(&["bangladeshi"], "Bangladeshi"),
    accent(&["sri lankan"], "Sri Lankan"),
    accent(&["indian"], "Indian"),
    // East-Asian countries before the umbrella "asian" pattern.
    accent(&["japanese"], "Japanese"),
    accent(&["chinese"], "Chinese"),
    accent(&["korean"], "Korean"),
    accent(&["vietnamese"], "Vietnamese"),
    accent(&["filipino"], "Filipino"),
    // British Isles.
    accent(&["cockney"], "Cockney"),
    accent(&["british"], "British"),
    accent(&["scottish"], "Scottish"),
    accent(&["irish"], "Irish"),
    accent(&["welsh"], "Welsh"),
    accent(&["australian", "aussie"], "Australian"),
    accent(&["new zealand", "kiwi"], "New Zealand"),
    // Latin America. "latin american" before the bare "latin"/"hispanic"
    // forms; "mexican" is safe here because Mexican-American matched above.
    accent(&["latin american", "latin-american"], "Latin American"),
    accent(&["mexican"], "Mexican"),
    accent(&["colombian"], "Colombian"),
    accent(&["argentinian", "argentine"], "Argentinian"),
    accent(&["brazilian"], "Brazilian"),
    accent(&["hispanic", "latin"], "Latin American"),
    accent(&["spanish"], "Spanish"),
    // Europe.
    accent(&["french"], "French"),
    accent(&["german"], "German"),
    accent(&["italian"], "Italian"),
    accent(&["russian"], "Russian"),
    accent(&["polish"], "Polish"),
    accent(&["greek"], "Greek"),
    accent(&["swedish"], "Swedish"),
    accent(&["dutch"], "Dutch"),
    // Middle East.
    accent(&["middle eastern", "middle-eastern"], "Middle Eastern"),
    accent(&["arabic", "arab"], "Middle Eastern"),
    accent(&["turkish"], "Turkish"),
    accent(&["israeli"], "Israeli"),
    // North American regionals before the generic "american" pattern.
    accent(&["new york", "brooklyn"], "New York"),
    accent(&["boston"], "Boston"),
    accent(&["midwestern", "midwest"], "Midwestern"),
    accent(&["californian", "california", "valley girl"], "Californian"),
    accent(&["texan", "texas"], "Texan"),
    accent(&["canadian"], "Canadian"),
    accent(&["jamaican"], "Jamaican"),
    accent(&["caribbean"], "Caribbean"),
    accent(&["american"], "American"),
    // Umbrella continent patterns only after every specific country above.
    accent(&["asian"], "Asian"),
    accent(&["african"], "African"),
    // "deep south" before the standalone southern pattern, which would
    // otherwise swallow it. Labels containing "deep" are skipped entirely
    // when the description said "deep voice"/"deep accent".
    accent(&["deep south"], "Deep Southern"),
    accent(&["southern", "south"], "Southern"),
    accent(&["deep"], "Deep"),
];
