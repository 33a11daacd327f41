//! Room attribute classification.
//!
//! Bed-type selection is weighted scoring, not first-match: every category
//! owns a set of keyword phrases (+1 each) and word-boundary regex
//! patterns (+2 each); Queen additionally owns negation patterns ("two
//! queen", "double queen") that subtract 3, since those phrases describe
//! the two-bed room. The category with the strictly highest positive score
//! wins; ties and all-zero scores fall back to Queen.
//!
//! Scores live in per-call accumulators and are discarded after selection.
//! Nothing here survives between invocations.

use once_cell::sync::Lazy;
use regex::Regex;
use stayquote_types::BedType;
use tracing::debug;

use crate::phonetic::{confusion_lean, PhoneticLean};
use crate::types::{InvalidRoomType, RoomAttributes};

// ============================================================================
// WEIGHTS
// ============================================================================

const KEYWORD_WEIGHT: i32 = 1;
const PATTERN_WEIGHT: i32 = 2;
const QUEEN_NEGATION_WEIGHT: i32 = -3;
const CAPACITY_BONUS: i32 = 3;
const PHONETIC_BIAS: i32 = 2;
/// Amenity negations override every positive match outright.
const AMENITY_NEGATION_WEIGHT: i32 = -5;

// ============================================================================
// CATEGORY VOCABULARY
// ============================================================================

const QUEEN_KEYWORDS: &[&str] = &["queen bed", "queen room", "queen size"];
static QUEEN_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"\bqueens?\b"]));
/// "two queen" / "double queen" describe the two-bed room, not a Queen.
static QUEEN_NEGATIONS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"\b(?:two|2)\s+queens?\b", r"\bdouble\s+queens?\b"]));

const KING_KEYWORDS: &[&str] = &["king bed", "king room", "king size"];
static KING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"\bkings?\b"]));

const TWO_BED_KEYWORDS: &[&str] = &["two beds", "2 beds", "double room", "two queens"];
static TWO_BED_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\b(?:two|2)\s+(?:queen\s+)?beds?\b",
        r"\b(?:two|2)\s+queens?\b",
        r"\bdouble\s+queens?\b",
        r"\bdoubles?\b",
    ])
});
/// A capacity request for 3-4 occupants implies the two-bed room.
static CAPACITY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\b(?:three|four|3|4)\s+(?:people|persons|guests|adults)\b",
        r"\b(?:three|four|3|4)\s+of\s+us\b",
        r"\bfamily\s+of\s+(?:three|four|3|4)\b",
        r"\bsleeps?\s+(?:three|four|3|4)\b",
    ])
});

const SUITE_KEYWORDS: &[&str] = &["suite"];
static SUITE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"\bsuites?\b"]));
const PENTHOUSE_KEYWORDS: &[&str] = &["penthouse"];
static PENTHOUSE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| compile(&[r"\bpenthouses?\b"]));
const TWIN_KEYWORDS: &[&str] = &["twin beds", "twin room"];
static TWIN_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"\btwin\s+(?:beds?|room)\b", r"\btwins?\b"]));
const SINGLE_KEYWORDS: &[&str] = &["single bed"];
static SINGLE_PATTERNS: Lazy<Vec<Regex>> =
    Lazy::new(|| compile(&[r"\bsingle\s+(?:beds?|room)\b"]));

const AMENITY_KEYWORDS: &[&str] = &["jacuzzi", "hot tub", "whirlpool", "jet tub"];
static AMENITY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\bjacuzzis?\b",
        r"\bhot\s*tubs?\b",
        r"\bspas?\b",
        r"\bwhirlpools?\b",
        r"\bjet(?:ted)?\s+tubs?\b",
    ])
});
static AMENITY_NEGATIONS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"\b(?:no|without)\s+(?:a\s+|the\s+)?jacuzzis?\b",
        r"\b(?:no|without)\s+(?:a\s+|the\s+)?hot\s*tubs?\b",
        r"\b(?:no|without)\s+(?:a\s+|the\s+)?(?:spa|whirlpool)s?\b",
    ])
});

/// The documented invalid bed/amenity pairs. Only the two-bed room lacks a
/// jacuzzi-equipped variant.
const INVALID_COMBINATIONS: &[(BedType, bool)] = &[(BedType::QueenTwoBeds, true)];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("classifier pattern is valid"))
        .collect()
}

// ============================================================================
// SCORING
// ============================================================================

/// Candidate category during scoring. `Invalid` collects every room type
/// the system does not offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Category {
    Queen,
    King,
    QueenTwoBeds,
    Invalid,
}

/// Per-category accumulator. Built fresh per call, dropped after the
/// winner is selected.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ClassificationScore {
    pub(crate) category: Category,
    pub(crate) weight: i32,
}

fn keyword_score(phrase: &str, keywords: &[&str]) -> i32 {
    keywords.iter().filter(|kw| phrase.contains(*kw)).count() as i32 * KEYWORD_WEIGHT
}

fn pattern_score(phrase: &str, patterns: &[Regex]) -> i32 {
    patterns.iter().filter(|re| re.is_match(phrase)).count() as i32 * PATTERN_WEIGHT
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Scores a phrase against the category vocabulary to choose a bed type,
/// detect the premium amenity, and flag room types or bed/amenity pairs
/// the system does not offer.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoomAttributeClassifier;

impl RoomAttributeClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a lowercase phrase. Total: every input yields usable
    /// attributes, with diagnostics for anything that had to be
    /// substituted.
    pub fn classify(&self, phrase: &str) -> RoomAttributes {
        let scores = score_categories(phrase);
        debug!(?scores, "category scores");

        let mut bed_type = pick_bed(&scores);

        let invalid_room_type = detect_invalid_room_type(phrase, &scores);
        if let Some(fallback) = invalid_room_type.and_then(|t| t.fallback_bed()) {
            bed_type = fallback;
        }

        let mut has_amenity = detect_amenity(phrase);

        // Combination validation: amenity intent wins over bed-type intent,
        // so the bed type is substituted and the amenity kept.
        let mut invalid_combination = None;
        if INVALID_COMBINATIONS.contains(&(bed_type, has_amenity)) {
            invalid_combination = Some(format!("{} with jacuzzi", bed_type.label()));
            bed_type = BedType::Queen;
            has_amenity = true;
        }

        RoomAttributes {
            bed_type,
            has_amenity,
            invalid_room_type,
            invalid_combination,
        }
    }
}

/// Score all four categories, including the phonetic confusion bias.
pub(crate) fn score_categories(phrase: &str) -> Vec<ClassificationScore> {
    let mut queen = keyword_score(phrase, QUEEN_KEYWORDS) + pattern_score(phrase, &QUEEN_PATTERNS);
    queen += QUEEN_NEGATIONS.iter().filter(|re| re.is_match(phrase)).count() as i32
        * QUEEN_NEGATION_WEIGHT;

    let mut king = keyword_score(phrase, KING_KEYWORDS) + pattern_score(phrase, &KING_PATTERNS);

    let mut two_beds =
        keyword_score(phrase, TWO_BED_KEYWORDS) + pattern_score(phrase, &TWO_BED_PATTERNS);
    if CAPACITY_PATTERNS.iter().any(|re| re.is_match(phrase)) {
        two_beds += CAPACITY_BONUS;
    }

    match confusion_lean(phrase) {
        Some(PhoneticLean::King) => king += PHONETIC_BIAS,
        Some(PhoneticLean::Queen) => queen += PHONETIC_BIAS,
        None => {}
    }

    let invalid = invalid_label_scores(phrase)
        .iter()
        .map(|(_, w)| w)
        .sum::<i32>();

    vec![
        ClassificationScore {
            category: Category::Queen,
            weight: queen,
        },
        ClassificationScore {
            category: Category::King,
            weight: king,
        },
        ClassificationScore {
            category: Category::QueenTwoBeds,
            weight: two_beds,
        },
        ClassificationScore {
            category: Category::Invalid,
            weight: invalid,
        },
    ]
}

/// Strictly highest positive score among the offered bed types wins; ties
/// and all-zero scores default to Queen.
fn pick_bed(scores: &[ClassificationScore]) -> BedType {
    let offered: Vec<(BedType, i32)> = scores
        .iter()
        .filter_map(|s| match s.category {
            Category::Queen => Some((BedType::Queen, s.weight)),
            Category::King => Some((BedType::King, s.weight)),
            Category::QueenTwoBeds => Some((BedType::QueenTwoBeds, s.weight)),
            Category::Invalid => None,
        })
        .collect();

    let max = offered.iter().map(|(_, w)| *w).max().unwrap_or(0);
    if max <= 0 {
        return BedType::Queen;
    }
    let mut at_max = offered.iter().filter(|(_, w)| *w == max);
    let winner = at_max.next().map(|(b, _)| *b).unwrap_or(BedType::Queen);
    if at_max.next().is_some() {
        // Tied categories cannot be disambiguated.
        return BedType::Queen;
    }
    winner
}

fn invalid_label_scores(phrase: &str) -> [(InvalidRoomType, i32); 4] {
    [
        (
            InvalidRoomType::Suite,
            keyword_score(phrase, SUITE_KEYWORDS) + pattern_score(phrase, &SUITE_PATTERNS),
        ),
        (
            InvalidRoomType::Penthouse,
            keyword_score(phrase, PENTHOUSE_KEYWORDS)
                + pattern_score(phrase, &PENTHOUSE_PATTERNS),
        ),
        (
            InvalidRoomType::TwinBeds,
            keyword_score(phrase, TWIN_KEYWORDS) + pattern_score(phrase, &TWIN_PATTERNS),
        ),
        (
            InvalidRoomType::SingleBed,
            keyword_score(phrase, SINGLE_KEYWORDS) + pattern_score(phrase, &SINGLE_PATTERNS),
        ),
    ]
}

/// Report the first invalid label (in priority order) once the Invalid
/// category as a whole scored positive.
fn detect_invalid_room_type(
    phrase: &str,
    scores: &[ClassificationScore],
) -> Option<InvalidRoomType> {
    let invalid_total = scores
        .iter()
        .find(|s| s.category == Category::Invalid)
        .map(|s| s.weight)
        .unwrap_or(0);
    if invalid_total <= 0 {
        return None;
    }
    invalid_label_scores(phrase)
        .iter()
        .find(|(_, w)| *w > 0)
        .map(|(t, _)| *t)
}

/// Amenity detection: keyword/pattern scoring over the jacuzzi synonyms.
/// Any negation phrase forces the weight to a fixed negative value,
/// overriding every positive match.
fn detect_amenity(phrase: &str) -> bool {
    let weight = if AMENITY_NEGATIONS.iter().any(|re| re.is_match(phrase)) {
        AMENITY_NEGATION_WEIGHT
    } else {
        keyword_score(phrase, AMENITY_KEYWORDS) + pattern_score(phrase, &AMENITY_PATTERNS)
    };
    weight > 0
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(phrase: &str) -> RoomAttributes {
        RoomAttributeClassifier::new().classify(phrase)
    }

    #[test]
    fn test_plain_king_request() {
        let attrs = classify("i would like a king room");
        assert_eq!(attrs.bed_type, BedType::King);
        assert!(!attrs.has_amenity);
        assert!(attrs.invalid_room_type.is_none());
        assert!(attrs.invalid_combination.is_none());
    }

    #[test]
    fn test_plain_queen_request() {
        let attrs = classify("queen bed for one night");
        assert_eq!(attrs.bed_type, BedType::Queen);
    }

    #[test]
    fn test_empty_scores_default_to_queen() {
        let attrs = classify("somewhere to sleep please");
        assert_eq!(attrs.bed_type, BedType::Queen);
        assert!(!attrs.has_amenity);
    }

    #[test]
    fn test_two_queens_is_the_double_room_not_queen() {
        // Queen scores its pattern but the negation pulls it below the
        // two-bed category.
        let attrs = classify("a room with two queen beds");
        assert_eq!(attrs.bed_type, BedType::QueenTwoBeds);
    }

    #[test]
    fn test_double_queen_negation() {
        let attrs = classify("double queen room");
        assert_eq!(attrs.bed_type, BedType::QueenTwoBeds);
    }

    #[test]
    fn test_capacity_request_biases_two_beds() {
        let attrs = classify("a room for four people");
        assert_eq!(attrs.bed_type, BedType::QueenTwoBeds);
    }

    #[test]
    fn test_phonetic_confusion_resolves_keen_to_king() {
        let attrs = classify("a keen bed please");
        assert_eq!(attrs.bed_type, BedType::King);
    }

    #[test]
    fn test_phonetic_confusion_resolves_clean_to_queen() {
        let attrs = classify("one clean bed");
        assert_eq!(attrs.bed_type, BedType::Queen);
    }

    #[test]
    fn test_amenity_synonyms() {
        for phrase in ["king with a hot tub", "king room with jacuzzi", "king and a whirlpool"] {
            let attrs = classify(phrase);
            assert!(attrs.has_amenity, "phrase: {}", phrase);
        }
    }

    #[test]
    fn test_amenity_negation_overrides_positive_matches() {
        let attrs = classify("a king room without a jacuzzi");
        assert!(!attrs.has_amenity);
        let attrs = classify("queen room no hot tub");
        assert!(!attrs.has_amenity);
    }

    #[test]
    fn test_suite_reported_invalid() {
        let attrs = classify("a suite please");
        assert_eq!(attrs.invalid_room_type, Some(InvalidRoomType::Suite));
        // No twin/single fallback; the scored winner (default Queen) stays.
        assert_eq!(attrs.bed_type, BedType::Queen);
    }

    #[test]
    fn test_suite_priority_over_single_bed() {
        let attrs = classify("a suite with a single bed");
        assert_eq!(attrs.invalid_room_type, Some(InvalidRoomType::Suite));
    }

    #[test]
    fn test_twin_request_falls_back_to_two_beds() {
        let attrs = classify("twin beds for the kids");
        assert_eq!(attrs.invalid_room_type, Some(InvalidRoomType::TwinBeds));
        assert_eq!(attrs.bed_type, BedType::QueenTwoBeds);
    }

    #[test]
    fn test_single_bed_falls_back_to_two_beds() {
        let attrs = classify("just a single bed");
        assert_eq!(attrs.invalid_room_type, Some(InvalidRoomType::SingleBed));
        assert_eq!(attrs.bed_type, BedType::QueenTwoBeds);
    }

    #[test]
    fn test_invalid_combination_substitutes_queen_and_keeps_amenity() {
        let attrs = classify("two queen beds with a jacuzzi");
        assert!(attrs.invalid_combination.is_some());
        assert_eq!(attrs.bed_type, BedType::Queen);
        assert!(attrs.has_amenity);
    }

    #[test]
    fn test_valid_combinations_carry_no_diagnostic() {
        for phrase in ["king with jacuzzi", "queen with hot tub", "two queen beds"] {
            let attrs = classify(phrase);
            assert!(attrs.invalid_combination.is_none(), "phrase: {}", phrase);
        }
    }

    #[test]
    fn test_scoring_is_stateless_across_calls() {
        let classifier = RoomAttributeClassifier::new();
        let first = classifier.classify("king room with a hot tub");
        let _other = classifier.classify("two queen beds for four people");
        let again = classifier.classify("king room with a hot tub");
        assert_eq!(first, again);
    }
}
