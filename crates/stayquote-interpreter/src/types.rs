//! Result and configuration types for transcript analysis.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use stayquote_types::BedType;
use thiserror::Error;

/// Outcome of date expression resolution: a concrete check-in/check-out
/// pair plus the night count, and the literal phrase that drove it (absent
/// when the default rule applied).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStay {
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub nights: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_phrase: Option<String>,
}

/// Outcome of room attribute classification.
///
/// `invalid_room_type` and `invalid_combination` are guidance, not errors:
/// the `bed_type`/`has_amenity` carried here are already the best-effort
/// substitution and can be priced as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomAttributes {
    pub bed_type: BedType,
    pub has_amenity: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_room_type: Option<InvalidRoomType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_combination: Option<String>,
}

/// Room types callers ask for that the system does not offer, in report
/// priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidRoomType {
    Suite,
    Penthouse,
    TwinBeds,
    SingleBed,
}

impl InvalidRoomType {
    pub fn label(&self) -> &'static str {
        match self {
            InvalidRoomType::Suite => "Suite",
            InvalidRoomType::Penthouse => "Penthouse",
            InvalidRoomType::TwinBeds => "Twin beds",
            InvalidRoomType::SingleBed => "Single bed",
        }
    }

    /// Substitute bed type when this room type was requested. Twin and
    /// single requests map to the two-bed room; the rest keep whatever the
    /// category scoring selected.
    pub fn fallback_bed(&self) -> Option<BedType> {
        match self {
            InvalidRoomType::TwinBeds | InvalidRoomType::SingleBed => {
                Some(BedType::QueenTwoBeds)
            }
            InvalidRoomType::Suite | InvalidRoomType::Penthouse => None,
        }
    }
}

impl std::fmt::Display for InvalidRoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Interpreter thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpreterConfig {
    /// Transcripts shorter than this many characters are treated as noise
    /// and rejected before any analysis runs.
    pub min_transcript_chars: usize,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            min_transcript_chars: 5,
        }
    }
}

/// The one typed failure of the interpretation path. Expected and
/// recoverable: callers treat it as a no-op, not a fault.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterpretError {
    #[error("transcript too short to interpret ({len} chars, minimum {min})")]
    TranscriptTooShort { len: usize, min: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_room_type_labels() {
        assert_eq!(InvalidRoomType::Suite.label(), "Suite");
        assert_eq!(InvalidRoomType::TwinBeds.label(), "Twin beds");
    }

    #[test]
    fn test_fallback_bed_only_for_twin_and_single() {
        assert_eq!(
            InvalidRoomType::TwinBeds.fallback_bed(),
            Some(BedType::QueenTwoBeds)
        );
        assert_eq!(
            InvalidRoomType::SingleBed.fallback_bed(),
            Some(BedType::QueenTwoBeds)
        );
        assert_eq!(InvalidRoomType::Suite.fallback_bed(), None);
        assert_eq!(InvalidRoomType::Penthouse.fallback_bed(), None);
    }

    #[test]
    fn test_interpret_error_display() {
        let err = InterpretError::TranscriptTooShort { len: 2, min: 5 };
        assert!(err.to_string().contains("too short"));
    }
}
