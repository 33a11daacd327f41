//! Shared Types for StayQuote
//!
//! This crate is the SINGLE SOURCE OF TRUTH for all values crossing the
//! boundary between the quoting core and its callers (form UI, voice UI,
//! CLI).
//!
//! ## Boundaries
//!
//! ```text
//! ┌──────────────────┐  form values /   ┌──────────────────┐
//! │  UI layer        │  transcript      │  Quoting core    │
//! │  (forms, voice)  │ ───────────────► │  (interpreter +  │
//! │                  │ ◄─────────────── │   pricing)       │
//! └──────────────────┘    StayQuote     └──────────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. All boundary types live here - no inline struct definitions in the
//!    engine or interpreter.
//! 2. Everything serializes: serde derives, snake_case JSON.
//! 3. Money is `rust_decimal::Decimal`, carried unrounded. Rounding to two
//!    places happens once, at presentation ([`StayQuote::rounded`]).
//! 4. Requests and quotes are immutable values created per call; they hold
//!    no identity and no back-references.

pub mod quote;
pub mod request;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use quote::{DailyPriceLine, QuoteDiagnostics, StayQuote};
pub use request::{ExtraHours, StayRequest};

// ============================================================================
// FIXED SCHEDULE CONSTANTS
// ============================================================================

/// Standard check-in hour (local), used for every resolved stay.
pub const CHECK_IN_HOUR: u32 = 14;

/// Standard check-out hour (local) of the final night.
pub const CHECK_OUT_HOUR: u32 = 12;

/// Maximum magnitude of the early-check-in offset, in hours. Early check-in
/// is conventionally expressed by callers as a non-positive offset; see
/// [`ExtraHours::clamped`].
pub const EARLY_CHECK_IN_MAX_HOURS: i64 = 6;

// ============================================================================
// CORE ENUMS
// ============================================================================

/// Bed configuration of the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedType {
    Queen,
    King,
    /// Room with two queen beds (the "double" configuration).
    QueenTwoBeds,
}

impl BedType {
    /// Human-readable label used in diagnostics and rendered guidance.
    pub fn label(&self) -> &'static str {
        match self {
            BedType::Queen => "Queen bed",
            BedType::King => "King bed",
            BedType::QueenTwoBeds => "Two queen beds",
        }
    }
}

impl std::fmt::Display for BedType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Rate-table classification of a calendar date.
///
/// Total and exhaustive: every date maps to exactly one variant. Friday is
/// its own tier and is never folded into `Weekend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    Weekday,
    Friday,
    Weekend,
}

impl DayType {
    /// Classify a calendar date into its rate tier.
    pub fn classify(date: NaiveDate) -> DayType {
        use chrono::Datelike;
        match date.weekday() {
            chrono::Weekday::Fri => DayType::Friday,
            chrono::Weekday::Sat | chrono::Weekday::Sun => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }
}

/// How the stay is paid for. Tax treatment differs by method in the
/// form-driven billing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
}

impl PaymentMethod {
    pub fn is_cash(&self) -> bool {
        matches!(self, PaymentMethod::Cash)
    }
}

/// Selectable hourly rate tier for extra-hour billing. Two fixed tiers
/// exist; the concrete amounts live in the rate table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourlyTier {
    Standard,
    Premium,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_classification_total_over_a_week() {
        // 2026-08-03 is a Monday.
        let monday = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
        let expected = [
            DayType::Weekday, // Mon
            DayType::Weekday, // Tue
            DayType::Weekday, // Wed
            DayType::Weekday, // Thu
            DayType::Friday,  // Fri
            DayType::Weekend, // Sat
            DayType::Weekend, // Sun
        ];
        for (offset, want) in expected.iter().enumerate() {
            let date = monday + chrono::Duration::days(offset as i64);
            assert_eq!(DayType::classify(date), *want, "offset {}", offset);
        }
    }

    #[test]
    fn test_friday_is_never_weekend() {
        let friday = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(DayType::classify(friday), DayType::Friday);
        assert_ne!(DayType::classify(friday), DayType::Weekend);
    }

    #[test]
    fn test_bed_type_serde_round_trip() {
        let json = serde_json::to_string(&BedType::QueenTwoBeds).expect("serialize");
        assert_eq!(json, "\"queen_two_beds\"");
        let back: BedType = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, BedType::QueenTwoBeds);
    }
}
