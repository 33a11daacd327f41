//! Resolved stay request and the extra-hour form values.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{BedType, CHECK_IN_HOUR, CHECK_OUT_HOUR, EARLY_CHECK_IN_MAX_HOURS};

/// A fully-resolved stay request, ready for pricing.
///
/// Created fresh per calculation and never mutated. `nights` is always
/// derived (from a night count or from the whole-day difference of an
/// explicit range) and is never set independently, so the invariant
/// `check_out > check_in` and `nights >= 1` holds for every constructed
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayRequest {
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub nights: u32,
    pub bed_type: BedType,
    pub has_amenity: bool,
    /// Voice-derived requests are always non-smoking by policy.
    pub is_smoking: bool,
}

impl StayRequest {
    /// Build a request from a check-in date and a night count.
    ///
    /// Check-in is placed at the standard check-in hour, check-out at the
    /// standard check-out hour after `nights` whole days. `nights` below 1
    /// is promoted to 1.
    pub fn from_nights(
        check_in_date: NaiveDate,
        nights: u32,
        bed_type: BedType,
        has_amenity: bool,
        is_smoking: bool,
    ) -> StayRequest {
        let nights = nights.max(1);
        let check_in = check_in_date
            .and_hms_opt(CHECK_IN_HOUR, 0, 0)
            .expect("standard check-in hour is a valid time");
        let check_out = (check_in_date + Duration::days(i64::from(nights)))
            .and_hms_opt(CHECK_OUT_HOUR, 0, 0)
            .expect("standard check-out hour is a valid time");
        StayRequest {
            check_in,
            check_out,
            nights,
            bed_type,
            has_amenity,
            is_smoking,
        }
    }

    /// Build a request from an explicit date range (form-driven multi-night
    /// mode). Returns `None` unless `check_out > check_in`. The night count
    /// is the whole-day difference, floored at 1.
    pub fn from_range(
        check_in: NaiveDateTime,
        check_out: NaiveDateTime,
        bed_type: BedType,
        has_amenity: bool,
        is_smoking: bool,
    ) -> Option<StayRequest> {
        if check_out <= check_in {
            return None;
        }
        let whole_days = (check_out.date() - check_in.date()).num_days();
        let nights = u32::try_from(whole_days.max(1)).ok()?;
        Some(StayRequest {
            check_in,
            check_out,
            nights,
            bed_type,
            has_amenity,
            is_smoking,
        })
    }

    /// Calendar date of the first night.
    pub fn first_night(&self) -> NaiveDate {
        self.check_in.date()
    }
}

/// Early-check-in / late-check-out hour counts for multi-night billing.
///
/// The engine bills whatever it is given; range enforcement is the
/// caller's job and lives in [`ExtraHours::clamped`]. Early check-in is
/// conventionally expressed by callers as a non-positive offset from the
/// standard check-in hour; late check-out as zero-or-more hours past the
/// standard check-out hour, with no upper bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraHours {
    pub early_hours: u32,
    pub late_hours: u32,
}

impl ExtraHours {
    pub fn none() -> ExtraHours {
        ExtraHours::default()
    }

    /// Apply the documented caller-side clamping convention.
    ///
    /// `early_offset` is a non-positive hour offset (e.g. -2 = check in two
    /// hours early), bounded to a magnitude of
    /// [`EARLY_CHECK_IN_MAX_HOURS`]; positive offsets clamp to zero.
    /// `late_hours` clamps below at zero and is unbounded above.
    pub fn clamped(early_offset: i64, late_hours: i64) -> ExtraHours {
        let early = (-early_offset).clamp(0, EARLY_CHECK_IN_MAX_HOURS);
        ExtraHours {
            early_hours: early as u32,
            late_hours: late_hours.max(0).min(i64::from(u32::MAX)) as u32,
        }
    }
}
