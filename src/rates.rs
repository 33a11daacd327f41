//! Static pricing reference data.
//!
//! The rate table is process-wide, read-only configuration: loaded (or
//! defaulted) once at startup and never mutated at runtime. Sharing it by
//! reference across concurrent quote calculations is safe with no locking.

use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stayquote_types::{BedType, DayType, HourlyTier};
use thiserror::Error;

/// The compiled-in reference table.
pub static STANDARD_RATES: Lazy<RateTable> = Lazy::new(RateTable::default);

/// Nightly rate pair for one day tier: with and without the jacuzzi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NightlyRates {
    pub standard: Decimal,
    pub jacuzzi: Decimal,
}

impl NightlyRates {
    fn rate(&self, has_amenity: bool) -> Decimal {
        if has_amenity {
            self.jacuzzi
        } else {
            self.standard
        }
    }
}

/// Pricing reference data: nightly rates per day tier, the short-stay base
/// block, per-bed surcharges, and the two hourly extra-rate tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    pub weekday: NightlyRates,
    pub friday: NightlyRates,
    pub weekend: NightlyRates,
    /// Base price of the fixed 4-hour short-stay block.
    pub short_stay: NightlyRates,
    pub king_surcharge: Decimal,
    pub two_bed_surcharge: Decimal,
    pub hourly_standard: Decimal,
    pub hourly_premium: Decimal,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            weekday: NightlyRates {
                standard: Decimal::from(150),
                jacuzzi: Decimal::from(175),
            },
            friday: NightlyRates {
                standard: Decimal::from(180),
                jacuzzi: Decimal::from(205),
            },
            weekend: NightlyRates {
                standard: Decimal::from(210),
                jacuzzi: Decimal::from(235),
            },
            short_stay: NightlyRates {
                standard: Decimal::from(70),
                jacuzzi: Decimal::from(90),
            },
            king_surcharge: Decimal::from(20),
            two_bed_surcharge: Decimal::from(35),
            hourly_standard: Decimal::from(15),
            hourly_premium: Decimal::from(25),
        }
    }
}

impl RateTable {
    /// Nightly rate for a day tier and amenity flag.
    pub fn nightly_rate(&self, day_type: DayType, has_amenity: bool) -> Decimal {
        match day_type {
            DayType::Weekday => self.weekday.rate(has_amenity),
            DayType::Friday => self.friday.rate(has_amenity),
            DayType::Weekend => self.weekend.rate(has_amenity),
        }
    }

    /// Base price of the fixed 4-hour short-stay block.
    pub fn short_stay_base(&self, has_amenity: bool) -> Decimal {
        self.short_stay.rate(has_amenity)
    }

    /// Fixed per-night surcharge for the bed type.
    pub fn surcharge(&self, bed_type: BedType) -> Decimal {
        match bed_type {
            BedType::Queen => Decimal::ZERO,
            BedType::King => self.king_surcharge,
            BedType::QueenTwoBeds => self.two_bed_surcharge,
        }
    }

    /// Hourly rate for the selected extra-hour tier.
    pub fn hourly_rate(&self, tier: HourlyTier) -> Decimal {
        match tier {
            HourlyTier::Standard => self.hourly_standard,
            HourlyTier::Premium => self.hourly_premium,
        }
    }

    /// Parse a deployment override from YAML and validate its shape.
    pub fn from_yaml_str(yaml: &str) -> Result<RateTable, RateTableError> {
        let table: RateTable = serde_yaml::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a deployment override from a YAML file.
    pub fn load(path: &std::path::Path) -> Result<RateTable, RateTableError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    fn validate(&self) -> Result<(), RateTableError> {
        let rates = [
            ("weekday", self.weekday),
            ("friday", self.friday),
            ("weekend", self.weekend),
            ("short_stay", self.short_stay),
        ];
        for (name, pair) in rates {
            if pair.standard <= Decimal::ZERO || pair.jacuzzi <= Decimal::ZERO {
                return Err(RateTableError::Invalid {
                    reason: format!("{name} rates must be positive"),
                });
            }
        }
        if self.hourly_standard <= Decimal::ZERO || self.hourly_premium <= Decimal::ZERO {
            return Err(RateTableError::Invalid {
                reason: "hourly rates must be positive".to_string(),
            });
        }
        if self.king_surcharge < Decimal::ZERO || self.two_bed_surcharge < Decimal::ZERO {
            return Err(RateTableError::Invalid {
                reason: "surcharges must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// Rate-table override loading failures. Surfaced once at startup; the
/// compiled-in default needs no loading and cannot fail.
#[derive(Debug, Error)]
pub enum RateTableError {
    #[error("failed to read rate table: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rate table: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid rate table: {reason}")]
    Invalid { reason: String },
}
