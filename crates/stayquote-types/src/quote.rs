//! Quote output types: per-night price lines, the quote itself, and the
//! recoverable diagnostics carried alongside it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::DayType;

/// One priced night of a stay, retained for display and audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPriceLine {
    pub date: NaiveDate,
    /// Weekday name of `date`, e.g. `"Friday"`.
    pub day_of_week: String,
    pub day_type: DayType,
    pub base_price: Decimal,
    pub surcharge: Decimal,
    /// `base_price + surcharge`.
    pub price: Decimal,
}

impl DailyPriceLine {
    fn rounded(&self) -> DailyPriceLine {
        DailyPriceLine {
            base_price: self.base_price.round_dp(2),
            surcharge: self.surcharge.round_dp(2),
            price: self.price.round_dp(2),
            ..self.clone()
        }
    }
}

/// Recoverable guidance attached to a quote. None of these are errors: the
/// quote they accompany is a usable best-effort substitution, and the
/// caller renders them as corrective hints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDiagnostics {
    /// Requested room type the system does not offer (e.g. "Suite").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_room_type: Option<String>,

    /// Requested bed/amenity pair the system does not offer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_combination: Option<String>,

    /// The literal date expression that drove resolution, when one matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_phrase: Option<String>,
}

impl QuoteDiagnostics {
    pub fn is_empty(&self) -> bool {
        self.invalid_room_type.is_none()
            && self.invalid_combination.is_none()
            && self.matched_phrase.is_none()
    }
}

/// A complete, auditable price quote.
///
/// Invariants (per billing mode):
/// - multi-night / interpreted: `base_price` = Σ `daily_prices[].price`
/// - short-stay: `base_price` = short-stay base rate, `daily_prices` empty
/// - always: `total = base_price + extra_hours_cost + tax`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayQuote {
    /// Number of nights priced; 0 for short-stay quotes.
    pub nights: u32,
    pub daily_prices: Vec<DailyPriceLine>,
    pub base_price: Decimal,
    pub extra_hours_cost: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    #[serde(default, skip_serializing_if = "QuoteDiagnostics::is_empty")]
    pub diagnostics: QuoteDiagnostics,
}

impl StayQuote {
    /// Presentation copy with every amount rounded to two decimal places.
    /// The engine itself never rounds; this is the single rounding point.
    pub fn rounded(&self) -> StayQuote {
        StayQuote {
            nights: self.nights,
            daily_prices: self.daily_prices.iter().map(DailyPriceLine::rounded).collect(),
            base_price: self.base_price.round_dp(2),
            extra_hours_cost: self.extra_hours_cost.round_dp(2),
            tax: self.tax.round_dp(2),
            total: self.total.round_dp(2),
            diagnostics: self.diagnostics.clone(),
        }
    }
}
