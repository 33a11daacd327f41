//! Pricing engine: per-night pricing and the three billing modes.
//!
//! Each mode carries its own tax rule. The divergence is deliberate
//! business policy and is preserved exactly:
//!
//! ```text
//! mode          payment   tax
//! ------------  --------  --------------------------------
//! short-stay    cash      0
//! short-stay    card      0.15 x (base + extra hours)
//! multi-night   cash      0.15 x base            (extras untaxed)
//! multi-night   card      0.15 x (base + early + late)
//! interpreted   n/a       0.15 x base            (always)
//! ```
//!
//! All arithmetic stays unrounded `Decimal`; rounding happens only at
//! presentation ([`StayQuote::rounded`]). The engine never validates hour
//! ranges: callers clamp first ([`ExtraHours::clamped`]).

use chrono::Duration;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use stayquote_types::{
    BedType, DailyPriceLine, DayType, ExtraHours, HourlyTier, PaymentMethod, QuoteDiagnostics,
    StayQuote, StayRequest,
};
use tracing::debug;

use crate::rates::{RateTable, STANDARD_RATES};

/// The flat tax rate applied by every non-exempt policy.
pub static TAX_RATE: Lazy<Decimal> = Lazy::new(|| Decimal::new(15, 2));

// ============================================================================
// TAX POLICY
// ============================================================================

/// Which cost components the 15% tax applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxPolicy {
    /// No tax at all (short-stay paid in cash).
    Exempt,
    /// Tax on the base price only; extra-hour costs are never taxed.
    BaseOnly,
    /// Tax on the base price plus all extra-hour costs.
    BaseAndExtras,
}

impl TaxPolicy {
    pub fn for_short_stay(payment: PaymentMethod) -> TaxPolicy {
        if payment.is_cash() {
            TaxPolicy::Exempt
        } else {
            TaxPolicy::BaseAndExtras
        }
    }

    pub fn for_multi_night(payment: PaymentMethod) -> TaxPolicy {
        if payment.is_cash() {
            TaxPolicy::BaseOnly
        } else {
            TaxPolicy::BaseAndExtras
        }
    }

    pub fn for_interpreted() -> TaxPolicy {
        TaxPolicy::BaseOnly
    }

    /// Compute the tax for a base price and the extra-hour costs.
    pub fn tax(&self, base: Decimal, extras: Decimal) -> Decimal {
        match self {
            TaxPolicy::Exempt => Decimal::ZERO,
            TaxPolicy::BaseOnly => base * *TAX_RATE,
            TaxPolicy::BaseAndExtras => (base + extras) * *TAX_RATE,
        }
    }
}

// ============================================================================
// ENGINE
// ============================================================================

/// Computes deterministic, auditable quotes against a read-only rate
/// table. Every call allocates its own output; the engine holds no
/// per-call state.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    rates: RateTable,
}

impl PricingEngine {
    pub fn new(rates: RateTable) -> Self {
        Self { rates }
    }

    /// Engine over the compiled-in reference table.
    pub fn standard() -> Self {
        Self::new(STANDARD_RATES.clone())
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    /// Price a single night: tier rate by day type and amenity, plus the
    /// fixed bed surcharge.
    pub fn price_night(
        &self,
        date: chrono::NaiveDate,
        bed_type: BedType,
        has_amenity: bool,
    ) -> DailyPriceLine {
        let day_type = DayType::classify(date);
        let base_price = self.rates.nightly_rate(day_type, has_amenity);
        let surcharge = self.rates.surcharge(bed_type);
        DailyPriceLine {
            date,
            day_of_week: date.format("%A").to_string(),
            day_type,
            base_price,
            surcharge,
            price: base_price + surcharge,
        }
    }

    /// Classify and price each consecutive night from check-in.
    fn daily_lines(&self, request: &StayRequest) -> Vec<DailyPriceLine> {
        (0..request.nights)
            .map(|offset| {
                let date = request.first_night() + Duration::days(i64::from(offset));
                self.price_night(date, request.bed_type, request.has_amenity)
            })
            .collect()
    }

    /// Short-stay mode: the fixed 4-hour block plus optional extra hours,
    /// no date range.
    pub fn quote_short_stay(
        &self,
        has_amenity: bool,
        extra_hours: u32,
        tier: HourlyTier,
        payment: PaymentMethod,
    ) -> StayQuote {
        let base_price = self.rates.short_stay_base(has_amenity);
        let extra_hours_cost = self.rates.hourly_rate(tier) * Decimal::from(extra_hours);
        let tax = TaxPolicy::for_short_stay(payment).tax(base_price, extra_hours_cost);
        debug!(%base_price, %extra_hours_cost, %tax, "short-stay quote");
        StayQuote {
            nights: 0,
            daily_prices: Vec::new(),
            base_price,
            extra_hours_cost,
            tax,
            total: base_price + extra_hours_cost + tax,
            diagnostics: QuoteDiagnostics::default(),
        }
    }

    /// Multi-night mode: explicit date range with early-check-in and
    /// late-check-out hours billed at the selected tier.
    pub fn quote_multi_night(
        &self,
        request: &StayRequest,
        extra: ExtraHours,
        tier: HourlyTier,
        payment: PaymentMethod,
    ) -> StayQuote {
        let daily_prices = self.daily_lines(request);
        let base_price: Decimal = daily_prices.iter().map(|line| line.price).sum();
        let hourly = self.rates.hourly_rate(tier);
        let extra_hours_cost =
            hourly * Decimal::from(extra.early_hours) + hourly * Decimal::from(extra.late_hours);
        let tax = TaxPolicy::for_multi_night(payment).tax(base_price, extra_hours_cost);
        debug!(nights = request.nights, %base_price, %tax, "multi-night quote");
        StayQuote {
            nights: request.nights,
            daily_prices,
            base_price,
            extra_hours_cost,
            tax,
            total: base_price + extra_hours_cost + tax,
            diagnostics: QuoteDiagnostics::default(),
        }
    }

    /// Interpreted-query mode: nightly pricing as in multi-night mode, tax
    /// unconditionally on the base, no extra-hour billing (no payment
    /// selection exists for a spoken request).
    pub fn quote_interpreted(&self, request: &StayRequest) -> StayQuote {
        let daily_prices = self.daily_lines(request);
        let base_price: Decimal = daily_prices.iter().map(|line| line.price).sum();
        let tax = TaxPolicy::for_interpreted().tax(base_price, Decimal::ZERO);
        debug!(nights = request.nights, %base_price, %tax, "interpreted quote");
        StayQuote {
            nights: request.nights,
            daily_prices,
            base_price,
            extra_hours_cost: Decimal::ZERO,
            tax,
            total: base_price + tax,
            diagnostics: QuoteDiagnostics::default(),
        }
    }
}

impl Default for PricingEngine {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_price_night_friday_king() {
        let engine = PricingEngine::standard();
        // 2026-08-07 is a Friday.
        let line = engine.price_night(date(2026, 8, 7), BedType::King, false);
        assert_eq!(line.day_type, DayType::Friday);
        assert_eq!(line.day_of_week, "Friday");
        assert_eq!(line.base_price, Decimal::from(180));
        assert_eq!(line.surcharge, Decimal::from(20));
        assert_eq!(line.price, Decimal::from(200));
    }

    #[test]
    fn test_base_price_is_sum_of_daily_lines() {
        let engine = PricingEngine::standard();
        // Thu/Fri/Sat span.
        let request =
            StayRequest::from_nights(date(2026, 8, 6), 3, BedType::King, false, false);
        let quote = engine.quote_multi_night(
            &request,
            ExtraHours::none(),
            HourlyTier::Standard,
            PaymentMethod::Card,
        );
        let sum: Decimal = quote.daily_prices.iter().map(|l| l.price).sum();
        assert_eq!(quote.base_price, sum);
        // weekday 150 + friday 180 + weekend 210, plus 3 x 20 king surcharge.
        assert_eq!(quote.base_price, Decimal::from(600));
        assert_eq!(quote.tax, Decimal::from(90));
        assert_eq!(quote.total, Decimal::from(690));
    }

    #[test]
    fn test_short_stay_cash_untaxed() {
        let engine = PricingEngine::standard();
        let quote =
            engine.quote_short_stay(false, 2, HourlyTier::Standard, PaymentMethod::Cash);
        assert_eq!(quote.tax, Decimal::ZERO);
        // base 70 + 2 x 15.
        assert_eq!(quote.total, Decimal::from(100));
        assert!(quote.daily_prices.is_empty());
    }

    #[test]
    fn test_short_stay_card_taxes_base_and_extras() {
        let engine = PricingEngine::standard();
        let quote =
            engine.quote_short_stay(true, 1, HourlyTier::Premium, PaymentMethod::Card);
        // base 90 + 25 extra, taxed together.
        let expected_tax = (Decimal::from(90) + Decimal::from(25)) * *TAX_RATE;
        assert_eq!(quote.tax, expected_tax);
        assert_eq!(
            quote.total,
            Decimal::from(115) + expected_tax
        );
    }

    #[test]
    fn test_multi_night_cash_never_taxes_extras() {
        let engine = PricingEngine::standard();
        let request =
            StayRequest::from_nights(date(2026, 8, 3), 1, BedType::Queen, false, false);
        let extras = ExtraHours {
            early_hours: 2,
            late_hours: 3,
        };
        let quote = engine.quote_multi_night(
            &request,
            extras,
            HourlyTier::Standard,
            PaymentMethod::Cash,
        );
        // Monday night, queen: base 150; extras 5 x 15 = 75 untaxed.
        assert_eq!(quote.base_price, Decimal::from(150));
        assert_eq!(quote.extra_hours_cost, Decimal::from(75));
        assert_eq!(quote.tax, Decimal::from(150) * *TAX_RATE);
        assert_eq!(
            quote.total,
            Decimal::from(225) + Decimal::from(150) * *TAX_RATE
        );
    }

    #[test]
    fn test_multi_night_card_taxes_extras() {
        let engine = PricingEngine::standard();
        let request =
            StayRequest::from_nights(date(2026, 8, 3), 1, BedType::Queen, false, false);
        let extras = ExtraHours {
            early_hours: 0,
            late_hours: 2,
        };
        let quote = engine.quote_multi_night(
            &request,
            extras,
            HourlyTier::Standard,
            PaymentMethod::Card,
        );
        assert_eq!(quote.tax, (Decimal::from(150) + Decimal::from(30)) * *TAX_RATE);
    }

    #[test]
    fn test_interpreted_mode_always_taxes_base() {
        let engine = PricingEngine::standard();
        let request =
            StayRequest::from_nights(date(2026, 8, 7), 2, BedType::King, true, false);
        let quote = engine.quote_interpreted(&request);
        // friday 205 + weekend 235, plus 2 x 20 surcharge.
        assert_eq!(quote.base_price, Decimal::from(480));
        assert_eq!(quote.tax, Decimal::from(480) * *TAX_RATE);
        assert_eq!(quote.extra_hours_cost, Decimal::ZERO);
        assert_eq!(quote.total, quote.base_price + quote.tax);
    }

    #[test]
    fn test_quotes_are_deterministic() {
        let engine = PricingEngine::standard();
        let request =
            StayRequest::from_nights(date(2026, 8, 6), 3, BedType::QueenTwoBeds, false, false);
        let first = engine.quote_interpreted(&request);
        let second = engine.quote_interpreted(&request);
        assert_eq!(first, second);
    }
}
