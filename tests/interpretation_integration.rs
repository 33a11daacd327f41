//! End-to-end interpretation: transcript in, priced quote out.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use stayquote::{DayType, InterpretError, QueryInterpreter, TAX_RATE};

/// Wednesday morning reference time.
fn wednesday() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 8, 5)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_king_room_this_weekend_with_a_hot_tub() {
    let interpreter = QueryInterpreter::new();
    let quote = interpreter
        .interpret("king room this weekend with a hot tub", wednesday())
        .expect("interpretable");

    // Upcoming Friday, two nights.
    assert_eq!(quote.nights, 2);
    assert_eq!(quote.daily_prices.len(), 2);
    assert_eq!(quote.daily_prices[0].date, date(2026, 8, 7));
    assert_eq!(quote.daily_prices[0].day_type, DayType::Friday);
    assert_eq!(quote.daily_prices[1].day_type, DayType::Weekend);

    // King with jacuzzi: (205 + 20) + (235 + 20).
    assert_eq!(quote.base_price, Decimal::from(480));
    assert_eq!(quote.tax, quote.base_price * *TAX_RATE);
    assert_eq!(quote.total, quote.base_price + quote.tax);

    // No policy violations; the matched date phrase is carried.
    assert!(quote.diagnostics.invalid_room_type.is_none());
    assert!(quote.diagnostics.invalid_combination.is_none());
    assert_eq!(quote.diagnostics.matched_phrase.as_deref(), Some("weekend"));
}

#[test]
fn test_suite_for_tonight() {
    let interpreter = QueryInterpreter::new();
    let quote = interpreter
        .interpret("a suite for tonight", wednesday())
        .expect("interpretable");

    assert_eq!(
        quote.diagnostics.invalid_room_type.as_deref(),
        Some("Suite")
    );
    assert_eq!(quote.nights, 1);
    assert_eq!(quote.daily_prices[0].date, date(2026, 8, 5));
    // Fallback is the default Queen: weekday rate, no surcharge.
    assert_eq!(quote.daily_prices[0].surcharge, Decimal::ZERO);
    assert_eq!(quote.base_price, Decimal::from(150));
}

#[test]
fn test_two_queens_with_jacuzzi_substitutes_queen_and_keeps_amenity() {
    let interpreter = QueryInterpreter::new();
    let quote = interpreter
        .interpret("two queen beds with a jacuzzi for tomorrow", wednesday())
        .expect("interpretable");

    assert!(quote.diagnostics.invalid_combination.is_some());
    // Thursday, jacuzzi-tier weekday rate, Queen surcharge (zero): the
    // amenity intent won and the bed type was substituted.
    assert_eq!(quote.nights, 1);
    assert_eq!(quote.daily_prices[0].surcharge, Decimal::ZERO);
    assert_eq!(quote.base_price, Decimal::from(175));
}

#[test]
fn test_noise_transcript_is_rejected_not_priced() {
    let interpreter = QueryInterpreter::new();
    let err = interpreter.interpret("uh", wednesday()).unwrap_err();
    assert!(matches!(err, InterpretError::TranscriptTooShort { .. }));
}

#[test]
fn test_interpretation_is_byte_identical_across_calls() {
    let interpreter = QueryInterpreter::new();
    let transcript = "queen room with a hot tub saturday and sunday";
    let first = interpreter
        .interpret(transcript, wednesday())
        .expect("interpretable");
    let second = interpreter
        .interpret(transcript, wednesday())
        .expect("interpretable");
    let first_json = serde_json::to_string(&first).expect("serialize");
    let second_json = serde_json::to_string(&second).expect("serialize");
    assert_eq!(first_json, second_json);
}

#[test]
fn test_default_stay_when_nothing_matches() {
    let interpreter = QueryInterpreter::new();
    let quote = interpreter
        .interpret("a nice room please", wednesday())
        .expect("interpretable");
    assert_eq!(quote.nights, 1);
    assert_eq!(quote.daily_prices[0].date, date(2026, 8, 5));
    assert!(quote.diagnostics.matched_phrase.is_none());
}
