//! Date expression resolution.
//!
//! A lowercase phrase resolves to a concrete check-in/check-out pair via
//! an ordered list of rules, tried in priority order; the first rule whose
//! predicate matches produces the stay. Each rule is a pure
//! predicate+transform over the phrase and the reference time. Resolution
//! never fails: when nothing matches, the default rule yields a one-night
//! stay starting today.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use stayquote_types::{CHECK_IN_HOUR, CHECK_OUT_HOUR};
use tracing::debug;

use crate::types::ResolvedStay;

const MONTH_ALTERNATION: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may\
|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:tember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

/// "26th june" / "26 of june"
static DAY_FIRST_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b(\d{{1,2}})(?:st|nd|rd|th)?\s+(?:of\s+)?({MONTH_ALTERNATION})\b"
    ))
    .expect("day-first date pattern is valid")
});

/// "june 26th" / "june 26"
static MONTH_FIRST_DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"\b({MONTH_ALTERNATION})\s+(\d{{1,2}})(?:st|nd|rd|th)?\b"
    ))
    .expect("month-first date pattern is valid")
});

static TOMORROW: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btomorrow\b").expect("valid"));
static TODAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\btoday\b|\btonight\b").expect("valid"));
static NEXT_WEEK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bnext\s+week\b").expect("valid"));
static WHOLE_WEEK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:whole|full|entire|all)\s+week\b|\bweek[-\s]?long\b").expect("valid")
});
static WEEKEND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bweekends?\b").expect("valid"));

static WEEKDAY_RES: Lazy<Vec<(Regex, Weekday, &'static str)>> = Lazy::new(|| {
    [
        ("monday", Weekday::Mon),
        ("tuesday", Weekday::Tue),
        ("wednesday", Weekday::Wed),
        ("thursday", Weekday::Thu),
        ("friday", Weekday::Fri),
        ("saturday", Weekday::Sat),
        ("sunday", Weekday::Sun),
    ]
    .into_iter()
    .map(|(name, day)| {
        (
            Regex::new(&format!(r"\b{name}s?\b")).expect("weekday pattern is valid"),
            day,
            name,
        )
    })
    .collect()
});

/// The resolution rules, in the priority order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateRule {
    ExplicitDate,
    Tomorrow,
    Today,
    NextWeek,
    Weekend,
    NamedWeekdays,
}

const RULE_ORDER: &[DateRule] = &[
    DateRule::ExplicitDate,
    DateRule::Tomorrow,
    DateRule::Today,
    DateRule::NextWeek,
    DateRule::Weekend,
    DateRule::NamedWeekdays,
];

/// Resolves a lowercase phrase into a concrete stay window.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateExpressionResolver;

impl DateExpressionResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `phrase` against the reference time. Total: falls back to a
    /// one-night stay starting today when no rule matches.
    pub fn resolve(&self, phrase: &str, now: NaiveDateTime) -> ResolvedStay {
        for rule in RULE_ORDER {
            if let Some(resolved) = apply_rule(*rule, phrase, now) {
                debug!(?rule, nights = resolved.nights, "date rule matched");
                return resolved;
            }
        }
        stay(now.date(), 1, None)
    }
}

fn apply_rule(rule: DateRule, phrase: &str, now: NaiveDateTime) -> Option<ResolvedStay> {
    match rule {
        DateRule::ExplicitDate => explicit_date(phrase, now),
        DateRule::Tomorrow => TOMORROW
            .find(phrase)
            .map(|m| stay(now.date() + Duration::days(1), 1, Some(m.as_str().to_string()))),
        DateRule::Today => TODAY
            .find(phrase)
            .map(|m| stay(now.date(), 1, Some(m.as_str().to_string()))),
        DateRule::NextWeek => next_week(phrase, now),
        DateRule::Weekend => weekend(phrase, now),
        DateRule::NamedWeekdays => named_weekdays(phrase, now),
    }
}

/// Explicit calendar date: day + month name, year defaulting to the
/// current year and advancing to the next one when the date has already
/// passed. Unparseable day/month combinations fall through to later rules.
fn explicit_date(phrase: &str, now: NaiveDateTime) -> Option<ResolvedStay> {
    let (day, month_name, matched) = if let Some(caps) = DAY_FIRST_DATE.captures(phrase) {
        (
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            caps.get(0)?.as_str(),
        )
    } else {
        let caps = MONTH_FIRST_DATE.captures(phrase)?;
        (
            caps.get(2)?.as_str(),
            caps.get(1)?.as_str(),
            caps.get(0)?.as_str(),
        )
    };
    let day: u32 = day.parse().ok()?;
    let month = month_number(month_name)?;

    let mut date = NaiveDate::from_ymd_opt(now.year(), month, day)?;
    if date < now.date() {
        date = NaiveDate::from_ymd_opt(now.year() + 1, month, day)?;
    }
    Some(stay(date, 1, Some(matched.to_string())))
}

fn month_number(name: &str) -> Option<u32> {
    let month = match name.get(..3)? {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(month)
}

/// "next week": check-in seven days out; a whole-week qualifier stretches
/// the stay to seven nights, otherwise the weekend-style two-night default
/// applies.
fn next_week(phrase: &str, now: NaiveDateTime) -> Option<ResolvedStay> {
    let m = NEXT_WEEK.find(phrase)?;
    let nights = if WHOLE_WEEK.is_match(phrase) { 7 } else { 2 };
    Some(stay(
        now.date() + Duration::days(7),
        nights,
        Some(m.as_str().to_string()),
    ))
}

/// "weekend" without a specific weekday: the next strictly-future Friday
/// (Friday-or-later today pushes into next week), Friday to Sunday.
fn weekend(phrase: &str, now: NaiveDateTime) -> Option<ResolvedStay> {
    let m = WEEKEND.find(phrase)?;
    if mentioned_weekdays(phrase).next().is_some() {
        return None;
    }
    let friday = next_future_weekday(now.date(), Weekday::Fri);
    Some(stay(friday, 2, Some(m.as_str().to_string())))
}

/// One or more named weekdays. A single day is a one-night stay on its
/// next strictly-future occurrence. Several days resolve to the longest
/// consecutive run (wrapping across the week boundary); when no multi-day
/// run exists the full sorted set is treated as the span.
fn named_weekdays(phrase: &str, now: NaiveDateTime) -> Option<ResolvedStay> {
    let mut days: Vec<Weekday> = Vec::new();
    let mut names: Vec<&str> = Vec::new();
    for (day, name) in mentioned_weekdays(phrase) {
        if !days.contains(&day) {
            days.push(day);
            names.push(name);
        }
    }
    if days.is_empty() {
        return None;
    }
    let matched = Some(names.join(" "));

    if days.len() == 1 {
        return Some(stay(next_future_weekday(now.date(), days[0]), 1, matched));
    }

    let mut indices: Vec<u32> = days.iter().map(|d| d.num_days_from_monday()).collect();
    indices.sort_unstable();

    let (start, len) = match longest_wrapping_run(&indices, now.date()) {
        Some(run) => run,
        // No multi-day run: the full sorted set is the span.
        None => (earliest_future_index(&indices, now.date()), indices.len() as u32),
    };
    let check_in = next_future_weekday(now.date(), weekday_from_index(start));
    Some(stay(check_in, len, matched))
}

fn mentioned_weekdays(phrase: &str) -> impl Iterator<Item = (Weekday, &'static str)> + '_ {
    WEEKDAY_RES
        .iter()
        .filter(|(re, _, _)| re.is_match(phrase))
        .map(|(_, day, name)| (*day, *name))
}

/// Longest consecutive run among the sorted weekday indices, wrapping
/// across the week boundary. Returns `None` when every run is a single
/// day. Ties resolve to the run starting soonest after `from`.
fn longest_wrapping_run(indices: &[u32], from: NaiveDate) -> Option<(u32, u32)> {
    let in_set = |i: u32| indices.contains(&(i % 7));
    if indices.len() == 7 {
        // Every day mentioned: the week starting tomorrow.
        let start = (from.weekday().num_days_from_monday() + 1) % 7;
        return Some((start, 7));
    }

    let mut best: Option<(u32, u32)> = None;
    for &start in indices {
        // Only run starts: a day whose predecessor is absent.
        if in_set(start + 6) {
            continue;
        }
        let mut len = 1u32;
        while in_set(start + len) {
            len += 1;
        }
        if len < 2 {
            continue;
        }
        let better = match best {
            None => true,
            Some((best_start, best_len)) => {
                len > best_len
                    || (len == best_len
                        && days_until(from, weekday_from_index(start))
                            < days_until(from, weekday_from_index(best_start)))
            }
        };
        if better {
            best = Some((start, len));
        }
    }
    best
}

fn earliest_future_index(indices: &[u32], from: NaiveDate) -> u32 {
    indices
        .iter()
        .copied()
        .min_by_key(|&i| days_until(from, weekday_from_index(i)))
        .unwrap_or(0)
}

fn weekday_from_index(index: u32) -> Weekday {
    match index % 7 {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// Days until the next strictly-future occurrence of `target`; the same
/// weekday as `from` counts as seven days ahead, never zero.
fn days_until(from: NaiveDate, target: Weekday) -> i64 {
    let from_idx = from.weekday().num_days_from_monday();
    let target_idx = target.num_days_from_monday();
    i64::from((target_idx + 7 - from_idx - 1) % 7 + 1)
}

fn next_future_weekday(from: NaiveDate, target: Weekday) -> NaiveDate {
    from + Duration::days(days_until(from, target))
}

/// Place check-in at the standard check-in hour and check-out `nights`
/// days later at the standard check-out hour.
fn stay(check_in_date: NaiveDate, nights: u32, matched_phrase: Option<String>) -> ResolvedStay {
    let check_in = check_in_date
        .and_hms_opt(CHECK_IN_HOUR, 0, 0)
        .expect("standard check-in hour is a valid time");
    let check_out = (check_in_date + Duration::days(i64::from(nights)))
        .and_hms_opt(CHECK_OUT_HOUR, 0, 0)
        .expect("standard check-out hour is a valid time");
    ResolvedStay {
        check_in,
        check_out,
        nights,
        matched_phrase,
    }
}

// ============================================================================
// Tests
// ============================================================================
