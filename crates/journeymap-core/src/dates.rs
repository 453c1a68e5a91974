//! Start-date extraction from loosely structured duration strings.
//!
//! Durations look like `"Sep 2018 - Jun 2022"` or `"Jan 2023 - Present"`.
//! Only the first `<month> <year>` pair is used for ordering. Durations with
//! no such pair order before every dated entry.

use chrono::NaiveDate;

/// Sort key given to durations without a recognizable `<month> <year>` pair.
pub const UNDATED: NaiveDate = NaiveDate::MIN;

const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parse the start of a duration into the first day of its month.
///
/// Returns [`UNDATED`] when no `<month> <year>` pair is present.
pub fn parse_start_date(duration: &str) -> NaiveDate {
    start_date(duration).unwrap_or(UNDATED)
}

/// First day of the starting month, if the duration names one
pub fn start_date(duration: &str) -> Option<NaiveDate> {
    start_month(duration).and_then(|(year, month)| NaiveDate::from_ymd_opt(year, month, 1))
}

/// First `(year, month)` pair in a duration string, month being 1-based.
pub fn start_month(duration: &str) -> Option<(i32, u32)> {
    let tokens: Vec<&str> = duration.split_whitespace().collect();
    tokens.windows(2).find_map(|pair| {
        let month = parse_month(pair[0])?;
        let year = parse_year(pair[1])?;
        Some((year, month))
    })
}

/// Month number for `Jun`, `June`, `Sept`, `sep`...
///
/// The word must be at least three letters and a prefix of the full month name.
fn parse_month(token: &str) -> Option<u32> {
    let word = token.trim_matches(|c: char| !c.is_ascii_alphabetic());
    if word.len() < 3 || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let word = word.to_ascii_lowercase();
    MONTHS
        .iter()
        .position(|name| name.starts_with(&word))
        .map(|idx| idx as u32 + 1)
}

/// Four leading digits not followed by a fifth
fn parse_year(token: &str) -> Option<i32> {
    let bytes = token.as_bytes();
    if bytes.len() < 4 || !bytes[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.get(4).is_some_and(u8::is_ascii_digit) {
        return None;
    }
    token[..4].parse().ok()
}

/// Every four-digit year mentioned anywhere in a duration, in order.
///
/// Longer digit runs are read in consecutive groups of four.
pub fn years_mentioned(duration: &str) -> Vec<i32> {
    let mut years = Vec::new();
    let mut run = String::new();

    for c in duration.chars().chain(std::iter::once(' ')) {
        if c.is_ascii_digit() {
            run.push(c);
            continue;
        }
        for chunk in run.as_bytes().chunks_exact(4) {
            if let Some(year) = std::str::from_utf8(chunk).ok().and_then(|s| s.parse().ok()) {
                years.push(year);
            }
        }
        run.clear();
    }

    years
}
