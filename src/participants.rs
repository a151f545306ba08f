//! Participants counter
//!
//! The hero's "Participants Till Date" figure. It grows by
//! `day_of_month % 6` for every calendar day since the project started,
//! then doubles. A display counter only; it does not count real visits.

use chrono::{Datelike, NaiveDate};

/// Shown if the count cannot be computed
pub const FALLBACK_PARTICIPANTS: &str = "750+";

/// First day of the study
pub fn project_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, 1).unwrap_or(NaiveDate::MIN)
}

/// Count from `start` up to and including `today`
///
/// Returns `None` only if date arithmetic overflows. A `today` before
/// `start` counts zero days.
pub fn count_participants(start: NaiveDate, today: NaiveDate) -> Option<u64> {
    let mut total: u64 = 0;
    let mut current = start;

    while current <= today {
        total = total.checked_add(u64::from(current.day() % 6))?;
        if current == today {
            break;
        }
        current = current.succ_opt()?;
    }

    total.checked_mul(2)
}

/// Hero stat label for `today`, e.g. "1,482"
pub fn total_participants_label(today: NaiveDate) -> String {
    match count_participants(project_start(), today) {
        Some(total) => format_thousands(total),
        None => {
            tracing::warn!(%today, "Error calculating total participants");
            FALLBACK_PARTICIPANTS.to_string()
        }
    }
}

/// Group digits in threes with commas
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_days() {
        let start = project_start();
        // Aug 1 -> 1
        assert_eq!(count_participants(start, date(2024, 8, 1)), Some(2));
        // Aug 1..=6 -> 1+2+3+4+5+0
        assert_eq!(count_participants(start, date(2024, 8, 6)), Some(30));
        // Aug 7 -> +1
        assert_eq!(count_participants(start, date(2024, 8, 7)), Some(32));
    }

    #[test]
    fn test_full_month() {
        // August has 31 days: five full cycles of 15 plus day 31 (31 % 6 = 1)
        let total = count_participants(project_start(), date(2024, 8, 31));
        assert_eq!(total, Some((5 * 15 + 1) * 2));
    }

    #[test]
    fn test_before_start_is_zero() {
        assert_eq!(count_participants(project_start(), date(2024, 7, 31)), Some(0));
        assert_eq!(total_participants_label(date(2020, 1, 1)), "0");
    }

    #[test]
    fn test_non_decreasing() {
        let mut day = date(2024, 7, 20);
        let mut previous = 0;
        for _ in 0..800 {
            let total = count_participants(project_start(), day).unwrap();
            assert!(total >= previous, "count dropped on {}", day);
            previous = total;
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_last_representable_day() {
        let total = count_participants(NaiveDate::MAX, NaiveDate::MAX);
        assert_eq!(total, Some(u64::from(NaiveDate::MAX.day() % 6) * 2));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(1234567), "1,234,567");
        assert_eq!(format_thousands(100000), "100,000");
    }

    #[test]
    fn test_label_has_separator() {
        // Well over a thousand by mid 2025
        let label = total_participants_label(date(2025, 6, 1));
        assert!(label.contains(','), "label {}", label);
    }
}
