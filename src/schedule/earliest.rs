//! Earliest available date
//!
//! Scans Week1 then Week2 in date order and reports the first date on
//! which any time slot has a positive score.

use chrono::NaiveDate;

use super::table::parse_date;
use super::types::ScheduleDocument;

/// Shown when no date qualifies or the document is not loaded yet
pub const FALLBACK_EARLIEST_DATE: &str = "Jun 6";

/// Outcome of scanning the document
#[derive(Debug, Clone, PartialEq)]
pub enum EarliestDate {
    /// A qualifying date was found
    Found(NaiveDate),
    /// The first qualifying entry is not a date
    Unparseable(String),
    /// Nothing has availability
    None,
}

/// Find the first date with at least one non-null, positive slot
pub fn find_earliest(doc: &ScheduleDocument) -> EarliestDate {
    for (_, week) in doc.weeks() {
        let Some((dates, slots)) = week.parts() else {
            continue;
        };

        if let Some((_, date)) = dates
            .iter()
            .enumerate()
            .find(|(i, _)| slots.has_availability_at(*i))
        {
            return match parse_date(date) {
                Some(d) => EarliestDate::Found(d),
                None => EarliestDate::Unparseable(date.clone()),
            };
        }
    }

    EarliestDate::None
}

/// Format a date the way the hero stat shows it, e.g. "Jun 3"
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// Hero stat label for the earliest date, falling back to
/// [`FALLBACK_EARLIEST_DATE`]
pub fn earliest_date_label(doc: Option<&ScheduleDocument>) -> String {
    let Some(doc) = doc else {
        return FALLBACK_EARLIEST_DATE.to_string();
    };

    match find_earliest(doc) {
        EarliestDate::Found(date) => format_short_date(date),
        EarliestDate::Unparseable(raw) => {
            tracing::warn!(date = %raw, "Error calculating earliest available date");
            FALLBACK_EARLIEST_DATE.to_string()
        }
        EarliestDate::None => FALLBACK_EARLIEST_DATE.to_string(),
    }
}
