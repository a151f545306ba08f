//! Schedule
//!
//! The availability schedule published by the testing facility and
//! everything derived from it.
//!
//! ## Architecture
//!
//! - **types**: the JSON document (`Week1`, `Week2`, `lastUpdate`)
//! - **tier**: score to severity tier mapping
//! - **table**: per-week grid of display cells
//! - **earliest**: first date with an open slot
//! - **state**: loading / failed / loaded lifecycle
//!
//! None of these modules perform I/O, so they compile for the browser
//! bundle as well as the server.

mod earliest;
mod error;
mod state;
mod table;
mod tier;
mod types;

pub use earliest::{
    earliest_date_label, find_earliest, format_short_date, EarliestDate, FALLBACK_EARLIEST_DATE,
};
pub use error::{ScheduleError, ScheduleResult};
pub use state::{error_banner, ScheduleState};
pub use table::{
    day_name, parse_date, AvailabilityTable, DateColumn, SlotCell, SlotRow, INVALID_DATE_TEXT,
    UNAVAILABLE_TEXT,
};
pub use tier::AvailabilityTier;
pub use types::{Availability, ScheduleDocument, SlotTable, WeekData};

/// Where the schedule document is published
pub const DEFAULT_SCHEDULE_URL: &str = "https://data.utestny150.com/schedule.json";

/// Parse a schedule document from a JSON string
pub fn parse_document(json: &str) -> ScheduleResult<ScheduleDocument> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_week_skipped_not_fatal() {
        let doc = parse_document(
            r#"{
                "Week1": "tbd",
                "Week2": {"dates": ["2025-06-09", "2025-06-10"], "slots": {"9:00": [null, 45.5]}}
            }"#,
        )
        .unwrap();

        let tables: Vec<_> = doc
            .weeks()
            .filter_map(|(title, week)| AvailabilityTable::from_week(week).map(|t| (title, t)))
            .collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].0, "Week 2");
        assert_eq!(tables[0].1.rows[0].cells[1].text, "45.5");

        assert_eq!(earliest_date_label(Some(&doc)), "Jun 10");
    }

    #[test]
    fn test_non_object_document_is_an_error() {
        assert!(matches!(parse_document("\"closed\""), Err(ScheduleError::Decode(_))));
        assert!(matches!(parse_document("{\"Week1\": "), Err(ScheduleError::Decode(_))));
    }
}
