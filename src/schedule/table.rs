//! Availability table model
//!
//! Turns one week of the schedule document into rows of display cells.
//! The UI, the API and the CLI all render from this model.

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

use super::tier::AvailabilityTier;
use super::types::{serialize_score, Availability, WeekData};

/// Text shown in a cell with no availability score
pub const UNAVAILABLE_TEXT: &str = "—";

/// Weekday label for a date string that cannot be parsed
pub const INVALID_DATE_TEXT: &str = "Invalid Date";

/// Rendered grid for one week
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityTable {
    pub columns: Vec<DateColumn>,
    pub rows: Vec<SlotRow>,
}

/// Column header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateColumn {
    /// Raw date string from the document
    pub date: String,
    /// Long weekday name, e.g. "Monday"
    pub day_name: String,
}

/// One time slot across all dates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotRow {
    pub label: String,
    pub cells: Vec<SlotCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotCell {
    #[serde(serialize_with = "serialize_score")]
    pub value: Availability,
    pub tier: AvailabilityTier,
    pub text: String,
}

impl AvailabilityTable {
    /// Build the table for a week, or `None` if it lacks dates or slots
    pub fn from_week(week: &WeekData) -> Option<Self> {
        let (dates, slots) = week.parts()?;

        let columns = dates
            .iter()
            .map(|date| DateColumn {
                date: date.clone(),
                day_name: day_name(date),
            })
            .collect();

        let rows = slots
            .iter()
            .map(|(label, values)| SlotRow {
                label: label.to_string(),
                cells: values.iter().copied().map(SlotCell::new).collect(),
            })
            .collect();

        Some(Self { columns, rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}

impl SlotCell {
    pub fn new(value: Availability) -> Self {
        Self {
            value,
            tier: AvailabilityTier::from_value(value),
            text: value
                .map(|v| v.to_string())
                .unwrap_or_else(|| UNAVAILABLE_TEXT.to_string()),
        }
    }

    /// Full class attribute for the `<td>`
    pub fn class(&self) -> String {
        format!("availability-cell {}", self.tier.css_class())
    }
}

/// Parse a schedule date as a calendar date
///
/// Accepts plain `YYYY-MM-DD` as well as full RFC 3339 timestamps, in
/// which case the date part is taken as written.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(date).ok().map(|dt| dt.date_naive()))
}

/// Long en-US weekday name for a schedule date
pub fn day_name(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%A").to_string())
        .unwrap_or_else(|| INVALID_DATE_TEXT.to_string())
}
