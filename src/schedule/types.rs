//! Schedule document types
//!
//! The JSON payload published by the facility: up to two weeks of date
//! columns, each with per-time-slot availability rows.

use chrono::{DateTime, TimeZone};
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Availability score for a single slot. `None` means unavailable.
///
/// Published scores are whole numbers but nothing enforces it, so a
/// fractional score is kept as is.
pub type Availability = Option<f64>;

/// The whole schedule document as fetched from the data endpoint
///
/// Every field is read leniently: a week (or a week's `dates`/`slots`)
/// with an unusable shape is treated as absent instead of failing the
/// whole document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    #[serde(
        rename = "Week1",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub week1: Option<WeekData>,

    #[serde(
        rename = "Week2",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub week2: Option<WeekData>,

    #[serde(
        rename = "lastUpdate",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_update: Option<String>,
}

/// One week of the schedule
///
/// Both fields are optional in the wire format. A week missing either
/// one is not rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeekData {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<String>>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub slots: Option<SlotTable>,
}

/// Read an optional field, mapping `null` or any shape `T` rejects to `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Score from one slot entry. Anything but a number is unavailable.
fn score(value: &Value) -> Availability {
    value.as_f64()
}

/// Write a score back out, whole numbers as integers the way they are
/// published
pub(crate) fn serialize_score<S: Serializer>(
    value: &Availability,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match *value {
        Some(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => {
            serializer.serialize_i64(v as i64)
        }
        Some(v) => serializer.serialize_f64(v),
        None => serializer.serialize_none(),
    }
}

struct Score(Availability);

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_score(&self.0, serializer)
    }
}

/// Time-slot label to per-date availability, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotTable {
    rows: Vec<(String, Vec<Availability>)>,
}

impl ScheduleDocument {
    /// Weeks in scan order, paired with their display titles
    pub fn weeks(&self) -> impl Iterator<Item = (&'static str, &WeekData)> {
        [("Week 1", self.week1.as_ref()), ("Week 2", self.week2.as_ref())]
            .into_iter()
            .filter_map(|(title, week)| week.map(|w| (title, w)))
    }

    /// Label shown next to each table
    ///
    /// Uses `lastUpdate` verbatim; otherwise the date of `now` with the
    /// facility's default publishing time.
    pub fn last_update_label<Tz>(&self, now: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        match &self.last_update {
            Some(label) => label.clone(),
            None => format!("{} 1:48 pm NY time", now.format("%-m/%-d/%Y")),
        }
    }
}

impl WeekData {
    pub fn new(dates: Vec<String>, slots: SlotTable) -> Self {
        Self {
            dates: Some(dates),
            slots: Some(slots),
        }
    }

    /// Dates and slots together, or `None` when either is missing
    pub fn parts(&self) -> Option<(&[String], &SlotTable)> {
        Some((self.dates.as_deref()?, self.slots.as_ref()?))
    }
}

impl SlotTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row. A repeated label replaces the earlier row in place.
    pub fn insert(&mut self, label: impl Into<String>, values: Vec<Availability>) {
        let label = label.into();
        match self.rows.iter_mut().find(|(l, _)| *l == label) {
            Some(row) => row.1 = values,
            None => self.rows.push((label, values)),
        }
    }

    pub fn with(mut self, label: impl Into<String>, values: Vec<Availability>) -> Self {
        self.insert(label, values);
        self
    }

    pub fn get(&self, label: &str) -> Option<&[Availability]> {
        self.rows
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| v.as_slice())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Availability])> {
        self.rows.iter().map(|(l, v)| (l.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether any slot has a positive score at the given date index.
    /// Rows shorter than the index count as unavailable.
    pub fn has_availability_at(&self, index: usize) -> bool {
        self.rows
            .iter()
            .any(|(_, values)| matches!(values.get(index), Some(Some(v)) if *v > 0.0))
    }
}

impl Serialize for SlotTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (label, values) in &self.rows {
            let scores: Vec<Score> = values.iter().copied().map(Score).collect();
            map.serialize_entry(label, &scores)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for SlotTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SlotTableVisitor;

        impl<'de> Visitor<'de> for SlotTableVisitor {
            type Value = SlotTable;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of time-slot labels to availability arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<SlotTable, A::Error> {
                let mut table = SlotTable::new();
                while let Some((label, values)) = access.next_entry::<String, Vec<Value>>()? {
                    table.insert(label, values.iter().map(score).collect());
                }
                Ok(table)
            }
        }

        deserializer.deserialize_map(SlotTableVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "Week1": {
                "dates": ["2025-06-02", "2025-06-03"],
                "slots": {"9:00": [null, 45], "13:00": [100, 0]}
            },
            "lastUpdate": "6/1/2025 9:00 am NY time"
        }"#;

        let doc: ScheduleDocument = serde_json::from_str(json).unwrap();
        let week = doc.week1.as_ref().unwrap();
        let (dates, slots) = week.parts().unwrap();

        assert_eq!(dates, ["2025-06-02", "2025-06-03"]);
        assert_eq!(slots.get("9:00"), Some(&[None, Some(45.0)][..]));
        assert_eq!(slots.get("13:00"), Some(&[Some(100.0), Some(0.0)][..]));
        assert!(doc.week2.is_none());
        assert_eq!(doc.last_update.as_deref(), Some("6/1/2025 9:00 am NY time"));
    }

    #[test]
    fn test_slot_order_preserved() {
        let json = r#"{"17:00": [], "9:00": [], "13:00": []}"#;
        let slots: SlotTable = serde_json::from_str(json).unwrap();
        let labels: Vec<_> = slots.labels().collect();
        assert_eq!(labels, vec!["17:00", "9:00", "13:00"]);

        let back = serde_json::to_string(&slots).unwrap();
        assert_eq!(back, r#"{"17:00":[],"9:00":[],"13:00":[]}"#);
    }

    #[test]
    fn test_missing_parts() {
        let doc: ScheduleDocument =
            serde_json::from_str(r#"{"Week1": {"dates": ["2025-06-02"]}, "Week2": null}"#).unwrap();
        assert!(doc.week1.as_ref().unwrap().parts().is_none());
        assert!(doc.week2.is_none());
        assert_eq!(doc.weeks().count(), 1);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let doc: ScheduleDocument =
            serde_json::from_str(r#"{"Week3": {}, "version": 2}"#).unwrap();
        assert_eq!(doc, ScheduleDocument::default());
    }

    #[test]
    fn test_malformed_week_is_absent() {
        let json = r#"{
            "Week1": "tbd",
            "Week2": {"dates": ["2025-06-09", "2025-06-10"], "slots": {"9:00": [null, 60]}}
        }"#;

        let doc: ScheduleDocument = serde_json::from_str(json).unwrap();
        assert!(doc.week1.is_none());
        assert_eq!(doc.weeks().count(), 1);
        assert!(doc.week2.as_ref().unwrap().parts().is_some());
    }

    #[test]
    fn test_malformed_week_parts_are_absent() {
        let json = r#"{
            "Week1": {"dates": [20250602], "slots": {"9:00": [50]}},
            "Week2": {"dates": ["2025-06-09"], "slots": "closed"},
            "lastUpdate": 42
        }"#;

        let doc: ScheduleDocument = serde_json::from_str(json).unwrap();
        let week1 = doc.week1.as_ref().unwrap();
        assert!(week1.dates.is_none());
        assert!(week1.slots.is_some());
        assert!(doc.week2.as_ref().unwrap().slots.is_none());
        assert!(doc.last_update.is_none());
    }

    #[test]
    fn test_scores_read_leniently() {
        let json = r#"{"9:00": [45.5, 80, null, "n/a", true]}"#;
        let slots: SlotTable = serde_json::from_str(json).unwrap();
        assert_eq!(slots.get("9:00"), Some(&[Some(45.5), Some(80.0), None, None, None][..]));

        let back = serde_json::to_string(&slots).unwrap();
        assert_eq!(back, r#"{"9:00":[45.5,80,null,null,null]}"#);
    }

    #[test]
    fn test_has_availability_at() {
        let slots = SlotTable::new()
            .with("9:00", vec![None, Some(0.0), Some(10.0)])
            .with("10:00", vec![None, None]);

        assert!(!slots.has_availability_at(0));
        assert!(!slots.has_availability_at(1));
        assert!(slots.has_availability_at(2));
        assert!(!slots.has_availability_at(5));
    }

    #[test]
    fn test_last_update_label() {
        let now = Utc.with_ymd_and_hms(2025, 6, 4, 15, 0, 0).unwrap();

        let doc = ScheduleDocument::default();
        assert_eq!(doc.last_update_label(&now), "6/4/2025 1:48 pm NY time");

        let doc = ScheduleDocument {
            last_update: Some("yesterday".to_string()),
            ..Default::default()
        };
        assert_eq!(doc.last_update_label(&now), "yesterday");
    }
}
