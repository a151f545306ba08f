//! Schedule Routes
//!
//! - GET /api/schedule - The schedule document, passed through
//! - GET /api/availability - Rendered tables for each week
//!
//! Both read the upstream on every request.

use axum::{extract::State, Json};
use chrono::Local;
use std::sync::Arc;

use crate::api::dto::{AvailabilityResponse, LegendEntry, WeekTable};
use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::schedule::{AvailabilityTable, AvailabilityTier, ScheduleDocument};

/// GET /api/schedule
pub async fn get_schedule(State(state): State<Arc<AppState>>) -> ApiResult<Json<ScheduleDocument>> {
    let doc = state.source.fetch().await?;
    Ok(Json(doc))
}

/// GET /api/availability
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<AvailabilityResponse>> {
    let doc = state.source.fetch().await?;
    Ok(Json(availability_response(&doc)))
}

fn availability_response(doc: &ScheduleDocument) -> AvailabilityResponse {
    let weeks = doc
        .weeks()
        .filter_map(|(title, week)| {
            AvailabilityTable::from_week(week).map(|table| WeekTable { title, table })
        })
        .collect();

    AvailabilityResponse {
        last_update: doc.last_update_label(&Local::now()),
        legend: AvailabilityTier::ALL.into_iter().map(LegendEntry::from).collect(),
        weeks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{SlotTable, WeekData};

    #[test]
    fn test_incomplete_weeks_omitted() {
        let doc = ScheduleDocument {
            week1: Some(WeekData {
                dates: None,
                slots: Some(SlotTable::new()),
            }),
            week2: Some(WeekData::new(
                vec!["2025-06-09".to_string()],
                SlotTable::new().with("9:00", vec![Some(91.0)]),
            )),
            last_update: Some("noon".to_string()),
        };

        let response = availability_response(&doc);
        assert_eq!(response.last_update, "noon");
        assert_eq!(response.legend.len(), 5);
        assert_eq!(response.weeks.len(), 1);
        assert_eq!(response.weeks[0].title, "Week 2");
        assert_eq!(
            response.weeks[0].table.rows[0].cells[0].tier,
            AvailabilityTier::High
        );
    }
}
