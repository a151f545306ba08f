//! Stats Routes
//!
//! - GET /api/stats - The four hero figures

use axum::{extract::State, Json};
use chrono::Local;
use std::sync::Arc;

use crate::api::dto::StatsResponse;
use crate::api::state::AppState;
use crate::content::{PAYMENT, TIME_COMMITMENT};
use crate::participants::total_participants_label;
use crate::schedule::earliest_date_label;

/// GET /api/stats
///
/// Always answers. If the schedule cannot be read the earliest date is
/// the fallback, as it is on the page.
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    let doc = match state.source.fetch().await {
        Ok(doc) => Some(doc),
        Err(e) => {
            tracing::warn!("Schedule unavailable for stats: {}", e);
            None
        }
    };

    Json(StatsResponse {
        payment: PAYMENT.to_string(),
        total_participants: total_participants_label(Local::now().date_naive()),
        time_commitment: TIME_COMMITMENT.to_string(),
        earliest_date: earliest_date_label(doc.as_ref()),
        schedule_loaded: doc.is_some(),
    })
}
