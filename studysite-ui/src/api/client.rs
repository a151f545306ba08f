//! Schedule Client
//!
//! One GET against the published schedule document.

use gloo_net::http::Request;
use studysite::schedule::{ScheduleDocument, ScheduleError, DEFAULT_SCHEDULE_URL};

/// Schedule URL, overridable at build time with `STUDYSITE_SCHEDULE_URL`
/// (e.g. `/api/schedule` when served by the studysite server)
pub fn schedule_url() -> &'static str {
    option_env!("STUDYSITE_SCHEDULE_URL").unwrap_or(DEFAULT_SCHEDULE_URL)
}

/// Fetch and parse the schedule document
///
/// Non-2xx responses become [`ScheduleError::Http`]. There is no timeout
/// and no retry; the page offers a reload instead.
pub async fn fetch_schedule() -> Result<ScheduleDocument, ScheduleError> {
    let response = Request::get(schedule_url())
        .send()
        .await
        .map_err(|e| ScheduleError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(ScheduleError::Http {
            status: response.status(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ScheduleError::Transport(e.to_string()))?;

    Ok(serde_json::from_str(&body)?)
}
