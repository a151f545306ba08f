//! Schedule fetch errors

use thiserror::Error;

/// Errors that can occur while fetching the schedule document
///
/// Every variant is shown to visitors the same way: as the message
/// inside the availability error banner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The endpoint answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request never produced a response
    #[error("{0}")]
    Transport(String),

    /// The response body was not a schedule document
    #[error("Invalid schedule data: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ScheduleError {
    fn from(err: serde_json::Error) -> Self {
        ScheduleError::Decode(err.to_string())
    }
}

#[cfg(feature = "server")]
impl From<reqwest::Error> for ScheduleError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ScheduleError::Http {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            ScheduleError::Decode(err.to_string())
        } else {
            ScheduleError::Transport(err.to_string())
        }
    }
}

/// Result type alias for schedule operations
pub type ScheduleResult<T> = Result<T, ScheduleError>;
