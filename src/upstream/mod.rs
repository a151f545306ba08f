//! Schedule Upstream
//!
//! Where the server reads the schedule document from.
//!
//! - **HttpScheduleSource**: GET against the published URL
//! - **FileScheduleSource**: a local JSON file, for offline development
//!
//! Every call reads the document fresh. There is no cache and no retry:
//! a failure is reported to the caller as-is.

mod client;
mod file;

pub use client::HttpScheduleSource;
pub use file::FileScheduleSource;

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::ScheduleConfig;
use crate::schedule::{ScheduleDocument, ScheduleResult};

/// A provider of the schedule document
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Human-readable origin, for logs and health output
    fn describe(&self) -> String;

    /// Read the current document
    async fn fetch(&self) -> ScheduleResult<ScheduleDocument>;
}

/// Build the source selected by configuration
///
/// A configured `file` wins over `url`.
pub fn from_config(config: &ScheduleConfig) -> ScheduleResult<Arc<dyn ScheduleSource>> {
    match &config.file {
        Some(path) => {
            tracing::info!("Serving schedule from file {:?}", path);
            Ok(Arc::new(FileScheduleSource::new(path.clone())))
        }
        None => {
            tracing::info!("Serving schedule from {}", config.url);
            Ok(Arc::new(HttpScheduleSource::new(
                config.url.clone(),
                config.request_timeout_ms,
            )?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_file_wins_over_url() {
        let config = ScheduleConfig {
            file: Some(PathBuf::from("schedule.json")),
            ..Default::default()
        };
        let source = from_config(&config).unwrap();
        assert_eq!(source.describe(), "file:schedule.json");
    }

    #[test]
    fn test_default_is_http() {
        let source = from_config(&ScheduleConfig::default()).unwrap();
        assert_eq!(source.describe(), crate::schedule::DEFAULT_SCHEDULE_URL);
    }
}
