//! # Studysite
//!
//! Recruitment site for the in-person wearable tech testing study in
//! Midtown Manhattan.
//!
//! ## Modules
//!
//! - [`schedule`]: the published availability document, severity tiers,
//!   per-week tables and the earliest open date
//! - [`participants`]: the hero's participants counter
//! - [`content`]: fixed page copy and carousel paging
//! - [`config`]: TOML + environment configuration (`server` feature)
//! - [`upstream`]: where the server reads the schedule from (`server` feature)
//! - [`api`]: HTTP server with Axum (`server` feature)
//!
//! The first three modules do no I/O and build for `wasm32`, which is how
//! the `studysite-ui` bundle shares them.
//!
//! ## Quick Start
//!
//! ```rust
//! use studysite::schedule::{earliest_date_label, parse_document, AvailabilityTable};
//!
//! let doc = parse_document(
//!     r#"{"Week1": {"dates": ["2025-06-02", "2025-06-03"], "slots": {"9:00": [null, 45]}}}"#,
//! ).unwrap();
//!
//! let table = AvailabilityTable::from_week(doc.week1.as_ref().unwrap()).unwrap();
//! assert_eq!(table.rows[0].cells[1].class(), "availability-cell very-low-availability");
//! assert_eq!(earliest_date_label(Some(&doc)), "Jun 3");
//! ```

pub mod content;
pub mod participants;
pub mod schedule;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod upstream;

// Re-export top-level types for convenience
pub use schedule::{
    AvailabilityTable, AvailabilityTier, ScheduleDocument, ScheduleError, ScheduleResult,
    ScheduleState, WeekData,
};

pub use participants::total_participants_label;

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{
    Config, ConfigError, ConfigSearch, LoggingConfig, ScheduleConfig, ServerConfig,
};

#[cfg(feature = "server")]
pub use upstream::{FileScheduleSource, HttpScheduleSource, ScheduleSource};
