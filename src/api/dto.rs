//! Data Transfer Objects
//!
//! Response types for the API endpoints.

use serde::Serialize;

use crate::schedule::{AvailabilityTable, AvailabilityTier};

/// GET /api/availability
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub last_update: String,
    pub legend: Vec<LegendEntry>,
    /// Weeks that have both dates and slots, in document order
    pub weeks: Vec<WeekTable>,
}

#[derive(Debug, Serialize)]
pub struct LegendEntry {
    pub tier: AvailabilityTier,
    pub class: &'static str,
    pub label: &'static str,
}

impl From<AvailabilityTier> for LegendEntry {
    fn from(tier: AvailabilityTier) -> Self {
        Self {
            tier,
            class: tier.css_class(),
            label: tier.label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WeekTable {
    pub title: &'static str,
    pub table: AvailabilityTable,
}

/// GET /api/stats
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub payment: String,
    pub total_participants: String,
    pub time_commitment: String,
    pub earliest_date: String,
    /// False when the earliest date is a fallback because the
    /// schedule could not be read
    pub schedule_loaded: bool,
}

/// GET /health
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub schedule_source: String,
    pub uptime_seconds: u64,
    pub version: String,
}
