//! HTTP access to the schedule document

mod client;

pub use client::{fetch_schedule, schedule_url};
