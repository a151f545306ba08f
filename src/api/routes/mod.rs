//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod schedule;
pub mod stats;
