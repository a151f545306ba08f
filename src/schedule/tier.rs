//! Availability severity tiers
//!
//! Maps a slot score to one of five display tiers:
//!
//! | Score        | Tier          |
//! |--------------|---------------|
//! | `null`       | unavailable   |
//! | 90 and above | high          |
//! | 70 - 89      | medium        |
//! | 50 - 69      | low           |
//! | below 50     | very low      |

use serde::{Deserialize, Serialize};
use std::fmt;

use super::types::Availability;

/// Display tier derived from an availability score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityTier {
    High,
    Medium,
    Low,
    VeryLow,
    Unavailable,
}

impl AvailabilityTier {
    /// All tiers in legend order
    pub const ALL: [AvailabilityTier; 5] = [
        AvailabilityTier::High,
        AvailabilityTier::Medium,
        AvailabilityTier::Low,
        AvailabilityTier::VeryLow,
        AvailabilityTier::Unavailable,
    ];

    pub fn from_value(value: Availability) -> Self {
        match value {
            None => AvailabilityTier::Unavailable,
            Some(v) if v >= 90.0 => AvailabilityTier::High,
            Some(v) if v >= 70.0 => AvailabilityTier::Medium,
            Some(v) if v >= 50.0 => AvailabilityTier::Low,
            Some(_) => AvailabilityTier::VeryLow,
        }
    }

    /// Stylesheet class for cells and legend swatches
    pub fn css_class(&self) -> &'static str {
        match self {
            AvailabilityTier::High => "high-availability",
            AvailabilityTier::Medium => "medium-availability",
            AvailabilityTier::Low => "low-availability",
            AvailabilityTier::VeryLow => "very-low-availability",
            AvailabilityTier::Unavailable => "unavailable",
        }
    }

    /// Legend text
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityTier::High => "High Availability (90+)",
            AvailabilityTier::Medium => "Medium Availability (70-89)",
            AvailabilityTier::Low => "Low Availability (50-69)",
            AvailabilityTier::VeryLow => "Very Low Availability (<50)",
            AvailabilityTier::Unavailable => "Unavailable",
        }
    }

    /// Single-character marker for terminal output
    pub fn marker(&self) -> char {
        match self {
            AvailabilityTier::High => '+',
            AvailabilityTier::Medium => '~',
            AvailabilityTier::Low => '-',
            AvailabilityTier::VeryLow => '!',
            AvailabilityTier::Unavailable => ' ',
        }
    }
}

impl fmt::Display for AvailabilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}
