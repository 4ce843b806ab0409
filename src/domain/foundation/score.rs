//! EngagementScore value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A bounded engagement score between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EngagementScore(u8);

impl EngagementScore {
    /// Zero engagement.
    pub const ZERO: Self = Self(0);

    /// Maximum engagement.
    pub const MAX: Self = Self(100);

    /// Creates a new EngagementScore, clamping to valid range.
    pub fn new(value: u32) -> Self {
        Self(value.min(100) as u8)
    }

    /// Creates an EngagementScore, returning error if out of range.
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "engagement_score",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for EngagementScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for EngagementScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
