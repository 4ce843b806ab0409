//! VisitorStatus enum for tracking the visitor lifecycle.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a landing page visitor.
///
/// Valid transitions:
/// - Anonymous -> Engaged (qualifying engagement event)
/// - Anonymous -> Bounced (explicit bounce)
/// - Anonymous | Engaged -> Converted (contact info submitted)
///
/// Converted and Bounced are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VisitorStatus {
    #[default]
    Anonymous,
    Engaged,
    Converted,
    Bounced,
}

impl VisitorStatus {
    /// Validates a transition from this status to another.
    pub fn can_transition_to(&self, target: &VisitorStatus) -> bool {
        use VisitorStatus::*;
        matches!(
            (self, target),
            (Anonymous, Engaged) | (Anonymous, Bounced) | (Anonymous, Converted) | (Engaged, Converted)
        )
    }

    /// Returns true if no further transitions are allowed.
    pub fn is_terminal(&self) -> bool {
        matches!(self, VisitorStatus::Converted | VisitorStatus::Bounced)
    }
}

impl fmt::Display for VisitorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VisitorStatus::Anonymous => "Anonymous",
            VisitorStatus::Engaged => "Engaged",
            VisitorStatus::Converted => "Converted",
            VisitorStatus::Bounced => "Bounced",
        };
        write!(f, "{}", s)
    }
}
