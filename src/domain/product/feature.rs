//! Feature value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{FeatureId, ValidationError};

/// Priority at or above which a feature counts as high priority.
pub const HIGH_PRIORITY_THRESHOLD: u8 = 8;

/// Priority at or above which a feature counts as medium priority.
pub const MEDIUM_PRIORITY_THRESHOLD: u8 = 5;

/// Maximum feature priority.
pub const MAX_PRIORITY: u8 = 10;

/// Marketing category a feature is presented under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureCategory {
    ModernStack,
    TypeSafety,
    AccessibleUi,
    ProductionReady,
    DeveloperExperience,
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FeatureCategory::ModernStack => "modern-stack",
            FeatureCategory::TypeSafety => "type-safety",
            FeatureCategory::AccessibleUi => "accessible-ui",
            FeatureCategory::ProductionReady => "production-ready",
            FeatureCategory::DeveloperExperience => "developer-experience",
        };
        write!(f, "{}", s)
    }
}

/// Immutable product feature with display priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    id: FeatureId,
    name: String,
    description: String,
    category: FeatureCategory,
    icon: Option<String>,
    priority: u8,
}

impl Feature {
    /// Creates a validated feature.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or description is blank
    /// - `OutOfRange` if priority exceeds 10
    pub fn new(
        id: FeatureId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: FeatureCategory,
        icon: Option<String>,
        priority: u8,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        if priority > MAX_PRIORITY {
            return Err(ValidationError::out_of_range(
                "priority",
                0,
                MAX_PRIORITY as i32,
                priority as i32,
            ));
        }

        Ok(Self {
            id,
            name,
            description,
            category,
            icon,
            priority,
        })
    }

    /// Returns the feature ID.
    pub fn id(&self) -> &FeatureId {
        &self.id
    }

    /// Returns the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the feature description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the marketing category.
    pub fn category(&self) -> FeatureCategory {
        self.category
    }

    /// Returns the icon identifier, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Returns the display priority (0-10).
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Returns true for priority 8 and above.
    pub fn is_high_priority(&self) -> bool {
        self.priority >= HIGH_PRIORITY_THRESHOLD
    }

    /// Returns true for priority 5 to 7.
    pub fn is_medium_priority(&self) -> bool {
        self.priority >= MEDIUM_PRIORITY_THRESHOLD && self.priority < HIGH_PRIORITY_THRESHOLD
    }

    /// Returns true for priority below 5.
    pub fn is_low_priority(&self) -> bool {
        self.priority < MEDIUM_PRIORITY_THRESHOLD
    }
}
