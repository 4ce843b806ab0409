//! VisitorRepository port - persistence contract for visitors.
//!
//! Defines how the application stores and retrieves Visitor aggregates.
//! Implementations are responsible for serializing concurrent access per
//! visitor; the domain assumes exclusive ownership during one request.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, SessionKey, Timestamp, VisitorId};
use crate::domain::visitor::Visitor;

/// Aggregated visitor numbers for a reporting window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorStatistics {
    /// Visitors first seen within the window.
    pub total_visitors: usize,

    /// Of those, how many converted.
    pub converted_visitors: usize,

    /// Converted / total, 0.0 when the window is empty.
    pub conversion_rate: f64,

    /// Mean engagement score across the window, 0.0 when empty.
    pub average_engagement_score: f64,
}

/// Repository port for Visitor aggregate persistence.
#[async_trait]
pub trait VisitorRepository: Send + Sync {
    /// Save a visitor (insert or replace).
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn save(&self, visitor: &Visitor) -> Result<(), DomainError>;

    /// Find a visitor by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &VisitorId) -> Result<Option<Visitor>, DomainError>;

    /// Find a visitor by its browser session key.
    ///
    /// Returns `None` if no visitor has been created for the session.
    async fn find_by_session(
        &self,
        session_key: &SessionKey,
    ) -> Result<Option<Visitor>, DomainError>;

    /// Create and persist a fresh anonymous visitor for a session.
    ///
    /// Always succeeds with a generated unique visitor ID.
    async fn create(&self, session_key: SessionKey) -> Result<Visitor, DomainError>;

    /// Visitors that converted within the given window (inclusive).
    async fn converted_between(
        &self,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Visitor>, DomainError>;

    /// Aggregate statistics over visitors first seen within the window.
    async fn statistics(
        &self,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<VisitorStatistics, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn visitor_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn VisitorRepository) {}
    }
}
