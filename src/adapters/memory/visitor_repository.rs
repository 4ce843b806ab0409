//! In-memory visitor repository.
//!
//! HashMap-backed implementation of `VisitorRepository` for development and
//! testing. Updates are last-writer-wins; serializing concurrent access per
//! visitor is left to the calling layer.
//!
//! # Panics
//!
//! Methods panic if internal locks are poisoned. Acceptable for an
//! in-memory store; a production deployment would swap in a database
//! adapter behind the same port.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionKey, Timestamp, VisitorId};
use crate::domain::visitor::Visitor;
use crate::ports::{VisitorRepository, VisitorStatistics};

/// In-memory visitor store with a session index.
pub struct InMemoryVisitorRepository {
    visitors: RwLock<HashMap<VisitorId, Visitor>>,
    session_index: RwLock<HashMap<SessionKey, VisitorId>>,
}

impl InMemoryVisitorRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            visitors: RwLock::new(HashMap::new()),
            session_index: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the number of stored visitors (for test assertions).
    pub fn visitor_count(&self) -> usize {
        self.visitors
            .read()
            .expect("InMemoryVisitorRepository: visitors lock poisoned")
            .len()
    }
}

impl Default for InMemoryVisitorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VisitorRepository for InMemoryVisitorRepository {
    async fn save(&self, visitor: &Visitor) -> Result<(), DomainError> {
        self.visitors
            .write()
            .expect("InMemoryVisitorRepository: visitors lock poisoned")
            .insert(visitor.id().clone(), visitor.clone());
        self.session_index
            .write()
            .expect("InMemoryVisitorRepository: session index lock poisoned")
            .insert(visitor.session_key().clone(), visitor.id().clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &VisitorId) -> Result<Option<Visitor>, DomainError> {
        Ok(self
            .visitors
            .read()
            .expect("InMemoryVisitorRepository: visitors lock poisoned")
            .get(id)
            .cloned())
    }

    async fn find_by_session(
        &self,
        session_key: &SessionKey,
    ) -> Result<Option<Visitor>, DomainError> {
        let visitor_id = {
            let index = self
                .session_index
                .read()
                .expect("InMemoryVisitorRepository: session index lock poisoned");
            index.get(session_key).cloned()
        };

        match visitor_id {
            Some(id) => self.find_by_id(&id).await,
            None => Ok(None),
        }
    }

    async fn create(&self, session_key: SessionKey) -> Result<Visitor, DomainError> {
        let visitor = Visitor::new(VisitorId::generate(), session_key);
        self.save(&visitor).await?;
        Ok(visitor)
    }

    async fn converted_between(
        &self,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<Vec<Visitor>, DomainError> {
        let visitors = self
            .visitors
            .read()
            .expect("InMemoryVisitorRepository: visitors lock poisoned");

        Ok(visitors
            .values()
            .filter(|visitor| {
                visitor.converted_at().is_some_and(|converted| {
                    converted >= &from && converted <= &to
                })
            })
            .cloned()
            .collect())
    }

    async fn statistics(
        &self,
        from: Timestamp,
        to: Timestamp,
    ) -> Result<VisitorStatistics, DomainError> {
        let visitors = self
            .visitors
            .read()
            .expect("InMemoryVisitorRepository: visitors lock poisoned");

        let in_range: Vec<&Visitor> = visitors
            .values()
            .filter(|visitor| {
                visitor.first_visit_at() >= &from && visitor.first_visit_at() <= &to
            })
            .collect();

        let total_visitors = in_range.len();
        let converted_visitors = in_range.iter().filter(|v| v.is_converted()).count();
        let (conversion_rate, average_engagement_score) = if total_visitors > 0 {
            let score_sum: u32 = in_range
                .iter()
                .map(|v| v.engagement_score().value() as u32)
                .sum();
            (
                converted_visitors as f64 / total_visitors as f64,
                score_sum as f64 / total_visitors as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Ok(VisitorStatistics {
            total_visitors,
            converted_visitors,
            conversion_rate,
            average_engagement_score,
        })
    }
}
