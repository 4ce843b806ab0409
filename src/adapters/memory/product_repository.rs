//! In-memory product repository.
//!
//! Holds the single showcased product, seeded at construction from
//! configuration or a caller-provided aggregate.

use async_trait::async_trait;
use std::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, ProductId};
use crate::domain::product::{Feature, FeatureCategory, Product};
use crate::ports::ProductRepository;

/// In-memory store for the showcased product.
pub struct InMemoryProductRepository {
    product: RwLock<Option<Product>>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository (no product configured).
    pub fn new() -> Self {
        Self {
            product: RwLock::new(None),
        }
    }

    /// Creates a repository seeded with the given product.
    pub fn seeded(product: Product) -> Self {
        Self {
            product: RwLock::new(Some(product)),
        }
    }

    fn stored(&self) -> Result<Product, DomainError> {
        self.product
            .read()
            .expect("InMemoryProductRepository: product lock poisoned")
            .clone()
            .ok_or_else(|| {
                DomainError::new(ErrorCode::ProductNotFound, "No product has been configured")
            })
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn product(&self) -> Result<Product, DomainError> {
        self.stored()
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError> {
        Ok(self
            .product
            .read()
            .expect("InMemoryProductRepository: product lock poisoned")
            .clone()
            .filter(|product| product.id() == id))
    }

    async fn all_features(&self) -> Result<Vec<Feature>, DomainError> {
        Ok(self.stored()?.features().to_vec())
    }

    async fn features_by_category(
        &self,
        category: FeatureCategory,
    ) -> Result<Vec<Feature>, DomainError> {
        Ok(self
            .stored()?
            .features_by_category(category)
            .into_iter()
            .cloned()
            .collect())
    }

    async fn featured_features(&self) -> Result<Vec<Feature>, DomainError> {
        Ok(self
            .stored()?
            .featured_features()
            .into_iter()
            .cloned()
            .collect())
    }

    async fn update(&self, product: &Product) -> Result<(), DomainError> {
        *self
            .product
            .write()
            .expect("InMemoryProductRepository: product lock poisoned") = Some(product.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::FeatureId;

    fn feature(id: &str, category: FeatureCategory, priority: u8) -> Feature {
        Feature::new(
            FeatureId::new(id).unwrap(),
            format!("Feature {}", id),
            "A feature",
            category,
            None,
            priority,
        )
        .unwrap()
    }

    fn test_product() -> Product {
        Product::new(
            ProductId::new("p-1").unwrap(),
            "Launchpad",
            "Production-ready starter template",
            "1.0.0",
            vec![
                feature("f-1", FeatureCategory::ModernStack, 9),
                feature("f-2", FeatureCategory::TypeSafety, 4),
            ],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn empty_repository_reports_product_not_found() {
        let repo = InMemoryProductRepository::new();
        let err = repo.product().await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ProductNotFound);
    }

    #[tokio::test]
    async fn seeded_repository_returns_product() {
        let repo = InMemoryProductRepository::seeded(test_product());
        let product = repo.product().await.unwrap();
        assert_eq!(product.name(), "Launchpad");
    }

    #[tokio::test]
    async fn find_by_id_matches_only_stored_id() {
        let repo = InMemoryProductRepository::seeded(test_product());

        assert!(repo
            .find_by_id(&ProductId::new("p-1").unwrap())
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_by_id(&ProductId::new("other").unwrap())
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn feature_queries_delegate_to_product() {
        let repo = InMemoryProductRepository::seeded(test_product());

        assert_eq!(repo.all_features().await.unwrap().len(), 2);
        assert_eq!(
            repo.features_by_category(FeatureCategory::ModernStack)
                .await
                .unwrap()
                .len(),
            1
        );

        let featured = repo.featured_features().await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id().as_str(), "f-1");
    }

    #[tokio::test]
    async fn update_replaces_stored_product() {
        let repo = InMemoryProductRepository::new();
        repo.update(&test_product()).await.unwrap();
        assert_eq!(repo.product().await.unwrap().name(), "Launchpad");
    }
}
