//! ProductRepository port - access to the showcased product.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ProductId};
use crate::domain::product::{Feature, FeatureCategory, Product};

/// Repository port for Product data access.
///
/// Landing pages showcase one primary product; `product()` returns it
/// without requiring the caller to know its ID.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// The primary product being showcased.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` if no product has been configured
    async fn product(&self) -> Result<Product, DomainError>;

    /// Find a product by ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, DomainError>;

    /// All features of the primary product.
    async fn all_features(&self) -> Result<Vec<Feature>, DomainError>;

    /// Features of the primary product in the given category.
    async fn features_by_category(
        &self,
        category: FeatureCategory,
    ) -> Result<Vec<Feature>, DomainError>;

    /// Featured (high-priority) features, highest priority first.
    async fn featured_features(&self) -> Result<Vec<Feature>, DomainError>;

    /// Replace the stored product.
    ///
    /// # Errors
    ///
    /// - `StorageError` on persistence failure
    async fn update(&self, product: &Product) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn ProductRepository) {}
    }
}
