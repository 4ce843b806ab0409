//! Product aggregate entity.
//!
//! The product being marketed on the landing page, with the feature list
//! shown to visitors.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, FeatureId, ProductId, Timestamp, ValidationError,
};
use crate::domain::product::{Feature, FeatureCategory};

static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("version pattern is valid"));

/// Product aggregate - the offering showcased on the landing page.
///
/// # Invariants
///
/// - `name` and `description` are non-empty
/// - `version` follows semantic versioning (`x.y.z`)
/// - feature IDs are unique within the product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    version: String,
    created_at: Timestamp,
    features: Vec<Feature>,
}

impl Product {
    /// Creates a new product.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name or description is blank
    /// - `InvalidFormat` if version is not `x.y.z`
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        version: impl Into<String>,
        features: Vec<Feature>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let description = description.into();
        let version = version.into();

        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if description.trim().is_empty() {
            return Err(ValidationError::empty_field("description"));
        }
        if !VERSION_PATTERN.is_match(&version) {
            return Err(ValidationError::invalid_format(
                "version",
                "expected semantic version (x.y.z)",
            ));
        }

        Ok(Self {
            id,
            name,
            description,
            version,
            created_at: Timestamp::now(),
            features,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the product ID.
    pub fn id(&self) -> &ProductId {
        &self.id
    }

    /// Returns the product name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the product description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the semantic version string.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns when the product record was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns all features in insertion order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a feature to the product.
    ///
    /// # Errors
    ///
    /// - `DuplicateFeature` if a feature with the same ID already exists
    pub fn add_feature(&mut self, feature: Feature) -> Result<(), DomainError> {
        if self.has_feature(feature.id()) {
            return Err(DomainError::new(
                ErrorCode::DuplicateFeature,
                format!("Feature with id {} already exists", feature.id()),
            ));
        }
        self.features.push(feature);
        Ok(())
    }

    /// Removes a feature by ID.
    ///
    /// # Errors
    ///
    /// - `FeatureNotFound` if no feature has the given ID
    pub fn remove_feature(&mut self, feature_id: &FeatureId) -> Result<Feature, DomainError> {
        let index = self
            .features
            .iter()
            .position(|f| f.id() == feature_id)
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::FeatureNotFound,
                    format!("Feature with id {} not found", feature_id),
                )
            })?;
        Ok(self.features.remove(index))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns true if a feature with the given ID exists.
    pub fn has_feature(&self, feature_id: &FeatureId) -> bool {
        self.features.iter().any(|f| f.id() == feature_id)
    }

    /// Returns the feature with the given ID, if present.
    pub fn feature(&self, feature_id: &FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| f.id() == feature_id)
    }

    /// Returns the features in the given category.
    pub fn features_by_category(&self, category: FeatureCategory) -> Vec<&Feature> {
        self.features
            .iter()
            .filter(|f| f.category() == category)
            .collect()
    }

    /// Returns high-priority features, highest priority first.
    pub fn featured_features(&self) -> Vec<&Feature> {
        let mut featured: Vec<&Feature> = self
            .features
            .iter()
            .filter(|f| f.is_high_priority())
            .collect();
        featured.sort_by(|a, b| b.priority().cmp(&a.priority()));
        featured
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
            "1.2.3",
            Vec::new(),
        )
        .unwrap()
    }

    // Construction tests

    #[test]
    fn new_product_rejects_blank_name() {
        let result = Product::new(
            ProductId::new("p-1").unwrap(),
            " ",
            "desc",
            "1.0.0",
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_product_rejects_blank_description() {
        let result = Product::new(
            ProductId::new("p-1").unwrap(),
            "name",
            "",
            "1.0.0",
            Vec::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn new_product_rejects_non_semver_version() {
        for version in ["1.0", "v1.0.0", "1.0.0-beta", "one.two.three"] {
            let result = Product::new(
                ProductId::new("p-1").unwrap(),
                "name",
                "desc",
                version,
                Vec::new(),
            );
            assert!(result.is_err(), "expected rejection for {:?}", version);
        }
    }

    #[test]
    fn new_product_accepts_semver_version() {
        assert_eq!(test_product().version(), "1.2.3");
    }

    // Feature management tests

    #[test]
    fn add_feature_appends() {
        let mut product = test_product();
        product
            .add_feature(feature("f-1", FeatureCategory::ModernStack, 5))
            .unwrap();
        assert_eq!(product.features().len(), 1);
        assert!(product.has_feature(&FeatureId::new("f-1").unwrap()));
    }

    #[test]
    fn add_duplicate_feature_fails() {
        let mut product = test_product();
        product
            .add_feature(feature("f-1", FeatureCategory::ModernStack, 5))
            .unwrap();

        let err = product
            .add_feature(feature("f-1", FeatureCategory::TypeSafety, 7))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateFeature);
    }

    #[test]
    fn remove_feature_returns_removed() {
        let mut product = test_product();
        product
            .add_feature(feature("f-1", FeatureCategory::ModernStack, 5))
            .unwrap();

        let removed = product
            .remove_feature(&FeatureId::new("f-1").unwrap())
            .unwrap();
        assert_eq!(removed.id().as_str(), "f-1");
        assert!(product.features().is_empty());
    }

    #[test]
    fn remove_missing_feature_fails() {
        let mut product = test_product();
        let err = product
            .remove_feature(&FeatureId::new("nope").unwrap())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::FeatureNotFound);
    }

    // Query tests

    #[test]
    fn features_by_category_filters() {
        let mut product = test_product();
        product
            .add_feature(feature("f-1", FeatureCategory::ModernStack, 5))
            .unwrap();
        product
            .add_feature(feature("f-2", FeatureCategory::TypeSafety, 6))
            .unwrap();
        product
            .add_feature(feature("f-3", FeatureCategory::ModernStack, 7))
            .unwrap();

        let modern = product.features_by_category(FeatureCategory::ModernStack);
        assert_eq!(modern.len(), 2);
    }

    #[test]
    fn featured_features_are_high_priority_sorted_desc() {
        let mut product = test_product();
        product
            .add_feature(feature("f-low", FeatureCategory::ModernStack, 3))
            .unwrap();
        product
            .add_feature(feature("f-high", FeatureCategory::TypeSafety, 8))
            .unwrap();
        product
            .add_feature(feature("f-top", FeatureCategory::ProductionReady, 10))
            .unwrap();

        let featured = product.featured_features();
        assert_eq!(featured.len(), 2);
        assert_eq!(featured[0].id().as_str(), "f-top");
        assert_eq!(featured[1].id().as_str(), "f-high");
    }
}
