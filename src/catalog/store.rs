// src/catalog/store.rs - In-memory catalog store

//! The storage boundary the UI talks to. Products live behind one lock;
//! seller-side edits go through `update_product`-style patches, and variant
//! name edits cascade to child variant records. A real deployment would put
//! a hosted backend behind `CatalogSource`; the demo ships the seeded mock.

use std::collections::HashMap;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::mock;
use crate::catalog::product::Product;
use crate::catalog::template::VariantTemplate;
use crate::catalog::variant::{Variant, VariantName};
use crate::error::{CatalogOperation, Error, Result};

static TEMPLATES: Lazy<HashMap<String, VariantTemplate>> = Lazy::new(|| {
    let smartphone = VariantTemplate::smartphone();
    HashMap::from([(smartphone.id.clone(), smartphone)])
});

/// Built-in variant template by id
pub fn template(id: &str) -> Option<&'static VariantTemplate> {
    TEMPLATES.get(id)
}

/// Partial update applied to a stored product; `None` fields are untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub discount_price: Option<Option<f64>>,
    pub images: Option<Vec<String>>,
    pub variants: Option<Vec<Variant>>,
    pub variant_names: Option<Vec<VariantName>>,
}

/// Async boundary to wherever products actually live
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn load_products(&self) -> Result<Vec<Product>>;
}

/// Demo source backed by the seeded catalog
#[derive(Debug, Default)]
pub struct MockCatalogSource;

#[async_trait]
impl CatalogSource for MockCatalogSource {
    async fn load_products(&self) -> Result<Vec<Product>> {
        Ok(mock::demo_products())
    }
}

#[derive(Debug, Default)]
pub struct CatalogStore {
    products: RwLock<Vec<Product>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Populates the store from a source, replacing current contents
    pub async fn load_from(&self, source: &dyn CatalogSource) -> Result<usize> {
        let products = source.load_products().await?;
        let count = products.len();
        *self.products.write() = products;
        tracing::info!(count, "catalog loaded");
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    pub fn products(&self) -> Vec<Product> {
        self.products.read().clone()
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.products.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn upsert(&self, product: Product) {
        let mut products = self.products.write();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product,
            None => products.push(product),
        }
    }

    /// Applies a patch to a stored product, the persistence call seller
    /// edits funnel through
    pub fn update_product(&self, id: &str, patch: ProductPatch) -> Result<Product> {
        let mut products = self.products.write();
        let product = products.iter_mut().find(|p| p.id == id).ok_or_else(|| {
            Error::catalog(
                Some(id.to_string()),
                CatalogOperation::Patch,
                "product not found",
            )
        })?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(description) = patch.description {
            product.description = Some(description);
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(discount_price) = patch.discount_price {
            product.discount_price = discount_price;
        }
        if let Some(images) = patch.images {
            product.images = images;
        }
        if let Some(variants) = patch.variants {
            product.variants = variants;
        }
        if let Some(variant_names) = patch.variant_names {
            product.variant_names = variant_names;
        }
        Ok(product.clone())
    }

    /// Seeds variant names from the product's template defaults. Products
    /// that already have variant names are left alone.
    pub fn seed_variant_names(&self, id: &str) -> Result<usize> {
        let mut products = self.products.write();
        let product = products.iter_mut().find(|p| p.id == id).ok_or_else(|| {
            Error::catalog(
                Some(id.to_string()),
                CatalogOperation::SeedVariantNames,
                "product not found",
            )
        })?;
        if !product.variant_names.is_empty() {
            return Ok(0);
        }
        let template = product
            .template_id
            .as_deref()
            .and_then(template)
            .ok_or_else(|| {
                Error::catalog(
                    Some(id.to_string()),
                    CatalogOperation::SeedVariantNames,
                    "product has no variant template",
                )
            })?;

        for seed in &template.default_variant_names {
            product.variant_names.push(VariantName {
                id: Uuid::new_v4().to_string(),
                name: seed.name.clone(),
                main_image: seed.image.clone(),
                image: None,
                stock: seed.stock,
                price: seed.price,
            });
        }
        Ok(template.default_variant_names.len())
    }

    /// Replaces a variant name record (seller edit of name/image/price/stock)
    pub fn update_variant_name(&self, id: &str, edited: VariantName) -> Result<()> {
        let mut products = self.products.write();
        let product = products.iter_mut().find(|p| p.id == id).ok_or_else(|| {
            Error::catalog(
                Some(id.to_string()),
                CatalogOperation::UpdateVariantName,
                "product not found",
            )
        })?;
        let slot = product
            .variant_names
            .iter_mut()
            .find(|vn| vn.id == edited.id)
            .ok_or_else(|| {
                Error::catalog(
                    Some(id.to_string()),
                    CatalogOperation::UpdateVariantName,
                    "variant name not found",
                )
            })?;
        *slot = edited;
        Ok(())
    }

    /// Deletes a variant name and cascades to every child variant record.
    /// Returns the number of cascaded variant deletions.
    pub fn delete_variant_name(&self, id: &str, variant_name_id: &str) -> Result<usize> {
        let mut products = self.products.write();
        let product = products.iter_mut().find(|p| p.id == id).ok_or_else(|| {
            Error::catalog(
                Some(id.to_string()),
                CatalogOperation::DeleteVariantName,
                "product not found",
            )
        })?;

        let before = product.variant_names.len();
        product.variant_names.retain(|vn| vn.id != variant_name_id);
        if product.variant_names.len() == before {
            return Err(Error::catalog(
                Some(id.to_string()),
                CatalogOperation::DeleteVariantName,
                "variant name not found",
            ));
        }

        let variants_before = product.variants.len();
        product
            .variants
            .retain(|v| v.variant_name_id != variant_name_id);
        Ok(variants_before - product.variants.len())
    }

    /// Regenerates every variant's SKU from the product's template
    pub fn regenerate_skus(&self, id: &str) -> Result<usize> {
        let mut products = self.products.write();
        let product = products.iter_mut().find(|p| p.id == id).ok_or_else(|| {
            Error::catalog(
                Some(id.to_string()),
                CatalogOperation::GenerateSku,
                "product not found",
            )
        })?;
        let template = product
            .template_id
            .as_deref()
            .and_then(template)
            .ok_or_else(|| {
                Error::catalog(
                    Some(id.to_string()),
                    CatalogOperation::GenerateSku,
                    "product has no variant template",
                )
            })?;

        let names: HashMap<String, String> = product
            .variant_names
            .iter()
            .map(|vn| (vn.id.clone(), vn.name.clone()))
            .collect();

        let mut updated = 0;
        for variant in &mut product.variants {
            let Some(parent) = names.get(&variant.variant_name_id) else {
                continue;
            };
            let sku = template.generate_sku(parent, |key| {
                variant.attributes.get(key).map(String::as_str)
            });
            variant.sku = Some(sku);
            updated += 1;
        }
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> CatalogStore {
        CatalogStore::with_products(mock::demo_products())
    }

    #[test]
    fn test_patch_updates_only_given_fields() {
        let store = store();
        let updated = store
            .update_product(
                "prod-aurora-x5",
                ProductPatch {
                    price: Some(589.0),
                    discount_price: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.price, 589.0);
        assert_eq!(updated.discount_price, None);
        assert_eq!(updated.name, "Aurora X5");
    }

    #[test]
    fn test_patch_missing_product_errors() {
        let store = store();
        assert!(store.update_product("nope", ProductPatch::default()).is_err());
    }

    #[test]
    fn test_delete_variant_name_cascades() {
        let store = store();
        let removed = store.delete_variant_name("prod-aurora-x5", "c-red").unwrap();
        assert_eq!(removed, 3);

        let product = store.product("prod-aurora-x5").unwrap();
        assert!(product.variant_name("c-red").is_none());
        assert!(product.variants.iter().all(|v| v.variant_name_id != "c-red"));
        // siblings untouched
        assert_eq!(product.variants_of("c-blue").count(), 2);
    }

    #[test]
    fn test_seed_variant_names_from_template() {
        let store = CatalogStore::with_products(vec![Product {
            variant_names: vec![],
            variants: vec![],
            ..mock::cascade_fixture()
        }]);
        let seeded = store.seed_variant_names("prod-aurora-x5").unwrap();
        assert_eq!(seeded, 2);

        // already-seeded products are not touched again
        assert_eq!(store.seed_variant_names("prod-aurora-x5").unwrap(), 0);

        let product = store.product("prod-aurora-x5").unwrap();
        assert_eq!(product.variant_names.len(), 2);
        assert_eq!(product.variant_names[0].name, "Midnight Black");
    }

    #[test]
    fn test_update_variant_name() {
        let store = store();
        let product = store.product("prod-aurora-x5").unwrap();
        let mut edited = product.variant_names[0].clone();
        edited.name = "Crimson".to_string();
        edited.stock = 99;

        store.update_variant_name("prod-aurora-x5", edited).unwrap();
        let product = store.product("prod-aurora-x5").unwrap();
        assert_eq!(product.variant_names[0].name, "Crimson");
        assert_eq!(product.variant_names[0].stock, 99);
    }

    #[test]
    fn test_regenerate_skus_uses_template_order() {
        let store = store();
        let updated = store.regenerate_skus("prod-aurora-x5").unwrap();
        assert_eq!(updated, 5);

        let product = store.product("prod-aurora-x5").unwrap();
        let red64 = product.variants.iter().find(|v| v.id == "v-red-64-unl").unwrap();
        assert_eq!(
            red64.sku.as_deref(),
            Some("PHN-RED-64GB-UNLOCKED-BRAND-NEW")
        );
    }

    #[tokio::test]
    async fn test_load_from_mock_source() {
        let store = CatalogStore::new();
        let count = store.load_from(&MockCatalogSource).await.unwrap();
        assert_eq!(count, 3);
        assert!(store.product("prod-pulse-buds").is_some());
    }
}
