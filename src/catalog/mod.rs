// src/catalog/mod.rs - Catalog domain

//! Catalog models and the in-memory store: products, the two-level variant
//! hierarchy, variant templates with SKU generation, reviews and Q&A, and
//! the seeded demo data the UI boots with.

pub mod mock;
pub mod product;
pub mod reviews;
pub mod store;
pub mod template;
pub mod variant;

pub use product::{Model3dRef, Product, ProductVideo};
pub use store::{CatalogSource, CatalogStore, MockCatalogSource, ProductPatch};
pub use template::{VariantAttributeField, VariantTemplate};
pub use variant::{Variant, VariantName};
