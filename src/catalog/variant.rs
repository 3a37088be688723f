// src/catalog/variant.rs - Variant hierarchy records

//! The two-level variant hierarchy: `VariantName` is the top-level grouping
//! (conventionally "color"), `Variant` is a SKU-level record carrying one
//! value per template-declared attribute field plus price and stock.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Top-level variant grouping, parent of SKU-level `Variant` records.
///
/// Appears as a selectable "color" even when no child variants exist, in
/// which case its own stored price and stock stand in for the rollups.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VariantName {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub price: f64,
}

impl VariantName {
    /// The image shown when this color is selected, `main_image` preferred
    pub fn display_image(&self) -> Option<&str> {
        self.main_image
            .as_deref()
            .or(self.image.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

/// A SKU-level record.
///
/// Attribute values live in a key/value map keyed by the template's field
/// keys; values outside a field's declared options are accepted as-is (the
/// selector UI is the gatekeeper, not this type).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    pub variant_name_id: String,
    #[serde(flatten)]
    pub attributes: BTreeMap<String, String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image: Option<String>,
    /// Derived via the template, never hand-edited
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl Variant {
    /// Non-empty attribute value for a template field key
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }
}

/// Minimum positive price over a set of variants.
///
/// `None` when no variant carries a price above zero; callers fall back to
/// the parent record's stored price.
pub fn min_positive_price<'a>(variants: impl IntoIterator<Item = &'a Variant>) -> Option<f64> {
    variants
        .into_iter()
        .map(|v| v.price)
        .filter(|p| *p > 0.0)
        .fold(None, |acc, p| match acc {
            Some(min) if min <= p => Some(min),
            _ => Some(p),
        })
}

/// Total stock over a set of variants
pub fn total_stock<'a>(variants: impl IntoIterator<Item = &'a Variant>) -> u32 {
    variants.into_iter().map(|v| v.stock).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::template::{FIELD_NETWORK, FIELD_STORAGE};

    pub(crate) fn variant(id: &str, name_id: &str, price: f64, stock: u32) -> Variant {
        Variant {
            id: id.to_string(),
            variant_name_id: name_id.to_string(),
            attributes: BTreeMap::new(),
            price,
            stock,
            image: None,
            sku: None,
            active: true,
        }
    }

    #[test]
    fn test_attribute_filters_blank_values() {
        let mut v = variant("v1", "c1", 100.0, 3);
        v.attributes
            .insert(FIELD_STORAGE.to_string(), "128GB".to_string());
        v.attributes.insert(FIELD_NETWORK.to_string(), "  ".to_string());

        assert_eq!(v.attribute(FIELD_STORAGE), Some("128GB"));
        assert_eq!(v.attribute(FIELD_NETWORK), None);
        assert_eq!(v.attribute("productGrade"), None);
    }

    #[test]
    fn test_min_positive_price_skips_zero() {
        let variants = vec![
            variant("a", "c1", 0.0, 1),
            variant("b", "c1", 499.0, 1),
            variant("c", "c1", 399.0, 1),
        ];
        assert_eq!(min_positive_price(&variants), Some(399.0));
        assert_eq!(min_positive_price(&variants[..1]), None);
    }

    #[test]
    fn test_total_stock_sums() {
        let variants = vec![variant("a", "c1", 1.0, 4), variant("b", "c1", 1.0, 6)];
        assert_eq!(total_stock(&variants), 10);
    }

    #[test]
    fn test_variant_round_trips_camel_case() {
        let mut v = variant("v1", "color-1", 249.0, 2);
        v.attributes
            .insert(FIELD_STORAGE.to_string(), "64GB".to_string());
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["variantNameId"], "color-1");
        assert_eq!(json["storage"], "64GB");

        let back: Variant = serde_json::from_value(json).unwrap();
        assert_eq!(back, v);
    }
}
