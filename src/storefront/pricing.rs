// src/storefront/pricing.rs - Price and stock derivation

//! The deepest-wins display price lives here, defined once as an ordered
//! chain of fallback steps: condition, network, storage, color, product
//! discount price, product base price. The first step carrying a recorded
//! (positive) price wins. The summary panel, the variant picker, and the
//! seller inventory view all resolve through this chain.

use serde::{Deserialize, Serialize};

use crate::catalog::product::Product;
use crate::catalog::variant::Variant;
use crate::storefront::resolver::Resolution;

/// Authoritative display price for the current configuration
pub fn display_price(product: &Product, resolution: &Resolution) -> f64 {
    let chain = [
        resolution.selected_condition_variant().map(|c| c.price),
        resolution.selected_network_variant().map(|n| n.price),
        resolution.selected_storage_variant().map(|s| s.price),
        resolution.selected_color_variant().map(|c| c.price),
        product.discount_price,
        Some(product.price),
    ];
    chain
        .into_iter()
        .flatten()
        .find(|price| *price > 0.0)
        .unwrap_or(0.0)
}

/// Min/max over recorded variant prices
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn is_flat(&self) -> bool {
        (self.max - self.min).abs() < f64::EPSILON
    }
}

/// Range of positive prices across a variant set, `None` when no variant
/// carries a recorded price
pub fn price_range<'a>(variants: impl IntoIterator<Item = &'a Variant>) -> Option<PriceRange> {
    let mut range: Option<PriceRange> = None;
    for price in variants.into_iter().map(|v| v.price).filter(|p| *p > 0.0) {
        range = Some(match range {
            Some(r) => PriceRange {
                min: r.min.min(price),
                max: r.max.max(price),
            },
            None => PriceRange { min: price, max: price },
        });
    }
    range
}

/// Total sellable stock for a product: variant stock summed per color, with
/// a color's own stored stock standing in when it has no variant records.
pub fn stock_total(product: &Product) -> u32 {
    product
        .variant_names
        .iter()
        .map(|vn| {
            let mut children = product.variants_of(&vn.id).peekable();
            if children.peek().is_none() {
                vn.stock
            } else {
                children.map(|v| v.stock).sum()
            }
        })
        .sum()
}

/// Normalized storage label for display, with an em-dash placeholder when
/// no storage level exists ("128 gb" -> "128GB")
pub fn storage_display_value(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect(),
        _ => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock;
    use crate::storefront::carriers::CarrierTable;
    use crate::storefront::resolver::{resolve, Selection};

    #[test]
    fn test_deepest_wins_prefers_condition_price() {
        let product = mock::cascade_fixture();
        let selection = Selection {
            color: Some("Red".to_string()),
            storage: Some("128GB".to_string()),
            network: Some("Verizon".to_string()),
            condition: Some("Good".to_string()),
        };
        let res = resolve(&product, &selection, &CarrierTable::default());

        // Red / 128GB / Verizon / Good is the 519.0 record
        assert_eq!(display_price(&product, &res), 519.0);
    }

    #[test]
    fn test_color_only_price_falls_through_to_color() {
        let product = mock::cascade_fixture();
        let selection = Selection {
            color: Some("Sunset Gold".to_string()),
            ..Default::default()
        };
        let res = resolve(&product, &selection, &CarrierTable::default());

        // no storage/network/condition levels exist for this color
        assert!(res.storage_variants.is_empty());
        assert_eq!(display_price(&product, &res), 299.0);
    }

    #[test]
    fn test_chain_price_differs_from_color_rollup() {
        let product = mock::cascade_fixture();
        let selection = Selection {
            color: Some("Red".to_string()),
            storage: Some("128GB".to_string()),
            network: Some("Unlocked".to_string()),
            condition: Some("Brand New".to_string()),
        };
        let res = resolve(&product, &selection, &CarrierTable::default());

        // the configuration summary must not fall back to the color rollup
        // (min positive across Red's variants) once deeper levels are set
        let color_rollup = res.selected_color_variant().unwrap().price;
        assert_eq!(color_rollup, 499.0);
        assert_eq!(display_price(&product, &res), 549.0);
    }

    #[test]
    fn test_base_price_is_final_fallback() {
        let mut product = mock::cascade_fixture();
        product.variants.clear();
        product.variant_names.clear();
        product.discount_price = None;
        product.price = 777.0;
        let res = resolve(&product, &Selection::default(), &CarrierTable::default());
        assert_eq!(display_price(&product, &res), 777.0);

        product.discount_price = Some(700.0);
        let res = resolve(&product, &Selection::default(), &CarrierTable::default());
        assert_eq!(display_price(&product, &res), 700.0);
    }

    #[test]
    fn test_price_range() {
        let product = mock::cascade_fixture();
        let range = price_range(&product.variants).unwrap();
        assert_eq!(range.min, 499.0);
        assert_eq!(range.max, 649.0);
        assert!(!range.is_flat());

        assert!(price_range([].iter()).is_none());
    }

    #[test]
    fn test_stock_total_counts_variantless_colors() {
        let product = mock::cascade_fixture();
        // Red 3+4+3, Blue 2+1, Sunset Gold stored stock 5
        assert_eq!(stock_total(&product), 18);
    }

    #[test]
    fn test_storage_display_value_normalizes() {
        assert_eq!(storage_display_value(Some("128 gb")), "128GB");
        assert_eq!(storage_display_value(Some("1TB")), "1TB");
        assert_eq!(storage_display_value(None), "—");
        assert_eq!(storage_display_value(Some("  ")), "—");
    }
}
