// src/storefront/resolver.rs - Cascading variant resolution

//! Derives the four cascading option lists (color, storage, network,
//! condition) from a product's flat variant records, re-running in full on
//! every selection change. Each level is filtered by every selection above
//! it in the fixed order color -> storage -> network -> condition; a
//! selection that is no longer present in its freshly computed list is
//! auto-corrected to the list's first entry, or cleared when the list is
//! empty. Cleared levels stop the cascade below them.

use serde::{Deserialize, Serialize};

use crate::catalog::product::Product;
use crate::catalog::template::{FIELD_CONDITION, FIELD_NETWORK, FIELD_STORAGE};
use crate::catalog::variant::{min_positive_price, total_stock, Variant};
use crate::storefront::carriers::{CarrierStyle, CarrierTable};

/// Network option flagged as bestseller
pub const BESTSELLER_NETWORK: &str = "Unlocked";
/// Condition option flagged as bestseller
pub const BESTSELLER_CONDITION: &str = "Brand New";

/// A selectable color, rolled up from its child variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorOption {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    pub image: Option<String>,
}

/// A selectable storage/condition value within the current filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelOption {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub is_bestseller: bool,
}

/// A selectable network value, with its carrier presentation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkOption {
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub is_bestseller: bool,
    pub style: CarrierStyle,
}

/// The four-level selection, by display name rather than id
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub color: Option<String>,
    pub storage: Option<String>,
    pub network: Option<String>,
    pub condition: Option<String>,
}

/// The resolved configuration surfaced to sibling components.
///
/// Carries the corrected selection, all four derived lists, and the
/// default-display-image side effect from an automatic color selection.
/// The `selected_*` accessors stand in for the accessor closures the
/// hosting page passes around.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resolution {
    pub selection: Selection,
    pub color_variants: Vec<ColorOption>,
    pub storage_variants: Vec<LevelOption>,
    pub network_variants: Vec<NetworkOption>,
    pub condition_variants: Vec<LevelOption>,
    /// Emitted when a color was auto-selected and carries an image
    pub default_display_image: Option<String>,
}

impl Resolution {
    pub fn selected_color_variant(&self) -> Option<&ColorOption> {
        let name = self.selection.color.as_deref()?;
        self.color_variants.iter().find(|c| c.name == name)
    }

    pub fn selected_storage_variant(&self) -> Option<&LevelOption> {
        let name = self.selection.storage.as_deref()?;
        self.storage_variants.iter().find(|s| s.name == name)
    }

    pub fn selected_network_variant(&self) -> Option<&NetworkOption> {
        let name = self.selection.network.as_deref()?;
        self.network_variants.iter().find(|n| n.name == name)
    }

    pub fn selected_condition_variant(&self) -> Option<&LevelOption> {
        let name = self.selection.condition.as_deref()?;
        self.condition_variants.iter().find(|c| c.name == name)
    }
}

/// Runs the full cascade for a product against the requested selection.
///
/// The eleven steps execute in a fixed order; each list derives only from
/// variant records matching every selection level above it.
pub fn resolve(product: &Product, requested: &Selection, carriers: &CarrierTable) -> Resolution {
    let mut selection = requested.clone();
    let mut default_display_image = None;

    // 1. color rollups from the variant-name records
    let color_variants: Vec<ColorOption> = product
        .variant_names
        .iter()
        .map(|vn| {
            let children: Vec<&Variant> = product.variants_of(&vn.id).collect();
            let price = min_positive_price(children.iter().copied()).unwrap_or(vn.price);
            let stock = if children.is_empty() {
                vn.stock
            } else {
                total_stock(children.iter().copied())
            };
            ColorOption {
                id: vn.id.clone(),
                name: vn.name.clone(),
                price,
                stock,
                image: vn.display_image().map(str::to_string),
            }
        })
        .collect();

    // 2. auto-select the first color; a fresh automatic selection with an
    //    image drives the gallery's default display image
    let color_valid = selection
        .color
        .as_deref()
        .map(|name| color_variants.iter().any(|c| c.name == name))
        .unwrap_or(false);
    if !color_valid {
        selection.color = color_variants.first().map(|c| c.name.clone());
        if let Some(first) = color_variants.first() {
            default_display_image = first.image.clone();
        }
    }

    // 3. narrow to the selected color's variants
    let selected_color_id = selection
        .color
        .as_deref()
        .and_then(|name| color_variants.iter().find(|c| c.name == name))
        .map(|c| c.id.clone());
    let variants_for_color: Vec<&Variant> = match &selected_color_id {
        Some(id) => product.variants.iter().filter(|v| &v.variant_name_id == id).collect(),
        None => product.variants.iter().collect(),
    };

    // 4./5. storage level: distinct first-seen values, first entry bestseller
    let storage_variants: Vec<LevelOption> = distinct_levels(&variants_for_color, FIELD_STORAGE)
        .into_iter()
        .enumerate()
        .map(|(i, (name, price, quantity))| LevelOption {
            name,
            price,
            quantity,
            is_bestseller: i == 0,
        })
        .collect();
    selection.storage = auto_correct(
        selection.storage.take(),
        storage_variants.iter().map(|s| s.name.as_str()),
    );

    // 6. narrow further by selected storage (unfiltered when the level is empty)
    let variants_for_storage =
        narrow(&variants_for_color, FIELD_STORAGE, selection.storage.as_deref());

    // 7./8. network level, with carrier presentation metadata
    let network_variants: Vec<NetworkOption> = distinct_levels(&variants_for_storage, FIELD_NETWORK)
        .into_iter()
        .map(|(name, price, quantity)| NetworkOption {
            is_bestseller: name == BESTSELLER_NETWORK,
            style: carriers.style_for(&name),
            name,
            price,
            quantity,
        })
        .collect();
    selection.network = auto_correct(
        selection.network.take(),
        network_variants.iter().map(|n| n.name.as_str()),
    );

    // 9. narrow by selected network
    let variants_for_network =
        narrow(&variants_for_storage, FIELD_NETWORK, selection.network.as_deref());

    // 10./11. condition level
    let condition_variants: Vec<LevelOption> = distinct_levels(&variants_for_network, FIELD_CONDITION)
        .into_iter()
        .map(|(name, price, quantity)| LevelOption {
            is_bestseller: name == BESTSELLER_CONDITION,
            name,
            price,
            quantity,
        })
        .collect();
    selection.condition = auto_correct(
        selection.condition.take(),
        condition_variants.iter().map(|c| c.name.as_str()),
    );

    Resolution {
        selection,
        color_variants,
        storage_variants,
        network_variants,
        condition_variants,
        default_display_image,
    }
}

/// Distinct non-empty values for an attribute field, in first-seen order,
/// each rolled up to (name, min positive price, total stock).
fn distinct_levels(variants: &[&Variant], field: &str) -> Vec<(String, f64, u32)> {
    let mut order: Vec<String> = Vec::new();
    for variant in variants {
        if let Some(value) = variant.attribute(field) {
            if !order.iter().any(|v| v == value) {
                order.push(value.to_string());
            }
        }
    }
    order
        .into_iter()
        .map(|name| {
            let matching: Vec<&Variant> = variants
                .iter()
                .copied()
                .filter(|v| v.attribute(field) == Some(name.as_str()))
                .collect();
            let price = min_positive_price(matching.iter().copied()).unwrap_or(0.0);
            let quantity = total_stock(matching.iter().copied());
            (name, price, quantity)
        })
        .collect()
}

/// Keeps the current selection when still present, falls back to the first
/// entry otherwise, and clears entirely when the list is empty.
fn auto_correct<'a>(
    current: Option<String>,
    mut available: impl Iterator<Item = &'a str> + Clone,
) -> Option<String> {
    match current {
        Some(value) if available.clone().any(|name| name == value) => Some(value),
        _ => available.next().map(str::to_string),
    }
}

/// Filters variants by a selected attribute value; no selection means no
/// filtering at this level.
fn narrow<'a>(variants: &[&'a Variant], field: &str, selected: Option<&str>) -> Vec<&'a Variant> {
    match selected {
        Some(value) => variants
            .iter()
            .copied()
            .filter(|v| v.attribute(field) == Some(value))
            .collect(),
        None => variants.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::mock;

    fn fixture() -> Product {
        mock::cascade_fixture()
    }

    #[test]
    fn test_initial_resolution_auto_selects_first_color() {
        let product = fixture();
        let res = resolve(&product, &Selection::default(), &CarrierTable::default());

        assert_eq!(res.selection.color.as_deref(), Some("Red"));
        // the first color carries an image, so it is emitted for the gallery
        assert_eq!(res.default_display_image.as_deref(), Some("red.jpg"));
        assert_eq!(res.selection.storage.as_deref(), Some("64GB"));
    }

    #[test]
    fn test_color_change_resets_stale_storage() {
        let product = fixture();
        let mut selection = Selection {
            color: Some("Red".to_string()),
            storage: Some("128GB".to_string()),
            ..Default::default()
        };
        let res = resolve(&product, &selection, &CarrierTable::default());
        assert_eq!(res.selection.storage.as_deref(), Some("128GB"));

        // Blue only comes in 256GB; the stale 128GB must not survive
        selection.color = Some("Blue".to_string());
        let res = resolve(&product, &selection, &CarrierTable::default());
        assert_eq!(res.selection.storage.as_deref(), Some("256GB"));
        assert!(res
            .storage_variants
            .iter()
            .all(|s| s.name != "128GB"));
    }

    #[test]
    fn test_network_list_derives_only_from_color_and_storage() {
        let product = fixture();
        let selection = Selection {
            color: Some("Red".to_string()),
            storage: Some("64GB".to_string()),
            ..Default::default()
        };
        let res = resolve(&product, &selection, &CarrierTable::default());

        // 64GB Red exists only Unlocked; the Verizon 128GB record must not leak in
        let names: Vec<_> = res.network_variants.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Unlocked"]);
    }

    #[test]
    fn test_bestseller_flags() {
        let product = fixture();
        let selection = Selection {
            color: Some("Red".to_string()),
            storage: Some("128GB".to_string()),
            ..Default::default()
        };
        let res = resolve(&product, &selection, &CarrierTable::default());

        let storage_best: Vec<_> = res
            .storage_variants
            .iter()
            .filter(|s| s.is_bestseller)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(storage_best, vec!["64GB"]); // first entry, by first-seen order

        let network_best: Vec<_> = res
            .network_variants
            .iter()
            .filter(|n| n.is_bestseller)
            .map(|n| n.name.as_str())
            .collect();
        assert_eq!(network_best, vec!["Unlocked"]);

        let condition_best: Vec<_> = res
            .condition_variants
            .iter()
            .filter(|c| c.is_bestseller)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(condition_best, vec!["Brand New"]);
    }

    #[test]
    fn test_color_without_variants_uses_stored_rollups() {
        let product = fixture();
        let res = resolve(&product, &Selection::default(), &CarrierTable::default());

        let gold = res
            .color_variants
            .iter()
            .find(|c| c.name == "Sunset Gold")
            .expect("zero-variant color still selectable");
        assert_eq!(gold.price, 299.0);
        assert_eq!(gold.stock, 5);
    }

    #[test]
    fn test_empty_storage_level_stops_cascade() {
        let product = fixture();
        let selection = Selection {
            color: Some("Sunset Gold".to_string()),
            storage: Some("64GB".to_string()),
            network: Some("Unlocked".to_string()),
            condition: Some("Good".to_string()),
        };
        let res = resolve(&product, &selection, &CarrierTable::default());

        assert!(res.storage_variants.is_empty());
        assert_eq!(res.selection.storage, None);
        assert!(res.network_variants.is_empty());
        assert_eq!(res.selection.network, None);
        assert!(res.condition_variants.is_empty());
        assert_eq!(res.selection.condition, None);
    }

    #[test]
    fn test_level_rollups_use_min_positive_price_and_summed_stock() {
        let product = fixture();
        let selection = Selection {
            color: Some("Red".to_string()),
            ..Default::default()
        };
        let res = resolve(&product, &selection, &CarrierTable::default());

        let storage_128 = res
            .storage_variants
            .iter()
            .find(|s| s.name == "128GB")
            .unwrap();
        // two 128GB records at 549 and 519; min positive wins, stock sums
        assert_eq!(storage_128.price, 519.0);
        assert_eq!(storage_128.quantity, 7);
    }

    #[test]
    fn test_unknown_carrier_gets_neutral_style() {
        let product = fixture();
        let selection = Selection {
            color: Some("Blue".to_string()),
            ..Default::default()
        };
        let res = resolve(&product, &selection, &CarrierTable::default());
        let carrier = res
            .network_variants
            .iter()
            .find(|n| n.name == "Koodo")
            .unwrap();
        assert_eq!(carrier.style.background, "#f9fafb");
        assert!(!carrier.is_bestseller);
    }

    #[test]
    fn test_accessors_follow_selection() {
        let product = fixture();
        let res = resolve(&product, &Selection::default(), &CarrierTable::default());
        assert_eq!(res.selected_color_variant().unwrap().name, "Red");
        assert_eq!(
            res.selected_storage_variant().unwrap().name,
            res.selection.storage.clone().unwrap()
        );
    }
}
