// src/catalog/mock.rs - Seeded demo catalog

//! Deterministic demo data standing in for the hosted backend. The fixture
//! product exercises every cascade shape the storefront needs: a full
//! variant matrix, a partial matrix, and a color with no variant records.

use std::collections::BTreeMap;

use chrono::{Duration, TimeZone, Utc};

use crate::catalog::product::{Model3dRef, Product, ProductVideo};
use crate::catalog::reviews::{ProductQuestion, ProductReview};
use crate::catalog::template::{FIELD_CONDITION, FIELD_NETWORK, FIELD_STORAGE};
use crate::catalog::variant::{Variant, VariantName};

fn variant(
    id: &str,
    name_id: &str,
    storage: &str,
    network: &str,
    condition: &str,
    price: f64,
    stock: u32,
) -> Variant {
    let mut attributes = BTreeMap::new();
    attributes.insert(FIELD_STORAGE.to_string(), storage.to_string());
    attributes.insert(FIELD_NETWORK.to_string(), network.to_string());
    attributes.insert(FIELD_CONDITION.to_string(), condition.to_string());
    Variant {
        id: id.to_string(),
        variant_name_id: name_id.to_string(),
        attributes,
        price,
        stock,
        image: None,
        sku: None,
        active: true,
    }
}

fn color(id: &str, name: &str, image: Option<&str>, price: f64, stock: u32) -> VariantName {
    VariantName {
        id: id.to_string(),
        name: name.to_string(),
        main_image: image.map(str::to_string),
        image: None,
        stock,
        price,
    }
}

/// The product the resolver and pricing tests run against.
///
/// Red carries a full 64/128GB matrix, Blue comes only in 256GB (including
/// an unrecognized carrier), and Sunset Gold has no variant records at all.
pub fn cascade_fixture() -> Product {
    Product {
        id: "prod-aurora-x5".to_string(),
        name: "Aurora X5".to_string(),
        description: Some("Flagship smartphone with a 6.7\" display.".to_string()),
        price: 599.0,
        discount_price: Some(579.0),
        images: vec![
            "red.jpg".to_string(),
            "side.jpg".to_string(),
            "back.jpg".to_string(),
        ],
        variants: vec![
            variant("v-red-64-unl", "c-red", "64GB", "Unlocked", "Brand New", 499.0, 3),
            variant("v-red-128-unl", "c-red", "128GB", "Unlocked", "Brand New", 549.0, 4),
            variant("v-red-128-vzn", "c-red", "128GB", "Verizon", "Good", 519.0, 3),
            variant("v-blue-256-unl", "c-blue", "256GB", "Unlocked", "Brand New", 649.0, 2),
            variant("v-blue-256-koo", "c-blue", "256GB", "Koodo", "Excellent", 619.0, 1),
        ],
        variant_names: vec![
            color("c-red", "Red", Some("red.jpg"), 0.0, 0),
            color("c-blue", "Blue", Some("blue.jpg"), 0.0, 0),
            color("c-gold", "Sunset Gold", None, 299.0, 5),
        ],
        product_videos: vec![ProductVideo {
            video_url: "https://cdn.vendora.shop/aurora-x5/teaser.mp4".to_string(),
            title: Some("Aurora X5 in 60 seconds".to_string()),
            description: Some("Hands-on tour of the display and cameras.".to_string()),
            thumbnail: Some("teaser-thumb.jpg".to_string()),
        }],
        model_3d_url: Model3dRef::Wrapped("https://cdn.vendora.shop/aurora-x5/model.glb".to_string()),
        template_id: Some("smartphone".to_string()),
    }
}

/// The seeded demo catalog the UI boots with
pub fn demo_products() -> Vec<Product> {
    let mut aurora = cascade_fixture();
    aurora.images = vec![
        "https://cdn.vendora.shop/aurora-x5/front.jpg".to_string(),
        "https://cdn.vendora.shop/aurora-x5/side.jpg".to_string(),
        "https://cdn.vendora.shop/aurora-x5/back.jpg".to_string(),
    ];
    aurora.variant_names[0].main_image =
        Some("https://cdn.vendora.shop/aurora-x5/red.jpg".to_string());
    aurora.variant_names[1].main_image =
        Some("https://cdn.vendora.shop/aurora-x5/blue.jpg".to_string());

    let buds = Product {
        id: "prod-pulse-buds".to_string(),
        name: "Pulse Buds Pro".to_string(),
        description: Some("Noise-cancelling wireless earbuds.".to_string()),
        price: 129.0,
        discount_price: None,
        images: vec!["https://cdn.vendora.shop/pulse-buds/case.jpg".to_string()],
        variants: vec![],
        variant_names: vec![
            color("c-buds-white", "Chalk White", None, 129.0, 40),
            color("c-buds-black", "Graphite", None, 129.0, 22),
        ],
        product_videos: vec![],
        model_3d_url: Model3dRef::None,
        template_id: None,
    };

    // a listing with no media at all; the gallery renders its placeholder
    let bare = Product {
        id: "prod-drift-strap".to_string(),
        name: "Drift Watch Strap".to_string(),
        description: None,
        price: 24.0,
        discount_price: None,
        images: vec![],
        variants: vec![],
        variant_names: vec![],
        product_videos: vec![],
        model_3d_url: Model3dRef::None,
        template_id: None,
    };

    vec![aurora, buds, bare]
}

/// Demo reviews for a product page
pub fn demo_reviews(product_id: &str) -> Vec<ProductReview> {
    let base = Utc.with_ymd_and_hms(2026, 7, 1, 12, 0, 0).unwrap();
    vec![
        ProductReview {
            id: format!("{product_id}-r1"),
            product_id: product_id.to_string(),
            author: "Priya".to_string(),
            rating: 5,
            title: "Display is stunning".to_string(),
            body: "Upgraded from a three year old phone and the screen alone is worth it."
                .to_string(),
            verified_purchase: true,
            helpful_count: 14,
            created_at: base + Duration::days(40),
        },
        ProductReview {
            id: format!("{product_id}-r2"),
            product_id: product_id.to_string(),
            author: "Marcus".to_string(),
            rating: 4,
            title: "Great, battery could be better".to_string(),
            body: "Snappy and the camera is excellent. Battery gets me through most days."
                .to_string(),
            verified_purchase: true,
            helpful_count: 9,
            created_at: base + Duration::days(21),
        },
        ProductReview {
            id: format!("{product_id}-r3"),
            product_id: product_id.to_string(),
            author: "Dana".to_string(),
            rating: 3,
            title: "Solid but heavy".to_string(),
            body: "Performs well but noticeably heavier than my last phone.".to_string(),
            verified_purchase: false,
            helpful_count: 2,
            created_at: base + Duration::days(3),
        },
        ProductReview {
            id: format!("{product_id}-r4"),
            product_id: product_id.to_string(),
            author: "Theo".to_string(),
            rating: 5,
            title: "Best purchase this year".to_string(),
            body: "Arrived fast, exactly as described.".to_string(),
            verified_purchase: true,
            helpful_count: 21,
            created_at: base + Duration::days(55),
        },
    ]
}

/// Demo Q&A entries for a product page
pub fn demo_questions(product_id: &str) -> Vec<ProductQuestion> {
    let base = Utc.with_ymd_and_hms(2026, 6, 10, 9, 30, 0).unwrap();
    vec![
        ProductQuestion {
            id: format!("{product_id}-q1"),
            product_id: product_id.to_string(),
            question: "Does the unlocked model work on prepaid carriers?".to_string(),
            answer: Some("Yes, any GSM carrier works out of the box.".to_string()),
            asked_at: base,
            answered_at: Some(base + Duration::days(1)),
        },
        ProductQuestion {
            id: format!("{product_id}-q2"),
            product_id: product_id.to_string(),
            question: "Is a charger included in the box?".to_string(),
            answer: None,
            asked_at: base + Duration::days(12),
            answered_at: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_is_deterministic() {
        assert_eq!(cascade_fixture(), cascade_fixture());
        assert_eq!(demo_products(), demo_products());
    }

    #[test]
    fn test_fixture_covers_cascade_shapes() {
        let product = cascade_fixture();
        // full matrix color, partial color, variantless color
        assert_eq!(product.variant_names.len(), 3);
        assert_eq!(product.variants_of("c-red").count(), 3);
        assert_eq!(product.variants_of("c-blue").count(), 2);
        assert_eq!(product.variants_of("c-gold").count(), 0);
        assert!(product.model_3d_url.normalized().is_some());
    }

    #[test]
    fn test_demo_catalog_includes_media_free_listing() {
        let products = demo_products();
        let bare = products.iter().find(|p| p.id == "prod-drift-strap").unwrap();
        assert!(bare.images.is_empty());
        assert!(bare.product_videos.is_empty());
        assert_eq!(bare.model_3d_url.normalized(), None);
    }
}
