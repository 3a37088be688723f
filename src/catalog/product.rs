// src/catalog/product.rs - The consumed product record

use serde::{Deserialize, Serialize};

use crate::catalog::variant::{Variant, VariantName};

/// A product video as delivered by the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductVideo {
    pub video_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// A 3D model reference as it arrives over the wire.
///
/// The backend delivers this field in two shapes: a bare URL string, or a
/// wrapped value object `{"value": url}`. Anything else is treated as
/// absent. Normalization happens once at ingestion; downstream code only
/// ever sees `normalized()`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "serde_json::Value")]
pub enum Model3dRef {
    #[default]
    None,
    Direct(String),
    Wrapped(String),
}

impl Model3dRef {
    /// The model URL, `None` when absent or blank
    pub fn normalized(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Direct(url) | Self::Wrapped(url) => {
                let trimmed = url.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
        }
    }
}

impl From<serde_json::Value> for Model3dRef {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Self::Direct(s),
            serde_json::Value::Object(map) => match map.get("value") {
                Some(serde_json::Value::String(s)) => Self::Wrapped(s.clone()),
                _ => Self::None,
            },
            _ => Self::None,
        }
    }
}

impl Serialize for Model3dRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::None => serializer.serialize_none(),
            Self::Direct(url) => serializer.serialize_str(url),
            Self::Wrapped(url) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("value", url)?;
                map.end()
            }
        }
    }
}

/// The catalog record a product page consumes.
///
/// Field names mirror the hosted backend's snake_case payload; everything
/// optional defaults rather than erroring on absence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub discount_price: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub variant_names: Vec<VariantName>,
    #[serde(default)]
    pub product_videos: Vec<ProductVideo>,
    #[serde(default)]
    pub model_3d_url: Model3dRef,
    #[serde(default)]
    pub template_id: Option<String>,
}

impl Product {
    /// All variants belonging to a variant name
    pub fn variants_of<'a>(
        &'a self,
        variant_name_id: &'a str,
    ) -> impl Iterator<Item = &'a Variant> + 'a {
        self.variants
            .iter()
            .filter(move |v| v.variant_name_id == variant_name_id)
    }

    pub fn variant_name(&self, id: &str) -> Option<&VariantName> {
        self.variant_names.iter().find(|vn| vn.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_ref_unwraps_both_shapes() {
        let direct: Model3dRef = serde_json::from_value(serde_json::json!("https://m.glb")).unwrap();
        let wrapped: Model3dRef =
            serde_json::from_value(serde_json::json!({"value": "https://m.glb"})).unwrap();
        assert_eq!(direct.normalized(), Some("https://m.glb"));
        assert_eq!(wrapped.normalized(), Some("https://m.glb"));
    }

    #[test]
    fn test_model_ref_treats_garbage_as_absent() {
        for raw in [
            serde_json::json!(null),
            serde_json::json!({}),
            serde_json::json!(42),
            serde_json::json!(""),
            serde_json::json!({"value": 7}),
        ] {
            let model: Model3dRef = serde_json::from_value(raw).unwrap();
            assert_eq!(model.normalized(), None);
        }
    }

    #[test]
    fn test_product_deserializes_sparse_payload() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "name": "Aurora X5"
        }))
        .unwrap();
        assert_eq!(product.price, 0.0);
        assert!(product.images.is_empty());
        assert!(product.variants.is_empty());
        assert_eq!(product.model_3d_url, Model3dRef::None);
    }

    #[test]
    fn test_variants_of_filters_by_parent() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": "p1",
            "name": "Aurora X5",
            "variant_names": [
                {"id": "c1", "name": "Black"},
                {"id": "c2", "name": "Blue"}
            ],
            "variants": [
                {"id": "v1", "variantNameId": "c1", "price": 100.0},
                {"id": "v2", "variantNameId": "c2", "price": 120.0},
                {"id": "v3", "variantNameId": "c1", "price": 90.0}
            ]
        }))
        .unwrap();
        assert_eq!(product.variants_of("c1").count(), 2);
        assert_eq!(product.variant_name("c2").unwrap().name, "Blue");
    }
}
