// src/catalog/template.rs - Variant templates and SKU generation

use serde::{Deserialize, Serialize};

use crate::utils::strings::sku_segment;

/// Attribute field key for the storage axis
pub const FIELD_STORAGE: &str = "storage";
/// Attribute field key for the network/carrier axis
pub const FIELD_NETWORK: &str = "networkStatus";
/// Attribute field key for the condition axis
pub const FIELD_CONDITION: &str = "productGrade";

/// A template-declared axis of variation.
///
/// Immutable once the template is loaded; `options` is the ordered list of
/// allowed string values a seller can pick for this field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantAttributeField {
    pub key: String,
    pub label: String,
    pub options: Vec<String>,
}

/// Seed entry used when a product adopts a template with no variant names yet
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedVariantName {
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub image: Option<String>,
}

/// A declared attribute value that is not among its field's options.
///
/// Reported for seller tooling; ingestion never rejects on membership.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionViolation {
    pub field_key: String,
    pub value: String,
}

/// Declares which attribute axes exist for a product category and how to
/// compose SKU strings. The first field conventionally plays the primary
/// differentiator role in display-name composition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantTemplate {
    pub id: String,
    pub name: String,
    pub sku_prefix: String,
    pub fields: Vec<VariantAttributeField>,
    #[serde(default)]
    pub default_variant_names: Vec<SeedVariantName>,
}

impl VariantTemplate {
    /// Looks up a declared field by key
    pub fn field(&self, key: &str) -> Option<&VariantAttributeField> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// First declared field, the primary differentiator
    pub fn primary_field(&self) -> Option<&VariantAttributeField> {
        self.fields.first()
    }

    /// Deterministic SKU from a variant name and one value per declared
    /// field, in declaration order. Missing values are skipped.
    pub fn generate_sku<'a>(
        &self,
        variant_name: &str,
        mut value_for: impl FnMut(&str) -> Option<&'a str>,
    ) -> String {
        let mut segments = vec![self.sku_prefix.clone(), sku_segment(variant_name)];
        for field in &self.fields {
            if let Some(value) = value_for(&field.key) {
                let segment = sku_segment(value);
                if !segment.is_empty() {
                    segments.push(segment);
                }
            }
        }
        segments.retain(|s| !s.is_empty());
        segments.join("-")
    }

    /// Display name composed from the variant name and the primary field
    /// value, e.g. "Midnight Black 128GB"
    pub fn compose_display_name<'a>(
        &self,
        variant_name: &str,
        mut value_for: impl FnMut(&str) -> Option<&'a str>,
    ) -> String {
        match self.primary_field().and_then(|f| value_for(&f.key)) {
            Some(primary) if !primary.trim().is_empty() => {
                format!("{} {}", variant_name, primary)
            }
            _ => variant_name.to_string(),
        }
    }

    /// Reports attribute values outside their field's declared options.
    /// Values for undeclared fields are reported against that field key too.
    pub fn membership_report(
        &self,
        values: impl IntoIterator<Item = (String, String)>,
    ) -> Vec<OptionViolation> {
        let mut violations = Vec::new();
        for (key, value) in values {
            if value.trim().is_empty() {
                continue;
            }
            let allowed = self
                .field(&key)
                .map(|f| f.options.iter().any(|o| o == &value))
                .unwrap_or(false);
            if !allowed {
                violations.push(OptionViolation {
                    field_key: key,
                    value,
                });
            }
        }
        violations
    }

    /// Built-in smartphone template: storage, network, condition axes
    pub fn smartphone() -> Self {
        Self {
            id: "smartphone".to_string(),
            name: "Smartphone".to_string(),
            sku_prefix: "PHN".to_string(),
            fields: vec![
                VariantAttributeField {
                    key: FIELD_STORAGE.to_string(),
                    label: "Storage".to_string(),
                    options: vec![
                        "64GB".to_string(),
                        "128GB".to_string(),
                        "256GB".to_string(),
                        "512GB".to_string(),
                        "1TB".to_string(),
                    ],
                },
                VariantAttributeField {
                    key: FIELD_NETWORK.to_string(),
                    label: "Network".to_string(),
                    options: vec![
                        "Unlocked".to_string(),
                        "Verizon".to_string(),
                        "AT&T".to_string(),
                        "T-Mobile".to_string(),
                    ],
                },
                VariantAttributeField {
                    key: FIELD_CONDITION.to_string(),
                    label: "Condition".to_string(),
                    options: vec![
                        "Brand New".to_string(),
                        "Excellent".to_string(),
                        "Good".to_string(),
                        "Fair".to_string(),
                    ],
                },
            ],
            default_variant_names: vec![
                SeedVariantName {
                    name: "Midnight Black".to_string(),
                    price: 0.0,
                    stock: 0,
                    image: None,
                },
                SeedVariantName {
                    name: "Glacier Blue".to_string(),
                    price: 0.0,
                    stock: 0,
                    image: None,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn values() -> HashMap<String, String> {
        HashMap::from([
            (FIELD_STORAGE.to_string(), "128GB".to_string()),
            (FIELD_NETWORK.to_string(), "Unlocked".to_string()),
            (FIELD_CONDITION.to_string(), "Brand New".to_string()),
        ])
    }

    #[test]
    fn test_sku_is_deterministic_and_ordered() {
        let template = VariantTemplate::smartphone();
        let values = values();
        let lookup = |key: &str| values.get(key).map(String::as_str);

        let first = template.generate_sku("Midnight Black", lookup);
        let second = template.generate_sku("Midnight Black", lookup);
        assert_eq!(first, second);
        assert_eq!(first, "PHN-MIDNIGHT-BLACK-128GB-UNLOCKED-BRAND-NEW");
    }

    #[test]
    fn test_sku_skips_missing_values() {
        let template = VariantTemplate::smartphone();
        let sku = template.generate_sku("Glacier Blue", |key| {
            (key == FIELD_STORAGE).then_some("256GB")
        });
        assert_eq!(sku, "PHN-GLACIER-BLUE-256GB");
    }

    #[test]
    fn test_display_name_uses_primary_field() {
        let template = VariantTemplate::smartphone();
        let values = values();
        let name =
            template.compose_display_name("Midnight Black", |key| {
                values.get(key).map(String::as_str)
            });
        assert_eq!(name, "Midnight Black 128GB");

        let bare = template.compose_display_name("Midnight Black", |_| None);
        assert_eq!(bare, "Midnight Black");
    }

    #[test]
    fn test_membership_report_accepts_and_reports() {
        let template = VariantTemplate::smartphone();
        let violations = template.membership_report(vec![
            (FIELD_STORAGE.to_string(), "3TB".to_string()),
            (FIELD_NETWORK.to_string(), "Unlocked".to_string()),
            ("colorway".to_string(), "Neo".to_string()),
        ]);
        assert_eq!(violations.len(), 2);
        assert!(violations.iter().any(|v| v.value == "3TB"));
        assert!(violations.iter().any(|v| v.field_key == "colorway"));
    }
}
