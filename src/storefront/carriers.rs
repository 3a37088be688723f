// src/storefront/carriers.rs - Carrier presentation metadata

//! Per-carrier styling for network options.
//!
//! This is configuration data, not resolver algorithm: the resolver attaches
//! a style to each network option by name lookup and never branches on
//! carrier identity beyond that. Entries from `StorefrontConfig` extend and
//! override the built-in table.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Presentation metadata for one carrier name
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CarrierStyle {
    pub name: String,
    /// Foreground/text color
    pub color: String,
    /// Background fill
    pub background: String,
    /// Border color
    pub border: String,
}

impl CarrierStyle {
    pub fn new(name: &str, color: &str, background: &str, border: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
            background: background.to_string(),
            border: border.to_string(),
        }
    }

    /// Neutral gray used for any carrier name without a table entry
    pub fn neutral(name: &str) -> Self {
        Self::new(name, "#374151", "#f9fafb", "#e5e7eb")
    }
}

static BUILTIN: Lazy<Vec<CarrierStyle>> = Lazy::new(|| {
    vec![
        CarrierStyle::new("Unlocked", "#047857", "#ecfdf5", "#a7f3d0"),
        CarrierStyle::new("Verizon", "#b91c1c", "#fef2f2", "#fecaca"),
        CarrierStyle::new("AT&T", "#1d4ed8", "#eff6ff", "#bfdbfe"),
        CarrierStyle::new("T-Mobile", "#be185d", "#fdf2f8", "#fbcfe8"),
        CarrierStyle::new("Sprint", "#a16207", "#fefce8", "#fde68a"),
    ]
});

/// The built-in carrier table
pub fn builtin_styles() -> &'static [CarrierStyle] {
    &BUILTIN
}

/// Lookup table the resolver consults; built-ins merged with configured
/// entries, configured entries winning on name collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierTable {
    entries: Vec<CarrierStyle>,
}

impl Default for CarrierTable {
    fn default() -> Self {
        Self {
            entries: builtin_styles().to_vec(),
        }
    }
}

impl CarrierTable {
    /// Builds a table from the built-ins plus configured overrides
    pub fn with_overrides(overrides: &[CarrierStyle]) -> Self {
        let mut entries: Vec<CarrierStyle> = builtin_styles()
            .iter()
            .filter(|b| !overrides.iter().any(|o| o.name == b.name))
            .cloned()
            .collect();
        entries.extend(overrides.iter().cloned());
        Self { entries }
    }

    /// Style for a carrier name, neutral gray when unrecognized
    pub fn style_for(&self, name: &str) -> CarrierStyle {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .cloned()
            .unwrap_or_else(|| CarrierStyle::neutral(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = CarrierTable::default();
        let verizon = table.style_for("Verizon");
        assert_eq!(verizon.color, "#b91c1c");
    }

    #[test]
    fn test_unknown_carrier_gets_neutral_style() {
        let table = CarrierTable::default();
        let style = table.style_for("Rakuten Mobile");
        assert_eq!(style.name, "Rakuten Mobile");
        assert_eq!(style.background, "#f9fafb");
    }

    #[test]
    fn test_config_overrides_win() {
        let table = CarrierTable::with_overrides(&[CarrierStyle::new(
            "Verizon", "#000000", "#ffffff", "#cccccc",
        )]);
        assert_eq!(table.style_for("Verizon").color, "#000000");
        // non-overridden built-ins survive
        assert_eq!(table.style_for("Unlocked").color, "#047857");
    }
}
