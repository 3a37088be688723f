// src/config.rs - Storefront configuration

//! Configuration for the storefront shell.
//!
//! Supports multiple configuration formats (YAML, JSON, TOML) selected by
//! file extension, environment variable overrides with a `VENDORA_` prefix,
//! and validated defaults. Presentation data that is configuration rather
//! than algorithm (the per-carrier styling table) lives here as well.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::storefront::carriers::CarrierStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_extension(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Parse failure for a single configuration document
#[derive(Debug, thiserror::Error)]
pub enum ConfigParseError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Gallery behavior knobs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    /// Interval between automatic carousel advances
    pub auto_scroll_interval_ms: u64,
    /// Delay before the carousel is commanded to index 0 after a variant
    /// image promotion, giving the strip time to re-measure
    pub variant_jump_delay_ms: u64,
    /// How long the "copied" indicator stays visible after a copy-link
    pub copied_indicator_ms: u64,
    /// Fire a load probe for every gallery item when the sequence rebuilds
    pub preload_media: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            auto_scroll_interval_ms: 3000,
            variant_jump_delay_ms: 150,
            copied_indicator_ms: 2000,
            preload_media: true,
        }
    }
}

/// Display currency settings; conversion itself is an external service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
        }
    }
}

/// Top-level storefront configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct StorefrontConfig {
    pub gallery: GalleryConfig,
    pub currency: CurrencyConfig,
    /// Additional carrier presentation entries; these extend and override
    /// the built-in table (`storefront::carriers::builtin_styles`)
    pub carriers: Vec<CarrierStyle>,
}

impl StorefrontConfig {
    /// Loads configuration from a file, detecting the format by extension
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_extension(path).ok_or_else(|| {
            Error::config(format!(
                "unsupported configuration extension: {}",
                path.display()
            ))
        })?;

        let raw = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&raw, format)
            .map_err(|e| Error::config(format!("failed to parse {}", path.display())).caused_by(e))?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration document in the given format
    pub fn parse(raw: &str, format: ConfigFormat) -> std::result::Result<Self, ConfigParseError> {
        let config = match format {
            ConfigFormat::Yaml => serde_yaml::from_str(raw)?,
            ConfigFormat::Json => serde_json::from_str(raw)?,
            ConfigFormat::Toml => toml::from_str(raw)?,
        };
        Ok(config)
    }

    /// Applies `VENDORA_*` environment overrides to scalar settings
    pub fn apply_env_overrides(&mut self) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Some(v) = env_u64("VENDORA_AUTO_SCROLL_INTERVAL_MS") {
                self.gallery.auto_scroll_interval_ms = v;
            }
            if let Some(v) = env_u64("VENDORA_VARIANT_JUMP_DELAY_MS") {
                self.gallery.variant_jump_delay_ms = v;
            }
            if let Some(v) = env_u64("VENDORA_COPIED_INDICATOR_MS") {
                self.gallery.copied_indicator_ms = v;
            }
            if let Ok(v) = std::env::var("VENDORA_CURRENCY_CODE") {
                if !v.is_empty() {
                    self.currency.code = v;
                }
            }
            if let Ok(v) = std::env::var("VENDORA_CURRENCY_SYMBOL") {
                if !v.is_empty() {
                    self.currency.symbol = v;
                }
            }
        }
    }

    /// Validates settings that would break the UI if out of range
    pub fn validate(&self) -> Result<()> {
        let mut validation_errors = Vec::new();

        if self.gallery.auto_scroll_interval_ms < 250 {
            validation_errors
                .push("gallery.auto_scroll_interval_ms must be at least 250".to_string());
        }
        if self.currency.code.is_empty() {
            validation_errors.push("currency.code must not be empty".to_string());
        }
        for carrier in &self.carriers {
            if carrier.name.is_empty() {
                validation_errors.push("carriers[].name must not be empty".to_string());
            }
        }

        if validation_errors.is_empty() {
            Ok(())
        } else {
            Err(Error::new(
                crate::error::ErrorKind::Configuration {
                    key: None,
                    validation_errors,
                },
                "invalid storefront configuration",
            ))
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn env_u64(key: &str) -> Option<u64> {
    std::env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.gallery.auto_scroll_interval_ms, 3000);
        assert_eq!(config.gallery.copied_indicator_ms, 2000);
        assert!(config.gallery.preload_media);
        assert_eq!(config.currency.code, "USD");
        assert!(config.carriers.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_extension(Path::new("storefront.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_extension(Path::new("storefront.yml")),
            Some(ConfigFormat::Yaml)
        );
        assert_eq!(ConfigFormat::from_extension(Path::new("storefront.ini")), None);
    }

    #[test]
    fn test_parse_toml_partial() {
        let raw = r##"
[gallery]
auto_scroll_interval_ms = 5000

[[carriers]]
name = "Orange"
color = "#ff7900"
background = "#fff7ed"
border = "#fed7aa"
"##;
        let config = StorefrontConfig::parse(raw, ConfigFormat::Toml).unwrap();
        assert_eq!(config.gallery.auto_scroll_interval_ms, 5000);
        // untouched fields fall back to defaults
        assert_eq!(config.gallery.variant_jump_delay_ms, 150);
        assert_eq!(config.carriers.len(), 1);
        assert_eq!(config.carriers[0].name, "Orange");
    }

    #[test]
    fn test_validation_rejects_tight_interval() {
        let mut config = StorefrontConfig::default();
        config.gallery.auto_scroll_interval_ms = 10;
        assert!(config.validate().is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_env_overrides() {
        std::env::set_var("VENDORA_VARIANT_JUMP_DELAY_MS", "75");
        std::env::set_var("VENDORA_CURRENCY_SYMBOL", "€");

        let mut config = StorefrontConfig::default();
        config.apply_env_overrides();

        std::env::remove_var("VENDORA_VARIANT_JUMP_DELAY_MS");
        std::env::remove_var("VENDORA_CURRENCY_SYMBOL");

        assert_eq!(config.gallery.variant_jump_delay_ms, 75);
        assert_eq!(config.currency.symbol, "€");
        // unset vars leave defaults alone
        assert_eq!(config.gallery.copied_indicator_ms, 2000);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_from_file_round_trip() {
        use std::io::Write;

        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        write!(
            file,
            r#"{{"gallery": {{"auto_scroll_interval_ms": 4000}}}}"#
        )
        .unwrap();

        let config = StorefrontConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.gallery.auto_scroll_interval_ms, 4000);
        assert_eq!(config.currency.code, "USD");
    }
}
