// src/platform/mod.rs - Page service abstraction

//! Platform collaborators the storefront page calls into: clipboard, file
//! download, fullscreen with body scroll-lock, the live media element, image
//! preloading, toasts, and price formatting.
//!
//! Every call is synchronous fire-and-forget from the caller's point of
//! view; failures are logged and swallowed so a broken platform feature
//! degrades to an inert affordance rather than a crash.

use std::sync::Arc;

use crate::config::StorefrontConfig;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Copies text to the system clipboard
pub trait ClipboardProvider: Send + Sync {
    fn copy_text(&self, text: &str);
}

/// Triggers a file download for a URL under a suggested file name
pub trait DownloadProvider: Send + Sync {
    fn download(&self, url: &str, file_name: &str);
}

/// Enters/leaves the platform's fullscreen presentation
pub trait FullscreenProvider: Send + Sync {
    fn enter(&self);
    fn exit(&self);
}

/// Disables/restores page scrolling while an overlay is up
pub trait ScrollLock: Send + Sync {
    fn lock(&self);
    fn unlock(&self);
}

/// Drives the single live media element, addressed by element id.
///
/// State flows the other way through the element's own event stream; the
/// driver only issues commands.
pub trait MediaDriver: Send + Sync {
    fn play(&self, element_id: &str);
    fn pause(&self, element_id: &str);
    fn set_current_time(&self, element_id: &str, seconds: f64);
    fn set_volume(&self, element_id: &str, volume: f64);
    fn set_muted(&self, element_id: &str, muted: bool);
}

/// Fires one load probe per URL; resolves regardless of success so one
/// broken asset never blocks the rest
pub trait ImagePreloader: Send + Sync {
    fn preload(&self, urls: &[String]);
}

/// Notification sink for transient user feedback
pub trait ToastSink: Send + Sync {
    fn toast(&self, message: &str);
}

/// Currency display; conversion is an external service upstream of this
pub trait PriceFormatter: Send + Sync {
    fn format_price(&self, amount: f64, bundle_price: Option<f64>) -> String;
}

/// Symbol-prefixed two-decimal formatter used on every platform
pub struct SimplePriceFormatter {
    pub symbol: String,
}

impl PriceFormatter for SimplePriceFormatter {
    fn format_price(&self, amount: f64, bundle_price: Option<f64>) -> String {
        match bundle_price {
            Some(bundle) => format!(
                "{}{:.2} ({}{:.2} with bundle)",
                self.symbol, amount, self.symbol, bundle
            ),
            None => format!("{}{:.2}", self.symbol, amount),
        }
    }
}

/// The provider bundle handed to the UI through context
#[derive(Clone)]
pub struct PageServices {
    pub clipboard: Arc<dyn ClipboardProvider>,
    pub download: Arc<dyn DownloadProvider>,
    pub fullscreen: Arc<dyn FullscreenProvider>,
    pub scroll_lock: Arc<dyn ScrollLock>,
    pub media: Arc<dyn MediaDriver>,
    pub preloader: Arc<dyn ImagePreloader>,
    pub toast: Arc<dyn ToastSink>,
    pub price: Arc<dyn PriceFormatter>,
}

impl std::fmt::Debug for PageServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageServices")
            .field("platform", &platform_name())
            .finish()
    }
}

impl PageServices {
    /// Builds the bundle for the current platform
    pub fn detect(config: &StorefrontConfig) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            native::services(config)
        }
        #[cfg(target_arch = "wasm32")]
        {
            web::services(config)
        }
    }
}

pub fn platform_name() -> &'static str {
    #[cfg(not(target_arch = "wasm32"))]
    {
        "desktop"
    }
    #[cfg(target_arch = "wasm32")]
    {
        "web"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_formatter() {
        let formatter = SimplePriceFormatter {
            symbol: "$".to_string(),
        };
        assert_eq!(formatter.format_price(499.0, None), "$499.00");
        assert_eq!(
            formatter.format_price(499.0, Some(948.5)),
            "$499.00 ($948.50 with bundle)"
        );
    }

    #[test]
    fn test_detect_builds_bundle() {
        let services = PageServices::detect(&StorefrontConfig::default());
        assert_eq!(services.price.format_price(1.0, None), "$1.00");
    }
}
