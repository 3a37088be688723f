// src/platform/native.rs - Desktop provider implementations

//! On desktop the webview owns clipboard, fullscreen, scrolling, and media
//! playback, so most providers here only log the command they would have
//! issued. That keeps the call sites identical across platforms.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::platform::{
    ClipboardProvider, DownloadProvider, FullscreenProvider, ImagePreloader, MediaDriver,
    PageServices, ScrollLock, SimplePriceFormatter, ToastSink,
};

pub fn services(config: &StorefrontConfig) -> PageServices {
    PageServices {
        clipboard: Arc::new(NativeClipboard),
        download: Arc::new(NativeDownload),
        fullscreen: Arc::new(NativeFullscreen),
        scroll_lock: Arc::new(NativeScrollLock),
        media: Arc::new(NativeMediaDriver),
        preloader: Arc::new(NativePreloader),
        toast: Arc::new(LogToastSink),
        price: Arc::new(SimplePriceFormatter {
            symbol: config.currency.symbol.clone(),
        }),
    }
}

struct NativeClipboard;

impl ClipboardProvider for NativeClipboard {
    fn copy_text(&self, text: &str) {
        tracing::debug!(len = text.len(), "clipboard copy");
    }
}

struct NativeDownload;

impl DownloadProvider for NativeDownload {
    fn download(&self, url: &str, file_name: &str) {
        tracing::debug!(url, file_name, "download requested");
    }
}

struct NativeFullscreen;

impl FullscreenProvider for NativeFullscreen {
    fn enter(&self) {
        tracing::debug!("fullscreen enter");
    }

    fn exit(&self) {
        tracing::debug!("fullscreen exit");
    }
}

struct NativeScrollLock;

impl ScrollLock for NativeScrollLock {
    fn lock(&self) {
        tracing::debug!("scroll lock");
    }

    fn unlock(&self) {
        tracing::debug!("scroll unlock");
    }
}

struct NativeMediaDriver;

impl MediaDriver for NativeMediaDriver {
    fn play(&self, element_id: &str) {
        tracing::debug!(element_id, "media play");
    }

    fn pause(&self, element_id: &str) {
        tracing::debug!(element_id, "media pause");
    }

    fn set_current_time(&self, element_id: &str, seconds: f64) {
        tracing::debug!(element_id, seconds, "media seek");
    }

    fn set_volume(&self, element_id: &str, volume: f64) {
        tracing::debug!(element_id, volume, "media volume");
    }

    fn set_muted(&self, element_id: &str, muted: bool) {
        tracing::debug!(element_id, muted, "media mute");
    }
}

struct NativePreloader;

impl ImagePreloader for NativePreloader {
    fn preload(&self, urls: &[String]) {
        tracing::debug!(count = urls.len(), "preload probes");
    }
}

struct LogToastSink;

impl ToastSink for LogToastSink {
    fn toast(&self, message: &str) {
        tracing::info!(message, "toast");
    }
}
