// src/platform/web.rs - Browser provider implementations

//! web-sys implementations of the page services. Every call is
//! fire-and-forget: a missing element, a rejected promise, or a browser
//! that withholds an API logs a warning and leaves the affordance inert.

use std::sync::Arc;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::config::StorefrontConfig;
use crate::platform::{
    ClipboardProvider, DownloadProvider, FullscreenProvider, ImagePreloader, MediaDriver,
    PageServices, ScrollLock, SimplePriceFormatter, ToastSink,
};

pub fn services(config: &StorefrontConfig) -> PageServices {
    PageServices {
        clipboard: Arc::new(WebClipboard),
        download: Arc::new(WebDownload),
        fullscreen: Arc::new(WebFullscreen),
        scroll_lock: Arc::new(WebScrollLock),
        media: Arc::new(WebMediaDriver),
        preloader: Arc::new(WebPreloader),
        toast: Arc::new(ConsoleToastSink),
        price: Arc::new(SimplePriceFormatter {
            symbol: config.currency.symbol.clone(),
        }),
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

struct WebClipboard;

impl ClipboardProvider for WebClipboard {
    fn copy_text(&self, text: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                tracing::warn!(?err, "clipboard write rejected");
            }
        });
    }
}

struct WebDownload;

impl DownloadProvider for WebDownload {
    fn download(&self, url: &str, file_name: &str) {
        let Some(document) = document() else {
            return;
        };
        let anchor = document
            .create_element("a")
            .ok()
            .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok());
        match anchor {
            Some(anchor) => {
                anchor.set_href(url);
                anchor.set_download(file_name);
                anchor.click();
            }
            None => tracing::warn!(url, "download anchor could not be created"),
        }
    }
}

struct WebFullscreen;

impl FullscreenProvider for WebFullscreen {
    fn enter(&self) {
        let element = document().and_then(|d| d.document_element());
        if let Some(element) = element {
            if let Err(err) = element.request_fullscreen() {
                tracing::warn!(?err, "fullscreen request rejected");
            }
        }
    }

    fn exit(&self) {
        if let Some(document) = document() {
            document.exit_fullscreen();
        }
    }
}

struct WebScrollLock;

impl WebScrollLock {
    fn set_overflow(value: &str) {
        let body = document().and_then(|d| d.body());
        if let Some(body) = body {
            if let Err(err) = body.style().set_property("overflow", value) {
                tracing::warn!(?err, "scroll lock style rejected");
            }
        }
    }
}

impl ScrollLock for WebScrollLock {
    fn lock(&self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&self) {
        Self::set_overflow("");
    }
}

struct WebMediaDriver;

impl WebMediaDriver {
    fn element(element_id: &str) -> Option<web_sys::HtmlMediaElement> {
        let element = document()?.get_element_by_id(element_id)?;
        element.dyn_into::<web_sys::HtmlMediaElement>().ok()
    }
}

impl MediaDriver for WebMediaDriver {
    fn play(&self, element_id: &str) {
        let Some(media) = Self::element(element_id) else {
            return;
        };
        match media.play() {
            Ok(promise) => {
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        tracing::warn!(?err, "media play rejected");
                    }
                });
            }
            Err(err) => tracing::warn!(?err, "media play failed"),
        }
    }

    fn pause(&self, element_id: &str) {
        if let Some(media) = Self::element(element_id) {
            if let Err(err) = media.pause() {
                tracing::warn!(?err, "media pause failed");
            }
        }
    }

    fn set_current_time(&self, element_id: &str, seconds: f64) {
        if let Some(media) = Self::element(element_id) {
            media.set_current_time(seconds);
        }
    }

    fn set_volume(&self, element_id: &str, volume: f64) {
        if let Some(media) = Self::element(element_id) {
            media.set_volume(volume);
        }
    }

    fn set_muted(&self, element_id: &str, muted: bool) {
        if let Some(media) = Self::element(element_id) {
            media.set_muted(muted);
        }
    }
}

struct WebPreloader;

impl ImagePreloader for WebPreloader {
    fn preload(&self, urls: &[String]) {
        for url in urls {
            // the probe resolves whether or not the asset loads
            match web_sys::HtmlImageElement::new() {
                Ok(img) => img.set_src(url),
                Err(err) => tracing::debug!(?err, "preload probe skipped"),
            }
        }
    }
}

struct ConsoleToastSink;

impl ToastSink for ConsoleToastSink {
    fn toast(&self, message: &str) {
        web_sys::console::info_1(&message.into());
    }
}
