// src/ui/components/gallery.rs - Unified media gallery component

//! Wires the gallery core (`storefront::gallery` + `storefront::viewer`) to
//! markup and the page services. The component owns the auto-scroll timer
//! and addresses the single live video element by id; all state transitions
//! go through `GalleryViewState`.

use dioxus::prelude::*;

use crate::catalog::product::{Model3dRef, ProductVideo};
use crate::error::{Error, MediaOperation};
use crate::storefront::gallery::{
    build_gallery, download_file_name, promote_variant_image, GalleryItem, MediaKind,
};
use crate::storefront::pricing::storage_display_value;
use crate::storefront::resolver::Resolution;
use crate::storefront::viewer::{GalleryViewState, ImageFilter};
use crate::ui::state::use_storefront;
use crate::ui::{ActiveTab, GalleryTabsHandle};

/// DOM id of the single live video element
pub const STAGE_VIDEO_ID: &str = "gallery-stage-video";

async fn sleep_ms(ms: u64) {
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

/// Snapshot of the live element's (current_time, duration, buffered)
#[cfg(target_arch = "wasm32")]
fn read_media_element() -> Option<(f64, f64, f64)> {
    use wasm_bindgen::JsCast;

    let media = web_sys::window()?
        .document()?
        .get_element_by_id(STAGE_VIDEO_ID)?
        .dyn_into::<web_sys::HtmlMediaElement>()
        .ok()?;
    let duration = media.duration();
    let ranges = media.buffered();
    let buffered = if ranges.length() > 0 {
        ranges.end(ranges.length() - 1).unwrap_or(0.0)
    } else {
        0.0
    };
    Some((
        media.current_time(),
        if duration.is_finite() { duration } else { 0.0 },
        buffered,
    ))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_media_element() -> Option<(f64, f64, f64)> {
    None
}

enum NavStep {
    Next,
    Previous,
    To(usize),
}

/// Replaces the sequence and reports the resulting position, plus the new
/// focus mode when the swap changed it (a 3D model landing under the cursor
/// forces focus).
fn commit_items(
    view: &mut GalleryViewState,
    items: Vec<GalleryItem>,
) -> (usize, usize, Option<bool>) {
    let focus_before = view.focus_mode();
    view.set_items(items);
    let focus_after = view.focus_mode();
    let focus_change = (focus_after != focus_before).then_some(focus_after);
    (view.current_index(), view.len(), focus_change)
}

/// Applies a navigation step and reports the index change (and any 3D-model
/// auto-focus it triggered) upward.
fn navigate(
    mut view: Signal<GalleryViewState>,
    on_index: EventHandler<(usize, usize)>,
    on_focus: EventHandler<bool>,
    step: NavStep,
) {
    let focus_before = view.peek().focus_mode();
    let changed = view.with_mut(|v| match step {
        NavStep::Next => v.next(),
        NavStep::Previous => v.previous(),
        NavStep::To(index) => v.scroll_to(index),
    });
    if changed {
        let (index, len) = {
            let v = view.peek();
            (v.current_index(), v.len())
        };
        on_index.call((index, len));
    }
    let focus_after = view.peek().focus_mode();
    if focus_after != focus_before {
        on_focus.call(focus_after);
    }
}

#[component]
pub fn MediaGallery(
    images: ReadOnlySignal<Vec<String>>,
    videos: ReadOnlySignal<Vec<ProductVideo>>,
    model_3d: ReadOnlySignal<Model3dRef>,
    /// Image promoted by a variant selection; moved to the front of the
    /// sequence and jumped to after a short re-measure delay
    #[props(default)]
    variant_image: ReadOnlySignal<Option<String>>,
    /// One-directional focus override from the parent
    #[props(default)]
    external_focus: ReadOnlySignal<Option<bool>>,
    /// Resolved configuration shown in the focus-mode summary panel
    #[props(default)]
    configuration: ReadOnlySignal<Option<Resolution>>,
    /// Display price for the configuration, resolved through the pricing
    /// chain by the parent
    #[props(default)]
    configured_price: ReadOnlySignal<Option<f64>>,
    tabs: GalleryTabsHandle,
    on_image_index_change: EventHandler<(usize, usize)>,
    on_focus_mode_change: EventHandler<bool>,
    on_product_details_click: EventHandler<()>,
) -> Element {
    let ctx = use_storefront();
    let services = ctx.services.clone();
    let gallery_cfg = ctx.config.gallery.clone();

    let mut view = use_signal(GalleryViewState::default);

    // the sequence is rebuilt whole whenever any media input changes
    let items = use_memo(move || {
        let image_list = match variant_image() {
            Some(promoted) => promote_variant_image(&images(), &promoted),
            None => images(),
        };
        build_gallery(&image_list, &videos(), &model_3d())
    });

    {
        let services = services.clone();
        let preload = gallery_cfg.preload_media;
        use_effect(move || {
            let items = items();
            if preload {
                let urls: Vec<String> = items.iter().map(|i| i.src.clone()).collect();
                services.preloader.preload(&urls);
            }
            let (index, len, focus_change) = view.with_mut(|v| commit_items(v, items));
            on_image_index_change.call((index, len));
            if let Some(focus) = focus_change {
                on_focus_mode_change.call(focus);
            }
        });
    }

    // variant promotion commands index 0 once the strip has re-measured
    {
        let delay = gallery_cfg.variant_jump_delay_ms;
        use_effect(move || {
            if variant_image().is_some() {
                spawn(async move {
                    sleep_ms(delay).await;
                    navigate(view, on_image_index_change, on_focus_mode_change, NavStep::To(0));
                });
            }
        });
    }

    // parent override of focus mode
    use_effect(move || {
        if let Some(focus) = external_focus() {
            let changed = view.with_mut(|v| v.apply_external_focus(focus));
            if changed {
                on_focus_mode_change.call(focus);
            }
        }
    });

    let toggle_auto_scroll = {
        let interval = gallery_cfg.auto_scroll_interval_ms;
        move |_| {
            if view.peek().auto_scroll() {
                view.with_mut(|v| v.disable_auto_scroll());
            } else {
                let epoch = view.with_mut(|v| v.enable_auto_scroll());
                spawn(async move {
                    loop {
                        sleep_ms(interval).await;
                        let focus_before = view.peek().focus_mode();
                        if !view.with_mut(|v| v.tick_auto_scroll(epoch)) {
                            break;
                        }
                        let (index, len, focus_after) = {
                            let v = view.peek();
                            (v.current_index(), v.len(), v.focus_mode())
                        };
                        on_image_index_change.call((index, len));
                        if focus_after != focus_before {
                            on_focus_mode_change.call(focus_after);
                        }
                    }
                });
            }
        }
    };

    let toggle_play = {
        let services = services.clone();
        move |_| {
            let playing = view.with_mut(|v| v.toggle_play());
            if playing {
                services.media.play(STAGE_VIDEO_ID);
            } else {
                services.media.pause(STAGE_VIDEO_ID);
            }
        }
    };

    let skip = {
        let services = services.clone();
        move |forward: bool| {
            view.with_mut(|v| {
                if forward {
                    v.skip_forward();
                } else {
                    v.skip_back();
                }
            });
            let position = view.peek().playback.current_time;
            services.media.set_current_time(STAGE_VIDEO_ID, position);
        }
    };

    let toggle_mute = {
        let services = services.clone();
        move |_| {
            let muted = view.with_mut(|v| v.toggle_mute());
            services.media.set_muted(STAGE_VIDEO_ID, muted);
        }
    };

    let set_volume = {
        let services = services.clone();
        move |evt: FormEvent| {
            if let Ok(volume) = evt.value().parse::<f64>() {
                view.with_mut(|v| v.set_volume(volume));
                services.media.set_volume(STAGE_VIDEO_ID, volume);
                if volume == 0.0 {
                    services.media.set_muted(STAGE_VIDEO_ID, true);
                }
            }
        }
    };

    let copy_link = {
        let services = services.clone();
        let indicator_ms = gallery_cfg.copied_indicator_ms;
        move |_| {
            let src = view.peek().current_item().map(|i| i.src.clone());
            if let Some(src) = src {
                services.clipboard.copy_text(&src);
                view.with_mut(|v| v.set_link_copied(true));
                spawn(async move {
                    sleep_ms(indicator_ms).await;
                    view.with_mut(|v| v.set_link_copied(false));
                });
            }
        }
    };

    let download = {
        let services = services.clone();
        move |_| {
            let target = view
                .peek()
                .current_item()
                .map(|i| (i.src.clone(), download_file_name(i)));
            if let Some((src, file_name)) = target {
                services.download.download(&src, &file_name);
            }
        }
    };

    let toggle_fullscreen = {
        let services = services.clone();
        move |_| {
            let fullscreen = view.with_mut(|v| v.toggle_fullscreen());
            if fullscreen {
                services.fullscreen.enter();
                services.scroll_lock.lock();
            } else {
                services.fullscreen.exit();
                services.scroll_lock.unlock();
            }
        }
    };

    let escape_fullscreen = {
        let services = services.clone();
        move |evt: KeyboardEvent| {
            if evt.key() == Key::Escape {
                let exited = view.with_mut(|v| v.exit_fullscreen());
                if exited {
                    services.fullscreen.exit();
                    services.scroll_lock.unlock();
                }
            }
        }
    };

    let tap_stage = move |_| {
        let changed = view.with_mut(|v| v.tap_stage());
        if changed {
            on_focus_mode_change.call(view.peek().focus_mode());
        }
    };

    let details_clicked = move |_| {
        let changed = view.with_mut(|v| v.details_clicked());
        if changed {
            on_focus_mode_change.call(true);
        }
        tabs.set_active_tab(ActiveTab::Description);
        on_product_details_click.call(());
    };

    let close_focus = move |_| {
        let changed = view.with_mut(|v| v.exit_focus());
        if changed {
            on_focus_mode_change.call(false);
        }
    };

    let v = view();
    let current = v.current_item().cloned();
    let item_list = v.items().to_vec();
    let price_formatter = services.price.clone();

    if v.is_empty() {
        return rsx! {
            div {
                class: "flex items-center justify-center h-80 bg-gray-100 rounded-lg text-gray-500",
                "No images or videos available"
            }
        };
    }

    rsx! {
        div {
            class: if v.fullscreen() {
                "fixed inset-0 z-50 bg-black flex flex-col p-6"
            } else {
                "space-y-3"
            },
            tabindex: 0,
            onkeydown: escape_fullscreen,

            // stage
            div {
                class: "relative flex items-center justify-center bg-gray-100 rounded-lg overflow-hidden h-96",

                match current.as_ref().map(|item| item.kind) {
                    Some(MediaKind::Image) => rsx! {
                        img {
                            class: "max-h-full max-w-full object-contain cursor-zoom-in",
                            style: {
                                let mut style = format!("transform: {};", v.transform_css());
                                if let Some(filter) = v.filter().css() {
                                    style.push_str(&format!(" filter: {};", filter));
                                }
                                style
                            },
                            src: current.as_ref().map(|i| i.src.clone()).unwrap_or_default(),
                            alt: "Product image",
                            onclick: tap_stage,
                            onerror: move |_| {
                                let src = view.peek().current_item().map(|i| i.src.clone()).unwrap_or_default();
                                let err = Error::media(src, MediaOperation::Load, "stage image failed to load");
                                tracing::warn!(%err, "media error swallowed");
                            },
                        }
                    },
                    Some(MediaKind::Video) => rsx! {
                        video {
                            id: STAGE_VIDEO_ID,
                            class: "max-h-full max-w-full",
                            src: current.as_ref().map(|i| i.src.clone()).unwrap_or_default(),
                            muted: v.playback.muted,
                            onloadedmetadata: move |_| {
                                if let Some((_, duration, _)) = read_media_element() {
                                    view.with_mut(|v| v.media_metadata_loaded(duration));
                                }
                            },
                            ontimeupdate: move |_| {
                                if let Some((time, _, buffered)) = read_media_element() {
                                    view.with_mut(|v| {
                                        v.media_time_update(time);
                                        v.media_progress(buffered);
                                    });
                                }
                            },
                            onended: move |_| view.with_mut(|v| v.media_ended()),
                            onerror: move |_| {
                                let src = view.peek().current_item().map(|i| i.src.clone()).unwrap_or_default();
                                let err = Error::media(src, MediaOperation::Playback, "stage video failed");
                                tracing::warn!(%err, "media error swallowed");
                            },
                        }
                    },
                    Some(MediaKind::Model3d) => rsx! {
                        div {
                            class: "flex flex-col items-center justify-center space-y-2 text-gray-600",
                            span { class: "text-5xl", "🧊" }
                            span { "Interactive 3D model" }
                            a {
                                class: "text-sm text-blue-600 hover:underline",
                                href: current.as_ref().map(|i| i.src.clone()).unwrap_or_default(),
                                target: "_blank",
                                "Open model"
                            }
                        }
                    },
                    None => rsx! { div {} },
                }

                // nav arrows
                if v.len() > 1 {
                    button {
                        class: "absolute left-2 top-1/2 -translate-y-1/2 bg-white/80 rounded-full w-9 h-9 shadow hover:bg-white",
                        onclick: move |_| navigate(view, on_image_index_change, on_focus_mode_change, NavStep::Previous),
                        "‹"
                    }
                    button {
                        class: "absolute right-2 top-1/2 -translate-y-1/2 bg-white/80 rounded-full w-9 h-9 shadow hover:bg-white",
                        onclick: move |_| navigate(view, on_image_index_change, on_focus_mode_change, NavStep::Next),
                        "›"
                    }
                }

                span {
                    class: "absolute bottom-2 right-3 text-xs bg-black/60 text-white rounded px-2 py-0.5",
                    "{v.current_index() + 1} / {v.len()}"
                }
            }

            // video transport controls
            if matches!(current.as_ref().map(|i| i.kind), Some(MediaKind::Video)) {
                div {
                    class: "flex items-center space-x-2 text-sm",
                    button {
                        class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                        onclick: toggle_play,
                        if v.playback.playing { "Pause" } else { "Play" }
                    }
                    button {
                        class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                        onclick: {
                            let mut skip = skip.clone();
                            move |_| skip(false)
                        },
                        "-10s"
                    }
                    button {
                        class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                        onclick: {
                            let mut skip = skip.clone();
                            move |_| skip(true)
                        },
                        "+10s"
                    }
                    button {
                        class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                        onclick: toggle_mute,
                        if v.playback.muted { "Unmute" } else { "Mute" }
                    }
                    input {
                        r#type: "range",
                        min: "0",
                        max: "1",
                        step: "0.05",
                        value: "{v.playback.volume}",
                        oninput: set_volume,
                    }
                    span {
                        class: "text-gray-500",
                        {crate::utils::format::video_timestamp(v.playback.current_time)}
                        " / "
                        {crate::utils::format::video_timestamp(v.playback.duration)}
                    }
                }
            }

            // image transform controls
            if matches!(current.as_ref().map(|i| i.kind), Some(MediaKind::Image)) {
                div {
                    class: "flex items-center space-x-2 text-sm",
                    button {
                        class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                        onclick: move |_| view.with_mut(|v| v.rotate()),
                        "Rotate"
                    }
                    button {
                        class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                        onclick: move |_| view.with_mut(|v| v.toggle_flip()),
                        "Flip"
                    }
                    button {
                        class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                        onclick: move |_| view.with_mut(|v| {
                            let zoom = v.zoom();
                            v.set_zoom(zoom + 0.25);
                        }),
                        "Zoom +"
                    }
                    button {
                        class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                        onclick: move |_| view.with_mut(|v| {
                            let zoom = v.zoom();
                            v.set_zoom(zoom - 0.25);
                        }),
                        "Zoom -"
                    }
                    select {
                        class: "px-2 py-1 rounded border border-gray-300",
                        onchange: move |evt| {
                            let filter = match evt.value().as_str() {
                                "grayscale" => ImageFilter::Grayscale,
                                "sepia" => ImageFilter::Sepia,
                                "brightness" => ImageFilter::Brightness,
                                "contrast" => ImageFilter::Contrast,
                                _ => ImageFilter::None,
                            };
                            view.with_mut(|v| v.set_filter(filter));
                        },
                        option { value: "none", "No filter" }
                        option { value: "grayscale", "Grayscale" }
                        option { value: "sepia", "Sepia" }
                        option { value: "brightness", "Brightness" }
                        option { value: "contrast", "Contrast" }
                    }
                }
            }

            // shared utilities
            div {
                class: "flex items-center space-x-2 text-sm",
                button {
                    class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                    onclick: download,
                    "Download"
                }
                button {
                    class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                    onclick: copy_link,
                    if v.link_copied() { "Copied!" } else { "Copy link" }
                }
                button {
                    class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                    onclick: toggle_fullscreen,
                    if v.fullscreen() { "Exit fullscreen" } else { "Fullscreen" }
                }
                button {
                    class: if v.auto_scroll() {
                        "px-2 py-1 rounded bg-blue-600 text-white"
                    } else {
                        "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300"
                    },
                    onclick: toggle_auto_scroll,
                    "Auto-play"
                }
                button {
                    class: "px-2 py-1 rounded bg-gray-200 hover:bg-gray-300",
                    onclick: details_clicked,
                    "Product Details"
                }
            }

            // thumbnails
            div {
                class: "flex space-x-2 overflow-x-auto",
                for item in item_list {
                    button {
                        key: "{item.index}",
                        class: if item.index == v.current_index() {
                            "flex-shrink-0 w-16 h-16 rounded border-2 border-blue-600 overflow-hidden"
                        } else {
                            "flex-shrink-0 w-16 h-16 rounded border border-gray-300 overflow-hidden hover:border-gray-400"
                        },
                        onclick: move |_| navigate(view, on_image_index_change, on_focus_mode_change, NavStep::To(item.index)),
                        match item.kind {
                            MediaKind::Image => rsx! {
                                img { class: "w-full h-full object-cover", src: "{item.src}" }
                            },
                            MediaKind::Video => rsx! {
                                div {
                                    class: "w-full h-full flex items-center justify-center bg-gray-800 text-white",
                                    "▶"
                                }
                            },
                            MediaKind::Model3d => rsx! {
                                div {
                                    class: "w-full h-full flex items-center justify-center bg-gray-200",
                                    "3D"
                                }
                            },
                        }
                    }
                }
            }

            // focus overlay with configuration summary
            if v.focus_mode() {
                div {
                    class: "fixed inset-0 z-40 bg-black/80 flex",
                    div {
                        class: "flex-1 flex items-center justify-center p-8",
                        if let Some(item) = current.as_ref() {
                            if item.kind == MediaKind::Image {
                                img {
                                    class: "max-h-full max-w-full object-contain",
                                    src: "{item.src}",
                                    onclick: tap_stage,
                                }
                            } else {
                                div {
                                    class: "text-white text-lg",
                                    "Immersive view"
                                }
                            }
                        }
                    }
                    button {
                        class: "absolute top-4 right-4 text-white text-2xl w-10 h-10 rounded-full bg-white/10 hover:bg-white/20",
                        onclick: close_focus,
                        "✕"
                    }
                    if v.show_configuration() {
                        if let Some(res) = configuration() {
                            div {
                                class: "w-80 bg-white p-6 overflow-y-auto",
                                div {
                                    class: "flex items-center justify-between mb-4",
                                    h3 { class: "text-lg font-semibold text-gray-900", "Your configuration" }
                                    button {
                                        class: "text-sm text-gray-400 hover:text-gray-600",
                                        onclick: move |_| view.with_mut(|v| v.hide_configuration()),
                                        "Hide"
                                    }
                                }
                                dl {
                                    class: "space-y-2 text-sm",
                                    ConfigRow { label: "Color", value: res.selection.color.clone().unwrap_or_else(|| "—".to_string()) }
                                    ConfigRow { label: "Storage", value: storage_display_value(res.selection.storage.as_deref()) }
                                    ConfigRow { label: "Network", value: res.selection.network.clone().unwrap_or_else(|| "—".to_string()) }
                                    ConfigRow { label: "Condition", value: res.selection.condition.clone().unwrap_or_else(|| "—".to_string()) }
                                }
                                if let Some(price) = configured_price() {
                                    p {
                                        class: "mt-4 text-xl font-bold text-gray-900",
                                        {price_formatter.format_price(price, None)}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ConfigRow(label: String, value: String) -> Element {
    rsx! {
        div {
            class: "flex justify-between",
            dt { class: "text-gray-500", "{label}" }
            dd { class: "font-medium text-gray-900", "{value}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_items_reports_forced_focus() {
        let mut view = GalleryViewState::default();

        // a model-only sequence lands the cursor on the 3D item, which
        // forces focus as part of the swap
        let items = build_gallery(&[], &[], &Model3dRef::Direct("m.glb".to_string()));
        let (index, len, focus_change) = commit_items(&mut view, items);
        assert_eq!((index, len), (0, 1));
        assert_eq!(focus_change, Some(true));

        // swapping in plain images leaves focus where it is; no re-report
        let items = build_gallery(&["a.jpg".to_string()], &[], &Model3dRef::None);
        let (_, len, focus_change) = commit_items(&mut view, items);
        assert_eq!(len, 1);
        assert_eq!(focus_change, None);
    }
}
